//! Structured descriptions of actions.
//!
//! [`ActionRenderer`] dispatches on the protocol of an action, then on its type, and maps the
//! action's fields onto an ordered list of [`Segment`]s. It never produces finished prose:
//! turning segments into text, markup or widgets is the job of a [`Present`] adapter such as
//! [`plain::PlainText`].
//!
//! Rendering is pure. Equal actions rendered with the same configuration give equal
//! descriptions, which is what [`cache::CachedRenderer`] builds on.

pub mod amount;
pub mod cache;
mod golembase;
pub mod plain;
pub mod segment;
pub mod uniswap;

use std::sync::Arc;

use tracing::{debug, instrument, trace, warn};

pub use self::segment::{Description, DetailLine, Segment};
use self::segment::AmountSegment;
use crate::{
    config::ChainConfig,
    display::opt,
    dto::RawAction,
    models::Action,
    render::amount::GroupedDecimalFormatter,
    traits::{AmountFormatter, DescribeAction},
};

/// Turns a [`Description`] into some final representation.
pub trait Present {
    type Output;

    fn present(&self, description: &Description) -> Self::Output;
}

#[derive(Debug, Clone)]
pub struct ActionRenderer<F = GroupedDecimalFormatter> {
    chain: ChainConfig,
    formatter: F,
}

impl ActionRenderer {
    pub fn new(chain: ChainConfig) -> Self {
        Self::with_formatter(chain, GroupedDecimalFormatter)
    }
}

impl<F: AmountFormatter> ActionRenderer<F> {
    pub fn with_formatter(chain: ChainConfig, formatter: F) -> Self {
        debug!(
            native_currency_symbol = opt(&chain.native_currency_symbol()),
            "Configured action renderer"
        );
        Self { chain, formatter }
    }

    /// Describes a typed action. Every action has a description.
    #[instrument(
        level = "trace",
        skip_all,
        fields(protocol = %action.protocol(), action_type = %action.action_type())
    )]
    pub fn render(&self, action: &Action) -> Description {
        let description = match action {
            Action::UniswapV3(action) => self.describe_uniswap_v3(action),
            Action::GolemBase(action) => golembase::describe_golembase(action),
        };
        trace!(
            segments = description.headline.len(),
            lines = description.lines.len(),
            "Rendered action"
        );
        description
    }

    /// Describes an action as received from the decoder.
    ///
    /// Returns `None` when the record cannot be turned into a known action, for example a
    /// protocol or type introduced by a newer decoder. Such records are logged and skipped
    /// rather than failing the surrounding display.
    pub fn render_raw(&self, raw: RawAction) -> Option<Description> {
        let protocol = raw.protocol.clone();
        let action_type = raw.action_type.clone();
        match Action::try_from(raw) {
            Ok(action) => Some(self.render(&action)),
            Err(err) if err.is_unrecognized_variant() => {
                warn!(%protocol, %action_type, "Skipping unrecognized action");
                None
            }
            Err(err) => {
                warn!(%protocol, %action_type, error = %err, "Skipping malformed action");
                None
            }
        }
    }

    fn amount(&self, raw: &str) -> Segment {
        Segment::Amount(AmountSegment {
            raw: raw.to_string(),
            formatted: self.formatter.format(raw),
        })
    }
}

impl<F: AmountFormatter> DescribeAction for ActionRenderer<F> {
    fn describe(&self, action: &Action) -> Arc<Description> {
        Arc::new(self.render(action))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        models::uniswap::{NftMintData, PoolActionData},
        traits::MockAmountFormatter,
    };

    fn all_actions() -> Vec<Action> {
        let pool = PoolActionData::new("1", "Ether", "", "2", "DAI", "0x6b17");
        vec![
            Action::mint(pool.clone()),
            Action::burn(pool.clone()),
            Action::collect(pool.clone()),
            Action::swap(pool),
            Action::mint_nft(NftMintData::new("Cats", "CAT", "0x1", "0x2", &["1"])),
            Action::entity_created("0xabc", 10),
            Action::entity_updated("0xabc", 20),
            Action::entity_deleted("0xabc"),
            Action::entity_ttl_extended("0xabc", 20, 30),
        ]
    }

    #[test_log::test]
    fn test_every_variant_is_described() {
        let renderer = ActionRenderer::new(ChainConfig::default());

        for action in all_actions() {
            let description = renderer.render(&action);

            assert!(!description.headline.is_empty(), "empty description for {action:?}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = ActionRenderer::new(ChainConfig::new(Some("ETH")));

        for action in all_actions() {
            assert_eq!(renderer.render(&action), renderer.render(&action.clone()));
        }
    }

    #[test]
    fn test_amounts_go_through_formatter() {
        let mut formatter = MockAmountFormatter::new();
        formatter
            .expect_format()
            .with(eq("1"))
            .times(1)
            .returning(|_| "one".to_string());
        formatter
            .expect_format()
            .with(eq("2"))
            .times(1)
            .returning(|_| "two".to_string());
        let renderer = ActionRenderer::with_formatter(ChainConfig::default(), formatter);

        let description = renderer.render(&all_actions()[0]);

        let formatted: Vec<&str> = description
            .segments()
            .filter_map(|segment| match segment {
                Segment::Amount(amount) => Some(amount.formatted.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(formatted, vec!["one", "two"]);
    }

    #[test_log::test]
    fn test_render_raw_unrecognized_variant() {
        let renderer = ActionRenderer::new(ChainConfig::default());

        assert_eq!(renderer.render_raw(RawAction::new("golembase", "swap", json!({}))), None);
        assert_eq!(renderer.render_raw(RawAction::new("sushiswap", "swap", json!({}))), None);
    }

    #[test_log::test]
    fn test_render_raw_malformed_data() {
        let renderer = ActionRenderer::new(ChainConfig::default());
        let raw = RawAction::new("uniswap_v3", "swap", json!({"amount0": "1"}));

        assert_eq!(renderer.render_raw(raw), None);
    }

    #[test]
    fn test_render_raw_known_variant() {
        let renderer = ActionRenderer::new(ChainConfig::default());
        let raw = RawAction::new(
            "golembase",
            "golembase_entity_created",
            json!({"entity_id": "0xabc", "expiration_block": 10}),
        );

        assert_eq!(
            renderer.render_raw(raw),
            Some(renderer.render(&Action::entity_created("0xabc", 10)))
        );
    }

    #[test]
    fn test_describe_matches_render() {
        let renderer = ActionRenderer::new(ChainConfig::default());
        let action = Action::entity_deleted("0xabc");

        assert_eq!(*renderer.describe(&action), renderer.render(&action));
    }
}
