pub mod error;
pub mod golembase;
pub mod uniswap;

use std::fmt;

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use strum_macros::{Display, EnumString};

use crate::dto::RawAction;
use golembase::{
    EntityDeletedData, EntityExpirationData, EntityTtlExtendedData, GolemBaseAction,
    GolemBaseActionType,
};
use uniswap::{NftMintData, PoolActionData, PoolActionType, UniswapV3Action, UniswapV3ActionType};

/// Address hash literal type to identify contracts/accounts on a blockchain. May be empty when
/// the decoder has no address for a side (e.g. the native currency).
pub type Address = String;

/// Identifier of a golembase ledger entity.
pub type EntityId = String;

/// Block height.
pub type BlockNumber = u64;

/// Identifier of a single non-fungible token within its collection.
pub type TokenId = String;

/// Currently supported blockchains.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Chain {
    #[default]
    Ethereum,
    Starknet,
    ZkSync,
    Arbitrum,
    Base,
    Bsc,
    Unichain,
}

impl Chain {
    /// Returns the display symbol of the chain's native currency.
    pub fn native_currency_symbol(&self) -> &'static str {
        match self {
            Chain::Ethereum |
            Chain::Starknet |
            Chain::ZkSync |
            Chain::Arbitrum |
            Chain::Base |
            Chain::Unichain => "ETH",
            Chain::Bsc => "BNB",
        }
    }
}

/// The on-chain system an action originates from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
pub enum Protocol {
    #[serde(rename = "uniswap_v3")]
    #[strum(serialize = "uniswap_v3")]
    UniswapV3,
    #[serde(rename = "golembase")]
    #[strum(serialize = "golembase")]
    GolemBase,
}

/// The `type` discriminant of an action, scoped by its protocol.
///
/// Type names are only meaningful together with their protocol, so parsing one always goes
/// through [`ActionType::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    UniswapV3(UniswapV3ActionType),
    GolemBase(GolemBaseActionType),
}

impl ActionType {
    /// Parses a raw type name within the namespace of `protocol`.
    pub fn parse(protocol: Protocol, raw: &str) -> Option<Self> {
        match protocol {
            Protocol::UniswapV3 => raw
                .parse::<UniswapV3ActionType>()
                .ok()
                .map(Self::UniswapV3),
            Protocol::GolemBase => raw
                .parse::<GolemBaseActionType>()
                .ok()
                .map(Self::GolemBase),
        }
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            ActionType::UniswapV3(_) => Protocol::UniswapV3,
            ActionType::GolemBase(_) => Protocol::GolemBase,
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::UniswapV3(t) => t.fmt(f),
            ActionType::GolemBase(t) => t.fmt(f),
        }
    }
}

impl Serialize for ActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A decoded summary of something a transaction did.
///
/// The protocol is the outer tag and the action type the inner one, so a combination such as a
/// golembase swap cannot be constructed. On the wire an action is the record
/// `{"protocol": .., "type": .., "data": {..}}`; decoding goes through [`RawAction`] and fails for
/// combinations this crate does not know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawAction")]
pub enum Action {
    UniswapV3(UniswapV3Action),
    GolemBase(GolemBaseAction),
}

impl Action {
    pub fn mint(data: PoolActionData) -> Self {
        UniswapV3Action::Pool(PoolActionType::Mint, data).into()
    }

    pub fn burn(data: PoolActionData) -> Self {
        UniswapV3Action::Pool(PoolActionType::Burn, data).into()
    }

    pub fn collect(data: PoolActionData) -> Self {
        UniswapV3Action::Pool(PoolActionType::Collect, data).into()
    }

    pub fn swap(data: PoolActionData) -> Self {
        UniswapV3Action::Pool(PoolActionType::Swap, data).into()
    }

    pub fn mint_nft(data: NftMintData) -> Self {
        UniswapV3Action::MintNft(data).into()
    }

    pub fn entity_created(entity_id: &str, expiration_block: BlockNumber) -> Self {
        GolemBaseAction::EntityCreated(EntityExpirationData::new(entity_id, expiration_block)).into()
    }

    pub fn entity_updated(entity_id: &str, expiration_block: BlockNumber) -> Self {
        GolemBaseAction::EntityUpdated(EntityExpirationData::new(entity_id, expiration_block)).into()
    }

    pub fn entity_deleted(entity_id: &str) -> Self {
        GolemBaseAction::EntityDeleted(EntityDeletedData::new(entity_id)).into()
    }

    pub fn entity_ttl_extended(
        entity_id: &str,
        old_expiration_block: BlockNumber,
        new_expiration_block: BlockNumber,
    ) -> Self {
        GolemBaseAction::EntityTtlExtended(EntityTtlExtendedData::new(
            entity_id,
            old_expiration_block,
            new_expiration_block,
        ))
        .into()
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            Action::UniswapV3(_) => Protocol::UniswapV3,
            Action::GolemBase(_) => Protocol::GolemBase,
        }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            Action::UniswapV3(action) => ActionType::UniswapV3(action.action_type()),
            Action::GolemBase(action) => ActionType::GolemBase(action.action_type()),
        }
    }
}

impl From<UniswapV3Action> for Action {
    fn from(value: UniswapV3Action) -> Self {
        Action::UniswapV3(value)
    }
}

impl From<GolemBaseAction> for Action {
    fn from(value: GolemBaseAction) -> Self {
        Action::GolemBase(value)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Action", 3)?;
        state.serialize_field("protocol", &self.protocol())?;
        state.serialize_field("type", &self.action_type())?;
        match self {
            Action::UniswapV3(UniswapV3Action::Pool(_, data)) => {
                state.serialize_field("data", data)?
            }
            Action::UniswapV3(UniswapV3Action::MintNft(data)) => {
                state.serialize_field("data", data)?
            }
            Action::GolemBase(GolemBaseAction::EntityCreated(data)) |
            Action::GolemBase(GolemBaseAction::EntityUpdated(data)) => {
                state.serialize_field("data", data)?
            }
            Action::GolemBase(GolemBaseAction::EntityDeleted(data)) => {
                state.serialize_field("data", data)?
            }
            Action::GolemBase(GolemBaseAction::EntityTtlExtended(data)) => {
                state.serialize_field("data", data)?
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn usdc_swap() -> Action {
        Action::swap(PoolActionData::new(
            "1.5",
            "Ether",
            "",
            "1000",
            "USDC",
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
        ))
    }

    #[rstest]
    #[case::uniswap("uniswap_v3", Some(Protocol::UniswapV3))]
    #[case::golembase("golembase", Some(Protocol::GolemBase))]
    #[case::unknown("uniswap_v4", None)]
    fn test_protocol_from_str(#[case] raw: &str, #[case] expected: Option<Protocol>) {
        assert_eq!(raw.parse::<Protocol>().ok(), expected);
    }

    #[rstest]
    #[case::swap(Protocol::UniswapV3, "swap", true)]
    #[case::mint_nft(Protocol::UniswapV3, "mint_nft", true)]
    #[case::entity_created(Protocol::GolemBase, "golembase_entity_created", true)]
    #[case::swap_is_not_golembase(Protocol::GolemBase, "swap", false)]
    #[case::entity_is_not_uniswap(Protocol::UniswapV3, "golembase_entity_deleted", false)]
    fn test_action_type_is_scoped_by_protocol(
        #[case] protocol: Protocol,
        #[case] raw: &str,
        #[case] known: bool,
    ) {
        let parsed = ActionType::parse(protocol, raw);

        assert_eq!(parsed.is_some(), known);
        if let Some(action_type) = parsed {
            assert_eq!(action_type.protocol(), protocol);
            assert_eq!(action_type.to_string(), raw);
        }
    }

    #[test]
    fn test_discriminants() {
        let swap = usdc_swap();
        let deleted = Action::entity_deleted("0xabc");

        assert_eq!(swap.protocol(), Protocol::UniswapV3);
        assert_eq!(swap.action_type().to_string(), "swap");
        assert_eq!(deleted.protocol(), Protocol::GolemBase);
        assert_eq!(deleted.action_type().to_string(), "golembase_entity_deleted");
    }

    #[test]
    fn test_serialize_wire_record() {
        let value = serde_json::to_value(usdc_swap()).unwrap();

        assert_eq!(
            value,
            json!({
                "protocol": "uniswap_v3",
                "type": "swap",
                "data": {
                    "amount0": "1.5",
                    "symbol0": "Ether",
                    "address0": "",
                    "amount1": "1000",
                    "symbol1": "USDC",
                    "address1": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                }
            })
        );
    }

    #[test]
    fn test_deserialize_wire_record() {
        let action: Action = serde_json::from_value(json!({
            "protocol": "golembase",
            "type": "golembase_entity_ttl_extended",
            "data": {
                "entity_id": "0xabc",
                "old_expiration_block": 100,
                "new_expiration_block": 150,
            }
        }))
        .unwrap();

        assert_eq!(action, Action::entity_ttl_extended("0xabc", 100, 150));
    }

    #[test]
    fn test_deserialize_unknown_variant_fails() {
        let res = serde_json::from_value::<Action>(json!({
            "protocol": "golembase",
            "type": "swap",
            "data": {},
        }));

        let err = res.unwrap_err().to_string();
        assert!(err.contains("swap"), "unexpected error: {err}");
    }

    #[rstest]
    #[case::ethereum(Chain::Ethereum, "ETH")]
    #[case::starknet(Chain::Starknet, "ETH")]
    #[case::arbitrum(Chain::Arbitrum, "ETH")]
    #[case::bsc(Chain::Bsc, "BNB")]
    fn test_chain_native_currency_symbol(#[case] chain: Chain, #[case] expected: &str) {
        assert_eq!(chain.native_currency_symbol(), expected);
    }

    #[test]
    fn test_chain_from_str() {
        assert_eq!("zksync".parse::<Chain>().unwrap(), Chain::ZkSync);
    }
}
