use tracing::debug;

use super::{
    segment::{
        AddressRef, Description, DetailLine, NftRef, ProtocolBadge, Segment, SegmentsBuilder,
        TokenRef,
    },
    ActionRenderer,
};
use crate::{
    models::uniswap::{
        NftMintData, PoolActionData, PoolActionType, PoolSide, UniswapV3Action,
        NATIVE_CURRENCY_MARKER,
    },
    traits::AmountFormatter,
};

pub const UNISWAP_V3_BADGE: ProtocolBadge = ProtocolBadge { icon: "uniswap", label: "Uniswap V3" };

/// Leading verb and trailing phrase of a pool action, e.g. `Added ... liquidity to`.
pub fn action_text(kind: PoolActionType) -> (&'static str, &'static str) {
    match kind {
        PoolActionType::Mint => ("Added", "liquidity to"),
        PoolActionType::Burn => ("Removed", "liquidity from"),
        PoolActionType::Collect => ("Collected", "from"),
        PoolActionType::Swap => ("Swapped", "on"),
    }
}

/// Word joining both sides: a swap trades one side *for* the other, every other pool action
/// moves one side *and* the other.
pub fn connective(kind: PoolActionType) -> &'static str {
    match kind {
        PoolActionType::Swap => "for",
        PoolActionType::Mint | PoolActionType::Burn | PoolActionType::Collect => "and",
    }
}

impl<F: AmountFormatter> ActionRenderer<F> {
    pub(super) fn describe_uniswap_v3(&self, action: &UniswapV3Action) -> Description {
        match action {
            UniswapV3Action::Pool(kind, data) => self.describe_pool_action(*kind, data),
            UniswapV3Action::MintNft(data) => describe_nft_mint(data),
        }
    }

    fn describe_pool_action(&self, kind: PoolActionType, data: &PoolActionData) -> Description {
        let (verb, phrase) = action_text(kind);
        let headline = SegmentsBuilder::new()
            .label(verb)
            .push(self.amount(&data.amount0))
            .push(Segment::Token(self.pool_token(data, PoolSide::Token0)))
            .label(connective(kind))
            .push(self.amount(&data.amount1))
            .push(Segment::Token(self.pool_token(data, PoolSide::Token1)))
            .label(phrase)
            .push(Segment::Badge(UNISWAP_V3_BADGE))
            .build();

        Description { headline, lines: Vec::new() }
    }

    fn pool_token(&self, data: &PoolActionData, side: PoolSide) -> TokenRef {
        let (_, symbol, address) = data.side(side);
        if symbol != NATIVE_CURRENCY_MARKER {
            return TokenRef::erc20(address, symbol);
        }

        let currency = self.chain.native_currency_symbol();
        if currency.is_none() {
            debug!(?side, "No native currency symbol configured, native token stays unnamed");
        }
        TokenRef::native(currency)
    }
}

fn describe_nft_mint(data: &NftMintData) -> Description {
    let headline = SegmentsBuilder::new()
        .label("Minted")
        .push(Segment::Token(TokenRef::collection(&data.address, &data.name, &data.symbol)))
        .label("to")
        .push(Segment::Address(AddressRef::new(&data.to)))
        .build();

    let lines = data
        .ids
        .iter()
        .map(|id| DetailLine {
            key: format!("{}{}", data.address, id),
            segments: SegmentsBuilder::new()
                .text("1")
                .label("of token ID")
                .push(Segment::Nft(NftRef { collection: data.address.clone(), id: id.clone() }))
                .build(),
        })
        .collect();

    Description { headline, lines }
}
