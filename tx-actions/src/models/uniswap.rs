//! Actions reported for the Uniswap V3 protocol.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::{Address, TokenId};

/// Symbol the decoder reports for the chain's native currency instead of a token symbol.
pub const NATIVE_CURRENCY_MARKER: &str = "Ether";

/// Wire names of every action type under `uniswap_v3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum UniswapV3ActionType {
    Mint,
    Burn,
    Collect,
    Swap,
    MintNft,
}

impl UniswapV3ActionType {
    /// Returns the pool action this type stands for, `None` for NFT mints.
    pub fn pool_action(&self) -> Option<PoolActionType> {
        match self {
            UniswapV3ActionType::Mint => Some(PoolActionType::Mint),
            UniswapV3ActionType::Burn => Some(PoolActionType::Burn),
            UniswapV3ActionType::Collect => Some(PoolActionType::Collect),
            UniswapV3ActionType::Swap => Some(PoolActionType::Swap),
            UniswapV3ActionType::MintNft => None,
        }
    }
}

/// Two-sided asset movements between a pool and a user. All of them share [`PoolActionData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PoolActionType {
    /// Liquidity added to a position.
    Mint,
    /// Liquidity removed from a position.
    Burn,
    /// Owed tokens collected from a position.
    Collect,
    Swap,
}

impl From<PoolActionType> for UniswapV3ActionType {
    fn from(value: PoolActionType) -> Self {
        match value {
            PoolActionType::Mint => UniswapV3ActionType::Mint,
            PoolActionType::Burn => UniswapV3ActionType::Burn,
            PoolActionType::Collect => UniswapV3ActionType::Collect,
            PoolActionType::Swap => UniswapV3ActionType::Swap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UniswapV3Action {
    Pool(PoolActionType, PoolActionData),
    MintNft(NftMintData),
}

impl UniswapV3Action {
    pub fn action_type(&self) -> UniswapV3ActionType {
        match self {
            UniswapV3Action::Pool(kind, _) => (*kind).into(),
            UniswapV3Action::MintNft(_) => UniswapV3ActionType::MintNft,
        }
    }
}

/// Both sides of a pool action. Amounts are decimal strings as reported by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolActionData {
    pub amount0: String,
    pub symbol0: String,
    pub address0: Address,
    pub amount1: String,
    pub symbol1: String,
    pub address1: Address,
}

impl PoolActionData {
    pub fn new(
        amount0: &str,
        symbol0: &str,
        address0: &str,
        amount1: &str,
        symbol1: &str,
        address1: &str,
    ) -> Self {
        Self {
            amount0: amount0.to_string(),
            symbol0: symbol0.to_string(),
            address0: address0.to_string(),
            amount1: amount1.to_string(),
            symbol1: symbol1.to_string(),
            address1: address1.to_string(),
        }
    }

    /// Returns the given side as `(amount, symbol, address)`.
    pub fn side(&self, side: PoolSide) -> (&str, &str, &str) {
        match side {
            PoolSide::Token0 => (&self.amount0, &self.symbol0, &self.address0),
            PoolSide::Token1 => (&self.amount1, &self.symbol1, &self.address1),
        }
    }
}

/// Selects one side of a [`PoolActionData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolSide {
    Token0,
    Token1,
}

/// Non-fungible tokens minted by a collection and sent to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NftMintData {
    pub name: String,
    pub symbol: String,
    pub address: Address,
    pub to: Address,
    pub ids: Vec<TokenId>,
}

impl NftMintData {
    pub fn new(name: &str, symbol: &str, address: &str, to: &str, ids: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            address: address.to_string(),
            to: to.to_string(),
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}
