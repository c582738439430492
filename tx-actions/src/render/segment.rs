//! Typed display segments.
//!
//! Segments carry data and display hints only. Layout, styling, icons and link targets other
//! than the entity route are left to the presentation layer.

use serde::Serialize;

use crate::models::{Address, BlockNumber, EntityId, TokenId};

/// How a presentation layer should shorten a long hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Truncation {
    /// Shorten depending on the available width.
    #[default]
    Dynamic,
    /// Always shorten to a fixed head and tail.
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenStandard {
    #[serde(rename = "ERC-20")]
    Erc20,
    #[serde(rename = "ERC-721")]
    Erc721,
}

/// A decimal amount, both as reported and as formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AmountSegment {
    pub raw: String,
    pub formatted: String,
}

/// Reference to a token contract, or to the chain's native currency when `address` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TokenRef {
    pub address: Option<Address>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub standard: TokenStandard,
    /// Whether the reference may link to the token page. Never true without an address.
    pub linkable: bool,
    pub copyable: bool,
    pub show_icon: bool,
}

impl TokenRef {
    /// Fungible token with a known contract, shown by name only.
    pub fn erc20(address: &str, name: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            name: Some(name.to_string()),
            symbol: None,
            standard: TokenStandard::Erc20,
            linkable: true,
            copyable: false,
            show_icon: false,
        }
    }

    /// The chain's native currency, which has no contract to link to.
    pub fn native(currency_symbol: Option<&str>) -> Self {
        Self {
            address: None,
            name: currency_symbol.map(str::to_string),
            symbol: None,
            standard: TokenStandard::Erc20,
            linkable: false,
            copyable: false,
            show_icon: false,
        }
    }

    /// NFT collection, shown with its icon and symbol.
    ///
    /// Tagged [`TokenStandard::Erc721`] since the minted ids are non-fungible. Presentation
    /// layers pick icons and links by standard, and an ERC-20 tag would point them at a
    /// fungible token page.
    pub fn collection(address: &str, name: &str, symbol: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            name: Some(name.to_string()),
            symbol: Some(symbol.to_string()),
            standard: TokenStandard::Erc721,
            linkable: true,
            copyable: false,
            show_icon: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AddressRef {
    pub hash: Address,
    pub truncation: Truncation,
    pub copyable: bool,
    pub show_icon: bool,
}

impl AddressRef {
    pub fn new(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            truncation: Truncation::Constant,
            copyable: false,
            show_icon: false,
        }
    }
}

/// A single token of an NFT collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NftRef {
    pub collection: Address,
    pub id: TokenId,
}

/// Reference to a golembase entity, linking to its entity page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityRef {
    pub id: EntityId,
    pub href: String,
    pub truncation: Truncation,
    pub copyable: bool,
}

impl EntityRef {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            href: format!("/golembase/entity/{id}"),
            truncation: Truncation::Constant,
            copyable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockRef {
    pub number: BlockNumber,
}

/// Protocol marker closing a description, e.g. the Uniswap logo followed by `Uniswap V3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProtocolBadge {
    pub icon: &'static str,
    pub label: &'static str,
}

/// One atomic unit of display output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Regular text.
    Text { text: String },
    /// Secondary, de-emphasised text such as verbs and connectives.
    Label { text: String },
    Amount(AmountSegment),
    Token(TokenRef),
    Address(AddressRef),
    Nft(NftRef),
    Entity(EntityRef),
    Block(BlockRef),
    Badge(ProtocolBadge),
}

impl Segment {
    pub fn text(text: &str) -> Self {
        Segment::Text { text: text.to_string() }
    }

    pub fn label(text: &str) -> Self {
        Segment::Label { text: text.to_string() }
    }

    pub fn block(number: BlockNumber) -> Self {
        Segment::Block(BlockRef { number })
    }

    /// Returns the text of plain text and label segments.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text { text } | Segment::Label { text } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A secondary line under the headline, identified by a key that stays stable across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DetailLine {
    pub key: String,
    pub segments: Vec<Segment>,
}

/// The complete description of one action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Description {
    pub headline: Vec<Segment>,
    pub lines: Vec<DetailLine>,
}

impl Description {
    /// All segments in display order: the headline first, then each detail line.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.headline.iter().chain(
            self.lines
                .iter()
                .flat_map(|line| line.segments.iter()),
        )
    }

    pub fn block_refs(&self) -> Vec<BlockNumber> {
        self.segments()
            .filter_map(|segment| match segment {
                Segment::Block(block) => Some(block.number),
                _ => None,
            })
            .collect()
    }

    pub fn token_refs(&self) -> Vec<&TokenRef> {
        self.segments()
            .filter_map(|segment| match segment {
                Segment::Token(token) => Some(token),
                _ => None,
            })
            .collect()
    }
}

/// Accumulates segments in display order.
#[derive(Debug, Default)]
pub struct SegmentsBuilder {
    segments: Vec<Segment>,
}

impl SegmentsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.push(Segment::text(text))
    }

    pub fn label(self, text: &str) -> Self {
        self.push(Segment::label(text))
    }

    pub fn block(self, number: BlockNumber) -> Self {
        self.push(Segment::block(number))
    }

    pub fn build(self) -> Vec<Segment> {
        self.segments
    }
}
