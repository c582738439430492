//! Single-line plain text presentation, used for logs and terminals.

use super::{
    segment::{Description, Segment, TokenRef, Truncation},
    Present,
};
use crate::display::truncate_hash;

/// Joins segments with single spaces. Detail lines follow the headline, separated by `; `.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

fn hash(value: &str, truncation: Truncation) -> String {
    match truncation {
        Truncation::Constant => truncate_hash(value),
        Truncation::Dynamic => value.to_string(),
    }
}

fn token_label(token: &TokenRef) -> String {
    [&token.name, &token.symbol, &token.address]
        .into_iter()
        .filter_map(|label| label.as_deref())
        .find(|label| !label.is_empty())
        .unwrap_or("Unnamed token")
        .to_string()
}

fn segment_text(segment: &Segment) -> String {
    match segment {
        Segment::Text { text } | Segment::Label { text } => text.clone(),
        Segment::Amount(amount) => amount.formatted.clone(),
        Segment::Token(token) => token_label(token),
        Segment::Address(address) => hash(&address.hash, address.truncation),
        Segment::Nft(nft) => format!("{}#{}", nft.collection, nft.id),
        Segment::Entity(entity) => hash(&entity.id, entity.truncation),
        Segment::Block(block) => block.number.to_string(),
        Segment::Badge(badge) => badge.label.to_string(),
    }
}

fn join(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(segment_text)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Present for PlainText {
    type Output = String;

    fn present(&self, description: &Description) -> String {
        std::iter::once(join(&description.headline))
            .chain(
                description
                    .lines
                    .iter()
                    .map(|line| join(&line.segments)),
            )
            .collect::<Vec<_>>()
            .join("; ")
    }
}
