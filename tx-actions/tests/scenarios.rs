use pretty_assertions::assert_eq;
use serde_json::json;
use tx_actions::{
    config::ChainConfig,
    dto::RawAction,
    models::{uniswap::UniswapV3Action, Action},
    render::{
        cache::CachedRenderer,
        plain::PlainText,
        segment::{AddressRef, AmountSegment, EntityRef, TokenRef},
        uniswap::UNISWAP_V3_BADGE,
        ActionRenderer, Present, Segment,
    },
    traits::DescribeAction,
};

fn renderer() -> ActionRenderer {
    ActionRenderer::new(ChainConfig::from_yaml_str("chain: ethereum").unwrap())
}

fn amount(raw: &str, formatted: &str) -> Segment {
    Segment::Amount(AmountSegment { raw: raw.to_string(), formatted: formatted.to_string() })
}

#[test]
fn test_swap_native_for_token() {
    let action: Action = serde_json::from_value(json!({
        "protocol": "uniswap_v3",
        "type": "swap",
        "data": {
            "amount0": "1.5",
            "symbol0": "Ether",
            "address0": "",
            "amount1": "1000",
            "symbol1": "USDC",
            "address1": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        }
    }))
    .unwrap();

    let description = renderer().render(&action);

    assert_eq!(
        description.headline,
        vec![
            Segment::label("Swapped"),
            amount("1.5", "1.5"),
            Segment::Token(TokenRef::native(Some("ETH"))),
            Segment::label("for"),
            amount("1000", "1,000"),
            Segment::Token(TokenRef::erc20("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "USDC")),
            Segment::label("on"),
            Segment::Badge(UNISWAP_V3_BADGE),
        ]
    );
    assert!(description.lines.is_empty());
}

#[test]
fn test_entity_ttl_extended() {
    let raw = RawAction::new(
        "golembase",
        "golembase_entity_ttl_extended",
        json!({"entity_id": "0xabc", "old_expiration_block": 100, "new_expiration_block": 150}),
    );

    let description = renderer()
        .render_raw(raw)
        .expect("known variant");

    assert_eq!(
        description.headline,
        vec![
            Segment::text("Entity lifetime extended:"),
            Segment::Entity(EntityRef::new("0xabc")),
            Segment::text("from block"),
            Segment::block(100),
            Segment::text("to block"),
            Segment::block(150),
        ]
    );
}

#[test]
fn test_nft_mint_without_ids() {
    let action: Action = serde_json::from_str(
        r#"{"protocol":"uniswap_v3","type":"mint_nft","data":{"name":"Cats","symbol":"CAT","address":"0x1","to":"0x2","ids":[]}}"#,
    )
    .unwrap();
    assert!(matches!(action, Action::UniswapV3(UniswapV3Action::MintNft(_))));

    let description = renderer().render(&action);

    assert_eq!(
        description.headline,
        vec![
            Segment::label("Minted"),
            Segment::Token(TokenRef::collection("0x1", "Cats", "CAT")),
            Segment::label("to"),
            Segment::Address(AddressRef::new("0x2")),
        ]
    );
    assert!(description.lines.is_empty());
}

#[test]
fn test_mixed_batch_skips_unknown_records() {
    let records: Vec<RawAction> = serde_json::from_value(json!([
        {"protocol": "golembase", "type": "golembase_entity_created", "data": {"entity_id": "0x1", "expiration_block": 10}},
        {"protocol": "golembase", "type": "golembase_entity_archived", "data": {"entity_id": "0x1"}},
        {"protocol": "uniswap_v3", "type": "burn", "data": {
            "amount0": "10", "symbol0": "DAI", "address0": "0x6b17",
            "amount1": "0.1", "symbol1": "Ether", "address1": ""
        }},
    ]))
    .unwrap();
    let renderer = renderer();

    let rendered: Vec<String> = records
        .into_iter()
        .filter_map(|raw| renderer.render_raw(raw))
        .map(|description| PlainText.present(&description))
        .collect();

    assert_eq!(
        rendered,
        vec![
            "Entity created: 0x1 expiring at block 10".to_string(),
            "Removed 10 DAI and 0.1 ETH liquidity from Uniswap V3".to_string(),
        ]
    );
}

#[test]
fn test_cached_renderer_round_trip() {
    let cached = CachedRenderer::new(renderer(), 16);
    let action = Action::entity_deleted("0xdead");

    let first = cached.describe(&action);
    let second = cached.describe(&action);

    assert_eq!(first, second);
    assert_eq!(PlainText.present(&first), "Entity deleted: 0xdead");
}
