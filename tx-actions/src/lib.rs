//! Typed transaction actions and their structured descriptions.
//!
//! A transaction decoding service summarises what a transaction did as a list of actions, each
//! tagged by the protocol it belongs to and by an action type. This crate models those actions
//! as closed enums ([`models::Action`]) and turns each one into an ordered list of typed display
//! segments ([`render::Description`]) that a presentation layer can lay out however it likes.
//!
//! ```
//! use tx_actions::{
//!     config::ChainConfig,
//!     models::{uniswap::PoolActionData, Action},
//!     render::{plain::PlainText, ActionRenderer, Present},
//! };
//!
//! let action = Action::swap(PoolActionData::new("1.5", "Ether", "", "1000", "USDC", "0xA0b8"));
//! let renderer = ActionRenderer::new(ChainConfig::new(Some("ETH")));
//! let description = renderer.render(&action);
//!
//! assert_eq!(PlainText.present(&description), "Swapped 1.5 ETH for 1,000 USDC on Uniswap V3");
//! ```

pub mod config;
pub mod display;
pub mod dto;
pub mod models;
pub mod render;
pub mod traits;
