//! Data Transfer Objects (or structs)
//!
//! The transaction decoding service delivers actions as loosely typed
//! `{"protocol": .., "type": .., "data": {..}}` records. [`RawAction`] mirrors that record as-is
//! so that a payload from a newer decoder can still be read, and then rejected explicitly,
//! instead of failing the whole response it arrived in.
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::{
    error::ActionError,
    golembase::{GolemBaseAction, GolemBaseActionType},
    uniswap::UniswapV3Action,
    Action, ActionType, Protocol,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    pub protocol: String,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl RawAction {
    pub fn new(protocol: &str, action_type: &str, data: serde_json::Value) -> Self {
        Self { protocol: protocol.to_string(), action_type: action_type.to_string(), data }
    }
}

fn decode<T: DeserializeOwned>(
    action_type: ActionType,
    data: serde_json::Value,
) -> Result<T, ActionError> {
    serde_json::from_value(data).map_err(|source| ActionError::InvalidData { action_type, source })
}

impl TryFrom<RawAction> for Action {
    type Error = ActionError;

    fn try_from(value: RawAction) -> Result<Self, Self::Error> {
        let protocol = value
            .protocol
            .parse::<Protocol>()
            .map_err(|_| ActionError::UnknownProtocol(value.protocol.clone()))?;
        let action_type = ActionType::parse(protocol, &value.action_type).ok_or_else(|| {
            ActionError::UnknownActionType { protocol, action_type: value.action_type.clone() }
        })?;

        let action: Action = match action_type {
            ActionType::UniswapV3(t) => match t.pool_action() {
                Some(kind) => UniswapV3Action::Pool(kind, decode(action_type, value.data)?).into(),
                None => UniswapV3Action::MintNft(decode(action_type, value.data)?).into(),
            },
            ActionType::GolemBase(GolemBaseActionType::EntityCreated) => {
                GolemBaseAction::EntityCreated(decode(action_type, value.data)?).into()
            }
            ActionType::GolemBase(GolemBaseActionType::EntityUpdated) => {
                GolemBaseAction::EntityUpdated(decode(action_type, value.data)?).into()
            }
            ActionType::GolemBase(GolemBaseActionType::EntityDeleted) => {
                GolemBaseAction::EntityDeleted(decode(action_type, value.data)?).into()
            }
            ActionType::GolemBase(GolemBaseActionType::EntityTtlExtended) => {
                GolemBaseAction::EntityTtlExtended(decode(action_type, value.data)?).into()
            }
        };
        Ok(action)
    }
}
