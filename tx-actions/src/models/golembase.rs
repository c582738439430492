//! Actions reported for the golembase key-value ledger.
//!
//! Every ledger entity has a time-to-live expressed as the block height at which it expires.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::{BlockNumber, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum GolemBaseActionType {
    #[strum(serialize = "golembase_entity_created")]
    EntityCreated,
    #[strum(serialize = "golembase_entity_updated")]
    EntityUpdated,
    #[strum(serialize = "golembase_entity_deleted")]
    EntityDeleted,
    #[strum(serialize = "golembase_entity_ttl_extended")]
    EntityTtlExtended,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GolemBaseAction {
    /// A new entity was written.
    EntityCreated(EntityExpirationData),
    /// An existing entity's content was replaced, its expiration is restated.
    EntityUpdated(EntityExpirationData),
    EntityDeleted(EntityDeletedData),
    EntityTtlExtended(EntityTtlExtendedData),
}

impl GolemBaseAction {
    pub fn action_type(&self) -> GolemBaseActionType {
        match self {
            GolemBaseAction::EntityCreated(_) => GolemBaseActionType::EntityCreated,
            GolemBaseAction::EntityUpdated(_) => GolemBaseActionType::EntityUpdated,
            GolemBaseAction::EntityDeleted(_) => GolemBaseActionType::EntityDeleted,
            GolemBaseAction::EntityTtlExtended(_) => GolemBaseActionType::EntityTtlExtended,
        }
    }

    pub fn entity_id(&self) -> &EntityId {
        match self {
            GolemBaseAction::EntityCreated(data) | GolemBaseAction::EntityUpdated(data) => {
                &data.entity_id
            }
            GolemBaseAction::EntityDeleted(data) => &data.entity_id,
            GolemBaseAction::EntityTtlExtended(data) => &data.entity_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityExpirationData {
    pub entity_id: EntityId,
    pub expiration_block: BlockNumber,
}

impl EntityExpirationData {
    pub fn new(entity_id: &str, expiration_block: BlockNumber) -> Self {
        Self { entity_id: entity_id.to_string(), expiration_block }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityDeletedData {
    pub entity_id: EntityId,
}

impl EntityDeletedData {
    pub fn new(entity_id: &str) -> Self {
        Self { entity_id: entity_id.to_string() }
    }
}

/// Lifetime extension of an entity.
///
/// `new_expiration_block` is expected to be above `old_expiration_block`; the decoder is trusted
/// on this and it is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityTtlExtendedData {
    pub entity_id: EntityId,
    pub old_expiration_block: BlockNumber,
    pub new_expiration_block: BlockNumber,
}

impl EntityTtlExtendedData {
    pub fn new(
        entity_id: &str,
        old_expiration_block: BlockNumber,
        new_expiration_block: BlockNumber,
    ) -> Self {
        Self { entity_id: entity_id.to_string(), old_expiration_block, new_expiration_block }
    }
}
