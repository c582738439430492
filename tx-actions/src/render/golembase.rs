use super::segment::{Description, EntityRef, Segment, SegmentsBuilder};
use crate::models::golembase::GolemBaseAction;

pub(super) fn describe_golembase(action: &GolemBaseAction) -> Description {
    let entity = Segment::Entity(EntityRef::new(action.entity_id()));

    let headline = match action {
        GolemBaseAction::EntityCreated(data) => SegmentsBuilder::new()
            .text("Entity created:")
            .push(entity)
            .text("expiring at block")
            .block(data.expiration_block),
        GolemBaseAction::EntityUpdated(data) => SegmentsBuilder::new()
            .text("Entity updated:")
            .push(entity)
            .text("expiring at block")
            .block(data.expiration_block),
        GolemBaseAction::EntityDeleted(_) => SegmentsBuilder::new()
            .text("Entity deleted:")
            .push(entity),
        GolemBaseAction::EntityTtlExtended(data) => SegmentsBuilder::new()
            .text("Entity lifetime extended:")
            .push(entity)
            .text("from block")
            .block(data.old_expiration_block)
            .text("to block")
            .block(data.new_expiration_block),
    };

    Description { headline: headline.build(), lines: Vec::new() }
}
