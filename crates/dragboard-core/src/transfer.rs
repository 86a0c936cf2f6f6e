//! Drag transfer protocol
//!
//! The handshake by which a dragged project's identity moves from its source
//! column to a destination column. The payload carries exactly one value,
//! the project id, tagged with a plain-text media type; the destination
//! looks everything else up in the store. A gesture that ends without a drop
//! mutates nothing.

use serde::{Deserialize, Serialize};

use crate::project::ProjectId;
use crate::store::ProjectStore;

/// Media type tag for project-id payloads. Payloads carrying any other tag
/// are foreign and must be rejected by targets.
pub const ITEM_ID_MEDIA_TYPE: &str = "text/plain";

/// Allowed effect of a completed drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropEffect {
    /// The item moves; the source keeps no copy
    Move,
}

/// Payload carried for the duration of one drag gesture
///
/// Nothing persists between gestures; a payload is built at drag-start and
/// dropped with the gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Protocol tag identifying what `data` holds
    pub media_type: String,
    /// The transferred value, a project id in string form
    pub data: String,
    /// Declared transfer effect
    pub effect: DropEffect,
}

impl DragPayload {
    /// Build the payload for dragging one project
    pub fn for_item(id: ProjectId) -> Self {
        Self {
            media_type: ITEM_ID_MEDIA_TYPE.to_string(),
            data: id.to_string(),
            effect: DropEffect::Move,
        }
    }

    /// Check the protocol tag; the cheap accept test used on drag-over
    pub fn is_item_transfer(&self) -> bool {
        self.media_type == ITEM_ID_MEDIA_TYPE
    }

    /// Decode the carried project id.
    ///
    /// Foreign media types and malformed data decode to `None`; a bad
    /// payload degrades to "nothing happened", never an error.
    pub fn item_id(&self) -> Option<ProjectId> {
        if !self.is_item_transfer() {
            return None;
        }
        ProjectId::parse(&self.data).ok()
    }
}

/// Capability of a view that can originate a drag
pub trait DragSource {
    /// Begin a gesture; the payload for the current selection, if any
    fn drag_start(&self) -> Option<DragPayload>;

    /// End of the gesture, dropped or not. The default is a no-op: mutation
    /// only ever happens on a successful drop.
    fn drag_end(&mut self) {}
}

/// Capability of a view that can receive a drop
pub trait DragTarget {
    /// Accept test plus visual affordance; returns whether the payload is
    /// welcome here
    fn drag_over(&mut self, payload: &DragPayload) -> bool;

    /// Complete the gesture: extract the id and ask the store for the
    /// status transition
    fn drop_payload(&mut self, payload: &DragPayload, store: &mut ProjectStore);

    /// Revert the visual affordance without dropping
    fn drag_leave(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trips_id() {
        let id = ProjectId::new();
        let payload = DragPayload::for_item(id);
        assert!(payload.is_item_transfer());
        assert_eq!(payload.effect, DropEffect::Move);
        assert_eq!(payload.item_id(), Some(id));
    }

    #[test]
    fn test_foreign_media_type_is_rejected() {
        let payload = DragPayload {
            media_type: "application/json".to_string(),
            data: ProjectId::new().to_string(),
            effect: DropEffect::Move,
        };
        assert!(!payload.is_item_transfer());
        assert_eq!(payload.item_id(), None);
    }

    #[test]
    fn test_malformed_data_decodes_to_none() {
        let payload = DragPayload {
            media_type: ITEM_ID_MEDIA_TYPE.to_string(),
            data: "stale-or-corrupted".to_string(),
            effect: DropEffect::Move,
        };
        assert!(payload.is_item_transfer());
        assert_eq!(payload.item_id(), None);
    }
}
