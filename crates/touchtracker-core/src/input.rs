//! Input events the host UI layer feeds to the controller.

use crate::menu::MenuAction;
use crate::tracker::ContactId;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Phase of a continuous gesture (long press, pan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// Whether the gesture is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// Unified contact and gesture event.
///
/// Events for one contact arrive in order (began, moved*, ended or
/// cancelled); events for different contacts may interleave arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    ContactBegan {
        id: ContactId,
        position: Point,
    },
    ContactMoved {
        id: ContactId,
        position: Point,
        /// Contact velocity in points per second, if the host tracks it.
        #[serde(default)]
        velocity: Option<Vec2>,
    },
    ContactEnded {
        id: ContactId,
        position: Point,
    },
    ContactCancelled {
        id: ContactId,
    },
    /// The host invalidated every live contact.
    AllContactsCancelled,
    TapAt {
        position: Point,
    },
    DoubleTapAt {
        position: Point,
    },
    LongPress {
        phase: GesturePhase,
        position: Point,
    },
    /// Incremental pan translation since the previous pan event.
    PanDelta {
        phase: GesturePhase,
        delta: Vec2,
    },
    MenuSelected {
        action: MenuAction,
    },
}

impl InputEvent {
    /// The contact this event belongs to, for raw contact events.
    pub fn contact(&self) -> Option<ContactId> {
        match self {
            InputEvent::ContactBegan { id, .. }
            | InputEvent::ContactMoved { id, .. }
            | InputEvent::ContactEnded { id, .. }
            | InputEvent::ContactCancelled { id } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_events() {
        let json = r#"[
            { "type": "contact_began", "id": 1, "position": { "x": 0.0, "y": 0.0 } },
            { "type": "contact_moved", "id": 1, "position": { "x": 5.0, "y": 0.0 } },
            { "type": "long_press", "phase": "began", "position": { "x": 1.0, "y": 2.0 } },
            { "type": "menu_selected", "action": "delete" },
            { "type": "all_contacts_cancelled" }
        ]"#;
        let events: Vec<InputEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[1],
            InputEvent::ContactMoved {
                id: ContactId(1),
                position: Point::new(5.0, 0.0),
                velocity: None,
            }
        );
        assert_eq!(
            events[2],
            InputEvent::LongPress {
                phase: GesturePhase::Began,
                position: Point::new(1.0, 2.0),
            }
        );
        assert_eq!(events[4], InputEvent::AllContactsCancelled);
    }

    #[test]
    fn test_contact_accessor() {
        let ended = InputEvent::ContactEnded {
            id: ContactId(4),
            position: Point::ZERO,
        };
        assert_eq!(ended.contact(), Some(ContactId(4)));
        assert_eq!(InputEvent::TapAt { position: Point::ZERO }.contact(), None);
    }

    #[test]
    fn test_phase_is_finished() {
        assert!(GesturePhase::Ended.is_finished());
        assert!(GesturePhase::Cancelled.is_finished());
        assert!(!GesturePhase::Changed.is_finished());
    }
}
