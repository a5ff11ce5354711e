//! Routes input events onto the line tracker.
//!
//! Gesture recognition itself (tap vs double tap, when a long press fires)
//! belongs to the host. The controller only decides what each recognized
//! event does to the drawing:
//! - raw contacts draw strokes, thickened by speed when configured
//! - a tap selects the nearest line and offers a Delete menu
//! - a double tap clears everything
//! - a long press picks up a line, pan deltas move it until release

use crate::config::TrackerConfig;
use crate::input::{GesturePhase, InputEvent};
use crate::menu::{MenuAction, MenuPresenter};
use crate::tracker::{ContactId, LineTracker, TrackerResult};
use kurbo::{Point, Vec2};

/// Actions offered for a tapped line.
const SELECTION_ACTIONS: &[MenuAction] = &[MenuAction::Delete];

/// Owns the tracker and the interaction state around it.
#[derive(Debug)]
pub struct DrawController<M: MenuPresenter> {
    tracker: LineTracker,
    config: TrackerConfig,
    menu: M,
    /// A long press picked up the selected line and pans now move it.
    dragging: bool,
}

impl<M: MenuPresenter> DrawController<M> {
    /// Create a controller with an empty tracker.
    pub fn new(config: TrackerConfig, menu: M) -> Self {
        Self {
            tracker: LineTracker::new(),
            config,
            menu,
            dragging: false,
        }
    }

    pub fn tracker(&self) -> &LineTracker {
        &self.tracker
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    /// Whether a long press is currently dragging a line.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply one event. Returns whether the drawing needs to be redrawn.
    pub fn handle(&mut self, event: InputEvent) -> TrackerResult<bool> {
        match event {
            InputEvent::ContactBegan { id, position } => Ok(self.contact_began(id, position)),
            InputEvent::ContactMoved {
                id,
                position,
                velocity,
            } => Ok(self.contact_moved(id, position, velocity)),
            InputEvent::ContactEnded { id, position } => {
                Ok(self.tracker.end_stroke(id, position).is_some())
            }
            InputEvent::ContactCancelled { id } => Ok(self.tracker.cancel_stroke(id).is_some()),
            InputEvent::AllContactsCancelled => Ok(self.tracker.cancel_all() > 0),
            InputEvent::TapAt { position } => self.tap(position),
            InputEvent::DoubleTapAt { .. } => {
                self.double_tap();
                Ok(true)
            }
            InputEvent::LongPress { phase, position } => self.long_press(phase, position),
            InputEvent::PanDelta { phase, delta } => self.pan(phase, delta),
            InputEvent::MenuSelected { action } => self.menu_selected(action),
        }
    }

    /// Apply events in order, stopping at the first error.
    pub fn handle_all(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> TrackerResult<usize> {
        let mut redraws = 0;
        for event in events {
            if self.handle(event)? {
                redraws += 1;
            }
        }
        Ok(redraws)
    }

    fn contact_began(&mut self, id: ContactId, position: Point) -> bool {
        if self.dragging {
            log::trace!("Ignoring {id} while dragging a line");
            return false;
        }
        self.tracker
            .begin_stroke(id, position, self.config.line_thickness);
        true
    }

    fn contact_moved(&mut self, id: ContactId, position: Point, velocity: Option<Vec2>) -> bool {
        let thickness = velocity.and_then(|v| self.config.thickness_for_speed(v.hypot()));
        self.tracker.update_stroke(id, position, thickness)
    }

    fn pick(&self, position: Point) -> Option<usize> {
        self.tracker
            .hit_test_with(position, self.config.hit_radius, self.config.hit_test)
    }

    fn tap(&mut self, position: Point) -> TrackerResult<bool> {
        let picked = self.pick(position);
        self.tracker.select(picked)?;
        if picked.is_some() {
            self.menu.show(position, SELECTION_ACTIONS);
        } else {
            self.menu.hide();
        }
        Ok(true)
    }

    fn double_tap(&mut self) {
        self.menu.hide();
        self.dragging = false;
        self.tracker.clear_all();
    }

    fn long_press(&mut self, phase: GesturePhase, position: Point) -> TrackerResult<bool> {
        match phase {
            GesturePhase::Began => {
                let picked = self.pick(position);
                self.tracker.select(picked)?;
                if let Some(index) = picked {
                    log::debug!("Picked up line {index}");
                    self.tracker.cancel_all();
                    self.dragging = true;
                }
                Ok(true)
            }
            GesturePhase::Changed => Ok(false),
            GesturePhase::Ended | GesturePhase::Cancelled => {
                self.dragging = false;
                self.tracker.select(None)?;
                Ok(true)
            }
        }
    }

    fn pan(&mut self, phase: GesturePhase, delta: Vec2) -> TrackerResult<bool> {
        if !self.dragging || phase.is_finished() {
            return Ok(false);
        }
        let Some(index) = self.tracker.selected() else {
            return Ok(false);
        };
        self.menu.hide();
        self.tracker.translate(index, delta)?;
        Ok(true)
    }

    fn menu_selected(&mut self, action: MenuAction) -> TrackerResult<bool> {
        match action {
            MenuAction::Delete => {
                self.menu.hide();
                let Some(index) = self.tracker.selected() else {
                    return Ok(false);
                };
                self.tracker.delete_at(index)?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HitTestMode;
    use crate::menu::MenuState;

    fn controller() -> DrawController<MenuState> {
        DrawController::new(TrackerConfig::default(), MenuState::new())
    }

    fn draw(controller: &mut DrawController<MenuState>, id: u64, from: Point, to: Point) {
        let id = ContactId(id);
        controller
            .handle(InputEvent::ContactBegan { id, position: from })
            .unwrap();
        controller
            .handle(InputEvent::ContactMoved {
                id,
                position: to,
                velocity: None,
            })
            .unwrap();
        controller
            .handle(InputEvent::ContactEnded { id, position: to })
            .unwrap();
    }

    #[test]
    fn test_contacts_draw_lines() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(c.tracker().finished().len(), 1);
        assert!((c.tracker().finished()[0].thickness - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_velocity_thickens_stroke() {
        let config = TrackerConfig {
            velocity_scale: 0.01,
            ..TrackerConfig::default()
        };
        let mut c = DrawController::new(config, MenuState::new());
        let id = ContactId(1);
        c.handle(InputEvent::ContactBegan {
            id,
            position: Point::ZERO,
        })
        .unwrap();
        c.handle(InputEvent::ContactMoved {
            id,
            position: Point::new(50.0, 0.0),
            velocity: Some(Vec2::new(1200.0, 1600.0)),
        })
        .unwrap();
        c.handle(InputEvent::ContactMoved {
            id,
            position: Point::new(60.0, 0.0),
            velocity: Some(Vec2::new(100.0, 0.0)),
        })
        .unwrap();
        let line = c.tracker().active_line(id).unwrap();
        // Speed 2000 gives 30; the slower move does not thin it back down.
        assert!((line.thickness - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_ignored_when_disabled() {
        let mut c = controller();
        let id = ContactId(1);
        c.handle(InputEvent::ContactBegan {
            id,
            position: Point::ZERO,
        })
        .unwrap();
        c.handle(InputEvent::ContactMoved {
            id,
            position: Point::new(50.0, 0.0),
            velocity: Some(Vec2::new(5000.0, 0.0)),
        })
        .unwrap();
        assert!((c.tracker().active_line(id).unwrap().thickness - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tap_selects_and_shows_menu() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        assert!(c.handle(InputEvent::TapAt { position: Point::new(50.0, 5.0) }).unwrap());
        assert_eq!(c.tracker().selected(), Some(0));
        assert_eq!(c.menu().anchor, Some(Point::new(50.0, 5.0)));
        assert_eq!(c.menu().actions, vec![MenuAction::Delete]);

        c.handle(InputEvent::TapAt { position: Point::new(50.0, 80.0) }).unwrap();
        assert_eq!(c.tracker().selected(), None);
        assert!(!c.menu().is_visible());
    }

    #[test]
    fn test_menu_delete_removes_selected_line() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        draw(&mut c, 2, Point::new(0.0, 100.0), Point::new(100.0, 100.0));
        c.handle(InputEvent::TapAt { position: Point::new(50.0, 100.0) }).unwrap();

        assert!(c.handle(InputEvent::MenuSelected { action: MenuAction::Delete }).unwrap());
        assert_eq!(c.tracker().finished().len(), 1);
        assert_eq!(c.tracker().finished()[0].begin, Point::new(0.0, 0.0));
        assert_eq!(c.tracker().selected(), None);
        assert!(!c.menu().is_visible());
    }

    #[test]
    fn test_menu_delete_without_selection_is_noop() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(!c.handle(InputEvent::MenuSelected { action: MenuAction::Delete }).unwrap());
        assert_eq!(c.tracker().finished().len(), 1);
    }

    #[test]
    fn test_double_tap_clears() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        c.handle(InputEvent::TapAt { position: Point::new(50.0, 0.0) }).unwrap();
        c.handle(InputEvent::ContactBegan {
            id: ContactId(2),
            position: Point::ZERO,
        })
        .unwrap();

        c.handle(InputEvent::DoubleTapAt { position: Point::ZERO }).unwrap();
        assert!(c.tracker().is_empty());
        assert_eq!(c.tracker().selected(), None);
        assert!(!c.menu().is_visible());
    }

    #[test]
    fn test_long_press_drag_moves_line() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        // The pressing finger also started a stroke before the press fired.
        c.handle(InputEvent::ContactBegan {
            id: ContactId(2),
            position: Point::new(50.0, 0.0),
        })
        .unwrap();
        c.handle(InputEvent::LongPress {
            phase: GesturePhase::Began,
            position: Point::new(50.0, 0.0),
        })
        .unwrap();
        assert!(c.is_dragging());
        assert_eq!(c.tracker().selected(), Some(0));
        assert_eq!(c.tracker().active_count(), 0);

        for _ in 0..2 {
            c.handle(InputEvent::PanDelta {
                phase: GesturePhase::Changed,
                delta: Vec2::new(5.0, 10.0),
            })
            .unwrap();
        }
        let line = c.tracker().finished()[0];
        assert_eq!(line.begin, Point::new(10.0, 20.0));
        assert_eq!(line.end, Point::new(110.0, 20.0));

        c.handle(InputEvent::LongPress {
            phase: GesturePhase::Ended,
            position: Point::new(60.0, 20.0),
        })
        .unwrap();
        assert!(!c.is_dragging());
        assert_eq!(c.tracker().selected(), None);
    }

    #[test]
    fn test_contacts_ignored_while_dragging() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        c.handle(InputEvent::LongPress {
            phase: GesturePhase::Began,
            position: Point::new(50.0, 0.0),
        })
        .unwrap();

        assert!(!c
            .handle(InputEvent::ContactBegan {
                id: ContactId(3),
                position: Point::ZERO,
            })
            .unwrap());
        assert!(!c.tracker().is_active(ContactId(3)));
    }

    #[test]
    fn test_long_press_on_empty_space() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        c.handle(InputEvent::ContactBegan {
            id: ContactId(2),
            position: Point::new(300.0, 300.0),
        })
        .unwrap();
        c.handle(InputEvent::LongPress {
            phase: GesturePhase::Began,
            position: Point::new(300.0, 300.0),
        })
        .unwrap();
        assert!(!c.is_dragging());
        assert!(c.tracker().is_active(ContactId(2)));
    }

    #[test]
    fn test_pan_without_drag_is_noop() {
        let mut c = controller();
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        c.handle(InputEvent::TapAt { position: Point::new(50.0, 0.0) }).unwrap();

        assert!(!c
            .handle(InputEvent::PanDelta {
                phase: GesturePhase::Changed,
                delta: Vec2::new(10.0, 10.0),
            })
            .unwrap());
        assert_eq!(c.tracker().finished()[0].begin, Point::ZERO);
    }

    #[test]
    fn test_all_contacts_cancelled() {
        let mut c = controller();
        for id in 0..3 {
            c.handle(InputEvent::ContactBegan {
                id: ContactId(id),
                position: Point::ZERO,
            })
            .unwrap();
        }
        assert!(c.handle(InputEvent::AllContactsCancelled).unwrap());
        assert_eq!(c.tracker().active_count(), 0);
        assert!(c.tracker().finished().is_empty());
    }

    #[test]
    fn test_exact_hit_mode_from_config() {
        let config = TrackerConfig {
            hit_radius: 5.0,
            hit_test: HitTestMode::Exact,
            ..TrackerConfig::default()
        };
        let mut c = DrawController::new(config, MenuState::new());
        draw(&mut c, 1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        c.handle(InputEvent::TapAt { position: Point::new(102.0, 0.0) }).unwrap();
        assert_eq!(c.tracker().selected(), Some(0));
    }

    #[test]
    fn test_handle_all_counts_redraws() {
        let mut c = controller();
        let id = ContactId(1);
        let redraws = c
            .handle_all([
                InputEvent::ContactBegan {
                    id,
                    position: Point::ZERO,
                },
                InputEvent::ContactMoved {
                    id: ContactId(9),
                    position: Point::ZERO,
                    velocity: None,
                },
                InputEvent::ContactEnded {
                    id,
                    position: Point::new(10.0, 0.0),
                },
            ])
            .unwrap();
        assert_eq!(redraws, 2);
    }
}
