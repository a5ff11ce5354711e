//! TouchTracker Core Library
//!
//! Platform-agnostic line tracking for multitouch drawing: contacts draw
//! straight segments, finished segments can be hit-tested, selected, dragged
//! and deleted. Host UI layers feed [`InputEvent`]s in and read a display
//! list back out.

pub mod color;
pub mod config;
pub mod controller;
pub mod input;
pub mod line;
pub mod menu;
pub mod scene;
pub mod tracker;

pub use color::SerializableColor;
pub use config::{ConfigError, HitTestMode, TrackerConfig};
pub use controller::DrawController;
pub use input::{GesturePhase, InputEvent};
pub use line::{Line, DEFAULT_THICKNESS, HIT_SAMPLE_STEP};
pub use menu::{MenuAction, MenuPresenter, MenuState};
pub use scene::{StrokeRole, StrokedLine, build_scene, color_from_angle};
pub use tracker::{ContactId, LineTracker, TrackerError, TrackerResult};
