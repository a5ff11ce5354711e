//! Display list built from tracker state once per refresh.

use crate::color::SerializableColor;
use crate::config::TrackerConfig;
use crate::line::Line;
use crate::tracker::LineTracker;
use kurbo::{Cap, Line as KurboLine, Stroke};
use serde::{Deserialize, Serialize};

/// Why a line is in the display list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeRole {
    Finished,
    Active,
    Selected,
}

/// One line to stroke, with its resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokedLine {
    pub line: Line,
    pub color: SerializableColor,
    pub role: StrokeRole,
}

impl StrokedLine {
    /// Geometry to stroke.
    pub fn path(&self) -> KurboLine {
        self.line.as_kurbo()
    }

    /// Round-capped stroke at the line's thickness.
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.line.thickness).with_caps(Cap::Round)
    }
}

/// Hue for an active stroke: 0 and 180 degrees are both red.
pub fn color_from_angle(angle: f64) -> SerializableColor {
    SerializableColor::from_hue(angle / 180.0)
}

/// Lines in paint order: finished, then active, then the selected line on top.
pub fn build_scene(tracker: &LineTracker, config: &TrackerConfig) -> Vec<StrokedLine> {
    let mut scene = Vec::with_capacity(tracker.finished().len() + tracker.active_count() + 1);

    scene.extend(tracker.finished().iter().map(|line| StrokedLine {
        line: *line,
        color: config.finished_color,
        role: StrokeRole::Finished,
    }));

    scene.extend(tracker.active_lines().into_iter().map(|(_, line)| {
        let color = if config.color_by_angle {
            color_from_angle(line.angle())
        } else {
            config.current_color
        };
        StrokedLine {
            line,
            color,
            role: StrokeRole::Active,
        }
    }));

    if let Some(line) = tracker.selected_line() {
        scene.push(StrokedLine {
            line: *line,
            color: config.selected_color,
            role: StrokeRole::Selected,
        });
    }

    scene
}
