//! Contact-to-line tracking and hit testing.

use crate::config::HitTestMode;
use crate::line::Line;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Opaque identity of one contact, assigned by the input layer when the
/// contact starts and reused for every later event of that contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contact#{}", self.0)
    }
}

/// Tracker errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Line index {index} out of range ({len} finished lines)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Owns in-progress strokes, finished lines, and the current selection.
#[derive(Debug, Clone, Default)]
pub struct LineTracker {
    /// Strokes still being drawn, keyed by the contact drawing them.
    active: HashMap<ContactId, Line>,
    /// Completed lines in the order they were finished.
    finished: Vec<Line>,
    /// Index into `finished`.
    selected: Option<usize>,
}

impl LineTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke for `id` at `point`.
    ///
    /// A begin for an id that is already drawing replaces the old stroke,
    /// which is returned.
    pub fn begin_stroke(&mut self, id: ContactId, point: Point, thickness: f64) -> Option<Line> {
        let replaced = self.active.insert(id, Line::at(point, thickness));
        if replaced.is_some() {
            log::warn!("{id} began again without ending; restarting its stroke");
        } else {
            log::debug!("{id} began at ({:.1}, {:.1})", point.x, point.y);
        }
        replaced
    }

    /// Move the end of `id`'s stroke to `point`.
    ///
    /// A thickness override only ever grows the stroke. Returns `false` when
    /// `id` has no active stroke.
    pub fn update_stroke(
        &mut self,
        id: ContactId,
        point: Point,
        thickness_override: Option<f64>,
    ) -> bool {
        let Some(line) = self.active.get_mut(&id) else {
            log::trace!("Ignoring move for inactive {id}");
            return false;
        };
        line.end = point;
        if let Some(thickness) = thickness_override {
            line.thickness = line.thickness.max(thickness);
        }
        log::trace!("{id} moved to ({:.1}, {:.1})", point.x, point.y);
        true
    }

    /// Finish `id`'s stroke at `point` and append it to the finished lines.
    pub fn end_stroke(&mut self, id: ContactId, point: Point) -> Option<Line> {
        let mut line = self.active.remove(&id)?;
        line.end = point;
        self.finished.push(line);
        log::debug!(
            "{id} ended; line {} finished ({:.1} long)",
            self.finished.len() - 1,
            line.length()
        );
        Some(line)
    }

    /// Drop `id`'s stroke without finishing it.
    pub fn cancel_stroke(&mut self, id: ContactId) -> Option<Line> {
        let line = self.active.remove(&id);
        if line.is_some() {
            log::debug!("{id} cancelled");
        }
        line
    }

    /// Drop every active stroke. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.active.len();
        self.active.clear();
        if count > 0 {
            log::debug!("Cancelled {count} active strokes");
        }
        count
    }

    /// Index of the earliest finished line with a sample within `radius` of
    /// `point`.
    pub fn hit_test(&self, point: Point, radius: f64) -> Option<usize> {
        self.hit_test_with(point, radius, HitTestMode::Sampled)
    }

    /// Like [`hit_test`](Self::hit_test) with an explicit proximity test.
    pub fn hit_test_with(&self, point: Point, radius: f64, mode: HitTestMode) -> Option<usize> {
        self.finished.iter().position(|line| match mode {
            HitTestMode::Sampled => line.is_near_sampled(point, radius),
            HitTestMode::Exact => line.is_near_exact(point, radius),
        })
    }

    /// Move the finished line at `index` by `delta`.
    pub fn translate(&mut self, index: usize, delta: Vec2) -> TrackerResult<()> {
        let len = self.finished.len();
        let line = self
            .finished
            .get_mut(index)
            .ok_or(TrackerError::IndexOutOfRange { index, len })?;
        line.translate(delta);
        Ok(())
    }

    /// Remove the finished line at `index`.
    ///
    /// Clears the selection if it pointed at the removed line or now points
    /// past the end. A selection after `index` that is still in range is
    /// left alone and now refers to the following line.
    pub fn delete_at(&mut self, index: usize) -> TrackerResult<Line> {
        let len = self.finished.len();
        if index >= len {
            log::warn!("Delete of line {index} ignored; only {len} finished lines");
            return Err(TrackerError::IndexOutOfRange { index, len });
        }
        let line = self.finished.remove(index);
        if let Some(selected) = self.selected {
            if selected == index || selected >= self.finished.len() {
                self.selected = None;
            }
        }
        log::debug!("Deleted line {index}");
        Ok(line)
    }

    /// Set or clear the selected line.
    pub fn select(&mut self, index: Option<usize>) -> TrackerResult<()> {
        if let Some(index) = index {
            let len = self.finished.len();
            if index >= len {
                return Err(TrackerError::IndexOutOfRange { index, len });
            }
        }
        if self.selected != index {
            log::debug!("Selection changed: {:?} -> {:?}", self.selected, index);
        }
        self.selected = index;
        Ok(())
    }

    /// Forget every stroke, finished line, and the selection.
    pub fn clear_all(&mut self) {
        self.active.clear();
        self.finished.clear();
        self.selected = None;
        log::debug!("Cleared all lines");
    }

    /// Finished lines, earliest first.
    pub fn finished(&self) -> &[Line] {
        &self.finished
    }

    /// Active strokes ordered by contact id.
    pub fn active_lines(&self) -> Vec<(ContactId, Line)> {
        let mut lines: Vec<_> = self.active.iter().map(|(id, line)| (*id, *line)).collect();
        lines.sort_by_key(|(id, _)| *id);
        lines
    }

    /// The stroke `id` is drawing, if any.
    pub fn active_line(&self, id: ContactId) -> Option<&Line> {
        self.active.get(&id)
    }

    pub fn is_active(&self, id: ContactId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected finished line, if the selection is still in range.
    pub fn selected_line(&self) -> Option<&Line> {
        self.selected.and_then(|index| self.finished.get(index))
    }

    /// Whether there is nothing drawn or being drawn.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.finished.is_empty()
    }
}
