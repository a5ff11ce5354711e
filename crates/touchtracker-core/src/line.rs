//! Line segment drawn by a single contact.

use kurbo::{Line as KurboLine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Stroke width used when no other thickness is configured.
pub const DEFAULT_THICKNESS: f64 = 10.0;

/// Parametric step between hit-test samples along a segment.
pub const HIT_SAMPLE_STEP: f64 = 0.05;

/// Number of samples taken per segment (t = 0.0 up to, but excluding, 1.0).
const HIT_SAMPLE_COUNT: usize = 20;

/// A directed straight segment with a stroke thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Where the contact started.
    pub begin: Point,
    /// Where the contact is now, or where it lifted.
    pub end: Point,
    /// Stroke width.
    pub thickness: f64,
}

impl Default for Line {
    fn default() -> Self {
        Self::at(Point::ZERO, DEFAULT_THICKNESS)
    }
}

impl Line {
    /// Create a new line.
    pub fn new(begin: Point, end: Point, thickness: f64) -> Self {
        Self {
            begin,
            end,
            thickness,
        }
    }

    /// Create a zero-length line at `point`, as a fresh contact does.
    pub fn at(point: Point, thickness: f64) -> Self {
        Self::new(point, point, thickness)
    }

    /// Vector from `begin` to `end`.
    pub fn direction(&self) -> Vec2 {
        self.end - self.begin
    }

    /// Angle of the segment in degrees.
    ///
    /// Negative arctangent results are shifted by 180, so a segment and its
    /// reverse share a value. Only meant for picking a hue.
    pub fn angle(&self) -> f64 {
        let degrees = self.direction().atan2().to_degrees();
        if degrees < 0.0 { degrees + 180.0 } else { degrees }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.direction().hypot()
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.begin.midpoint(self.end)
    }

    /// Point at parameter `t` along the segment.
    pub fn point_at(&self, t: f64) -> Point {
        self.begin.lerp(self.end, t)
    }

    /// The fixed set of points the sampled hit-test checks.
    pub fn samples(&self) -> impl Iterator<Item = Point> + '_ {
        (0..HIT_SAMPLE_COUNT).map(move |i| self.point_at(i as f64 * HIT_SAMPLE_STEP))
    }

    /// Whether any sample lies strictly within `radius` of `point`.
    ///
    /// Coarse: the end point itself is never sampled and gaps between samples
    /// grow with segment length.
    pub fn is_near_sampled(&self, point: Point, radius: f64) -> bool {
        self.samples().any(|sample| sample.distance(point) < radius)
    }

    /// Whether the true distance from `point` to the segment is below `radius`.
    pub fn is_near_exact(&self, point: Point, radius: f64) -> bool {
        self.distance_to(point) < radius
    }

    /// Euclidean distance from `point` to the closest point on the segment.
    pub fn distance_to(&self, point: Point) -> f64 {
        let line_vec = self.direction();
        let point_vec = point - self.begin;

        let line_len_sq = line_vec.hypot2();
        if line_len_sq < f64::EPSILON {
            return point_vec.hypot();
        }

        // Project point onto line, clamped to segment
        let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
        self.point_at(t).distance(point)
    }

    /// Move both endpoints by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.begin += delta;
        self.end += delta;
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.begin, self.end)
    }
}
