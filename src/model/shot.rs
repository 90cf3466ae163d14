use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display radius used when the detector does not report one.
pub const DEFAULT_SHOT_RADIUS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Anything with a position on the target plane.
///
/// Every geometric computation in the engine reads coordinates through this
/// trait, so plain points and detected shots can be analyzed alike.
pub trait Located {
    fn position(&self) -> Point;
}

impl Located for Point {
    #[inline]
    fn position(&self) -> Point {
        *self
    }
}

/// One detected impact with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default = "default_shot_radius")]
    pub radius: f64,
}

fn default_shot_radius() -> f64 {
    DEFAULT_SHOT_RADIUS
}

impl Shot {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            confidence: 0.0,
            frame_index: None,
            timestamp: None,
            radius: DEFAULT_SHOT_RADIUS,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_frame_index(mut self, frame_index: i64) -> Self {
        self.frame_index = Some(frame_index);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &impl Located) -> f64 {
        self.point().distance_to(&other.position())
    }
}

impl Located for Shot {
    #[inline]
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl<T: Located> Located for &T {
    #[inline]
    fn position(&self) -> Point {
        (**self).position()
    }
}

pub fn positions<P: Located>(items: &[P]) -> Vec<Point> {
    items.iter().map(Located::position).collect()
}
