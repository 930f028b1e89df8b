use crate::math::AngleHelper;
use crate::prelude::{SwathError, SwathResult};
use crate::survey::Side;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Planar point in the survey frame (x east, y north).
pub type SwathPoint = Point2<f64>;

/// Location and width of one measured sonar swath.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwathRecord {
    pub x: f64,
    pub y: f64,
    /// Compass heading in degrees, clockwise from north.
    pub heading: f64,
    pub swath_stbd: f64,
    pub swath_port: f64,
    /// Nadir depth, or outer-swath depth when the caller has it.
    pub depth: f64,
}

impl SwathRecord {
    pub fn new(
        x: f64,
        y: f64,
        heading: f64,
        swath_stbd: f64,
        swath_port: f64,
        depth: f64,
    ) -> Self {
        Self {
            x,
            y,
            heading,
            swath_stbd,
            swath_port,
            depth,
        }
    }

    pub fn location(&self) -> SwathPoint {
        SwathPoint::new(self.x, self.y)
    }

    /// Width on the requested side, `None` for `Side::Unknown`.
    pub fn width(&self, side: Side) -> Option<f64> {
        match side {
            Side::Starboard => Some(self.swath_stbd),
            Side::Port => Some(self.swath_port),
            Side::Unknown => None,
        }
    }

    /// True when position and heading both match `other` exactly.
    pub fn same_pose(&self, other: &SwathRecord) -> bool {
        self.x == other.x && self.y == other.y && self.heading == other.heading
    }

    /// Projects the swath edge on `side` into the survey frame.
    pub fn outer_point(&self, side: Side) -> SwathResult<SwathPoint> {
        let (width, rotate_degs) = match side {
            Side::Starboard => (self.swath_stbd, 90.0),
            Side::Port => (self.swath_port, -90.0),
            Side::Unknown => return Err(SwathError::ConcreteSideRequired),
        };

        let orient = AngleHelper::heading_to_math_angle(AngleHelper::wrap_to_360(
            self.heading + rotate_degs,
        ));
        Ok(SwathPoint::new(
            self.x + orient.cos() * width,
            self.y + orient.sin() * width,
        ))
    }
}
