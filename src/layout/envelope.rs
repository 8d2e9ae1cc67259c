use crate::foundation::core::{Point, Vec2};

/// Slack for `center + clamp(p - center)` round-off.
const CONTAINMENT_EPS: f64 = 1e-9;

/// Elliptical region anchors are sampled in, plus the point stems converge toward.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementEnvelope {
    pub center_x: f64,
    pub center_y: f64,
    pub half_width: f64,
    pub half_height: f64,
    pub binding_x: f64,
    pub binding_y: f64,
    /// Fraction of the spread used to nudge fresh samples toward the binding point.
    pub gravity_tilt: f64,
}

impl PlacementEnvelope {
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn binding(&self) -> Point {
        Point::new(self.binding_x, self.binding_y)
    }

    /// Half width and half height of the sampling ellipse.
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }

    /// Clamp into the envelope's bounding rectangle.
    ///
    /// Relaxed points may settle in the corners outside the sampling ellipse.
    pub fn clamp(&self, p: Point) -> Point {
        let hw = self.half_width.max(0.0);
        let hh = self.half_height.max(0.0);
        Point::new(
            self.center_x + (p.x - self.center_x).clamp(-hw, hw),
            self.center_y + (p.y - self.center_y).clamp(-hh, hh),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        (p.x - self.center_x).abs() <= self.half_width.max(0.0) + CONTAINMENT_EPS
            && (p.y - self.center_y).abs() <= self.half_height.max(0.0) + CONTAINMENT_EPS
    }

    pub fn is_degenerate(&self) -> bool {
        self.half_width <= 0.0 || self.half_height <= 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/envelope.rs"]
mod tests;
