use std::f64::consts::PI;

use crate::attendance::clamp_percent;

/// Size of a circular progress indicator, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    /// Outer diameter of the ring.
    pub size: f64,
    pub stroke_width: f64,
}

impl Default for RingSpec {
    fn default() -> Self {
        Self {
            size: 120.0,
            stroke_width: 8.0,
        }
    }
}

impl RingSpec {
    #[must_use]
    pub fn new(size: f64, stroke_width: f64) -> Self {
        Self { size, stroke_width }
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Radius of the stroke's centre line, so the stroke stays inside the box.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke_width).max(0.0) / 2.0
    }

    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// Dash geometry for a ring filled to `percent`. Out-of-range input is clamped.
    #[must_use]
    pub fn geometry(&self, percent: f64) -> ArcGeometry {
        let percent = clamp_percent(percent);
        let circumference = self.circumference();
        let filled = percent / 100.0 * circumference;
        ArcGeometry {
            radius: self.radius(),
            circumference,
            filled,
            dash_offset: circumference - filled,
        }
    }
}

/// `stroke-dasharray` / `stroke-dashoffset` values for a partial ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub radius: f64,
    pub circumference: f64,
    /// Length of the drawn arc.
    pub filled: f64,
    /// Undrawn remainder.
    pub dash_offset: f64,
}
