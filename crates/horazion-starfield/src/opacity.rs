//! Piecewise-linear opacity over normalized depth.
//!
//! Depth is expressed as a fraction of the far plane (`depth / z_max`), so the
//! same curve can be reused by fields of different depth.

use serde::{Deserialize, Serialize};

use crate::error::StarfieldError;

/// Opacity as a function of normalized depth.
///
/// Each stop is `(depth_fraction, opacity)`. A valid curve starts at `(0.0, 0.0)`,
/// ends at `(1.0, 0.0)`, and peaks at exactly `1.0` somewhere in between, so
/// particles fade out both when clipping the viewer and when entering from the
/// far plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpacityCurve {
    /// Breakpoints sorted by strictly increasing depth fraction.
    pub stops: Vec<(f32, f32)>,
}

impl OpacityCurve {
    /// Create a curve from explicit breakpoints. Call [`validate`](Self::validate)
    /// before relying on the boundary rules.
    pub fn new(stops: Vec<(f32, f32)>) -> Self {
        Self { stops }
    }

    /// The common four-stop shape: `0 -> 1` by `near`, `1 -> mid` by `far`,
    /// then down to `0` at the far plane.
    pub fn fade_in_out(near: f32, far: f32, mid: f32) -> Self {
        Self::new(vec![(0.0, 0.0), (near, 1.0), (far, mid), (1.0, 0.0)])
    }

    /// Check the boundary rules.
    pub fn validate(&self) -> Result<(), StarfieldError> {
        let invalid = |msg: String| Err(StarfieldError::InvalidOpacityCurve(msg));

        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return invalid("curve has no stops".to_string());
        };
        if self.stops.len() < 3 {
            return invalid(format!("need at least 3 stops, got {}", self.stops.len()));
        }
        if *first != (0.0, 0.0) {
            return invalid(format!("first stop must be (0, 0), got {first:?}"));
        }
        if *last != (1.0, 0.0) {
            return invalid(format!("last stop must be (1, 0), got {last:?}"));
        }
        for pair in self.stops.windows(2) {
            if !(pair[1].0 > pair[0].0) {
                return invalid(format!(
                    "depths must strictly increase: {} then {}",
                    pair[0].0, pair[1].0
                ));
            }
        }
        let mut peak = 0.0f32;
        for &(depth, opacity) in &self.stops {
            if !(0.0..=1.0).contains(&opacity) {
                return invalid(format!("opacity {opacity} at depth {depth} is outside [0, 1]"));
            }
            peak = peak.max(opacity);
        }
        if peak != 1.0 {
            return invalid(format!("curve must peak at 1.0, peaks at {peak}"));
        }
        Ok(())
    }

    /// Sample the curve at a normalized depth. Inputs outside `[0, 1]` clamp to
    /// the end stops.
    pub fn sample(&self, fraction: f32) -> f32 {
        let stops = &self.stops;
        match stops.len() {
            0 => return 0.0,
            1 => return stops[0].1,
            _ => {}
        }

        let first = stops[0];
        let last = stops[stops.len() - 1];
        if fraction <= first.0 {
            return first.1;
        }
        if fraction >= last.0 {
            return last.1;
        }

        for pair in stops.windows(2) {
            let (d0, o0) = pair[0];
            let (d1, o1) = pair[1];
            if fraction <= d1 {
                let span = d1 - d0;
                if span <= 0.0 {
                    return o1;
                }
                let t = (fraction - d0) / span;
                return o0 + (o1 - o0) * t;
            }
        }
        last.1
    }
}

impl Default for OpacityCurve {
    fn default() -> Self {
        Self::fade_in_out(0.05, 0.6, 0.6)
    }
}
