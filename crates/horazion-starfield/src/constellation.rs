//! Faint lines joining paired particles that travel at similar depth.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConstellationConfig;
use crate::projection::ProjectedState;

/// A line segment between two projected particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstellationLine {
    /// Index of the first endpoint in the particle field.
    pub from_index: usize,
    /// Index of the second endpoint.
    pub to_index: usize,
    /// Screen position of the first endpoint.
    pub from: Vec2,
    /// Screen position of the second endpoint.
    pub to: Vec2,
    /// Line opacity; 0 when the endpoints are too far apart in depth.
    pub opacity: f32,
}

/// Index pairs `(i, i + 1)` for every `stride`-th particle.
pub fn constellation_pairs(count: usize, stride: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count.saturating_sub(1))
        .step_by(stride.max(1))
        .map(|i| (i, i + 1))
}

/// Opacity of the line joining two projected particles.
pub fn link_opacity(a: &ProjectedState, b: &ProjectedState, config: &ConstellationConfig) -> f32 {
    if (a.depth - b.depth).abs() < config.max_depth_gap {
        (a.opacity + b.opacity) * 0.5 * config.intensity
    } else {
        0.0
    }
}

/// Rebuild `out` with the constellation lines for one frame of projected states.
pub fn collect_lines(
    states: &[ProjectedState],
    config: &ConstellationConfig,
    out: &mut Vec<ConstellationLine>,
) {
    out.clear();
    if !config.enabled {
        return;
    }
    out.extend(
        constellation_pairs(states.len(), config.stride as usize).map(|(i, j)| {
            let (a, b) = (&states[i], &states[j]);
            ConstellationLine {
                from_index: i,
                to_index: j,
                from: a.screen,
                to: b.screen,
                opacity: link_opacity(a, b, config),
            }
        }),
    );
}
