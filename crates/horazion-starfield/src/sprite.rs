//! Four-point star sprite geometry.

use glam::{Affine2, Vec2};

use crate::projection::ProjectedState;

/// Edge length of the square the star outline is authored in.
pub const STAR_SIZE: f32 = 24.0;

/// Star outline vertices in a `STAR_SIZE` box, clockwise from the top tip.
pub const STAR_OUTLINE: [Vec2; 8] = [
    Vec2::new(12.0, 0.0),
    Vec2::new(14.5, 9.5),
    Vec2::new(24.0, 12.0),
    Vec2::new(14.5, 14.5),
    Vec2::new(12.0, 24.0),
    Vec2::new(9.5, 14.5),
    Vec2::new(0.0, 12.0),
    Vec2::new(9.5, 9.5),
];

/// Local-to-screen transform for a sprite: center the outline on the origin,
/// then rotate, scale and move it to the projected position.
pub fn sprite_transform(state: &ProjectedState) -> Affine2 {
    Affine2::from_scale_angle_translation(Vec2::splat(state.scale), state.rotation, state.screen)
        * Affine2::from_translation(Vec2::splat(-STAR_SIZE * 0.5))
}

/// Star outline placed at a projected state, in screen coordinates.
pub fn star_outline(state: &ProjectedState) -> [Vec2; 8] {
    let transform = sprite_transform(state);
    STAR_OUTLINE.map(|p| transform.transform_point2(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_state_centers_outline() {
        let state = ProjectedState {
            scale: 1.0,
            ..Default::default()
        };
        let outline = star_outline(&state);
        assert!((outline[0] - Vec2::new(0.0, -12.0)).length() < 1e-5);
        assert!((outline[2] - Vec2::new(12.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_outline_centroid_is_screen_position() {
        let state = ProjectedState {
            screen: Vec2::new(195.0, 422.0),
            scale: 0.7,
            rotation: 1.1,
            ..Default::default()
        };
        let outline = star_outline(&state);
        let centroid = outline.iter().copied().sum::<Vec2>() / outline.len() as f32;
        assert!((centroid - state.screen).length() < 1e-3);
    }

    #[test]
    fn test_scale_shrinks_tips() {
        let state = ProjectedState {
            screen: Vec2::new(50.0, 50.0),
            scale: 0.5,
            ..Default::default()
        };
        let outline = star_outline(&state);
        assert!(((outline[0] - state.screen).length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_quarter_turn_moves_top_tip_right() {
        let state = ProjectedState {
            scale: 1.0,
            rotation: std::f32::consts::FRAC_PI_2,
            ..Default::default()
        };
        let outline = star_outline(&state);
        // Top tip (0, -12) rotated a quarter turn lands on (12, 0).
        assert!((outline[0] - Vec2::new(12.0, 0.0)).length() < 1e-4);
    }
}
