//! Physics world bounds from the viewport.
//!
//! Depth is fixed; only the horizontal extent follows the aspect ratio so the
//! die stays on screen on both wide and tall viewports.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::Serialize;

use crate::core::Vec3;

pub const MIN_WORLD_WIDTH: f32 = 8.0;
pub const MAX_WORLD_WIDTH: f32 = 12.0;
pub const WIDTH_PER_ASPECT: f32 = 5.0;
pub const HALF_DEPTH: f32 = 5.0;

const GROUND_Y: f32 = -0.5;
const WALL_Y: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WorldBounds {
    pub left: f32,
    pub right: f32,
    pub front: f32,
    pub back: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            left: -5.0,
            right: 5.0,
            front: -HALF_DEPTH,
            back: HALF_DEPTH,
        }
    }
}

/// Bounds for a viewport of `width` x `height` pixels.
/// Degenerate sizes fall back to the default square bounds.
pub fn compute(width: f32, height: f32) -> WorldBounds {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return WorldBounds::default();
    }

    let aspect = width / height;
    let world_width = (aspect * WIDTH_PER_ASPECT).clamp(MIN_WORLD_WIDTH, MAX_WORLD_WIDTH);
    let half = world_width / 2.0;

    WorldBounds {
        left: -half,
        right: half,
        front: -HALF_DEPTH,
        back: HALF_DEPTH,
    }
}

/// Recomputes bounds on resize and reports only real changes
#[derive(Default)]
pub struct BoundsCalculator {
    last: Option<WorldBounds>,
}

impl BoundsCalculator {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn current(&self) -> WorldBounds {
        self.last.unwrap_or_default()
    }

    /// Returns the new bounds when they differ from the last emitted ones
    pub fn update(&mut self, width: f32, height: f32) -> Option<WorldBounds> {
        let bounds = compute(width, height);
        if self.last == Some(bounds) {
            return None;
        }
        self.last = Some(bounds);
        Some(bounds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WallKind {
    Ground,
    Left,
    Right,
    Front,
    Back,
}

/// Static collider plane (Euler rotation in radians)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WallPlane {
    pub kind: WallKind,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Ground plus the four side walls enclosing `bounds`
pub fn wall_planes(bounds: &WorldBounds) -> [WallPlane; 5] {
    [
        WallPlane {
            kind: WallKind::Ground,
            position: Vec3::new(0.0, GROUND_Y, 0.0),
            rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        },
        WallPlane {
            kind: WallKind::Left,
            position: Vec3::new(bounds.left, WALL_Y, 0.0),
            rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
        },
        WallPlane {
            kind: WallKind::Right,
            position: Vec3::new(bounds.right, WALL_Y, 0.0),
            rotation: Vec3::new(0.0, -FRAC_PI_2, 0.0),
        },
        WallPlane {
            kind: WallKind::Front,
            position: Vec3::new(0.0, WALL_Y, bounds.front),
            rotation: Vec3::zero(),
        },
        WallPlane {
            kind: WallKind::Back,
            position: Vec3::new(0.0, WALL_Y, bounds.back),
            rotation: Vec3::new(0.0, PI, 0.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn widescreen_scales_with_aspect() {
        let b = compute(1600.0, 900.0);
        assert!(approx(b.left, -4.44), "{:?}", b);
        assert!(approx(b.right, 4.44), "{:?}", b);
        assert_eq!(b.front, -5.0);
        assert_eq!(b.back, 5.0);
    }

    #[test]
    fn portrait_clamps_to_minimum_width() {
        let b = compute(400.0, 1200.0);
        assert_eq!(b, WorldBounds { left: -4.0, right: 4.0, front: -5.0, back: 5.0 });
    }

    #[test]
    fn ultrawide_clamps_to_maximum_width() {
        let b = compute(5120.0, 1080.0);
        assert_eq!(b.left, -6.0);
        assert_eq!(b.right, 6.0);
    }

    #[test]
    fn degenerate_viewport_uses_default() {
        assert_eq!(compute(800.0, 0.0), WorldBounds::default());
        assert_eq!(compute(-1.0, 600.0), WorldBounds::default());
        assert_eq!(compute(f32::NAN, 600.0), WorldBounds::default());
    }

    #[test]
    fn calculator_skips_unchanged_bounds() {
        let mut calc = BoundsCalculator::new();
        assert!(calc.update(1600.0, 900.0).is_some());
        assert!(calc.update(1600.0, 900.0).is_none());
        // Different size, same clamped bounds.
        assert!(calc.update(300.0, 900.0).is_some());
        assert!(calc.update(200.0, 900.0).is_none());
    }

    #[test]
    fn walls_follow_bounds() {
        let b = compute(400.0, 1200.0);
        let walls = wall_planes(&b);
        assert_eq!(walls[0].kind, WallKind::Ground);
        assert_eq!(walls[0].position.y, -0.5);
        assert_eq!(walls[1].position.x, -4.0);
        assert_eq!(walls[2].position.x, 4.0);
        assert_eq!(walls[3].position.z, -5.0);
        assert_eq!(walls[4].position.z, 5.0);
    }
}
