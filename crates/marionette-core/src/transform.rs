#![allow(dead_code)]
//! 2D transform algebra:
//! - angles are degrees, folded into [-180, 180] where noted
//! - scale is per-axis (no shear term exists or can be produced)
//! - lerp_angle takes the shorter arc and does not refold its result

use serde::{Deserialize, Serialize};

/// 2D vector (canvas axes: +x right, +y down).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// Placement of a bone (local or world): position, rotation in degrees, per-axis scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Transform2D {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
    };

    #[inline]
    pub fn new(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Transform2D {
            position,
            rotation,
            scale,
        }
    }

    /// Compose a child's local transform onto its parent's world transform.
    ///
    /// The local offset is rotated by the parent's world rotation, then scaled
    /// per axis by the parent's world scale, then translated. Rotations add
    /// (folded into [-180, 180]); scales multiply per axis.
    pub fn compose(parent: &Transform2D, local: &Transform2D) -> Transform2D {
        let rad = parent.rotation.to_radians();
        let (sin, cos) = rad.sin_cos();
        let rotated_x = local.position.x * cos - local.position.y * sin;
        let rotated_y = local.position.x * sin + local.position.y * cos;

        Transform2D {
            position: Vec2::new(
                parent.position.x + rotated_x * parent.scale.x,
                parent.position.y + rotated_y * parent.scale.y,
            ),
            rotation: normalize_angle(parent.rotation + local.rotation),
            scale: Vec2::new(
                parent.scale.x * local.scale.x,
                parent.scale.y * local.scale.y,
            ),
        }
    }

    /// Component-wise blend of two transforms (shortest arc for rotation).
    #[inline]
    pub fn lerp(a: &Transform2D, b: &Transform2D, t: f32) -> Transform2D {
        Transform2D {
            position: lerp_vec2(a.position, b.position, t),
            rotation: lerp_angle(a.rotation, b.rotation, t),
            scale: lerp_vec2(a.scale, b.scale, t),
        }
    }
}

/// Fold an angle in degrees into [-180, 180] by repeated full turns.
/// Both endpoints are representable: normalize_angle(180.0) == 180.0.
#[inline]
pub fn normalize_angle(mut degrees: f32) -> f32 {
    while degrees > 180.0 {
        degrees -= 360.0;
    }
    while degrees < -180.0 {
        degrees += 360.0;
    }
    degrees
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Interpolate between two angles in degrees along the shorter arc.
/// The reduced delta is applied to `a` directly, so the result can land
/// outside [-180, 180]; callers fold it where they need the canonical range.
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let mut delta = b - a;
    while delta > 180.0 {
        delta -= 360.0;
    }
    while delta < -180.0 {
        delta += 360.0;
    }
    a + delta * t
}
