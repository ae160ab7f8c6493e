//! The die and the world it is thrown into, as handed to the host's physics
//! engine when the scene mounts.

use serde::{Deserialize, Serialize};

use crate::core::{RandomSource, Vec3};

pub const FACE_COUNT: usize = 6;

/// Rigid body description for the host's `createBody`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyDefinition {
    pub mass: f32,
    /// Edge length of the cube
    pub size: f32,
    pub friction: f32,
    pub restitution: f32,
    pub allow_sleep: bool,
    pub sleep_speed_limit: f32,
    /// Seconds below the speed limit before the engine itself may sleep the body
    pub sleep_time_limit: f32,
}

impl Default for BodyDefinition {
    fn default() -> Self {
        Self {
            mass: 0.3,
            size: 2.0,
            friction: 0.2,
            restitution: 0.2,
            allow_sleep: true,
            sleep_speed_limit: 0.2,
            sleep_time_limit: 0.5,
        }
    }
}

impl BodyDefinition {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(format!("body.mass must be > 0, got {}", self.mass));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(format!("body.size must be > 0, got {}", self.size));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(format!("body.restitution must be within [0, 1], got {}", self.restitution));
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(format!("body.friction must be >= 0, got {}", self.friction));
        }
        if self.sleep_speed_limit < 0.0 || self.sleep_time_limit < 0.0 {
            return Err("body sleep limits must be >= 0".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMaterial {
    pub friction: f32,
    pub restitution: f32,
}

/// Physics world settings for the host
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldDefinition {
    pub gravity: Vec3,
    pub default_contact_material: ContactMaterial,
}

impl Default for WorldDefinition {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.82, 0.0),
            default_contact_material: ContactMaterial {
                friction: 0.2,
                restitution: 0.3,
            },
        }
    }
}

impl WorldDefinition {
    pub fn validate(&self) -> Result<(), String> {
        if !self.gravity.is_finite() {
            return Err("world.gravity must be finite".to_string());
        }
        let m = &self.default_contact_material;
        if m.friction < 0.0 || !(0.0..=1.0).contains(&m.restitution) {
            return Err(format!(
                "world.defaultContactMaterial out of range (friction={}, restitution={})",
                m.friction, m.restitution
            ));
        }
        Ok(())
    }
}

/// Face texture order for a freshly mounted die (Fisher-Yates).
///
/// Entry `i` is the pip count (1..=6) shown on cube face `i`.
pub fn shuffled_faces(rng: &mut impl RandomSource) -> [u8; FACE_COUNT] {
    let mut faces = [1u8, 2, 3, 4, 5, 6];
    for i in (1..FACE_COUNT).rev() {
        let j = rng.index(i + 1);
        faces.swap(i, j);
    }
    faces
}
