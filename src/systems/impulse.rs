//! Random impulse and torque for a throw.
//!
//! The direction always points down (a drop-and-bounce, not a launch) with a
//! random horizontal drift. Damping keeps the impulse proportionate to the
//! die's mass.

use serde::Serialize;

use crate::core::{RandomSource, Vec3};
use crate::domain::ThrowParameters;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowImpulse {
    pub impulse: Vec3,
    pub torque: Vec3,
    /// Strength drawn from `impulse_strength`, before direction and damping
    pub impulse_strength: f32,
    /// Strength drawn from `torque_strength`; bounds every torque axis
    pub torque_strength: f32,
}

pub fn generate(params: &ThrowParameters, rng: &mut impl RandomSource) -> ThrowImpulse {
    let range = params.impulse_strength;
    let impulse_strength = rng.range(range.min, range.max);

    let direction = Vec3::new(
        (rng.next_f32() - 0.5) * params.horizontal_spread,
        -params.downward_bias,
        (rng.next_f32() - 0.5) * params.horizontal_spread,
    );
    let impulse = direction * (impulse_strength * params.impulse_damping);

    let range = params.torque_strength;
    let torque_strength = rng.range(range.min, range.max);
    let torque = Vec3::new(
        rng.range(-torque_strength, torque_strength),
        rng.range(-torque_strength, torque_strength),
        rng.range(-torque_strength, torque_strength),
    );

    ThrowImpulse {
        impulse,
        torque,
        impulse_strength,
        torque_strength,
    }
}
