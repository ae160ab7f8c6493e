//! Throwing the die.
//!
//! A throw wakes the body, puts it back at the drop position with a little
//! horizontal jitter and hits it with a random impulse and torque. Throws are
//! cosmetic: a body that is gone (scene torn down) turns every operation into
//! a no-op.

use serde::Serialize;

use crate::core::{RandomSource, TimerId, TimerKind, Timers, Vec3};
use crate::domain::ThrowParameters;

use super::impulse::{self, ThrowImpulse};

/// The host's physics body, as far as throwing is concerned
pub trait PhysicsBody {
    /// False once the body (or its world) has been destroyed
    fn is_alive(&self) -> bool;
    fn wake_up(&mut self);
    fn sleep(&mut self);
    fn set_position(&mut self, position: Vec3);
    /// `point` is relative to the centre of mass
    fn apply_impulse(&mut self, impulse: Vec3, point: Vec3);
    fn apply_torque(&mut self, torque: Vec3);
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowRecord {
    pub start: Vec3,
    #[serde(flatten)]
    pub impulse: ThrowImpulse,
}

/// One throw from `initial_position`. Returns `None` if the body is gone.
pub fn throw_from<B, R>(body: &mut B, initial_position: Vec3, params: &ThrowParameters, rng: &mut R) -> Option<ThrowRecord>
where
    B: PhysicsBody + ?Sized,
    R: RandomSource,
{
    if !body.is_alive() {
        return None;
    }

    // Forces on a sleeping body are dropped by the engine.
    body.wake_up();

    let jitter = Vec3::new(
        (rng.next_f32() - 0.5) * params.position_jitter,
        0.0,
        (rng.next_f32() - 0.5) * params.position_jitter,
    );
    let start = initial_position + jitter;
    body.set_position(start);

    let impulse = impulse::generate(params, rng);
    body.apply_impulse(impulse.impulse, Vec3::zero());
    body.apply_torque(impulse.torque);

    Some(ThrowRecord { start, impulse })
}

pub struct ThrowController {
    params: ThrowParameters,
    auto_throw: Option<TimerId>,
    throws: u32,
    last_throw: Option<ThrowRecord>,
}

impl ThrowController {
    pub fn new(params: ThrowParameters) -> Self {
        Self {
            params,
            auto_throw: None,
            throws: 0,
            last_throw: None,
        }
    }

    pub fn throw_count(&self) -> u32 {
        self.throws
    }

    pub fn last_throw(&self) -> Option<&ThrowRecord> {
        self.last_throw.as_ref()
    }

    pub fn has_pending_auto_throw(&self) -> bool {
        self.auto_throw.is_some()
    }

    /// Throw from the configured drop position
    pub fn throw_body<B, R>(&mut self, body: &mut B, rng: &mut R) -> bool
    where
        B: PhysicsBody + ?Sized,
        R: RandomSource,
    {
        match throw_from(body, self.params.drop_position, &self.params, rng) {
            Some(record) => {
                self.throws = self.throws.saturating_add(1);
                self.last_throw = Some(record);
                true
            }
            None => false,
        }
    }

    /// Scene mounted: schedule the automatic first throw
    pub fn mount(&mut self, now: f64, timers: &mut Timers) {
        timers.cancel_slot(&mut self.auto_throw);
        self.auto_throw = Some(timers.schedule(TimerKind::AutoThrow, now + self.params.auto_throw_delay_ms));
    }

    /// Scene unmounted: the automatic throw must not fire any more
    pub fn unmount(&mut self, timers: &mut Timers) {
        timers.cancel_slot(&mut self.auto_throw);
    }

    /// Handle a fired timer; returns true if a throw happened
    pub fn on_timer<B, R>(&mut self, id: TimerId, body: &mut B, rng: &mut R) -> bool
    where
        B: PhysicsBody + ?Sized,
        R: RandomSource,
    {
        if self.auto_throw != Some(id) {
            return false;
        }
        self.auto_throw = None;
        self.throw_body(body, rng)
    }

    /// The rest detector confirmed the die is still; let the engine sleep it
    pub fn on_rest<B: PhysicsBody + ?Sized>(&mut self, body: &mut B) -> bool {
        if !body.is_alive() {
            return false;
        }
        body.sleep();
        true
    }
}
