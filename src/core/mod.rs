//! Core utilities shared by every system: vector math, random sources,
//! timers, clock, logging and init-once runtime state.

#[macro_use]
pub mod log;
pub mod clock;
pub mod random;
pub mod runtime;
pub mod timers;
pub mod vec3;

pub use random::{RandomSource, Xorshift32};
pub use timers::{FiredTimer, TimerId, TimerKind, Timers};
pub use vec3::Vec3;
