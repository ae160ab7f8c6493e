//! Systems - the dice easter-egg's state machines
//!
//! Each system owns its state and the ids of the timers it scheduled. Timers
//! are shared through `core::timers::Timers`; the scene routes fired timers
//! back to whichever system owns them.

pub mod bounds;
pub mod impulse;
pub mod lifecycle;
pub mod prompt;
pub mod rest;
pub mod throw;
pub mod trajectory;

pub use bounds::{BoundsCalculator, WallKind, WallPlane, WorldBounds};
pub use impulse::ThrowImpulse;
pub use lifecycle::{LifecycleEvent, SceneLifecycle, SceneVisibility};
pub use prompt::{BottomPrompt, PromptEvent};
pub use rest::{BodyState, RestDetector, RestEvent, RestState};
pub use throw::{PhysicsBody, ThrowController, ThrowRecord};
pub use trajectory::{AnimationWindow, GeoPoint, PathClock};
