//! Dice Engine - the portfolio site's dice easter-egg in WASM
//!
//! The host page keeps rendering and physics; this crate decides when the
//! dice scene is shown, how the die is thrown, when it has come to rest and
//! when the scene fades away.
//!
//! Architecture:
//! - core/        - Vector math, random sources, timers, clock, logging
//! - domain/      - Configuration and die/world definitions
//! - systems/     - Impulse, rest detection, throw, lifecycle, bounds, prompt, trajectory
//! - simulation/  - Scene orchestration and the wasm facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine (idempotent)
#[wasm_bindgen]
pub fn init() {
    crate::core::runtime::init_once();
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Store the globe access token; only the first call takes effect
#[wasm_bindgen(js_name = setAccessToken)]
pub fn set_access_token(token: &str) -> bool {
    crate::core::runtime::set_access_token(token)
}

#[wasm_bindgen(js_name = accessToken)]
pub fn access_token() -> Option<String> {
    crate::core::runtime::access_token().map(str::to_string)
}

// Re-export main types
pub use crate::core::{RandomSource, Vec3, Xorshift32};
pub use domain::{DiceConfig, ThrowParameters};
pub use simulation::{DiceScene, DiceSceneCore, PathAnimation};
