use wasm_bindgen::prelude::*;

use crate::core::{clock, Vec3};
use crate::systems::{GeoPoint, PathClock, SceneVisibility};

use super::{commands_json, DiceSceneCore};

#[wasm_bindgen]
pub struct DiceScene {
    core: DiceSceneCore,
}

#[wasm_bindgen]
impl DiceScene {
    /// Create a scene with the default tuning, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let seed = crate::core::Xorshift32::from_time_ms(clock::now_ms()).next_u32();
        Self {
            core: super::init::build_scene_core(Default::default(), seed),
        }
    }

    /// Create a scene from a JSON config. Invalid configs are rejected here, once.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String, seed: u32) -> Result<DiceScene, JsValue> {
        let core = DiceSceneCore::from_json(&json, seed).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u32) -> DiceScene {
        Self {
            core: super::init::build_scene_core(Default::default(), seed),
        }
    }

    // === LIFECYCLE ===

    /// Show the scene (navbar die clicked). Returns false if already up.
    pub fn show(&mut self, now_ms: f64) -> bool {
        self.core.show(now_ms)
    }

    /// Dismiss button
    #[wasm_bindgen(js_name = requestClose)]
    pub fn request_close(&mut self, now_ms: f64) -> bool {
        self.core.close(now_ms)
    }

    /// Fire due timers. Call once per animation frame.
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        self.core.advance(now_ms)
    }

    /// `tick` with `performance.now()`
    #[wasm_bindgen(js_name = tickNow)]
    pub fn tick_now(&mut self) -> u32 {
        self.core.advance(clock::now_ms())
    }

    /// Page teardown; cancels every pending timer
    pub fn unmount(&mut self) {
        self.core.unmount();
    }

    // === DIE ===

    #[wasm_bindgen(js_name = throwDice)]
    pub fn throw_dice(&mut self, now_ms: f64) -> bool {
        self.core.throw_dice(now_ms)
    }

    /// Position sample from the physics body subscription
    #[wasm_bindgen(js_name = onPosition)]
    pub fn on_position(&mut self, x: f32, y: f32, z: f32, now_ms: f64) {
        self.core.on_position(Vec3::new(x, y, z), now_ms);
    }

    /// Body operations queued since the last call, as a JSON array
    #[wasm_bindgen(js_name = takeCommandsJson)]
    pub fn take_commands_json(&mut self) -> String {
        let commands = self.core.take_commands();
        commands_json(&commands)
    }

    // === PAGE ===

    /// Returns true when the walls need rebuilding
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.core.resize(width, height)
    }

    /// Returns whether the viewport is at the bottom of the page
    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self, window_height: f64, scroll_y: f64, document_height: f64, now_ms: f64) -> bool {
        self.core.on_scroll(window_height, scroll_y, document_height, now_ms)
    }

    #[wasm_bindgen(js_name = acceptPrompt)]
    pub fn accept_prompt(&mut self, now_ms: f64) -> bool {
        self.core.accept_prompt(now_ms)
    }

    #[wasm_bindgen(js_name = declinePrompt)]
    pub fn decline_prompt(&mut self) -> bool {
        self.core.decline_prompt()
    }

    // === SIGNALS ===

    #[wasm_bindgen(getter, js_name = sceneVisible)]
    pub fn scene_visible(&self) -> bool { self.core.scene_visible() }

    #[wasm_bindgen(getter)]
    pub fn fading(&self) -> bool { self.core.is_fading() }

    #[wasm_bindgen(getter, js_name = indicatorVisible)]
    pub fn indicator_visible(&self) -> bool { self.core.indicator_visible() }

    #[wasm_bindgen(getter, js_name = popupOpen)]
    pub fn popup_open(&self) -> bool { self.core.popup_open() }

    #[wasm_bindgen(getter, js_name = isResting)]
    pub fn is_resting(&self) -> bool { self.core.is_resting() }

    #[wasm_bindgen(getter, js_name = throwCount)]
    pub fn throw_count(&self) -> u32 { self.core.throw_count() }

    #[wasm_bindgen(getter, js_name = pendingTimers)]
    pub fn pending_timers(&self) -> u32 { self.core.pending_timers() as u32 }

    #[wasm_bindgen(getter)]
    pub fn visibility(&self) -> String {
        match self.core.visibility() {
            SceneVisibility::Hidden => "hidden",
            SceneVisibility::Active => "active",
            SceneVisibility::FadingOut => "fadingOut",
        }
        .to_string()
    }

    // === HOST DATA ===

    /// Pip count for each cube face of the mounted die
    pub fn faces(&self) -> Vec<u8> {
        self.core.faces().to_vec()
    }

    #[wasm_bindgen(js_name = wallsJson)]
    pub fn walls_json(&self) -> String {
        serde_json::to_string(&self.core.walls()).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = boundsJson)]
    pub fn bounds_json(&self) -> String {
        serde_json::to_string(&self.core.bounds()).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = bodyDefinitionJson)]
    pub fn body_definition_json(&self) -> String {
        serde_json::to_string(self.core.body_definition()).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = worldDefinitionJson)]
    pub fn world_definition_json(&self) -> String {
        serde_json::to_string(self.core.world_definition()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Drop position as `[x, y, z]`
    #[wasm_bindgen(js_name = dropPosition)]
    pub fn drop_position(&self) -> Vec<f32> {
        self.core.config().throw.drop_position.to_array().to_vec()
    }

    #[wasm_bindgen(js_name = lastThrowJson)]
    pub fn last_throw_json(&self) -> String {
        match self.core.last_throw() {
            Some(record) => serde_json::to_string(record).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl Default for DiceScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Timeline globe transition between two itinerary points
#[wasm_bindgen]
pub struct PathAnimation {
    clock: PathClock,
}

#[wasm_bindgen]
impl PathAnimation {
    #[wasm_bindgen(constructor)]
    pub fn new(multiplier: f64) -> Self {
        Self {
            clock: PathClock::new(multiplier),
        }
    }

    /// Start a transition, replacing the current one
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        &mut self,
        from_lat: f64,
        from_lng: f64,
        from_height: f64,
        to_lat: f64,
        to_lng: f64,
        to_height: f64,
        duration_s: f64,
        now_ms: f64,
    ) {
        self.clock.start(
            GeoPoint::new(from_lat, from_lng, from_height),
            GeoPoint::new(to_lat, to_lng, to_height),
            duration_s,
            now_ms,
        );
    }

    /// `[lat, lng, height]` at `now_ms`, or an empty array when idle
    pub fn tick(&mut self, now_ms: f64) -> Vec<f64> {
        match self.clock.tick(now_ms) {
            Some(p) => vec![p.lat, p.lng, p.height],
            None => Vec::new(),
        }
    }

    #[wasm_bindgen(getter, js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.clock.is_animating()
    }

    #[wasm_bindgen(js_name = windowJson)]
    pub fn window_json(&self) -> String {
        match self.clock.window() {
            Some(w) => serde_json::to_string(w).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }
}
