//! Scene - the dice easter-egg as one event-driven unit
//!
//! Single-threaded and host-driven: every entry point takes the host's clock
//! (`now`, ms), first fires timers that came due, then applies the event.
//!
//! Input handling is in commands/, timer routing and lifecycle effects in
//! events/, construction in init/. The wasm surface is facade.rs.

use crate::core::{TimerKind, Timers, Vec3, Xorshift32};
use crate::domain::{BodyDefinition, DiceConfig, WorldDefinition};
use crate::systems::bounds::{wall_planes, WallPlane, WorldBounds};
use crate::systems::{
    BodyState, BottomPrompt, BoundsCalculator, RestDetector, RestEvent, RestState, SceneLifecycle,
    SceneVisibility, ThrowController, ThrowRecord,
};

#[path = "body/command_body.rs"]
mod command_body;
#[path = "commands/commands.rs"]
mod commands;
#[path = "events/events.rs"]
mod events;
#[path = "init/init.rs"]
mod init;
mod facade;

pub use command_body::{BodyCommand, CommandBody};
pub use facade::{DiceScene, PathAnimation};

pub(crate) use command_body::commands_json;

pub const DEFAULT_SEED: u32 = 12345;

/// The dice scene: lifecycle, prompt, throw and rest detection sharing one timer queue
pub struct DiceSceneCore {
    config: DiceConfig,
    timers: Timers,
    rng: Xorshift32,

    lifecycle: SceneLifecycle,
    prompt: BottomPrompt,
    rest: RestDetector,
    thrower: ThrowController,
    bounds: BoundsCalculator,

    body: CommandBody,
    faces: [u8; 6],

    // Latest host time seen
    now: f64,
}

impl DiceSceneCore {
    pub fn new(config: DiceConfig, seed: u32) -> Result<Self, String> {
        init::create_scene_core(config, seed)
    }

    pub fn from_json(json: &str, seed: u32) -> Result<Self, String> {
        init::create_scene_core_from_json(json, seed)
    }

    pub fn with_defaults() -> Self {
        init::build_scene_core(DiceConfig::default(), DEFAULT_SEED)
    }

    pub fn config(&self) -> &DiceConfig {
        &self.config
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Catch up with the host clock: fire every timer due at `now`
    pub fn advance(&mut self, now: f64) -> u32 {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;
        events::advance(self, now)
    }

    /// Advance to `now` and return the scene clock (never moves backwards)
    fn sync(&mut self, now: f64) -> f64 {
        self.advance(now);
        self.now
    }

    // === LIFECYCLE ===

    pub fn show(&mut self, now: f64) -> bool {
        let now = self.sync(now);
        events::show(self, now)
    }

    pub fn close(&mut self, now: f64) -> bool {
        let now = self.sync(now);
        events::close(self, now)
    }

    pub fn unmount(&mut self) {
        commands::unmount(self);
    }

    // === DIE ===

    pub fn throw_dice(&mut self, now: f64) -> bool {
        self.advance(now);
        commands::throw_dice(self)
    }

    pub fn on_position(&mut self, position: Vec3, now: f64) -> Option<RestEvent> {
        let now = self.sync(now);
        commands::on_position(self, position, now)
    }

    pub fn take_commands(&mut self) -> Vec<BodyCommand> {
        self.body.take_commands()
    }

    pub fn commands(&self) -> &[BodyCommand] {
        self.body.commands()
    }

    // === PAGE ===

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        commands::resize(self, width, height)
    }

    pub fn on_scroll(&mut self, window_height: f64, scroll_y: f64, document_height: f64, now: f64) -> bool {
        let now = self.sync(now);
        commands::on_scroll(self, window_height, scroll_y, document_height, now)
    }

    pub fn accept_prompt(&mut self, now: f64) -> bool {
        let now = self.sync(now);
        self.prompt.accept(now, &mut self.timers)
    }

    pub fn decline_prompt(&mut self) -> bool {
        self.prompt.decline(&mut self.timers)
    }

    // === STATE ===

    pub fn visibility(&self) -> SceneVisibility {
        self.lifecycle.visibility()
    }

    pub fn scene_visible(&self) -> bool {
        self.lifecycle.scene_visible()
    }

    pub fn is_fading(&self) -> bool {
        self.lifecycle.is_fading()
    }

    pub fn indicator_visible(&self) -> bool {
        self.lifecycle.indicator_visible()
    }

    pub fn popup_open(&self) -> bool {
        self.prompt.is_open()
    }

    pub fn rest_state(&self) -> RestState {
        self.rest.state()
    }

    pub fn is_resting(&self) -> bool {
        self.rest.is_resting()
    }

    pub fn body_state(&self) -> &BodyState {
        self.rest.body_state()
    }

    pub fn throw_count(&self) -> u32 {
        self.thrower.throw_count()
    }

    pub fn last_throw(&self) -> Option<&ThrowRecord> {
        self.thrower.last_throw()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    pub fn pending_timers_of(&self, kind: TimerKind) -> usize {
        self.timers.pending_of(kind)
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds.current()
    }

    pub fn walls(&self) -> [WallPlane; 5] {
        wall_planes(&self.bounds.current())
    }

    pub fn faces(&self) -> [u8; 6] {
        self.faces
    }

    pub fn body_definition(&self) -> &BodyDefinition {
        &self.config.body
    }

    pub fn world_definition(&self) -> &WorldDefinition {
        &self.config.world
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
