use crate::core::{Timers, Xorshift32};
use crate::domain::DiceConfig;
use crate::systems::{BottomPrompt, BoundsCalculator, RestDetector, SceneLifecycle, ThrowController};

use super::command_body::CommandBody;
use super::DiceSceneCore;

pub(super) fn create_scene_core(config: DiceConfig, seed: u32) -> Result<DiceSceneCore, String> {
    config.validate()?;
    Ok(build_scene_core(config, seed))
}

/// Assemble a scene from an already validated config
pub(super) fn build_scene_core(config: DiceConfig, seed: u32) -> DiceSceneCore {
    DiceSceneCore {
        timers: Timers::new(),
        rng: Xorshift32::new(seed),
        lifecycle: SceneLifecycle::new(config.lifecycle),
        prompt: BottomPrompt::new(config.prompt),
        rest: RestDetector::new(config.rest),
        thrower: ThrowController::new(config.throw),
        bounds: BoundsCalculator::new(),
        body: CommandBody::new(),
        faces: [1, 2, 3, 4, 5, 6],
        now: 0.0,
        config,
    }
}

pub(super) fn create_scene_core_from_json(json: &str, seed: u32) -> Result<DiceSceneCore, String> {
    let config = DiceConfig::from_json(json)?;
    create_scene_core(config, seed)
}
