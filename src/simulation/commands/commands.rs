use crate::core::Vec3;
use crate::systems::RestEvent;

use super::DiceSceneCore;

/// Click on the die. Ignored when no scene is mounted.
pub(super) fn throw_dice(scene: &mut DiceSceneCore) -> bool {
    if !scene.thrower.throw_body(&mut scene.body, &mut scene.rng) {
        return false;
    }
    scene.rest.reset(&mut scene.timers);
    true
}

pub(super) fn on_position(scene: &mut DiceSceneCore, position: Vec3, now: f64) -> Option<RestEvent> {
    if !scene.lifecycle.scene_visible() {
        return None;
    }
    scene.rest.on_position_update(position, now, &mut scene.timers)
}

pub(super) fn resize(scene: &mut DiceSceneCore, width: f32, height: f32) -> bool {
    match scene.bounds.update(width, height) {
        Some(bounds) => {
            console_log!("dice bounds {:.2}..{:.2} for {}x{}", bounds.left, bounds.right, width, height);
            true
        }
        None => false,
    }
}

pub(super) fn on_scroll(scene: &mut DiceSceneCore, window_height: f64, scroll_y: f64, document_height: f64, now: f64) -> bool {
    scene
        .prompt
        .on_scroll_metrics(window_height, scroll_y, document_height, now, &mut scene.timers)
}

/// Tear everything down (page unmount). Leaves no pending timers behind.
pub(super) fn unmount(scene: &mut DiceSceneCore) {
    let now = scene.now;
    if let Some(event) = scene.lifecycle.teardown(&mut scene.timers) {
        super::events::apply_lifecycle(scene, event, now);
    }
    scene.prompt.teardown(&mut scene.timers);
    scene.thrower.unmount(&mut scene.timers);
    scene.rest.reset(&mut scene.timers);

    let leaked = scene.timers.pending_count();
    if leaked > 0 {
        console_warn!("{} timers still pending after unmount; dropping them", leaked);
        scene.timers.clear();
    }
}
