use crate::core::TimerKind;
use crate::domain::dice::shuffled_faces;
use crate::systems::{LifecycleEvent, PromptEvent, RestEvent};

use super::DiceSceneCore;

/// Fire every timer due at `now`, in deadline order. Returns how many fired.
pub(super) fn advance(scene: &mut DiceSceneCore, now: f64) -> u32 {
    let mut fired = 0u32;

    while let Some(timer) = scene.timers.pop_due(now) {
        fired += 1;
        // Follow-up timers are scheduled from the deadline, not the (late) tick.
        let at = timer.deadline;

        match timer.kind {
            TimerKind::AutoThrow => {
                if scene.thrower.on_timer(timer.id, &mut scene.body, &mut scene.rng) {
                    scene.rest.reset(&mut scene.timers);
                }
            }
            TimerKind::RestConfirm => {
                if let Some(RestEvent::CameToRest) = scene.rest.on_timer(timer.id) {
                    scene.thrower.on_rest(&mut scene.body);
                }
            }
            TimerKind::AutoClose | TimerKind::FadeOut => {
                if let Some(event) = scene.lifecycle.on_timer(timer.id, at, &mut scene.timers) {
                    apply_lifecycle(scene, event, at);
                }
            }
            TimerKind::Prompt | TimerKind::PromptAccept => {
                let indicator = scene.lifecycle.indicator_visible();
                if let Some(PromptEvent::ShowScene) = scene.prompt.on_timer(timer.id, indicator) {
                    show(scene, at);
                }
            }
        }
    }

    fired
}

pub(super) fn show(scene: &mut DiceSceneCore, now: f64) -> bool {
    match scene.lifecycle.show(now, &mut scene.timers) {
        Some(event) => {
            apply_lifecycle(scene, event, now);
            true
        }
        None => false,
    }
}

pub(super) fn close(scene: &mut DiceSceneCore, now: f64) -> bool {
    match scene.lifecycle.close(now, &mut scene.timers) {
        Some(event) => {
            apply_lifecycle(scene, event, now);
            true
        }
        None => false,
    }
}

pub(super) fn apply_lifecycle(scene: &mut DiceSceneCore, event: LifecycleEvent, now: f64) {
    match event {
        LifecycleEvent::Mounted => {
            scene.body.set_alive(true);
            scene.faces = shuffled_faces(&mut scene.rng);
            scene.rest.reset(&mut scene.timers);
            scene.thrower.mount(now, &mut scene.timers);
            console_log!("dice scene mounted at {:.0}ms", now);
        }
        LifecycleEvent::FadeStarted => {
            console_log!("dice scene fading at {:.0}ms", now);
        }
        LifecycleEvent::Unmounted => {
            scene.thrower.unmount(&mut scene.timers);
            scene.rest.reset(&mut scene.timers);
            scene.body.set_alive(false);
            scene.prompt.on_indicator_visible(now, &mut scene.timers);
            console_log!("dice scene unmounted at {:.0}ms", now);
        }
    }
}
