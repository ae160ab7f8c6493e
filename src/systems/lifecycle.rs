//! Scene visibility: `Hidden -> Active -> FadingOut -> Hidden`.
//!
//! `show` mounts the scene and hides the small navbar die; an auto-close timer
//! or an explicit close starts the fade; when the fade timer fires the scene
//! unmounts and the navbar die comes back. States are never skipped.

use serde::Serialize;

use crate::core::{TimerId, TimerKind, Timers};
use crate::domain::LifecycleParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneVisibility {
    Hidden,
    Active,
    FadingOut,
}

/// Side effects for the scene owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Rendering surface and physics world should be created
    Mounted,
    FadeStarted,
    /// Rendering surface and physics world should be destroyed
    Unmounted,
}

pub struct SceneLifecycle {
    params: LifecycleParameters,
    visibility: SceneVisibility,
    indicator_visible: bool,
    auto_close: Option<TimerId>,
    fade: Option<TimerId>,
}

impl SceneLifecycle {
    pub fn new(params: LifecycleParameters) -> Self {
        Self {
            params,
            visibility: SceneVisibility::Hidden,
            indicator_visible: true,
            auto_close: None,
            fade: None,
        }
    }

    pub fn visibility(&self) -> SceneVisibility {
        self.visibility
    }

    /// The rendering surface is mounted (active or fading)
    pub fn scene_visible(&self) -> bool {
        self.visibility != SceneVisibility::Hidden
    }

    pub fn is_fading(&self) -> bool {
        self.visibility == SceneVisibility::FadingOut
    }

    /// The persistent navbar die; never shown together with the scene
    pub fn indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    pub fn pending_timers(&self) -> usize {
        self.auto_close.is_some() as usize + self.fade.is_some() as usize
    }

    /// `Hidden -> Active`. No-op in any other state.
    pub fn show(&mut self, now: f64, timers: &mut Timers) -> Option<LifecycleEvent> {
        if self.visibility != SceneVisibility::Hidden {
            return None;
        }
        self.visibility = SceneVisibility::Active;
        self.indicator_visible = false;
        self.auto_close = Some(timers.schedule(TimerKind::AutoClose, now + self.params.auto_close_ms));
        Some(LifecycleEvent::Mounted)
    }

    /// `Active -> FadingOut`. No-op when hidden or already fading.
    pub fn close(&mut self, now: f64, timers: &mut Timers) -> Option<LifecycleEvent> {
        if self.visibility != SceneVisibility::Active {
            return None;
        }
        timers.cancel_slot(&mut self.auto_close);
        self.visibility = SceneVisibility::FadingOut;
        self.fade = Some(timers.schedule(TimerKind::FadeOut, now + self.params.fade_ms));
        Some(LifecycleEvent::FadeStarted)
    }

    /// Handle a fired timer; ids that are not current are ignored
    pub fn on_timer(&mut self, id: TimerId, now: f64, timers: &mut Timers) -> Option<LifecycleEvent> {
        if self.auto_close == Some(id) {
            self.auto_close = None;
            return self.close(now, timers);
        }
        if self.fade == Some(id) {
            self.fade = None;
            if self.visibility != SceneVisibility::FadingOut {
                return None;
            }
            self.visibility = SceneVisibility::Hidden;
            self.indicator_visible = true;
            return Some(LifecycleEvent::Unmounted);
        }
        None
    }

    /// Drop everything immediately (page teardown). Returns `Unmounted` if a scene was up.
    ///
    /// The only transition allowed to skip `FadingOut`: the page is going away,
    /// so there is nothing left to fade.
    pub fn teardown(&mut self, timers: &mut Timers) -> Option<LifecycleEvent> {
        timers.cancel_slot(&mut self.auto_close);
        timers.cancel_slot(&mut self.fade);
        let was_visible = self.scene_visible();
        self.visibility = SceneVisibility::Hidden;
        self.indicator_visible = true;
        if was_visible { Some(LifecycleEvent::Unmounted) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lifecycle() -> (SceneLifecycle, Timers) {
        (SceneLifecycle::new(LifecycleParameters::default()), Timers::new())
    }

    fn run_until(lc: &mut SceneLifecycle, timers: &mut Timers, now: f64) -> Vec<LifecycleEvent> {
        let mut out = Vec::new();
        while let Some(t) = timers.pop_due(now) {
            out.extend(lc.on_timer(t.id, t.deadline, timers));
        }
        out
    }

    #[test]
    fn show_twice_keeps_one_auto_close() {
        let (mut lc, mut timers) = lifecycle();
        assert_eq!(lc.show(0.0, &mut timers), Some(LifecycleEvent::Mounted));
        assert_eq!(lc.show(100.0, &mut timers), None);
        assert_eq!(timers.pending_of(TimerKind::AutoClose), 1);
        assert_eq!(lc.pending_timers(), 1);
    }

    #[test]
    fn auto_close_then_fade_returns_to_hidden() {
        let (mut lc, mut timers) = lifecycle();
        lc.show(0.0, &mut timers);
        assert!(!lc.indicator_visible());

        assert!(run_until(&mut lc, &mut timers, 7999.0).is_empty());
        assert_eq!(run_until(&mut lc, &mut timers, 8000.0), vec![LifecycleEvent::FadeStarted]);
        assert_eq!(lc.visibility(), SceneVisibility::FadingOut);
        assert!(lc.scene_visible());
        assert!(lc.is_fading());

        assert_eq!(run_until(&mut lc, &mut timers, 9000.0), vec![LifecycleEvent::Unmounted]);
        assert_eq!(lc.visibility(), SceneVisibility::Hidden);
        assert!(lc.indicator_visible());
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn close_cancels_auto_close() {
        let (mut lc, mut timers) = lifecycle();
        lc.show(0.0, &mut timers);
        assert_eq!(lc.close(2000.0, &mut timers), Some(LifecycleEvent::FadeStarted));
        assert_eq!(timers.pending_of(TimerKind::AutoClose), 0);
        assert_eq!(lc.close(2100.0, &mut timers), None);

        // Only the fade fires; no second FadeStarted at 8000.
        let events = run_until(&mut lc, &mut timers, 20_000.0);
        assert_eq!(events, vec![LifecycleEvent::Unmounted]);
    }

    #[test]
    fn show_while_fading_is_ignored() {
        let (mut lc, mut timers) = lifecycle();
        lc.show(0.0, &mut timers);
        lc.close(10.0, &mut timers);
        assert_eq!(lc.show(20.0, &mut timers), None);
        assert_eq!(lc.visibility(), SceneVisibility::FadingOut);
    }

    #[test]
    fn close_while_hidden_is_ignored() {
        let (mut lc, mut timers) = lifecycle();
        assert_eq!(lc.close(0.0, &mut timers), None);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn can_show_again_after_hidden() {
        let (mut lc, mut timers) = lifecycle();
        lc.show(0.0, &mut timers);
        run_until(&mut lc, &mut timers, 10_000.0);
        assert_eq!(lc.show(10_000.0, &mut timers), Some(LifecycleEvent::Mounted));
    }

    #[test]
    fn teardown_clears_timers() {
        let (mut lc, mut timers) = lifecycle();
        lc.show(0.0, &mut timers);
        assert_eq!(lc.teardown(&mut timers), Some(LifecycleEvent::Unmounted));
        assert_eq!(timers.pending_count(), 0);
        assert!(lc.indicator_visible());
        assert_eq!(lc.teardown(&mut timers), None);
    }
}
