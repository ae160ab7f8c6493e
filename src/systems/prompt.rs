//! "Throw a die?" prompt shown after the visitor lingers at the bottom of the page.
//!
//! Reaching the bottom arms a timer; scrolling away disarms it. When it fires
//! and the visitor is still there, the popup opens (once per session).
//! Accepting shows the dice scene after a short delay.

use crate::core::{TimerId, TimerKind, Timers};
use crate::domain::PromptParameters;

/// True when the viewport's bottom edge is within `margin` of the document end
pub fn is_near_bottom(window_height: f64, scroll_y: f64, document_height: f64, margin: f64) -> bool {
    window_height + scroll_y >= document_height - margin
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptEvent {
    Opened,
    /// Accepted and still at the bottom: show the dice scene
    ShowScene,
}

pub struct BottomPrompt {
    params: PromptParameters,
    at_bottom: bool,
    popup_open: bool,
    shown_in_session: bool,
    prompt_timer: Option<TimerId>,
    accept_timer: Option<TimerId>,
}

impl BottomPrompt {
    pub fn new(params: PromptParameters) -> Self {
        Self {
            params,
            at_bottom: false,
            popup_open: false,
            shown_in_session: false,
            prompt_timer: None,
            accept_timer: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.popup_open
    }

    pub fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    pub fn shown_in_session(&self) -> bool {
        self.shown_in_session
    }

    pub fn pending_timers(&self) -> usize {
        self.prompt_timer.is_some() as usize + self.accept_timer.is_some() as usize
    }

    /// Scroll position changed
    pub fn on_scroll(&mut self, at_bottom: bool, now: f64, timers: &mut Timers) {
        self.at_bottom = at_bottom;

        if at_bottom {
            if !self.popup_open && !self.shown_in_session && self.prompt_timer.is_none() {
                self.prompt_timer = Some(timers.schedule(TimerKind::Prompt, now + self.params.delay_ms));
            }
        } else {
            timers.cancel_slot(&mut self.prompt_timer);
        }
    }

    /// Convenience for raw scroll metrics
    pub fn on_scroll_metrics(
        &mut self,
        window_height: f64,
        scroll_y: f64,
        document_height: f64,
        now: f64,
        timers: &mut Timers,
    ) -> bool {
        let at_bottom = is_near_bottom(window_height, scroll_y, document_height, self.params.bottom_margin_px);
        self.on_scroll(at_bottom, now, timers);
        at_bottom
    }

    /// The navbar die is back (scene hidden). A visitor still lingering at the
    /// bottom gets the prompt after the usual delay.
    pub fn on_indicator_visible(&mut self, now: f64, timers: &mut Timers) -> bool {
        if !self.at_bottom || self.popup_open || self.shown_in_session || self.prompt_timer.is_some() {
            return false;
        }
        self.prompt_timer = Some(timers.schedule(TimerKind::Prompt, now + self.params.delay_ms));
        true
    }

    /// Visitor said yes. Returns false when no popup is open.
    pub fn accept(&mut self, now: f64, timers: &mut Timers) -> bool {
        if !self.popup_open {
            return false;
        }
        timers.cancel_slot(&mut self.accept_timer);
        self.accept_timer = Some(timers.schedule(TimerKind::PromptAccept, now + self.params.accept_delay_ms));
        true
    }

    /// Visitor said no
    pub fn decline(&mut self, timers: &mut Timers) -> bool {
        timers.cancel_slot(&mut self.accept_timer);
        let was_open = self.popup_open;
        self.popup_open = false;
        was_open
    }

    /// Handle a fired timer. `indicator_visible` is the navbar die: the prompt
    /// only makes sense while the scene is not already up.
    pub fn on_timer(&mut self, id: TimerId, indicator_visible: bool) -> Option<PromptEvent> {
        if self.prompt_timer == Some(id) {
            self.prompt_timer = None;
            if self.at_bottom && !self.popup_open && indicator_visible && !self.shown_in_session {
                self.popup_open = true;
                self.shown_in_session = true;
                return Some(PromptEvent::Opened);
            }
            return None;
        }

        if self.accept_timer == Some(id) {
            self.accept_timer = None;
            self.popup_open = false;
            if self.at_bottom && indicator_visible {
                return Some(PromptEvent::ShowScene);
            }
        }
        None
    }

    pub fn teardown(&mut self, timers: &mut Timers) {
        timers.cancel_slot(&mut self.prompt_timer);
        timers.cancel_slot(&mut self.accept_timer);
        self.popup_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> (BottomPrompt, Timers) {
        (BottomPrompt::new(PromptParameters::default()), Timers::new())
    }

    fn fire(p: &mut BottomPrompt, timers: &mut Timers, now: f64, indicator: bool) -> Vec<PromptEvent> {
        std::iter::from_fn(|| timers.pop_due(now))
            .filter_map(|t| p.on_timer(t.id, indicator))
            .collect()
    }

    #[test]
    fn near_bottom_uses_margin() {
        assert!(is_near_bottom(800.0, 1150.0, 2000.0, 50.0));
        assert!(!is_near_bottom(800.0, 1149.0, 2000.0, 50.0));
    }

    #[test]
    fn lingering_at_bottom_opens_once() {
        let (mut p, mut timers) = prompt();
        p.on_scroll(true, 0.0, &mut timers);
        p.on_scroll(true, 100.0, &mut timers);
        assert_eq!(timers.pending_of(TimerKind::Prompt), 1);

        assert_eq!(fire(&mut p, &mut timers, 1500.0, true), vec![PromptEvent::Opened]);
        assert!(p.is_open());

        p.decline(&mut timers);
        p.on_scroll(false, 2000.0, &mut timers);
        p.on_scroll(true, 2100.0, &mut timers);
        assert_eq!(timers.pending_count(), 0);
        assert!(fire(&mut p, &mut timers, 10_000.0, true).is_empty());
    }

    #[test]
    fn scrolling_away_cancels_prompt() {
        let (mut p, mut timers) = prompt();
        p.on_scroll(true, 0.0, &mut timers);
        p.on_scroll(false, 700.0, &mut timers);
        assert_eq!(timers.pending_count(), 0);
        assert!(!p.is_open());
    }

    #[test]
    fn prompt_waits_while_scene_is_up() {
        let (mut p, mut timers) = prompt();
        p.on_scroll(true, 0.0, &mut timers);
        assert!(fire(&mut p, &mut timers, 1500.0, false).is_empty());
        assert!(!p.shown_in_session());
    }

    #[test]
    fn indicator_return_rearms_dropped_prompt() {
        let (mut p, mut timers) = prompt();
        p.on_scroll(true, 0.0, &mut timers);
        // Fired while the scene was up: dropped.
        assert!(fire(&mut p, &mut timers, 1500.0, false).is_empty());

        assert!(p.on_indicator_visible(9000.0, &mut timers));
        assert!(!p.on_indicator_visible(9100.0, &mut timers));
        assert!(fire(&mut p, &mut timers, 10_499.0, true).is_empty());
        assert_eq!(fire(&mut p, &mut timers, 10_500.0, true), vec![PromptEvent::Opened]);
    }

    #[test]
    fn indicator_return_away_from_bottom_does_nothing() {
        let (mut p, mut timers) = prompt();
        p.on_scroll(false, 0.0, &mut timers);
        assert!(!p.on_indicator_visible(100.0, &mut timers));
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn accept_shows_scene_after_delay() {
        let (mut p, mut timers) = prompt();
        p.on_scroll(true, 0.0, &mut timers);
        fire(&mut p, &mut timers, 1500.0, true);

        assert!(p.accept(2000.0, &mut timers));
        assert!(fire(&mut p, &mut timers, 2799.0, true).is_empty());
        assert_eq!(fire(&mut p, &mut timers, 2800.0, true), vec![PromptEvent::ShowScene]);
        assert!(!p.is_open());
    }

    #[test]
    fn accept_after_leaving_bottom_only_closes() {
        let (mut p, mut timers) = prompt();
        p.on_scroll(true, 0.0, &mut timers);
        fire(&mut p, &mut timers, 1500.0, true);
        p.accept(2000.0, &mut timers);
        p.on_scroll(false, 2100.0, &mut timers);

        assert!(fire(&mut p, &mut timers, 3000.0, true).is_empty());
        assert!(!p.is_open());
    }

    #[test]
    fn accept_without_popup_is_rejected() {
        let (mut p, mut timers) = prompt();
        assert!(!p.accept(0.0, &mut timers));
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn metrics_helper_reports_bottom() {
        let (mut p, mut timers) = prompt();
        assert!(p.on_scroll_metrics(800.0, 1200.0, 2000.0, 0.0, &mut timers));
        assert!(p.at_bottom());
        assert_eq!(p.pending_timers(), 1);
    }
}
