//! Rest detection for the thrown die.
//!
//! Position samples arrive from the host's physics world. When consecutive
//! samples move less than the threshold on every axis the detector arms a
//! confirmation timer; if the die stays still until it fires the die is
//! resting and its owner puts the body to sleep. Any larger movement cancels
//! the timer and starts over.

use serde::Serialize;

use crate::core::{TimerId, TimerKind, Timers, Vec3};
use crate::domain::RestParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RestState {
    Moving,
    PendingRest,
    Resting,
}

/// Transitions the owner has to act on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestEvent {
    /// Confirmation timer elapsed without movement; sleep the body
    CameToRest,
    /// A resting die moved again
    Woke,
}

/// Last observed state of the tracked body
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyState {
    pub position: Vec3,
    pub last_position: Vec3,
    pub is_resting: bool,
    pub rest_pending_since: Option<f64>,
}

impl Default for BodyState {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            last_position: Vec3::zero(),
            is_resting: false,
            rest_pending_since: None,
        }
    }
}

pub struct RestDetector {
    params: RestParameters,
    state: RestState,
    body: BodyState,
    confirm_timer: Option<TimerId>,
}

impl RestDetector {
    pub fn new(params: RestParameters) -> Self {
        Self {
            params,
            state: RestState::Moving,
            body: BodyState::default(),
            confirm_timer: None,
        }
    }

    pub fn state(&self) -> RestState {
        self.state
    }

    pub fn is_resting(&self) -> bool {
        self.state == RestState::Resting
    }

    pub fn body_state(&self) -> &BodyState {
        &self.body
    }

    pub fn has_pending_timer(&self) -> bool {
        self.confirm_timer.is_some()
    }

    /// Feed one position sample taken at `now` (ms)
    pub fn on_position_update(&mut self, position: Vec3, now: f64, timers: &mut Timers) -> Option<RestEvent> {
        // NaN deltas compare false and count as movement.
        let nearly_still = position.max_axis_delta(self.body.last_position) < self.params.threshold;
        self.body.position = position;

        let event = if nearly_still {
            if self.state == RestState::Moving && self.confirm_timer.is_none() {
                self.confirm_timer = Some(timers.schedule(TimerKind::RestConfirm, now + self.params.confirm_ms));
                self.body.rest_pending_since = Some(now);
                self.state = RestState::PendingRest;
            }
            None
        } else {
            timers.cancel_slot(&mut self.confirm_timer);
            self.body.rest_pending_since = None;
            self.body.is_resting = false;
            let was_resting = self.state == RestState::Resting;
            self.state = RestState::Moving;
            if was_resting { Some(RestEvent::Woke) } else { None }
        };

        self.body.last_position = position;
        event
    }

    /// Handle a fired timer. Ids other than the current confirmation timer are stale.
    pub fn on_timer(&mut self, id: TimerId) -> Option<RestEvent> {
        if self.confirm_timer != Some(id) {
            return None;
        }
        self.confirm_timer = None;

        if self.state != RestState::PendingRest {
            return None;
        }
        self.state = RestState::Resting;
        self.body.is_resting = true;
        self.body.rest_pending_since = None;
        Some(RestEvent::CameToRest)
    }

    /// Re-arm for a new throw
    pub fn reset(&mut self, timers: &mut Timers) {
        timers.cancel_slot(&mut self.confirm_timer);
        self.state = RestState::Moving;
        self.body.is_resting = false;
        self.body.rest_pending_since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> (RestDetector, Timers) {
        (RestDetector::new(RestParameters::default()), Timers::new())
    }

    /// Deliver due timers to the detector, collecting its events
    fn fire_due(det: &mut RestDetector, timers: &mut Timers, now: f64) -> Vec<RestEvent> {
        std::iter::from_fn(|| timers.pop_due(now))
            .filter_map(|t| det.on_timer(t.id))
            .collect()
    }

    #[test]
    fn still_samples_arm_then_confirm_rest() {
        let (mut det, mut timers) = detector();
        let p = Vec3::new(1.0, 0.5, 1.0);

        det.on_position_update(p, 0.0, &mut timers);
        assert_eq!(det.state(), RestState::Moving);

        det.on_position_update(p, 16.0, &mut timers);
        assert_eq!(det.state(), RestState::PendingRest);
        assert_eq!(det.body_state().rest_pending_since, Some(16.0));
        assert_eq!(timers.pending_of(TimerKind::RestConfirm), 1);

        assert!(fire_due(&mut det, &mut timers, 1015.0).is_empty());
        assert_eq!(fire_due(&mut det, &mut timers, 1016.0), vec![RestEvent::CameToRest]);
        assert!(det.is_resting());
        assert!(det.body_state().is_resting);
    }

    #[test]
    fn rest_fires_exactly_once_while_still() {
        let (mut det, mut timers) = detector();
        let p = Vec3::new(0.0, 1.0, 0.0);
        let mut events = Vec::new();

        let mut now = 0.0;
        while now <= 5000.0 {
            det.on_position_update(p + Vec3::new(0.001, 0.0, 0.0) * (now as f32 / 5000.0), now, &mut timers);
            events.extend(fire_due(&mut det, &mut timers, now));
            now += 16.0;
        }

        assert_eq!(events, vec![RestEvent::CameToRest]);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn movement_during_pending_window_prevents_rest() {
        let (mut det, mut timers) = detector();
        let p = Vec3::new(0.0, 1.0, 0.0);

        det.on_position_update(p, 0.0, &mut timers);
        det.on_position_update(p, 16.0, &mut timers);
        assert_eq!(det.state(), RestState::PendingRest);

        // Movement at T = 500 inside the 1000 ms window.
        det.on_position_update(p + Vec3::new(0.0, 0.0, 0.05), 500.0, &mut timers);
        assert_eq!(det.state(), RestState::Moving);
        assert_eq!(timers.pending_count(), 0);

        assert!(fire_due(&mut det, &mut timers, 1016.0).is_empty());
        assert!(!det.is_resting());
    }

    #[test]
    fn threshold_is_per_axis_and_exclusive() {
        let (mut det, mut timers) = detector();
        det.on_position_update(Vec3::zero(), 0.0, &mut timers);
        // Exactly the threshold counts as movement.
        det.on_position_update(Vec3::new(0.0, 0.01, 0.0), 10.0, &mut timers);
        assert_eq!(det.state(), RestState::Moving);
        det.on_position_update(Vec3::new(0.0099, 0.0199, 0.0), 20.0, &mut timers);
        assert_eq!(det.state(), RestState::PendingRest);
    }

    #[test]
    fn resting_die_wakes_on_movement() {
        let (mut det, mut timers) = detector();
        let p = Vec3::new(2.0, 0.5, -1.0);
        det.on_position_update(p, 0.0, &mut timers);
        det.on_position_update(p, 10.0, &mut timers);
        fire_due(&mut det, &mut timers, 2000.0);
        assert!(det.is_resting());

        let ev = det.on_position_update(p + Vec3::new(1.0, 0.0, 0.0), 2100.0, &mut timers);
        assert_eq!(ev, Some(RestEvent::Woke));
        assert_eq!(det.state(), RestState::Moving);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let (mut det, mut timers) = detector();
        let p = Vec3::new(0.0, 1.0, 0.0);
        det.on_position_update(p, 0.0, &mut timers);
        det.on_position_update(p, 10.0, &mut timers);
        let stale = timers.pop_due(5000.0).map(|t| t.id);

        // Movement lands before the popped timer is delivered.
        det.on_position_update(p + Vec3::new(1.0, 0.0, 0.0), 20.0, &mut timers);
        assert!(stale.is_some());
        assert_eq!(stale.and_then(|id| det.on_timer(id)), None);
    }

    #[test]
    fn reset_cancels_pending_timer() {
        let (mut det, mut timers) = detector();
        let p = Vec3::new(0.0, 1.0, 0.0);
        det.on_position_update(p, 0.0, &mut timers);
        det.on_position_update(p, 10.0, &mut timers);
        assert!(det.has_pending_timer());

        det.reset(&mut timers);
        assert!(!det.has_pending_timer());
        assert_eq!(timers.pending_count(), 0);
        assert_eq!(det.state(), RestState::Moving);
    }
}
