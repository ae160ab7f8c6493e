//! Sampled trajectory for the timeline globe.
//!
//! A transition between two itinerary points is a two-sample curve: start
//! coordinate at `start_ms`, end coordinate at `stop_ms`, linear in between
//! and clamped outside. `PathClock` plays a window back at a multiplier;
//! starting a new transition replaces the current window.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees, height in metres
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub height: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64, height: f64) -> Self {
        Self { lat, lng, height }
    }

    fn lerp(self, other: GeoPoint, t: f64) -> Self {
        Self {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationWindow {
    pub start_ms: f64,
    pub stop_ms: f64,
    pub from: GeoPoint,
    pub to: GeoPoint,
}

impl AnimationWindow {
    pub fn between(from: GeoPoint, to: GeoPoint, start_ms: f64, duration_s: f64) -> Self {
        Self {
            start_ms,
            stop_ms: start_ms + duration_s.max(0.0) * 1000.0,
            from,
            to,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.stop_ms - self.start_ms
    }

    /// Fraction of the window elapsed at `time_ms`, clamped to `[0, 1]`
    pub fn progress(&self, time_ms: f64) -> f64 {
        let span = self.duration_ms();
        if span <= 0.0 {
            return if time_ms >= self.start_ms { 1.0 } else { 0.0 };
        }
        ((time_ms - self.start_ms) / span).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, time_ms: f64) -> GeoPoint {
        self.from.lerp(self.to, self.progress(time_ms))
    }

    pub fn is_finished(&self, time_ms: f64) -> bool {
        time_ms >= self.stop_ms
    }
}

pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Plays an `AnimationWindow` back from host ticks
pub struct PathClock {
    multiplier: f64,
    window: Option<AnimationWindow>,
    current_ms: f64,
    last_tick_ms: Option<f64>,
}

impl PathClock {
    pub fn new(multiplier: f64) -> Self {
        Self {
            multiplier: if multiplier.is_finite() && multiplier > 0.0 { multiplier } else { DEFAULT_MULTIPLIER },
            window: None,
            current_ms: 0.0,
            last_tick_ms: None,
        }
    }

    pub fn window(&self) -> Option<&AnimationWindow> {
        self.window.as_ref()
    }

    /// Start a transition, replacing any window in flight
    pub fn start(&mut self, from: GeoPoint, to: GeoPoint, duration_s: f64, now_ms: f64) -> AnimationWindow {
        let window = AnimationWindow::between(from, to, now_ms, duration_s);
        self.window = Some(window);
        self.current_ms = window.start_ms;
        self.last_tick_ms = Some(now_ms);
        window
    }

    /// Advance by real elapsed time; returns the current position if animating
    pub fn tick(&mut self, now_ms: f64) -> Option<GeoPoint> {
        let window = self.window?;
        let last = self.last_tick_ms.unwrap_or(now_ms);
        let dt = (now_ms - last).max(0.0);
        self.last_tick_ms = Some(now_ms);
        self.current_ms = (self.current_ms + dt * self.multiplier).min(window.stop_ms);
        Some(window.position_at(self.current_ms))
    }

    pub fn is_animating(&self) -> bool {
        self.window.map_or(false, |w| !w.is_finished(self.current_ms))
    }
}

impl Default for PathClock {
    fn default() -> Self {
        Self::new(DEFAULT_MULTIPLIER)
    }
}
