//! Engine configuration.
//!
//! Loaded once when a scene is created, either from defaults (the site's
//! tuned constants) or from a JSON document with the same shape. Every field
//! is optional in JSON; missing fields keep their default.

use serde::{Deserialize, Serialize};

use crate::core::Vec3;

use super::dice::{BodyDefinition, WorldDefinition};

/// Closed interval a strength is drawn from
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthRange {
    pub min: f32,
    pub max: f32,
}

impl StrengthRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(format!("{}: range bounds must be finite (min={}, max={})", name, self.min, self.max));
        }
        if self.min < 0.0 {
            return Err(format!("{}: min must be >= 0, got {}", name, self.min));
        }
        if self.min > self.max {
            return Err(format!("{}: min ({}) is greater than max ({})", name, self.min, self.max));
        }
        Ok(())
    }
}

/// How a throw is generated
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThrowParameters {
    pub impulse_strength: StrengthRange,
    pub torque_strength: StrengthRange,
    /// Horizontal reposition jitter; each axis is `(r - 0.5) * position_jitter`
    pub position_jitter: f32,
    /// Scales the impulse down to the die's small mass
    pub impulse_damping: f32,
    /// Horizontal direction components are `(r - 0.5) * horizontal_spread`
    pub horizontal_spread: f32,
    /// Vertical direction component is `-downward_bias`
    pub downward_bias: f32,
    /// Where every throw restarts from
    pub drop_position: Vec3,
    /// Delay between mounting the scene and the automatic first throw
    pub auto_throw_delay_ms: f64,
}

impl Default for ThrowParameters {
    fn default() -> Self {
        Self {
            impulse_strength: StrengthRange::new(3.0, 5.0),
            torque_strength: StrengthRange::new(5.0, 13.0),
            position_jitter: 1.0,
            impulse_damping: 0.1,
            horizontal_spread: 1.5,
            downward_bias: 2.0,
            drop_position: Vec3::new(0.0, 7.0, 0.0),
            auto_throw_delay_ms: 300.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestParameters {
    /// Per-axis movement between samples below which the die counts as still
    pub threshold: f32,
    /// How long it has to stay still before it is put to sleep
    pub confirm_ms: f64,
}

impl Default for RestParameters {
    fn default() -> Self {
        Self {
            threshold: 0.01,
            confirm_ms: 1000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifecycleParameters {
    pub auto_close_ms: f64,
    pub fade_ms: f64,
}

impl Default for LifecycleParameters {
    fn default() -> Self {
        Self {
            auto_close_ms: 8000.0,
            fade_ms: 1000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptParameters {
    /// Time spent at the bottom of the page before the prompt opens
    pub delay_ms: f64,
    /// Delay between accepting the prompt and the scene appearing
    pub accept_delay_ms: f64,
    /// Distance from the document end that still counts as "at the bottom"
    pub bottom_margin_px: f64,
}

impl Default for PromptParameters {
    fn default() -> Self {
        Self {
            delay_ms: 1500.0,
            accept_delay_ms: 800.0,
            bottom_margin_px: 50.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiceConfig {
    pub throw: ThrowParameters,
    pub rest: RestParameters,
    pub lifecycle: LifecycleParameters,
    pub prompt: PromptParameters,
    pub body: BodyDefinition,
    pub world: WorldDefinition,
}

impl DiceConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: DiceConfig = serde_json::from_str(json).map_err(|e| format!("invalid dice config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let t = &self.throw;
        t.impulse_strength.validate("throw.impulseStrength")?;
        t.torque_strength.validate("throw.torqueStrength")?;
        non_negative("throw.positionJitter", t.position_jitter as f64)?;
        non_negative("throw.impulseDamping", t.impulse_damping as f64)?;
        non_negative("throw.horizontalSpread", t.horizontal_spread as f64)?;
        non_negative("throw.downwardBias", t.downward_bias as f64)?;
        non_negative("throw.autoThrowDelayMs", t.auto_throw_delay_ms)?;
        if !t.drop_position.is_finite() {
            return Err("throw.dropPosition must be finite".to_string());
        }

        if !(self.rest.threshold.is_finite() && self.rest.threshold > 0.0) {
            return Err(format!("rest.threshold must be > 0, got {}", self.rest.threshold));
        }
        non_negative("rest.confirmMs", self.rest.confirm_ms)?;

        non_negative("lifecycle.autoCloseMs", self.lifecycle.auto_close_ms)?;
        non_negative("lifecycle.fadeMs", self.lifecycle.fade_ms)?;

        non_negative("prompt.delayMs", self.prompt.delay_ms)?;
        non_negative("prompt.acceptDelayMs", self.prompt.accept_delay_ms)?;
        non_negative("prompt.bottomMarginPx", self.prompt.bottom_margin_px)?;

        self.body.validate()?;
        self.world.validate()?;
        Ok(())
    }
}

fn non_negative(name: &str, v: f64) -> Result<(), String> {
    if !v.is_finite() || v < 0.0 {
        return Err(format!("{} must be a finite value >= 0, got {}", name, v));
    }
    Ok(())
}
