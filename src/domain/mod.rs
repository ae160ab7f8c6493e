pub mod config;
pub mod dice;

pub use config::{DiceConfig, LifecycleParameters, PromptParameters, RestParameters, StrengthRange, ThrowParameters};
pub use dice::{BodyDefinition, ContactMaterial, WorldDefinition};
