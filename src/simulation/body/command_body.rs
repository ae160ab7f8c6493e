use serde::Serialize;

use crate::core::Vec3;
use crate::systems::PhysicsBody;

/// Operation for the host's physics body api
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BodyCommand {
    WakeUp,
    Sleep,
    SetPosition { position: [f32; 3] },
    ApplyImpulse { impulse: [f32; 3], point: [f32; 3] },
    ApplyTorque { torque: [f32; 3] },
}

/// The die as seen from the engine: calls are recorded and the host drains
/// and replays them on the real physics body once per frame.
pub struct CommandBody {
    alive: bool,
    commands: Vec<BodyCommand>,
}

impl CommandBody {
    pub fn new() -> Self {
        Self {
            alive: false,
            commands: Vec::with_capacity(16),
        }
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
        if !alive {
            // Commands for a destroyed body would hit a stale handle on the host.
            self.commands.clear();
        }
    }

    pub fn commands(&self) -> &[BodyCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<BodyCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Default for CommandBody {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsBody for CommandBody {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn wake_up(&mut self) {
        self.commands.push(BodyCommand::WakeUp);
    }

    fn sleep(&mut self) {
        self.commands.push(BodyCommand::Sleep);
    }

    fn set_position(&mut self, position: Vec3) {
        self.commands.push(BodyCommand::SetPosition { position: position.to_array() });
    }

    fn apply_impulse(&mut self, impulse: Vec3, point: Vec3) {
        self.commands.push(BodyCommand::ApplyImpulse {
            impulse: impulse.to_array(),
            point: point.to_array(),
        });
    }

    fn apply_torque(&mut self, torque: Vec3) {
        self.commands.push(BodyCommand::ApplyTorque { torque: torque.to_array() });
    }
}

pub(crate) fn commands_json(commands: &[BodyCommand]) -> String {
    serde_json::to_string(commands).unwrap_or_else(|_| "[]".to_string())
}
