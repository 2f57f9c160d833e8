//! Input provider interface.
//!
//! The engine does not poll devices. A driver owns an [`InputProvider`],
//! asks it for the actions of each tick and forwards them to
//! [`Simulation::apply_input`](crate::game::Simulation::apply_input).
//!
//! [`ScriptedInput`] replays a text script, one `<tick> <action>` pair per
//! line, `#` starting a comment:
//!
//! ```text
//! # take off, glide, land
//! 10 fly_start
//! 70 fly_stop
//! 400 quit
//! ```

use std::collections::VecDeque;
use std::path::Path;

use log::info;

use crate::events::input::InputAction;

/// Source of discrete input actions, consumed once per tick.
pub trait InputProvider {
    /// Actions delivered for tick number `frame`.
    fn poll(&mut self, frame: u64) -> Vec<InputAction>;
}

/// Replays a fixed list of `(frame, action)` pairs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<(u64, InputAction)>,
}

impl ScriptedInput {
    /// `script` is sorted by frame before use.
    pub fn new(mut script: Vec<(u64, InputAction)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        Self {
            script: script.into(),
        }
    }

    /// Parse a `<tick> <action>` script.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut script = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(frame), Some(action), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(format!("Line {}: expected '<tick> <action>'", number + 1));
            };
            let frame = frame
                .parse::<u64>()
                .map_err(|e| format!("Line {}: bad tick '{}': {}", number + 1, frame, e))?;
            let action = action
                .parse::<InputAction>()
                .map_err(|e| format!("Line {}: {}", number + 1, e))?;
            script.push((frame, action));
        }
        Ok(Self::new(script))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {:?}: {}", path, e))?;
        let input = Self::parse(&text)?;
        info!("Loaded input script {:?} with {} actions", path, input.script.len());
        Ok(input)
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl InputProvider for ScriptedInput {
    fn poll(&mut self, frame: u64) -> Vec<InputAction> {
        let mut actions = Vec::new();
        while let Some(&(at, action)) = self.script.front() {
            if at > frame {
                break;
            }
            actions.push(action);
            self.script.pop_front();
        }
        actions
    }
}
