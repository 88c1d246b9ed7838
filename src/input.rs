//! Keyboard handling
//!
//! Maps raw key identifiers (as reported by `KeyboardEvent.key`) to the three
//! logical game keys and tracks which move keys are currently held.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    MoveUp,
    MoveDown,
    Serve,
}

/// Key identifiers bound to each logical key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_up: String,
    pub move_down: String,
    pub serve: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: "q".to_string(),
            move_down: "e".to_string(),
            serve: " ".to_string(),
        }
    }
}

impl KeyBindings {
    /// Resolve a key identifier. Single letters match regardless of case so a
    /// release with Shift held still clears the flag it set.
    pub fn resolve(&self, key: &str) -> Option<Key> {
        let matches = |bound: &str| {
            if bound.chars().count() == 1 {
                bound.eq_ignore_ascii_case(key)
            } else {
                bound == key
            }
        };

        if matches(&self.move_up) {
            Some(Key::MoveUp)
        } else if matches(&self.move_down) {
            Some(Key::MoveDown)
        } else if matches(&self.serve) {
            Some(Key::Serve)
        } else {
            None
        }
    }
}

/// Held-key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    /// Serve key is down; repeats are ignored until it is released
    serve_held: bool,
}

impl InputState {
    /// Apply a key press. Returns true on the press that should fire a serve.
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::MoveUp => self.move_up = true,
            Key::MoveDown => self.move_down = true,
            Key::Serve => {
                let fired = !self.serve_held;
                self.serve_held = true;
                return fired;
            }
        }
        false
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::MoveUp => self.move_up = false,
            Key::MoveDown => self.move_down = false,
            Key::Serve => self.serve_held = false,
        }
    }

    /// Clear every held key, including the serve latch
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the next tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            move_up: self.move_up,
            move_down: self.move_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.resolve("q"), Some(Key::MoveUp));
        assert_eq!(keys.resolve("Q"), Some(Key::MoveUp));
        assert_eq!(keys.resolve("e"), Some(Key::MoveDown));
        assert_eq!(keys.resolve(" "), Some(Key::Serve));
        assert_eq!(keys.resolve("w"), None);
        assert_eq!(keys.resolve("Enter"), None);
    }

    #[test]
    fn test_named_keys_match_exactly() {
        let keys = KeyBindings {
            move_up: "ArrowUp".to_string(),
            move_down: "ArrowDown".to_string(),
            serve: "Enter".to_string(),
        };
        assert_eq!(keys.resolve("ArrowUp"), Some(Key::MoveUp));
        assert_eq!(keys.resolve("arrowup"), None);
        assert_eq!(keys.resolve("Enter"), Some(Key::Serve));
    }

    #[test]
    fn test_move_flags_follow_press_and_release() {
        let mut input = InputState::default();
        assert!(!input.key_down(Key::MoveUp));
        assert!(input.sample().move_up);
        input.key_down(Key::MoveDown);
        input.key_up(Key::MoveUp);
        let sampled = input.sample();
        assert!(!sampled.move_up);
        assert!(sampled.move_down);
    }

    #[test]
    fn test_release_all_clears_held_keys() {
        let mut input = InputState::default();
        input.key_down(Key::MoveUp);
        input.key_down(Key::MoveDown);
        input.key_down(Key::Serve);
        input.release_all();
        assert_eq!(input.sample(), TickInput::default());
        assert!(input.key_down(Key::Serve));
    }

    #[test]
    fn test_serve_is_edge_triggered() {
        let mut input = InputState::default();
        assert!(input.key_down(Key::Serve));
        // Auto-repeat while held
        assert!(!input.key_down(Key::Serve));
        assert!(!input.key_down(Key::Serve));
        input.key_up(Key::Serve);
        assert!(input.key_down(Key::Serve));
    }
}
