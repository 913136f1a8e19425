// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and button sampling.

use lintrans::{Action, ActionSet};
use winit::keyboard::KeyCode;

/// The action bound to a physical key, if any.
pub(crate) fn action_for_key(code: KeyCode) -> Option<Action> {
    Some(match code {
        KeyCode::ArrowLeft => Action::RotateLeft,
        KeyCode::ArrowRight => Action::RotateRight,
        KeyCode::ArrowUp => Action::ScaleUp,
        KeyCode::ArrowDown => Action::ScaleDown,
        KeyCode::KeyQ => Action::ShearDec,
        KeyCode::KeyE => Action::ShearInc,
        KeyCode::KeyW => Action::MoveUp,
        KeyCode::KeyS => Action::MoveDown,
        KeyCode::KeyA => Action::MoveLeft,
        KeyCode::KeyD => Action::MoveRight,
        KeyCode::KeyR => Action::Reset,
        KeyCode::Escape => Action::Quit,
        _ => return None,
    })
}

/// Held keys plus one-shot actions from the on-screen button.
#[derive(Debug, Default)]
pub(crate) struct InputSampler {
    /// Actions whose key is down.
    held: ActionSet,
    /// Actions requested since the last sample, e.g. by a click.
    pending: ActionSet,
}

impl InputSampler {
    /// Record a key going down or up.
    pub(crate) fn key(&mut self, code: KeyCode, pressed: bool) {
        let Some(action) = action_for_key(code) else {
            return;
        };
        if pressed {
            self.held.insert(action);
        } else {
            self.held.remove(action);
        }
    }

    /// Request `action` for the next tick only.
    pub(crate) fn trigger(&mut self, action: Action) {
        self.pending.insert(action);
    }

    /// Forget held keys, e.g. when focus is lost and releases won't arrive.
    pub(crate) fn release_all(&mut self) {
        self.held.clear();
    }

    /// Actions for this tick. Pending one-shot actions are consumed.
    pub(crate) fn sample(&mut self) -> ActionSet {
        let pending = core::mem::take(&mut self.pending);
        self.held | pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_key() {
        let keys = [
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::KeyQ,
            KeyCode::KeyE,
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyR,
            KeyCode::Escape,
        ];
        let bound: ActionSet = keys.into_iter().filter_map(action_for_key).collect();
        assert_eq!(bound.iter().count(), Action::ALL.len());
        assert_eq!(action_for_key(KeyCode::KeyZ), None);
    }

    #[test]
    fn held_keys_persist_until_released() {
        let mut input = InputSampler::default();
        input.key(KeyCode::ArrowRight, true);
        assert!(input.sample().contains(Action::RotateRight));
        assert!(input.sample().contains(Action::RotateRight));
        input.key(KeyCode::ArrowRight, false);
        assert!(input.sample().is_empty());
    }

    #[test]
    fn triggered_actions_last_one_sample() {
        let mut input = InputSampler::default();
        input.trigger(Action::Reset);
        assert!(input.sample().contains(Action::Reset));
        assert!(!input.sample().contains(Action::Reset));
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut input = InputSampler::default();
        input.key(KeyCode::KeyW, true);
        input.key(KeyCode::KeyD, true);
        input.release_all();
        assert!(input.sample().is_empty());
    }
}
