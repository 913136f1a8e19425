// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration of held input into the [`TransformState`].
//!
//! Each tick the caller passes the set of held [`Action`]s and the time since
//! the previous tick. Every held action contributes `rate · dt` to its
//! parameter, so holding a key for `T` and then `T` again ends in the same
//! state as holding it for `2T`.

use core::ops::{BitOr, BitOrAssign};

use crate::state::TransformState;

/// Logical input actions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Decrease the rotation angle.
    RotateLeft,
    /// Increase the rotation angle.
    RotateRight,
    /// Grow the sprite.
    ScaleUp,
    /// Shrink the sprite, down to [`Rates::scale_min`].
    ScaleDown,
    /// Decrease the shear factor.
    ShearDec,
    /// Increase the shear factor.
    ShearInc,
    /// Move towards negative y (up on screen).
    MoveUp,
    /// Move towards positive y (down on screen).
    MoveDown,
    /// Move towards negative x.
    MoveLeft,
    /// Move towards positive x.
    MoveRight,
    /// Restore the identity transform.
    Reset,
    /// End the tick loop.
    Quit,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::RotateLeft,
        Self::RotateRight,
        Self::ScaleUp,
        Self::ScaleDown,
        Self::ShearDec,
        Self::ShearInc,
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::Reset,
        Self::Quit,
    ];

    #[inline]
    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// Set of held [`Action`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActionSet(u16);

impl ActionSet {
    /// No actions held.
    pub const EMPTY: Self = Self(0);

    /// Add an action, returning `true` if it was not already present.
    pub fn insert(&mut self, action: Action) -> bool {
        let absent = !self.contains(action);
        self.0 |= action.bit();
        absent
    }

    /// Remove an action, returning `true` if it was present.
    pub fn remove(&mut self, action: Action) -> bool {
        let present = self.contains(action);
        self.0 &= !action.bit();
        present
    }

    /// `true` if `action` is held.
    #[inline]
    pub const fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    /// `true` if nothing is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Remove every action.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterate over held actions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl From<Action> for ActionSet {
    fn from(action: Action) -> Self {
        Self(action.bit())
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for a in iter {
            set.insert(a);
        }
        set
    }
}

impl BitOr for ActionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ActionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Rates at which held actions change the [`TransformState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// Radians per second.
    pub rotate_rate: f64,
    /// Scale units per second.
    pub scale_rate: f64,
    /// Smallest scale reachable by [`Action::ScaleDown`].
    pub scale_min: f64,
    /// Shear units per second.
    pub shear_rate: f64,
    /// Translation units per second.
    pub move_speed: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            rotate_rate: 2.0,
            scale_rate: 0.5,
            scale_min: 0.2,
            shear_rate: 1.0,
            move_speed: 200.0,
        }
    }
}

/// Outcome of [`Integrator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Keep running.
    Continue,
    /// [`Action::Quit`] was held; the loop should end.
    Quit,
}

/// Owner and only writer of the [`TransformState`].
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    state: TransformState,
    rates: Rates,
}

impl Integrator {
    /// Make an integrator at the identity state.
    pub fn new(rates: Rates) -> Self {
        Self {
            state: TransformState::IDENTITY,
            rates,
        }
    }

    /// Current state.
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Configured rates.
    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    /// Restore the identity state.
    pub fn reset(&mut self) {
        tracing::debug!("transform state reset");
        self.state.reset();
    }

    /// Advance the state by `dt` seconds of holding `held`.
    ///
    /// `Quit` aborts the tick before anything changes. `Reset` wins over every
    /// other action held in the same tick. A negative or non-finite `dt` is
    /// treated as zero.
    pub fn step(&mut self, held: ActionSet, dt: f64) -> Tick {
        if held.contains(Action::Quit) {
            return Tick::Quit;
        }
        if held.contains(Action::Reset) {
            self.reset();
            return Tick::Continue;
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(dt, "ignoring invalid frame time");
            0.0
        };

        let Rates {
            rotate_rate,
            scale_rate,
            scale_min,
            shear_rate,
            move_speed,
        } = self.rates;
        let s = &mut self.state;

        if held.contains(Action::RotateLeft) {
            s.angle -= rotate_rate * dt;
        }
        if held.contains(Action::RotateRight) {
            s.angle += rotate_rate * dt;
        }
        if held.contains(Action::ScaleUp) {
            s.scale += scale_rate * dt;
        }
        if held.contains(Action::ScaleDown) {
            s.scale = scale_min.max(s.scale - scale_rate * dt);
        }
        if held.contains(Action::ShearDec) {
            s.shear -= shear_rate * dt;
        }
        if held.contains(Action::ShearInc) {
            s.shear += shear_rate * dt;
        }
        if held.contains(Action::MoveUp) {
            s.translation.y -= move_speed * dt;
        }
        if held.contains(Action::MoveDown) {
            s.translation.y += move_speed * dt;
        }
        if held.contains(Action::MoveLeft) {
            s.translation.x -= move_speed * dt;
        }
        if held.contains(Action::MoveRight) {
            s.translation.x += move_speed * dt;
        }

        tracing::trace!(state = ?self.state, "integrated");
        Tick::Continue
    }
}
