// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameters of the sprite transformation.

use peniko::kurbo::Vec2;

/// The scale, rotation, shear and translation applied to the sprite.
///
/// This is a plain data holder; range constraints (such as the scale floor)
/// are enforced by the [`Integrator`](crate::integrator::Integrator), which
/// is the only writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Uniform scale factor, positive.
    pub scale: f64,
    /// Rotation angle in radians. Unbounded.
    pub angle: f64,
    /// Shear factor along the x axis. Unbounded.
    pub shear: f64,
    /// Translation applied after the linear part. Unbounded.
    pub translation: Vec2,
}

impl TransformState {
    /// State that leaves the sprite unchanged.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        angle: 0.0,
        shear: 0.0,
        translation: Vec2::ZERO,
    };

    /// Restore the identity values.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// `true` if every parameter has its identity value.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_identity() {
        let s = TransformState::default();
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.angle, 0.0);
        assert_eq!(s.shear, 0.0);
        assert_eq!(s.translation, Vec2::ZERO);
        assert!(s.is_identity());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = TransformState {
            scale: 2.5,
            angle: -7.0,
            shear: 0.3,
            translation: Vec2::new(400.0, -12.0),
        };
        s.reset();
        let once = s;
        s.reset();
        assert_eq!(s, once);
        assert!(s.is_identity());
    }
}
