// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lintrans shows what 2D linear transformations do to a square sprite.
//!
//! A tick of the visualizer goes through these steps:
//!
//! 1. The [`Integrator`] turns the held [`Action`]s and the frame time into
//!    changes of the [`TransformState`].
//! 2. [`pipeline::evaluate`] builds the scale, shear and rotation matrices,
//!    runs the [`Sprite`] through them in that order, translates the result,
//!    and computes the combined matrix `M = R · Sh · S`.
//! 3. A renderer draws the returned [`Frame`]: both polygons and the four
//!    matrices.
//!
//! ```
//! use lintrans::{pipeline, Action, Integrator, Matrix2, Sprite};
//!
//! let sprite = Sprite::default();
//! let mut integrator = Integrator::default();
//! integrator.step(Action::RotateRight.into(), 0.5);
//!
//! let frame = pipeline::evaluate(integrator.state(), &sprite);
//! assert_eq!(frame.matrices.combined, Matrix2::rotation(1.0));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc), and enable [`FramePacer`].
//! - `libm`: Use floating point implementations from [libm][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

#![cfg_attr(not(feature = "std"), no_std)]

pub use peniko;

pub mod config;
mod floatfuncs;
pub mod geometry;
pub mod integrator;
pub mod matrix;
#[cfg(feature = "std")]
pub mod pacing;
pub mod pipeline;
pub mod readout;
pub mod state;

pub use config::Config;
pub use geometry::{Polygon, Sprite};
pub use integrator::{Action, ActionSet, Integrator, Rates, Tick};
pub use matrix::Matrix2;
#[cfg(feature = "std")]
pub use pacing::FramePacer;
pub use pipeline::{Frame, Matrices};
pub use state::TransformState;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use peniko::kurbo::Vec2;

    fn assert_matrix_close(a: Matrix2, b: Matrix2) {
        for (ra, rb) in a.rows().iter().zip(b.rows().iter()) {
            for (x, y) in ra.iter().zip(rb.iter()) {
                assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn rotate_right_for_half_a_second() {
        let sprite = Sprite::default();
        let mut integrator = Integrator::default();
        // 30 frames at 60 fps.
        for _ in 0..30 {
            integrator.step(Action::RotateRight.into(), 1.0 / 60.0);
        }
        let state = integrator.state();
        assert_abs_diff_eq!(state.angle, 1.0, epsilon = 1e-12);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.shear, 0.0);
        assert_eq!(state.translation, Vec2::ZERO);

        let m = pipeline::evaluate(state, &sprite).matrices;
        assert_eq!(m.scale, Matrix2::IDENTITY);
        assert_eq!(m.shear, Matrix2::IDENTITY);
        let (sin, cos) = 1.0_f64.sin_cos();
        assert_matrix_close(m.rotation, Matrix2::new(cos, -sin, sin, cos));
        assert_matrix_close(m.combined, m.rotation);
    }

    #[test]
    fn scale_down_for_ten_seconds_stops_at_floor() {
        let sprite = Sprite::default();
        let mut integrator = Integrator::default();
        integrator.step(Action::ScaleDown.into(), 10.0);
        assert_eq!(integrator.state().scale, 0.2);
        let frame = pipeline::evaluate(integrator.state(), &sprite);
        assert_eq!(frame.matrices.scale, Matrix2::scale(0.2));
        assert_eq!(frame.matrices.scale.rows(), [[0.2, 0.0], [0.0, 0.2]]);

        let mut stepped = Integrator::default();
        for _ in 0..600 {
            stepped.step(Action::ScaleDown.into(), 1.0 / 60.0);
        }
        assert_eq!(stepped.state().scale, 0.2);
    }

    #[test]
    fn reset_restores_the_sprite() {
        let sprite = Sprite::default();
        let mut integrator = Integrator::default();
        let sequence = [
            (Action::RotateLeft, 0.4),
            (Action::ScaleUp, 1.3),
            (Action::ShearInc, 0.8),
            (Action::MoveLeft, 2.0),
            (Action::MoveDown, 0.6),
            (Action::ScaleDown, 0.2),
        ];
        for (action, dt) in sequence {
            integrator.step(action.into(), dt);
        }
        assert_ne!(pipeline::evaluate(integrator.state(), &sprite).transformed, *sprite.polygon());

        integrator.step(Action::Reset.into(), 1.0 / 60.0);
        let frame = pipeline::evaluate(integrator.state(), &sprite);
        assert_eq!(frame.transformed, *sprite.polygon());
        assert_eq!(frame.matrices.combined, Matrix2::IDENTITY);

        integrator.reset();
        assert!(integrator.state().is_identity());
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut integrator = Integrator::default();
        let mut ticks = 0;
        let inputs = [
            ActionSet::from(Action::MoveRight),
            ActionSet::from(Action::MoveRight),
            ActionSet::from(Action::Quit) | Action::MoveRight.into(),
            ActionSet::from(Action::MoveRight),
        ];
        for held in inputs {
            if integrator.step(held, 0.5) == Tick::Quit {
                break;
            }
            ticks += 1;
        }
        assert_eq!(ticks, 2);
        assert_abs_diff_eq!(integrator.state().translation.x, 200.0, epsilon = 1e-9);
    }
}
