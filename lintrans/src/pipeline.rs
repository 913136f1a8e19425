// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derivation of the transform matrices and the transformed sprite.
//!
//! The order is fixed: scale, then shear, then rotate, then translate.
//! Points go through each matrix in turn, and the combined matrix is
//! computed separately as `M = R · Sh · S`, so that `M·p + t` reproduces
//! the stepwise result.

use peniko::kurbo::{Affine, Vec2};

use crate::{
    geometry::{Polygon, Sprite},
    matrix::{apply_matrix, multiply, Matrix2},
    readout::MatrixReadout,
    state::TransformState,
};

/// The elementary matrices and their product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrices {
    /// `S = diag(scale, scale)`.
    pub scale: Matrix2,
    /// `Sh = [[1, shear], [0, 1]]`.
    pub shear: Matrix2,
    /// `R = [[cos, -sin], [sin, cos]]`.
    pub rotation: Matrix2,
    /// `M = R · Sh · S`.
    pub combined: Matrix2,
}

impl Matrices {
    /// Build the matrices for `state`.
    pub fn from_state(state: &TransformState) -> Self {
        let scale = Matrix2::scale(state.scale);
        let shear = Matrix2::shear_x(state.shear);
        let rotation = Matrix2::rotation(state.angle);
        let combined = multiply(multiply(rotation, shear), scale);
        Self {
            scale,
            shear,
            rotation,
            combined,
        }
    }

    /// Labelled readouts in display order: scale, shear, rotation, combined.
    pub fn readouts(&self) -> [MatrixReadout; 4] {
        [
            MatrixReadout::new("Scale:", &self.scale),
            MatrixReadout::new("Shear:", &self.shear),
            MatrixReadout::new("Rotation:", &self.rotation),
            MatrixReadout::new("Combined:", &self.combined),
        ]
    }
}

/// Everything the renderer needs for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The untransformed sprite.
    pub original: Polygon,
    /// The sprite after scale, shear, rotation and translation.
    pub transformed: Polygon,
    /// Matrices used for `transformed`.
    pub matrices: Matrices,
    /// Translation applied after the linear part.
    pub translation: Vec2,
}

impl Frame {
    /// The whole transformation as a Kurbo [`Affine`].
    pub fn affine(&self) -> Affine {
        self.matrices.combined.to_affine(self.translation)
    }
}

/// Run the pipeline for `state` on `sprite`.
///
/// Nothing is cached between calls; every frame is derived from scratch.
pub fn evaluate(state: &TransformState, sprite: &Sprite) -> Frame {
    let matrices = Matrices::from_state(state);
    let Matrices {
        scale: s,
        shear: sh,
        rotation: r,
        ..
    } = matrices;

    let original = sprite.polygon().clone();
    let scaled = original.map(|p| apply_matrix(p, s));
    let sheared = scaled.map(|p| apply_matrix(p, sh));
    let rotated = sheared.map(|p| apply_matrix(p, r));
    let transformed = rotated.translated(state.translation);

    Frame {
        original,
        transformed,
        matrices,
        translation: state.translation,
    }
}
