// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2x2 matrices acting on points in the plane.

use core::ops::Mul;

use peniko::kurbo::{Affine, Point, Vec2};

#[cfg(all(not(feature = "std"), not(test)))]
use crate::floatfuncs::FloatFuncs;

/// A 2x2 matrix `((a, b), (c, d))`.
///
/// It represents the linear map `(x, y) → (a·x + b·y, c·x + d·y)`, so
/// products read right to left: `(A * B) * p == A * (B * p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    rows: [[f64; 2]; 2],
}

impl Matrix2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Make a matrix from its coefficients in row-major order.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            rows: [[a, b], [c, d]],
        }
    }

    /// Uniform scale about the origin, `diag(factor, factor)`.
    #[inline]
    pub const fn scale(factor: f64) -> Self {
        Self::new(factor, 0.0, 0.0, factor)
    }

    /// Shear along the x axis, `[[1, k], [0, 1]]`.
    #[inline]
    pub const fn shear_x(k: f64) -> Self {
        Self::new(1.0, k, 0.0, 1.0)
    }

    /// Rotation about the origin by `theta` radians, `[[cos, -sin], [sin, cos]]`.
    ///
    /// In screen coordinates (y pointing down) a positive angle turns clockwise.
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    /// The coefficients as rows, `[[a, b], [c, d]]`.
    #[inline]
    pub const fn rows(&self) -> [[f64; 2]; 2] {
        self.rows
    }

    /// The determinant, `a·d - b·c`.
    pub fn determinant(&self) -> f64 {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Apply this matrix to a point.
    #[inline]
    pub fn apply(&self, point: Point) -> Point {
        apply_matrix(point, *self)
    }

    /// Convert to a Kurbo [`Affine`] that applies this matrix and then
    /// translates by `translation`.
    pub fn to_affine(&self, translation: Vec2) -> Affine {
        let [[a, b], [c, d]] = self.rows;
        // Kurbo stores coefficients column by column.
        Affine::new([a, c, b, d, translation.x, translation.y])
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compute `(a·x + b·y, c·x + d·y)` for `point = (x, y)`.
#[inline]
pub fn apply_matrix(point: Point, matrix: Matrix2) -> Point {
    let [[a, b], [c, d]] = matrix.rows;
    Point::new(a * point.x + b * point.y, c * point.x + d * point.y)
}

/// The matrix product `lhs · rhs`.
///
/// Not commutative: the result applies `rhs` first, then `lhs`.
pub fn multiply(lhs: Matrix2, rhs: Matrix2) -> Matrix2 {
    let [[a0, b0], [c0, d0]] = lhs.rows;
    let [[a1, b1], [c1, d1]] = rhs.rows;
    Matrix2::new(
        a0 * a1 + b0 * c1,
        a0 * b1 + b0 * d1,
        c0 * a1 + d0 * c1,
        c0 * b1 + d0 * d1,
    )
}

impl Mul for Matrix2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        multiply(self, rhs)
    }
}

impl Mul<Point> for Matrix2 {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point {
        apply_matrix(rhs, self)
    }
}

impl Mul<Vec2> for Matrix2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        apply_matrix(rhs.to_point(), self).to_vec2()
    }
}
