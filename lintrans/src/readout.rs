// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text rendition of matrices for on-screen display.

extern crate alloc;
use alloc::{format, string::String};

use crate::matrix::Matrix2;

/// A titled matrix, formatted with two decimals per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixReadout {
    /// Label shown above the rows, e.g. `"Scale:"`.
    pub title: &'static str,
    /// The two rows, e.g. `"[ 1.00   0.00 ]"`.
    pub rows: [String; 2],
}

impl MatrixReadout {
    /// Format `matrix` under `title`.
    pub fn new(title: &'static str, matrix: &Matrix2) -> Self {
        let [r0, r1] = matrix.rows();
        Self {
            title,
            rows: [format_row(r0), format_row(r1)],
        }
    }
}

fn format_row([a, b]: [f64; 2]) -> String {
    format!("[ {:.2}   {:.2} ]", display_value(a), display_value(b))
}

/// Values that round to zero are shown without a sign.
fn display_value(v: f64) -> f64 {
    if -0.005 < v && v < 0.005 {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rows() {
        let r = MatrixReadout::new("Scale:", &Matrix2::IDENTITY);
        assert_eq!(r.title, "Scale:");
        assert_eq!(r.rows, ["[ 1.00   0.00 ]", "[ 0.00   1.00 ]"]);
    }

    #[test]
    fn rotation_has_no_negative_zero() {
        let r = MatrixReadout::new("Rotation:", &Matrix2::rotation(0.0));
        assert_eq!(r.rows, ["[ 1.00   0.00 ]", "[ 0.00   1.00 ]"]);
        let r = MatrixReadout::new("Shear:", &Matrix2::shear_x(-0.004));
        assert_eq!(r.rows[0], "[ 1.00   0.00 ]");
    }

    #[test]
    fn two_decimals() {
        let r = MatrixReadout::new("Combined:", &Matrix2::new(0.5403, -0.8415, 12.3456, -3.0));
        assert_eq!(r.rows, ["[ 0.54   -0.84 ]", "[ 12.35   -3.00 ]"]);
    }
}
