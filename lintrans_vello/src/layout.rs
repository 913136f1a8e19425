// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen placement of the demo area and the sidebar.

use lintrans::peniko::kurbo::{Point, Rect, Size, Vec2};

/// Width of the sidebar holding the button and the readouts.
pub const SIDEBAR_WIDTH: f64 = 320.0;

/// Distance between grid lines in the demo area.
pub const GRID_SPACING: f64 = 50.0;

/// Left margin of sidebar content.
const SIDEBAR_MARGIN: f64 = 20.0;

/// Vertical positions of the four matrix readouts.
pub const READOUT_TOPS: [f64; 4] = [100.0, 190.0, 280.0, 370.0];

/// Vertical position of the controls list.
pub const CONTROLS_TOP: f64 = 460.0;

/// Placement of everything on screen for a given window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    size: Size,
}

impl Layout {
    /// Lay out a window of `size` logical pixels.
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Window size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width left for the demo area after the sidebar.
    pub fn demo_width(&self) -> f64 {
        (self.size.width - SIDEBAR_WIDTH).max(0.0)
    }

    /// The demo area, left of the sidebar.
    pub fn demo_area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.demo_width(), self.size.height)
    }

    /// The sidebar, on the right edge of the window.
    pub fn sidebar(&self) -> Rect {
        Rect::new(
            self.demo_width(),
            0.0,
            self.demo_width() + SIDEBAR_WIDTH,
            self.size.height,
        )
    }

    /// Centre of the demo area, moved up and left onto the nearest grid intersection.
    ///
    /// Sprite coordinates are drawn relative to this point.
    pub fn snapped_center(&self) -> Point {
        let snap = |v: f64| {
            let v = (v / 2.0).floor();
            v - v.rem_euclid(GRID_SPACING)
        };
        Point::new(snap(self.demo_width()), snap(self.size.height))
    }

    /// Offset from sprite coordinates to screen coordinates.
    pub fn origin(&self) -> Vec2 {
        self.snapped_center().to_vec2()
    }

    /// X positions of vertical grid lines.
    pub fn grid_columns(&self) -> impl Iterator<Item = f64> {
        grid_positions(self.demo_width())
    }

    /// Y positions of horizontal grid lines.
    pub fn grid_rows(&self) -> impl Iterator<Item = f64> {
        grid_positions(self.size.height)
    }

    /// Left edge of sidebar content.
    pub fn sidebar_left(&self) -> f64 {
        self.demo_width() + SIDEBAR_MARGIN
    }

    /// The Reset button.
    pub fn reset_button(&self) -> Rect {
        Rect::from_origin_size(
            (self.sidebar_left(), 40.0),
            (SIDEBAR_WIDTH - 2.0 * SIDEBAR_MARGIN, 35.0),
        )
    }

    /// `true` if `p` is on the Reset button.
    pub fn hit_reset(&self, p: Point) -> bool {
        self.reset_button().contains(p)
    }
}

fn grid_positions(extent: f64) -> impl Iterator<Item = f64> {
    (0_u32..)
        .map(|i| f64::from(i) * GRID_SPACING)
        .take_while(move |v| *v < extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_takes_the_right_edge() {
        let l = Layout::new(Size::new(1280.0, 720.0));
        assert_eq!(l.demo_width(), 960.0);
        assert_eq!(l.sidebar(), Rect::new(960.0, 0.0, 1280.0, 720.0));
        assert_eq!(l.reset_button(), Rect::new(980.0, 40.0, 1260.0, 75.0));
    }

    #[test]
    fn center_snaps_to_grid() {
        let l = Layout::new(Size::new(1366.0, 768.0));
        // demo width 1046, half 523 → 500; half height 384 → 350.
        assert_eq!(l.snapped_center(), Point::new(500.0, 350.0));
        assert_eq!(l.origin(), Vec2::new(500.0, 350.0));
    }

    #[test]
    fn narrow_window_has_no_demo_area() {
        let l = Layout::new(Size::new(200.0, 300.0));
        assert_eq!(l.demo_width(), 0.0);
        assert_eq!(l.grid_columns().count(), 0);
        assert_eq!(l.snapped_center(), Point::new(0.0, 150.0));
    }

    #[test]
    fn grid_lines_cover_the_demo_area() {
        let l = Layout::new(Size::new(470.0, 120.0));
        assert_eq!(l.grid_columns().collect::<Vec<_>>(), [0.0, 50.0, 100.0]);
        assert_eq!(l.grid_rows().collect::<Vec<_>>(), [0.0, 50.0, 100.0]);
    }

    #[test]
    fn reset_hit_testing() {
        let l = Layout::new(Size::new(1280.0, 720.0));
        assert!(l.hit_reset(Point::new(1000.0, 50.0)));
        assert!(!l.hit_reset(Point::new(1000.0, 90.0)));
        assert!(!l.hit_reset(Point::new(500.0, 50.0)));
    }
}
