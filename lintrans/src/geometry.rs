// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sprite and the polygons derived from it.

use peniko::kurbo::{BezPath, PathEl, Point, Vec2};
pub use smallvec::SmallVec;

/// Ordered sequence of points.
///
/// Point order is the winding order and is never changed by any operation.
/// Up to four points are stored inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: SmallVec<[Point; 4]>,
}

impl Polygon {
    /// Make a polygon from points in winding order.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Points in winding order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over points in winding order.
    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Map every point, keeping the order.
    #[must_use]
    pub fn map(&self, f: impl FnMut(Point) -> Point) -> Self {
        self.points.iter().copied().map(f).collect()
    }

    /// Translate every point by `v`.
    #[must_use]
    pub fn translated(&self, v: Vec2) -> Self {
        self.map(|p| p + v)
    }

    /// Closed outline through the points, for drawing.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bp = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            bp.push(PathEl::MoveTo(*first));
            for p in points {
                bp.push(PathEl::LineTo(*p));
            }
            bp.close_path();
        }
        bp
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The reference shape that transformations are applied to.
///
/// A square centred on the origin, immutable once made.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    polygon: Polygon,
}

impl Sprite {
    /// Half the side length of the default sprite.
    pub const DEFAULT_HALF_EXTENT: f64 = 50.0;

    /// Square with corners at `±half_extent`, starting top left in screen
    /// coordinates and going clockwise.
    pub fn square(half_extent: f64) -> Self {
        let h = half_extent;
        Self {
            polygon: Polygon::new([
                Point::new(-h, -h),
                Point::new(h, -h),
                Point::new(h, h),
                Point::new(-h, h),
            ]),
        }
    }

    /// The sprite outline.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::square(Self::DEFAULT_HALF_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sprite_corners() {
        let s = Sprite::default();
        assert_eq!(
            s.polygon().points(),
            &[
                Point::new(-50.0, -50.0),
                Point::new(50.0, -50.0),
                Point::new(50.0, 50.0),
                Point::new(-50.0, 50.0),
            ]
        );
        assert!(!s.polygon().points.spilled(), "sprite must stay inline");
    }

    #[test]
    fn map_keeps_order() {
        let p = Sprite::square(1.0).polygon().map(|p| Point::new(p.y, p.x));
        assert_eq!(
            p.points(),
            &[
                Point::new(-1.0, -1.0),
                Point::new(-1.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, -1.0),
            ]
        );
    }

    #[test]
    fn translated_moves_every_point() {
        let s = Sprite::square(2.0);
        let t = s.polygon().translated(Vec2::new(10.0, -5.0));
        assert_eq!(t.len(), 4);
        for (a, b) in s.polygon().iter().zip(&t) {
            assert_eq!(*a + Vec2::new(10.0, -5.0), *b);
        }
    }

    #[test]
    fn outline_is_closed() {
        let bp = Sprite::default().polygon().to_bez_path();
        let els = bp.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(-50.0, -50.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn empty_polygon_has_empty_outline() {
        let p = Polygon::default();
        assert!(p.is_empty());
        assert!(p.to_bez_path().elements().is_empty());
    }
}
