// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Freehand stroke data.

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;

/// One freehand stroke: an ordered point list plus the paint it was drawn
/// with.
///
/// Points are stored in logical space, so committed strokes are invariant
/// under pan/zoom. The brush and width are captured when the stroke begins
/// and never change afterwards. While a stroke is in progress the controller
/// appends to it; once committed to the stroke list it is only ever read.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Point>,
    brush: Brush,
    width: f64,
}

impl Stroke {
    /// Creates a stroke starting at `start` (logical space) with the given
    /// paint.
    #[must_use]
    pub fn new(start: Point, brush: Brush, width: f64) -> Self {
        let mut points = Vec::with_capacity(16);
        points.push(start);
        Self {
            points,
            brush,
            width,
        }
    }

    /// Appends a point (logical space) to the stroke.
    pub(crate) fn push(&mut self, pt: Point) {
        self.points.push(pt);
    }

    /// Returns the stroke's points in logical space, in draw order.
    ///
    /// Always non-empty: a stroke exists from its first point.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the brush captured when the stroke began.
    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Returns the stroke width captured when the stroke began.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns `true` if the stroke has accumulated more than its initial
    /// point.
    ///
    /// A stroke that never moved is a tap; when a second contact cuts a
    /// gesture off mid-tap, such strokes are dropped rather than committed.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.points.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::{Brush, Color};

    use super::Stroke;

    #[test]
    fn new_stroke_has_its_start_point() {
        let stroke = Stroke::new(Point::new(3.0, 4.0), Brush::Solid(Color::BLACK), 2.0);
        assert_eq!(stroke.points(), &[Point::new(3.0, 4.0)]);
        assert!(!stroke.moved());
        assert_eq!(stroke.width(), 2.0);
    }

    #[test]
    fn push_appends_in_order() {
        let mut stroke = Stroke::new(Point::new(0.0, 0.0), Brush::Solid(Color::BLACK), 2.0);
        stroke.push(Point::new(1.0, 0.0));
        stroke.push(Point::new(2.0, 1.0));

        assert_eq!(
            stroke.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 1.0),
            ]
        );
        assert!(stroke.moved());
    }
}
