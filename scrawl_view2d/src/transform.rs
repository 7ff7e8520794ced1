// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Pan/zoom transform between logical space and screen space.
///
/// `ViewTransform` tracks a pan offset and a uniform scale and keeps cached
/// affines for both mapping directions. A logical point `l` appears on screen
/// at `offset + scale * l`; the inverse mapping is used to bring input
/// positions into logical space before they are stored.
///
/// The scale is always clamped to a configured range
/// ([`ViewTransform::DEFAULT_MIN_SCALE`], [`ViewTransform::DEFAULT_MAX_SCALE`]
/// by default). The offset is unconstrained: the surface is unbounded and the
/// view may pan freely.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    offset: Vec2,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    logical_to_screen: Affine,
    screen_to_logical: Affine,
}

impl ViewTransform {
    /// Default lower bound on the zoom scale.
    pub const DEFAULT_MIN_SCALE: f64 = 0.2;
    /// Default upper bound on the zoom scale.
    pub const DEFAULT_MAX_SCALE: f64 = 5.0;

    /// Creates an identity view: zero offset, scale `1.0`, default limits.
    #[must_use]
    pub fn new() -> Self {
        let mut view = Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            logical_to_screen: Affine::IDENTITY,
            screen_to_logical: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// Returns the current pan offset in screen space.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the lower bound of the scale range.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the upper bound of the scale range.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the pan offset in screen space, leaving the scale untouched.
    pub fn set_offset(&mut self, offset: Vec2) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
    }

    /// Pans the view by a delta in screen space.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += delta;
        self.rebuild_transforms();
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`. The
    /// current scale is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.scale);
    }

    /// Sets the scale factor, clamping it into the configured range.
    ///
    /// The offset is untouched, so the logical point at the screen origin
    /// stays put while everything else moves toward or away from it.
    pub fn set_scale(&mut self, scale: f64) {
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
    }

    /// Sets the scale and recomputes the offset so that `anchor_logical`
    /// maps exactly to `anchor_screen` under the new transform.
    ///
    /// `scale` is clamped into the configured range first; the anchoring
    /// holds for the clamped value. This is the core of pinch zoom: the
    /// logical point that was under the pinch midpoint when the gesture
    /// started stays under the (possibly moved) midpoint on every update.
    pub fn set_scale_anchored(&mut self, scale: f64, anchor_screen: Point, anchor_logical: Point) {
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        self.scale = clamped;
        self.offset = anchor_screen.to_vec2() - anchor_logical.to_vec2() * clamped;
        self.rebuild_transforms();
    }

    /// Returns the affine mapping logical space to screen space.
    #[must_use]
    pub fn logical_to_screen(&self) -> Affine {
        self.logical_to_screen
    }

    /// Returns the affine mapping screen space to logical space.
    #[must_use]
    pub fn screen_to_logical(&self) -> Affine {
        self.screen_to_logical
    }

    /// Converts a logical-space point into screen coordinates.
    #[must_use]
    pub fn logical_to_screen_point(&self, pt: Point) -> Point {
        self.logical_to_screen * pt
    }

    /// Converts a screen-space point into logical coordinates.
    #[must_use]
    pub fn screen_to_logical_point(&self, pt: Point) -> Point {
        self.screen_to_logical * pt
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            offset: self.offset,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn rebuild_transforms(&mut self) {
        // Logical → screen: scale first, then translate by the pan offset.
        self.logical_to_screen = Affine::translate(self.offset) * Affine::scale(self.scale);
        self.screen_to_logical = self.logical_to_screen.inverse();
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Current pan offset in screen coordinates.
    pub offset: Vec2,
    /// Current uniform scale factor.
    pub scale: f64,
    /// Minimum scale factor.
    pub min_scale: f64,
    /// Maximum scale factor.
    pub max_scale: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::ViewTransform;

    #[test]
    fn identity_maps_points_to_themselves() {
        let view = ViewTransform::new();
        let pt = Point::new(12.5, -3.0);
        assert_eq!(view.logical_to_screen_point(pt), pt);
        assert_eq!(view.screen_to_logical_point(pt), pt);
    }

    #[test]
    fn screen_logical_roundtrip() {
        let mut view = ViewTransform::new();
        view.set_offset(Vec2::new(-37.0, 91.5));
        view.set_scale(2.5);

        let logical = Point::new(10.0, -5.0);
        let screen = view.logical_to_screen_point(logical);
        let back = view.screen_to_logical_point(screen);
        assert!((back.x - logical.x).abs() < 1e-9);
        assert!((back.y - logical.y).abs() < 1e-9);
    }

    #[test]
    fn forward_mapping_is_offset_plus_scaled_point() {
        let mut view = ViewTransform::new();
        view.set_offset(Vec2::new(5.0, -10.0));
        view.set_scale(2.0);

        let screen = view.logical_to_screen_point(Point::new(3.0, 4.0));
        assert_eq!(screen, Point::new(5.0 + 2.0 * 3.0, -10.0 + 2.0 * 4.0));
    }

    #[test]
    fn pan_by_leaves_scale_untouched() {
        let mut view = ViewTransform::new();
        view.set_scale(3.0);
        view.pan_by(Vec2::new(10.0, 20.0));
        view.pan_by(Vec2::new(-4.0, 1.0));

        assert_eq!(view.scale(), 3.0);
        assert_eq!(view.offset(), Vec2::new(6.0, 21.0));
    }

    #[test]
    fn set_scale_clamps_to_range() {
        let mut view = ViewTransform::new();

        view.set_scale(100.0);
        assert_eq!(view.scale(), ViewTransform::DEFAULT_MAX_SCALE);

        view.set_scale(0.0001);
        assert_eq!(view.scale(), ViewTransform::DEFAULT_MIN_SCALE);

        view.set_scale(1.7);
        assert_eq!(view.scale(), 1.7);
    }

    #[test]
    fn set_zoom_limits_normalizes_and_reclamps() {
        let mut view = ViewTransform::new();
        view.set_scale(4.0);

        // Inverted range is normalized; current scale is pulled into it.
        view.set_zoom_limits(2.0, 0.5);
        assert_eq!(view.min_scale(), 0.5);
        assert_eq!(view.max_scale(), 2.0);
        assert_eq!(view.scale(), 2.0);
    }

    #[test]
    fn anchored_scale_pins_the_anchor() {
        let mut view = ViewTransform::new();
        view.set_offset(Vec2::new(30.0, -12.0));

        let anchor_screen = Point::new(150.0, 100.0);
        let anchor_logical = view.screen_to_logical_point(anchor_screen);

        view.set_scale_anchored(2.5, anchor_screen, anchor_logical);

        let mapped = view.logical_to_screen_point(anchor_logical);
        assert!((mapped.x - anchor_screen.x).abs() < 1e-9);
        assert!((mapped.y - anchor_screen.y).abs() < 1e-9);
    }

    #[test]
    fn anchored_scale_pins_the_anchor_under_a_moved_screen_point() {
        let mut view = ViewTransform::new();
        let anchor_logical = view.screen_to_logical_point(Point::new(150.0, 100.0));

        // The anchor ends up under a different screen point, as when a pinch
        // midpoint drifts mid-gesture.
        let moved = Point::new(180.0, 140.0);
        view.set_scale_anchored(1.6, moved, anchor_logical);

        let mapped = view.logical_to_screen_point(anchor_logical);
        assert!((mapped.x - moved.x).abs() < 1e-9);
        assert!((mapped.y - moved.y).abs() < 1e-9);
    }

    #[test]
    fn anchored_scale_holds_while_clamped() {
        let mut view = ViewTransform::new();
        let anchor_screen = Point::new(60.0, 60.0);
        let anchor_logical = view.screen_to_logical_point(anchor_screen);

        view.set_scale_anchored(1000.0, anchor_screen, anchor_logical);
        assert_eq!(view.scale(), ViewTransform::DEFAULT_MAX_SCALE);

        let mapped = view.logical_to_screen_point(anchor_logical);
        assert!((mapped.x - anchor_screen.x).abs() < 1e-9);
        assert!((mapped.y - anchor_screen.y).abs() < 1e-9);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut view = ViewTransform::new();
        view.set_offset(Vec2::new(1.0, 2.0));
        view.set_scale(0.5);

        let info = view.debug_info();
        assert_eq!(info.offset, Vec2::new(1.0, 2.0));
        assert_eq!(info.scale, 0.5);
        assert!(info.min_scale <= info.max_scale);
    }
}
