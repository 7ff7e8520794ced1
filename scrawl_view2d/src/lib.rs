// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl View 2D: the pan/zoom view transform of a drawing surface.
//!
//! This crate provides a small, headless model of the view a whiteboard is
//! looked at through. It focuses on:
//! - Pan offset + uniform zoom state, with zoom clamped to a configured range.
//! - Coordinate conversion between logical (stroke-storage) space and
//!   screen (device pixel) space.
//! - Anchored zoom: changing the scale while pinning a chosen logical point
//!   under a chosen screen point.
//!
//! It does **not** own any stroke list or rendering backend. Callers are
//! expected to:
//! - Store stroke geometry in logical space and map input positions through
//!   [`ViewTransform::screen_to_logical_point`] before storing them.
//! - Feed gesture deltas (from `scrawl_gesture` or elsewhere) into
//!   [`ViewTransform::pan_by`] / [`ViewTransform::set_scale_anchored`].
//! - Read [`ViewTransform::logical_to_screen`] when emitting draw commands.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use scrawl_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new();
//!
//! // Pan the view 40 pixels right, 10 down.
//! view.pan_by(Vec2::new(40.0, 10.0));
//!
//! // Map an input position into logical space for storage.
//! let screen_pt = Point::new(140.0, 110.0);
//! let logical_pt = view.screen_to_logical_point(screen_pt);
//! assert_eq!(logical_pt, Point::new(100.0, 100.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; a logical point
//!   `l` appears on screen at `offset + scale * l`.
//! - Panning operates in screen space; zooming is expressed as a scalar.
//! - Rotation is intentionally left out of the design.
//! - Gesture interpretation (which input means pan, which means zoom) lives
//!   in higher-level crates built on top of this one.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;

pub use transform::{ViewTransform, ViewTransformDebugInfo};
