// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl Imaging: backend-agnostic draw-command IR and backend trait.
//!
//! This crate defines the small, plain-old-data (POD) friendly vocabulary the
//! whiteboard renderer speaks and the trait concrete drawing surfaces
//! implement. It sits between the whiteboard controller (`scrawl_board`) and
//! whatever actually puts pixels somewhere (an HTML canvas bridge, a GPU
//! renderer, a recording backend for tests).
//!
//! # Core concepts
//!
//! - **Paths**: [`PathDesc`], a command buffer of [`PathCmd`]s (move-to,
//!   line-to, close). Freehand strokes are polylines; see
//!   [`PathDesc::polyline`].
//! - **Paints and stroke styles**: [`PaintDesc`] wraps a [`peniko::Brush`]
//!   (solid color, gradient, or image pattern); [`StrokeStyle`] is
//!   [`kurbo::Stroke`] (width, caps, joins).
//! - **Operations**: [`StateOp`] mutates ambient surface state (transform,
//!   paint, stroke style); [`DrawOp`] produces pixels. [`SurfaceOp`] unifies
//!   both for logging and recording.
//! - **Backends**: [`SurfaceBackend`] accepts the operations in order.
//!
//! Ops carry their path and paint data inline: the whiteboard re-records the
//! whole scene on every render, so there is no resource-handle indirection
//! and nothing to cache across frames.
//!
//! # Example
//!
//! A minimal sketch of how a backend is driven:
//!
//! ```ignore
//! # use scrawl_imaging::*;
//! # use peniko::{Brush, Color};
//! # struct MyBackend { /* implements SurfaceBackend */ }
//! let mut backend = MyBackend { /* ... */ };
//!
//! backend.draw(DrawOp::Clear { width: 800.0, height: 600.0 });
//! backend.state(StateOp::SetPaint(PaintDesc {
//!     brush: Brush::Solid(Color::BLACK),
//! }));
//! backend.state(StateOp::SetStroke(StrokeStyle::new(4.0)));
//! backend.draw(DrawOp::StrokePath(PathDesc {
//!     commands: Box::new([
//!         PathCmd::MoveTo { x: 10.0, y: 10.0 },
//!         PathCmd::LineTo { x: 50.0, y: 40.0 },
//!     ]),
//! }));
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;

use kurbo::Point;
use peniko::Brush;

/// Affine transform type used by the draw-command IR.
pub type Affine = kurbo::Affine;

/// Stroke style used by [`StateOp::SetStroke`].
///
/// This is currently a re-export of [`kurbo::Stroke`], which captures width,
/// joins, caps, dashes, and related stroke parameters.
pub type StrokeStyle = kurbo::Stroke;

/// Simple path command enumeration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f64,
        /// Y coordinate of the new point.
        y: f64,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f64,
        /// Y coordinate of the line end.
        y: f64,
    },
    /// Close the current subpath.
    Close,
}

/// Description of a path, carried inline by draw operations.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// Builds an open polyline through `points`, in order.
    ///
    /// Returns an empty command buffer for an empty slice. A single point
    /// yields a lone `MoveTo`, a zero-length path that backends may render
    /// as nothing; callers that want a visible dot should use
    /// [`DrawOp::FillCircle`] instead.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let mut commands = alloc::vec::Vec::with_capacity(points.len());
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            commands.push(PathCmd::MoveTo {
                x: first.x,
                y: first.y,
            });
        }
        for pt in iter {
            commands.push(PathCmd::LineTo { x: pt.x, y: pt.y });
        }
        Self {
            commands: commands.into_boxed_slice(),
        }
    }
}

/// Description of a paint, carried inline by [`StateOp::SetPaint`].
#[derive(Clone, Debug)]
pub struct PaintDesc {
    /// Brush used when rendering (solid color, gradient, image pattern).
    ///
    /// This is a [`peniko::Brush`], so backends can directly map it onto
    /// their native paint representation.
    pub brush: Brush,
}

/// State operations that mutate the current surface state.
#[derive(Clone, Debug)]
pub enum StateOp {
    /// Set the current transform matrix.
    ///
    /// Applies to subsequent path geometry; [`DrawOp::Clear`] ignores it.
    SetTransform(Affine),
    /// Set the current paint.
    SetPaint(PaintDesc),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Clear the full surface.
    ///
    /// `width`/`height` are the surface dimensions in device pixels; the
    /// clear is not subject to the current transform.
    Clear {
        /// Surface width in device pixels.
        width: f64,
        /// Surface height in device pixels.
        height: f64,
    },
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect {
        /// Minimum X coordinate.
        x0: f64,
        /// Minimum Y coordinate.
        y0: f64,
        /// Maximum X coordinate.
        x1: f64,
        /// Maximum Y coordinate.
        y1: f64,
    },
    /// Fill a circle with the current paint.
    FillCircle {
        /// X coordinate of the center.
        cx: f64,
        /// Y coordinate of the center.
        cy: f64,
        /// Circle radius.
        radius: f64,
    },
    /// Stroke the given path with the current stroke style and paint.
    StrokePath(PathDesc),
}

/// Unified surface operation, for logging and recording.
#[derive(Clone, Debug)]
pub enum SurfaceOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// A drawing surface that consumes state and draw operations in order.
///
/// Backends own the ambient state the operations mutate (current transform,
/// paint, stroke style) and are expected to apply operations strictly in the
/// order received.
pub trait SurfaceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);
    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}
