// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrawl_board --heading-base-level=0

//! Scrawl Board: the whiteboard controller.
//!
//! This crate owns the gesture-and-view state machine of an interactive
//! drawing surface. Raw pointer/touch events go in; freehand strokes, panning,
//! and pinch zoom come out as draw commands against a
//! [`SurfaceBackend`](scrawl_imaging::SurfaceBackend).
//!
//! The controller is composed of four tightly coupled pieces sharing one
//! state machine:
//!
//! - **Mode dispatcher** ([`mode`], [`Whiteboard::apply`]): an explicit sum
//!   type over `Idle`, `Drawing`, `Pending`, `Panning`, and `Zooming`, each
//!   variant carrying exactly the ephemeral state valid for that mode.
//! - **Draw engine**: accumulates the in-progress stroke from input
//!   positions mapped through the inverse view transform, and commits or
//!   discards it when the gesture ends.
//! - **View transform** ([`scrawl_view2d::ViewTransform`]): pan offset and
//!   clamped zoom scale, updated incrementally from gesture deltas.
//! - **Renderer** ([`render::render_scene`]): clears the surface and redraws
//!   every committed stroke, then the in-progress stroke, under the current
//!   view transform.
//!
//! Input arrives either through the explicit FIFO queue
//! ([`Whiteboard::push_event`] + [`Whiteboard::pump`]) or one event at a time
//! ([`Whiteboard::process`]); both render after every mutating transition.
//! Event sourcing (DOM listeners, winit, a test script) stays outside the
//! crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use scrawl_board::{InputEvent, Whiteboard};
//! use scrawl_imaging_rec::RecBackend;
//!
//! let mut board = Whiteboard::new(800.0, 600.0);
//! let mut backend = RecBackend::new();
//!
//! // One finger draws a short horizontal stroke.
//! board.push_event(InputEvent::pointer_down(&[Point::new(100.0, 100.0)]));
//! board.push_event(InputEvent::pointer_move(&[Point::new(150.0, 100.0)]));
//! board.push_event(InputEvent::pointer_up(&[]));
//! board.pump(&mut backend);
//!
//! assert_eq!(board.strokes().len(), 1);
//! assert_eq!(
//!     board.strokes()[0].points(),
//!     &[Point::new(100.0, 100.0), Point::new(150.0, 100.0)],
//! );
//! ```
//!
//! ## Error handling
//!
//! The core has no recoverable external failures. Invalid-state calls (a
//! move with no stroke in progress, a gesture update after the gesture
//! ended, a duplicate lift) are guarded silent no-ops: event delivery from
//! the host environment is not fully under this crate's control, so the
//! machine favors resilience over strict validation.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

pub mod board;
pub mod input;
pub mod mode;
pub mod render;
pub mod stroke;

pub use board::{Whiteboard, WhiteboardDebugInfo};
pub use input::{Contacts, InputEvent};
pub use mode::{Mode, ModeKind};
pub use stroke::Stroke;
