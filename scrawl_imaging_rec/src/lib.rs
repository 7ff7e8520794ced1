// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl Imaging Recording Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`SurfaceBackend`] for **op recording and state tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended for tests and debugging that want to assert on emitted
//!   ops and the surface state at the time each op was applied.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use scrawl_imaging::{Affine, DrawOp, PaintDesc, StateOp, StrokeStyle, SurfaceBackend, SurfaceOp};

/// Snapshot of the current surface state inside the backend.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current paint, if set.
    pub paint: Option<PaintDesc>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// Event recorded by the backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Recording implementation of [`SurfaceBackend`].
///
/// This backend tracks current surface state and records high-level
/// [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RecBackend {
    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying surface ops, in order.
    ops: Vec<SurfaceOp>,
    /// Current surface state.
    state: StateSnapshot,
}

impl RecBackend {
    /// Creates an empty recording backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw surface operations.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns the draw events only, with the state each was drawn under.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> {
        self.events.iter().filter_map(|ev| match ev {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Clears all recorded events and ops; surface state is kept.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }
}

impl SurfaceBackend for RecBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::SetPaint(paint) => self.state.paint = Some(paint.clone()),
            StateOp::SetStroke(stroke) => self.state.stroke = Some(stroke.clone()),
        }
        self.ops.push(SurfaceOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(SurfaceOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use scrawl_imaging::{Affine, DrawOp, PathDesc, StateOp, SurfaceBackend, SurfaceOp};

    use super::RecBackend;

    #[test]
    fn records_ops_in_order() {
        let mut backend = RecBackend::new();
        backend.draw(DrawOp::Clear {
            width: 100.0,
            height: 50.0,
        });
        backend.state(StateOp::SetTransform(Affine::scale(2.0)));
        backend.draw(DrawOp::StrokePath(PathDesc::polyline(&[])));

        assert_eq!(backend.ops().len(), 3);
        assert!(matches!(backend.ops()[0], SurfaceOp::Draw(DrawOp::Clear { .. })));
        assert!(matches!(backend.ops()[1], SurfaceOp::State(_)));
        assert!(matches!(
            backend.ops()[2],
            SurfaceOp::Draw(DrawOp::StrokePath(_))
        ));
    }

    #[test]
    fn draws_carry_the_state_they_were_drawn_under() {
        let mut backend = RecBackend::new();
        let tx = Affine::translate((7.0, -3.0));
        backend.state(StateOp::SetTransform(tx));
        backend.draw(DrawOp::FillCircle {
            cx: 1.0,
            cy: 2.0,
            radius: 3.0,
        });

        let (_, state) = backend.draws().next().expect("one draw recorded");
        assert_eq!(state.transform, tx);
        assert!(state.paint.is_none());
    }

    #[test]
    fn clear_events_keeps_surface_state() {
        let mut backend = RecBackend::new();
        let tx = Affine::scale(3.0);
        backend.state(StateOp::SetTransform(tx));
        backend.clear_events();

        assert!(backend.events().is_empty());
        assert!(backend.ops().is_empty());

        backend.draw(DrawOp::Clear {
            width: 10.0,
            height: 10.0,
        });
        let (_, state) = backend.draws().next().expect("one draw recorded");
        assert_eq!(state.transform, tx);
    }
}
