// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller's interaction mode as an explicit sum type.
//!
//! Exactly one mode is active at a time, and each variant carries exactly
//! the ephemeral state that is valid in that mode: the in-progress stroke
//! exists only while drawing, gesture baselines exist only while their
//! gesture runs. Leaving a mode drops its payload, so stale baselines cannot
//! be read from outside their owning mode.

use kurbo::{Point, Vec2};
use scrawl_gesture::pinch::PinchClassifier;

use crate::stroke::Stroke;

/// Interaction mode of the whiteboard, with per-mode state.
#[derive(Clone, Debug)]
pub enum Mode {
    /// No contacts down.
    Idle,
    /// One contact down, accumulating a freehand stroke.
    Drawing {
        /// The in-progress stroke.
        stroke: Stroke,
    },
    /// Two contacts down, gesture type not yet determined.
    Pending {
        /// Classifier holding the gesture-entry pinch sample.
        classifier: PinchClassifier,
    },
    /// Two contacts down, committed to panning for this gesture.
    Panning {
        /// View offset at the moment the gesture classified as a pan.
        start_offset: Vec2,
        /// Pinch midpoint when the two contacts landed, in screen space.
        start_midpoint: Point,
    },
    /// Two contacts down, committed to zooming for this gesture.
    Zooming {
        /// View scale at the moment the gesture classified as a zoom.
        start_scale: f64,
        /// Pinch distance when the two contacts landed, in screen pixels.
        start_distance: f64,
        /// Logical point that was under the pinch midpoint when the two
        /// contacts landed; kept under the midpoint for the whole gesture.
        anchor: Point,
    },
}

impl Mode {
    /// Returns the payload-free discriminant of this mode.
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Idle => ModeKind::Idle,
            Self::Drawing { .. } => ModeKind::Drawing,
            Self::Pending { .. } => ModeKind::Pending,
            Self::Panning { .. } => ModeKind::Panning,
            Self::Zooming { .. } => ModeKind::Zooming,
        }
    }

    /// Returns the in-progress stroke, if one exists.
    #[must_use]
    pub fn current_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            _ => None,
        }
    }
}

/// Payload-free mode discriminant, for inspection and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeKind {
    /// No contacts down.
    Idle,
    /// Accumulating a freehand stroke.
    Drawing,
    /// Two contacts down, gesture type undetermined.
    Pending,
    /// Committed to panning.
    Panning,
    /// Committed to zooming.
    Zooming,
}
