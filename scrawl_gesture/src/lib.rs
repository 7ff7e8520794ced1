// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl Gesture: pinch state for two-contact pan/zoom discrimination.
//!
//! This crate provides a small, focused state holder for the one interaction
//! on a drawing surface that is ambiguous when it starts: two fingers are
//! down, and until the contacts move far enough the gesture could be either
//! a pan or a pinch zoom.
//!
//! - [`pinch::pinch_distance`] / [`pinch::pinch_midpoint`]: per-sample math
//!   over a pair of contact points.
//! - [`pinch::PinchSample`]: distance + midpoint snapshot of one sample.
//! - [`pinch::PinchClassifier`]: holds the gesture-entry sample and decides,
//!   sample by sample, whether the accumulated movement reads as a zoom
//!   (pinch distance changed) or a pan (midpoint moved), or is still
//!   ambiguous.
//!
//! Classification is based purely on accumulated movement magnitude, never
//! elapsed time, and a distance change wins over a midpoint move when both
//! cross the threshold in the same sample. The classifier reports a kind;
//! committing to it (and never re-evaluating for the rest of the gesture) is
//! the caller's job.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use scrawl_gesture::pinch::{GestureKind, PinchClassifier, PinchSample};
//!
//! // Two fingers land 100px apart.
//! let initial = PinchSample::from_contacts(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
//! let classifier = PinchClassifier::new(initial);
//!
//! // They spread to 160px apart: the distance delta crosses the threshold.
//! let sample = PinchSample::from_contacts(Point::new(100.0, 100.0), Point::new(260.0, 100.0));
//! assert_eq!(classifier.classify(sample), Some(GestureKind::Zoom));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pinch;
