// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The whiteboard controller: one state machine over drawing, panning, and
//! zooming.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use peniko::{Brush, Color};
use scrawl_gesture::pinch::{GestureKind, PinchClassifier, PinchSample};
use scrawl_imaging::SurfaceBackend;
use scrawl_view2d::ViewTransform;

use crate::input::InputEvent;
use crate::mode::{Mode, ModeKind};
use crate::render::render_scene;
use crate::stroke::Stroke;

/// Interactive whiteboard controller.
///
/// Owns the committed stroke list, the view transform, the ambient paint
/// settings, and exactly one interaction [`Mode`] at a time. Events mutate
/// state through [`Whiteboard::apply`]; [`Whiteboard::process`] and
/// [`Whiteboard::pump`] additionally render after every mutating transition.
///
/// All state transitions run to completion on the caller's thread; there is
/// no interior concurrency and no operation suspends mid-transition.
#[derive(Debug)]
pub struct Whiteboard {
    mode: Mode,
    strokes: Vec<Stroke>,
    view: ViewTransform,
    brush: Brush,
    stroke_width: f64,
    background: Option<Brush>,
    surface_width: f64,
    surface_height: f64,
    gesture_threshold: f64,
    queue: VecDeque<InputEvent>,
}

impl Whiteboard {
    /// Default stroke width for new boards, in logical units.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Creates an empty board over a surface of the given pixel dimensions.
    ///
    /// The board starts idle, with an identity view, a black solid brush,
    /// and no background paint.
    #[must_use]
    pub fn new(surface_width: f64, surface_height: f64) -> Self {
        Self {
            mode: Mode::Idle,
            strokes: Vec::new(),
            view: ViewTransform::new(),
            brush: Brush::Solid(Color::BLACK),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            background: None,
            surface_width,
            surface_height,
            gesture_threshold: PinchClassifier::DEFAULT_THRESHOLD,
            queue: VecDeque::new(),
        }
    }

    /// Returns the current interaction mode.
    #[must_use]
    pub fn mode(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Returns the committed strokes, in paint order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Returns the in-progress stroke, if one exists.
    #[must_use]
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.mode.current_stroke()
    }

    /// Returns the view transform.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Returns the view transform for programmatic pan/zoom.
    ///
    /// Gestures drive the view through the state machine; hosts may still
    /// reposition it directly (e.g. a "reset view" button).
    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    /// Returns the ambient brush new strokes capture.
    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Sets the ambient brush. Strokes already begun keep their paint.
    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    /// Returns the ambient stroke width new strokes capture.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Sets the ambient stroke width. Negative widths are treated as zero.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width.max(0.0);
    }

    /// Returns the background paint, if any.
    #[must_use]
    pub fn background(&self) -> Option<&Brush> {
        self.background.as_ref()
    }

    /// Sets the background paint filled under the strokes on every render.
    pub fn set_background(&mut self, background: Option<Brush>) {
        self.background = background;
    }

    /// Returns the surface dimensions in device pixels.
    #[must_use]
    pub fn surface_size(&self) -> (f64, f64) {
        (self.surface_width, self.surface_height)
    }

    /// Resizes the surface. The next render clears the new extent.
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// Returns the gesture discrimination threshold, in screen pixels.
    #[must_use]
    pub fn gesture_threshold(&self) -> f64 {
        self.gesture_threshold
    }

    /// Sets the gesture discrimination threshold, in screen pixels.
    ///
    /// Applies to gestures that start afterwards; a pending gesture keeps
    /// the threshold it started with.
    pub fn set_gesture_threshold(&mut self, threshold: f64) {
        self.gesture_threshold = threshold.max(0.0);
    }

    /// Enqueues an input event for the next [`Whiteboard::pump`].
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Drains the event queue in FIFO order, rendering after every mutating
    /// transition.
    pub fn pump<B: SurfaceBackend>(&mut self, backend: &mut B) {
        while let Some(event) = self.queue.pop_front() {
            self.process(event, backend);
        }
    }

    /// Applies one event and renders if it mutated any state.
    pub fn process<B: SurfaceBackend>(&mut self, event: InputEvent, backend: &mut B) {
        if self.apply(event) {
            self.render(backend);
        }
    }

    /// Runs one state transition without rendering.
    ///
    /// Returns `true` if the event mutated controller state (and a render is
    /// due). Events that are invalid in the current mode are silent no-ops
    /// returning `false`.
    ///
    /// Hosts that batch rendering (e.g. into an animation frame) can call
    /// this directly and invoke [`Whiteboard::render`] themselves.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { contacts } => match contacts.as_slice() {
                [] => false,
                &[pt] => self.on_single_down(pt),
                &[p0, p1, ..] => self.on_multi_down(p0, p1),
            },
            InputEvent::PointerMove { contacts } => match contacts.as_slice() {
                [] => false,
                &[pt] => self.on_single_move(pt),
                &[p0, p1, ..] => self.on_multi_move(p0, p1),
            },
            InputEvent::PointerUp { contacts } => self.on_end(contacts.len()),
            InputEvent::Cancel => self.on_end(0),
        }
    }

    /// Renders the scene: clear, background, committed strokes in order,
    /// in-progress stroke on top, all under the current view transform.
    pub fn render<B: SurfaceBackend>(&self, backend: &mut B) {
        render_scene(
            backend,
            self.surface_width,
            self.surface_height,
            self.background.as_ref(),
            &self.view,
            &self.strokes,
            self.mode.current_stroke(),
        );
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> WhiteboardDebugInfo {
        WhiteboardDebugInfo {
            mode: self.mode.kind(),
            strokes: self.strokes.len(),
            offset: self.view.offset(),
            scale: self.view.scale(),
            surface_width: self.surface_width,
            surface_height: self.surface_height,
            queued_events: self.queue.len(),
        }
    }

    /// First contact down: begin a stroke at the contact's logical position.
    fn on_single_down(&mut self, screen_pt: Point) -> bool {
        if !matches!(self.mode, Mode::Idle) {
            return false;
        }
        let start = self.view.screen_to_logical_point(screen_pt);
        self.mode = Mode::Drawing {
            stroke: Stroke::new(start, self.brush.clone(), self.stroke_width),
        };
        true
    }

    /// Second contact down: enter the pending two-contact gesture, cutting
    /// off an in-progress stroke if there is one.
    fn on_multi_down(&mut self, p0: Point, p1: Point) -> bool {
        match core::mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Idle => {}
            Mode::Drawing { stroke } => {
                // Commit the cut-off stroke only if the pointer actually
                // moved; a bare tap interrupted by a second finger would
                // otherwise leave a phantom dot.
                if stroke.moved() {
                    self.strokes.push(stroke);
                }
            }
            gesture => {
                // Already in a two-contact gesture; extra contacts are
                // ignored for its remainder.
                self.mode = gesture;
                return false;
            }
        }
        let initial = PinchSample::from_contacts(p0, p1);
        self.mode = Mode::Pending {
            classifier: PinchClassifier::with_threshold(initial, self.gesture_threshold),
        };
        true
    }

    /// Single-contact move: extend the in-progress stroke.
    fn on_single_move(&mut self, screen_pt: Point) -> bool {
        let Mode::Drawing { stroke } = &mut self.mode else {
            return false;
        };
        let logical = self.view.screen_to_logical_point(screen_pt);
        stroke.push(logical);
        true
    }

    /// Two-contact move: classify a pending gesture, or feed the committed
    /// one.
    fn on_multi_move(&mut self, p0: Point, p1: Point) -> bool {
        let sample = PinchSample::from_contacts(p0, p1);
        match &self.mode {
            Mode::Pending { classifier } => {
                let classifier = *classifier;
                match classifier.classify(sample) {
                    Some(GestureKind::Zoom) => {
                        let initial = classifier.initial();
                        // The logical point under the gesture-entry midpoint;
                        // zoom keeps it pinned under the midpoint from here on.
                        let anchor = self.view.screen_to_logical_point(initial.midpoint);
                        self.mode = Mode::Zooming {
                            start_scale: self.view.scale(),
                            start_distance: initial.distance,
                            anchor,
                        };
                        // The classifying sample already moved past the
                        // threshold; apply it rather than swallowing it.
                        self.update_zoom(sample);
                        true
                    }
                    Some(GestureKind::Pan) => {
                        self.mode = Mode::Panning {
                            start_offset: self.view.offset(),
                            start_midpoint: classifier.initial().midpoint,
                        };
                        self.update_pan(sample);
                        true
                    }
                    None => false,
                }
            }
            Mode::Panning { .. } => self.update_pan(sample),
            Mode::Zooming { .. } => self.update_zoom(sample),
            _ => false,
        }
    }

    /// A contact lifted (or the interaction was cancelled): `remaining` is
    /// the number of contacts still down.
    fn on_end(&mut self, remaining: usize) -> bool {
        match core::mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Idle => false,
            Mode::Drawing { stroke } => {
                if remaining > 0 {
                    // A stray lift while the drawing contact remains; keep
                    // drawing.
                    self.mode = Mode::Drawing { stroke };
                    return false;
                }
                self.strokes.push(stroke);
                true
            }
            gesture => {
                if remaining >= 2 {
                    self.mode = gesture;
                    return false;
                }
                true
            }
        }
    }

    /// One panning update: offset follows the midpoint's travel since the
    /// gesture entered. Scale is untouched.
    fn update_pan(&mut self, sample: PinchSample) -> bool {
        let Mode::Panning {
            start_offset,
            start_midpoint,
        } = &self.mode
        else {
            return false;
        };
        let (start_offset, start_midpoint) = (*start_offset, *start_midpoint);
        self.view
            .set_offset(start_offset + (sample.midpoint - start_midpoint));
        true
    }

    /// One zooming update: scale follows the pinch-distance ratio, clamped,
    /// with the gesture's logical anchor pinned under the midpoint.
    fn update_zoom(&mut self, sample: PinchSample) -> bool {
        let Mode::Zooming {
            start_scale,
            start_distance,
            anchor,
        } = &self.mode
        else {
            return false;
        };
        let (start_scale, start_distance, anchor) = (*start_scale, *start_distance, *anchor);
        // A degenerate baseline (both contacts on one pixel) has no
        // meaningful ratio; skip the update rather than divide by zero.
        if start_distance <= f64::EPSILON {
            return false;
        }
        let scale = start_scale * (sample.distance / start_distance);
        self.view
            .set_scale_anchored(scale, sample.midpoint, anchor);
        true
    }
}

/// Debug snapshot of a [`Whiteboard`] state.
#[derive(Clone, Copy, Debug)]
pub struct WhiteboardDebugInfo {
    /// Current interaction mode.
    pub mode: ModeKind,
    /// Number of committed strokes.
    pub strokes: usize,
    /// Current view offset in screen coordinates.
    pub offset: Vec2,
    /// Current view scale factor.
    pub scale: f64,
    /// Surface width in device pixels.
    pub surface_width: f64,
    /// Surface height in device pixels.
    pub surface_height: f64,
    /// Number of input events waiting in the queue.
    pub queued_events: usize,
}
