// Copyright 2025 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene rendering: stroke list → draw commands.

use kurbo::{Cap, Join};
use peniko::Brush;
use scrawl_imaging::{Affine, DrawOp, PaintDesc, PathDesc, StateOp, StrokeStyle, SurfaceBackend};
use scrawl_view2d::ViewTransform;

use crate::stroke::Stroke;

/// Renders the whole scene: clear, optional background, every committed
/// stroke in list order, then the in-progress stroke on top.
///
/// This is a pure function of its inputs; it neither reads nor leaves behind
/// ambient surface state. The transform is restored to identity afterwards
/// so per-stroke paint and transform settings do not leak into the host's
/// own drawing.
pub fn render_scene<B: SurfaceBackend>(
    backend: &mut B,
    surface_width: f64,
    surface_height: f64,
    background: Option<&Brush>,
    view: &ViewTransform,
    strokes: &[Stroke],
    current: Option<&Stroke>,
) {
    backend.draw(DrawOp::Clear {
        width: surface_width,
        height: surface_height,
    });

    if let Some(brush) = background {
        // The background covers the surface in screen space, unaffected by
        // pan/zoom.
        backend.state(StateOp::SetTransform(Affine::IDENTITY));
        backend.state(StateOp::SetPaint(PaintDesc {
            brush: brush.clone(),
        }));
        backend.draw(DrawOp::FillRect {
            x0: 0.0,
            y0: 0.0,
            x1: surface_width,
            y1: surface_height,
        });
    }

    backend.state(StateOp::SetTransform(view.logical_to_screen()));
    for stroke in strokes.iter().chain(current) {
        draw_stroke(backend, stroke);
    }
    backend.state(StateOp::SetTransform(Affine::IDENTITY));
}

/// Emits one stroke under the current transform.
///
/// A single-point stroke (a tap) is painted as a filled circle of diameter
/// equal to the stroke width; zero-length paths stroke invisibly on some
/// backends, so the dot is rasterized explicitly.
fn draw_stroke<B: SurfaceBackend>(backend: &mut B, stroke: &Stroke) {
    backend.state(StateOp::SetPaint(PaintDesc {
        brush: stroke.brush().clone(),
    }));
    match stroke.points() {
        [] => {}
        [pt] => backend.draw(DrawOp::FillCircle {
            cx: pt.x,
            cy: pt.y,
            radius: stroke.width() / 2.0,
        }),
        pts => {
            let mut style = StrokeStyle::new(stroke.width());
            style.join = Join::Round;
            style.start_cap = Cap::Round;
            style.end_cap = Cap::Round;
            backend.state(StateOp::SetStroke(style));
            backend.draw(DrawOp::StrokePath(PathDesc::polyline(pts)));
        }
    }
}
