//! PNG snapshot rendering.
//!
//! Renders the current scene to an image file with `plotters`, mirroring
//! what the terminal canvas shows: mesh, scatter points, vector arrows,
//! curve, and the palette-colored surface in 3D (projected with the
//! current view). The snapshot is text-free so the image backend stays
//! pure Rust with no system font dependencies.

use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::app::ColorPalette;
use crate::error::{QuiverError, Result};
use crate::scene::{Coords, PlotMode, Scene, CURVE_SAMPLES, SURFACE_SAMPLES};
use crate::view::ViewState;

/// Snapshot width in pixels.
pub const SNAPSHOT_WIDTH: u32 = 1000;

/// Snapshot height in pixels.
pub const SNAPSHOT_HEIGHT: u32 = 800;

const POINT_COLOR: RGBColor = RGBColor(204, 36, 29);
const VECTOR_COLOR: RGBColor = RGBColor(102, 120, 10);
const CURVE_COLOR: RGBColor = RGBColor(69, 133, 136);

/// Render the scene to a PNG file.
pub fn save_png(
    scene: &Scene,
    view: &ViewState,
    palette: ColorPalette,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(snap_err)?;

    let aspect = SNAPSHOT_WIDTH as f64 / SNAPSHOT_HEIGHT as f64;
    let (xb, yb) = view.bounds(aspect);
    let span = view.span;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(xb[0]..xb[1], yb[0]..yb[1])
        .map_err(snap_err)?;

    // Mesh lines only; label rendering would need a font backend.
    chart
        .configure_mesh()
        .x_labels(0)
        .y_labels(0)
        .draw()
        .map_err(snap_err)?;

    // Surface below everything else, then curve, arrows, points.
    match scene.mode {
        PlotMode::ThreeD => draw_surface(&mut chart, scene, view, palette)?,
        PlotMode::TwoD => draw_curve(&mut chart, scene)?,
    }
    draw_vectors(&mut chart, scene, view, span)?;
    draw_points(&mut chart, scene, view)?;

    root.present().map_err(snap_err)?;
    Ok(())
}

type SnapshotChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_curve(chart: &mut SnapshotChart<'_, '_>, scene: &Scene) -> Result<()> {
    let Some(ref eq) = scene.equation else {
        return Ok(());
    };
    // Split at non-finite samples so holes stay holes.
    let mut run: Vec<(f64, f64)> = Vec::new();
    for (x, y) in eq.sample_curve(scene.range, CURVE_SAMPLES) {
        if y.is_finite() {
            run.push((x, y));
        } else if !run.is_empty() {
            chart
                .draw_series(LineSeries::new(std::mem::take(&mut run), &CURVE_COLOR))
                .map_err(snap_err)?;
        }
    }
    if !run.is_empty() {
        chart
            .draw_series(LineSeries::new(run, &CURVE_COLOR))
            .map_err(snap_err)?;
    }
    Ok(())
}

fn draw_surface(
    chart: &mut SnapshotChart<'_, '_>,
    scene: &Scene,
    view: &ViewState,
    palette: ColorPalette,
) -> Result<()> {
    let Some(ref eq) = scene.equation else {
        return Ok(());
    };
    let grid = eq.sample_surface(scene.range, SURFACE_SAMPLES);
    let Some((z_min, z_max)) = grid.z_bounds() else {
        return Ok(());
    };
    let mut z_span = z_max - z_min;
    if z_span.abs() < 1e-10 {
        z_span = 1.0;
    }

    let mut samples = Vec::new();
    for ((row, col), &z) in grid.values.indexed_iter() {
        if !z.is_finite() {
            continue;
        }
        let t = ((z - z_min) / z_span).clamp(0.0, 1.0);
        let pos = view.project(Coords {
            x: grid.xs[col],
            y: grid.ys[row],
            z,
        });
        samples.push((pos, t));
    }

    chart
        .draw_series(samples.into_iter().map(|(pos, t)| {
            let (r, g, b) = palette.rgb(t);
            Circle::new(pos, 2, RGBColor(r, g, b).filled())
        }))
        .map_err(snap_err)?;
    Ok(())
}

fn draw_vectors(
    chart: &mut SnapshotChart<'_, '_>,
    scene: &Scene,
    view: &ViewState,
    span: f64,
) -> Result<()> {
    for vector in &scene.vectors {
        let tail = view.map(scene.mode, vector.tail);
        let head = view.map(scene.mode, vector.head());

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![tail, head],
                VECTOR_COLOR.stroke_width(2),
            )))
            .map_err(snap_err)?;

        let dx = head.0 - tail.0;
        let dy = head.1 - tail.1;
        let len = dx.hypot(dy);
        if len > 1e-12 {
            let head_len = (span * 0.04).min(len * 0.5);
            let (ux, uy) = (dx / len, dy / len);
            let wing = 25f64.to_radians();
            for angle in [wing, -wing] {
                let (sin, cos) = angle.sin_cos();
                let wx = -ux * cos + uy * sin;
                let wy = -ux * sin - uy * cos;
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![head, (head.0 + wx * head_len, head.1 + wy * head_len)],
                        VECTOR_COLOR.stroke_width(2),
                    )))
                    .map_err(snap_err)?;
            }
        }
    }
    Ok(())
}

fn draw_points(
    chart: &mut SnapshotChart<'_, '_>,
    scene: &Scene,
    view: &ViewState,
) -> Result<()> {
    chart
        .draw_series(scene.points.iter().map(|point| {
            let pos = view.map(scene.mode, point.pos);
            Circle::new(pos, 4, POINT_COLOR.filled())
        }))
        .map_err(snap_err)?;
    Ok(())
}

fn snap_err<E: std::fmt::Display>(e: E) -> QuiverError {
    QuiverError::Snapshot(e.to_string())
}
