//! Plot area - braille-canvas rendering of the scene.

use crate::app::App;
use crate::scene::{Coords, PlotMode, Scene, CURVE_SAMPLES, SURFACE_SAMPLES};
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use crate::view::{grid_step, ViewState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

/// Number of palette buckets used when coloring the 3D surface.
const SURFACE_COLOR_LEVELS: usize = 24;

/// Arrowhead wing angle.
const ARROW_WING_DEG: f64 = 25.0;

/// Draw the plot panel.
pub(super) fn draw_plot(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let title = match app.mode {
        PlotMode::TwoD => " Vector Visualizer (2D) ".to_string(),
        PlotMode::ThreeD => format!(
            " Vector Visualizer (3D) | az {:.0}° el {:.0}° | {} ",
            app.view.azimuth,
            app.view.elevation,
            app.palette.name()
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2));
    let inner = block.inner(area);

    if inner.width < 2 || inner.height < 2 {
        f.render_widget(block, area);
        return;
    }

    // Terminal cells are roughly twice as tall as wide; correct the bound
    // aspect so the world stays square on screen.
    let aspect = inner.width as f64 / (2.0 * inner.height as f64);
    let (xb, yb) = app.view.bounds(aspect);
    let span = app.view.span;
    let range = app.plot_range();

    let grid_lines = if app.show_grid && app.mode == PlotMode::TwoD {
        build_grid_lines(xb, yb, span)
    } else {
        Vec::new()
    };
    let axes = build_axes(app.mode, &app.view, range, xb, yb, colors);
    let marks = app
        .scene
        .as_ref()
        .map(|scene| build_marks(scene, &app.view, app, span, colors))
        .unwrap_or_default();

    let canvas = Canvas::default()
        .block(block)
        .background_color(colors.bg0)
        .marker(Marker::Braille)
        .x_bounds(xb)
        .y_bounds(yb)
        .paint(|ctx| {
            for &(x1, y1, x2, y2) in &grid_lines {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: colors.bg1,
                });
            }
            for &(x1, y1, x2, y2, color) in &axes.lines {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                });
            }
            for (color, coords) in &marks.surface {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: *color,
                });
            }
            for &(x1, y1, x2, y2) in &marks.curve {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: colors.blue,
                });
            }
            for &(x1, y1, x2, y2) in &marks.arrows {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: colors.green,
                });
            }
            ctx.draw(&Points {
                coords: &marks.points,
                color: colors.yellow,
            });
            for &(x, y, ref text, color) in axes.labels.iter().chain(marks.labels.iter()) {
                ctx.print(x, y, Span::styled(text.clone(), Style::default().fg(color)));
            }
        });

    f.render_widget(canvas, area);
}

/// Axis lines and labels.
#[derive(Default)]
struct AxisDrawing {
    lines: Vec<(f64, f64, f64, f64, Color)>,
    labels: Vec<(f64, f64, String, Color)>,
}

/// Scene geometry mapped into the view frame.
#[derive(Default)]
struct MarkDrawing {
    surface: Vec<(Color, Vec<(f64, f64)>)>,
    curve: Vec<(f64, f64, f64, f64)>,
    arrows: Vec<(f64, f64, f64, f64)>,
    points: Vec<(f64, f64)>,
    labels: Vec<(f64, f64, String, Color)>,
}

/// 2D grid lines at round steps, skipping the axis lines themselves.
fn build_grid_lines(xb: [f64; 2], yb: [f64; 2], span: f64) -> Vec<(f64, f64, f64, f64)> {
    let step = grid_step(span);
    let mut lines = Vec::new();

    let mut x = (xb[0] / step).ceil() * step;
    while x <= xb[1] {
        if x.abs() > step / 2.0 {
            lines.push((x, yb[0], x, yb[1]));
        }
        x += step;
    }
    let mut y = (yb[0] / step).ceil() * step;
    while y <= yb[1] {
        if y.abs() > step / 2.0 {
            lines.push((xb[0], y, xb[1], y));
        }
        y += step;
    }
    lines
}

fn build_axes(
    mode: PlotMode,
    view: &ViewState,
    range: (f64, f64),
    xb: [f64; 2],
    yb: [f64; 2],
    colors: &ThemeColors,
) -> AxisDrawing {
    let mut axes = AxisDrawing::default();

    match mode {
        PlotMode::TwoD => {
            if yb[0] <= 0.0 && yb[1] >= 0.0 {
                axes.lines.push((xb[0], 0.0, xb[1], 0.0, colors.gray));
            }
            if xb[0] <= 0.0 && xb[1] >= 0.0 {
                axes.lines.push((0.0, yb[0], 0.0, yb[1], colors.gray));
            }
            // Bound readouts in the corners.
            axes.labels
                .push((xb[0], yb[0], format_axis_label(xb[0]), colors.gray));
            axes.labels
                .push((xb[0], yb[1], format_axis_label(yb[1]), colors.gray));
        },
        PlotMode::ThreeD => {
            let (min, max) = range;
            let triad = [
                ((max, 0.0, 0.0), (min, 0.0, 0.0), "x", colors.green),
                ((0.0, max, 0.0), (0.0, min, 0.0), "y", colors.aqua),
                ((0.0, 0.0, max), (0.0, 0.0, min), "z", colors.orange),
            ];
            for ((px, py, pz), (nx, ny, nz), name, color) in triad {
                let pos = view.project(Coords {
                    x: px,
                    y: py,
                    z: pz,
                });
                let neg = view.project(Coords {
                    x: nx,
                    y: ny,
                    z: nz,
                });
                axes.lines.push((neg.0, neg.1, pos.0, pos.1, color));
                // Nudge the label just past the positive end.
                let tip = view.project(Coords {
                    x: px * 1.08,
                    y: py * 1.08,
                    z: pz * 1.08,
                });
                axes.labels.push((tip.0, tip.1, name.to_string(), color));
            }
        },
    }
    axes
}

fn build_marks(
    scene: &Scene,
    view: &ViewState,
    app: &App,
    span: f64,
    colors: &ThemeColors,
) -> MarkDrawing {
    let mut marks = MarkDrawing::default();
    let label_offset = span * 0.015;

    // Surface first so everything else draws on top of it.
    if scene.mode == PlotMode::ThreeD {
        if let Some(ref eq) = scene.equation {
            let grid = eq.sample_surface(scene.range, SURFACE_SAMPLES);
            if let Some((z_min, z_max)) = grid.z_bounds() {
                let mut z_span = z_max - z_min;
                if z_span.abs() < 1e-10 {
                    z_span = 1.0;
                }
                let mut buckets: Vec<Vec<(f64, f64)>> =
                    vec![Vec::new(); SURFACE_COLOR_LEVELS];
                for ((row, col), &z) in grid.values.indexed_iter() {
                    if !z.is_finite() {
                        continue;
                    }
                    let t = ((z - z_min) / z_span).clamp(0.0, 1.0);
                    let level = ((t * (SURFACE_COLOR_LEVELS - 1) as f64).round() as usize)
                        .min(SURFACE_COLOR_LEVELS - 1);
                    buckets[level].push(view.project(Coords {
                        x: grid.xs[col],
                        y: grid.ys[row],
                        z,
                    }));
                }
                for (level, coords) in buckets.into_iter().enumerate() {
                    if coords.is_empty() {
                        continue;
                    }
                    let t = level as f64 / (SURFACE_COLOR_LEVELS - 1) as f64;
                    marks.surface.push((app.palette.color(t), coords));
                }
            }
        }
    } else if let Some(ref eq) = scene.equation {
        let samples = eq.sample_curve(scene.range, CURVE_SAMPLES);
        for pair in samples.windows(2) {
            let (x1, y1) = pair[0];
            let (x2, y2) = pair[1];
            if y1.is_finite() && y2.is_finite() {
                marks.curve.push((x1, y1, x2, y2));
            }
        }
    }

    for vector in &scene.vectors {
        let tail = view.map(scene.mode, vector.tail);
        let head = view.map(scene.mode, vector.head());
        marks.arrows.push((tail.0, tail.1, head.0, head.1));

        let dx = head.0 - tail.0;
        let dy = head.1 - tail.1;
        let len = dx.hypot(dy);
        if len > 1e-12 {
            let head_len = (span * 0.05).min(len * 0.5);
            let (ux, uy) = (dx / len, dy / len);
            let wing = ARROW_WING_DEG.to_radians();
            for angle in [wing, -wing] {
                let (sin, cos) = angle.sin_cos();
                // Rotate the reversed direction to form the wing.
                let wx = -ux * cos + uy * sin;
                let wy = -ux * sin - uy * cos;
                marks.arrows.push((
                    head.0,
                    head.1,
                    head.0 + wx * head_len,
                    head.1 + wy * head_len,
                ));
            }
        }
        if app.show_labels {
            marks.labels.push((
                head.0 + label_offset,
                head.1 + label_offset,
                vector.label(),
                colors.green,
            ));
        }
    }

    for point in &scene.points {
        let pos = view.map(scene.mode, point.pos);
        marks.points.push(pos);
        if app.show_labels {
            marks.labels.push((
                pos.0 + label_offset,
                pos.1 + label_offset,
                point.label(),
                colors.yellow,
            ));
        }
    }

    marks
}
