//! Plot view state: pan, zoom and the 3D orthographic projection.
//!
//! The canvas draws in a world-aligned 2D frame. In 2D mode that frame is
//! the plane itself; in 3D mode every coordinate is first projected with an
//! azimuth/elevation orthographic camera, and pan/zoom operate on the
//! projected frame.

use crate::scene::{Coords, PlotMode};

/// Default camera azimuth in degrees.
pub const DEFAULT_AZIMUTH: f64 = -60.0;

/// Default camera elevation in degrees.
pub const DEFAULT_ELEVATION: f64 = 30.0;

/// Fraction of the span moved per pan step.
const PAN_FRACTION: f64 = 0.05;

/// Zoom-in factor per step; zoom-out is its inverse.
const ZOOM_FACTOR: f64 = 0.8;

/// Rotation step in degrees.
pub const ROTATE_STEP: f64 = 5.0;

const MIN_SPAN: f64 = 1e-6;
const MAX_SPAN: f64 = 1e9;

/// Pan/zoom/camera state for the plot area.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    /// Center of the view in (projected) world coordinates.
    pub center: (f64, f64),
    /// World units spanned by the shorter screen axis.
    pub span: f64,
    /// Camera azimuth in degrees (3D).
    pub azimuth: f64,
    /// Camera elevation in degrees (3D), clamped to (-90, 90).
    pub elevation: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: (0.0, 0.0),
            span: 10.0,
            azimuth: DEFAULT_AZIMUTH,
            elevation: DEFAULT_ELEVATION,
        }
    }
}

impl ViewState {
    /// Fit the view to a plot range, keeping the current camera angles.
    pub fn fit(&mut self, mode: PlotMode, range: (f64, f64)) {
        let mid = (range.0 + range.1) / 2.0;
        let extent = range.1 - range.0;
        match mode {
            PlotMode::TwoD => {
                self.center = (mid, mid);
                self.span = extent;
            },
            PlotMode::ThreeD => {
                self.center = self.project(Coords {
                    x: mid,
                    y: mid,
                    z: mid,
                });
                // Leave room for the rotated range cube's diagonal.
                self.span = extent * 1.8;
            },
        }
    }

    /// Reset camera angles and refit.
    pub fn reset(&mut self, mode: PlotMode, range: (f64, f64)) {
        self.azimuth = DEFAULT_AZIMUTH;
        self.elevation = DEFAULT_ELEVATION;
        self.fit(mode, range);
    }

    /// Pan by whole steps (positive x right, positive y up).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.0 += dx * self.span * PAN_FRACTION;
        self.center.1 += dy * self.span * PAN_FRACTION;
    }

    /// Zoom in one step.
    pub fn zoom_in(&mut self) {
        self.span = (self.span * ZOOM_FACTOR).max(MIN_SPAN);
    }

    /// Zoom out one step.
    pub fn zoom_out(&mut self) {
        self.span = (self.span / ZOOM_FACTOR).min(MAX_SPAN);
    }

    /// Rotate the 3D camera by degree deltas. Elevation is clamped so the
    /// projection never degenerates.
    pub fn rotate(&mut self, d_azimuth: f64, d_elevation: f64) {
        self.azimuth = wrap_degrees(self.azimuth + d_azimuth);
        self.elevation = (self.elevation + d_elevation).clamp(-89.0, 89.0);
    }

    /// Project a world coordinate into the view frame. In 2D mode this is
    /// the identity on (x, y).
    pub fn project(&self, c: Coords) -> (f64, f64) {
        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        let sx = -c.x * az.sin() + c.y * az.cos();
        let sy = -(c.x * az.cos() + c.y * az.sin()) * el.sin() + c.z * el.cos();
        (sx, sy)
    }

    /// Project for the given mode: identity in 2D, camera in 3D.
    pub fn map(&self, mode: PlotMode, c: Coords) -> (f64, f64) {
        match mode {
            PlotMode::TwoD => (c.x, c.y),
            PlotMode::ThreeD => self.project(c),
        }
    }

    /// View bounds as `([x_min, x_max], [y_min, y_max])` for a drawing area
    /// with the given width/height aspect ratio. The shorter axis spans
    /// `self.span` world units so the world never appears squashed.
    pub fn bounds(&self, aspect: f64) -> ([f64; 2], [f64; 2]) {
        let half = self.span / 2.0;
        let (half_x, half_y) = if aspect >= 1.0 {
            (half * aspect, half)
        } else {
            (half, half / aspect.max(1e-6))
        };
        (
            [self.center.0 - half_x, self.center.0 + half_x],
            [self.center.1 - half_y, self.center.1 + half_y],
        )
    }
}

/// Wrap an angle to [-180, 180).
fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// Pick a grid step of the form 1/2/5 × 10^k giving a handful of lines
/// across `span`.
pub fn grid_step(span: f64) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let target = span / 8.0;
    let magnitude = 10f64.powf(target.log10().floor());
    let normalized = target / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(x: f64, y: f64, z: f64) -> Coords {
        Coords { x, y, z }
    }

    #[test]
    fn fit_2d_centers_on_range() {
        let mut view = ViewState::default();
        view.fit(PlotMode::TwoD, (-5.0, 5.0));
        assert_eq!(view.center, (0.0, 0.0));
        assert_eq!(view.span, 10.0);

        view.fit(PlotMode::TwoD, (0.0, 10.0));
        assert_eq!(view.center, (5.0, 5.0));
    }

    #[test]
    fn pan_moves_center_by_span_fraction() {
        let mut view = ViewState::default();
        view.fit(PlotMode::TwoD, (-5.0, 5.0));
        view.pan(1.0, -2.0);
        assert!((view.center.0 - 0.5).abs() < 1e-12);
        assert!((view.center.1 + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_round_trips() {
        let mut view = ViewState::default();
        let before = view.span;
        view.zoom_in();
        assert!(view.span < before);
        view.zoom_out();
        assert!((view.span - before).abs() < 1e-9);
    }

    #[test]
    fn elevation_is_clamped() {
        let mut view = ViewState::default();
        view.rotate(0.0, 1000.0);
        assert_eq!(view.elevation, 89.0);
        view.rotate(0.0, -1000.0);
        assert_eq!(view.elevation, -89.0);
    }

    #[test]
    fn azimuth_wraps() {
        let mut view = ViewState::default();
        view.azimuth = 175.0;
        view.rotate(10.0, 0.0);
        assert_eq!(view.azimuth, -175.0);
    }

    #[test]
    fn projection_identities() {
        let view = ViewState {
            azimuth: 0.0,
            elevation: 0.0,
            ..ViewState::default()
        };
        // Looking from the side: screen x = world y, screen y = world z.
        let (sx, sy) = view.project(coords(1.0, 2.0, 3.0));
        assert!((sx - 2.0).abs() < 1e-12);
        assert!((sy - 3.0).abs() < 1e-12);

        let top = ViewState {
            azimuth: 0.0,
            elevation: 90.0,
            ..ViewState::default()
        };
        // Looking straight down: z vanishes.
        let (sx, sy) = top.project(coords(1.0, 2.0, 3.0));
        assert!((sx - 2.0).abs() < 1e-12);
        assert!((sy + 1.0).abs() < 1e-12);
    }

    #[test]
    fn map_is_identity_in_2d() {
        let view = ViewState::default();
        assert_eq!(view.map(PlotMode::TwoD, coords(3.0, -4.0, 9.0)), (3.0, -4.0));
    }

    #[test]
    fn bounds_keep_shorter_axis_at_span() {
        let view = ViewState {
            center: (0.0, 0.0),
            span: 10.0,
            ..ViewState::default()
        };
        let (xb, yb) = view.bounds(2.0);
        assert_eq!(xb, [-10.0, 10.0]);
        assert_eq!(yb, [-5.0, 5.0]);
        let (xb, yb) = view.bounds(0.5);
        assert_eq!(xb, [-5.0, 5.0]);
        assert_eq!(yb, [-10.0, 10.0]);
    }

    #[test]
    fn grid_steps_are_round() {
        assert_eq!(grid_step(10.0), 1.0);
        assert_eq!(grid_step(100.0), 10.0);
        assert_eq!(grid_step(4.0), 0.5);
        assert_eq!(grid_step(0.8), 0.1);
    }
}
