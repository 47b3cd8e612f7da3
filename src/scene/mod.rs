//! Scene model - the parsed contents of one render pass.
//!
//! A [`Scene`] is what the input fields parse into: plot mode, range,
//! points, vectors and an optional equation. Scenes are ephemeral values
//! with no lifecycle beyond being drawn.

pub mod parser;

use crate::error::{QuiverError, Result};
use crate::expr::Equation;

/// Number of samples for the 2D curve.
pub const CURVE_SAMPLES: usize = 600;

/// Grid resolution per axis for the 3D surface.
pub const SURFACE_SAMPLES: usize = 80;

/// Active plot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotMode {
    /// Two-dimensional plot (y = f(x) for equations).
    #[default]
    TwoD,
    /// Three-dimensional plot (z = f(x, y) for equations).
    ThreeD,
}

impl PlotMode {
    /// Get the other mode.
    pub fn toggle(self) -> Self {
        match self {
            PlotMode::TwoD => PlotMode::ThreeD,
            PlotMode::ThreeD => PlotMode::TwoD,
        }
    }

    /// Get the mode name.
    pub fn name(self) -> &'static str {
        match self {
            PlotMode::TwoD => "2D",
            PlotMode::ThreeD => "3D",
        }
    }

    /// Number of coordinates per point/vector in this mode.
    pub fn dims(self) -> usize {
        match self {
            PlotMode::TwoD => 2,
            PlotMode::ThreeD => 3,
        }
    }
}

/// A position or component triple. `z` is zero for 2D values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coords {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (zero in 2D mode).
    pub z: f64,
}

impl Coords {
    /// Origin.
    pub const ORIGIN: Coords = Coords {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build from a parsed number list (2 or 3 entries).
    pub fn from_slice(values: &[f64]) -> Self {
        Coords {
            x: values.first().copied().unwrap_or(0.0),
            y: values.get(1).copied().unwrap_or(0.0),
            z: values.get(2).copied().unwrap_or(0.0),
        }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Component-wise sum.
    pub fn add(self, other: Coords) -> Coords {
        Coords {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Format as `(x, y)` or `(x, y, z)` depending on mode.
    pub fn display(self, mode: PlotMode) -> String {
        match mode {
            PlotMode::TwoD => format!("({}, {})", self.x, self.y),
            PlotMode::ThreeD => format!("({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

/// A plotted point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Position.
    pub pos: Coords,
    /// Input ordinal, used for the on-plot `P<i>` label.
    pub index: usize,
}

impl Point {
    /// On-plot label.
    pub fn label(&self) -> String {
        format!("P{}", self.index)
    }
}

/// A plotted vector, drawn as an arrow from tail to tail + components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    /// Component triple.
    pub components: Coords,
    /// Tail point the arrow starts from (origin when not given).
    pub tail: Coords,
    /// Input ordinal, used for the on-plot `v<i>` label.
    pub index: usize,
}

impl Vector {
    /// Arrow tip: tail + components.
    pub fn head(&self) -> Coords {
        self.tail.add(self.components)
    }

    /// Vector magnitude.
    pub fn magnitude(&self) -> f64 {
        self.components.length()
    }

    /// On-plot label.
    pub fn label(&self) -> String {
        format!("v{}", self.index)
    }
}

/// Everything one render pass draws.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Plot mode the scene was parsed for.
    pub mode: PlotMode,
    /// Plot range, applied to every axis.
    pub range: (f64, f64),
    /// Parsed points.
    pub points: Vec<Point>,
    /// Parsed vectors.
    pub vectors: Vec<Vector>,
    /// Parsed equation, if the field was non-empty.
    pub equation: Option<Equation>,
}

impl Scene {
    /// Parse the raw input fields into a scene.
    ///
    /// Any malformed fragment aborts the whole parse; the error message
    /// names the fragment so the user can fix it.
    pub fn from_inputs(
        mode: PlotMode,
        points_text: &str,
        vectors_text: &str,
        equation_text: &str,
        range_min_text: &str,
        range_max_text: &str,
    ) -> Result<Scene> {
        let range = parser::parse_range(range_min_text, range_max_text)?;
        let points = parser::parse_points(points_text, mode.dims())?;
        let vectors = parser::parse_vectors(vectors_text, mode.dims())?;

        let equation_text = equation_text.trim();
        let equation = if equation_text.is_empty() {
            None
        } else {
            Some(Equation::parse(equation_text, mode)?)
        };

        Ok(Scene {
            mode,
            range,
            points,
            vectors,
            equation,
        })
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.vectors.is_empty() && self.equation.is_none()
    }

    /// Plain-text summary for the clipboard.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Quiver scene ({}), range {} to {}\n",
            self.mode.name(),
            self.range.0,
            self.range.1
        ));
        for p in &self.points {
            out.push_str(&format!("  {}: {}\n", p.label(), p.pos.display(self.mode)));
        }
        for v in &self.vectors {
            out.push_str(&format!(
                "  {}: {} at {} -> head {}, |{}| = {:.6}\n",
                v.label(),
                v.components.display(self.mode),
                v.tail.display(self.mode),
                v.head().display(self.mode),
                v.label(),
                v.magnitude()
            ));
        }
        if let Some(ref eq) = self.equation {
            let lhs = match self.mode {
                PlotMode::TwoD => "y",
                PlotMode::ThreeD => "z",
            };
            out.push_str(&format!("  {} = {}\n", lhs, eq.source()));
        }
        out
    }
}

/// Validate that a numeric range is well-formed.
pub fn check_range(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(QuiverError::Range(
            "Range bounds must be finite numbers.".to_string(),
        ));
    }
    if min >= max {
        return Err(QuiverError::Range(
            "Range min must be less than range max.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_head_and_magnitude() {
        let v = Vector {
            components: Coords {
                x: 3.0,
                y: 4.0,
                z: 0.0,
            },
            tail: Coords {
                x: 1.0,
                y: 1.0,
                z: 0.0,
            },
            index: 0,
        };
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(
            v.head(),
            Coords {
                x: 4.0,
                y: 5.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn scene_from_default_inputs() {
        let scene = Scene::from_inputs(
            PlotMode::TwoD,
            "(1,2); (0,0); (-3,4)",
            "<2,1>; <-1,2>@(1,1)",
            "x^2",
            "-5",
            "5",
        )
        .unwrap();
        assert_eq!(scene.points.len(), 3);
        assert_eq!(scene.vectors.len(), 2);
        assert!(scene.equation.is_some());
        assert_eq!(scene.range, (-5.0, 5.0));
        assert!(!scene.is_empty());
    }

    #[test]
    fn empty_fields_give_empty_scene() {
        let scene = Scene::from_inputs(PlotMode::TwoD, "", "", "", "-5", "5").unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = Scene::from_inputs(PlotMode::TwoD, "", "", "", "5", "-5").unwrap_err();
        assert!(err.to_string().contains("Range min"));
    }

    #[test]
    fn summary_lists_entities() {
        let scene =
            Scene::from_inputs(PlotMode::TwoD, "(1,2)", "<3,4>", "x^2", "-5", "5").unwrap();
        let text = scene.summary();
        assert!(text.contains("P0: (1, 2)"));
        assert!(text.contains("|v0| = 5"));
        assert!(text.contains("y = x^2"));
    }
}
