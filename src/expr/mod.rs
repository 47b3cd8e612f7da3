//! Equation expressions: `y = f(x)` in 2D, `z = f(x, y)` in 3D.
//!
//! A small tokenizer feeds a recursive-descent parser; evaluation is plain
//! `f64` math over the plot range. Available names: variables `x` (and `y`
//! in 3D), constants `pi` and `e`, functions `sin cos tan asin acos atan
//! sqrt abs ln log exp`.

pub mod parser;
pub mod token;

pub use parser::{Ast, BinOp, Func, Var};

use crate::error::{QuiverError, Result};
use crate::scene::PlotMode;
use ndarray::{Array1, Array2};

/// A parsed, evaluatable equation.
#[derive(Debug, Clone)]
pub struct Equation {
    source: String,
    ast: Ast,
}

impl Equation {
    /// Parse an equation for the given mode. An optional leading `y=`
    /// (2D) or `z=` (3D) is stripped first.
    pub fn parse(input: &str, mode: PlotMode) -> Result<Equation> {
        let body = strip_lhs(input, mode);
        if body.is_empty() {
            return Err(QuiverError::expr("Empty expression."));
        }
        let tokens = token::tokenize(body)?;
        let ast = parser::parse(&tokens, mode == PlotMode::ThreeD)?;
        Ok(Equation {
            source: body.to_string(),
            ast,
        })
    }

    /// The expression text (without the stripped `y=`/`z=` prefix).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate at a position. `y` is ignored by 2D equations.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.ast.eval(x, y)
    }

    /// Sample the 2D curve at `n` evenly spaced positions across the range.
    /// Non-finite samples are kept; drawing drops them.
    pub fn sample_curve(&self, range: (f64, f64), n: usize) -> Vec<(f64, f64)> {
        Array1::linspace(range.0, range.1, n)
            .iter()
            .map(|&x| (x, self.eval(x, 0.0)))
            .collect()
    }

    /// Sample the 3D surface on an `n`×`n` grid across the range.
    pub fn sample_surface(&self, range: (f64, f64), n: usize) -> SurfaceGrid {
        let xs = Array1::linspace(range.0, range.1, n);
        let ys = Array1::linspace(range.0, range.1, n);
        let values = Array2::from_shape_fn((n, n), |(row, col)| self.eval(xs[col], ys[row]));
        SurfaceGrid { xs, ys, values }
    }
}

/// An evaluated `z = f(x, y)` grid. `values[(row, col)]` holds
/// `f(xs[col], ys[row])`.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    /// Grid X positions.
    pub xs: Array1<f64>,
    /// Grid Y positions.
    pub ys: Array1<f64>,
    /// Evaluated heights, row-major.
    pub values: Array2<f64>,
}

impl SurfaceGrid {
    /// Finite z extent of the grid, if any sample is finite.
    pub fn z_bounds(&self) -> Option<(f64, f64)> {
        let (min, max) = self
            .values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

/// Strip one optional leading `y =` / `z =` (whichever matches the mode).
fn strip_lhs(input: &str, mode: PlotMode) -> &str {
    let trimmed = input.trim();
    let lhs = match mode {
        PlotMode::TwoD => "y",
        PlotMode::ThreeD => "z",
    };
    if let Some(rest) = trimmed.strip_prefix(lhs) {
        let rest = rest.trim_start();
        if let Some(body) = rest.strip_prefix('=') {
            return body.trim();
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_matching_lhs_only() {
        assert_eq!(strip_lhs("y = x^2", PlotMode::TwoD), "x^2");
        assert_eq!(strip_lhs("y=x^2", PlotMode::TwoD), "x^2");
        assert_eq!(strip_lhs("z = x+y", PlotMode::ThreeD), "x+y");
        // A 2D equation never starts with `z=`; leave it for the parser.
        assert_eq!(strip_lhs("x^2", PlotMode::TwoD), "x^2");
    }

    #[test]
    fn empty_equation_is_rejected() {
        let err = Equation::parse("y =", PlotMode::TwoD).unwrap_err();
        assert!(err.to_string().contains("Empty expression."));
    }

    #[test]
    fn curve_sampling_spans_range() {
        let eq = Equation::parse("x^2", PlotMode::TwoD).unwrap();
        let samples = eq.sample_curve((-5.0, 5.0), 11);
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0].0, -5.0);
        assert!((samples[0].1 - 25.0).abs() < 1e-9);
        assert!((samples[5].0).abs() < 1e-12);
        assert!((samples[5].1).abs() < 1e-12);
        assert_eq!(samples[10].0, 5.0);
        assert!((samples[10].1 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn surface_sampling_evaluates_grid() {
        let eq = Equation::parse("x + 10*y", PlotMode::ThreeD).unwrap();
        let grid = eq.sample_surface((0.0, 1.0), 3);
        assert_eq!(grid.values.dim(), (3, 3));
        // values[(row, col)] = xs[col] + 10 * ys[row]
        assert_eq!(grid.values[(0, 2)], 1.0);
        assert_eq!(grid.values[(2, 0)], 10.0);
        assert_eq!(grid.z_bounds(), Some((0.0, 11.0)));
    }

    #[test]
    fn surface_with_holes_still_reports_bounds() {
        let eq = Equation::parse("sqrt(x)", PlotMode::ThreeD).unwrap();
        let grid = eq.sample_surface((-1.0, 1.0), 3);
        // Negative x samples are NaN, the rest are finite.
        assert!(grid.values[(0, 0)].is_nan());
        assert_eq!(grid.z_bounds(), Some((0.0, 1.0)));
    }
}
