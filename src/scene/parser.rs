//! Text notation parsing for points, vectors and ranges.
//!
//! Accepted notation, entries separated by `;`:
//!
//! - points: `(1,2)` in 2D, `(1,2,3)` in 3D
//! - vectors: `<vx,vy>` from the origin, `<vx,vy>@(tx,ty)` with an explicit
//!   tail point (3D forms take three numbers)
//!
//! Numbers are anything `f64` parsing accepts after trimming. Malformed
//! fragments abort the parse with a message naming the fragment.

use super::{Coords, Point, Vector};
use crate::error::{QuiverError, Result};

/// Parse a `;`-separated list of points. Empty input yields an empty list.
pub fn parse_points(text: &str, dims: usize) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (index, part) in fragments(text).enumerate() {
        if !(part.starts_with('(') && part.ends_with(')')) {
            return Err(QuiverError::parse(format!(
                "Point must be like (a,b) or (a,b,c). Got: {part}"
            )));
        }
        let values = parse_numbers(
            &part[1..part.len() - 1],
            dims,
            &format!("Point {part}"),
        )?;
        points.push(Point {
            pos: Coords::from_slice(&values),
            index,
        });
    }
    Ok(points)
}

/// Parse a `;`-separated list of vectors with optional `@(…)` tails.
pub fn parse_vectors(text: &str, dims: usize) -> Result<Vec<Vector>> {
    let mut vectors = Vec::new();
    for (index, part) in fragments(text).enumerate() {
        let (vector_part, tail_part) = match part.split_once('@') {
            Some((v, t)) => (v.trim(), Some(t.trim())),
            None => (part, None),
        };

        if !(vector_part.starts_with('<') && vector_part.ends_with('>')) {
            return Err(QuiverError::parse(format!(
                "Vector must be like <a,b> or <a,b,c>. Got: {vector_part}"
            )));
        }
        let components = parse_numbers(
            &vector_part[1..vector_part.len() - 1],
            dims,
            &format!("Vector {vector_part}"),
        )?;

        let tail = match tail_part {
            Some(tail_str) => {
                if !(tail_str.starts_with('(') && tail_str.ends_with(')')) {
                    return Err(QuiverError::parse(format!(
                        "Tail must be like @(x,y) or @(x,y,z). Got: @{tail_str}"
                    )));
                }
                let values = parse_numbers(
                    &tail_str[1..tail_str.len() - 1],
                    dims,
                    &format!("Tail {tail_str}"),
                )?;
                Coords::from_slice(&values)
            },
            None => Coords::ORIGIN,
        };

        vectors.push(Vector {
            components: Coords::from_slice(&components),
            tail,
            index,
        });
    }
    Ok(vectors)
}

/// Parse the range fields into `(min, max)` with `min < max`.
pub fn parse_range(min_text: &str, max_text: &str) -> Result<(f64, f64)> {
    let min = parse_number(min_text)?;
    let max = parse_number(max_text)?;
    super::check_range(min, max)?;
    Ok((min, max))
}

/// Non-empty `;`-separated fragments, trimmed.
fn fragments(text: &str) -> impl Iterator<Item = &str> {
    text.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a comma-separated number list, enforcing the mode's arity.
fn parse_numbers(inner: &str, dims: usize, what: &str) -> Result<Vec<f64>> {
    let pieces: Vec<&str> = inner.split(',').map(str::trim).collect();
    if pieces.len() != dims {
        return Err(QuiverError::dimension(format!(
            "{what} must have {dims} numbers."
        )));
    }
    pieces.iter().map(|p| parse_number(p)).collect()
}

/// Parse a single real number.
fn parse_number(text: &str) -> Result<f64> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| QuiverError::parse(format!("Not a number: {text}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_2d_point() {
        let points = parse_points("(1,2)", 2).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].pos.x, 1.0);
        assert_eq!(points[0].pos.y, 2.0);
        assert_eq!(points[0].pos.z, 0.0);
    }

    #[test]
    fn parses_3d_point() {
        let points = parse_points("(1,2,3)", 3).unwrap();
        assert_eq!(points[0].pos.z, 3.0);
    }

    #[test]
    fn parses_point_list_with_whitespace() {
        let points = parse_points(" (1,2) ;  (0,0);(-3, 4) ", 2).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].pos.x, -3.0);
        assert_eq!(points[2].index, 2);
    }

    #[test]
    fn empty_point_input_is_ok() {
        assert!(parse_points("", 2).unwrap().is_empty());
        assert!(parse_points("  ;  ; ", 2).unwrap().is_empty());
    }

    #[test]
    fn point_without_parens_is_rejected() {
        let err = parse_points("1,2", 2).unwrap_err();
        assert!(err.to_string().contains("must be like (a,b)"));
        assert!(err.to_string().contains("Got: 1,2"));
    }

    #[test]
    fn point_arity_mismatch_is_rejected() {
        // A 3D point while in 2D mode.
        let err = parse_points("(1,2,3)", 2).unwrap_err();
        assert!(err.to_string().contains("must have 2 numbers"));
        // And the reverse.
        let err = parse_points("(1,2)", 3).unwrap_err();
        assert!(err.to_string().contains("must have 3 numbers"));
    }

    #[test]
    fn point_with_bad_number_is_rejected() {
        let err = parse_points("(1,two)", 2).unwrap_err();
        assert!(err.to_string().contains("Not a number: two"));
    }

    #[test]
    fn scientific_and_signed_numbers_parse() {
        let points = parse_points("(1e3, -2.5); (+4, .5)", 2).unwrap();
        assert_eq!(points[0].pos.x, 1000.0);
        assert_eq!(points[0].pos.y, -2.5);
        assert_eq!(points[1].pos.x, 4.0);
        assert_eq!(points[1].pos.y, 0.5);
    }

    #[test]
    fn vector_defaults_to_origin_tail() {
        let vectors = parse_vectors("<3,4>", 2).unwrap();
        assert_eq!(vectors[0].tail, Coords::ORIGIN);
        assert_eq!(vectors[0].magnitude(), 5.0);
    }

    #[test]
    fn vector_with_tail() {
        let vectors = parse_vectors("<1,1>@(2,2)", 2).unwrap();
        assert_eq!(vectors[0].tail.x, 2.0);
        assert_eq!(vectors[0].tail.y, 2.0);
        let head = vectors[0].head();
        assert_eq!((head.x, head.y), (3.0, 3.0));
    }

    #[test]
    fn vector_list_mixes_tails() {
        let vectors = parse_vectors("<2,1>; <-1,2>@(1,1)", 2).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].tail, Coords::ORIGIN);
        assert_eq!(vectors[1].tail.x, 1.0);
        assert_eq!(vectors[1].index, 1);
    }

    #[test]
    fn vector_3d_in_2d_mode_is_rejected() {
        let err = parse_vectors("<1,2,3>", 2).unwrap_err();
        assert!(matches!(err, QuiverError::Dimension(_)));
        assert!(err.to_string().contains("must have 2 numbers"));
    }

    #[test]
    fn vector_without_angle_brackets_is_rejected() {
        let err = parse_vectors("(1,2)", 2).unwrap_err();
        assert!(err.to_string().contains("Vector must be like <a,b>"));
    }

    #[test]
    fn tail_without_parens_is_rejected() {
        let err = parse_vectors("<1,2>@3,4", 2).unwrap_err();
        assert!(err.to_string().contains("Tail must be like @(x,y)"));
        assert!(err.to_string().contains("Got: @3,4"));
    }

    #[test]
    fn tail_arity_mismatch_is_rejected() {
        let err = parse_vectors("<1,2>@(1,2,3)", 2).unwrap_err();
        assert!(err.to_string().contains("must have 2 numbers"));
    }

    #[test]
    fn parses_3d_vector_with_tail() {
        let vectors = parse_vectors("<1,2,3>@(0,0,1)", 3).unwrap();
        assert_eq!(vectors[0].components.z, 3.0);
        assert_eq!(vectors[0].tail.z, 1.0);
    }

    #[test]
    fn range_requires_min_below_max() {
        assert_eq!(parse_range("-5", "5").unwrap(), (-5.0, 5.0));
        let err = parse_range("5", "5").unwrap_err();
        assert!(err.to_string().contains("Range min"));
        let err = parse_range("x", "5").unwrap_err();
        assert!(err.to_string().contains("Not a number"));
    }
}
