/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Minimal planar projective calculator.
//!
//! Gives numeric meaning to validated constructions: point and line building
//! plus line-line intersection via a 2x2 Cramer solve. Operates on plain
//! [`Vec2d`] coordinates, deliberately decoupled from the [`crate::Node`]
//! tree model. Arithmetic is naive `f64` with exact comparisons; there is no
//! robustness layer.

use rs_math3d::Vec2d;
use std::fmt;
use std::num::ParseFloatError;

/// Errors produced by the calculator's construction operations.
///
/// All variants are deterministic input-validation failures; retrying with
/// the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// A coordinate string did not parse as a real number.
    Coordinate {
        /// Offending input text.
        raw: String,
        /// Underlying float-parse failure.
        source: ParseFloatError,
    },
    /// The two defining points of a line coincide.
    DegenerateLine,
    /// A height query on a vertical line (undefined slope).
    VerticalLine,
    /// An intersection query on parallel (or coincident) lines.
    ParallelLines,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::Coordinate { raw, source } => {
                write!(f, "Cannot read coordinate '{raw}': {source}")
            }
            GeomError::DegenerateLine => write!(f, "Need two distinct points to make a line"),
            GeomError::VerticalLine => write!(f, "Vertical line has no defined height"),
            GeomError::ParallelLines => write!(f, "Parallel lines do not intersect"),
        }
    }
}

impl std::error::Error for GeomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeomError::Coordinate { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A line through two distinct points.
///
/// Kept in two-point form, not slope/intercept, so vertical lines are
/// representable; degeneracy is rejected by [`make_line`], not at use time.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    /// First defining point.
    pub a: Vec2d,
    /// Second defining point.
    pub b: Vec2d,
}

/// Builds a point value by parsing both coordinates as real numbers.
///
/// The parse failure, if any, is propagated as [`GeomError::Coordinate`].
pub fn make_point(x: &str, y: &str) -> Result<Vec2d, GeomError> {
    Ok(Vec2d::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

/// Parses one coordinate string, keeping the underlying error.
fn parse_coordinate(raw: &str) -> Result<f64, GeomError> {
    raw.trim().parse().map_err(|source| GeomError::Coordinate {
        raw: raw.to_string(),
        source,
    })
}

/// Builds a line through two points, rejecting coincident ones.
pub fn make_line(a: Vec2d, b: Vec2d) -> Result<Line, GeomError> {
    if a.x == b.x && a.y == b.y {
        return Err(GeomError::DegenerateLine);
    }
    Ok(Line { a, b })
}

/// Evaluates the line's y-value at `x` via the two-point slope form.
pub fn height_at(x: f64, line: &Line) -> Result<f64, GeomError> {
    if line.a.x == line.b.x {
        return Err(GeomError::VerticalLine);
    }
    Ok((line.b.y - line.a.y) / (line.b.x - line.a.x) * (x - line.a.x) + line.a.y)
}

/// Intersects two lines by Cramer's rule on their rise/run determinant form.
///
/// Parallel and coincident inputs are reported identically as
/// [`GeomError::ParallelLines`].
pub fn intersect(a: &Line, b: &Line) -> Result<Vec2d, GeomError> {
    let rise_a = a.b.y - a.a.y;
    let rise_b = b.b.y - b.a.y;
    let run_a = a.b.x - a.a.x;
    let run_b = b.b.x - b.a.x;
    // Each line as `rise*x - run*y = rise*x1 - run*y1`; these are the
    // right-hand constants, negated.
    let c_a = run_a * a.a.y - rise_a * a.a.x;
    let c_b = run_b * b.a.y - rise_b * b.a.x;
    if rise_a * run_b == rise_b * run_a {
        return Err(GeomError::ParallelLines);
    }
    let x = (run_b * c_a - run_a * c_b) / (run_a * rise_b - run_b * rise_a);
    // Recover y on whichever input is not vertical, preferring `a`. At least
    // one run is non-zero here or the lines would have been parallel.
    let y = if run_a != 0.0 {
        height_at(x, a)?
    } else {
        height_at(x, b)?
    };
    Ok(Vec2d::new(x, y))
}
