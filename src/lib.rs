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

//! Compass-construction parsing, validity checking, and planar calculation.
//!
//! This crate provides:
//! - A tokenizer/parser turning bracketed construction text such as
//!   `line(point(1,0), point(0,1))` into a [`Node`] tree.
//! - Exact structural equality over trees ([`Node::equal_to`]).
//! - A mutually recursive validity checker for the point/line/circle
//!   grammar ([`geom_valid`] and its sub-predicates).
//! - A minimal projective calculator: point/line construction, height
//!   queries, and line-line intersection via a 2x2 Cramer solve.
//!
//! # Pipeline
//!
//! 1. [`parse`] construction text into a tree rooted at a synthetic `top`
//!    node; the actual construction is `top.children[0]`.
//! 2. Check it with [`geom_valid`].
//! 3. Give the validated construction numeric meaning with the calculator,
//!    which works on plain [`Vec2d`] coordinates and is deliberately
//!    decoupled from the tree model.
//!
//! Parsing, checking, and calculation are pure, synchronous, call-local
//! computations; returned trees are immutable and safe to share read-only
//! across threads.

mod ast;
mod diagnostics;
mod geometry;
mod parser;
mod validity;

pub use ast::{Node, NodeKind, SourceSpan};
pub use diagnostics::{ParseError, ParseErrorKind};
pub use geometry::{GeomError, Line, height_at, intersect, make_line, make_point};
pub use parser::parse;
pub use rs_math3d::Vec2d;
pub use validity::{circle_valid, geom_valid, line_or_circle_valid, line_valid, point_valid};

#[cfg(test)]
mod tests;
