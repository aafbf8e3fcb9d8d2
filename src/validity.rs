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

//! Structural validity of construction trees.
//!
//! The grammar is mutually recursive with no explicit table:
//! - a `point` is two numeral coordinates, or the intersection of two
//!   line/circle sub-constructions
//! - a `line` or `circle` is built from exactly two valid points
//!
//! All predicates are total: an unrecognized shape evaluates to `false`,
//! never to an error. They consult only tree shape and leaf numeral-ness,
//! never numeric magnitude.

use crate::ast::{Node, NodeKind};

/// Entry-point predicate: is the tree a well-formed construction?
///
/// Dispatches on [`Node::kind`]; anything other than `point`, `line`, or
/// `circle` at the root is invalid.
pub fn geom_valid(node: &Node) -> bool {
    match node.kind() {
        NodeKind::Point => point_valid(node),
        NodeKind::Line => line_valid(node),
        NodeKind::Circle => circle_valid(node),
        NodeKind::Other => false,
    }
}

/// A valid `point` has exactly two children: both numeral coordinates, or
/// both line/circle constructions whose intersection defines it.
///
/// Mixed forms (one numeral, one construction) are invalid.
pub fn point_valid(node: &Node) -> bool {
    if node.kind() != NodeKind::Point || node.children.len() != 2 {
        return false;
    }
    let (first, second) = (&node.children[0], &node.children[1]);
    if first.numeral().is_some() && second.numeral().is_some() {
        return true;
    }
    line_or_circle_valid(first) && line_or_circle_valid(second)
}

/// Is the node a valid curve, i.e. a valid `line` or a valid `circle`?
pub fn line_or_circle_valid(node: &Node) -> bool {
    line_valid(node) || circle_valid(node)
}

/// A valid `line` passes through exactly two valid points.
pub fn line_valid(node: &Node) -> bool {
    two_point_valid(node, NodeKind::Line)
}

/// A valid `circle` is given by exactly two valid points (center plus a
/// circumference point by convention; no radius semantics are attached).
pub fn circle_valid(node: &Node) -> bool {
    two_point_valid(node, NodeKind::Circle)
}

/// Shared shape check for the two-point constructors (`line`, `circle`).
fn two_point_valid(node: &Node, kind: NodeKind) -> bool {
    node.kind() == kind && node.children.len() == 2 && node.children.iter().all(point_valid)
}
