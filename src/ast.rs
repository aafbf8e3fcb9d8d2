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

//! Construction-tree data model with precise source spans.
//!
//! The parser produces a [`Node`] tree first. Validity checking and the
//! projective calculator are later phases that consume it; neither mutates it.

use nom_locate::LocatedSpan;

/// Parser input span type carrying byte offsets and line/column info.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Source range and anchor position for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based UTF-8 column.
    pub column: usize,
}

impl SourceSpan {
    /// Creates a source span from parser start/end positions.
    pub fn from_bounds(start: Span<'_>, end: Span<'_>) -> Self {
        Self {
            start: start.location_offset(),
            end: end.location_offset(),
            line: start.location_line() as usize,
            column: start.get_utf8_column(),
        }
    }

    /// Returns span length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` when the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Grammar role of a node, decided by its label.
///
/// Validity predicates dispatch over this closed set instead of re-comparing
/// name strings at every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A `point` term (coordinates or an intersection of two curves).
    Point,
    /// A `line` term through two points.
    Line,
    /// A `circle` term through two points (center + circumference point).
    Circle,
    /// Any other label: numeral, identifier, or unknown constructor.
    Other,
}

/// One term of a construction: a label plus its ordered argument list.
///
/// `children` order is left-to-right appearance in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Trimmed label text (see [`Node::new`] for the trimming rule).
    pub name: String,
    /// Argument subtrees, in source order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a leaf node from raw label text.
    ///
    /// Trims a trailing run of spaces/tabs, then a leading run of delimiter
    /// and whitespace characters (`(`, `)`, `,`, space, tab). Interior
    /// characters are kept verbatim; any string is accepted, including one
    /// that trims to empty.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw
            .trim_end_matches([' ', '\t'])
            .trim_start_matches(['(', ')', ',', ' ', '\t']);
        Self {
            name: trimmed.to_string(),
            children: Vec::new(),
        }
    }

    /// Structural equality: same name, same arity, equal children pairwise.
    ///
    /// Childless nodes with equal names compare equal without any pairwise
    /// walk. Child order matters; `point(a,b)` and `point(b,a)` differ.
    pub fn equal_to(&self, other: &Node) -> bool {
        if self.name != other.name {
            return false;
        }
        if self.children.len() != other.children.len() {
            return false;
        }
        if self.children.is_empty() {
            return true;
        }
        self.children
            .iter()
            .zip(&other.children)
            .all(|(lhs, rhs)| lhs.equal_to(rhs))
    }

    /// Classifies the node's label into its grammar role.
    pub fn kind(&self) -> NodeKind {
        match self.name.as_str() {
            "point" => NodeKind::Point,
            "line" => NodeKind::Line,
            "circle" => NodeKind::Circle,
            _ => NodeKind::Other,
        }
    }

    /// Reads the label as a numeral literal, if it is one.
    ///
    /// Numeral-ness is decided here, not at parse time: the tokenizer cannot
    /// tell `1` from `a`. A label spelling NaN is not a numeral.
    pub fn numeral(&self) -> Option<f64> {
        let value: f64 = self.name.trim().parse().ok()?;
        if value.is_nan() { None } else { Some(value) }
    }
}
