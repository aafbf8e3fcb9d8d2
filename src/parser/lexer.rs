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

//! Token lexer for construction text.

use crate::ast::{SourceSpan, Span};
use nom::Parser;
use nom::{branch::alt, bytes::complete::take_while1, character::complete::char, combinator::map};

use super::PResult;

/// The three delimiter characters of the construction grammar.
pub(super) const DELIMITERS: [char; 3] = [',', '(', ')'];

/// Lexical token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind<'a> {
    /// Argument separator; terminates a label, no stack effect.
    Comma,
    /// Opening bracket.
    Open,
    /// Closing bracket.
    Close,
    /// Maximal run of non-delimiter characters (may be all whitespace).
    Label(&'a str),
}

/// A token plus its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Token<'a> {
    /// Token payload.
    pub kind: TokenKind<'a>,
    /// Source location for diagnostics.
    pub span: SourceSpan,
}

/// Parses one token, recording its source span.
pub(super) fn token(input: Span<'_>) -> PResult<'_, Token<'_>> {
    let start = input;
    let (rest, kind) = alt((
        map(char(','), |_| TokenKind::Comma),
        map(char('('), |_| TokenKind::Open),
        map(char(')'), |_| TokenKind::Close),
        map(
            take_while1(|c: char| !DELIMITERS.contains(&c)),
            |s: Span<'_>| TokenKind::Label(*s.fragment()),
        ),
    ))
    .parse(input)?;
    let span = SourceSpan::from_bounds(start, rest);
    Ok((rest, Token { kind, span }))
}
