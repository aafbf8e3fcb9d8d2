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

//! Tokenizer and tree builder for construction text.
//!
//! The surface grammar is tiny:
//! - three delimiter characters: `,`, `(`, `)`
//! - free-form labels between delimiters (trimmed by [`Node::new`])
//!
//! A `(` reopens the most recently appended child of the current node; a `)`
//! closes it; a `,` only terminates a label. Tree assembly uses an arena of
//! name/child-id records with a stack of open arena ids, reified into an
//! owned [`Node`] tree once the whole input has been consumed.

mod lexer;

use crate::ast::{Node, SourceSpan, Span};
use crate::diagnostics::{ParseError, ParseErrorKind};
use nom::{
    IResult,
    combinator::all_consuming,
    error::{VerboseError, VerboseErrorKind},
    multi::many0,
};

use self::lexer::{Token, TokenKind, token};

type PResult<'a, O> = IResult<Span<'a>, O, VerboseError<Span<'a>>>;

/// Parses construction text into a tree rooted at a synthetic `top` node.
///
/// `top` only anchors the open-node stack; the construction a caller usually
/// wants is `top.children[0]`. Structural bracket errors abort immediately
/// and no partial tree is returned.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let input = Span::new(source);
    // `all_consuming` ensures the lexer accounts for every input byte.
    let (_, tokens) = match all_consuming(many0(token))(input) {
        Ok(v) => v,
        Err(err) => return Err(lex_error_to_parse_error(err, source)),
    };
    build_tree(&tokens, source)
}

/// Arena record for a node under construction; children are arena ids.
///
/// Holding ids instead of node handles lets `(` reopen an already closed
/// child (`a(b)(c)` nests both `b` and `c` under `a`) without any aliasing.
struct Slot {
    name: String,
    children: Vec<usize>,
}

/// Folds the token stream into a tree via the open-node stack.
fn build_tree(tokens: &[Token<'_>], source: &str) -> Result<Node, ParseError> {
    let mut arena = vec![Slot {
        name: "top".to_string(),
        children: Vec::new(),
    }];
    // Ids of currently open nodes; index 0 is the synthetic root.
    let mut stack = vec![0usize];
    // Span of the '(' that opened each stacked node, for end-of-input reports.
    let mut open_spans: Vec<SourceSpan> = Vec::new();

    for tok in tokens {
        let current = stack[stack.len() - 1];
        match tok.kind {
            TokenKind::Label(text) => {
                let node = Node::new(text);
                // Whitespace/separator-only labels are trivia, not nodes.
                if node.name.is_empty() {
                    continue;
                }
                let id = arena.len();
                arena.push(Slot {
                    name: node.name,
                    children: Vec::new(),
                });
                arena[current].children.push(id);
            }
            TokenKind::Open => match arena[current].children.last() {
                Some(&child) => {
                    stack.push(child);
                    open_spans.push(tok.span.clone());
                }
                None => {
                    return Err(ParseError::from_span(
                        ParseErrorKind::Malformed,
                        "Opening bracket with no construction to open",
                        source,
                        &tok.span,
                    ));
                }
            },
            TokenKind::Close => {
                if stack.len() == 1 {
                    return Err(ParseError::from_span(
                        ParseErrorKind::UnbalancedBrackets,
                        "Negative bracket balance: ')' without a matching '('",
                        source,
                        &tok.span,
                    ));
                }
                stack.pop();
                open_spans.pop();
            }
            TokenKind::Comma => {}
        }
    }

    if stack.len() != 1 {
        let message = format!(
            "Bracket imbalance: input ended with {} unclosed '('",
            stack.len() - 1
        );
        // Anchor the report on the innermost '(' left open.
        return Err(match open_spans.last() {
            Some(span) => {
                ParseError::from_span(ParseErrorKind::BracketImbalance, message, source, span)
            }
            None => ParseError::message_only(ParseErrorKind::BracketImbalance, message),
        });
    }

    Ok(reify(&arena, 0))
}

/// Converts arena records back into an owned tree.
fn reify(arena: &[Slot], id: usize) -> Node {
    Node {
        name: arena[id].name.clone(),
        children: arena[id]
            .children
            .iter()
            .map(|&child| reify(arena, child))
            .collect(),
    }
}

/// Converts a `nom` verbose error to a crate-level parse diagnostic.
fn lex_error_to_parse_error(err: nom::Err<VerboseError<Span<'_>>>, source: &str) -> ParseError {
    match err {
        nom::Err::Incomplete(_) => {
            ParseError::message_only(ParseErrorKind::Malformed, "Incomplete input")
        }
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            // Use the deepest recorded lexer error as the diagnostic anchor.
            if let Some((span, kind)) = e.errors.last() {
                let span = SourceSpan::from_bounds(*span, *span);
                let detail = match kind {
                    VerboseErrorKind::Context(ctx) => format!("Syntax error: expected {ctx}"),
                    VerboseErrorKind::Char(c) => format!("Syntax error: expected '{c}'"),
                    VerboseErrorKind::Nom(kind) => format!("Syntax error near {kind:?}"),
                };
                ParseError::from_span(ParseErrorKind::Malformed, detail, source, &span)
            } else {
                ParseError::message_only(ParseErrorKind::Malformed, "Syntax error")
            }
        }
    }
}
