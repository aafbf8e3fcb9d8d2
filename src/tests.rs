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

//! Crate unit tests.

use super::*;

fn first_caret_column(pointer: &str) -> Option<usize> {
    pointer.chars().position(|ch| ch == '^').map(|idx| idx + 1)
}

/// Parses and unwraps the actual construction under the synthetic root.
fn construction(source: &str) -> Node {
    let top = parse(source).expect("parse");
    top.children.into_iter().next().expect("construction")
}

fn validity_example(source: &str) -> bool {
    geom_valid(&construction(source))
}

fn assert_parse_error_case(
    case_name: &str,
    source: &str,
    kind: ParseErrorKind,
    expected_column: usize,
) {
    let err = parse(source).expect_err("parse should fail");
    assert_eq!(err.kind, kind, "{case_name}: unexpected error kind");
    assert_eq!(err.line, 1, "{case_name}: unexpected error line");
    assert_eq!(
        err.column, expected_column,
        "{case_name}: unexpected error column"
    );

    let expected_snippet = source.lines().next().unwrap_or_default();
    assert_eq!(
        err.snippet, expected_snippet,
        "{case_name}: snippet should match source line"
    );
    assert_eq!(
        first_caret_column(&err.pointer),
        Some(err.column),
        "{case_name}: caret column mismatch"
    );
}

#[test]
fn parses_nested_calls_into_expected_shape() {
    let top = parse(" line(point(1,0), point(0,1)) ").expect("parse");
    assert_eq!(top.name, "top");
    assert_eq!(top.children.len(), 1);

    let line = &top.children[0];
    assert_eq!(line.name, "line");
    assert_eq!(line.children.len(), 2);
    for (point, coords) in line.children.iter().zip([["1", "0"], ["0", "1"]]) {
        assert_eq!(point.name, "point");
        assert_eq!(point.children.len(), 2);
        assert_eq!(point.children[0].name, coords[0]);
        assert_eq!(point.children[1].name, coords[1]);
        assert!(point.children.iter().all(|leaf| leaf.children.is_empty()));
    }
}

#[test]
fn keeps_sibling_order_and_trailing_labels() {
    let top = parse("a,b").expect("parse");
    let names: Vec<&str> = top.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn reopens_the_last_child_on_a_second_bracket_group() {
    let top = parse("a(b)(c)").expect("parse");
    assert_eq!(top.children.len(), 1);
    let a = &top.children[0];
    assert_eq!(a.name, "a");
    let names: Vec<&str> = a.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["b", "c"]);
}

#[test]
fn discards_whitespace_and_separator_only_labels() {
    let top = parse(" \t ,  , ").expect("parse");
    assert!(top.children.is_empty());

    let top = parse("").expect("parse");
    assert_eq!(top.name, "top");
    assert!(top.children.is_empty());
}

#[test]
fn reports_bracket_errors_with_locations() {
    let cases = vec![
        (
            "extra close after balanced term",
            "point(1,2))",
            ParseErrorKind::UnbalancedBrackets,
            11,
        ),
        ("leading close", ")x", ParseErrorKind::UnbalancedBrackets, 1),
        (
            "close without any open",
            "a,b)",
            ParseErrorKind::UnbalancedBrackets,
            4,
        ),
        (
            "unclosed outer call",
            "line(point(1,0), point(0,1)",
            ParseErrorKind::BracketImbalance,
            5,
        ),
        ("bare open", "a(", ParseErrorKind::BracketImbalance, 2),
        (
            "open with nothing to open",
            "(x)",
            ParseErrorKind::Malformed,
            1,
        ),
    ];

    for (case_name, source, kind, expected_column) in cases {
        assert_parse_error_case(case_name, source, kind, expected_column);
    }
}

#[test]
fn bracket_error_messages_describe_the_imbalance() {
    let err = parse("a,b)").expect_err("parse should fail");
    assert!(err.to_string().contains("Negative bracket balance"));

    let err = parse("line(point(1,0)").expect_err("parse should fail");
    assert!(err.to_string().contains("1 unclosed '('"));
}

#[test]
fn node_construction_trims_labels() {
    assert_eq!(Node::new("\t,( label \t").name, "label");
    assert_eq!(Node::new(" (1").name, "1");
    assert_eq!(Node::new("a b").name, "a b");
    assert_eq!(Node::new(")x(").name, "x(");
    assert_eq!(Node::new("   ").name, "");
}

#[test]
fn numeral_classification_follows_float_parsing() {
    assert_eq!(Node::new("1").numeral(), Some(1.0));
    assert_eq!(Node::new("0").numeral(), Some(0.0));
    assert_eq!(Node::new("-1.5e3").numeral(), Some(-1500.0));
    assert_eq!(Node::new("a").numeral(), None);
    assert_eq!(Node::new("1 2").numeral(), None);
    assert_eq!(Node::new("NaN").numeral(), None);
    assert_eq!(Node::new("").numeral(), None);
}

#[test]
fn node_kind_is_case_sensitive_and_closed() {
    assert_eq!(Node::new("point").kind(), NodeKind::Point);
    assert_eq!(Node::new("line").kind(), NodeKind::Line);
    assert_eq!(Node::new("circle").kind(), NodeKind::Circle);
    assert_eq!(Node::new("Point").kind(), NodeKind::Other);
    assert_eq!(Node::new("segment").kind(), NodeKind::Other);
    assert_eq!(Node::new("1").kind(), NodeKind::Other);
}

#[test]
fn equality_is_reflexive_and_symmetric_over_parsed_trees() {
    let a = parse(" line(point(1,0), point(0,1)) ").expect("parse");
    let b = parse("line( point(1 ,0),point(0,1) )").expect("parse");
    assert!(a.equal_to(&a));
    assert!(a.equal_to(&b));
    assert!(b.equal_to(&a));
}

#[test]
fn equality_is_order_sensitive() {
    let a = construction("line(point(1,0), point(0,1))");
    let b = construction("line(point(0,1), point(1,0))");
    assert!(!a.equal_to(&b));
    assert!(!b.equal_to(&a));
}

#[test]
fn equality_handles_childless_and_mismatched_arity() {
    assert!(Node::new("a").equal_to(&Node::new(" a ")));
    assert!(!Node::new("a").equal_to(&Node::new("b")));
    let leaf = Node::new("line");
    let full = construction("line(point(1,0), point(0,1))");
    assert!(!leaf.equal_to(&full));
}

#[test]
fn validity_matches_reference_examples() {
    let cases = vec![
        (" line(point(1,0), point(0,1)) ", true),
        (" line(point(a,0), point(0,1)) ", false),
        (" line(point(1,0), point(0,a)) ", false),
        (" line(0,1) ", false),
        (" point(0,1) ", true),
        (" circle(0,1) ", false),
        (" circle(point(),1) ", false),
        (
            " circle(point(2,3),point(line(point(3,6),point(3,45)), circle(point(2,4),point(3,5)))) ",
            true,
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(validity_example(source), expected, "case '{source}'");
    }
}

#[test]
fn point_may_not_mix_coordinates_and_curves() {
    assert!(!validity_example("point(1, line(point(0,0),point(1,1)))"));
    assert!(!validity_example("point(line(point(0,0),point(1,1)), 1)"));
}

#[test]
fn point_as_intersection_of_two_curves_is_valid() {
    let node = construction("point(line(point(0,0),point(0,2)), line(point(3,0),point(1,1)))");
    assert!(point_valid(&node));
    assert!(geom_valid(&node));
}

#[test]
fn sub_predicates_reject_wrong_kinds_and_arities() {
    let line = construction("line(point(1,0), point(0,1))");
    assert!(line_valid(&line));
    assert!(line_or_circle_valid(&line));
    assert!(!point_valid(&line));
    assert!(!circle_valid(&line));

    // Wrong arity evaluates to false, never to an error.
    assert!(!validity_example("point(1,2,3)"));
    assert!(!geom_valid(&Node::new("point")));
    assert!(!geom_valid(&Node::new("")));
}

#[test]
fn intersects_vertical_and_slanted_lines() {
    let a = make_line(Vec2d::new(0.0, 0.0), Vec2d::new(0.0, 2.0)).expect("line a");
    let b = make_line(Vec2d::new(3.0, 0.0), Vec2d::new(1.0, 1.0)).expect("line b");
    let p = intersect(&a, &b).expect("intersection");
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 1.5);
}

#[test]
fn intersects_crossing_diagonals() {
    let a = make_line(Vec2d::new(0.0, 0.0), Vec2d::new(2.0, 2.0)).expect("line a");
    let b = make_line(Vec2d::new(0.0, 2.0), Vec2d::new(2.0, 0.0)).expect("line b");
    let p = intersect(&a, &b).expect("intersection");
    assert_eq!(p.x, 1.0);
    assert_eq!(p.y, 1.0);
}

#[test]
fn recovers_height_from_the_second_line_when_the_first_is_vertical() {
    let horizontal = make_line(Vec2d::new(0.0, 0.0), Vec2d::new(2.0, 0.0)).expect("horizontal");
    let vertical = make_line(Vec2d::new(1.0, -1.0), Vec2d::new(1.0, 5.0)).expect("vertical");
    let p = intersect(&vertical, &horizontal).expect("intersection");
    assert_eq!(p.x, 1.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn rejects_degenerate_lines() {
    let err = make_line(Vec2d::new(1.0, 1.0), Vec2d::new(1.0, 1.0)).expect_err("should fail");
    assert_eq!(err, GeomError::DegenerateLine);
}

#[test]
fn rejects_parallel_and_coincident_lines() {
    let a = make_line(Vec2d::new(0.0, 0.0), Vec2d::new(1.0, 1.0)).expect("line a");
    let shifted = make_line(Vec2d::new(0.0, 1.0), Vec2d::new(1.0, 2.0)).expect("shifted");
    assert_eq!(
        intersect(&a, &shifted).expect_err("parallel"),
        GeomError::ParallelLines
    );

    // Coincident lines are reported the same way as parallel-distinct ones.
    let again = make_line(Vec2d::new(0.0, 0.0), Vec2d::new(1.0, 1.0)).expect("line a again");
    assert_eq!(
        intersect(&a, &again).expect_err("coincident"),
        GeomError::ParallelLines
    );
}

#[test]
fn evaluates_heights_and_rejects_vertical_queries() {
    let slanted = make_line(Vec2d::new(0.0, 1.0), Vec2d::new(2.0, 3.0)).expect("slanted");
    assert_eq!(height_at(3.0, &slanted).expect("height"), 4.0);

    let vertical = make_line(Vec2d::new(1.0, 0.0), Vec2d::new(1.0, 2.0)).expect("vertical");
    assert_eq!(
        height_at(0.0, &vertical).expect_err("vertical"),
        GeomError::VerticalLine
    );
}

#[test]
fn makes_points_from_coordinate_text() {
    let p = make_point("2.5", " -3 ").expect("point");
    assert_eq!(p.x, 2.5);
    assert_eq!(p.y, -3.0);

    match make_point("x", "1").expect_err("should fail") {
        GeomError::Coordinate { raw, .. } => assert_eq!(raw, "x"),
        other => panic!("unexpected error: {other:?}"),
    }
}
