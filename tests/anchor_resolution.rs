//! Integration tests for anchor resolution.
//!
//! Every anchor must agree exactly with the point combined from its two
//! corresponding edge resolvers, for both values of `keep_transform`.

use pretty_assertions::assert_eq;

use view_geometry::{
    anchor_point, edge_x, edge_y, AnchorKind, Layoutable, Point, Rect, Transform, View,
};

fn sample_view() -> View {
    View::new(Rect::new(10.0, 20.0, 100.0, 50.0)).with_transform(Transform::rotation(30.0))
}

#[test]
fn test_anchors_match_edge_pairs_for_both_modes() {
    let view = sample_view();

    for keep_transform in [false, true] {
        for kind in AnchorKind::ALL {
            let (horizontal, vertical) = kind.components();
            let expected = Point::new(
                edge_x(&view, horizontal, keep_transform),
                edge_y(&view, vertical, keep_transform),
            );
            assert_eq!(
                anchor_point(&view, kind, keep_transform),
                expected,
                "anchor {} (keep_transform={})",
                kind,
                keep_transform
            );
        }
    }
}

#[test]
fn test_bound_anchors_match_pure_resolution() {
    let view = sample_view();
    let anchors = view.anchors();

    assert_eq!(
        anchors.top_left().point(true),
        anchor_point(&view, AnchorKind::TopLeft, true)
    );
    assert_eq!(
        anchors.center_right().point(false),
        anchor_point(&view, AnchorKind::CenterRight, false)
    );
}

#[test]
fn test_center_anchor_is_rect_center() {
    let view = View::new(Rect::new(10.0, 0.0, 100.0, 50.0));
    assert_eq!(
        view.anchors().center().point(false),
        Point::new(60.0, 25.0)
    );
}

#[test]
fn test_zero_size_view_collapses_every_anchor() {
    let view = View::new(Rect::new(5.0, 5.0, 0.0, 0.0));

    for kind in AnchorKind::ALL {
        assert_eq!(
            anchor_point(&view, kind, false),
            Point::new(5.0, 5.0),
            "anchor {}",
            kind
        );
        assert_eq!(
            anchor_point(&view, kind, true),
            Point::new(5.0, 5.0),
            "anchor {} (transformed)",
            kind
        );
    }
}

#[test]
fn test_repeated_anchor_queries_are_bit_identical() {
    let view = View::new(Rect::new(0.1, 0.2, 33.3, 44.4)).with_transform(Transform::rotation(17.0));

    for kind in AnchorKind::ALL {
        let first = anchor_point(&view, kind, true);
        let second = anchor_point(&view, kind, true);
        assert_eq!(first.x.to_bits(), second.x.to_bits(), "anchor {} x", kind);
        assert_eq!(first.y.to_bits(), second.y.to_bits(), "anchor {} y", kind);
    }
}
