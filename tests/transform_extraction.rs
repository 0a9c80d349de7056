//! Integration tests for transform-aware rect extraction.
//!
//! `keep_transform` selects between the laid-out model rect and the visual
//! rect; the two diverge exactly when the view carries a non-identity
//! transform.

use view_geometry::{view_rect, Layoutable, Rect, Transform, View};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_rect_approx(actual: Rect, expected: Rect) {
    assert!(
        approx_eq(actual.origin.x, expected.origin.x)
            && approx_eq(actual.origin.y, expected.origin.y)
            && approx_eq(actual.size.width, expected.size.width)
            && approx_eq(actual.size.height, expected.size.height),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_identity_transform_keeps_modes_equal() {
    let view = View::new(Rect::new(10.0, 20.0, 100.0, 50.0));
    assert_eq!(view_rect(&view, false), view_rect(&view, true));
}

#[test]
fn test_scale_about_center_matches_visual_rect() {
    // Model {0,0,100,100} scaled 1.2x about the center is visually {-10,-10,120,120}
    let view =
        View::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_transform(Transform::scale(1.2, 1.2));

    assert_eq!(view_rect(&view, false), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_rect_approx(view_rect(&view, true), Rect::new(-10.0, -10.0, 120.0, 120.0));
}

#[test]
fn test_edges_follow_the_selected_mode() {
    let view =
        View::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_transform(Transform::scale(1.2, 1.2));

    assert_eq!(view.edges().left().x(false), 0.0);
    assert_eq!(view.edges().right().x(false), 100.0);
    assert!(approx_eq(view.edges().left().x(true), -10.0));
    assert!(approx_eq(view.edges().right().x(true), 110.0));
    assert!(approx_eq(view.edges().top().y(true), -10.0));
    assert!(approx_eq(view.edges().bottom().y(true), 110.0));

    // Center is the fixed point of a transform applied about the center
    assert!(approx_eq(
        view.edges().h_center().x(true),
        view.edges().h_center().x(false)
    ));
}

#[test]
fn test_rotation_produces_loose_bounds() {
    let view =
        View::new(Rect::new(0.0, 0.0, 100.0, 50.0)).with_transform(Transform::rotation(90.0));

    let visual = view_rect(&view, true);
    assert!(approx_eq(visual.size.width, 50.0), "width: got {}", visual.size.width);
    assert!(
        approx_eq(visual.size.height, 100.0),
        "height: got {}",
        visual.size.height
    );
    assert!(approx_eq(visual.mid_x(), 50.0));
    assert!(approx_eq(visual.mid_y(), 25.0));
}

#[test]
fn test_rotated_square_grows_by_sqrt_two() {
    let view =
        View::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_transform(Transform::rotation(45.0));

    let visual = view_rect(&view, true);
    let expected = 100.0 * std::f64::consts::SQRT_2;
    assert!((visual.size.width - expected).abs() < 0.1);
    assert!((visual.size.height - expected).abs() < 0.1);
}

#[test]
fn test_translation_shifts_visual_rect_only() {
    let view =
        View::new(Rect::new(10.0, 10.0, 20.0, 20.0)).with_transform(Transform::translation(5.0, -5.0));

    assert_eq!(view_rect(&view, false), Rect::new(10.0, 10.0, 20.0, 20.0));
    assert_rect_approx(view_rect(&view, true), Rect::new(15.0, 5.0, 20.0, 20.0));
}

#[test]
fn test_clearing_the_transform_reconverges_the_modes() {
    let mut view =
        View::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_transform(Transform::scale(2.0, 2.0));
    assert_ne!(view_rect(&view, false), view_rect(&view, true));

    view.set_transform(Transform::IDENTITY);
    assert_eq!(view_rect(&view, false), view_rect(&view, true));
}
