//! Transform-aware extraction of a view's rectangle.
//!
//! Every resolver reads geometry through [`view_rect`], so every edge and
//! anchor is derived from one reference space: the view's **parent**
//! coordinate space, the space [`Layoutable::frame`] is expressed in.

use tracing::{trace, warn};

use crate::geometry::Rect;
use crate::view::Layoutable;

/// The view's rectangle in its parent coordinate space.
///
/// With `keep_transform` false this is the untransformed ("laid out") frame,
/// the rect layout computation works with. With `keep_transform` true it is
/// the loose bounds of the frame mapped through the active transform about
/// the frame center, the rect hit-testing and visual debugging want. The two
/// agree exactly when the transform is identity.
///
/// Pure read of current view state: repeated calls without an intervening
/// view mutation return bit-identical results.
pub fn view_rect<V: Layoutable + ?Sized>(view: &V, keep_transform: bool) -> Rect {
    let frame = view.frame();
    if !frame.origin.x.is_finite()
        || !frame.origin.y.is_finite()
        || !frame.size.width.is_finite()
        || !frame.size.height.is_finite()
    {
        warn!("view frame contains non-finite values: {:?}", frame);
    }

    if !keep_transform {
        return frame;
    }

    let transform = view.transform();
    if transform.is_identity() {
        return frame;
    }

    let rect = transform.bounding_rect(&frame);
    trace!("transformed view rect: {:?} -> {:?}", frame, rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::transform::Transform;
    use crate::view::View;

    #[test]
    fn test_untransformed_frame_passthrough() {
        let frame = Rect::new(10.0, 20.0, 100.0, 50.0);
        let view = View::new(frame).with_transform(Transform::scale(2.0, 2.0));
        assert_eq!(view_rect(&view, false), frame);
    }

    #[test]
    fn test_identity_transform_keeps_rects_equal() {
        let view = View::new(Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(view_rect(&view, false), view_rect(&view, true));
    }

    #[test]
    fn test_transformed_rect_diverges() {
        let view =
            View::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_transform(Transform::scale(1.2, 1.2));
        assert_eq!(view_rect(&view, false), Rect::new(0.0, 0.0, 100.0, 100.0));

        let visual = view_rect(&view, true);
        assert!((visual.min_x() - -10.0).abs() < 1e-9);
        assert!((visual.size.width - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_size_rect_is_well_defined() {
        let view = View::new(Rect::new(5.0, 5.0, 0.0, 0.0));
        let rect = view_rect(&view, true);
        assert_eq!(rect.center(), Point::new(5.0, 5.0));
        assert_eq!(rect.min_x(), rect.max_x());
    }

    #[test]
    fn test_repeated_queries_are_bit_identical() {
        let view =
            View::new(Rect::new(0.3, 0.7, 99.9, 51.3)).with_transform(Transform::rotation(33.0));
        let first = view_rect(&view, true);
        let second = view_rect(&view, true);
        assert_eq!(first.origin.x.to_bits(), second.origin.x.to_bits());
        assert_eq!(first.origin.y.to_bits(), second.origin.y.to_bits());
        assert_eq!(first.size.width.to_bits(), second.size.width.to_bits());
        assert_eq!(first.size.height.to_bits(), second.size.height.to_bits());
    }
}
