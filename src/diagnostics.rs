//! Human-readable formatting for warnings and debug output.
//!
//! The warning layer prints coordinates the way designers read them:
//! integral values without a fractional part ("10", not "10.0"). Nothing in
//! this module feeds back into resolution.

use crate::anchors::AnchorKind;
use crate::coordinates::view_rect;
use crate::edges::{HorizontalEdgeKind, VerticalEdgeKind};
use crate::geometry::{Point, Rect};
use crate::view::Layoutable;

/// Format a scalar for diagnostics: integral values drop the fractional part.
pub fn format_scalar(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format a point as `(x, y)`.
pub fn format_point(point: &Point) -> String {
    format!("({}, {})", format_scalar(point.x), format_scalar(point.y))
}

/// Format a rect as `{x: .., y: .., w: .., h: ..}`.
pub fn format_rect(rect: &Rect) -> String {
    format!(
        "{{x: {}, y: {}, w: {}, h: {}}}",
        format_scalar(rect.origin.x),
        format_scalar(rect.origin.y),
        format_scalar(rect.size.width),
        format_scalar(rect.size.height)
    )
}

/// A deterministic multi-line summary of a view's geometry: direction, model
/// and visual rects, all edges and anchors of the model rect.
pub fn geometry_report<V: Layoutable + ?Sized>(view: &V) -> String {
    let model = view_rect(view, false);
    let visual = view_rect(view, true);

    let mut out = String::new();
    out.push_str(&format!("direction: {}\n", view.direction()));
    out.push_str(&format!("model: {}\n", format_rect(&model)));
    out.push_str(&format!("visual: {}\n", format_rect(&visual)));
    out.push_str(&format!(
        "edges: left={} h-center={} right={} top={} v-center={} bottom={}\n",
        format_scalar(HorizontalEdgeKind::Left.resolve(&model)),
        format_scalar(HorizontalEdgeKind::HCenter.resolve(&model)),
        format_scalar(HorizontalEdgeKind::Right.resolve(&model)),
        format_scalar(VerticalEdgeKind::Top.resolve(&model)),
        format_scalar(VerticalEdgeKind::VCenter.resolve(&model)),
        format_scalar(VerticalEdgeKind::Bottom.resolve(&model)),
    ));
    out.push_str("anchors:\n");
    for row in AnchorKind::ALL.chunks(3) {
        let line = row
            .iter()
            .map(|kind| format!("{}={}", kind, format_point(&kind.resolve(&model))))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  {}\n", line));
    }
    out
}
