//! Geometry resolution for a declarative view-layout DSL.
//!
//! This library maps symbolic spatial references on a view (edges, anchors,
//! dimensions) to concrete coordinates, with direction-aware (LTR/RTL)
//! semantics and transform-aware extraction. The layout-statement layer that
//! accumulates constraints, and the native view system that owns the views,
//! both sit outside this crate and talk to it through [`Layoutable`] and the
//! resolver values.
//!
//! # Example
//!
//! ```rust
//! use view_geometry::{Direction, Layoutable, Point, Rect, View};
//!
//! let view = View::new(Rect::new(10.0, 0.0, 100.0, 50.0)).with_direction(Direction::Rtl);
//!
//! // `start` follows the view's direction: under RTL it is the right edge.
//! assert_eq!(view.edges().start().x(false), 110.0);
//! assert_eq!(view.anchors().center().point(false), Point::new(60.0, 25.0));
//! ```

pub mod align;
pub mod anchors;
pub mod config;
pub mod coordinates;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod geometry;
pub mod transform;
pub mod view;

pub use align::{Fit, HorizontalAlign, VerticalAlign};
pub use anchors::{anchor_point, Anchor, AnchorKind, AnchorList};
pub use config::{ConfigError, GeometryConfig};
pub use coordinates::view_rect;
pub use edges::{
    edge_x, edge_y, EdgeList, HorizontalEdge, HorizontalEdgeKind, VerticalEdge, VerticalEdgeKind,
};
pub use error::UnknownNameError;
pub use geometry::{Point, Rect, Size};
pub use transform::Transform;
pub use view::{Direction, Layoutable, View};
