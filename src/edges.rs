//! Horizontal and vertical edge resolution.
//!
//! Edge kinds are closed enums resolved by exhaustive match; an edge resolver
//! is just a kind bound to a borrowed view. Nothing is cached: every query
//! re-extracts the rect, so it always reflects current view state.

use std::fmt;
use std::str::FromStr;

use crate::coordinates::view_rect;
use crate::error::UnknownNameError;
use crate::geometry::Rect;
use crate::view::Layoutable;

/// The three horizontal edges of a rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalEdgeKind {
    Left,
    HCenter,
    Right,
}

impl HorizontalEdgeKind {
    /// The x-coordinate of this edge on `rect`.
    pub fn resolve(self, rect: &Rect) -> f64 {
        match self {
            HorizontalEdgeKind::Left => rect.min_x(),
            HorizontalEdgeKind::HCenter => rect.mid_x(),
            HorizontalEdgeKind::Right => rect.max_x(),
        }
    }
}

impl fmt::Display for HorizontalEdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HorizontalEdgeKind::Left => "left",
            HorizontalEdgeKind::HCenter => "h-center",
            HorizontalEdgeKind::Right => "right",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for HorizontalEdgeKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HorizontalEdgeKind::Left),
            "h-center" => Ok(HorizontalEdgeKind::HCenter),
            "right" => Ok(HorizontalEdgeKind::Right),
            other => Err(UnknownNameError::new(
                "horizontal edge",
                other,
                "left, h-center, right",
            )),
        }
    }
}

/// The three vertical edges of a rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdgeKind {
    Top,
    VCenter,
    Bottom,
}

impl VerticalEdgeKind {
    /// The y-coordinate of this edge on `rect`.
    pub fn resolve(self, rect: &Rect) -> f64 {
        match self {
            VerticalEdgeKind::Top => rect.min_y(),
            VerticalEdgeKind::VCenter => rect.mid_y(),
            VerticalEdgeKind::Bottom => rect.max_y(),
        }
    }
}

impl fmt::Display for VerticalEdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerticalEdgeKind::Top => "top",
            VerticalEdgeKind::VCenter => "v-center",
            VerticalEdgeKind::Bottom => "bottom",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for VerticalEdgeKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalEdgeKind::Top),
            "v-center" => Ok(VerticalEdgeKind::VCenter),
            "bottom" => Ok(VerticalEdgeKind::Bottom),
            other => Err(UnknownNameError::new(
                "vertical edge",
                other,
                "top, v-center, bottom",
            )),
        }
    }
}

/// Resolve a horizontal edge of a view without constructing a binding.
pub fn edge_x<V: Layoutable + ?Sized>(
    view: &V,
    kind: HorizontalEdgeKind,
    keep_transform: bool,
) -> f64 {
    kind.resolve(&view_rect(view, keep_transform))
}

/// Resolve a vertical edge of a view without constructing a binding.
pub fn edge_y<V: Layoutable + ?Sized>(
    view: &V,
    kind: VerticalEdgeKind,
    keep_transform: bool,
) -> f64 {
    kind.resolve(&view_rect(view, keep_transform))
}

/// A horizontal edge bound to a view.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalEdge<'a, V: ?Sized> {
    view: &'a V,
    kind: HorizontalEdgeKind,
}

impl<'a, V: Layoutable + ?Sized> HorizontalEdge<'a, V> {
    pub(crate) fn new(view: &'a V, kind: HorizontalEdgeKind) -> Self {
        Self { view, kind }
    }

    pub fn kind(&self) -> HorizontalEdgeKind {
        self.kind
    }

    /// The x-coordinate of the bound edge.
    pub fn x(&self, keep_transform: bool) -> f64 {
        edge_x(self.view, self.kind, keep_transform)
    }
}

/// A vertical edge bound to a view.
#[derive(Debug, Clone, Copy)]
pub struct VerticalEdge<'a, V: ?Sized> {
    view: &'a V,
    kind: VerticalEdgeKind,
}

impl<'a, V: Layoutable + ?Sized> VerticalEdge<'a, V> {
    pub(crate) fn new(view: &'a V, kind: VerticalEdgeKind) -> Self {
        Self { view, kind }
    }

    pub fn kind(&self) -> VerticalEdgeKind {
        self.kind
    }

    /// The y-coordinate of the bound edge.
    pub fn y(&self, keep_transform: bool) -> f64 {
        edge_y(self.view, self.kind, keep_transform)
    }
}

/// The catalogue of named edges on a view.
///
/// Each accessor constructs a fresh binding; `start`/`end` read the view's
/// direction at the moment of the call.
#[derive(Debug, Clone, Copy)]
pub struct EdgeList<'a, V: ?Sized> {
    view: &'a V,
}

impl<'a, V: Layoutable + ?Sized> EdgeList<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view }
    }

    pub fn left(&self) -> HorizontalEdge<'a, V> {
        HorizontalEdge::new(self.view, HorizontalEdgeKind::Left)
    }

    pub fn h_center(&self) -> HorizontalEdge<'a, V> {
        HorizontalEdge::new(self.view, HorizontalEdgeKind::HCenter)
    }

    pub fn right(&self) -> HorizontalEdge<'a, V> {
        HorizontalEdge::new(self.view, HorizontalEdgeKind::Right)
    }

    pub fn top(&self) -> VerticalEdge<'a, V> {
        VerticalEdge::new(self.view, VerticalEdgeKind::Top)
    }

    pub fn v_center(&self) -> VerticalEdge<'a, V> {
        VerticalEdge::new(self.view, VerticalEdgeKind::VCenter)
    }

    pub fn bottom(&self) -> VerticalEdge<'a, V> {
        VerticalEdge::new(self.view, VerticalEdgeKind::Bottom)
    }

    /// The leading edge: left under LTR, right under RTL.
    pub fn start(&self) -> HorizontalEdge<'a, V> {
        if self.view.is_ltr() {
            self.left()
        } else {
            self.right()
        }
    }

    /// The trailing edge: right under LTR, left under RTL.
    pub fn end(&self) -> HorizontalEdge<'a, V> {
        if self.view.is_ltr() {
            self.right()
        } else {
            self.left()
        }
    }
}
