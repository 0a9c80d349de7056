//! Anchor point resolution.
//!
//! An anchor is a named point combining one horizontal and one vertical edge.
//! Each kind decomposes into its two edge kinds and resolves both from a
//! single rect extraction, so an anchor can never disagree with the edge
//! resolvers for the same `keep_transform`.

use std::fmt;
use std::str::FromStr;

use crate::coordinates::view_rect;
use crate::edges::{HorizontalEdgeKind, VerticalEdgeKind};
use crate::error::UnknownNameError;
use crate::geometry::{Point, Rect};
use crate::view::Layoutable;

/// The nine anchor points of a rect: {top, center, bottom} × {left, center, right}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl AnchorKind {
    /// All nine kinds in reading order.
    pub const ALL: [AnchorKind; 9] = [
        AnchorKind::TopLeft,
        AnchorKind::TopCenter,
        AnchorKind::TopRight,
        AnchorKind::CenterLeft,
        AnchorKind::Center,
        AnchorKind::CenterRight,
        AnchorKind::BottomLeft,
        AnchorKind::BottomCenter,
        AnchorKind::BottomRight,
    ];

    /// The horizontal and vertical edge kinds this anchor combines.
    pub fn components(self) -> (HorizontalEdgeKind, VerticalEdgeKind) {
        match self {
            AnchorKind::TopLeft => (HorizontalEdgeKind::Left, VerticalEdgeKind::Top),
            AnchorKind::TopCenter => (HorizontalEdgeKind::HCenter, VerticalEdgeKind::Top),
            AnchorKind::TopRight => (HorizontalEdgeKind::Right, VerticalEdgeKind::Top),
            AnchorKind::CenterLeft => (HorizontalEdgeKind::Left, VerticalEdgeKind::VCenter),
            AnchorKind::Center => (HorizontalEdgeKind::HCenter, VerticalEdgeKind::VCenter),
            AnchorKind::CenterRight => (HorizontalEdgeKind::Right, VerticalEdgeKind::VCenter),
            AnchorKind::BottomLeft => (HorizontalEdgeKind::Left, VerticalEdgeKind::Bottom),
            AnchorKind::BottomCenter => (HorizontalEdgeKind::HCenter, VerticalEdgeKind::Bottom),
            AnchorKind::BottomRight => (HorizontalEdgeKind::Right, VerticalEdgeKind::Bottom),
        }
    }

    /// The point of this anchor on `rect`.
    pub fn resolve(self, rect: &Rect) -> Point {
        let (horizontal, vertical) = self.components();
        Point::new(horizontal.resolve(rect), vertical.resolve(rect))
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnchorKind::TopLeft => "top-left",
            AnchorKind::TopCenter => "top-center",
            AnchorKind::TopRight => "top-right",
            AnchorKind::CenterLeft => "center-left",
            AnchorKind::Center => "center",
            AnchorKind::CenterRight => "center-right",
            AnchorKind::BottomLeft => "bottom-left",
            AnchorKind::BottomCenter => "bottom-center",
            AnchorKind::BottomRight => "bottom-right",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AnchorKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(AnchorKind::TopLeft),
            "top-center" => Ok(AnchorKind::TopCenter),
            "top-right" => Ok(AnchorKind::TopRight),
            "center-left" => Ok(AnchorKind::CenterLeft),
            "center" => Ok(AnchorKind::Center),
            "center-right" => Ok(AnchorKind::CenterRight),
            "bottom-left" => Ok(AnchorKind::BottomLeft),
            "bottom-center" => Ok(AnchorKind::BottomCenter),
            "bottom-right" => Ok(AnchorKind::BottomRight),
            other => Err(UnknownNameError::new(
                "anchor",
                other,
                "top-left, top-center, top-right, center-left, center, center-right, \
                 bottom-left, bottom-center, bottom-right",
            )),
        }
    }
}

/// Resolve an anchor of a view without constructing a binding.
pub fn anchor_point<V: Layoutable + ?Sized>(
    view: &V,
    kind: AnchorKind,
    keep_transform: bool,
) -> Point {
    kind.resolve(&view_rect(view, keep_transform))
}

/// An anchor bound to a view.
#[derive(Debug, Clone, Copy)]
pub struct Anchor<'a, V: ?Sized> {
    view: &'a V,
    kind: AnchorKind,
}

impl<'a, V: Layoutable + ?Sized> Anchor<'a, V> {
    pub(crate) fn new(view: &'a V, kind: AnchorKind) -> Self {
        Self { view, kind }
    }

    pub fn kind(&self) -> AnchorKind {
        self.kind
    }

    /// The point of the bound anchor.
    pub fn point(&self, keep_transform: bool) -> Point {
        anchor_point(self.view, self.kind, keep_transform)
    }
}

/// The catalogue of named anchors on a view.
///
/// The `*_start`/`*_end` aliases read the view's direction at the moment of
/// the call; `top_center` and `bottom_center` have no alias because center is
/// direction-independent.
#[derive(Debug, Clone, Copy)]
pub struct AnchorList<'a, V: ?Sized> {
    view: &'a V,
}

impl<'a, V: Layoutable + ?Sized> AnchorList<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view }
    }

    pub fn top_left(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::TopLeft)
    }

    pub fn top_center(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::TopCenter)
    }

    pub fn top_right(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::TopRight)
    }

    pub fn center_left(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::CenterLeft)
    }

    pub fn center(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::Center)
    }

    pub fn center_right(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::CenterRight)
    }

    pub fn bottom_left(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::BottomLeft)
    }

    pub fn bottom_center(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::BottomCenter)
    }

    pub fn bottom_right(&self) -> Anchor<'a, V> {
        Anchor::new(self.view, AnchorKind::BottomRight)
    }

    pub fn top_start(&self) -> Anchor<'a, V> {
        if self.view.is_ltr() {
            self.top_left()
        } else {
            self.top_right()
        }
    }

    pub fn top_end(&self) -> Anchor<'a, V> {
        if self.view.is_ltr() {
            self.top_right()
        } else {
            self.top_left()
        }
    }

    pub fn center_start(&self) -> Anchor<'a, V> {
        if self.view.is_ltr() {
            self.center_left()
        } else {
            self.center_right()
        }
    }

    pub fn center_end(&self) -> Anchor<'a, V> {
        if self.view.is_ltr() {
            self.center_right()
        } else {
            self.center_left()
        }
    }

    pub fn bottom_start(&self) -> Anchor<'a, V> {
        if self.view.is_ltr() {
            self.bottom_left()
        } else {
            self.bottom_right()
        }
    }

    pub fn bottom_end(&self) -> Anchor<'a, V> {
        if self.view.is_ltr() {
            self.bottom_right()
        } else {
            self.bottom_left()
        }
    }
}
