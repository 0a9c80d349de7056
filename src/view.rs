//! The view-side contract: what resolvers need from a positionable element.
//!
//! The host view system owns the views and their geometry; this crate only
//! reads them. [`Layoutable`] is the capability boundary: an untransformed
//! frame, the active visual transform, and the resolved layout direction.
//! [`View`] is a plain value implementing it, for hosts that carry geometry
//! outside a native hierarchy and for tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::anchors::AnchorList;
use crate::config::GeometryConfig;
use crate::edges::EdgeList;
use crate::error::UnknownNameError;
use crate::geometry::Rect;
use crate::transform::Transform;

/// Resolved layout direction of a view.
///
/// Decides which physical edge the `start`/`end` aliases refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right (default for most scripts).
    Ltr,
    /// Right-to-left (Arabic, Hebrew, etc.).
    Rtl,
}

impl Direction {
    pub fn is_ltr(self) -> bool {
        self == Direction::Ltr
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Direction {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            other => Err(UnknownNameError::new("direction", other, "ltr, rtl")),
        }
    }
}

/// Read access to a view's geometry, in the view's parent coordinate space.
///
/// Implementations must answer from *current* state on every call: resolvers
/// never cache, so direction changes and frame mutations are reflected by the
/// next query.
pub trait Layoutable {
    /// The untransformed ("laid out") frame, in the parent coordinate space.
    fn frame(&self) -> Rect;

    /// The active visual transform, applied about the frame center.
    fn transform(&self) -> Transform;

    /// The resolved layout direction.
    fn direction(&self) -> Direction;

    fn is_ltr(&self) -> bool {
        self.direction().is_ltr()
    }

    /// Named edges of this view.
    fn edges(&self) -> EdgeList<'_, Self>
    where
        Self: Sized,
    {
        EdgeList::new(self)
    }

    /// Named anchor points of this view.
    fn anchors(&self) -> AnchorList<'_, Self>
    where
        Self: Sized,
    {
        AnchorList::new(self)
    }
}

/// A plain view value.
///
/// Owns nothing but its own geometry; the resolvers borrow it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub frame: Rect,
    pub transform: Transform,
    pub direction: Direction,
}

impl View {
    /// Create a view with an identity transform and LTR direction.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            transform: Transform::IDENTITY,
            direction: Direction::Ltr,
        }
    }

    /// Create a view whose unstated properties come from `config`.
    pub fn with_config(frame: Rect, config: &GeometryConfig) -> Self {
        Self {
            frame,
            transform: Transform::IDENTITY,
            direction: config.default_direction,
        }
    }

    /// Set the active visual transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the resolved layout direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

impl Layoutable for View {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}
