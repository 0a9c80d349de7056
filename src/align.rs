//! Descriptive alignment and fit enumerations.
//!
//! Diagnostic vocabulary for the layout-statement layer: display names for
//! error messages and warnings. Resolution never consults these.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownNameError;
use crate::view::Direction;

/// Horizontal alignment of content inside a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
    Start,
    End,
}

impl HorizontalAlign {
    /// Replace `start`/`end` with the physical variant for `direction`;
    /// physical variants pass through unchanged.
    pub fn resolved(self, direction: Direction) -> Self {
        match (self, direction) {
            (HorizontalAlign::Start, Direction::Ltr) => HorizontalAlign::Left,
            (HorizontalAlign::Start, Direction::Rtl) => HorizontalAlign::Right,
            (HorizontalAlign::End, Direction::Ltr) => HorizontalAlign::Right,
            (HorizontalAlign::End, Direction::Rtl) => HorizontalAlign::Left,
            (other, _) => other,
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
            HorizontalAlign::Start => "start",
            HorizontalAlign::End => "end",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for HorizontalAlign {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HorizontalAlign::Left),
            "center" => Ok(HorizontalAlign::Center),
            "right" => Ok(HorizontalAlign::Right),
            "start" => Ok(HorizontalAlign::Start),
            "end" => Ok(HorizontalAlign::End),
            other => Err(UnknownNameError::new(
                "horizontal alignment",
                other,
                "left, center, right, start, end",
            )),
        }
    }
}

/// Vertical alignment of content inside a region. Direction-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Center => "center",
            VerticalAlign::Bottom => "bottom",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for VerticalAlign {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalAlign::Top),
            "center" => Ok(VerticalAlign::Center),
            "bottom" => Ok(VerticalAlign::Bottom),
            other => Err(UnknownNameError::new(
                "vertical alignment",
                other,
                "top, center, bottom",
            )),
        }
    }
}

/// How content is fitted to a dimension.
///
/// The flexible kinds let the fitted dimension grow past the reference value;
/// the plain kinds pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fit {
    Width,
    Height,
    WidthFlexible,
    HeightFlexible,
}

impl Fit {
    /// True exactly for the two flexible kinds.
    pub fn is_flexible(self) -> bool {
        matches!(self, Fit::WidthFlexible | Fit::HeightFlexible)
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fit::Width => "width",
            Fit::Height => "height",
            Fit::WidthFlexible => "width-flexible",
            Fit::HeightFlexible => "height-flexible",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Fit {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "width" => Ok(Fit::Width),
            "height" => Ok(Fit::Height),
            "width-flexible" => Ok(Fit::WidthFlexible),
            "height-flexible" => Ok(Fit::HeightFlexible),
            other => Err(UnknownNameError::new(
                "fit",
                other,
                "width, height, width-flexible, height-flexible",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_align_names() {
        assert_eq!(HorizontalAlign::Left.to_string(), "left");
        assert_eq!(HorizontalAlign::Start.to_string(), "start");
        assert_eq!("end".parse::<HorizontalAlign>().unwrap(), HorizontalAlign::End);
    }

    #[test]
    fn test_horizontal_align_resolved() {
        assert_eq!(
            HorizontalAlign::Start.resolved(Direction::Ltr),
            HorizontalAlign::Left
        );
        assert_eq!(
            HorizontalAlign::Start.resolved(Direction::Rtl),
            HorizontalAlign::Right
        );
        assert_eq!(
            HorizontalAlign::End.resolved(Direction::Rtl),
            HorizontalAlign::Left
        );
        assert_eq!(
            HorizontalAlign::Center.resolved(Direction::Rtl),
            HorizontalAlign::Center
        );
    }

    #[test]
    fn test_vertical_align_names() {
        assert_eq!(VerticalAlign::Top.to_string(), "top");
        assert_eq!("bottom".parse::<VerticalAlign>().unwrap(), VerticalAlign::Bottom);
        assert!("start".parse::<VerticalAlign>().is_err());
    }

    #[test]
    fn test_fit_is_flexible() {
        assert!(!Fit::Width.is_flexible());
        assert!(!Fit::Height.is_flexible());
        assert!(Fit::WidthFlexible.is_flexible());
        assert!(Fit::HeightFlexible.is_flexible());
    }

    #[test]
    fn test_fit_name_round_trip() {
        for fit in [Fit::Width, Fit::Height, Fit::WidthFlexible, Fit::HeightFlexible] {
            assert_eq!(fit.to_string().parse::<Fit>().unwrap(), fit);
        }
    }
}
