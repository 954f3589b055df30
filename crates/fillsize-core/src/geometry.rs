#![forbid(unsafe_code)]

//! Geometric primitives.

use std::fmt;
use std::str::FromStr;

/// The dimension along which item sizes are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Horizontal extent (X, width).
    #[default]
    Primary,
    /// Vertical extent (Y, height).
    Secondary,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }

    /// Short label used in logs and harness output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an axis name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisParseError {
    pub input: String,
}

impl fmt::Display for AxisParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown axis {:?} (expected primary, secondary, x, y, horizontal or vertical)",
            self.input
        )
    }
}

impl std::error::Error for AxisParseError {}

impl FromStr for Axis {
    type Err = AxisParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "x" | "horizontal" | "width" => Ok(Self::Primary),
            "secondary" | "y" | "vertical" | "height" => Ok(Self::Secondary),
            _ => Err(AxisParseError {
                input: s.to_owned(),
            }),
        }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a size from an extent along `axis` and the extent across it.
    #[inline]
    pub const fn from_axis(axis: Axis, along: u32, cross: u32) -> Self {
        match axis {
            Axis::Primary => Self::new(along, cross),
            Axis::Secondary => Self::new(cross, along),
        }
    }

    /// Extent along `axis`.
    #[inline]
    pub const fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Primary => self.width,
            Axis::Secondary => self.height,
        }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A pixel rectangle, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u32,
    /// Top edge (inclusive).
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Start coordinate along `axis`.
    #[inline]
    pub const fn start(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Primary => self.x,
            Axis::Secondary => self.y,
        }
    }

    /// Extent along `axis`.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> u32 {
        self.size().along(axis)
    }

    /// The slice of this rectangle spanning `[offset, offset + len)` along
    /// `axis`, relative to the rectangle's start, with the full cross extent.
    ///
    /// Coordinates saturate rather than wrap.
    pub fn slice(&self, axis: Axis, offset: u32, len: u32) -> Rect {
        match axis {
            Axis::Primary => Rect::new(self.x.saturating_add(offset), self.y, len, self.height),
            Axis::Secondary => Rect::new(self.x, self.y.saturating_add(offset), self.width, len),
        }
    }
}
