//! Rectangles and edge sizes.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! Coordinates are CSS pixels with the y axis pointing down, so `top` is
//! the smaller vertical coordinate and `bottom = top + height`.

use std::ops::{Add, Neg};

use serde::Serialize;

/// A rectangle positioned in 2D space.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the left edge.
    pub left: f64,
    /// Vertical position of the top edge.
    pub top: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Construct from position and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Construct from the four edge coordinates.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Right edge coordinate.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge coordinate.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Width times height.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when the horizontal projections do not overlap.
    ///
    /// Touching edges count as disjoint.
    #[must_use]
    pub fn is_disjoint_horizontally(&self, other: &Self) -> bool {
        self.right() <= other.left || other.right() <= self.left
    }

    /// True when the vertical projections do not overlap.
    ///
    /// Touching edges count as disjoint.
    #[must_use]
    pub fn is_disjoint_vertically(&self, other: &Self) -> bool {
        self.bottom() <= other.top || other.bottom() <= self.top
    }

    /// True when the rectangles share no interior area.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.is_disjoint_horizontally(other) || self.is_disjoint_vertically(other)
    }

    /// The overlapping region, or `None` when the rectangles are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.is_disjoint(other) {
            return None;
        }
        Some(Self::from_edges(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        ))
    }

    /// Shrink inward by `edges` on every side.
    #[must_use]
    pub fn shrink(&self, edges: EdgeSizes) -> Self {
        Self::new(
            self.left + edges.left,
            self.top + edges.top,
            self.width - edges.left - edges.right,
            self.height - edges.top - edges.bottom,
        )
    }

    /// Grow outward by `edges` on every side.
    #[must_use]
    pub fn expand(&self, edges: EdgeSizes) -> Self {
        self.shrink(-edges)
    }

    /// True when `other` lies inside `self` (edges may coincide).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// `[left-right, top-bottom]` with whole pixels, as a browser's
    /// element inspector labels a box.
    #[must_use]
    pub fn describe_span(&self) -> String {
        format!(
            "[{:.0}-{:.0}, {:.0}-{:.0}]",
            self.left,
            self.right(),
            self.top,
            self.bottom()
        )
    }

    /// `WxHpx` with whole pixels.
    #[must_use]
    pub fn describe_size(&self) -> String {
        format!("{:.0}×{:.0}px", self.width, self.height)
    }
}

/// Edge sizes for padding, border, or margin.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f64,
    /// Right edge size.
    pub right: f64,
    /// Bottom edge size.
    pub bottom: f64,
    /// Left edge size.
    pub left: f64,
}

impl EdgeSizes {
    /// Construct in CSS shorthand order (top, right, bottom, left).
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same size on all four sides.
    #[must_use]
    pub const fn uniform(size: f64) -> Self {
        Self::new(size, size, size, size)
    }
}

impl Add for EdgeSizes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
            self.left + other.left,
        )
    }
}

impl Neg for EdgeSizes {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.top, -self.right, -self.bottom, -self.left)
    }
}
