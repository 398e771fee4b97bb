//! Detected layout defects.
//!
//! Each detector produces its own payload type; [`Finding`] is the tagged
//! view consumers match on when they need to treat all three uniformly.
//! Findings own a copy of the descriptive fields of the boxes involved
//! ([`ElementSummary`]), so a result outlives the box list it came from.
//!
//! Serialization follows the interchange shape existing report tooling
//! reads:
//!
//! ```text
//! { "overlap":            { "errors": [...], "count": n },
//!   "container_overflow": { "errors": [...], "count": n },
//!   "viewport_overflow":  { "errors": [...], "count": n } }
//! ```

use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::box_model::ElementBox;
use crate::config::Viewport;
use crate::geometry::{EdgeSizes, Rect};

/// The three defect classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// Two text boxes overlap.
    Overlap,
    /// A text box leaves its container's content box.
    ContainerOverflow,
    /// A text box leaves the viewport.
    ViewportOverflow,
}

impl FindingCategory {
    /// All categories in report order.
    pub const ALL: [Self; 3] = [Self::Overlap, Self::ContainerOverflow, Self::ViewportOverflow];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overlap => "Text Overlap",
            Self::ContainerOverflow => "Container Overflow",
            Self::ViewportOverflow => "Viewport Overflow",
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An edge a box crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
        })
    }
}

/// Descriptive fields of a box involved in a finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSummary {
    /// Lowercase tag name.
    pub tag: String,
    /// Raw class attribute.
    pub class: String,
    /// Text snippet.
    pub content: String,
    /// Border box.
    pub border_box: Rect,
    /// Content box.
    pub content_box: Rect,
    /// Parsed z-index.
    pub z_index: i32,
    /// Margin widths.
    pub margin: EdgeSizes,
    /// Padding widths.
    pub padding: EdgeSizes,
    /// Border widths.
    pub border: EdgeSizes,
}

impl ElementSummary {
    /// Copy the descriptive fields out of `element`.
    #[must_use]
    pub fn of(element: &ElementBox) -> Self {
        Self {
            tag: element.tag.clone(),
            class: element.class.clone(),
            content: element.text_snippet.clone(),
            border_box: element.border_box,
            content_box: element.content_box,
            z_index: element.z_index,
            margin: element.margin,
            padding: element.padding,
            border: element.border,
        }
    }

    /// `tag.class`, or just `tag` for elements without a class.
    #[must_use]
    pub fn selector(&self) -> String {
        if self.class.is_empty() {
            self.tag.clone()
        } else {
            format!("{}.{}", self.tag, self.class)
        }
    }

    fn box_model(&self) -> String {
        let edges = |e: &EdgeSizes| format!("{}/{}/{}/{}", e.top, e.right, e.bottom, e.left);
        format!(
            "margin({}) padding({}) border({})",
            edges(&self.margin),
            edges(&self.padding),
            edges(&self.border)
        )
    }
}

impl Serialize for ElementSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ElementSummary", 7)?;
        s.serialize_field("tag", &self.tag)?;
        s.serialize_field("class", &self.class)?;
        s.serialize_field("content", &self.content)?;
        s.serialize_field("box_f12", &self.border_box.describe_span())?;
        s.serialize_field("size", &self.border_box.describe_size())?;
        s.serialize_field("z_index", &self.z_index)?;
        s.serialize_field("box_model", &self.box_model())?;
        s.end()
    }
}

/// Containers are reported with their content area as well.
fn serialize_container<S: Serializer>(
    container: &ElementSummary,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("ContainerSummary", 8)?;
    s.serialize_field("tag", &container.tag)?;
    s.serialize_field("class", &container.class)?;
    s.serialize_field("box_f12", &container.border_box.describe_span())?;
    s.serialize_field("size", &container.border_box.describe_size())?;
    s.serialize_field("content_area", &container.content_box.describe_span())?;
    s.serialize_field("content_size", &container.content_box.describe_size())?;
    s.serialize_field("z_index", &container.z_index)?;
    s.serialize_field("box_model", &container.box_model())?;
    s.end()
}

fn serialize_overlap_area<S: Serializer>(area: &Rect, serializer: S) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("OverlapArea", 5)?;
    s.serialize_field("left", &format!("{:.0}", area.left))?;
    s.serialize_field("top", &format!("{:.0}", area.top))?;
    s.serialize_field("width", &format!("{:.0}", area.width))?;
    s.serialize_field("height", &format!("{:.0}", area.height))?;
    s.serialize_field("area", &format!("{:.0}", area.area()))?;
    s.end()
}

/// Two text boxes whose outer boxes overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapFinding {
    /// Intersection area as a percentage of the smaller outer box.
    pub overlap_percent: f64,
    /// Earlier box in document order.
    pub element1: ElementSummary,
    /// Later box in document order.
    pub element2: ElementSummary,
    /// The intersection rectangle.
    #[serde(serialize_with = "serialize_overlap_area")]
    pub overlap_area: Rect,
}

/// Per-edge amounts, in pixels or percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeAmounts {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl EdgeAmounts {
    /// Largest of the four amounts.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.left.max(self.right).max(self.top).max(self.bottom)
    }

    /// The edges whose amount exceeds `epsilon`, in `order`.
    #[must_use]
    pub fn directions_above(&self, epsilon: f64, order: [Direction; 4]) -> Vec<Direction> {
        order
            .into_iter()
            .filter(|&d| self.get(d) > epsilon)
            .collect()
    }

    /// Amount on edge `direction`.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
        }
    }
}

/// How far a box crosses each edge of a reference rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowMeasure {
    /// Overflow in pixels.
    pub px: EdgeAmounts,
    /// Overflow as a percentage of the reference dimension.
    pub percent: EdgeAmounts,
    /// Edges crossed by more than the detector's epsilon.
    pub directions: Vec<Direction>,
}

impl Serialize for OverflowMeasure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let edge = |d: Direction| format!("{:.1}px ({:.1}%)", self.px.get(d), self.percent.get(d));
        let mut s = serializer.serialize_struct("OverflowMeasure", 5)?;
        s.serialize_field("left", &edge(Direction::Left))?;
        s.serialize_field("right", &edge(Direction::Right))?;
        s.serialize_field("top", &edge(Direction::Top))?;
        s.serialize_field("bottom", &edge(Direction::Bottom))?;
        s.serialize_field("directions", &self.directions)?;
        s.end()
    }
}

/// How a text box leaves its container.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerOverflowKind {
    /// The text box does not touch the container's content box at all.
    CompletelyOutside {
        /// Whether the horizontal projections overlap.
        horizontal_overlap: bool,
        /// Whether the vertical projections overlap.
        vertical_overlap: bool,
    },
    /// The text box crosses one or more edges of the content box.
    Partial(OverflowMeasure),
}

impl ContainerOverflowKind {
    /// Edges crossed; empty for a box completely outside.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        match self {
            Self::CompletelyOutside { .. } => &[],
            Self::Partial(measure) => &measure.directions,
        }
    }

    /// One-line description. Vertical separation wins when the box is
    /// outside on both axes.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CompletelyOutside {
                vertical_overlap: false,
                ..
            } => "Text is completely outside parent vertically".to_string(),
            Self::CompletelyOutside { .. } => {
                "Text is completely outside parent horizontally".to_string()
            }
            Self::Partial(measure) => {
                let edges: Vec<String> = measure.directions.iter().map(ToString::to_string).collect();
                format!("Text overflows parent ({})", edges.join(", "))
            }
        }
    }
}

impl Serialize for ContainerOverflowKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::CompletelyOutside {
                horizontal_overlap,
                vertical_overlap,
            } => {
                let mut s = serializer.serialize_struct("CompletelyOutside", 4)?;
                s.serialize_field("status", "COMPLETELY_OUTSIDE")?;
                s.serialize_field("horizontal_overlap", horizontal_overlap)?;
                s.serialize_field("vertical_overlap", vertical_overlap)?;
                s.serialize_field("message", &self.message())?;
                s.end()
            }
            Self::Partial(measure) => measure.serialize(serializer),
        }
    }
}

/// A text box that leaves its resolved container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerOverflowFinding {
    /// Severity: 100 for a box completely outside, else the largest edge
    /// percentage.
    pub overflow_percent: f64,
    /// The text box.
    pub text: ElementSummary,
    /// The resolved container.
    #[serde(rename = "parent", serialize_with = "serialize_container")]
    pub container: ElementSummary,
    /// How the box leaves the container.
    #[serde(rename = "overflow")]
    pub kind: ContainerOverflowKind,
}

/// A text box that leaves the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewportOverflowFinding {
    /// Largest edge percentage.
    pub overflow_percent: f64,
    /// The text box.
    pub text: ElementSummary,
    /// The viewport checked against.
    pub viewport: Viewport,
    /// Per-edge overflow.
    pub overflow: OverflowMeasure,
}

/// Borrowed, tagged view of any finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Finding<'a> {
    /// See [`OverlapFinding`].
    Overlap(&'a OverlapFinding),
    /// See [`ContainerOverflowFinding`].
    ContainerOverflow(&'a ContainerOverflowFinding),
    /// See [`ViewportOverflowFinding`].
    ViewportOverflow(&'a ViewportOverflowFinding),
}

impl Finding<'_> {
    /// The defect class.
    #[must_use]
    pub const fn category(&self) -> FindingCategory {
        match self {
            Self::Overlap(_) => FindingCategory::Overlap,
            Self::ContainerOverflow(_) => FindingCategory::ContainerOverflow,
            Self::ViewportOverflow(_) => FindingCategory::ViewportOverflow,
        }
    }

    /// Severity percentage.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        match self {
            Self::Overlap(f) => f.overlap_percent,
            Self::ContainerOverflow(f) => f.overflow_percent,
            Self::ViewportOverflow(f) => f.overflow_percent,
        }
    }
}

impl fmt::Display for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlap(o) => write!(
                f,
                "{:.1}% - {} ↔ {}",
                o.overlap_percent,
                o.element1.selector(),
                o.element2.selector()
            ),
            Self::ContainerOverflow(c) => write!(
                f,
                "{:.1}% - {} in {}",
                c.overflow_percent,
                c.text.selector(),
                c.container.selector()
            ),
            Self::ViewportOverflow(v) => {
                let edges: Vec<String> =
                    v.overflow.directions.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "{:.1}% - {} ({})",
                    v.overflow_percent,
                    v.text.selector(),
                    edges.join(", ")
                )
            }
        }
    }
}

/// Everything the three detectors found in one output document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResult {
    /// Overlapping text pairs.
    pub overlap: Vec<OverlapFinding>,
    /// Text boxes leaving their containers.
    pub container_overflow: Vec<ContainerOverflowFinding>,
    /// Text boxes leaving the viewport.
    pub viewport_overflow: Vec<ViewportOverflowFinding>,
}

impl DetectionResult {
    /// Total number of findings.
    #[must_use]
    pub fn total(&self) -> usize {
        self.overlap.len() + self.container_overflow.len() + self.viewport_overflow.len()
    }

    /// True when nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Number of findings in `category`.
    #[must_use]
    pub fn count(&self, category: FindingCategory) -> usize {
        match category {
            FindingCategory::Overlap => self.overlap.len(),
            FindingCategory::ContainerOverflow => self.container_overflow.len(),
            FindingCategory::ViewportOverflow => self.viewport_overflow.len(),
        }
    }

    /// Every finding, category by category.
    pub fn findings(&self) -> impl Iterator<Item = Finding<'_>> {
        self.overlap
            .iter()
            .map(Finding::Overlap)
            .chain(self.container_overflow.iter().map(Finding::ContainerOverflow))
            .chain(self.viewport_overflow.iter().map(Finding::ViewportOverflow))
    }

    /// Findings of one category.
    pub fn findings_in(&self, category: FindingCategory) -> impl Iterator<Item = Finding<'_>> {
        self.findings().filter(move |f| f.category() == category)
    }
}

/// `{ "errors": [...], "count": n }`
struct CategoryReport<'a, T> {
    errors: &'a [T],
}

impl<T: Serialize> Serialize for CategoryReport<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CategoryReport", 2)?;
        s.serialize_field("errors", self.errors)?;
        s.serialize_field("count", &self.errors.len())?;
        s.end()
    }
}

impl Serialize for DetectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DetectionResult", 3)?;
        s.serialize_field("overlap", &CategoryReport { errors: &self.overlap })?;
        s.serialize_field(
            "container_overflow",
            &CategoryReport {
                errors: &self.container_overflow,
            },
        )?;
        s.serialize_field(
            "viewport_overflow",
            &CategoryReport {
                errors: &self.viewport_overflow,
            },
        )?;
        s.end()
    }
}
