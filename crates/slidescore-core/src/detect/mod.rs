//! The three layout detectors.
//!
//! All detectors are pure functions of the element boxes, the relationships
//! and the configuration. None of them reads the document.

mod container;
mod overlap;
mod viewport;

pub use container::{detect_container_overflows, resolve_container};
pub use overlap::detect_overlaps;
pub use viewport::detect_viewport_overflows;

use crate::box_model::{ElementBox, text_boxes};
use crate::config::AnalysisConfig;
use crate::finding::{DetectionResult, EdgeAmounts};
use crate::geometry::Rect;
use crate::matching::ElementMatcher;
use crate::relationship::Relationship;
use crate::values::round2;

/// Run every detector over one output document.
#[must_use]
pub fn detect_all(
    relationships: &[Relationship],
    boxes: &[ElementBox],
    matcher: &dyn ElementMatcher,
    config: &AnalysisConfig,
) -> DetectionResult {
    let texts = text_boxes(boxes, config);
    let result = DetectionResult {
        overlap: detect_overlaps(&texts, config),
        container_overflow: detect_container_overflows(relationships, boxes, matcher, config),
        viewport_overflow: detect_viewport_overflows(&texts, config),
    };
    log::debug!(
        "detected {} overlap, {} container overflow, {} viewport overflow",
        result.overlap.len(),
        result.container_overflow.len(),
        result.viewport_overflow.len()
    );
    result
}

/// How far `inner` extends past each edge of `outer`, never negative.
fn edge_overflow(inner: &Rect, outer: &Rect) -> EdgeAmounts {
    EdgeAmounts {
        left: (outer.left - inner.left).max(0.0),
        right: (inner.right() - outer.right()).max(0.0),
        top: (outer.top - inner.top).max(0.0),
        bottom: (inner.bottom() - outer.bottom()).max(0.0),
    }
}

/// Express horizontal overflow relative to `width` and vertical overflow
/// relative to `height`, rounded to two decimals.
///
/// A dimension that is not positive cannot contain anything, so any
/// overflow along it counts as 100%.
fn overflow_percentages(px: &EdgeAmounts, width: f64, height: f64) -> EdgeAmounts {
    let ratio = |amount: f64, dimension: f64| {
        if dimension > 0.0 {
            round2(amount / dimension * 100.0)
        } else if amount > 0.0 {
            100.0
        } else {
            0.0
        }
    };
    EdgeAmounts {
        left: ratio(px.left, width),
        right: ratio(px.right, width),
        top: ratio(px.top, height),
        bottom: ratio(px.bottom, height),
    }
}
