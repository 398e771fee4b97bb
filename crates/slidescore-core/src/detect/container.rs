//! Text leaving its intended container.
//!
//! The intended container comes from the input document's relationships;
//! its geometry comes from the output. Resolution and measurement are
//! separate steps so that a relationship without a resolvable container
//! simply produces nothing.

use super::{edge_overflow, overflow_percentages};
use crate::box_model::ElementBox;
use crate::config::AnalysisConfig;
use crate::finding::{
    ContainerOverflowFinding, ContainerOverflowKind, Direction, ElementSummary, OverflowMeasure,
};
use crate::matching::ElementMatcher;
use crate::relationship::Relationship;
use crate::values::round2;

const DIRECTION_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Top,
    Direction::Bottom,
];

/// Pick the output container box for `text`.
///
/// Classes are tried nearest ancestor first. For a class, candidates are
/// container-tag boxes carrying that exact class and stacked strictly below
/// the text; the one closest in z-index wins, earlier in document order on
/// ties. The first class with any candidate decides.
#[must_use]
pub fn resolve_container<'a>(
    text: &ElementBox,
    container_classes: &[String],
    boxes: &'a [ElementBox],
    config: &AnalysisConfig,
) -> Option<&'a ElementBox> {
    container_classes.iter().find_map(|class| {
        boxes
            .iter()
            .filter(|b| b.tag == config.container_tag && b.class == *class)
            .filter(|b| b.z_index < text.z_index)
            .min_by_key(|b| i64::from(text.z_index) - i64::from(b.z_index))
    })
}

/// Check every relationship's text box against its resolved container.
///
/// Relationships whose text has no match in the output, or whose container
/// cannot be resolved, are skipped.
#[must_use]
pub fn detect_container_overflows(
    relationships: &[Relationship],
    boxes: &[ElementBox],
    matcher: &dyn ElementMatcher,
    config: &AnalysisConfig,
) -> Vec<ContainerOverflowFinding> {
    relationships
        .iter()
        .filter_map(|relationship| {
            let Some(text) = matcher.find_text_box(relationship, boxes) else {
                log::trace!(
                    "no output box for <{}> '{}'",
                    relationship.text_tag,
                    relationship.text_snippet
                );
                return None;
            };
            let container =
                resolve_container(text, &relationship.container_classes, boxes, config)?;
            measure(text, container, config)
        })
        .collect()
}

fn measure(
    text: &ElementBox,
    container: &ElementBox,
    config: &AnalysisConfig,
) -> Option<ContainerOverflowFinding> {
    let inner = &text.border_box;
    let content = &container.content_box;

    let (overflow_percent, kind) = if inner.is_disjoint(content) {
        let kind = ContainerOverflowKind::CompletelyOutside {
            horizontal_overlap: !inner.is_disjoint_horizontally(content),
            vertical_overlap: !inner.is_disjoint_vertically(content),
        };
        (100.0, kind)
    } else {
        let px = edge_overflow(inner, content);
        let directions = px.directions_above(config.container_overflow_epsilon_px, DIRECTION_ORDER);
        if directions.is_empty() {
            return None;
        }
        let percent = overflow_percentages(&px, content.width, content.height);
        let measure = OverflowMeasure {
            px,
            percent,
            directions,
        };
        (round2(percent.max()), ContainerOverflowKind::Partial(measure))
    };

    Some(ContainerOverflowFinding {
        overflow_percent,
        text: ElementSummary::of(text),
        container: ElementSummary::of(container),
        kind,
    })
}
