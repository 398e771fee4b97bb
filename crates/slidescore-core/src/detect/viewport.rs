//! Text leaving the viewport.

use super::{edge_overflow, overflow_percentages};
use crate::box_model::ElementBox;
use crate::config::AnalysisConfig;
use crate::finding::{Direction, ElementSummary, OverflowMeasure, ViewportOverflowFinding};
use crate::geometry::Rect;
use crate::values::round2;

const DIRECTION_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Top,
    Direction::Right,
    Direction::Bottom,
];

/// Check every text box's outer box against the viewport anchored at the
/// origin.
#[must_use]
pub fn detect_viewport_overflows(
    texts: &[&ElementBox],
    config: &AnalysisConfig,
) -> Vec<ViewportOverflowFinding> {
    let viewport = config.viewport;
    let bounds = Rect::new(0.0, 0.0, viewport.width, viewport.height);

    texts
        .iter()
        .filter_map(|text| {
            let px = edge_overflow(&text.outer_box, &bounds);
            let directions =
                px.directions_above(config.viewport_overflow_epsilon_px, DIRECTION_ORDER);
            if directions.is_empty() {
                return None;
            }
            let percent = overflow_percentages(&px, viewport.width, viewport.height);
            Some(ViewportOverflowFinding {
                overflow_percent: round2(percent.max()),
                text: ElementSummary::of(text),
                viewport,
                overflow: OverflowMeasure {
                    px,
                    percent,
                    directions,
                },
            })
        })
        .collect()
}
