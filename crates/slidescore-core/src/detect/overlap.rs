//! Pairwise text overlap.

use crate::box_model::ElementBox;
use crate::config::AnalysisConfig;
use crate::finding::{ElementSummary, OverlapFinding};
use crate::values::round2;

/// Find every pair of text boxes whose outer boxes overlap by at least the
/// configured percentage of the smaller box.
///
/// The threshold is compared with the exact percentage; only the reported
/// value is rounded to two decimals.
///
/// Pairs are visited as `(i, j)` with `i < j`, so each unordered pair is
/// reported at most once, earlier box first. Pairs whose projections are
/// disjoint on either axis are rejected before any area is computed.
#[must_use]
pub fn detect_overlaps(texts: &[&ElementBox], config: &AnalysisConfig) -> Vec<OverlapFinding> {
    let mut findings = Vec::new();

    for (i, first) in texts.iter().enumerate() {
        for second in &texts[i + 1..] {
            let a = &first.outer_box;
            let b = &second.outer_box;
            let Some(intersection) = a.intersection(b) else {
                continue;
            };

            let smaller = a.area().min(b.area());
            if smaller <= 0.0 {
                continue;
            }

            // Threshold applies to the unrounded ratio.
            let percent = intersection.area() / smaller * 100.0;
            if percent >= config.overlap_threshold_percent {
                findings.push(OverlapFinding {
                    overlap_percent: round2(percent),
                    element1: ElementSummary::of(first),
                    element2: ElementSummary::of(second),
                    overlap_area: intersection,
                });
            }
        }
    }

    findings
}
