//! Slide quality score.
//!
//! A slide starts at 10 and loses a penalty per finding. The penalty grows
//! with the finding's severity percentage in four steps; overlap is weighted
//! heavier than either overflow.

use std::fmt;

use serde::Serialize;

use crate::finding::{DetectionResult, FindingCategory};
use crate::values::round2;

/// Score of a slide with no findings.
pub const MAX_SCORE: f64 = 10.0;

/// Severity steps, highest first, shared by every category.
const SEVERITY_STEPS: [f64; 3] = [50.0, 25.0, 10.0];

/// Penalties per step for text overlap, followed by the fallback below the
/// lowest step.
const OVERLAP_PENALTIES: [f64; 4] = [2.0, 1.0, 0.5, 0.2];

/// Penalties per step for either overflow category.
const OVERFLOW_PENALTIES: [f64; 4] = [1.5, 0.8, 0.4, 0.15];

/// Penalty for a single finding of `category` with severity `percent`.
#[must_use]
pub fn penalty_for(category: FindingCategory, percent: f64) -> f64 {
    let table = match category {
        FindingCategory::Overlap => &OVERLAP_PENALTIES,
        FindingCategory::ContainerOverflow | FindingCategory::ViewportOverflow => {
            &OVERFLOW_PENALTIES
        }
    };
    let step = SEVERITY_STEPS
        .iter()
        .position(|&threshold| percent >= threshold)
        .unwrap_or(SEVERITY_STEPS.len());
    table[step]
}

/// Sum of all penalties in `result`.
#[must_use]
pub fn total_penalty(result: &DetectionResult) -> f64 {
    result
        .findings()
        .map(|f| penalty_for(f.category(), f.percent()))
        .sum()
}

/// `max(0, 10 - penalty)`, rounded to two decimals.
#[must_use]
pub fn score(result: &DetectionResult) -> f64 {
    round2((MAX_SCORE - total_penalty(result)).max(0.0))
}

/// Coarse bucket of a score, as batch summaries report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    /// 9.0 and above.
    Excellent,
    /// 7.5 up to 9.0.
    Good,
    /// 5.0 up to 7.5.
    Fair,
    /// 2.5 up to 5.0.
    Poor,
    /// Below 2.5.
    Critical,
}

impl QualityGrade {
    /// All grades, best first.
    pub const ALL: [Self; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Fair,
        Self::Poor,
        Self::Critical,
    ];

    /// Bucket `score`.
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 9.0 {
            Self::Excellent
        } else if score >= 7.5 {
            Self::Good
        } else if score >= 5.0 {
            Self::Fair
        } else if score >= 2.5 {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    /// Inclusive lower bound of the bucket.
    #[must_use]
    pub const fn lower_bound(self) -> f64 {
        match self {
            Self::Excellent => 9.0,
            Self::Good => 7.5,
            Self::Fair => 5.0,
            Self::Poor => 2.5,
            Self::Critical => 0.0,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
