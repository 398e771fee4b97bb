//! Per-slide and per-batch reports.
//!
//! The JSON shape matches what earlier batch runs wrote, so dashboards
//! reading those files keep working:
//!
//! ```text
//! { "total_slides": n, "average_score": x,
//!   "slides": [ { "name", "input_file", "output_file", "score", ... } ],
//!   "summary": { "excellent", "good", "fair", "poor", "critical" } }
//! ```

use std::cmp::Ordering;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use slidescore_core::{FindingCategory, QualityGrade, SlideAnalysis};

use crate::discover::SlideUnit;

/// How one unit ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideOutcome {
    /// Both snapshots were analysed.
    Analyzed(SlideAnalysis),
    /// The unit could not be analysed; holds the error message.
    Failed(String),
}

/// Report line for one slide unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideReport {
    /// Unit name.
    pub name: String,
    /// Input snapshot path, as displayed.
    pub input_file: String,
    /// Output snapshot path, as displayed.
    pub output_file: String,
    /// Result or failure.
    pub outcome: SlideOutcome,
}

impl SlideReport {
    /// A report for `unit` with `outcome`.
    #[must_use]
    pub fn new(unit: &SlideUnit, outcome: SlideOutcome) -> Self {
        Self {
            name: unit.name.clone(),
            input_file: unit.input_path.display().to_string(),
            output_file: unit.output_path.display().to_string(),
            outcome,
        }
    }

    /// Score; failures score 0.
    #[must_use]
    pub const fn score(&self) -> f64 {
        match &self.outcome {
            SlideOutcome::Analyzed(analysis) => analysis.score,
            SlideOutcome::Failed(_) => 0.0,
        }
    }

    /// The analysis, when the unit succeeded.
    #[must_use]
    pub const fn analysis(&self) -> Option<&SlideAnalysis> {
        match &self.outcome {
            SlideOutcome::Analyzed(analysis) => Some(analysis),
            SlideOutcome::Failed(_) => None,
        }
    }

    /// The failure message, when the unit failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            SlideOutcome::Analyzed(_) => None,
            SlideOutcome::Failed(message) => Some(message),
        }
    }

    /// Findings in `category`; 0 for failures.
    #[must_use]
    pub fn error_count(&self, category: FindingCategory) -> usize {
        self.analysis().map_or(0, |a| a.result.count(category))
    }

    /// Grade of a successful unit.
    #[must_use]
    pub fn grade(&self) -> Option<QualityGrade> {
        self.analysis().map(|a| QualityGrade::of(a.score))
    }
}

impl Serialize for SlideReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.outcome {
            SlideOutcome::Analyzed(analysis) => {
                let result = &analysis.result;
                let percentages: Vec<f64> = result.findings().map(|f| f.percent()).collect();
                let mut s = serializer.serialize_struct("SlideReport", 10)?;
                s.serialize_field("name", &self.name)?;
                s.serialize_field("input_file", &self.input_file)?;
                s.serialize_field("output_file", &self.output_file)?;
                s.serialize_field("score", &analysis.score)?;
                s.serialize_field("total_errors", &result.total())?;
                s.serialize_field("overlap_errors", &result.overlap.len())?;
                s.serialize_field("container_overflow_errors", &result.container_overflow.len())?;
                s.serialize_field("viewport_overflow_errors", &result.viewport_overflow.len())?;
                s.serialize_field("error_percentages", &percentages)?;
                s.serialize_field("details", result)?;
                s.end()
            }
            SlideOutcome::Failed(message) => {
                let mut s = serializer.serialize_struct("SlideReport", 6)?;
                s.serialize_field("name", &self.name)?;
                s.serialize_field("input_file", &self.input_file)?;
                s.serialize_field("output_file", &self.output_file)?;
                s.serialize_field("score", &0.0)?;
                s.serialize_field("total_errors", &-1)?;
                s.serialize_field("error", message)?;
                s.end()
            }
        }
    }
}

/// Number of successful slides per grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradeSummary {
    /// Score 9.0 and above.
    pub excellent: usize,
    /// Score 7.5 up to 9.0.
    pub good: usize,
    /// Score 5.0 up to 7.5.
    pub fair: usize,
    /// Score 2.5 up to 5.0.
    pub poor: usize,
    /// Score below 2.5.
    pub critical: usize,
}

impl GradeSummary {
    /// Count one slide of `grade`.
    pub const fn record(&mut self, grade: QualityGrade) {
        match grade {
            QualityGrade::Excellent => self.excellent += 1,
            QualityGrade::Good => self.good += 1,
            QualityGrade::Fair => self.fair += 1,
            QualityGrade::Poor => self.poor += 1,
            QualityGrade::Critical => self.critical += 1,
        }
    }

    /// Slides counted under `grade`.
    #[must_use]
    pub const fn count(&self, grade: QualityGrade) -> usize {
        match grade {
            QualityGrade::Excellent => self.excellent,
            QualityGrade::Good => self.good,
            QualityGrade::Fair => self.fair,
            QualityGrade::Poor => self.poor,
            QualityGrade::Critical => self.critical,
        }
    }
}

/// Findings summed over every successful slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorTotals {
    /// Overlap findings.
    pub overlap: usize,
    /// Container overflow findings.
    pub container_overflow: usize,
    /// Viewport overflow findings.
    pub viewport_overflow: usize,
}

impl ErrorTotals {
    /// All findings.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.overlap + self.container_overflow + self.viewport_overflow
    }
}

/// Aggregate of a whole batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Number of units run, failures included.
    pub total_slides: usize,
    /// Mean score over slides scoring above zero.
    pub average_score: f64,
    /// One line per unit, in unit order.
    pub slides: Vec<SlideReport>,
    /// Grade distribution of successful slides.
    pub summary: GradeSummary,
}

impl BatchReport {
    /// Aggregate `slides`, keeping their order.
    ///
    /// Failed units and slides scoring exactly zero stay out of the
    /// average; failed units also stay out of the grade summary.
    #[must_use]
    pub fn from_slides(slides: Vec<SlideReport>) -> Self {
        let mut summary = GradeSummary::default();
        for grade in slides.iter().filter_map(SlideReport::grade) {
            summary.record(grade);
        }

        let scored: Vec<f64> = slides
            .iter()
            .map(SlideReport::score)
            .filter(|s| *s > 0.0)
            .collect();
        let average_score = if scored.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = scored.len() as f64;
            scored.iter().sum::<f64>() / count
        };

        Self {
            total_slides: slides.len(),
            average_score,
            slides,
            summary,
        }
    }

    /// Findings summed over every slide.
    #[must_use]
    pub fn error_totals(&self) -> ErrorTotals {
        self.slides.iter().fold(ErrorTotals::default(), |acc, s| ErrorTotals {
            overlap: acc.overlap + s.error_count(FindingCategory::Overlap),
            container_overflow: acc.container_overflow
                + s.error_count(FindingCategory::ContainerOverflow),
            viewport_overflow: acc.viewport_overflow
                + s.error_count(FindingCategory::ViewportOverflow),
        })
    }

    /// Units that failed.
    pub fn failures(&self) -> impl Iterator<Item = &SlideReport> {
        self.slides.iter().filter(|s| s.error().is_some())
    }

    /// Up to `n` slides, best score first. Ties keep unit order.
    #[must_use]
    pub fn best(&self, n: usize) -> Vec<&SlideReport> {
        let mut ranked: Vec<&SlideReport> = self.slides.iter().collect();
        ranked.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
    }

    /// Up to `n` slides, worst score first. Ties keep unit order.
    #[must_use]
    pub fn worst(&self, n: usize) -> Vec<&SlideReport> {
        let mut ranked: Vec<&SlideReport> = self.slides.iter().collect();
        ranked.sort_by(|a, b| a.score().partial_cmp(&b.score()).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
    }

    /// Whether the batch meets `threshold` on average.
    #[must_use]
    pub fn passes(&self, threshold: f64) -> bool {
        !self.slides.is_empty() && self.average_score >= threshold
    }
}
