//! Running a batch.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use slidescore_common::warning::clear_warnings;
use slidescore_core::AnalysisConfig;

use crate::discover::SlideUnit;
use crate::error::BatchError;
use crate::load::analyze_unit;
use crate::report::{BatchReport, SlideOutcome, SlideReport};

/// Everything one batch run needs; nothing is kept between runs.
#[derive(Debug, Clone)]
pub struct BatchContext {
    /// Units to score, in reporting order.
    pub units: Vec<SlideUnit>,
    /// Policy shared by every unit.
    pub config: AnalysisConfig,
    /// Worker threads; `None` lets rayon choose.
    pub jobs: Option<usize>,
}

impl BatchContext {
    /// A context for `units` with the default policy.
    #[must_use]
    pub fn new(units: Vec<SlideUnit>) -> Self {
        Self {
            units,
            config: AnalysisConfig::default(),
            jobs: None,
        }
    }

    /// Replace the analysis policy.
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit the number of worker threads.
    #[must_use]
    pub const fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Score every unit.
    ///
    /// Units run in parallel on a dedicated pool. A unit that fails is
    /// recorded with its error and the rest continue. Reports come back in
    /// unit order whatever order the units finished in. `on_slide` sees
    /// each report as it completes, from a worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::ThreadPool`] when the pool cannot be built.
    pub fn run_with<F>(&self, on_slide: F) -> Result<BatchReport, BatchError>
    where
        F: Fn(&SlideReport) + Sync,
    {
        let mut builder = ThreadPoolBuilder::new();
        if let Some(jobs) = self.jobs {
            builder = builder.num_threads(jobs);
        }
        let pool = builder.build()?;
        clear_warnings();

        let config = &self.config;
        let mut results: Vec<(usize, SlideReport)> = pool.install(|| {
            self.units
                .par_iter()
                .enumerate()
                .map(|(idx, unit)| {
                    let outcome = match analyze_unit(unit, config) {
                        Ok(analysis) => {
                            log::debug!("{}: score {:.2}", unit.name, analysis.score);
                            SlideOutcome::Analyzed(analysis)
                        }
                        Err(err) => {
                            log::warn!("{}: {err}", unit.name);
                            SlideOutcome::Failed(err.to_string())
                        }
                    };
                    let report = SlideReport::new(unit, outcome);
                    on_slide(&report);
                    (idx, report)
                })
                .collect()
        });

        results.sort_by_key(|(idx, _)| *idx);
        Ok(BatchReport::from_slides(
            results.into_iter().map(|(_, report)| report).collect(),
        ))
    }

    /// [`run_with`](Self::run_with) without a progress callback.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::ThreadPool`] when the pool cannot be built.
    pub fn run(&self) -> Result<BatchReport, BatchError> {
        self.run_with(|_| {})
    }
}
