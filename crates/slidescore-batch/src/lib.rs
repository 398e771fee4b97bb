//! Batch scoring of slide folders.
//!
//! # Scope
//!
//! This crate provides:
//! - **Discovery** - one unit per sub-directory holding both snapshots
//! - **Loading** - render snapshots from disk
//! - **Parallel scoring** - every unit on a rayon pool, failures isolated
//! - **Reporting** - per-slide lines, grade distribution and error totals
//!
//! The analysis itself lives in `slidescore-core` and never touches the
//! file system; this crate is the only place that does.

pub mod context;
pub mod discover;
pub mod error;
pub mod load;
pub mod report;

pub use context::BatchContext;
pub use discover::{SlideUnit, UnitFileNames, find_slide_units};
pub use error::{BatchError, LoadError, UnitError};
pub use load::{analyze_unit, load_snapshot};
pub use report::{BatchReport, ErrorTotals, GradeSummary, SlideOutcome, SlideReport};
