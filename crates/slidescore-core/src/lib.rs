//! Layout defect detection and scoring for rendered slides.
//!
//! # Scope
//!
//! This crate implements:
//! - **Box Model Builder** ([CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Border, content and outer boxes from authored inline geometry
//!   - Extra-leading correction of the outer box
//!   - Lenient parsing of resolved style values
//!
//! - **Relationship Extractor**
//!   - Named `div` ancestors of every visible text element of the input
//!
//! - **Detectors**
//!   - Pairwise text overlap
//!   - Text leaving its intended container
//!   - Text leaving the viewport
//!
//! - **Scorer**
//!   - Penalty table per category
//!   - Quality grades
//!
//! # Data flow
//!
//! ```text
//! input DomTree ──> extract_relationships ──┐
//!                                           ├──> detect_all ──> DetectionResult ──> score
//! output DomTree ──> build_element_boxes ───┘
//! ```
//!
//! Everything here is pure: no I/O and no shared state, so pairs can be
//! analysed in parallel freely.

pub mod analyze;
pub mod box_model;
pub mod config;
pub mod detect;
pub mod error;
pub mod finding;
pub mod geometry;
pub mod matching;
pub mod relationship;
pub mod score;
pub mod values;

pub use analyze::{SlideAnalysis, analyze_pair, analyze_pair_with};
pub use box_model::{ElementBox, build_element_boxes};
pub use config::{AnalysisConfig, Viewport};
pub use error::{AnalysisError, ConfigError, DocumentRole};
pub use finding::{DetectionResult, Direction, Finding, FindingCategory};
pub use geometry::{EdgeSizes, Rect};
pub use matching::{ElementMatcher, SnippetMatcher};
pub use relationship::{Relationship, extract_relationships};
pub use score::{QualityGrade, penalty_for, score};
