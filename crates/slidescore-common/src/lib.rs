//! Common utilities for the slidescore analyzer.
//!
//! This crate provides shared infrastructure used by all analyzer components:
//! - **Warning System** - deduplicated warnings routed through the `log` facade

pub mod warning;
