//! Analysis policy.
//!
//! Thresholds and tag sets are tunable policy rather than physical
//! constants. The defaults reproduce the behavior slide reports have always
//! been scored with; a JSON file can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fixed viewport every output slide is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Every knob the detectors read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Viewport rectangle for viewport-overflow checks.
    pub viewport: Viewport,
    /// Minimum overlap (percent of the smaller outer box) to report.
    pub overlap_threshold_percent: f64,
    /// Container overflow must exceed this many pixels on some edge.
    pub container_overflow_epsilon_px: f64,
    /// Viewport overflow must exceed this many pixels on some edge.
    pub viewport_overflow_epsilon_px: f64,
    /// Tags treated as text elements.
    pub text_tags: Vec<String>,
    /// Tag of elements that can act as containers.
    pub container_tag: String,
    /// Class of the element whose children are the slide's boxes.
    pub content_root_class: String,
    /// Length (in characters) of text snippets used for matching.
    pub snippet_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            overlap_threshold_percent: 5.0,
            container_overflow_epsilon_px: 1.0,
            viewport_overflow_epsilon_px: 0.0,
            text_tags: ["h1", "h2", "h3", "h4", "h5", "h6", "p"]
                .into_iter()
                .map(String::from)
                .collect(),
            container_tag: "div".to_string(),
            content_root_class: "content-wrapper".to_string(),
            snippet_chars: 80,
        }
    }
}

impl AnalysisConfig {
    /// Parse a (possibly partial) configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the detectors cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_non_negative = [
            ("overlap_threshold_percent", self.overlap_threshold_percent),
            (
                "container_overflow_epsilon_px",
                self.container_overflow_epsilon_px,
            ),
            (
                "viewport_overflow_epsilon_px",
                self.viewport_overflow_epsilon_px,
            ),
        ];
        for (field, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        let positive = [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }
        if self.snippet_chars == 0 {
            return Err(ConfigError::Invalid {
                field: "snippet_chars",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Whether `tag` is one of the text tags.
    #[must_use]
    pub fn is_text_tag(&self, tag: &str) -> bool {
        self.text_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
