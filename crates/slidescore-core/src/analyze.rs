//! One slide pair, end to end.

use slidescore_dom::DomTree;

use crate::box_model::{build_element_boxes, text_boxes};
use crate::config::AnalysisConfig;
use crate::detect::detect_all;
use crate::error::{AnalysisError, DocumentRole};
use crate::finding::DetectionResult;
use crate::matching::{ElementMatcher, SnippetMatcher};
use crate::relationship::extract_relationships;
use crate::score::score;

/// Outcome of analysing one `(input, output)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideAnalysis {
    /// All findings.
    pub result: DetectionResult,
    /// Score in `[0, 10]`.
    pub score: f64,
    /// Number of element boxes built from the output.
    pub element_count: usize,
    /// Number of those that are text boxes.
    pub text_element_count: usize,
}

/// Analyse a pair with the default snippet matcher.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyDocument`] when either snapshot holds no
/// document element.
pub fn analyze_pair(
    input: &DomTree,
    output: &DomTree,
    config: &AnalysisConfig,
) -> Result<SlideAnalysis, AnalysisError> {
    analyze_pair_with(input, output, config, &SnippetMatcher)
}

/// Analyse a pair, pairing input text elements with output boxes through
/// `matcher`.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyDocument`] when either snapshot holds no
/// document element.
pub fn analyze_pair_with(
    input: &DomTree,
    output: &DomTree,
    config: &AnalysisConfig,
    matcher: &dyn ElementMatcher,
) -> Result<SlideAnalysis, AnalysisError> {
    if input.document_element().is_none() {
        return Err(AnalysisError::EmptyDocument {
            role: DocumentRole::Input,
        });
    }
    if output.document_element().is_none() {
        return Err(AnalysisError::EmptyDocument {
            role: DocumentRole::Output,
        });
    }

    let relationships = extract_relationships(input, config);
    let boxes = build_element_boxes(output, config);
    let text_element_count = text_boxes(&boxes, config).len();

    let result = detect_all(&relationships, &boxes, matcher, config);
    let score = score(&result);

    Ok(SlideAnalysis {
        result,
        score,
        element_count: boxes.len(),
        text_element_count,
    })
}
