//! Text-to-container relationships of the input document.
//!
//! The input template states which containers each text element is meant
//! to sit in. For every visible text element the chain of named `div`
//! ancestors is recorded, nearest first, up to (not including) `body`. The
//! container overflow detector later looks those classes up in the output.

use serde::Serialize;
use slidescore_dom::DomTree;

use crate::config::AnalysisConfig;
use crate::matching::truncate_snippet;

/// A text element of the input document and its named container chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    /// Lowercase tag of the text element.
    pub text_tag: String,
    /// Raw class attribute of the text element.
    pub text_class: String,
    /// Trimmed, truncated text content.
    pub text_snippet: String,
    /// Raw class attributes of `div` ancestors with a non-empty class,
    /// nearest ancestor first. Never empty.
    pub container_classes: Vec<String>,
}

/// Extract relationships from the input document, in document order.
///
/// Text elements that are hidden, have only whitespace, or have no named
/// `div` ancestor produce nothing.
#[must_use]
pub fn extract_relationships(tree: &DomTree, config: &AnalysisConfig) -> Vec<Relationship> {
    let mut relationships = Vec::new();

    for (id, element) in tree.elements() {
        if !config.is_text_tag(&element.tag_name) || !element.style.is_rendered() {
            continue;
        }
        let text = tree.text_content(id);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }

        let container_classes: Vec<String> = tree
            .ancestors(id)
            .map_while(|ancestor| tree.as_element(ancestor))
            .take_while(|ancestor| !ancestor.is_tag("body"))
            .filter(|ancestor| ancestor.is_tag(&config.container_tag))
            .map(|ancestor| ancestor.class_name())
            .filter(|class| !class.is_empty())
            .map(str::to_string)
            .collect();

        if container_classes.is_empty() {
            continue;
        }

        relationships.push(Relationship {
            text_tag: element.tag_name.to_ascii_lowercase(),
            text_class: element.class_name().to_string(),
            text_snippet: truncate_snippet(trimmed, config.snippet_chars),
            container_classes,
        });
    }

    log::debug!("extracted {} relationships", relationships.len());
    relationships
}
