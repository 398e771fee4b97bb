//! Pairing input-document facts with output-document boxes.
//!
//! The two documents share no element identity, so a text element is
//! recognised in the output by its `(tag, class, text snippet)` key. That
//! key is fragile (two identical headings collide, edited text no longer
//! matches) but it is what existing reports are built on. Detectors only
//! see the [`ElementMatcher`] trait, so a stronger key such as a stable
//! element id can replace [`SnippetMatcher`] without touching them.

use crate::box_model::ElementBox;
use crate::relationship::Relationship;

/// Truncate trimmed text to at most `max_chars` characters.
///
/// Both sides of a match go through this function, so the cut point is
/// always identical.
#[must_use]
pub fn truncate_snippet(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

/// Finds the output box that corresponds to an input text element.
pub trait ElementMatcher {
    /// The output text box `relationship` describes, if any.
    fn find_text_box<'a>(
        &self,
        relationship: &Relationship,
        boxes: &'a [ElementBox],
    ) -> Option<&'a ElementBox>;
}

/// Exact match on `(tag, class, text snippet)`; the first box in document
/// order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnippetMatcher;

impl ElementMatcher for SnippetMatcher {
    fn find_text_box<'a>(
        &self,
        relationship: &Relationship,
        boxes: &'a [ElementBox],
    ) -> Option<&'a ElementBox> {
        boxes.iter().find(|b| {
            b.has_text
                && b.tag == relationship.text_tag
                && b.class == relationship.text_class
                && b.text_snippet == relationship.text_snippet
        })
    }
}
