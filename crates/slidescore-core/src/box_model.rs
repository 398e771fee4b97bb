//! Box model reconstruction for the output document.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! Each direct child of the slide's content root becomes an [`ElementBox`]
//! with three nested rectangles:
//!
//! ```text
//! ┌───────────────────────────────────┐  outer box  (border box + margin,
//! │  ┌─────────────────────────────┐  │              + top half of extra leading)
//! │  │  ┌───────────────────────┐  │  │  border box (authored inline geometry)
//! │  │  │        CONTENT        │  │  │  content box (border box - border - padding)
//! │  │  └───────────────────────┘  │  │
//! │  └─────────────────────────────┘  │
//! └───────────────────────────────────┘
//! ```
//!
//! Reconstruction runs in two phases. [`capture_content_metrics`] reads
//! everything the rendering engine reported for each element once, then
//! [`ElementBox::from_metrics`] derives the boxes with plain arithmetic.
//! Nothing goes back to the document after the capture.

use slidescore_dom::{DomTree, ElementData, NodeId};

use crate::config::AnalysisConfig;
use crate::geometry::{EdgeSizes, Rect};
use crate::matching::truncate_snippet;
use crate::values::{DEFAULT_FONT_SIZE_PX, length_or, length_or_zero, parse_integer, parse_number};

/// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#leading)
///
/// "normal: Tells user agents to set the used value to a 'reasonable' value
/// based on the font of the element. ... We recommend a used value for
/// 'normal' between 1.0 to 1.2."
pub const NORMAL_LINE_HEIGHT_FACTOR: f64 = 1.2;

/// A resolved `line-height` as reported by the engine.
///
/// [§ 10.8.1](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LineHeight {
    /// `normal`
    #[default]
    Normal,
    /// `<length>`, always reported in pixels.
    Px(f64),
    /// `<number>`: "The used value of the property is this number multiplied
    /// by the element's font size."
    Number(f64),
    /// Anything else; resolves to the rendered height.
    Unknown,
}

impl LineHeight {
    /// Classify a resolved `line-height` string.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let v = value.trim();
        if v == "normal" {
            return Self::Normal;
        }
        match parse_number(v) {
            Some(px) if v.ends_with("px") => Self::Px(px),
            Some(_) if v.ends_with("px") => Self::Unknown,
            Some(number) => Self::Number(number),
            None => Self::Unknown,
        }
    }

    /// Used line height in pixels.
    #[must_use]
    pub fn resolve(self, font_size: f64, rendered_height: f64) -> f64 {
        match self {
            Self::Normal => font_size * NORMAL_LINE_HEIGHT_FACTOR,
            Self::Px(px) => px,
            Self::Number(n) => n * font_size,
            Self::Unknown => rendered_height,
        }
    }
}

/// Everything captured from the engine for one element.
///
/// Numbers here are already leniency-parsed; `None` means the inline value
/// was absent, unparsable or zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementMetrics {
    /// Lowercase tag name.
    pub tag: String,
    /// Raw class attribute.
    pub class: String,
    /// Trimmed text content, truncated for matching.
    pub text_snippet: String,
    /// Whether the trimmed text content is non-empty.
    pub has_text: bool,
    /// Resolved margins.
    pub margin: EdgeSizes,
    /// Resolved padding.
    pub padding: EdgeSizes,
    /// Resolved border widths.
    pub border: EdgeSizes,
    /// Resolved font size in pixels.
    pub font_size: f64,
    /// Resolved line height.
    pub line_height: LineHeight,
    /// Parsed z-index (`auto` is 0).
    pub z_index: i32,
    /// Resolved `position`.
    pub position: String,
    /// Authored inline `left`.
    pub inline_left: Option<f64>,
    /// Authored inline `top`.
    pub inline_top: Option<f64>,
    /// Authored inline `width`.
    pub inline_width: Option<f64>,
    /// Authored inline `height`.
    pub inline_height: Option<f64>,
    /// Rendered client-rect width.
    pub rendered_width: f64,
    /// Rendered client-rect height.
    pub rendered_height: f64,
}

impl ElementMetrics {
    /// Read one element's values from the snapshot.
    #[must_use]
    pub fn capture(tree: &DomTree, id: NodeId, data: &ElementData, snippet_chars: usize) -> Self {
        let style = &data.style;
        let text = tree.text_content(id);
        let trimmed = text.trim();
        let inline = |value: Option<&String>| {
            value
                .and_then(|v| parse_number(v))
                .filter(|v| *v != 0.0)
        };

        Self {
            tag: data.tag_name.to_ascii_lowercase(),
            class: data.class_name().to_string(),
            text_snippet: truncate_snippet(trimmed, snippet_chars),
            has_text: !trimmed.is_empty(),
            margin: EdgeSizes::new(
                length_or_zero(&style.margin_top, "margin-top"),
                length_or_zero(&style.margin_right, "margin-right"),
                length_or_zero(&style.margin_bottom, "margin-bottom"),
                length_or_zero(&style.margin_left, "margin-left"),
            ),
            padding: EdgeSizes::new(
                length_or_zero(&style.padding_top, "padding-top"),
                length_or_zero(&style.padding_right, "padding-right"),
                length_or_zero(&style.padding_bottom, "padding-bottom"),
                length_or_zero(&style.padding_left, "padding-left"),
            ),
            border: EdgeSizes::new(
                length_or_zero(&style.border_top_width, "border-top-width"),
                length_or_zero(&style.border_right_width, "border-right-width"),
                length_or_zero(&style.border_bottom_width, "border-bottom-width"),
                length_or_zero(&style.border_left_width, "border-left-width"),
            ),
            font_size: length_or(&style.font_size, DEFAULT_FONT_SIZE_PX, "font-size"),
            line_height: LineHeight::parse(&style.line_height),
            z_index: parse_integer(&style.z_index).unwrap_or(0),
            position: style.position.clone(),
            inline_left: inline(data.inline.left.as_ref()),
            inline_top: inline(data.inline.top.as_ref()),
            inline_width: inline(data.inline.width.as_ref()),
            inline_height: inline(data.inline.height.as_ref()),
            rendered_width: data.rect.width,
            rendered_height: data.rect.height,
        }
    }
}

/// A normalized element box of the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBox {
    /// Lowercase tag name.
    pub tag: String,
    /// Raw class attribute, possibly empty.
    pub class: String,
    /// Trimmed text content, truncated for matching.
    pub text_snippet: String,
    /// Whether the element has any non-whitespace text.
    pub has_text: bool,
    /// Authored geometry; the ground-truth box.
    pub border_box: Rect,
    /// Border box minus border and padding.
    pub content_box: Rect,
    /// Border box plus margin and the top half of any extra leading.
    pub outer_box: Rect,
    /// Parsed z-index.
    pub z_index: i32,
    /// Resolved `position`, informational.
    pub position: String,
    /// Margin widths.
    pub margin: EdgeSizes,
    /// Padding widths.
    pub padding: EdgeSizes,
    /// Border widths.
    pub border: EdgeSizes,
}

impl ElementBox {
    /// Derive the three boxes from captured metrics.
    ///
    /// The border box comes from the authored inline geometry, not the
    /// rendered rect, because the rendered rect already includes slide
    /// scaling transforms. Width and height fall back to the rendered rect
    /// when not authored.
    ///
    /// [§ 10.8.1](https://www.w3.org/TR/CSS2/visudet.html#leading): "the
    /// difference between line-height and the content height is the
    /// leading; half the leading is added above". When the used line height
    /// exceeds the rendered height, the outer box is extended upward by that
    /// half, while its bottom stays at the margin edge.
    ///
    /// Older reports shifted the whole outer box up by the half leading
    /// instead. Their bottom edges sit higher by that amount, which shows up
    /// as smaller bottom viewport overflow and slightly different overlaps.
    #[must_use]
    pub fn from_metrics(metrics: &ElementMetrics) -> Self {
        let border_box = Rect::new(
            metrics.inline_left.unwrap_or(0.0),
            metrics.inline_top.unwrap_or(0.0),
            metrics.inline_width.unwrap_or(metrics.rendered_width),
            metrics.inline_height.unwrap_or(metrics.rendered_height),
        );
        let content_box = border_box.shrink(metrics.border + metrics.padding);

        let line_height = metrics
            .line_height
            .resolve(metrics.font_size, metrics.rendered_height);
        let extra_leading = (line_height - metrics.rendered_height).max(0.0);
        let leading_top = extra_leading / 2.0;
        let outer_box = border_box.expand(metrics.margin + EdgeSizes::new(leading_top, 0.0, 0.0, 0.0));

        Self {
            tag: metrics.tag.clone(),
            class: metrics.class.clone(),
            text_snippet: metrics.text_snippet.clone(),
            has_text: metrics.has_text,
            border_box,
            content_box,
            outer_box,
            z_index: metrics.z_index,
            position: metrics.position.clone(),
            margin: metrics.margin,
            padding: metrics.padding,
            border: metrics.border,
        }
    }
}

/// Capture metrics for every rendered child of the content root.
///
/// Children with `display: none`, `visibility: hidden`, or an empty client
/// rect are skipped. A document without a content root yields nothing.
#[must_use]
pub fn capture_content_metrics(tree: &DomTree, config: &AnalysisConfig) -> Vec<ElementMetrics> {
    let Some(root) = tree.first_with_class(&config.content_root_class) else {
        log::warn!(
            "no element with class '{}' in output document; nothing to measure",
            config.content_root_class
        );
        return Vec::new();
    };

    tree.element_children(root)
        .filter(|(_, data)| data.style.is_rendered() && !data.rect.is_empty())
        .map(|(id, data)| ElementMetrics::capture(tree, id, data, config.snippet_chars))
        .collect()
}

/// Build the element boxes of an output document, in document order.
#[must_use]
pub fn build_element_boxes(tree: &DomTree, config: &AnalysisConfig) -> Vec<ElementBox> {
    capture_content_metrics(tree, config)
        .iter()
        .map(ElementBox::from_metrics)
        .collect()
}

/// The text boxes among `boxes`: a text tag and non-empty text.
#[must_use]
pub fn text_boxes<'a>(boxes: &'a [ElementBox], config: &AnalysisConfig) -> Vec<&'a ElementBox> {
    boxes
        .iter()
        .filter(|b| b.has_text && config.is_text_tag(&b.tag))
        .collect()
}
