//! Per-element values captured from the rendering engine.
//!
//! These are kept exactly as the engine reported them (strings for computed
//! style, numbers for the client rect). Interpretation happens in the
//! analyzer so that the leniency rules live in one place.

use serde::{Deserialize, Serialize};

/// [§ 9 Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
///
/// "getComputedStyle(elt) ... must return a live CSSStyleDeclaration object
/// that contains the resolved values."
///
/// Only the properties the box-model reconstruction needs are captured.
/// Missing properties deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderedStyle {
    /// Resolved `display`, e.g. `"block"` or `"none"`.
    pub display: String,
    /// Resolved `visibility`, e.g. `"visible"` or `"hidden"`.
    pub visibility: String,
    /// Resolved `margin-top`.
    pub margin_top: String,
    /// Resolved `margin-right`.
    pub margin_right: String,
    /// Resolved `margin-bottom`.
    pub margin_bottom: String,
    /// Resolved `margin-left`.
    pub margin_left: String,
    /// Resolved `padding-top`.
    pub padding_top: String,
    /// Resolved `padding-right`.
    pub padding_right: String,
    /// Resolved `padding-bottom`.
    pub padding_bottom: String,
    /// Resolved `padding-left`.
    pub padding_left: String,
    /// Resolved `border-top-width`.
    pub border_top_width: String,
    /// Resolved `border-right-width`.
    pub border_right_width: String,
    /// Resolved `border-bottom-width`.
    pub border_bottom_width: String,
    /// Resolved `border-left-width`.
    pub border_left_width: String,
    /// Resolved `font-size`.
    pub font_size: String,
    /// Resolved `line-height`: `"normal"`, a pixel length or a bare number.
    pub line_height: String,
    /// Resolved `z-index`, `"auto"` when unset.
    pub z_index: String,
    /// Resolved `position`.
    pub position: String,
}

impl RenderedStyle {
    /// [§ 2.5 Box Generation](https://www.w3.org/TR/css-display-3/#box-generation)
    ///
    /// "none: The element and its descendants generate no boxes or text runs."
    #[must_use]
    pub fn is_display_none(&self) -> bool {
        self.display.trim().eq_ignore_ascii_case("none")
    }

    /// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    ///
    /// "hidden: The generated box is invisible (fully transparent, nothing is
    /// drawn), but still affects layout."
    #[must_use]
    pub fn is_visibility_hidden(&self) -> bool {
        self.visibility.trim().eq_ignore_ascii_case("hidden")
    }

    /// Whether the element takes part in the analysis at all.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        !self.is_display_none() && !self.is_visibility_hidden()
    }
}

/// The authored inline `left`/`top`/`width`/`height` (`el.style.*`).
///
/// Slide generators position every element absolutely through the `style`
/// attribute; these values are the untransformed ground truth, unlike the
/// client rect which already has transforms and scaling applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineGeometry {
    /// Inline `left`, if authored.
    pub left: Option<String>,
    /// Inline `top`, if authored.
    pub top: Option<String>,
    /// Inline `width`, if authored.
    pub width: Option<String>,
    /// Inline `height`, if authored.
    pub height: Option<String>,
}

/// [§ 6.1 getBoundingClientRect()](https://drafts.csswg.org/cssom-view/#dom-element-getboundingclientrect)
///
/// The rendered border-box rectangle of the element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientRect {
    /// Horizontal position of the top-left corner.
    pub x: f64,
    /// Vertical position of the top-left corner.
    pub y: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl ClientRect {
    /// True when either rendered dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}
