//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use slidescore_core::box_model::{ElementBox, ElementMetrics, LineHeight};
use slidescore_dom::DomTree;

fn px(value: f64) -> String {
    format!("{value}px")
}

/// An absolutely positioned text element with authored geometry.
pub fn text_node(tag: &str, class: &str, text: &str, geom: [f64; 4], z: i32) -> Value {
    let [left, top, width, height] = geom;
    json!({
        "tag": tag,
        "attrs": { "class": class },
        "style": { "zIndex": z.to_string(), "position": "absolute", "lineHeight": px(height) },
        "inline": { "left": px(left), "top": px(top), "width": px(width), "height": px(height) },
        "rect": { "x": left, "y": top, "width": width, "height": height },
        "children": [ { "text": text } ],
    })
}

/// An absolutely positioned `div` with uniform padding.
pub fn container_node(class: &str, geom: [f64; 4], z: i32, padding: f64) -> Value {
    let [left, top, width, height] = geom;
    json!({
        "tag": "div",
        "attrs": { "class": class },
        "style": {
            "zIndex": z.to_string(),
            "position": "absolute",
            "paddingTop": px(padding),
            "paddingRight": px(padding),
            "paddingBottom": px(padding),
            "paddingLeft": px(padding),
        },
        "inline": { "left": px(left), "top": px(top), "width": px(width), "height": px(height) },
        "rect": { "x": left, "y": top, "width": width, "height": height },
    })
}

/// A plain element wrapping `children`, for nesting input documents.
pub fn nested(tag: &str, class: &str, children: Vec<Value>) -> Value {
    json!({
        "tag": tag,
        "attrs": { "class": class },
        "rect": { "x": 0, "y": 0, "width": 100, "height": 100 },
        "children": children,
    })
}

/// A paragraph with only text, for input documents.
pub fn paragraph(class: &str, text: &str) -> Value {
    json!({
        "tag": "p",
        "attrs": { "class": class },
        "rect": { "x": 0, "y": 0, "width": 100, "height": 20 },
        "children": [ { "text": text } ],
    })
}

/// `html > body > div.content-wrapper > children`.
pub fn slide(children: Vec<Value>) -> DomTree {
    let snapshot = json!({
        "root": {
            "tag": "html",
            "children": [ {
                "tag": "body",
                "children": [ {
                    "tag": "div",
                    "attrs": { "class": "content-wrapper" },
                    "rect": { "x": 0, "y": 0, "width": 1920, "height": 1080 },
                    "children": children,
                } ],
            } ],
        }
    });
    DomTree::from_json_value(snapshot).expect("fixture snapshot is well formed")
}

/// An element box built straight from metrics; outer box equals border box.
pub fn element_box(tag: &str, class: &str, text: &str, geom: [f64; 4], z: i32) -> ElementBox {
    let [left, top, width, height] = geom;
    ElementBox::from_metrics(&ElementMetrics {
        tag: tag.to_string(),
        class: class.to_string(),
        text_snippet: text.to_string(),
        has_text: !text.is_empty(),
        font_size: 16.0,
        line_height: LineHeight::Unknown,
        z_index: z,
        inline_left: Some(left),
        inline_top: Some(top),
        inline_width: Some(width),
        inline_height: Some(height),
        rendered_width: width,
        rendered_height: height,
        ..ElementMetrics::default()
    })
}

/// Approximate float comparison for percentages.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
