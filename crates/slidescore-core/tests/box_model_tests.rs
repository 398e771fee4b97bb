//! Tests for box model reconstruction.

mod common;

use common::{assert_close, slide, text_node};
use serde_json::json;
use slidescore_core::box_model::{LineHeight, build_element_boxes, text_boxes};
use slidescore_core::{AnalysisConfig, Rect};
use slidescore_dom::DomTree;

fn single_box(node: serde_json::Value) -> slidescore_core::ElementBox {
    let tree = slide(vec![node]);
    let mut boxes = build_element_boxes(&tree, &AnalysisConfig::default());
    assert_eq!(boxes.len(), 1);
    boxes.remove(0)
}

#[test]
fn test_boxes_nest_through_border_padding_and_margin() {
    let b = single_box(json!({
        "tag": "p",
        "style": {
            "marginTop": "10px", "marginRight": "10px", "marginBottom": "10px", "marginLeft": "10px",
            "paddingTop": "5px", "paddingRight": "5px", "paddingBottom": "5px", "paddingLeft": "5px",
            "borderTopWidth": "2px", "borderRightWidth": "2px",
            "borderBottomWidth": "2px", "borderLeftWidth": "2px",
            "lineHeight": "40px",
        },
        "inline": { "left": "100px", "top": "50px", "width": "300px", "height": "40px" },
        "rect": { "x": 100, "y": 50, "width": 300, "height": 40 },
        "children": [ { "text": "Hello" } ],
    }));

    assert_eq!(b.border_box, Rect::new(100.0, 50.0, 300.0, 40.0));
    assert_eq!(b.content_box, Rect::new(107.0, 57.0, 286.0, 26.0));
    assert_eq!(b.outer_box, Rect::new(90.0, 40.0, 320.0, 60.0));
    assert!(b.border_box.contains(&b.content_box));
    assert!(b.outer_box.contains(&b.border_box));
}

#[test]
fn test_normal_line_height_extends_outer_box_upward_only() {
    // normal = 40 * 1.2 = 48, rendered 40: extra leading 8, top half 4.
    let b = single_box(json!({
        "tag": "h1",
        "style": { "fontSize": "40px", "lineHeight": "normal" },
        "inline": { "left": "0px", "top": "50px", "width": "500px", "height": "40px" },
        "rect": { "x": 0, "y": 50, "width": 500, "height": 40 },
        "children": [ { "text": "Title" } ],
    }));

    assert_close(b.outer_box.top, 46.0);
    assert_close(b.outer_box.bottom(), 90.0);
    assert_close(b.border_box.top, 50.0);
}

#[test]
fn test_unitless_and_pixel_line_heights() {
    let unitless = single_box(json!({
        "tag": "p",
        "style": { "fontSize": "20px", "lineHeight": "1.5" },
        "inline": { "top": "100px", "width": "100px", "height": "20px" },
        "rect": { "x": 0, "y": 100, "width": 100, "height": 20 },
        "children": [ { "text": "x" } ],
    }));
    assert_close(unitless.outer_box.top, 95.0);

    let pixels = single_box(json!({
        "tag": "p",
        "style": { "lineHeight": "60px" },
        "inline": { "top": "100px", "width": "100px", "height": "40px" },
        "rect": { "x": 0, "y": 100, "width": 100, "height": 40 },
        "children": [ { "text": "x" } ],
    }));
    assert_close(pixels.outer_box.top, 90.0);
}

#[test]
fn test_line_height_smaller_than_rendered_height_adds_nothing() {
    let b = single_box(json!({
        "tag": "p",
        "style": { "lineHeight": "10px" },
        "inline": { "top": "100px", "width": "100px", "height": "40px" },
        "rect": { "x": 0, "y": 100, "width": 100, "height": 40 },
        "children": [ { "text": "x" } ],
    }));
    assert_eq!(b.outer_box, b.border_box);
}

#[test]
fn test_line_height_classification() {
    assert_eq!(LineHeight::parse("normal"), LineHeight::Normal);
    assert_eq!(LineHeight::parse("24px"), LineHeight::Px(24.0));
    assert_eq!(LineHeight::parse("1.25"), LineHeight::Number(1.25));
    assert_eq!(LineHeight::parse("inherit"), LineHeight::Unknown);
    assert_close(LineHeight::Unknown.resolve(16.0, 33.0), 33.0);
    assert_close(LineHeight::Normal.resolve(10.0, 0.0), 12.0);
}

#[test]
fn test_missing_inline_size_falls_back_to_rendered_rect() {
    let b = single_box(json!({
        "tag": "p",
        "style": { "lineHeight": "20px" },
        "inline": { "left": "30px", "top": "40px", "width": "0px" },
        "rect": { "x": 60, "y": 80, "width": 250, "height": 20 },
        "children": [ { "text": "scaled" } ],
    }));
    // Position never comes from the transformed rect.
    assert_eq!(b.border_box, Rect::new(30.0, 40.0, 250.0, 20.0));
}

#[test]
fn test_hidden_and_empty_elements_produce_no_box() {
    let tree = slide(vec![
        json!({ "tag": "p", "style": { "display": "none" },
                "rect": { "x": 0, "y": 0, "width": 10, "height": 10 },
                "children": [ { "text": "a" } ] }),
        json!({ "tag": "p", "style": { "visibility": "hidden" },
                "rect": { "x": 0, "y": 0, "width": 10, "height": 10 },
                "children": [ { "text": "b" } ] }),
        json!({ "tag": "p", "rect": { "x": 0, "y": 0, "width": 0, "height": 10 },
                "children": [ { "text": "c" } ] }),
        json!({ "tag": "p", "rect": { "x": 0, "y": 0, "width": 10, "height": 0 },
                "children": [ { "text": "d" } ] }),
        text_node("p", "kept", "e", [0.0, 0.0, 10.0, 10.0], 0),
    ]);
    let boxes = build_element_boxes(&tree, &AnalysisConfig::default());
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].class, "kept");
}

#[test]
fn test_only_direct_children_of_content_root_are_measured() {
    let tree = slide(vec![json!({
        "tag": "div",
        "attrs": { "class": "card" },
        "rect": { "x": 0, "y": 0, "width": 500, "height": 500 },
        "children": [ text_node("p", "inner", "deep", [0.0, 0.0, 10.0, 10.0], 0) ],
    })]);
    let boxes = build_element_boxes(&tree, &AnalysisConfig::default());
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].tag, "div");
    assert_eq!(boxes[0].text_snippet, "deep");
}

#[test]
fn test_document_without_content_root_yields_no_boxes() {
    let tree = DomTree::from_json_str(
        r#"{ "root": { "tag": "html", "children": [ { "tag": "body", "children": [
            { "tag": "p", "rect": { "x": 0, "y": 0, "width": 10, "height": 10 },
              "children": [ { "text": "loose" } ] } ] } ] } }"#,
    )
    .unwrap();
    assert!(build_element_boxes(&tree, &AnalysisConfig::default()).is_empty());
}

#[test]
fn test_unparsable_lengths_count_as_zero() {
    let b = single_box(json!({
        "tag": "p",
        "style": {
            "marginTop": "calc(1px + 2px)",
            "paddingLeft": "garbage",
            "zIndex": "auto",
            "lineHeight": "20px",
        },
        "inline": { "left": "10px", "top": "10px", "width": "100px", "height": "20px" },
        "rect": { "x": 10, "y": 10, "width": 100, "height": 20 },
        "children": [ { "text": "x" } ],
    }));
    assert_eq!(b.outer_box, b.border_box);
    assert_eq!(b.content_box, b.border_box);
    assert_eq!(b.z_index, 0);
}

#[test]
fn test_text_boxes_require_text_tag_and_text() {
    let tree = slide(vec![
        text_node("p", "a", "body text", [0.0, 0.0, 10.0, 10.0], 0),
        text_node("div", "b", "div text", [0.0, 0.0, 10.0, 10.0], 0),
        text_node("h2", "c", "   ", [0.0, 0.0, 10.0, 10.0], 0),
        text_node("h2", "d", "Heading", [0.0, 0.0, 10.0, 10.0], 0),
    ]);
    let config = AnalysisConfig::default();
    let boxes = build_element_boxes(&tree, &config);
    assert_eq!(boxes.len(), 4);
    let classes: Vec<&str> = text_boxes(&boxes, &config)
        .into_iter()
        .map(|b| b.class.as_str())
        .collect();
    assert_eq!(classes, ["a", "d"]);
}

#[test]
fn test_snippet_is_trimmed_and_truncated() {
    let long = format!("  {}  ", "x".repeat(120));
    let b = single_box(text_node("p", "", &long, [0.0, 0.0, 10.0, 10.0], 0));
    assert_eq!(b.text_snippet.chars().count(), 80);
    assert!(b.has_text);
}
