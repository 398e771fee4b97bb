//! Tests for pairwise text overlap detection.

mod common;

use common::{assert_close, element_box};
use slidescore_core::detect::detect_overlaps;
use slidescore_core::{AnalysisConfig, ElementBox, Rect};

fn detect(boxes: &[ElementBox]) -> Vec<slidescore_core::finding::OverlapFinding> {
    let refs: Vec<&ElementBox> = boxes.iter().collect();
    detect_overlaps(&refs, &AnalysisConfig::default())
}

#[test]
fn test_half_overlap_of_smaller_box() {
    let boxes = [
        element_box("h1", "title", "Title", [0.0, 0.0, 200.0, 100.0], 1),
        element_box("p", "body", "Body", [50.0, 50.0, 100.0, 100.0], 1),
    ];
    let findings = detect(&boxes);
    assert_eq!(findings.len(), 1);
    let f = &findings[0];
    assert_close(f.overlap_percent, 50.0);
    assert_eq!(f.element1.class, "title");
    assert_eq!(f.element2.class, "body");
    assert_eq!(f.overlap_area, Rect::new(50.0, 50.0, 100.0, 50.0));
}

#[test]
fn test_percent_is_relative_to_smaller_box() {
    // 10x10 box fully inside a 1000x1000 box.
    let boxes = [
        element_box("p", "big", "big", [0.0, 0.0, 1000.0, 1000.0], 0),
        element_box("p", "small", "small", [10.0, 10.0, 10.0, 10.0], 0),
    ];
    let findings = detect(&boxes);
    assert_eq!(findings.len(), 1);
    assert_close(findings[0].overlap_percent, 100.0);
}

#[test]
fn test_below_threshold_is_ignored() {
    // Intersection 4x100 = 4% of the 100x100 box.
    let boxes = [
        element_box("p", "a", "a", [0.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "b", "b", [96.0, 0.0, 100.0, 100.0], 0),
    ];
    assert!(detect(&boxes).is_empty());

    // Exactly 5% counts.
    let boxes = [
        element_box("p", "a", "a", [0.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "b", "b", [95.0, 0.0, 100.0, 100.0], 0),
    ];
    let findings = detect(&boxes);
    assert_eq!(findings.len(), 1);
    assert_close(findings[0].overlap_percent, 5.0);
}

#[test]
fn test_threshold_compares_unrounded_percent() {
    // 4.996% would round to 5.00 but stays below the threshold.
    let just_under = [
        element_box("p", "a", "A", [0.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "b", "B", [95.004, 0.0, 100.0, 100.0], 0),
    ];
    assert!(detect(&just_under).is_empty());

    // 5.004% clears the threshold and is reported rounded.
    let just_over = [
        element_box("p", "a", "A", [0.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "b", "B", [94.996, 0.0, 100.0, 100.0], 0),
    ];
    let findings = detect(&just_over);
    assert_eq!(findings.len(), 1);
    assert_close(findings[0].overlap_percent, 5.0);
}

#[test]
fn test_touching_and_separated_boxes_do_not_overlap() {
    let boxes = [
        element_box("p", "a", "a", [0.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "b", "b", [100.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "c", "c", [0.0, 300.0, 100.0, 100.0], 0),
    ];
    assert!(detect(&boxes).is_empty());
}

#[test]
fn test_threshold_is_configurable() {
    let boxes = [
        element_box("p", "a", "a", [0.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "b", "b", [80.0, 0.0, 100.0, 100.0], 0),
    ];
    let refs: Vec<&ElementBox> = boxes.iter().collect();
    let config = AnalysisConfig {
        overlap_threshold_percent: 25.0,
        ..AnalysisConfig::default()
    };
    assert!(detect_overlaps(&refs, &config).is_empty());
    assert_eq!(detect_overlaps(&refs, &AnalysisConfig::default()).len(), 1);
}

#[test]
fn test_every_pair_reported_once_in_document_order() {
    let boxes = [
        element_box("p", "a", "a", [0.0, 0.0, 100.0, 100.0], 0),
        element_box("p", "b", "b", [10.0, 10.0, 100.0, 100.0], 0),
        element_box("p", "c", "c", [20.0, 20.0, 100.0, 100.0], 0),
    ];
    let pairs: Vec<(String, String)> = detect(&boxes)
        .into_iter()
        .map(|f| (f.element1.class, f.element2.class))
        .collect();
    assert_eq!(
        pairs,
        [
            ("a".to_string(), "b".to_string()),
            ("a".to_string(), "c".to_string()),
            ("b".to_string(), "c".to_string()),
        ]
    );
}

#[test]
fn test_overlap_serializes_with_report_field_names() {
    let boxes = [
        element_box("h1", "title", "Title", [0.0, 0.0, 200.0, 100.0], 3),
        element_box("p", "body", "Body", [50.0, 50.0, 100.0, 100.0], 1),
    ];
    let findings = detect(&boxes);
    let value = serde_json::to_value(&findings[0]).unwrap();

    assert_eq!(value["overlap_percent"], 50.0);
    assert_eq!(value["element1"]["tag"], "h1");
    assert_eq!(value["element1"]["content"], "Title");
    assert_eq!(value["element1"]["box_f12"], "[0-200, 0-100]");
    assert_eq!(value["element1"]["size"], "200×100px");
    assert_eq!(value["element1"]["z_index"], 3);
    assert_eq!(
        value["element1"]["box_model"],
        "margin(0/0/0/0) padding(0/0/0/0) border(0/0/0/0)"
    );
    assert_eq!(value["overlap_area"]["left"], "50");
    assert_eq!(value["overlap_area"]["height"], "50");
    assert_eq!(value["overlap_area"]["area"], "5000");
}
