//! Tests for container resolution and container overflow detection.

mod common;

use common::{assert_close, element_box};
use slidescore_core::detect::{detect_container_overflows, resolve_container};
use slidescore_core::finding::{ContainerOverflowFinding, ContainerOverflowKind};
use slidescore_core::{AnalysisConfig, Direction, ElementBox, Rect, Relationship, SnippetMatcher};

fn relationship(class: &str, text: &str, containers: &[&str]) -> Relationship {
    Relationship {
        text_tag: "p".to_string(),
        text_class: class.to_string(),
        text_snippet: text.to_string(),
        container_classes: containers.iter().map(ToString::to_string).collect(),
    }
}

fn container(class: &str, geom: [f64; 4], z: i32) -> ElementBox {
    element_box("div", class, "", geom, z)
}

fn detect(relationships: &[Relationship], boxes: &[ElementBox]) -> Vec<ContainerOverflowFinding> {
    detect_container_overflows(
        relationships,
        boxes,
        &SnippetMatcher,
        &AnalysisConfig::default(),
    )
}

#[test]
fn test_text_inside_content_box_is_fine() {
    let boxes = [
        container("card", [0.0, 0.0, 1000.0, 500.0], 1),
        element_box("p", "body", "Body", [100.0, 100.0, 300.0, 50.0], 2),
    ];
    assert!(detect(&[relationship("body", "Body", &["card"])], &boxes).is_empty());
}

#[test]
fn test_right_overflow_relative_to_content_width() {
    let boxes = [
        container("card", [0.0, 0.0, 1000.0, 500.0], 1),
        element_box("p", "body", "Body", [800.0, 100.0, 500.0, 50.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    assert_eq!(findings.len(), 1);
    let f = &findings[0];
    assert_close(f.overflow_percent, 30.0);
    assert_eq!(f.container.class, "card");
    let ContainerOverflowKind::Partial(measure) = &f.kind else {
        panic!("expected partial overflow, got {:?}", f.kind);
    };
    assert_eq!(measure.directions, [Direction::Right]);
    assert_close(measure.px.right, 300.0);
    assert_close(measure.px.left, 0.0);
}

#[test]
fn test_padding_shrinks_the_reference_box() {
    let mut card = container("card", [0.0, 0.0, 1000.0, 500.0], 1);
    card.content_box = Rect::new(20.0, 20.0, 960.0, 460.0);
    let boxes = [
        card,
        element_box("p", "body", "Body", [10.0, 100.0, 300.0, 50.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind.directions(), [Direction::Left]);
    assert_close(findings[0].overflow_percent, 1.04);
}

#[test]
fn test_overflow_within_epsilon_is_ignored() {
    let rel = [relationship("body", "Body", &["card"])];
    let within = [
        container("card", [0.0, 0.0, 1000.0, 500.0], 1),
        element_box("p", "body", "Body", [0.0, 0.0, 1001.0, 50.0], 2),
    ];
    assert!(detect(&rel, &within).is_empty());

    let beyond = [
        container("card", [0.0, 0.0, 1000.0, 500.0], 1),
        element_box("p", "body", "Body", [0.0, 0.0, 1001.5, 50.0], 2),
    ];
    assert_eq!(detect(&rel, &beyond).len(), 1);
}

#[test]
fn test_completely_outside_vertically() {
    let boxes = [
        container("card", [0.0, 0.0, 1000.0, 500.0], 1),
        element_box("p", "body", "Body", [100.0, 700.0, 300.0, 50.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    assert_eq!(findings.len(), 1);
    let f = &findings[0];
    assert_close(f.overflow_percent, 100.0);
    assert_eq!(
        f.kind,
        ContainerOverflowKind::CompletelyOutside {
            horizontal_overlap: true,
            vertical_overlap: false,
        }
    );
    assert_eq!(f.kind.message(), "Text is completely outside parent vertically");
    assert!(f.kind.directions().is_empty());
}

#[test]
fn test_completely_outside_on_both_axes_reports_vertical() {
    let boxes = [
        container("card", [0.0, 0.0, 100.0, 100.0], 1),
        element_box("p", "body", "Body", [500.0, 500.0, 50.0, 50.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    assert_eq!(
        findings[0].kind.message(),
        "Text is completely outside parent vertically"
    );

    let boxes = [
        container("card", [0.0, 0.0, 100.0, 100.0], 1),
        element_box("p", "body", "Body", [500.0, 10.0, 50.0, 50.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    assert_eq!(
        findings[0].kind.message(),
        "Text is completely outside parent horizontally"
    );
}

#[test]
fn test_nearest_ancestor_class_is_tried_first() {
    let boxes = [
        container("outer", [0.0, 0.0, 1920.0, 1080.0], 1),
        container("inner", [0.0, 0.0, 100.0, 100.0], 1),
        element_box("p", "body", "Body", [50.0, 10.0, 100.0, 20.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["inner", "outer"])], &boxes);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].container.class, "inner");

    // Falls through to the next class when the nearest has no box.
    let config = AnalysisConfig::default();
    let classes = ["gone".to_string(), "outer".to_string()];
    let chosen = resolve_container(&boxes[2], &classes, &boxes, &config).unwrap();
    assert_eq!(chosen.class, "outer");

    let spill = [
        container("outer", [0.0, 0.0, 100.0, 100.0], 1),
        element_box("p", "body", "Body", [50.0, 10.0, 100.0, 20.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["gone", "outer"])], &spill);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].container.class, "outer");
}

#[test]
fn test_closest_lower_z_index_wins() {
    let config = AnalysisConfig::default();
    let text = element_box("p", "body", "Body", [0.0, 0.0, 10.0, 10.0], 5);
    let boxes = [
        container("card", [0.0, 0.0, 100.0, 100.0], 1),
        container("card", [0.0, 0.0, 200.0, 200.0], 3),
        container("card", [0.0, 0.0, 300.0, 300.0], 5),
        container("card", [0.0, 0.0, 400.0, 400.0], 9),
    ];
    let chosen = resolve_container(&text, &["card".to_string()], &boxes, &config).unwrap();
    assert_eq!(chosen.z_index, 3);
}

#[test]
fn test_z_index_tie_goes_to_document_order() {
    let config = AnalysisConfig::default();
    let text = element_box("p", "body", "Body", [0.0, 0.0, 10.0, 10.0], 2);
    let boxes = [
        container("card", [0.0, 0.0, 100.0, 100.0], 1),
        container("card", [0.0, 0.0, 200.0, 200.0], 1),
    ];
    let chosen = resolve_container(&text, &["card".to_string()], &boxes, &config).unwrap();
    assert_close(chosen.border_box.width, 100.0);
}

#[test]
fn test_containers_at_or_above_text_are_not_candidates() {
    let config = AnalysisConfig::default();
    let text = element_box("p", "body", "Body", [0.0, 0.0, 10.0, 10.0], 1);
    let boxes = [
        container("card", [0.0, 0.0, 100.0, 100.0], 1),
        container("card", [0.0, 0.0, 100.0, 100.0], 4),
    ];
    assert!(resolve_container(&text, &["card".to_string()], &boxes, &config).is_none());
}

#[test]
fn test_class_must_match_exactly() {
    let config = AnalysisConfig::default();
    let text = element_box("p", "body", "Body", [0.0, 0.0, 10.0, 10.0], 2);
    let boxes = [container("card shadow", [0.0, 0.0, 100.0, 100.0], 1)];
    assert!(resolve_container(&text, &["card".to_string()], &boxes, &config).is_none());
    assert!(resolve_container(&text, &["card shadow".to_string()], &boxes, &config).is_some());
}

#[test]
fn test_unmatched_text_is_skipped() {
    let boxes = [
        container("card", [0.0, 0.0, 100.0, 100.0], 1),
        element_box("p", "body", "Edited text", [500.0, 500.0, 50.0, 50.0], 2),
    ];
    assert!(detect(&[relationship("body", "Original text", &["card"])], &boxes).is_empty());
}

#[test]
fn test_zero_width_content_box_counts_as_full_overflow() {
    let mut card = container("card", [0.0, 0.0, 20.0, 100.0], 1);
    card.content_box = Rect::new(10.0, 10.0, 0.0, 80.0);
    let boxes = [
        card,
        element_box("p", "body", "Body", [0.0, 10.0, 30.0, 20.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    assert_eq!(findings.len(), 1);
    assert_close(findings[0].overflow_percent, 100.0);
}

#[test]
fn test_container_finding_serializes_parent_content_area() {
    let mut card = container("card", [0.0, 0.0, 1000.0, 500.0], 1);
    card.content_box = Rect::new(10.0, 10.0, 980.0, 480.0);
    let boxes = [
        card,
        element_box("p", "body", "Body", [800.0, 100.0, 500.0, 50.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    let value = serde_json::to_value(&findings[0]).unwrap();

    assert_eq!(value["parent"]["class"], "card");
    assert_eq!(value["parent"]["content_area"], "[10-990, 10-490]");
    assert_eq!(value["parent"]["content_size"], "980×480px");
    assert_eq!(value["text"]["content"], "Body");
    assert_eq!(value["overflow"]["right"], "310.0px (31.6%)");
    assert_eq!(value["overflow"]["directions"], serde_json::json!(["RIGHT"]));
}

#[test]
fn test_completely_outside_serializes_status() {
    let boxes = [
        container("card", [0.0, 0.0, 100.0, 100.0], 1),
        element_box("p", "body", "Body", [10.0, 500.0, 50.0, 50.0], 2),
    ];
    let findings = detect(&[relationship("body", "Body", &["card"])], &boxes);
    let value = serde_json::to_value(&findings[0]).unwrap();
    assert_eq!(value["overflow_percent"], 100.0);
    assert_eq!(value["overflow"]["status"], "COMPLETELY_OUTSIDE");
    assert_eq!(value["overflow"]["horizontal_overlap"], true);
    assert_eq!(value["overflow"]["vertical_overlap"], false);
}
