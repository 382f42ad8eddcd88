//! End-to-end export behavior: mixed-dialect projects through the
//! registry and the publish pipeline.

use std::fs;

use scrivo_render::publish::{publish, PublishArtifact, PublishSpec};
use scrivo_render::{ExporterRegistry, Part, Project};
use tempfile::tempdir;

fn mixed_project() -> Project {
    let mut project = Project::new("Workshop Manual");
    project.parts = vec![
        Part::new(0, "Overview", "The manual covers assembly and care.").with_id(1),
        Part::new(1, "Parts List", "| name | qty |\n| ---- | --- |\n| bolt | 4 |").with_id(2),
        Part::new(1, "Warnings", "<h1>Read First</h1><p>Mind the edges.</p>").with_id(3),
        Part::new(0, "Appendix", "Torque tables.").with_id(4),
    ];
    project
}

#[test]
fn html_export_carries_numbering_and_normalized_headings() {
    let project = mixed_project();
    let result = publish(PublishSpec::new(&project, "html")).expect("publish");
    let PublishArtifact::InMemory(html) = result.artifact else {
        panic!("expected in-memory artifact");
    };

    // Outline numbers from the numbering pass.
    assert!(html.contains("<h1>1 Overview</h1>"));
    assert!(html.contains("<h1>1.1 Parts List</h1>"));
    assert!(html.contains("<h1>2 Appendix</h1>"));

    // The markdown table converted.
    assert!(html.contains("<td>bolt</td>"));

    // The pasted fragment's h1 moved under the part's level (1 - 1 + 1 = 1
    // shift puts it at h2).
    assert!(html.contains("<h2>Read First</h2>"));
    assert!(!html.contains("<h1>Read First</h1>"));
}

#[test]
fn excluded_parts_disappear_from_output_and_numbering() {
    let mut project = mixed_project();
    project.parts[1].include = false;

    let result = publish(PublishSpec::new(&project, "html")).expect("publish");
    let PublishArtifact::InMemory(html) = result.artifact else {
        panic!("expected in-memory artifact");
    };

    assert!(!html.contains("Parts List"));
    // Warnings takes over the 1.1 slot.
    assert!(html.contains("<h1>1.1 Warnings</h1>"));
}

#[test]
fn publish_writes_the_page_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manual.html");
    let project = mixed_project();

    let result = publish(PublishSpec::new(&project, "html").with_output_path(&path))
        .expect("publish");
    assert_eq!(result.artifact, PublishArtifact::File(path.clone()));

    let html = fs::read_to_string(path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Workshop Manual</title>"));
}

#[test]
fn registry_detects_targets_from_output_names() {
    let registry = ExporterRegistry::with_defaults();
    assert_eq!(
        registry.detect_exporter_from_filename("book.html"),
        Some("html".to_string())
    );
    assert_eq!(
        registry.detect_exporter_from_filename("book.docx"),
        Some("docx".to_string())
    );
}

#[test]
fn image_attachments_appear_as_figures() {
    let mut project = Project::new("Illustrated");
    project.parts = vec![
        Part::new(0, "Figures", "See below.").with_image("img/overview.png")
    ];

    let result = publish(PublishSpec::new(&project, "html")).expect("publish");
    let PublishArtifact::InMemory(html) = result.artifact else {
        panic!("expected in-memory artifact");
    };
    assert!(html.contains("<figure class=\"part-figure\">"));
    assert!(html.contains("<img src=\"img/overview.png\""));
}
