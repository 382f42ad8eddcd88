//! Render-pass behavior over the public API.

use insta::assert_snapshot;
use scrivo_render::content::{detect, render_part, shift_headings, SourceFormat};
use scrivo_render::Part;

#[test]
fn dialect_detection_matches_authoring_habits() {
    assert_eq!(detect("# Title\nbody"), SourceFormat::Markdown);
    assert_eq!(detect("<p>hi</p>"), SourceFormat::Html);
    assert_eq!(detect("just words"), SourceFormat::Plain);
}

#[test]
fn plain_part_renders_line_per_paragraph_with_escaping() {
    let mut part = Part::new(1, "Field Notes", "line one\n\nline two <b>");
    part.number = "1.1".to_string();

    assert_snapshot!(render_part(&part), @r###"
    <h1>1.1 Field Notes</h1>
    <p>line one</p>
    <p>line two &lt;b&gt;</p>
    "###);
}

#[test]
fn html_part_aligns_foreign_headings_to_the_part_level() {
    let mut part = Part::new(3, "", "<h1>A</h1><h2>B</h2>");
    part.number = "1.1.1.1".to_string();

    let html = render_part(&part);
    assert_eq!(html, "<h4>A</h4><h5>B</h5>");
}

#[test]
fn pasted_page_is_reduced_to_its_body() {
    let part = Part::new(
        0,
        "",
        "<html><head><title>x</title></head><body><p>kept</p></body></html>",
    );
    let html = render_part(&part);
    assert_eq!(html, "<p>kept</p>");
}

#[test]
fn markdown_part_converts_tables() {
    let part = Part::new(
        0,
        "",
        "| name | qty |\n| ---- | --- |\n| bolt | 4 |",
    );
    let html = render_part(&part);
    assert!(html.contains("<table>"));
    assert!(html.contains("<th>name</th>"));
    assert!(html.contains("<td>bolt</td>"));
}

#[test]
fn empty_text_with_a_name_renders_heading_only() {
    let mut part = Part::new(0, "Placeholder", "   ");
    part.number = "4".to_string();
    assert_eq!(render_part(&part), "<h1>4 Placeholder</h1>");
}

#[test]
fn empty_name_and_text_render_to_nothing() {
    let part = Part::new(0, "", "");
    assert_eq!(render_part(&part), "");
}

#[test]
fn shift_is_relative_to_the_shallowest_heading_present() {
    // A fragment starting at h3 and a fragment starting at h1 land in the
    // same place for the same part level.
    assert_eq!(
        shift_headings("<h3>A</h3><h4>B</h4>", 1),
        "<h2>A</h2><h3>B</h3>"
    );
    assert_eq!(
        shift_headings("<h1>A</h1><h2>B</h2>", 1),
        "<h2>A</h2><h3>B</h3>"
    );
}
