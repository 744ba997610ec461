//! End-to-end report rendering over a small document.

use box_metrics::{DocumentSnapshot, EdgeValues, Rect, StyleSnapshot, ViewportInfo};
use box_report::{ReportRequest, Section, render};

fn block_style(vertical_margin: &str, horizontal_margin: &str, font_size: &str) -> StyleSnapshot {
    StyleSnapshot {
        margin: EdgeValues {
            top: vertical_margin.to_owned(),
            right: horizontal_margin.to_owned(),
            bottom: vertical_margin.to_owned(),
            left: horizontal_margin.to_owned(),
        },
        padding: EdgeValues::uniform("0px"),
        border_width: EdgeValues::uniform("0px"),
        font_size: font_size.to_owned(),
        line_height: "normal".to_owned(),
        display: "block".to_owned(),
        box_sizing: "content-box".to_owned(),
    }
}

fn document() -> DocumentSnapshot {
    let mut doc = DocumentSnapshot::new(ViewportInfo {
        inner_width: 800.0,
        inner_height: 600.0,
        scroll_width: 800.0,
        scroll_height: 600.0,
    });
    let html = doc.push_element(
        None,
        "HTML",
        Rect::new(0.0, 0.0, 800.0, 150.0),
        block_style("0px", "0px", "16px"),
    );
    let body = doc.push_element(
        Some(html),
        "BODY",
        Rect::new(8.0, 8.0, 784.0, 134.0),
        block_style("8px", "8px", "16px"),
    );
    let heading = doc.push_element(
        Some(body),
        "H1",
        Rect::new(8.0, 29.44, 784.0, 37.0),
        block_style("21.44px", "0px", "32px"),
    );
    doc.set_first_text(heading, "Title", Rect::new(8.0, 29.44, 80.5, 37.0));
    let paragraph = doc.push_element(
        Some(body),
        "P",
        Rect::new(8.0, 87.88, 784.0, 18.0),
        block_style("16px", "0px", "16px"),
    );
    doc.set_first_text(paragraph, "Hello", Rect::new(8.0, 87.88, 40.0, 18.0));
    doc
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn full_report_matches_expected_text() {
    let doc = document();
    let tags = tags(&["html", "body", "h1", "form"]);
    let request = ReportRequest {
        tags: &tags,
        container: "body",
        sections: &Section::ALL,
    };
    let Ok(report) = render(&doc, &request) else {
        panic!("rendering into a String does not fail");
    };
    let expected = "\
=== Layout Measurements ===

<html>:
  Border Box: 800x150
  Content Box: 800x150
  Margins (T R B L): 0px 0px 0px 0px
  Padding (T R B L): 0px 0px 0px 0px
  Border (T R B L): 0px 0px 0px 0px
  Font Size: 16px
  Line Height: normal
  Display: block
  Position: x=0 y=0
  Children (1): BODY

<body>:
  Border Box: 784x134
  Content Box: 784x134
  Margins (T R B L): 8px 8px 8px 8px
  Padding (T R B L): 0px 0px 0px 0px
  Border (T R B L): 0px 0px 0px 0px
  Font Size: 16px
  Line Height: normal
  Display: block
  Position: x=8 y=8
  Children (2): H1, P

<h1>:
  Border Box: 784x37
  Content Box: 784x37
  Margins (T R B L): 21.44px 0px 21.44px 0px
  Padding (T R B L): 0px 0px 0px 0px
  Border (T R B L): 0px 0px 0px 0px
  Font Size: 32px
  Line Height: normal
  Display: block
  Position: x=8 y=29
  First text line: 81x37

form: NOT FOUND

=== Fixture Array ===
{\"html\", 800, 150},
{\"body\", 784, 134},
{\"h1\", 784, 37},
// form: NOT FOUND

=== Body Height Breakdown ===
Body border box height: 134px
  - Top padding: 0px
  - Top border: 0px
  - Bottom padding: 0px
  - Bottom border: 0px
  - Children:
    [0] <h1>: 37px (margins: 21.44/21.44, gap: 21px)
    [1] <p>: 18px (margins: 16/16, gap: 21px)
  - Final gap to bottom: 36px
  Total content height: 134px

=== Viewport Info ===
Window inner width: 800px
Window inner height: 600px
Document width: 800px
Document height: 600px
";
    assert_eq!(report, expected);
}

#[test]
fn sections_can_be_selected() {
    let doc = document();
    let tags = tags(&["p", "h3"]);
    let request = ReportRequest {
        tags: &tags,
        container: "body",
        sections: &[Section::Fixtures],
    };
    let Ok(report) = render(&doc, &request) else {
        panic!("rendering into a String does not fail");
    };
    assert_eq!(
        report,
        "=== Fixture Array ===\n{\"p\", 784, 18},\n// h3: NOT FOUND\n"
    );
}

#[test]
fn missing_container_is_marked() {
    let doc = document();
    let tags = tags(&[]);
    let request = ReportRequest {
        tags: &tags,
        container: "main",
        sections: &[Section::Height],
    };
    let Ok(report) = render(&doc, &request) else {
        panic!("rendering into a String does not fail");
    };
    assert_eq!(report, "=== Main Height Breakdown ===\nmain: NOT FOUND\n");
}

#[test]
fn rendering_twice_is_identical() {
    let doc = document();
    let tags = tags(&["html", "body", "h1", "p", "h3", "form"]);
    let request = ReportRequest {
        tags: &tags,
        container: "body",
        sections: &Section::ALL,
    };
    assert_eq!(render(&doc, &request), render(&doc, &request));
}
