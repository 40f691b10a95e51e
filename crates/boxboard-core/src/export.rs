//! Static HTML export of the element collection.

use crate::elements::Element;
use kurbo::Size;

/// Produce a self-contained HTML document with one absolutely positioned box
/// per element inside a fixed frame, centered on a dark page.
///
/// Rectangles render as filled boxes with no content; text elements render
/// their escaped content in the element color over a transparent background.
/// Boxes are emitted back to front and carry an explicit `z-index`, so
/// stacking matches the model either way. Write-only: there is no
/// corresponding import.
pub fn export_static_markup(elements: &[Element], frame: Size) -> String {
    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|e| e.z_index());

    let mut boxes = String::new();
    for element in ordered {
        let position = element.position();
        let size = element.size();
        let placement = format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
            position.x,
            position.y,
            size.width,
            size.height,
            element.z_index(),
        );
        match element.text() {
            Some(content) => boxes.push_str(&format!(
                "        <div class=\"element text\" style=\"{} color: {};\">{}</div>\n",
                placement,
                element.color().to_css(),
                escape_html(content),
            )),
            None => boxes.push_str(&format!(
                "        <div class=\"element\" style=\"{} background: {};\"></div>\n",
                placement,
                element.color().to_css(),
            )),
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>BoxBoard design</title>
    <style>
        body {{ margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #1e1e1e; }}
        .frame {{ position: relative; overflow: hidden; width: {width}px; height: {height}px; background: #ffffff; }}
        .element {{ position: absolute; box-sizing: border-box; }}
        .element.text {{ font: 16px/1.3 sans-serif; overflow: hidden; background: transparent; }}
    </style>
</head>
<body>
    <div class="frame">
{boxes}    </div>
</body>
</html>
"#,
        width = frame.width,
        height = frame.height,
        boxes = boxes,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Rectangle, Text};
    use crate::geometry::CANVAS_SIZE;
    use kurbo::Point;
    use uuid::Uuid;

    fn rect(x: f64, y: f64, z: i32) -> Element {
        Element::Rectangle(Rectangle::new(Uuid::new_v4(), Point::new(x, y), z))
    }

    fn text(content: &str, z: i32) -> Element {
        let mut element = Text::new(Uuid::new_v4(), Point::new(10.0, 10.0), z);
        element.content = content.to_string();
        Element::Text(element)
    }

    #[test]
    fn test_frame_dimensions_and_dark_page() {
        let html = export_static_markup(&[], CANVAS_SIZE);
        assert!(html.contains("width: 800px; height: 600px;"));
        assert!(html.contains("background: #1e1e1e;"));
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_rectangle_box_has_fill_and_no_content() {
        let html = export_static_markup(&[rect(50.0, 50.0, 0)], CANVAS_SIZE);
        assert!(html.contains("left: 50px; top: 50px; width: 120px; height: 80px; z-index: 0;"));
        assert!(html.contains("background: #0d99ff;\"></div>"));
    }

    #[test]
    fn test_text_content_rendered_for_text_only() {
        let elements = [rect(50.0, 50.0, 0), text("Launch plan", 1)];
        let html = export_static_markup(&elements, CANVAS_SIZE);

        assert!(html.contains(">Launch plan</div>"));
        // Text paints in the foreground color, not as a fill.
        assert!(html.contains("color: #000000;"));
        // The rectangle box carries no content at all.
        assert!(html.contains("background: #0d99ff;\"></div>"));
    }

    #[test]
    fn test_text_edit_reflected_in_export() {
        let mut element = text("before", 0);
        element.set_text("after".to_string());
        let html = export_static_markup(std::slice::from_ref(&element), CANVAS_SIZE);
        assert!(html.contains(">after</div>"));
        assert!(!html.contains("before"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let html = export_static_markup(&[text("<script>&\"", 0)], CANVAS_SIZE);
        assert!(html.contains("&lt;script&gt;&amp;&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_boxes_emitted_back_to_front() {
        let elements = [rect(0.0, 0.0, 2), rect(10.0, 10.0, 0)];
        let html = export_static_markup(&elements, CANVAS_SIZE);
        let back = html.find("z-index: 0;").unwrap();
        let front = html.find("z-index: 2;").unwrap();
        assert!(back < front);
    }
}
