//! Text element.

use super::{ElementId, Rgba};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// A text box element. The box participates in layout like a rectangle; the
/// content paints in the foreground color over a transparent background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the text box.
    pub width: f64,
    /// Height of the text box.
    pub height: f64,
    /// Foreground color.
    pub color: Rgba,
    /// Paint order; unique within a document.
    pub z_index: i32,
    /// The text content.
    pub content: String,
}

impl Text {
    /// Geometry assigned to newly added text boxes.
    pub const DEFAULT_SIZE: Size = Size::new(160.0, 40.0);

    /// Placeholder content for newly added text boxes.
    pub const DEFAULT_CONTENT: &'static str = "Text";

    /// Create a text box with default geometry and placeholder content.
    pub fn new(id: ElementId, position: Point, z_index: i32) -> Self {
        Self {
            id,
            position,
            width: Self::DEFAULT_SIZE.width,
            height: Self::DEFAULT_SIZE.height,
            color: Rgba::black(),
            z_index,
            content: Self::DEFAULT_CONTENT.to_string(),
        }
    }
}
