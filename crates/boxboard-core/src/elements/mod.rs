//! Element definitions for the canvas.

mod rectangle;
mod text;

pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Position assigned to newly added elements.
pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Format as a CSS color value: `#rrggbb` when opaque, `rgba(...)`
    /// otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Element kinds that can be added to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Text,
}

/// Enum wrapper for all element types (for storage and serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Rectangle(Rectangle),
    Text(Text),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Rectangle(e) => e.id,
            Element::Text(e) => e.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Text(_) => ElementKind::Text,
        }
    }

    /// Top-left position in canvas coordinates.
    pub fn position(&self) -> Point {
        match self {
            Element::Rectangle(e) => e.position,
            Element::Text(e) => e.position,
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            Element::Rectangle(e) => e.position = position,
            Element::Text(e) => e.position = position,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            Element::Rectangle(e) => Size::new(e.width, e.height),
            Element::Text(e) => Size::new(e.width, e.height),
        }
    }

    pub fn set_size(&mut self, size: Size) {
        match self {
            Element::Rectangle(e) => {
                e.width = size.width;
                e.height = size.height;
            }
            Element::Text(e) => {
                e.width = size.width;
                e.height = size.height;
            }
        }
    }

    /// Fill color for rectangles, foreground color for text.
    pub fn color(&self) -> Rgba {
        match self {
            Element::Rectangle(e) => e.color,
            Element::Text(e) => e.color,
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        match self {
            Element::Rectangle(e) => e.color = color,
            Element::Text(e) => e.color = color,
        }
    }

    pub fn z_index(&self) -> i32 {
        match self {
            Element::Rectangle(e) => e.z_index,
            Element::Text(e) => e.z_index,
        }
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        match self {
            Element::Rectangle(e) => e.z_index = z_index,
            Element::Text(e) => e.z_index = z_index,
        }
    }

    /// Text content, for text elements only.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Rectangle(_) => None,
            Element::Text(e) => Some(&e.content),
        }
    }

    /// Replace the text content. Ignored for rectangles, which never carry
    /// text.
    pub fn set_text(&mut self, content: String) {
        if let Element::Text(e) = self {
            e.content = content;
        }
    }

    /// Get the bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        let position = self.position();
        let size = self.size();
        Rect::new(
            position.x,
            position.y,
            position.x + size.width,
            position.y + size.height,
        )
    }

    /// Check if a point (in canvas coordinates) hits this element.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}
