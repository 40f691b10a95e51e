//! Rectangle element.

use super::{ElementId, Rgba};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A filled rectangle element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Fill color.
    pub color: Rgba,
    /// Paint order; unique within a document.
    pub z_index: i32,
}

impl Rectangle {
    /// Geometry assigned to newly added rectangles.
    pub const DEFAULT_SIZE: Size = Size::new(120.0, 80.0);

    /// Fill assigned to newly added rectangles.
    pub const DEFAULT_FILL: Rgba = Rgba::new(13, 153, 255, 255);

    /// Create a rectangle with default geometry and fill.
    pub fn new(id: ElementId, position: Point, z_index: i32) -> Self {
        Self {
            id,
            position,
            width: Self::DEFAULT_SIZE.width,
            height: Self::DEFAULT_SIZE.height,
            color: Self::DEFAULT_FILL,
            z_index,
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_rectangle_defaults() {
        let rect = Rectangle::new(Uuid::new_v4(), Point::new(50.0, 50.0), 0);
        assert_eq!(rect.width, 120.0);
        assert_eq!(rect.height, 80.0);
        assert_eq!(rect.color, Rectangle::DEFAULT_FILL);
    }

    #[test]
    fn test_as_rect() {
        let rect = Rectangle::new(Uuid::new_v4(), Point::new(10.0, 20.0), 0);
        let bounds = rect.as_rect();
        assert_eq!(bounds, Rect::new(10.0, 20.0, 130.0, 100.0));
    }
}
