//! Document serialization for persistence and the data export.

use crate::elements::Element;
use serde::{Deserialize, Serialize};

/// Slot key under which the design is persisted.
pub const DOCUMENT_KEY: &str = "boxboard.design";

/// Suggested file name for the serialized-data download.
pub const DATA_EXPORT_NAME: &str = "design.json";

/// Suggested file name for the static-markup download.
pub const MARKUP_EXPORT_NAME: &str = "design.html";

/// A persistable snapshot of the element collection. Every element field is
/// carried, so a serialize/deserialize round trip is lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON. Malformed input fails as a whole;
    /// nothing is partially applied.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Rectangle, Rgba, Text};
    use kurbo::Point;
    use uuid::Uuid;

    fn sample_document() -> Document {
        let mut rect = Rectangle::new(Uuid::new_v4(), Point::new(40.0, 60.0), 0);
        rect.width = 200.0;
        rect.color = Rgba::new(255, 0, 128, 255);
        let mut text = Text::new(Uuid::new_v4(), Point::new(300.0, 120.0), 5);
        text.content = "Quarterly numbers".to_string();
        Document::new(vec![Element::Rectangle(rect), Element::Text(text)])
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let document = sample_document();
        let json = document.to_json().unwrap();
        let restored = Document::from_json(&json).unwrap();
        assert_eq!(restored, document);
    }

    #[test]
    fn test_round_trip_preserves_z_and_kind() {
        let document = sample_document();
        let json = document.to_json().unwrap();
        let restored = Document::from_json(&json).unwrap();

        assert_eq!(restored.elements[0].z_index(), 0);
        assert_eq!(restored.elements[1].z_index(), 5);
        assert_eq!(restored.elements[1].text(), Some("Quarterly numbers"));
        assert!(matches!(restored.elements[0], Element::Rectangle(_)));
    }

    #[test]
    fn test_reserialized_json_is_stable() {
        let json = sample_document().to_json().unwrap();
        let reserialized = Document::from_json(&json).unwrap().to_json().unwrap();
        assert_eq!(json, reserialized);
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(Document::from_json("{\"elements\": [{}]}").is_err());
        assert!(Document::from_json("not json").is_err());
    }

    #[test]
    fn test_empty_document() {
        let json = Document::default().to_json().unwrap();
        let restored = Document::from_json(&json).unwrap();
        assert!(restored.elements.is_empty());
    }
}
