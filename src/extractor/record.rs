//! Structured result of keyword extraction from a room description.

use serde::{Deserialize, Serialize};

use super::vocab::{ColorTag, FurnitureTag, RoomType, StyleTag};

/// Parsed room dimensions. Values are unit-agnostic numbers: the source text
/// may say feet or meters but the unit is dropped at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl RoomDimensions {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.length.is_none() && self.height.is_none()
    }
}

/// Everything the extractor could recover from a free-text description.
/// All list fields hold only vocabulary members, in first-declared-match
/// order; `room_type` is always set (`Generic` when nothing matched).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRecord {
    pub room_type: RoomType,
    pub dimensions: RoomDimensions,
    pub style_preferences: Vec<StyleTag>,
    pub color_scheme: Vec<ColorTag>,
    pub furniture_items: Vec<FurnitureTag>,
    pub special_requests: Vec<String>,
}

impl Default for AttributeRecord {
    fn default() -> Self {
        Self {
            room_type: RoomType::Generic,
            dimensions: RoomDimensions::default(),
            style_preferences: Vec::new(),
            color_scheme: Vec::new(),
            furniture_items: Vec::new(),
            special_requests: Vec::new(),
        }
    }
}

impl AttributeRecord {
    pub fn has_color(&self, color: ColorTag) -> bool {
        self.color_scheme.contains(&color)
    }

    pub fn has_furniture(&self, item: FurnitureTag) -> bool {
        self.furniture_items.contains(&item)
    }

    pub fn has_style(&self, style: StyleTag) -> bool {
        self.style_preferences.contains(&style)
    }
}
