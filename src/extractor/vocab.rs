//! Fixed vocabularies for keyword extraction.
//!
//! Declaration order matters: it is the scan order for every vocabulary, and
//! for room types the last entry whose keyword appears in the text wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    Office,
    DiningRoom,
    #[default]
    Generic,
}

impl RoomType {
    /// Scan order for text matching. `Generic` is the fallback, never matched.
    pub const SCAN_ORDER: [RoomType; 6] = [
        RoomType::LivingRoom,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::Office,
        RoomType::DiningRoom,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            RoomType::LivingRoom => "living room",
            RoomType::Bedroom => "bedroom",
            RoomType::Kitchen => "kitchen",
            RoomType::Bathroom => "bathroom",
            RoomType::Office => "office",
            RoomType::DiningRoom => "dining room",
            RoomType::Generic => "generic",
        }
    }

    /// Display label with the first letter capitalized, e.g. "Living room".
    pub fn display_label(self) -> String {
        let keyword = self.keyword();
        let mut chars = keyword.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleTag {
    Modern,
    Contemporary,
    Minimalist,
    Traditional,
    Rustic,
    Industrial,
    Scandinavian,
}

impl StyleTag {
    pub const SCAN_ORDER: [StyleTag; 7] = [
        StyleTag::Modern,
        StyleTag::Contemporary,
        StyleTag::Minimalist,
        StyleTag::Traditional,
        StyleTag::Rustic,
        StyleTag::Industrial,
        StyleTag::Scandinavian,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            StyleTag::Modern => "modern",
            StyleTag::Contemporary => "contemporary",
            StyleTag::Minimalist => "minimalist",
            StyleTag::Traditional => "traditional",
            StyleTag::Rustic => "rustic",
            StyleTag::Industrial => "industrial",
            StyleTag::Scandinavian => "scandinavian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorTag {
    Blue,
    Red,
    Green,
    Yellow,
    White,
    Black,
    Gray,
    Brown,
    Beige,
}

impl ColorTag {
    pub const SCAN_ORDER: [ColorTag; 9] = [
        ColorTag::Blue,
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Yellow,
        ColorTag::White,
        ColorTag::Black,
        ColorTag::Gray,
        ColorTag::Brown,
        ColorTag::Beige,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Red => "red",
            ColorTag::Green => "green",
            ColorTag::Yellow => "yellow",
            ColorTag::White => "white",
            ColorTag::Black => "black",
            ColorTag::Gray => "gray",
            ColorTag::Brown => "brown",
            ColorTag::Beige => "beige",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FurnitureTag {
    Sofa,
    Table,
    Chair,
    Bed,
    Desk,
    Shelf,
    Cabinet,
    Wardrobe,
}

impl FurnitureTag {
    pub const SCAN_ORDER: [FurnitureTag; 8] = [
        FurnitureTag::Sofa,
        FurnitureTag::Table,
        FurnitureTag::Chair,
        FurnitureTag::Bed,
        FurnitureTag::Desk,
        FurnitureTag::Shelf,
        FurnitureTag::Cabinet,
        FurnitureTag::Wardrobe,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            FurnitureTag::Sofa => "sofa",
            FurnitureTag::Table => "table",
            FurnitureTag::Chair => "chair",
            FurnitureTag::Bed => "bed",
            FurnitureTag::Desk => "desk",
            FurnitureTag::Shelf => "shelf",
            FurnitureTag::Cabinet => "cabinet",
            FurnitureTag::Wardrobe => "wardrobe",
        }
    }
}

/// Advisory string appended when window/natural-light keywords appear.
pub const REQUEST_NATURAL_LIGHT: &str = "Consider window placement and natural light";

/// Advisory string appended when storage/space-saving keywords appear.
pub const REQUEST_STORAGE: &str = "Optimize for storage and space efficiency";
