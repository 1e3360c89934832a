//! Keyword extraction from free-text room descriptions.
//!
//! `extract` is total and deterministic: it never fails, and text with no
//! vocabulary matches degrades to the all-default record. Matching is plain
//! case-insensitive substring search against the fixed vocabularies in
//! `vocab` — no tokenization, no stemming.

mod format;
mod record;
pub mod vocab;

use std::sync::OnceLock;

use regex::Regex;

pub use format::{format_extracted_info, generate_prompt_from_info};
pub use record::{AttributeRecord, RoomDimensions};
pub use vocab::{ColorTag, FurnitureTag, RoomType, StyleTag};

/// Matches `<number> <unit> (by|x) <number> <unit> [(by|x) <number> <unit>]`
/// where the unit word is feet/foot/ft/meters/meter/m. Units are recognized
/// but not converted; only the numbers survive.
const DIMENSION_PATTERN: &str = r"(?i)(\d+(?:\.\d+)?)\s*(?:feet|foot|ft|meters|meter|m)\s*(?:by|x)\s*(\d+(?:\.\d+)?)\s*(?:feet|foot|ft|meters|meter|m)(?:\s*(?:by|x)\s*(\d+(?:\.\d+)?)\s*(?:feet|foot|ft|meters|meter|m))?";

fn dimension_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(DIMENSION_PATTERN).expect("dimension pattern is valid"))
}

/// Extract a structured attribute record from a room description.
pub fn extract(text: &str) -> AttributeRecord {
    let lowered = text.to_lowercase();
    let mut record = AttributeRecord::default();

    // Room types scan in declared order and each hit overwrites the previous
    // one, so the last declared match present in the text wins. Kept as-is
    // for compatibility; every other field uses first-declared-match order.
    for room in RoomType::SCAN_ORDER {
        if lowered.contains(room.keyword()) {
            record.room_type = room;
        }
    }

    for style in StyleTag::SCAN_ORDER {
        if lowered.contains(style.keyword()) {
            record.style_preferences.push(style);
        }
    }

    for color in ColorTag::SCAN_ORDER {
        if lowered.contains(color.keyword()) {
            record.color_scheme.push(color);
        }
    }

    for item in FurnitureTag::SCAN_ORDER {
        if lowered.contains(item.keyword()) {
            record.furniture_items.push(item);
        }
    }

    if let Some(caps) = dimension_regex().captures(text) {
        record.dimensions = RoomDimensions {
            width: caps.get(1).and_then(|m| m.as_str().parse().ok()),
            length: caps.get(2).and_then(|m| m.as_str().parse().ok()),
            height: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        };
    }

    if lowered.contains("window") || lowered.contains("natural light") {
        record
            .special_requests
            .push(vocab::REQUEST_NATURAL_LIGHT.to_string());
    }
    if lowered.contains("storage") || lowered.contains("space saving") {
        record
            .special_requests
            .push(vocab::REQUEST_STORAGE.to_string());
    }

    record
}
