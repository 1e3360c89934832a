//! Color resolution from the extracted color scheme.

use crate::extractor::{AttributeRecord, ColorTag, StyleTag};
use crate::scene::Rgb;

pub const FLOOR_BROWN: Rgb = Rgb::new(0x8B, 0x45, 0x13);
pub const FLOOR_NEUTRAL: Rgb = Rgb::new(0xEE, 0xEE, 0xEE);

pub const WALL_WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const WALL_BEIGE: Rgb = Rgb::new(0xF5, 0xF5, 0xDC);
pub const WALL_GRAY: Rgb = Rgb::new(0xD3, 0xD3, 0xD3);
pub const WALL_BLUE: Rgb = Rgb::new(0xAD, 0xD8, 0xE6);
pub const WALL_GREEN: Rgb = Rgb::new(0x90, 0xEE, 0x90);

pub const FURNITURE_BROWN: Rgb = Rgb::new(0x8B, 0x45, 0x13);
pub const FURNITURE_BLACK: Rgb = Rgb::new(0x22, 0x22, 0x22);
pub const FURNITURE_WHITE: Rgb = Rgb::new(0xEE, 0xEE, 0xEE);
pub const FURNITURE_GRAY: Rgb = Rgb::new(0x88, 0x88, 0x88);

pub const MATTRESS_WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const MODERN_TABLE: Rgb = Rgb::new(0xDD, 0xDD, 0xDD);
pub const CHAIR_BLACK: Rgb = Rgb::new(0x22, 0x22, 0x22);
pub const LIGHT_WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Floor color: brown when the scheme asks for brown, light neutral otherwise.
pub fn floor_color(record: &AttributeRecord) -> Rgb {
    if record.has_color(ColorTag::Brown) {
        FLOOR_BROWN
    } else {
        FLOOR_NEUTRAL
    }
}

/// Single wall color for all three walls, resolved by a fixed priority scan:
/// white > beige > gray > blue > green, defaulting to white.
pub fn wall_color(record: &AttributeRecord) -> Rgb {
    const PRIORITY: [(ColorTag, Rgb); 5] = [
        (ColorTag::White, WALL_WHITE),
        (ColorTag::Beige, WALL_BEIGE),
        (ColorTag::Gray, WALL_GRAY),
        (ColorTag::Blue, WALL_BLUE),
        (ColorTag::Green, WALL_GREEN),
    ];
    PRIORITY
        .iter()
        .find(|(tag, _)| record.has_color(*tag))
        .map(|(_, color)| *color)
        .unwrap_or(WALL_WHITE)
}

/// Primary furniture color, priority brown > black > white > gray,
/// defaulting to brown.
pub fn primary_furniture_color(record: &AttributeRecord) -> Rgb {
    const PRIORITY: [(ColorTag, Rgb); 4] = [
        (ColorTag::Brown, FURNITURE_BROWN),
        (ColorTag::Black, FURNITURE_BLACK),
        (ColorTag::White, FURNITURE_WHITE),
        (ColorTag::Gray, FURNITURE_GRAY),
    ];
    PRIORITY
        .iter()
        .find(|(tag, _)| record.has_color(*tag))
        .map(|(_, color)| *color)
        .unwrap_or(FURNITURE_BROWN)
}

/// Whether any of the "clean-lined" style tags were requested; modern
/// variants of some pieces swap to lighter materials.
pub fn is_modern(record: &AttributeRecord) -> bool {
    record.has_style(StyleTag::Modern)
        || record.has_style(StyleTag::Contemporary)
        || record.has_style(StyleTag::Minimalist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;

    #[test]
    fn wall_color_follows_priority_order() {
        assert_eq!(wall_color(&extract("green and white walls")), WALL_WHITE);
        assert_eq!(wall_color(&extract("blue and gray")), WALL_GRAY);
        assert_eq!(wall_color(&extract("green")), WALL_GREEN);
        assert_eq!(wall_color(&extract("red and yellow")), WALL_WHITE);
        assert_eq!(wall_color(&extract("")), WALL_WHITE);
    }

    #[test]
    fn furniture_color_follows_priority_order() {
        assert_eq!(
            primary_furniture_color(&extract("gray and brown")),
            FURNITURE_BROWN
        );
        assert_eq!(
            primary_furniture_color(&extract("white and gray")),
            FURNITURE_WHITE
        );
        assert_eq!(primary_furniture_color(&extract("")), FURNITURE_BROWN);
    }

    #[test]
    fn modern_styles_set_the_flag() {
        assert!(is_modern(&extract("a modern space")));
        assert!(is_modern(&extract("minimalist look")));
        assert!(is_modern(&extract("contemporary feel")));
        assert!(!is_modern(&extract("rustic charm")));
        assert!(!is_modern(&extract("")));
    }
}
