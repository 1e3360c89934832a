//! Hand-specified furniture silhouettes per room type.
//!
//! Each piece is gated on its furniture tag being requested, OR emitted
//! unconditionally when the furniture list is empty (an empty list means
//! "use the defaults for this room type"). Kitchen pieces and the generic
//! table ignore the gating entirely.

use crate::extractor::{AttributeRecord, FurnitureTag, RoomType};
use crate::scene::Primitive;

use super::palette::{
    self, CHAIR_BLACK, FURNITURE_BROWN, FURNITURE_GRAY, FURNITURE_WHITE, MATTRESS_WHITE,
    MODERN_TABLE,
};

/// Append the furniture silhouettes for the record's room type.
pub fn add_furniture(primitives: &mut Vec<Primitive>, record: &AttributeRecord) {
    let primary = palette::primary_furniture_color(record);
    let modern = palette::is_modern(record);
    let wants = |item: FurnitureTag| {
        record.has_furniture(item) || record.furniture_items.is_empty()
    };

    match record.room_type {
        RoomType::LivingRoom => {
            if wants(FurnitureTag::Sofa) {
                // Sofa seat and backrest.
                primitives.push(Primitive::boxed([3.0, 0.8, 1.2], primary, 0.8, [0.0, 0.4, -3.0]));
                primitives.push(Primitive::boxed([3.0, 0.8, 0.3], primary, 0.8, [0.0, 0.8, -3.6]));
            }
            if wants(FurnitureTag::Table) {
                let color = if modern { MODERN_TABLE } else { FURNITURE_BROWN };
                primitives.push(Primitive::boxed([1.5, 0.4, 1.0], color, 0.6, [0.0, 0.2, -1.5]));
            }
        }
        RoomType::Bedroom => {
            if wants(FurnitureTag::Bed) {
                // Bed base, mattress, headboard.
                primitives.push(Primitive::boxed([3.0, 0.4, 4.0], primary, 0.8, [0.0, 0.2, -2.0]));
                primitives.push(Primitive::boxed(
                    [2.8, 0.3, 3.8],
                    MATTRESS_WHITE,
                    0.7,
                    [0.0, 0.55, -2.0],
                ));
                primitives.push(Primitive::boxed([3.0, 1.2, 0.2], primary, 0.8, [0.0, 1.0, -3.9]));
            }
            if wants(FurnitureTag::Table) {
                primitives.push(Primitive::boxed([0.8, 0.8, 0.8], primary, 0.7, [-2.0, 0.4, -2.0]));
            }
        }
        RoomType::Office => {
            if wants(FurnitureTag::Desk) {
                let top_color = if modern { FURNITURE_WHITE } else { FURNITURE_BROWN };
                let leg_color = if modern { FURNITURE_GRAY } else { FURNITURE_BROWN };
                primitives.push(Primitive::boxed([2.5, 0.1, 1.2], top_color, 0.6, [0.0, 0.75, -3.0]));
                for (x, z) in [(-1.2, -3.5), (1.2, -3.5), (-1.2, -2.5), (1.2, -2.5)] {
                    primitives.push(Primitive::boxed([0.1, 1.5, 0.1], leg_color, 0.6, [x, 0.0, z]));
                }
            }
            if wants(FurnitureTag::Chair) {
                primitives.push(Primitive::boxed([0.8, 0.1, 0.8], CHAIR_BLACK, 0.7, [0.0, 0.5, -2.0]));
                primitives.push(Primitive::boxed([0.8, 1.0, 0.1], CHAIR_BLACK, 0.7, [0.0, 1.0, -2.4]));
            }
        }
        RoomType::Kitchen => {
            // Counter, base cabinets, upper cabinets; always all three.
            let counter_color = if modern { FURNITURE_WHITE } else { FURNITURE_BROWN };
            primitives.push(Primitive::boxed([5.0, 1.0, 1.0], counter_color, 0.6, [0.0, 0.5, -4.0]));
            primitives.push(Primitive::boxed([5.0, 1.0, 0.6], primary, 0.7, [0.0, 0.0, -4.2]));
            primitives.push(Primitive::boxed([5.0, 1.5, 0.6], primary, 0.7, [0.0, 3.0, -4.2]));
        }
        RoomType::Bathroom | RoomType::DiningRoom | RoomType::Generic => {
            primitives.push(Primitive::boxed([2.0, 0.1, 1.0], primary, 0.7, [0.0, 0.75, -2.0]));
            if wants(FurnitureTag::Chair) {
                primitives.push(Primitive::boxed([0.6, 0.1, 0.6], primary, 0.7, [-1.0, 0.5, -2.0]));
                primitives.push(Primitive::boxed([0.6, 0.8, 0.1], primary, 0.7, [-1.0, 0.9, -2.3]));
            }
        }
    }

    // Shelf unit is independent of the room type: body plus two divider
    // slats against the back wall.
    if record.has_furniture(FurnitureTag::Shelf) || record.has_furniture(FurnitureTag::Cabinet) {
        primitives.push(Primitive::boxed([2.0, 2.0, 0.5], primary, 0.7, [3.0, 1.0, -4.7]));
        primitives.push(Primitive::boxed([2.0, 0.05, 0.5], primary, 0.7, [3.0, 0.5, -4.7]));
        primitives.push(Primitive::boxed([2.0, 0.05, 0.5], primary, 0.7, [3.0, 1.5, -4.7]));
    }
}
