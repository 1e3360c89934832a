//! Deterministic scene composition from extracted attributes.
//!
//! `compose` is a pure function: the same attribute record always produces
//! the same scene, primitive for primitive, and it never fails. The optional
//! image summary is accepted for signature compatibility but does not
//! currently influence the geometry or materials.

mod furniture;
pub(crate) mod palette;

use std::f32::consts::FRAC_PI_2;

use crate::extractor::AttributeRecord;
use crate::imaging::ImageSummary;
use crate::scene::{CameraPose, Light, Primitive, Scene};

use palette::LIGHT_WHITE;

/// Side length of the square floor plane.
const FLOOR_SIZE: f32 = 10.0;
/// Wall planes are floor-width wide and this tall.
const WALL_HEIGHT: f32 = 4.0;

/// Default camera pose for a freshly composed scene.
pub const DEFAULT_CAMERA: CameraPose = CameraPose {
    position: [5.0, 3.0, 5.0],
    look_at: [0.0, 1.0, 0.0],
};

/// Compose a scene from an attribute record and an optional image summary.
pub fn compose(record: &AttributeRecord, _image: Option<&ImageSummary>) -> Scene {
    let mut primitives = Vec::new();

    // Floor, lying flat just below the origin.
    primitives.push(
        Primitive::plane(
            [FLOOR_SIZE, FLOOR_SIZE],
            palette::floor_color(record),
            0.8,
            [0.0, -0.1, 0.0],
        )
        .rotated([-FRAC_PI_2, 0.0, 0.0]),
    );

    // Back, left and right walls; the front stays open so the default camera
    // can see into the room.
    let wall = palette::wall_color(record);
    let half = FLOOR_SIZE / 2.0;
    primitives.push(Primitive::plane(
        [FLOOR_SIZE, WALL_HEIGHT],
        wall,
        0.9,
        [0.0, 2.0, -half],
    ));
    primitives.push(
        Primitive::plane([FLOOR_SIZE, WALL_HEIGHT], wall, 0.9, [-half, 2.0, 0.0])
            .rotated([0.0, FRAC_PI_2, 0.0]),
    );
    primitives.push(
        Primitive::plane([FLOOR_SIZE, WALL_HEIGHT], wall, 0.9, [half, 2.0, 0.0])
            .rotated([0.0, -FRAC_PI_2, 0.0]),
    );

    furniture::add_furniture(&mut primitives, record);

    let lights = vec![
        Light::Ambient {
            color: LIGHT_WHITE,
            intensity: 0.5,
        },
        Light::Directional {
            color: LIGHT_WHITE,
            intensity: 0.8,
            position: [5.0, 5.0, 5.0],
        },
    ];

    Scene {
        primitives,
        lights,
        camera: DEFAULT_CAMERA,
    }
}
