//! Declarative scene graph handed to the viewer.
//!
//! A `Scene` is a flat list of primitives plus light descriptors and a
//! suggested camera pose. It is regenerated wholesale on every composition;
//! primitives carry no identity across regenerations, so a viewer must drop
//! its previous primitive set entirely before adopting a new scene.

use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Geometry of a single primitive. Box sizes are width/height/depth,
/// plane sizes are width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "size", rename_all = "camelCase")]
pub enum Shape {
    Box([f32; 3]),
    Plane([f32; 2]),
}

/// One renderable primitive: geometry, flat standard material and transform.
/// Rotation is Euler XYZ in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primitive {
    #[serde(flatten)]
    pub shape: Shape,
    pub color: Rgb,
    pub roughness: f32,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl Primitive {
    pub fn boxed(size: [f32; 3], color: Rgb, roughness: f32, position: [f32; 3]) -> Self {
        Self {
            shape: Shape::Box(size),
            color,
            roughness,
            position,
            rotation: [0.0; 3],
        }
    }

    pub fn plane(size: [f32; 2], color: Rgb, roughness: f32, position: [f32; 3]) -> Self {
        Self {
            shape: Shape::Plane(size),
            color,
            roughness,
            position,
            rotation: [0.0; 3],
        }
    }

    pub fn rotated(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Light descriptors emitted alongside the primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Light {
    Ambient { color: Rgb, intensity: f32 },
    Directional { color: Rgb, intensity: f32, position: [f32; 3] },
}

/// Suggested camera placement for a freshly composed scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPose {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub lights: Vec<Light>,
    pub camera: CameraPose,
}
