//! Viewer boundary.
//!
//! Rendering is an external collaborator: the crate hands it a freshly
//! composed scene and a camera pose, and the viewer owns navigation and the
//! redraw loop. A renderer must discard every primitive of its previous
//! scene before adopting a new one; scenes are replaced wholesale, never
//! patched.

use serde::{Deserialize, Serialize};

use crate::scene::{CameraPose, Scene};

/// Contract for a scene renderer.
pub trait SceneRenderer {
    /// Adopt a new scene, dropping all previously adopted primitives first.
    fn render(&mut self, scene: &Scene, camera: &CameraPose);

    /// Tear down the renderer and release its resources.
    fn dispose(&mut self);
}

/// Navigation clamps for an orbiting viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSettings {
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar_angle: f32,
    pub damping_factor: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            min_distance: 3.0,
            max_distance: 10.0,
            max_polar_angle: std::f32::consts::FRAC_PI_2,
            damping_factor: 0.05,
        }
    }
}
