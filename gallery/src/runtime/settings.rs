use serde::{Deserialize, Serialize};

use super::storage;

pub const SETTINGS_VERSION: &str = "1";

/// Persisted user preferences. Command-line flags take precedence.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GallerySettings {
    pub version: String,
    /// Where exported images are written.
    pub images_dir: String,
    /// Fixed seed for every reset; `None` draws a fresh seed each time.
    pub seed: Option<u64>,
    /// Replaces every descriptor's fps when set.
    pub fps_override: Option<f32>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            images_dir: storage::default_images_dir(),
            seed: None,
            fps_override: None,
        }
    }
}

impl GallerySettings {
    pub fn effective_fps(&self, descriptor_fps: f32) -> f32 {
        self.fps_override
            .filter(|fps| *fps > 0.0)
            .unwrap_or(descriptor_fps)
    }
}
