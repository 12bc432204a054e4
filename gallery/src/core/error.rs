use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = GalleryError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// Navigation to a name the registry does not know.
    #[error("no sketch named `{0}`")]
    SketchNotFound(String),

    #[error("duplicate sketch registration: {0}")]
    DuplicateSketch(String),

    #[error("category '{category}' references unknown sketch '{sketch}'")]
    UnknownCategorySketch { category: String, sketch: String },

    /// A fault raised inside a sketch's own `reset` or `draw`.
    #[error("sketch `{sketch}` failed: {message}")]
    SketchDefect { sketch: String, message: String },

    #[error("failed to export {}: {message}", path.display())]
    Export { path: PathBuf, message: String },

    #[error("settings error: {0}")]
    Settings(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl GalleryError {
    pub fn export(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Export {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Navigation errors are surfaced to the user and never retried.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::SketchNotFound(_))
    }
}
