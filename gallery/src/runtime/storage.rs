use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::{BaseDirs, UserDirs};
use log::warn;

use super::settings::GallerySettings;
use crate::core::error::{GalleryError, Result};

const APP_DIR: &str = "Gallery";
const SETTINGS_FILE: &str = "settings.json";

pub fn config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|base| base.config_dir().join(APP_DIR))
}

/// `<Pictures>/Gallery`, falling back to `~/Gallery/Images` and finally the
/// working directory.
pub fn default_images_dir() -> String {
    let primary_path = UserDirs::new().and_then(|ud| {
        ud.picture_dir().map(|p| p.to_path_buf().join(APP_DIR))
    });

    let fallback_path = BaseDirs::new()
        .map(|bd| bd.home_dir().to_path_buf().join(APP_DIR).join("Images"));

    primary_path
        .or(fallback_path)
        .unwrap_or_else(|| {
            warn!("Could not determine an images directory; using cwd");
            PathBuf::from(".")
        })
        .to_string_lossy()
        .into_owned()
}

pub fn settings_path(storage_dir: &Path) -> PathBuf {
    storage_dir.join(SETTINGS_FILE)
}

pub fn save_settings(
    storage_dir: &Path,
    settings: &GallerySettings,
) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| GalleryError::Settings(e.to_string()))?;
    let path = settings_path(storage_dir);
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(&path, json)?;
    Ok(path)
}

pub fn load_settings(storage_dir: &Path) -> Result<GallerySettings> {
    let path = settings_path(storage_dir);
    let json = fs::read_to_string(&path)?;
    serde_json::from_str::<GallerySettings>(&json).map_err(|e| {
        GalleryError::Settings(format!("{}: {}", path.display(), e))
    })
}

pub fn load_settings_if_exists(
    storage_dir: &Path,
) -> Result<Option<GallerySettings>> {
    match load_settings(storage_dir) {
        Ok(settings) => Ok(Some(settings)),
        Err(GalleryError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("gallery-storage-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    #[serial]
    fn missing_settings_are_none() {
        let dir = scratch_dir();
        assert_eq!(load_settings_if_exists(&dir).unwrap(), None);
    }

    #[test]
    #[serial]
    fn settings_round_trip_through_disk() {
        let dir = scratch_dir();
        let settings = GallerySettings {
            images_dir: "/tmp/gallery-images".to_string(),
            seed: Some(99),
            ..GallerySettings::default()
        };

        let path = save_settings(&dir, &settings).unwrap();
        assert!(path.ends_with(SETTINGS_FILE));
        assert_eq!(load_settings_if_exists(&dir).unwrap(), Some(settings));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    #[serial]
    fn corrupt_settings_are_an_error() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(settings_path(&dir), "{ not json").unwrap();

        let err = load_settings_if_exists(&dir).unwrap_err();
        assert!(matches!(err, GalleryError::Settings(_)));

        let _ = fs::remove_dir_all(&dir);
    }
}
