use std::env;
use std::fs;
use std::path::PathBuf;

/// A fresh, empty directory under the system temp dir, unique per test
/// binary and label.
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!(
        "gallery-it-{}-{}",
        label,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
