use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::info;

use super::surface::RasterImage;
use crate::core::error::{GalleryError, Result};

/// File name an exported frame of `sketch_name` is written under.
pub fn export_file_name(sketch_name: &str) -> String {
    format!("{}.png", sketch_name)
}

pub fn export_path(dir: &Path, sketch_name: &str) -> PathBuf {
    dir.join(export_file_name(sketch_name))
}

/// Encode `image` as an 8-bit RGBA PNG, creating parent directories as
/// needed. An existing file at `path` is overwritten.
pub fn write_png(path: &Path, image: &RasterImage) -> Result<()> {
    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.data.len() != expected {
        return Err(GalleryError::export(
            path,
            format!(
                "pixel buffer holds {} bytes, expected {} for {}x{}",
                image.data.len(),
                expected,
                image.width,
                image.height
            ),
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| GalleryError::export(path, e))?;
    }

    let file = File::create(path).map_err(|e| GalleryError::export(path, e))?;
    let mut encoder =
        png::Encoder::new(BufWriter::new(file), image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| GalleryError::export(path, e))?;
    writer
        .write_image_data(&image.data)
        .map_err(|e| GalleryError::export(path, e))?;
    writer.finish().map_err(|e| GalleryError::export(path, e))?;

    info!("Exported {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("gallery-export-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn export_name_follows_sketch_name() {
        assert_eq!(export_file_name("Print10"), "Print10.png");
        assert_eq!(
            export_path(Path::new("/tmp/out"), "Dragon"),
            PathBuf::from("/tmp/out/Dragon.png")
        );
    }

    #[test]
    fn writes_a_decodable_png() {
        let dir = scratch_dir("decode");
        let path = export_path(&dir.join("nested"), "tiny");
        let image = RasterImage {
            width: 2,
            height: 1,
            data: vec![255, 0, 0, 255, 0, 0, 255, 128],
        };

        write_png(&path, &image).expect("write png");

        let decoder = png::Decoder::new(std::io::BufReader::new(
            File::open(&path).expect("open png"),
        ));
        let mut reader = decoder.read_info().expect("read info");
        let mut buf = vec![0; image.data.len()];
        let info = reader.next_frame(&mut buf).expect("decode");

        assert_eq!((info.width, info.height), (2, 1));
        assert_eq!(&buf[..info.buffer_size()], image.data.as_slice());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let dir = scratch_dir("mismatch");
        let image = RasterImage {
            width: 3,
            height: 3,
            data: vec![0; 4],
        };
        let err = write_png(&export_path(&dir, "bad"), &image)
            .expect_err("short buffer must fail");
        assert!(matches!(err, GalleryError::Export { .. }));
    }
}
