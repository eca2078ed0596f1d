use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{CarouselError, Result};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Rotation needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (270 deg clockwise / 90 deg counter-clockwise)
    // Others involve flips, ignored.
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists the images of a directory, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let directory_error = |source| CarouselError::ImageDirectory {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(directory_error)? {
        let path = entry.map_err(directory_error)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(CarouselError::NoImages(dir_path.to_path_buf()));
    }
    debug!(count = paths.len(), directory = ?dir_path, "found images");
    Ok(paths)
}

/// Reads the EXIF orientation tag; 1 (upright) when absent or unreadable.
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let load_error = |reason: String| CarouselError::ImageLoad {
        path: image_path.to_path_buf(),
        reason,
    };

    let file_bytes = fs::read(image_path).map_err(|e| load_error(e.to_string()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only reliable for JPEG
    let rotation = if extension == "jpg" || extension == "jpeg" {
        Rotation::from_orientation(exif_orientation(image_path, &file_bytes))
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| load_error(e.to_string()))?;

    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!(?rotation, path = ?image_path, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| load_error(e.to_string()))?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("failed to create test file");
    }

    #[test]
    fn images_are_sorted_by_name_and_filtered() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "c.PNG");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "b.gif");
        fs::create_dir(dir.path().join("d.jpg")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.gif", "c.PNG"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "readme.md");
        assert!(matches!(
            load_sorted_image_paths(dir.path()),
            Err(CarouselError::NoImages(_))
        ));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_sorted_image_paths(&missing),
            Err(CarouselError::ImageDirectory { .. })
        ));
    }

    #[test]
    fn orientation_maps_to_rotation() {
        assert_eq!(Rotation::from_orientation(1), Rotation::None);
        assert_eq!(Rotation::from_orientation(3), Rotation::Half);
        assert_eq!(Rotation::from_orientation(6), Rotation::Clockwise);
        assert_eq!(Rotation::from_orientation(8), Rotation::CounterClockwise);
        assert_eq!(Rotation::from_orientation(2), Rotation::None);
    }

    #[test]
    fn garbage_bytes_read_as_upright() {
        assert_eq!(exif_orientation(Path::new("x.jpg"), b"not a jpeg"), 1);
    }
}
