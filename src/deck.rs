use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use thiserror::Error;

use crate::config::SlideEntry;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No image files found in directory: {0}")]
    NoImages(PathBuf),

    #[error("Slide {0} listed in config does not exist")]
    MissingSlide(PathBuf),
}

/// A slide as found on disk, before any texture is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSource {
    pub path: PathBuf,
    /// The slide heading, if the deck provides one.
    pub title: Option<String>,
    /// EXIF orientation (1 = upright).
    pub orientation: u16,
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
        .unwrap_or(false)
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "jpg" | "jpeg"))
        .unwrap_or(false)
}

/// Lists the image files of `dir_path`, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, DeckError> {
    let read_err = |source| DeckError::ReadDir {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(DeckError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

#[derive(Debug, Default, PartialEq)]
struct ExifMeta {
    description: Option<String>,
    orientation: Option<u16>,
}

fn read_exif(path: &Path) -> ExifMeta {
    // EXIF is only read reliably from JPEG containers
    if !is_jpeg(path) {
        return ExifMeta::default();
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not open image for EXIF");
            return ExifMeta::default();
        }
    };

    let exif = match Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return ExifMeta::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read EXIF data");
            return ExifMeta::default();
        }
    };

    let orientation = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .and_then(|value| u16::try_from(value).ok());

    let description = exif
        .get_field(Tag::ImageDescription, In::PRIMARY)
        .and_then(|field| match &field.value {
            Value::Ascii(parts) => parts
                .first()
                .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string()),
            _ => None,
        });

    ExifMeta {
        description: non_blank(description),
        orientation,
    }
}

fn non_blank(title: Option<String>) -> Option<String> {
    title.filter(|t| !t.trim().is_empty())
}

fn source_for(path: PathBuf, configured_title: Option<String>) -> SlideSource {
    let exif = read_exif(&path);
    SlideSource {
        title: non_blank(configured_title).or(exif.description),
        orientation: exif.orientation.unwrap_or(1),
        path,
    }
}

/// Discovers the slide sequence of a deck directory.
///
/// With configured entries, their order and titles win and every listed
/// file must exist. Otherwise all images of the directory are used in name
/// order and titles come from EXIF metadata only.
pub fn discover(dir: &Path, entries: &[SlideEntry]) -> Result<Vec<SlideSource>, DeckError> {
    let slides = if entries.is_empty() {
        load_sorted_image_paths(dir)?
            .into_iter()
            .map(|path| source_for(path, None))
            .collect::<Vec<_>>()
    } else {
        let mut slides = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = dir.join(&entry.file);
            if !path.is_file() {
                return Err(DeckError::MissingSlide(path));
            }
            slides.push(source_for(path, entry.title.clone()));
        }
        slides
    };

    tracing::info!(dir = %dir.display(), count = slides.len(), "discovered slides");
    Ok(slides)
}
