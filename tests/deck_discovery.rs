use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};

use slidenav::config::SlideEntry;
use slidenav::deck::{self, DeckError};
use tempfile::TempDir;

fn deck_with(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        fs::write(dir.path().join(file), b"not really an image").unwrap();
    }
    dir
}

/// Smallest JPEG the EXIF reader accepts: SOI, one APP1 segment, EOI.
fn jpeg_with_exif(description: &str, orientation: u16) -> Vec<u8> {
    let description = Field {
        tag: Tag::ImageDescription,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![description.as_bytes().to_vec()]),
    };
    let orientation = Field {
        tag: Tag::Orientation,
        ifd_num: In::PRIMARY,
        value: Value::Short(vec![orientation]),
    };
    let mut writer = Writer::new();
    writer.push_field(&description);
    writer.push_field(&orientation);
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).unwrap();
    let tiff = tiff.into_inner();

    let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

#[test]
fn lists_images_sorted_by_name() {
    let dir = deck_with(&["03-end.png", "01-intro.PNG", "02-body.gif", "notes.txt"]);
    fs::create_dir(dir.path().join("assets.png")).unwrap();

    let paths = deck::load_sorted_image_paths(dir.path()).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["01-intro.PNG", "02-body.gif", "03-end.png"]);
}

#[test]
fn directory_without_images_is_an_error() {
    let dir = deck_with(&["README.md"]);
    let err = deck::load_sorted_image_paths(dir.path()).unwrap_err();
    assert!(matches!(err, DeckError::NoImages(_)));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = deck::discover(&dir.path().join("nope"), &[]).unwrap_err();
    assert!(matches!(err, DeckError::ReadDir { .. }));
}

#[test]
fn discovered_slides_default_to_upright_and_untitled() {
    let dir = deck_with(&["a.png", "b.bmp"]);
    let slides = deck::discover(dir.path(), &[]).unwrap();

    assert_eq!(slides.len(), 2);
    assert!(slides.iter().all(|s| s.title.is_none() && s.orientation == 1));
}

#[test]
fn configured_entries_define_order_and_titles() {
    let dir = deck_with(&["a.png", "b.png", "c.png"]);
    let entries = vec![
        SlideEntry {
            file: PathBuf::from("c.png"),
            title: Some("Closing".to_string()),
        },
        SlideEntry {
            file: PathBuf::from("a.png"),
            title: Some("   ".to_string()),
        },
    ];

    let slides = deck::discover(dir.path(), &entries).unwrap();

    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].path, dir.path().join("c.png"));
    assert_eq!(slides[0].title.as_deref(), Some("Closing"));
    assert_eq!(slides[1].path, dir.path().join("a.png"));
    assert_eq!(slides[1].title, None);
}

#[test]
fn configured_entry_must_exist() {
    let dir = deck_with(&["a.png"]);
    let entries = vec![SlideEntry {
        file: PathBuf::from("gone.png"),
        title: None,
    }];

    let err = deck::discover(dir.path(), &entries).unwrap_err();
    assert!(matches!(err, DeckError::MissingSlide(path) if path.ends_with("gone.png")));
}

#[test]
fn jpeg_metadata_supplies_title_and_orientation() {
    let dir = deck_with(&["b.png"]);
    fs::write(dir.path().join("a.jpg"), jpeg_with_exif("  Ownership  ", 6)).unwrap();

    let slides = deck::discover(dir.path(), &[]).unwrap();

    assert_eq!(slides[0].path, dir.path().join("a.jpg"));
    assert_eq!(slides[0].title.as_deref(), Some("Ownership"));
    assert_eq!(slides[0].orientation, 6);
    assert_eq!(slides[1].title, None);
    assert_eq!(slides[1].orientation, 1);
}

#[test]
fn configured_title_beats_jpeg_description() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.jpg"), jpeg_with_exif("From the camera", 3)).unwrap();
    let entries = vec![SlideEntry {
        file: PathBuf::from("a.jpg"),
        title: Some("Borrowing".to_string()),
    }];

    let slides = deck::discover(dir.path(), &entries).unwrap();

    assert_eq!(slides[0].title.as_deref(), Some("Borrowing"));
    assert_eq!(slides[0].orientation, 3);
}
