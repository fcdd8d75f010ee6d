mod common;
use common::{temp_dir_for, write_png};
use punchlist::core::capture::{capture, encode_bytes};
use punchlist::core::form::FormDraft;
use punchlist::models::DataUri;
use std::fs;
use std::sync::Mutex;

#[test]
fn test_capture_keeps_at_most_four() {
    let dir = temp_dir_for("capture_seven");
    let files: Vec<_> = (0..7)
        .map(|i| write_png(&dir, &format!("photo{i}"), [i * 30, 0, 0]))
        .collect();

    let ready = Mutex::new(Vec::new());
    let images = capture(&files, |img| ready.lock().unwrap().push(img.index));

    assert_eq!(images.len(), 4);
    let mut seen = ready.into_inner().unwrap();
    seen.sort();
    assert_eq!(seen, vec![0, 1, 2, 3]);
}

#[test]
fn test_capture_preserves_selection_order() {
    let dir = temp_dir_for("capture_order");
    let files: Vec<_> = [[255, 0, 0], [0, 255, 0], [0, 0, 255]]
        .iter()
        .enumerate()
        .map(|(i, rgb)| write_png(&dir, &format!("c{i}"), *rgb))
        .collect();

    let images = capture(&files, |_| {});

    let expected: Vec<DataUri> = files
        .iter()
        .map(|f| encode_bytes(&fs::read(f).unwrap()).unwrap())
        .collect();
    assert_eq!(images, expected);
}

#[test]
fn test_capture_drops_undecodable_files() {
    let dir = temp_dir_for("capture_corrupt");
    let good = write_png(&dir, "good", [10, 20, 30]);
    let corrupt = dir.join("corrupt.jpg");
    fs::write(&corrupt, b"definitely not a jpeg").unwrap();
    let missing = dir.join("missing.png");

    let calls = Mutex::new(0);
    let images = capture(&[corrupt, good, missing], |_| *calls.lock().unwrap() += 1);

    assert_eq!(images.len(), 1);
    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(images[0].mime(), Some("image/png"));
    assert!(images[0].as_str().starts_with("data:image/png;base64,"));
}

#[test]
fn test_data_uri_decodes_to_original_bytes() {
    let dir = temp_dir_for("capture_bytes");
    let path = write_png(&dir, "px", [1, 2, 3]);
    let bytes = fs::read(&path).unwrap();

    let uri = encode_bytes(&bytes).expect("png is accepted");

    assert_eq!(uri.decode().unwrap(), bytes);
    assert!(DataUri::from("no comma".to_string()).decode().is_err());
}

#[test]
fn test_form_attach_caps_images() {
    let uri = DataUri::encode("image/png", b"x");
    let mut draft = FormDraft::new();

    draft.attach_images(vec![uri.clone(); 6]);

    assert_eq!(draft.images().len(), 4);
}
