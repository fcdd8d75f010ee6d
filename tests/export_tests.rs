mod common;
use common::{record, temp_dir_for, write_png};
use punchlist::core::capture::capture;
use punchlist::export::layout::{
    EMPTY_REPORT_TEXT, FIELDS_Y, IMAGE_GAP, IMAGE_H, IMAGE_W, LINE_PITCH, MARGIN_X, image_grid,
    record_page,
};
use punchlist::export::{ExportLogic, build_report, report_file_name};
use punchlist::models::{DataUri, Record, Status};
use std::fs;

fn records(n: i64) -> Vec<Record> {
    (1..=n).map(|i| record(i, "HVAC", "2", "Ana")).collect()
}

#[test]
fn test_one_page_per_record() {
    let doc = build_report(&records(3), 800);

    assert_eq!(doc.pages, 3);
    assert_eq!(doc.skipped_images, 0);
    assert!(doc.bytes.starts_with(b"%PDF"));
}

#[test]
fn test_empty_report_has_placeholder_page() {
    let doc = build_report(&[], 800);

    assert_eq!(doc.pages, 1);
    assert!(doc.bytes.starts_with(b"%PDF"));
    assert!(
        doc.bytes
            .windows(EMPTY_REPORT_TEXT.len())
            .any(|w| w == EMPTY_REPORT_TEXT.as_bytes())
    );
}

#[test]
fn test_report_file_name_has_page_count() {
    assert_eq!(report_file_name(3), "Punchlist_Report_Page3.pdf");
}

#[test]
fn test_page_layout_fields_in_order() {
    let mut r = record(1, "HVAC", "2", "Ana");
    r.status = Status::Fix;
    r.comments = "Check again".to_string();

    let page = record_page(&r, 2, 0);

    let texts: Vec<&str> = page.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Punchlist Item #2",
            "Description: Item 1",
            "Room: 101",
            "Service: HVAC",
            "Priority: 2 - Serious",
            "Assign To: Ana",
            "Date: 2025-06-30",
            "Status: Fix",
            "Comments: Check again",
        ]
    );
    assert_eq!(page.texts[1].y, FIELDS_Y);
    assert_eq!(page.texts[2].y, FIELDS_Y + LINE_PITCH);
    assert!(page.swatch.is_some());
    assert!(page.image_slots.is_empty());
}

#[test]
fn test_long_values_wrap_onto_extra_lines() {
    let mut r = record(1, "HVAC", "2", "Ana");
    r.description = "word ".repeat(40);

    let page = record_page(&r, 1, 0);

    assert!(page.texts.len() > 9);
    assert!(page.texts[2].text.starts_with("word"));
    assert_eq!(page.texts[2].y, FIELDS_Y + LINE_PITCH);
}

#[test]
fn test_photos_grid_three_per_row() {
    let r = record(1, "HVAC", "9", "Ana");

    let page = record_page(&r, 1, 4);

    assert_eq!(page.texts.last().unwrap().text, "Photos:");
    assert!(page.swatch.is_none());
    let slots = &page.image_slots;
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0].x, MARGIN_X);
    assert_eq!(slots[1].x, MARGIN_X + IMAGE_W + IMAGE_GAP);
    assert_eq!(slots[2].y, slots[0].y);
    assert_eq!(slots[3].x, MARGIN_X);
    assert_eq!(slots[3].y, slots[0].y + IMAGE_H + IMAGE_GAP);
    assert_eq!((slots[3].w, slots[3].h), (IMAGE_W, IMAGE_H));
}

#[test]
fn test_image_grid_empty() {
    assert!(image_grid(0, 100.0).is_empty());
}

#[test]
fn test_report_embeds_photos_and_skips_broken_ones() {
    let dir = temp_dir_for("export_photos");
    let files = vec![
        write_png(&dir, "a", [200, 0, 0]),
        write_png(&dir, "b", [0, 200, 0]),
    ];

    let mut r = record(1, "HVAC", "1", "Ana");
    r.images = capture(&files, |_| {});
    r.images.push(DataUri::from("data:image/png;base64,AAAA".to_string()));

    let doc = build_report(&[r], 8);

    assert_eq!(doc.pages, 1);
    assert_eq!(doc.skipped_images, 1);
}

#[test]
fn test_export_writes_named_file() {
    let dir = temp_dir_for("export_named");

    let summary = ExportLogic::export(&records(3), &dir, true, 800).expect("export");

    assert_eq!(summary.pages, 3);
    assert_eq!(summary.path, dir.join("Punchlist_Report_Page3.pdf"));
    let bytes = fs::read(&summary.path).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}
