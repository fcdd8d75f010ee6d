//! Page geometry for the report, in millimetres from the top-left corner.

use crate::models::{Priority, Record};

pub const MARGIN_X: f32 = 15.0;
pub const HEADING_Y: f32 = 20.0;
pub const HEADING_SIZE: f32 = 14.0;

pub const FIELDS_Y: f32 = 30.0;
pub const LINE_PITCH: f32 = 8.0;
pub const FIELD_SIZE: f32 = 11.0;
/// Characters per line before a field value wraps.
pub const WRAP_COLUMNS: usize = 95;

pub const PHOTOS_GAP: f32 = 4.0;
pub const PHOTOS_HEADING_SIZE: f32 = 12.0;
pub const IMAGE_W: f32 = 60.0;
pub const IMAGE_H: f32 = 45.0;
pub const IMAGE_GAP: f32 = 5.0;
pub const IMAGES_PER_ROW: usize = 3;

pub const SWATCH_X: f32 = 10.0;
pub const SWATCH_SIZE: f32 = 3.0;

pub const EMPTY_REPORT_TEXT: &str = "No punch-list items recorded.";

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSlot {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rgb: (f32, f32, f32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub texts: Vec<TextItem>,
    pub swatch: Option<Swatch>,
    pub image_slots: Vec<ImageSlot>,
}

/// Lay out the page for `record`, the `ordinal`-th (1-based) in the report.
///
/// `image_count` is the number of photos that will actually be drawn.
pub fn record_page(record: &Record, ordinal: usize, image_count: usize) -> PageLayout {
    let mut page = PageLayout::default();

    page.texts.push(TextItem {
        x: MARGIN_X,
        y: HEADING_Y,
        size: HEADING_SIZE,
        text: format!("Punchlist Item #{ordinal}"),
    });

    let priority = printable_label(record.priority_label());
    let fields: [(&str, &str); 8] = [
        ("Description:", record.description.as_str()),
        ("Room:", record.room.as_str()),
        ("Service:", record.service.as_str()),
        ("Priority:", priority.as_str()),
        ("Assign To:", record.assign_to.as_str()),
        ("Date:", record.date.as_str()),
        ("Status:", record.status.as_str()),
        ("Comments:", record.comments.as_str()),
    ];

    let mut y = FIELDS_Y;
    for (label, value) in fields {
        if label == "Priority:" {
            page.swatch = record.priority().map(|p| swatch_at(p, y));
        }

        let line = format!("{label} {value}");
        for chunk in textwrap::wrap(&line, WRAP_COLUMNS) {
            page.texts.push(TextItem {
                x: MARGIN_X,
                y,
                size: FIELD_SIZE,
                text: chunk.into_owned(),
            });
            y += LINE_PITCH;
        }
    }

    if image_count > 0 {
        y += PHOTOS_GAP;
        page.texts.push(TextItem {
            x: MARGIN_X,
            y,
            size: PHOTOS_HEADING_SIZE,
            text: "Photos:".to_string(),
        });
        y += PHOTOS_GAP;

        page.image_slots = image_grid(image_count, y);
    }

    page
}

/// Placeholder page used when there is nothing to export.
pub fn empty_page() -> PageLayout {
    PageLayout {
        texts: vec![TextItem {
            x: MARGIN_X,
            y: HEADING_Y,
            size: HEADING_SIZE,
            text: EMPTY_REPORT_TEXT.to_string(),
        }],
        ..PageLayout::default()
    }
}

/// Fixed grid, three cells per row, starting at `top`.
pub fn image_grid(count: usize, top: f32) -> Vec<ImageSlot> {
    let mut slots = Vec::with_capacity(count);
    let mut x = MARGIN_X;
    let mut y = top;

    for j in 0..count {
        if j > 0 && j % IMAGES_PER_ROW == 0 {
            y += IMAGE_H + IMAGE_GAP;
            x = MARGIN_X;
        }
        slots.push(ImageSlot {
            x,
            y,
            w: IMAGE_W,
            h: IMAGE_H,
        });
        x += IMAGE_W + IMAGE_GAP;
    }

    slots
}

fn swatch_at(priority: Priority, baseline: f32) -> Swatch {
    Swatch {
        x: SWATCH_X,
        y: baseline - SWATCH_SIZE,
        size: SWATCH_SIZE,
        rgb: priority.rgb(),
    }
}

/// Priority label without the emoji marker, which the PDF font cannot show.
fn printable_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| win_ansi_byte(*c).is_some())
        .collect::<String>()
        .replace(" ()", "")
}

/// WinAnsi byte for `c`, if the standard fonts can render it.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u32 as u8),
        _ => None,
    }
}

/// Encode text for a WinAnsi font, dropping unsupported characters.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().filter_map(win_ansi_byte).collect()
}
