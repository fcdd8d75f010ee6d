//! Report exporter: one page per record.

use crate::export::layout::{empty_page, record_page};
use crate::export::pdf::PdfManager;
use crate::export::photo::EmbeddedImage;
use crate::models::Record;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// Rendered report, not yet written to disk.
pub struct ReportDocument {
    pub bytes: Vec<u8>,
    pub pages: usize,
    /// Stored photos that could not be decoded and were left out.
    pub skipped_images: usize,
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub pages: usize,
    pub skipped_images: usize,
}

/// Output file name, embedding the page count.
pub fn report_file_name(pages: usize) -> String {
    format!("Punchlist_Report_Page{pages}.pdf")
}

/// Page count of the report for `record_count` records: one per record, or
/// a single placeholder page when there are none.
pub fn page_count_for(record_count: usize) -> usize {
    record_count.max(1)
}

/// Render every record, in list order, into a PDF.
pub fn build_report(records: &[Record], image_max_side: u32) -> ReportDocument {
    let mut pdf = PdfManager::new();
    let mut skipped_images = 0;

    if records.is_empty() {
        let mut canvas = pdf.begin_page();
        pdf.draw_layout(&mut canvas, &empty_page(), &[]);
        pdf.finish_page(canvas);
    }

    for (i, record) in records.iter().enumerate() {
        let mut images = Vec::with_capacity(record.images.len());
        for (j, uri) in record.images.iter().enumerate() {
            match EmbeddedImage::from_data_uri(uri, image_max_side) {
                Ok(img) => images.push(img),
                Err(e) => {
                    skipped_images += 1;
                    warning(format!("Item #{} photo {} skipped: {e}", i + 1, j + 1));
                }
            }
        }

        let layout = record_page(record, i + 1, images.len());

        let mut canvas = pdf.begin_page();
        pdf.draw_layout(&mut canvas, &layout, &images);
        pdf.finish_page(canvas);
    }

    let pages = pdf.page_count();
    ReportDocument {
        bytes: pdf.finish(),
        pages,
        skipped_images,
    }
}
