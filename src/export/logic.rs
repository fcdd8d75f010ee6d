// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::export::report::{ExportSummary, build_report, page_count_for, report_file_name};
use crate::models::Record;
use crate::ui::messages::{info, warning};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the PDF report for `records` into `dir`.
    ///
    /// The file is named `Punchlist_Report_Page<N>.pdf`; an existing file is
    /// replaced only with `force` or after confirmation.
    pub fn export(
        records: &[Record],
        dir: &Path,
        force: bool,
        image_max_side: u32,
    ) -> AppResult<ExportSummary> {
        fs::create_dir_all(dir)?;

        let path = dir.join(report_file_name(page_count_for(records.len())));
        ensure_writable(&path, force)?;

        if records.is_empty() {
            warning("No punch-list items found: writing a placeholder page.");
        }

        info(format!("Exporting to PDF: {}", path.display()));

        let doc = build_report(records, image_max_side);

        let mut f = File::create(&path)?;
        f.write_all(&doc.bytes)?;

        notify_export_success("PDF", &path);

        Ok(ExportSummary {
            path,
            pages: doc.pages,
            skipped_images: doc.skipped_images,
        })
    }
}
