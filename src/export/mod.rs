// src/export/mod.rs

mod fs_utils;
pub mod layout;
pub mod logic;
pub mod pdf;
pub mod photo;
pub mod report;

pub use logic::ExportLogic;
pub use report::{ExportSummary, ReportDocument, build_report, report_file_name};

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
