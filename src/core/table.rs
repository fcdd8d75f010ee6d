//! Table renderer: projects records into display rows.

use crate::core::filter::{FilterOptions, derive_options};
use crate::models::{Priority, Record, Status};

pub const HEADERS: [&str; 9] = [
    "#",
    "Room",
    "Service",
    "Priority",
    "Assign To",
    "Status",
    "Description",
    "Photos",
    "Edit",
];

pub const EDIT_ICON: &str = "✏️";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position in the rendered list, not a record id.
    pub number: usize,
    pub id: i64,
    pub room: String,
    pub service: String,
    pub priority: Option<Priority>,
    pub priority_label: String,
    pub assign_to: String,
    pub status: Status,
    pub description: String,
    pub photos: usize,
}

impl TableRow {
    fn from_record(number: usize, record: &Record) -> Self {
        Self {
            number,
            id: record.id,
            room: record.room.clone(),
            service: record.service.clone(),
            priority: record.priority(),
            priority_label: record.priority_label().to_string(),
            assign_to: record.assign_to.clone(),
            status: record.status,
            description: record.description.clone(),
            photos: record.photo_count(),
        }
    }

    pub fn photo_cell(&self) -> String {
        format!("{} 📸", self.photos)
    }

    /// Cells in [`HEADERS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.room.clone(),
            self.service.clone(),
            self.priority_label.clone(),
            self.assign_to.clone(),
            self.status.to_string(),
            self.description.clone(),
            self.photo_cell(),
            format!("{EDIT_ICON} {}", self.id),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub rows: Vec<TableRow>,
    /// Options derived from the full store, never from `rows`.
    pub filters: FilterOptions,
}

/// Render `subset` (or the whole store when `None`) and refresh the filter
/// options from the whole store.
pub fn render(store: &[Record], subset: Option<&[&Record]>) -> RenderedTable {
    let rows = match subset {
        Some(selected) => selected
            .iter()
            .enumerate()
            .map(|(i, r)| TableRow::from_record(i + 1, r))
            .collect(),
        None => store
            .iter()
            .enumerate()
            .map(|(i, r)| TableRow::from_record(i + 1, r))
            .collect(),
    };

    RenderedTable {
        rows,
        filters: derive_options(store),
    }
}
