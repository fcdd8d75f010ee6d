use super::{DataUri, Priority, Status, priority_label};
use serde::{Deserialize, Serialize};

/// Hard cap on photos attached to a single record.
pub const MAX_IMAGES: usize = 4;

/// One punch-list entry.
///
/// Field names follow the persisted blob layout (`assignTo` in camelCase),
/// so an existing list stored by the browser tool loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub priority: String, // "1".."4"
    #[serde(default)]
    pub assign_to: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub images: Vec<DataUri>,
}

impl Record {
    pub fn priority(&self) -> Option<Priority> {
        Priority::from_code(&self.priority)
    }

    pub fn priority_label(&self) -> &'static str {
        priority_label(&self.priority)
    }

    pub fn photo_count(&self) -> usize {
        self.images.len()
    }
}
