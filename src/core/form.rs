//! Pending form state for a new record.

use crate::errors::{AppError, AppResult};
use crate::models::record::MAX_IMAGES;
use crate::models::{DataUri, Priority, Record, Status};

/// Everything the user has entered but not yet submitted.
///
/// Text fields are trimmed on submission. `description` is required, the
/// other fields are optional and stored as empty strings when left blank.
#[derive(Debug, Clone)]
pub struct FormDraft {
    pub description: String,
    pub room: String,
    pub service: String,
    pub priority: Priority,
    pub assign_to: String,
    pub date: String,
    pub comments: String,
    status: Status,
    images: Vec<DataUri>,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            room: String::new(),
            service: String::new(),
            priority: Priority::Critical,
            assign_to: String::new(),
            date: String::new(),
            comments: String::new(),
            status: Status::Pending,
            images: Vec::new(),
        }
    }
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// One tap on the status toggle.
    pub fn toggle_status(&mut self) -> Status {
        self.status = self.status.advance();
        self.status
    }

    pub fn images(&self) -> &[DataUri] {
        &self.images
    }

    /// Replace the pending photos with a new selection (at most four kept).
    pub fn attach_images(&mut self, images: Vec<DataUri>) {
        self.images = images;
        self.images.truncate(MAX_IMAGES);
    }

    /// Back to a blank form: status Pending, priority 1, no photos.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn into_record(self, id: i64) -> AppResult<Record> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(AppError::InvalidField {
                field: "description",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Record {
            id,
            description,
            room: self.room.trim().to_string(),
            service: self.service.trim().to_string(),
            priority: self.priority.code().to_string(),
            assign_to: self.assign_to.trim().to_string(),
            date: self.date.trim().to_string(),
            comments: self.comments.trim().to_string(),
            status: self.status,
            images: self.images,
        })
    }
}
