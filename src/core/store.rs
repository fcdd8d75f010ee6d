//! Record store: the ordered list of punch-list records, persisted as one
//! serialized blob in a key-value slot.

use crate::core::form::FormDraft;
use crate::db::blob::BlobStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, Status};
use chrono::Utc;

pub struct RecordStore<S: BlobStore> {
    backend: S,
    key: String,
    records: Vec<Record>,
}

impl<S: BlobStore> RecordStore<S> {
    /// Load the list stored under `key`.
    ///
    /// Never fails: a missing slot, a read error or an unparsable blob all
    /// yield an empty list. Inside a readable list, an entry that does not
    /// parse as a record is skipped and the others are kept.
    pub fn load(backend: S, key: &str) -> Self {
        let records = match backend.get(key) {
            Ok(Some(raw)) => parse_records(&raw),
            Ok(None) | Err(_) => Vec::new(),
        };

        Self {
            backend,
            key: key.to_string(),
            records,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Creation-time id: the current epoch milliseconds, bumped past the
    /// highest existing id so two creations in the same tick stay distinct.
    pub fn next_id(&self) -> AppResult<i64> {
        let now = Utc::now().timestamp_millis();
        match self.records.iter().map(|r| r.id).max() {
            Some(last) if last >= now => {
                last.checked_add(1).ok_or_else(|| AppError::InvalidField {
                    field: "id",
                    reason: format!("no id left after {last}"),
                })
            }
            _ => Ok(now),
        }
    }

    /// Append a record and persist the whole list.
    pub fn add(&mut self, record: Record) -> AppResult<()> {
        if self.get(record.id).is_some() {
            return Err(AppError::InvalidField {
                field: "id",
                reason: format!("{} is already in use", record.id),
            });
        }

        self.records.push(record);

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Turn a submitted form into a new record at the end of the list.
    pub fn create(&mut self, draft: FormDraft) -> AppResult<&Record> {
        let record = draft.into_record(self.next_id()?)?;
        self.add(record)?;
        Ok(&self.records[self.records.len() - 1])
    }

    /// Set the status of the first record with `id`.
    ///
    /// Returns `false` without touching the store when no record matches.
    pub fn update_status(&mut self, id: i64, status: Status) -> AppResult<bool> {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let previous = self.records[idx].status;
        self.records[idx].status = status;

        if let Err(e) = self.persist() {
            self.records[idx].status = previous;
            return Err(e);
        }
        Ok(true)
    }

    /// Advance the status of record `id` one step along the cycle.
    pub fn cycle_status(&mut self, id: i64) -> AppResult<Option<Status>> {
        let Some(current) = self.get(id).map(|r| r.status) else {
            return Ok(None);
        };

        let next = current.advance();
        self.update_status(id, next)?;
        Ok(Some(next))
    }

    /// Serialize the full list and overwrite the slot.
    pub fn persist(&mut self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.backend.put(&self.key, &blob)
    }
}

fn parse_records(raw: &str) -> Vec<Record> {
    serde_json::from_str::<Vec<serde_json::Value>>(raw)
        .map(|entries| {
            entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value::<Record>(entry).ok())
                .collect()
        })
        .unwrap_or_default()
}
