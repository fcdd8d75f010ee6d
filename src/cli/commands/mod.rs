pub mod add;
pub mod config;
pub mod edit;
pub mod export;
pub mod filters;
pub mod init;
pub mod list;
pub mod log;
pub mod status;

use crate::config::Config;
use crate::core::store::RecordStore;
use crate::db::blob::SqliteBlobStore;
use crate::errors::AppResult;

/// Open the configured database and load the record list.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteBlobStore>> {
    let backend = SqliteBlobStore::open(&cfg.database)?;
    Ok(RecordStore::load(backend, &cfg.storage_key))
}
