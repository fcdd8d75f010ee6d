#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use punchlist::core::store::RecordStore;
use punchlist::db::blob::{MemoryBlobStore, SqliteBlobStore};
use punchlist::models::{Record, Status};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const KEY: &str = "punchlist";

pub fn punch() -> Command {
    cargo_bin_cmd!("punchlist")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlist.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir_for(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("punchlist_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a small solid-colour PNG and return its path
pub fn write_png(dir: &PathBuf, name: &str, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(format!("{name}.png"));
    image::RgbImage::from_pixel(16, 12, image::Rgb(rgb))
        .save(&path)
        .expect("write png");
    path
}

pub fn memory_store() -> RecordStore<MemoryBlobStore> {
    RecordStore::load(MemoryBlobStore::new(), KEY)
}

pub fn sqlite_store(db_path: &str) -> RecordStore<SqliteBlobStore> {
    RecordStore::load(SqliteBlobStore::open(db_path).expect("open db"), KEY)
}

pub fn record(id: i64, service: &str, priority: &str, assign_to: &str) -> Record {
    Record {
        id,
        description: format!("Item {id}"),
        room: "101".to_string(),
        service: service.to_string(),
        priority: priority.to_string(),
        assign_to: assign_to.to_string(),
        date: "2025-06-30".to_string(),
        comments: String::new(),
        status: Status::Pending,
        images: Vec::new(),
    }
}
