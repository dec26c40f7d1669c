//! Store file access and record (de)serialization
use std::fs::{self, OpenOptions};
use std::io::Read;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single user record as stored in the JSON array.
///
/// `email` and `age` are carried as-is; only the field types are checked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: i64,
}

/// Opens the store file, creating it empty if it does not exist, and
/// returns its raw contents.
pub fn read_raw(file_name: &str) -> Result<Vec<u8>> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(file_name)
        .with_context(|| format!("Failed to open store file {file_name}"))?;

    let mut raw = Vec::new();
    file.read_to_end(&mut raw)
        .with_context(|| format!("Failed to read store file {file_name}"))?;
    Ok(raw)
}

/// Decodes raw store contents into the record sequence.
pub fn decode(raw: &[u8]) -> Result<Vec<User>> {
    serde_json::from_slice(raw).context("Store file is not a valid JSON record array")
}

/// Decodes a single record from the `--item` flag value.
pub fn decode_item(item: &str) -> Result<User> {
    serde_json::from_str(item).context("Item is not a valid JSON record")
}

/// Overwrites the store file with the full record sequence.
///
/// Not atomic: the file is truncated and rewritten in place, so an
/// interrupted write can corrupt the store. A serialization failure means
/// broken in-memory state and aborts the process.
pub fn save(users: &[User], file_name: &str) -> Result<()> {
    let encoded =
        serde_json::to_vec(users).expect("record sequence is always serializable");
    fs::write(file_name, encoded)
        .with_context(|| format!("Failed to write store file {file_name}"))?;
    Ok(())
}
