//! Operation executor over the JSON store file
use std::io::Write;

use anyhow::Result;

use crate::cli::Operation;
use crate::store;

/// Performs a resolved operation against its store file, writing the
/// result payload to `writer`.
///
/// Domain outcomes (duplicate id on add, id not found on remove) are
/// reported on `writer` and are not errors.
pub fn perform(operation: &Operation, writer: &mut impl Write) -> Result<()> {
    match operation {
        Operation::List { file_name } => list(file_name, writer),
        Operation::FindById { file_name, id } => find_by_id(file_name, id, writer),
        Operation::Add { file_name, item } => add(file_name, item, writer),
        Operation::Remove { file_name, id } => remove(file_name, id, writer),
    }
}

/// Echoes the store file verbatim, after checking that it decodes.
///
/// The raw bytes are written rather than a re-serialization, so external
/// formatting passes through untouched.
fn list(file_name: &str, writer: &mut impl Write) -> Result<()> {
    let raw = store::read_raw(file_name)?;
    store::decode(&raw)?;
    writer.write_all(&raw)?;
    Ok(())
}

/// Writes every record matching `id`, each serialized individually and
/// concatenated with no separator. Zero matches write nothing.
fn find_by_id(file_name: &str, id: &str, writer: &mut impl Write) -> Result<()> {
    let raw = store::read_raw(file_name)?;
    let users = store::decode(&raw)?;

    for user in users.iter().filter(|user| user.id == id) {
        let encoded =
            serde_json::to_vec(user).expect("record is always serializable");
        writer.write_all(&encoded)?;
    }
    Ok(())
}

/// Appends a record unless its id is already present, then echoes the
/// resulting file contents.
fn add(file_name: &str, item: &str, writer: &mut impl Write) -> Result<()> {
    let raw = store::read_raw(file_name)?;
    // An empty file is an empty store, not a parse error.
    let mut users = if raw.is_empty() {
        Vec::new()
    } else {
        store::decode(&raw)?
    };

    let user = store::decode_item(item)?;
    if users.iter().any(|existing| existing.id == user.id) {
        write!(writer, "Item with id {} already exists", user.id)?;
        return Ok(());
    }

    users.push(user);
    store::save(&users, file_name)?;

    let raw = store::read_raw(file_name)?;
    writer.write_all(&raw)?;
    Ok(())
}

/// Deletes every record matching `id`, preserving the order of the rest.
/// Writes nothing on success, a not-found message otherwise.
fn remove(file_name: &str, id: &str, writer: &mut impl Write) -> Result<()> {
    let raw = store::read_raw(file_name)?;
    let mut users = store::decode(&raw)?;

    let before = users.len();
    users.retain(|user| user.id != id);
    if users.len() == before {
        write!(writer, "Item with id {id} not found")?;
        return Ok(());
    }

    store::save(&users, file_name)?;
    Ok(())
}
