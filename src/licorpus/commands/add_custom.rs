use crate::commands::{CmdMessage, CmdResult, CorpusPaths};
use crate::error::{CorpusError, Result};
use crate::fields::parse_field;
use crate::index::{CustomIndexEntry, update_custom_index};
use crate::model::{EntryKind, FieldTable, Record};
use crate::store::FileStore;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Assemble custom records from their field files and register them in the custom index.
///
/// With no `shortname`, every entry directory under the custom path is processed,
/// in name order.
pub fn run(
    store: &FileStore,
    paths: &CorpusPaths,
    fields: &FieldTable,
    shortname: Option<&str>,
) -> Result<CmdResult> {
    let shortnames = match shortname {
        Some(name) => vec![name.to_string()],
        None => store.list_entry_dirs(&paths.custom)?,
    };

    let mut result = CmdResult::default();
    let mut written = Vec::with_capacity(shortnames.len());

    for name in &shortnames {
        let (kind, path) = add_one(store, paths, fields, name)?;
        result.add_message(CmdMessage::success(format!(
            "Added custom {} {} ({})",
            kind,
            name,
            path.display()
        )));
        written.push(path);
    }

    if shortnames.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No custom entries found in {}",
            paths.custom.display()
        )));
    }

    Ok(result.with_written_records(written))
}

fn add_one(
    store: &FileStore,
    paths: &CorpusPaths,
    fields: &FieldTable,
    shortname: &str,
) -> Result<(EntryKind, PathBuf)> {
    let dir = paths.custom_entry(shortname);
    let kind = detect_kind(&dir);
    let record = assemble(store, &dir, fields, kind, shortname)?;

    let entry = CustomIndexEntry::from_record(kind, shortname, &record);
    update_custom_index(store, &paths.custom_index, &entry)?;

    let path = paths.custom_record(shortname);
    store.write_json(&path, &record)?;
    tracing::info!(shortname, %kind, record = %path.display(), "assembled custom record");
    Ok((kind, path))
}

/// An entry scaffolded as an exception carries the exception text field and not the
/// license one. Anything else is treated as a license.
pub fn detect_kind(dir: &Path) -> EntryKind {
    let has = |field: &str| dir.join(field).is_file();
    if has(EntryKind::Exception.text_field()) && !has(EntryKind::License.text_field()) {
        EntryKind::Exception
    } else {
        EntryKind::License
    }
}

/// Read every field file of `kind` into a record, then set the identity field.
pub fn assemble(
    store: &FileStore,
    dir: &Path,
    fields: &FieldTable,
    kind: EntryKind,
    shortname: &str,
) -> Result<Record> {
    let mut record = Record::new();
    for field in fields.for_kind(kind) {
        let path = dir.join(field);
        let raw = store
            .read_text(&path)?
            .ok_or(CorpusError::FieldFileMissing { path })?;
        record.insert(field.clone(), parse_field(field, &raw));
    }
    record.insert(
        kind.id_field().to_string(),
        Value::String(shortname.to_string()),
    );
    Ok(record)
}
