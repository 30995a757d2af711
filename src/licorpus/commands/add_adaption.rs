use crate::commands::{CmdMessage, CmdResult, CorpusPaths};
use crate::error::{CorpusError, Result};
use crate::fields::parse_field;
use crate::index::update_adaption_index;
use crate::model::{EntryKind, FieldTable, Record};
use crate::store::FileStore;
use std::path::Path;

/// Overlay an adaption's field files on the canonical record, record `note` in the
/// adaption index and write the merged record to `adaptions/<shortname>.json`.
pub fn run(
    store: &FileStore,
    paths: &CorpusPaths,
    fields: &FieldTable,
    shortname: &str,
    note: &str,
) -> Result<CmdResult> {
    let dir = paths.adaption_entry(shortname);
    if !dir.is_dir() {
        return Err(CorpusError::AdaptionNotFound { path: dir });
    }
    let kind = detect_kind(&dir);

    let canonical = paths.canonical_record(kind, shortname);
    let mut record: Record = store
        .read_json(&canonical)?
        .ok_or(CorpusError::RecordNotFound { path: canonical })?;

    let overridden = overlay(store, &dir, fields, kind, &mut record)?;

    let notes = update_adaption_index(store, &paths.adaption_index, shortname, note)?;

    let path = paths.adaption_record(shortname);
    store.write_json(&path, &record)?;
    tracing::info!(
        shortname,
        %kind,
        fields = ?overridden,
        record = %path.display(),
        "assembled adaption"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Adapted {} {} ({}) -> {}",
        kind,
        shortname,
        overridden.join(", "),
        path.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "{} note(s) recorded for {}",
        notes, shortname
    )));
    Ok(result.with_written_records(vec![path]))
}

/// An adaption holding the exception template field is an exception adaption.
pub fn detect_kind(dir: &Path) -> EntryKind {
    if dir.join(EntryKind::Exception.template_field()).is_file() {
        EntryKind::Exception
    } else {
        EntryKind::License
    }
}

/// Replace each field of `record` that has a field file in `dir`. Other fields pass
/// through untouched. Returns the names of the replaced fields.
pub fn overlay(
    store: &FileStore,
    dir: &Path,
    fields: &FieldTable,
    kind: EntryKind,
    record: &mut Record,
) -> Result<Vec<String>> {
    let mut overridden = Vec::new();
    for field in fields.for_kind(kind) {
        if let Some(raw) = store.read_text(&dir.join(field))? {
            record.insert(field.clone(), parse_field(field, &raw));
            overridden.push(field.clone());
        }
    }
    Ok(overridden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init_adaption;
    use crate::commands::testing::{corpus, read_json};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn overlays_only_present_fields() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());
        fs::write(
            paths.canonical_record(EntryKind::License, "X"),
            r#"{"name": "X", "licenseText": "orig"}"#,
        )
        .unwrap();
        let dir = paths.adaption_entry("X");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("licenseText"), "new").unwrap();

        let result = run(&FileStore::new(), &paths, &FieldTable::default(), "X", "fix").unwrap();

        assert_eq!(result.written_records, vec![paths.adaption_record("X")]);
        assert_eq!(
            fs::read_to_string(paths.adaption_record("X")).unwrap(),
            "{\n  \"name\": \"X\",\n  \"licenseText\": \"new\"\n}"
        );
    }

    #[test]
    fn canonical_fields_keep_their_order_and_values() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());
        fs::write(
            paths.canonical_record(EntryKind::License, "MIT"),
            r#"{"isDeprecatedLicenseId": false, "licenseText": " untouched ", "standardLicenseTemplate": "old", "name": "MIT License", "licenseId": "MIT", "seeAlso": ["https://opensource.org/license/mit/"]}"#,
        )
        .unwrap();
        init_adaption::run(
            &FileStore::new(),
            &paths,
            &FieldTable::default(),
            "MIT",
            EntryKind::License,
            &["seeAlso"],
        )
        .unwrap();
        let dir = paths.adaption_entry("MIT");
        fs::write(dir.join("standardLicenseTemplate"), "  <<beginOptional>>new\n").unwrap();
        fs::write(dir.join("seeAlso"), "https://one\nhttps://two\n").unwrap();

        run(&FileStore::new(), &paths, &FieldTable::default(), "MIT", "template").unwrap();

        let merged = fs::read_to_string(paths.adaption_record("MIT")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&merged).unwrap();
        assert_eq!(
            value,
            json!({
                "isDeprecatedLicenseId": false,
                "licenseText": " untouched ",
                "standardLicenseTemplate": "<<beginOptional>>new",
                "name": "MIT License",
                "licenseId": "MIT",
                "seeAlso": ["https://one", "https://two"],
            })
        );
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "isDeprecatedLicenseId",
                "licenseText",
                "standardLicenseTemplate",
                "name",
                "licenseId",
                "seeAlso"
            ]
        );
    }

    #[test]
    fn exception_adaption_reads_exceptions_path() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());
        fs::write(
            paths.canonical_record(EntryKind::Exception, "LLVM-exception"),
            r#"{"licenseExceptionId": "LLVM-exception", "licenseExceptionTemplate": "old"}"#,
        )
        .unwrap();
        let dir = paths.adaption_entry("LLVM-exception");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("licenseExceptionTemplate"), "new").unwrap();

        run(
            &FileStore::new(),
            &paths,
            &FieldTable::default(),
            "LLVM-exception",
            "note",
        )
        .unwrap();

        assert_eq!(
            read_json(&paths.adaption_record("LLVM-exception")),
            json!({"licenseExceptionId": "LLVM-exception", "licenseExceptionTemplate": "new"})
        );
    }

    #[test]
    fn notes_accumulate_per_id() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());
        fs::write(
            paths.canonical_record(EntryKind::License, "X"),
            r#"{"name": "X"}"#,
        )
        .unwrap();
        fs::create_dir_all(paths.adaption_entry("X")).unwrap();
        let store = FileStore::new();
        let table = FieldTable::default();

        run(&store, &paths, &table, "X", "a").unwrap();
        run(&store, &paths, &table, "X", "b").unwrap();

        assert_eq!(
            read_json(&paths.adaption_index),
            json!({"adaptions": [{"licenseId": "X", "notes": ["a", "b"]}]})
        );
    }

    #[test]
    fn missing_adaption_directory_fails() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());

        let err = run(&FileStore::new(), &paths, &FieldTable::default(), "X", "a").unwrap_err();
        assert!(matches!(err, CorpusError::AdaptionNotFound { .. }));
    }

    #[test]
    fn missing_canonical_record_fails_before_touching_the_index() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());
        fs::create_dir_all(paths.adaption_entry("Nope")).unwrap();

        let err = run(&FileStore::new(), &paths, &FieldTable::default(), "Nope", "a").unwrap_err();
        assert!(matches!(err, CorpusError::RecordNotFound { .. }));
        assert_eq!(read_json(&paths.adaption_index), json!({"adaptions": []}));
    }
}
