use crate::commands::{CmdMessage, CmdResult, CorpusPaths};
use crate::error::Result;
use crate::model::{EntryKind, FieldTable};
use crate::store::FileStore;

/// Scaffold one empty field file per field of `kind` under `custom/<shortname>/`.
/// Existing files are left untouched.
pub fn run(
    store: &FileStore,
    paths: &CorpusPaths,
    fields: &FieldTable,
    shortname: &str,
    kind: EntryKind,
) -> Result<CmdResult> {
    let dir = paths.custom_entry(shortname);
    store.ensure_dir(&dir)?;

    let mut created = Vec::new();
    for field in fields.for_kind(kind) {
        let path = dir.join(field);
        if store.touch(&path)? {
            created.push(path);
        }
    }

    tracing::info!(shortname, %kind, created = created.len(), "initialized custom entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized custom {} {} at {} ({} new field files)",
        kind,
        shortname,
        dir.display(),
        created.len()
    )));
    Ok(result.with_created_files(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::corpus;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_license_field_files() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());

        let result = run(
            &FileStore::new(),
            &paths,
            &FieldTable::default(),
            "MIT-X",
            EntryKind::License,
        )
        .unwrap();

        let dir = paths.custom_entry("MIT-X");
        for field in [
            "name",
            "licenseText",
            "standardLicenseHeader",
            "standardLicenseTemplate",
            "standardLicenseHeaderTemplate",
            "seeAlso",
        ] {
            let path = dir.join(field);
            assert!(path.is_file(), "missing {}", field);
            assert_eq!(fs::read_to_string(path).unwrap(), "");
        }
        assert_eq!(result.created_files.len(), 6);
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 6);
    }

    #[test]
    fn creates_exception_field_files() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());

        run(
            &FileStore::new(),
            &paths,
            &FieldTable::default(),
            "My-exception",
            EntryKind::Exception,
        )
        .unwrap();

        let mut names: Vec<_> = fs::read_dir(paths.custom_entry("My-exception"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "licenseExceptionTemplate",
                "licenseExceptionText",
                "name",
                "seeAlso"
            ]
        );
    }

    #[test]
    fn rerun_keeps_edited_content() {
        let temp = TempDir::new().unwrap();
        let paths = corpus(temp.path());
        let store = FileStore::new();
        let table = FieldTable::default();

        run(&store, &paths, &table, "MIT-X", EntryKind::License).unwrap();
        let name = paths.custom_entry("MIT-X").join("name");
        fs::write(&name, "MIT X License").unwrap();

        let result = run(&store, &paths, &table, "MIT-X", EntryKind::License).unwrap();
        assert!(result.created_files.is_empty());
        assert_eq!(fs::read_to_string(name).unwrap(), "MIT X License");
    }
}
