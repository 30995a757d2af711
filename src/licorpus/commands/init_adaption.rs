use crate::commands::{CmdMessage, CmdResult, CorpusPaths};
use crate::error::{CorpusError, Result};
use crate::model::{EntryKind, FieldTable};
use crate::store::FileStore;

pub const NO_FIELDS_MESSAGE: &str = "Please specify field names for initialization.";

/// Scaffold field files for the fields an adaption will override.
///
/// When any field is requested, the template field of `kind` is always scaffolded
/// along with it. Requesting nothing is a soft failure: the entry directory is
/// removed again if empty and a warning is returned.
pub fn run<S: AsRef<str>>(
    store: &FileStore,
    paths: &CorpusPaths,
    fields: &FieldTable,
    shortname: &str,
    kind: EntryKind,
    requested: &[S],
) -> Result<CmdResult> {
    for field in requested {
        if !fields.contains(kind, field.as_ref()) {
            return Err(CorpusError::UnknownField {
                kind,
                field: field.as_ref().to_string(),
            });
        }
    }

    let dir = paths.adaption_entry(shortname);
    store.ensure_dir(&dir)?;

    let mut result = CmdResult::default();

    if requested.is_empty() {
        let removed = store.remove_dir_if_empty(&dir);
        tracing::warn!(shortname, removed, "no adaption fields requested");
        result.add_message(CmdMessage::warning(NO_FIELDS_MESSAGE));
        return Ok(result);
    }

    let template = kind.template_field();
    let selected = fields.for_kind(kind).iter().filter(|field| {
        field.as_str() == template || requested.iter().any(|r| r.as_ref() == field.as_str())
    });

    let mut created = Vec::new();
    let mut touched = Vec::new();
    for field in selected {
        let path = dir.join(field);
        if store.touch(&path)? {
            created.push(path);
        }
        touched.push(field.as_str());
    }

    tracing::info!(shortname, %kind, fields = ?touched, "initialized adaption");

    result.add_message(CmdMessage::success(format!(
        "Initialized {} adaption {} at {} ({})",
        kind,
        shortname,
        dir.display(),
        touched.join(", ")
    )));
    Ok(result.with_created_files(created))
}
