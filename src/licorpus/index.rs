//! # Index Files
//!
//! Two aggregate files summarize everything the tool has produced:
//!
//! - `custom.json`: `{"licenses": [...]}`, one entry per custom record, unique by `name`.
//! - `adaptions.json`: `{"adaptions": [...]}`, one entry per adapted id, unique by
//!   `licenseId`, each carrying the notes recorded for it.
//!
//! Both are handled the same way: the array is loaded into an insertion-ordered
//! map keyed by the uniqueness field, the new data is merged in, and the array is
//! rebuilt from the map. Existing entries keep their position, new keys are
//! appended. Entries are kept as raw JSON so fields this tool does not know
//! about survive the rewrite, as do top-level keys other than the array.
//!
//! [`update_custom_index`] and [`update_adaption_index`] wrap the merge in a full
//! read-modify-write cycle under an [`IndexLock`].

use crate::error::{CorpusError, Result};
use crate::model::{EntryKind, NAME, Record, SEE_ALSO};
use crate::store::{FileStore, IndexLock};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const LICENSES_KEY: &str = "licenses";
const ADAPTIONS_KEY: &str = "adaptions";
const ADAPTION_ID_KEY: &str = "licenseId";
const NOTES_KEY: &str = "notes";

/// Summary line for one custom record in `custom.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomIndexEntry {
    /// The first `seeAlso` reference, as a zero- or one-element list.
    pub reference: Vec<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_exception_id: Option<String>,
    /// The `seeAlso` references after the first.
    pub see_also: Vec<String>,
}

impl CustomIndexEntry {
    pub fn from_record(kind: EntryKind, shortname: &str, record: &Record) -> Self {
        let name = record
            .get(NAME)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let mut refs: Vec<String> = record
            .get(SEE_ALSO)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let see_also = if refs.is_empty() {
            Vec::new()
        } else {
            refs.split_off(1)
        };

        let (license_id, license_exception_id) = match kind {
            EntryKind::License => (Some(shortname.to_string()), None),
            EntryKind::Exception => (None, Some(shortname.to_string())),
        };

        Self {
            reference: refs,
            name,
            license_id,
            license_exception_id,
            see_also,
        }
    }
}

/// An index document: the top-level object plus its array of entries keyed by one field.
#[derive(Debug)]
struct KeyedIndex {
    path: PathBuf,
    document: Record,
    array_key: &'static str,
    entries: IndexMap<String, Value>,
}

impl KeyedIndex {
    fn parse(path: &Path, document: Value, array_key: &'static str, id_key: &str) -> Result<Self> {
        let malformed = |reason: String| CorpusError::MalformedIndex {
            path: path.to_path_buf(),
            reason,
        };

        let Value::Object(document) = document else {
            return Err(malformed("top level is not an object".to_string()));
        };
        let items = document
            .get(array_key)
            .and_then(Value::as_array)
            .ok_or_else(|| malformed(format!("missing `{}` array", array_key)))?;

        let mut entries = IndexMap::with_capacity(items.len());
        for item in items {
            let key = item
                .get(id_key)
                .and_then(Value::as_str)
                .ok_or_else(|| malformed(format!("entry without string `{}`", id_key)))?;
            entries.insert(key.to_string(), item.clone());
        }

        Ok(Self {
            path: path.to_path_buf(),
            document,
            array_key,
            entries,
        })
    }

    fn into_value(mut self) -> Value {
        let items = self.entries.into_values().collect();
        // Replacing an existing key keeps its position in the document.
        self.document
            .insert(self.array_key.to_string(), Value::Array(items));
        Value::Object(self.document)
    }
}

/// `custom.json`, keyed by entry `name`.
#[derive(Debug)]
pub struct CustomIndex(KeyedIndex);

impl CustomIndex {
    pub fn parse(path: &Path, document: Value) -> Result<Self> {
        KeyedIndex::parse(path, document, LICENSES_KEY, NAME).map(Self)
    }

    /// Insert or overwrite the entry with the same name.
    pub fn upsert(&mut self, entry: &CustomIndexEntry) -> Result<()> {
        let value = serde_json::to_value(entry).map_err(CorpusError::Serialization)?;
        self.0.entries.insert(entry.name.clone(), value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    pub fn into_value(self) -> Value {
        self.0.into_value()
    }
}

/// `adaptions.json`, keyed by `licenseId`.
#[derive(Debug)]
pub struct AdaptionIndex(KeyedIndex);

impl AdaptionIndex {
    pub fn parse(path: &Path, document: Value) -> Result<Self> {
        KeyedIndex::parse(path, document, ADAPTIONS_KEY, ADAPTION_ID_KEY).map(Self)
    }

    /// Append `note` to the entry for `id`, creating the entry if needed.
    /// Returns the number of notes now recorded for `id`.
    pub fn add_note(&mut self, id: &str, note: &str) -> Result<usize> {
        match self.0.entries.get_mut(id) {
            Some(entry) => match entry.get_mut(NOTES_KEY) {
                Some(Value::Array(notes)) => {
                    notes.push(Value::String(note.to_string()));
                    Ok(notes.len())
                }
                _ => Err(CorpusError::MalformedIndex {
                    path: self.0.path.clone(),
                    reason: format!("entry `{}` has no `{}` array", id, NOTES_KEY),
                }),
            },
            None => {
                let mut entry = Record::new();
                entry.insert(ADAPTION_ID_KEY.to_string(), Value::String(id.to_string()));
                entry.insert(
                    NOTES_KEY.to_string(),
                    Value::Array(vec![Value::String(note.to_string())]),
                );
                self.0.entries.insert(id.to_string(), Value::Object(entry));
                Ok(1)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    pub fn into_value(self) -> Value {
        self.0.into_value()
    }
}

fn load_index(store: &FileStore, path: &Path) -> Result<Value> {
    store
        .read_json::<Value>(path)?
        .ok_or_else(|| CorpusError::IndexMissing {
            path: path.to_path_buf(),
        })
}

/// Merge `entry` into the custom index at `path` and rewrite it.
pub fn update_custom_index(store: &FileStore, path: &Path, entry: &CustomIndexEntry) -> Result<()> {
    let _lock = IndexLock::acquire(path)?;
    let mut index = CustomIndex::parse(path, load_index(store, path)?)?;
    index.upsert(entry)?;
    let total = index.len();
    store.write_json(path, &index.into_value())?;
    tracing::info!(index = %path.display(), name = %entry.name, total, "updated custom index");
    Ok(())
}

/// Record `note` for `id` in the adaption index at `path` and rewrite it.
/// Returns the number of notes now recorded for `id`.
pub fn update_adaption_index(store: &FileStore, path: &Path, id: &str, note: &str) -> Result<usize> {
    let _lock = IndexLock::acquire(path)?;
    let mut index = AdaptionIndex::parse(path, load_index(store, path)?)?;
    let notes = index.add_note(id, note)?;
    store.write_json(path, &index.into_value())?;
    tracing::info!(index = %path.display(), id, notes, "updated adaption index");
    Ok(notes)
}
