use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A license or exception record: field name to JSON value, in insertion order.
pub type Record = Map<String, Value>;

pub const NAME: &str = "name";
pub const SEE_ALSO: &str = "seeAlso";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    License,
    Exception,
}

impl EntryKind {
    /// Identity key set on assembled records. Never read from field files.
    pub fn id_field(self) -> &'static str {
        match self {
            EntryKind::License => "licenseId",
            EntryKind::Exception => "licenseExceptionId",
        }
    }

    /// The field every adaption must touch.
    pub fn template_field(self) -> &'static str {
        match self {
            EntryKind::License => "standardLicenseTemplate",
            EntryKind::Exception => "licenseExceptionTemplate",
        }
    }

    pub fn text_field(self) -> &'static str {
        match self {
            EntryKind::License => "licenseText",
            EntryKind::Exception => "licenseExceptionText",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::License => write!(f, "license"),
            EntryKind::Exception => write!(f, "exception"),
        }
    }
}

/// Field names recognized per kind, in the order they are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldTable {
    #[serde(default = "default_license_fields")]
    pub license: Vec<String>,

    #[serde(default = "default_exception_fields")]
    pub exception: Vec<String>,
}

fn default_license_fields() -> Vec<String> {
    [
        NAME,
        "licenseText",
        "standardLicenseHeader",
        "standardLicenseTemplate",
        "standardLicenseHeaderTemplate",
        SEE_ALSO,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_exception_fields() -> Vec<String> {
    [
        NAME,
        "licenseExceptionText",
        "licenseExceptionTemplate",
        SEE_ALSO,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for FieldTable {
    fn default() -> Self {
        Self {
            license: default_license_fields(),
            exception: default_exception_fields(),
        }
    }
}

impl FieldTable {
    pub fn for_kind(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::License => &self.license,
            EntryKind::Exception => &self.exception,
        }
    }

    pub fn contains(&self, kind: EntryKind, field: &str) -> bool {
        self.for_kind(kind).iter().any(|f| f == field)
    }
}
