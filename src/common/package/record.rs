use serde::Serialize;

use super::Source;

/// One installed package as reported by a backend.
///
/// Records are not deduplicated: a foreign package may legitimately show up
/// under both `pacman` and the AUR helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub source: Source,
    pub name: String,
    pub version: String,
}

impl PackageRecord {
    pub fn new(source: Source, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
            version: version.into(),
        }
    }

    /// `source<TAB>name<TAB>version`, the headless listing format.
    pub fn to_tsv(&self) -> String {
        format!("{}\t{}\t{}", self.source.label(), self.name, self.version)
    }

    /// Case-insensitive substring match on the package name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
