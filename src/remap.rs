//! Name Remap Table
//!
//! Maps source joint names to target bone names. A missing key and an empty
//! target both mean "do not map".
//!
//! The serialized form is the ordered entry list produced by the authoring
//! surface:
//!
//! ```json
//! [
//!   { "source": "Hips", "target": "mixamorig:Hips" },
//!   { "source": "LeftHandThumb1", "target": "" }
//! ]
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::motion::SourceClip;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapEntry {
    pub source: String,
    #[serde(default)]
    pub target: String,
}

impl RemapEntry {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Source-joint name → target-bone name.
///
/// Entry order is preserved for serialization; lookups go through a hash index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<RemapEntry>", into = "Vec<RemapEntry>")]
pub struct RemapTable {
    entries: Vec<RemapEntry>,
    index: FxHashMap<String, usize>,
}

impl RemapTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from entries. A later entry for the same source name
    /// replaces an earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RemapEntry>,
    {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.source, entry.target);
        }
        table
    }

    /// One entry per source joint, all unmapped.
    #[must_use]
    pub fn scaffold(clip: &SourceClip) -> Self {
        Self::from_entries(clip.joints().map(|j| RemapEntry::new(j.name.clone(), "")))
    }

    /// Every source joint mapped to a bone of the same name.
    #[must_use]
    pub fn identity(clip: &SourceClip) -> Self {
        Self::from_entries(
            clip.joints()
                .map(|j| RemapEntry::new(j.name.clone(), j.name.clone())),
        )
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let source = source.into();
        let target = target.into();
        if let Some(&i) = self.index.get(&source) {
            self.entries[i].target = target;
        } else {
            self.index.insert(source.clone(), self.entries.len());
            self.entries.push(RemapEntry { source, target });
        }
    }

    /// Target bone for a source joint; `None` when absent or empty.
    #[must_use]
    pub fn target_for(&self, source: &str) -> Option<&str> {
        let &i = self.index.get(source)?;
        let target = self.entries[i].target.as_str();
        (!target.is_empty()).then_some(target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemapEntry> {
        self.entries.iter()
    }

    /// Entries with a non-empty target.
    pub fn mapped(&self) -> impl Iterator<Item = &RemapEntry> {
        self.entries.iter().filter(|e| !e.target.is_empty())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        Ok(table)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Vec<RemapEntry>> for RemapTable {
    fn from(entries: Vec<RemapEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<RemapTable> for Vec<RemapEntry> {
    fn from(table: RemapTable) -> Self {
        table.entries
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for RemapTable {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(|(s, t)| RemapEntry::new(s, t)))
    }
}
