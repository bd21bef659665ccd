use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Read-only access to an ordered set of dictionary entries
pub trait Dictionary: Send + Sync {
    /// All entries in declaration order
    fn all_entries(&self) -> &[DictionaryEntry];

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Single headword with its gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Aramaic headword
    pub source_term: String,
    /// Hebrew/English gloss
    pub target_term: String,
    pub definition: String,
    /// Usage citations, in display order
    #[serde(default)]
    pub examples: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(
        source_term: impl Into<String>,
        target_term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            source_term: source_term.into(),
            target_term: target_term.into(),
            definition: definition.into(),
            examples: Vec::new(),
        }
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

/// Immutable, ordered collection of entries fixed at load time.
///
/// Duplicate source terms are allowed and every copy takes part in lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStore {
    name: String,
    language: String,
    entries: Vec<DictionaryEntry>,
}

impl DictionaryStore {
    /// Build a store, rejecting entries with a blank source or target term
    pub fn new(entries: Vec<DictionaryEntry>) -> Result<Self, CoreError> {
        Self::named("custom", "arc", entries)
    }

    pub fn named(
        name: impl Into<String>,
        language: impl Into<String>,
        entries: Vec<DictionaryEntry>,
    ) -> Result<Self, CoreError> {
        for (idx, entry) in entries.iter().enumerate() {
            if entry.source_term.trim().is_empty() {
                return Err(CoreError::InvalidEntry(format!(
                    "entry {idx} has an empty source term"
                )));
            }
            if entry.target_term.trim().is_empty() {
                return Err(CoreError::InvalidEntry(format!(
                    "entry {idx} ({}) has an empty target term",
                    entry.source_term
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            language: language.into(),
            entries,
        })
    }

    pub fn empty(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append another store's entries after this one's, keeping both orders
    pub fn extend(mut self, other: DictionaryStore) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl Dictionary for DictionaryStore {
    fn all_entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            version: "1.0".to_string(),
            language: self.language.clone(),
            entry_count: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DictionaryStore {
        DictionaryStore::new(vec![
            DictionaryEntry::new("הכא", "כאן", "מקום נוכחי"),
            DictionaryEntry::new("התם", "שם", "מקום אחר").with_examples(["התם לאו בר דעת הוא"]),
            DictionaryEntry::new("הכא", "פה", "כפילות מותרת"),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_entries_is_stable() {
        let store = sample();
        let first = store.all_entries().to_vec();
        let second = store.all_entries().to_vec();
        assert_eq!(first, second);
        assert_eq!(first[0].source_term, "הכא");
        assert_eq!(first[1].source_term, "התם");
        assert_eq!(first[2].target_term, "פה");
    }

    #[test]
    fn test_rejects_blank_source_term() {
        let result = DictionaryStore::new(vec![DictionaryEntry::new("  ", "כאן", "")]);
        assert!(matches!(result, Err(CoreError::InvalidEntry(_))));
    }

    #[test]
    fn test_rejects_blank_target_term() {
        let result = DictionaryStore::new(vec![DictionaryEntry::new("הכא", "", "")]);
        assert!(matches!(result, Err(CoreError::InvalidEntry(_))));
    }

    #[test]
    fn test_metadata_counts_duplicates() {
        let meta = sample().metadata();
        assert_eq!(meta.entry_count, 3);
        assert_eq!(meta.name, "custom");
    }

    #[test]
    fn test_extend_appends_in_order() {
        let extra = DictionaryStore::new(vec![DictionaryEntry::new("דאי", "שאם", "")]).unwrap();
        let merged = sample().extend(extra);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.all_entries()[3].source_term, "דאי");
    }

    #[test]
    fn test_entry_json_field_names() {
        let json = r#"{"sourceTerm":"דאי","targetTerm":"שאם","definition":"תנאי היפותטי"}"#;
        let entry: DictionaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.source_term, "דאי");
        assert!(entry.examples.is_empty());
    }
}
