use std::path::Path;

use targum_core::{CoreError, DictionaryEntry, DictionaryStore};

const EMBEDDED_NAME: &str = "Talmudic Aramaic";
const LANGUAGE: &str = "arc";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidEntry(#[from] CoreError),
}

pub struct AramaicLoader;

impl AramaicLoader {
    /// Load the glossary shipped with the crate
    pub fn load_embedded() -> Result<DictionaryStore, LoadError> {
        let json = include_str!("../data/dictionary.json");
        tracing::info!("Loading embedded Aramaic dictionary...");
        let dict = Self::from_json(EMBEDDED_NAME, json)?;
        tracing::info!("Loaded {} dictionary entries", dict.len());
        Ok(dict)
    }

    /// Load a JSON array of entries from a file
    pub fn load_from_file(path: &Path) -> Result<DictionaryStore, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let dict = Self::from_json(name, &json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.len());
        Ok(dict)
    }

    pub fn from_json(name: impl Into<String>, json: &str) -> Result<DictionaryStore, LoadError> {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json)?;
        Ok(DictionaryStore::named(name, LANGUAGE, entries)?)
    }

    /// Append `additional` after `base`; duplicates are kept
    pub fn merge(base: DictionaryStore, additional: DictionaryStore) -> DictionaryStore {
        base.extend(additional)
    }

    /// Embedded glossary followed by every additional file that loads.
    ///
    /// Files that fail to load are logged and skipped.
    pub fn with_additional(include_embedded: bool, additional_paths: &[String]) -> DictionaryStore {
        let mut dict = if include_embedded {
            Self::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded dictionary: {}", e);
                tracing::warn!("Starting with empty dictionary");
                DictionaryStore::empty(EMBEDDED_NAME, LANGUAGE)
            })
        } else {
            tracing::warn!("Embedded dictionary disabled");
            DictionaryStore::empty(EMBEDDED_NAME, LANGUAGE)
        };

        for path in additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = Self::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        dict
    }
}

#[cfg(test)]
mod tests {
    use targum_core::Dictionary;

    use super::*;

    #[test]
    fn test_embedded_dictionary_order() {
        let dict = AramaicLoader::load_embedded().unwrap();
        assert_eq!(dict.len(), 10);

        let entries = dict.all_entries();
        assert_eq!(entries[0].source_term, "אביי");
        assert_eq!(entries[1].source_term, "אילימא");
        assert_eq!(entries[1].target_term, "אם תאמר");
        assert_eq!(entries[9].source_term, "לאו אדעתא דהכי");
        assert_eq!(entries[0].examples.len(), 2);
        assert_eq!(dict.metadata().language, "arc");
    }

    #[test]
    fn test_load_from_file_and_merge() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.json");
        std::fs::write(
            &path,
            r#"[{"sourceTerm": "תניא", "targetTerm": "שנויה ברייתא", "definition": ""}]"#,
        )
        .unwrap();

        let extra = AramaicLoader::load_from_file(&path).unwrap();
        assert_eq!(extra.metadata().name, "extra");

        let merged = AramaicLoader::merge(AramaicLoader::load_embedded().unwrap(), extra);
        assert_eq!(merged.len(), 11);
        assert_eq!(merged.all_entries()[10].source_term, "תניא");
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let json = r#"[{"sourceTerm": "", "targetTerm": "x", "definition": ""}]"#;
        let result = AramaicLoader::from_json("bad", json);
        assert!(matches!(result, Err(LoadError::InvalidEntry(_))));

        let result = AramaicLoader::from_json("bad", "not json");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_with_additional_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json").display().to_string();

        let dict = AramaicLoader::with_additional(true, &[missing]);
        assert_eq!(dict.len(), 10);

        let dict = AramaicLoader::with_additional(false, &[]);
        assert!(dict.is_empty());
    }
}
