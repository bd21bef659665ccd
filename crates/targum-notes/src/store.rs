use std::fs;
use std::path::PathBuf;

use targum_config::notes::NotesConfig;
use targum_types::{Labels, Language};

use crate::note::Note;

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No data directory available for notes storage")]
    NoDataDir,
}

/// Notes kept as one JSON array under a fixed storage key.
///
/// Loaded once on open; every mutation rewrites the whole document.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Open the store at `path`. Missing or unreadable documents start empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let notes = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::error!("Failed to parse saved notes in {}: {e}", path.display());
                Vec::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::error!("Failed to read saved notes in {}: {e}", path.display());
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} notes from {}", notes.len(), path.display());
        Self { path, notes }
    }

    pub fn from_config(config: &NotesConfig) -> Result<Self, NotesError> {
        let path = match &config.path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .ok_or(NotesError::NoDataDir)?
                .join("targum")
                .join(format!("{}.json", config.storage_key)),
        };
        Ok(Self::open(path))
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Insert or replace by id.
    ///
    /// A blank title becomes the localized "New Note" label. The creation
    /// date of an existing note is kept. Memory is only updated once the
    /// document is written.
    pub fn save(&mut self, note: Note, language: Language) -> Result<Note, NotesError> {
        let title = match note.title.trim() {
            "" => Labels::for_language(language).new_note.to_string(),
            trimmed => trimmed.to_string(),
        };

        let mut candidate = self.notes.clone();
        let updated = match candidate.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => {
                existing.title = title;
                existing.content = note.content;
                existing.clone()
            }
            None => {
                let created = Note { title, ..note };
                candidate.push(created.clone());
                created
            }
        };

        self.commit(candidate)?;
        Ok(updated)
    }

    /// Remove by id; `false` if no such note
    pub fn delete(&mut self, id: &str) -> Result<bool, NotesError> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let candidate = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        self.commit(candidate)?;
        Ok(true)
    }

    fn commit(&mut self, notes: Vec<Note>) -> Result<(), NotesError> {
        let data = serde_json::to_string(&notes)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)?;

        tracing::debug!("Wrote {} notes to {}", notes.len(), self.path.display());
        self.notes = notes;
        Ok(())
    }
}
