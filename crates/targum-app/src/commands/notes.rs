use std::io::Write;

use targum_notes::{Note, NoteStore, format_date};

use crate::state::AppState;

pub fn handle_notes_list(
    state: &AppState,
    store: &NoteStore,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    writeln!(out, "{}", labels.notes_title)?;

    if store.list().is_empty() {
        writeln!(out, "{}", labels.no_notes)?;
        return Ok(());
    }

    for note in store.list() {
        writeln!(out, "[{}] {}", note.id, note.title)?;
        writeln!(out, "  {} {}", labels.created, format_date(&note.date))?;
        if !note.content.is_empty() {
            writeln!(out, "  {}", note.content)?;
        }
    }

    Ok(())
}

pub fn handle_note_add(
    state: &AppState,
    store: &mut NoteStore,
    title: String,
    content: String,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let note = Note {
        title,
        content,
        ..Note::draft()
    };
    let saved = store.save(note, state.language())?;
    tracing::info!("Created note {}", saved.id);
    writeln!(out, "{}: {}", state.labels().note_saved, saved.id)?;
    Ok(())
}

pub fn handle_note_edit(
    state: &AppState,
    store: &mut NoteStore,
    id: &str,
    title: Option<String>,
    content: Option<String>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    let Some(mut edited) = store.get(id).cloned() else {
        anyhow::bail!("{}: {id}", labels.note_not_found);
    };

    if let Some(title) = title {
        edited.title = title;
    }
    if let Some(content) = content {
        edited.content = content;
    }
    let saved = store.save(edited, state.language())?;
    writeln!(out, "{}: {}", labels.note_saved, saved.id)?;
    Ok(())
}

pub fn handle_note_delete(
    state: &AppState,
    store: &mut NoteStore,
    id: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    if !store.delete(id)? {
        anyhow::bail!("{}: {id}", labels.note_not_found);
    }
    writeln!(out, "{}: {id}", labels.note_deleted)?;
    Ok(())
}
