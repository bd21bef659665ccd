use std::io::Write;

use targum_notes::NoteStore;

use crate::cli::{Command, NotesAction};
use crate::state::AppState;

pub mod notes;
pub mod search;
pub mod services;
pub mod translate;

use notes::{handle_note_add, handle_note_delete, handle_note_edit, handle_notes_list};
use search::handle_search;
use services::{handle_ai_assist, handle_analyze, handle_health, handle_ocr};
use translate::handle_translate;

/// Run one CLI command, writing user-facing output to `out`
pub async fn dispatch(
    state: &AppState,
    command: Command,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    tracing::debug!("Dispatching {:?}", command);
    match command {
        Command::Translate {
            text,
            reverse,
            remote,
            json,
        } => handle_translate(state, text, reverse, remote, json, out).await,
        Command::Search { query, json } => handle_search(state, &query, json, out),
        Command::Notes { action } => {
            let mut store = NoteStore::from_config(&state.config.notes)?;
            match action {
                NotesAction::List => handle_notes_list(state, &store, out),
                NotesAction::Add { title, content } => {
                    handle_note_add(state, &mut store, title, content, out)
                }
                NotesAction::Edit { id, title, content } => {
                    handle_note_edit(state, &mut store, &id, title, content, out)
                }
                NotesAction::Delete { id } => handle_note_delete(state, &mut store, &id, out),
            }
        }
        Command::Health => handle_health(state, out).await,
        Command::Ocr { image, translate } => handle_ocr(state, &image, translate, out).await,
        Command::AiAssist { text, prompt } => {
            handle_ai_assist(state, &text, prompt.as_deref(), out).await
        }
        Command::Analyze { text } => handle_analyze(state, &text, out).await,
    }
}
