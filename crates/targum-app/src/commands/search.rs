use std::io::Write;

use targum_core::{DictionaryEntry, search};
use targum_types::Labels;

use crate::state::AppState;

/// Search result as seen by the user
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query, nothing was searched
    NoQuery,
    NoMatches,
    Matches(Vec<DictionaryEntry>),
}

pub fn run_search(state: &AppState, query: &str) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::NoQuery;
    }

    let matches = search(query, state.dictionary.as_ref());
    tracing::debug!("Search '{}': {} matches", query, matches.len());

    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}

pub fn handle_search(
    state: &AppState,
    query: &str,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    let outcome = run_search(state, query);

    if json {
        let entries: &[DictionaryEntry] = match &outcome {
            SearchOutcome::Matches(entries) => entries.as_slice(),
            _ => &[],
        };
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }

    match outcome {
        SearchOutcome::NoQuery => writeln!(out, "{}", labels.search_prompt)?,
        SearchOutcome::NoMatches => writeln!(out, "{}", labels.no_results)?,
        SearchOutcome::Matches(entries) => {
            for entry in &entries {
                render_entry(labels, entry, out)?;
            }
        }
    }

    Ok(())
}

fn render_entry(
    labels: &Labels,
    entry: &DictionaryEntry,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(out, "{} ({})", entry.source_term, entry.target_term)?;
    writeln!(out, "  {}", entry.definition)?;
    if !entry.examples.is_empty() {
        writeln!(out, "  {}", labels.examples)?;
        for example in &entry.examples {
            writeln!(out, "    {example}")?;
        }
    }
    writeln!(out)
}
