use std::path::PathBuf;

use clap::{Parser, Subcommand};
use targum_types::Language;

#[derive(Debug, Parser)]
#[command(name = "targum", version, about = "Aramaic dictionary and translation toolkit")]
pub struct Cli {
    /// JSON config file (defaults plus TARGUM_* env vars when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Interface language for labels (hebrew, english)
    #[arg(long, global = true)]
    pub language: Option<Language>,

    /// Extra dictionary files appended after the embedded one
    #[arg(long = "dictionary", global = true)]
    pub dictionaries: Vec<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text by dictionary substitution
    Translate {
        text: String,
        /// Gloss to Aramaic instead of Aramaic to gloss
        #[arg(long)]
        reverse: bool,
        /// Use the backend service (with AI fallback) instead of the dictionary
        #[arg(long)]
        remote: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search headwords and glosses
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Manage the notes scratchpad
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },
    /// Check whether the backend server is reachable
    Health,
    /// Extract text from an image through the OCR service
    Ocr {
        image: PathBuf,
        /// Translate the recognized text with the dictionary
        #[arg(long)]
        translate: bool,
    },
    /// Ask the backend assistant about a passage
    AiAssist {
        text: String,
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Ask the AI service for a structural breakdown of a passage
    Analyze { text: String },
}

#[derive(Debug, Subcommand)]
pub enum NotesAction {
    List,
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reverse_translate() {
        let cli = Cli::try_parse_from([
            "targum",
            "--language",
            "english",
            "translate",
            "--reverse",
            "אם תאמר",
        ])
        .unwrap();

        assert_eq!(cli.language, Some(Language::English));
        match cli.command {
            Command::Translate { text, reverse, remote, .. } => {
                assert_eq!(text, "אם תאמר");
                assert!(reverse);
                assert!(!remote);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_notes_edit() {
        let cli =
            Cli::try_parse_from(["targum", "notes", "edit", "abc", "--title", "t"]).unwrap();
        match cli.command {
            Command::Notes {
                action: NotesAction::Edit { id, title, content },
            } => {
                assert_eq!(id, "abc");
                assert_eq!(title.as_deref(), Some("t"));
                assert!(content.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
