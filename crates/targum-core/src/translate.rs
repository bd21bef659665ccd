use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::error::CoreError;

/// Reconstruction used when no target term is found in the input
pub const DEFAULT_FALLBACK_PHRASE: &str = "לא נמצא מקור ארמי מתאים";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Aramaic in, gloss out
    SourceToTarget,
    /// Gloss in, Aramaic reconstruction out
    TargetToSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub direction: Direction,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub reconstructed_source: String,
    pub translated_text: String,
}

/// Literal phrase substitution against a dictionary.
///
/// No morphology and no ambiguity resolution: source terms are swapped for
/// their glosses one entry at a time, in store order.
#[derive(Debug, Clone)]
pub struct SubstitutionTranslator {
    fallback_phrase: String,
}

impl Default for SubstitutionTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PHRASE)
    }
}

impl SubstitutionTranslator {
    pub fn new(fallback_phrase: impl Into<String>) -> Self {
        Self {
            fallback_phrase: fallback_phrase.into(),
        }
    }

    pub fn fallback_phrase(&self) -> &str {
        &self.fallback_phrase
    }

    pub fn translate<D: Dictionary + ?Sized>(
        &self,
        request: &TranslationRequest,
        dictionary: &D,
    ) -> Result<TranslationResult, CoreError> {
        if request.text.trim().is_empty() {
            return Err(CoreError::InvalidInput("empty text".to_string()));
        }

        let entries = dictionary.all_entries();
        match request.direction {
            Direction::SourceToTarget => Ok(TranslationResult {
                reconstructed_source: request.text.clone(),
                translated_text: substitute(&request.text, entries)?,
            }),
            Direction::TargetToSource => Ok(TranslationResult {
                reconstructed_source: self.reconstruct(&request.text, entries),
                translated_text: request.text.clone(),
            }),
        }
    }

    fn reconstruct(&self, text: &str, entries: &[DictionaryEntry]) -> String {
        let haystack = text.to_lowercase();
        let mut reconstructed = String::new();

        for entry in entries {
            if haystack.contains(&entry.target_term.to_lowercase()) {
                reconstructed.push_str(&entry.source_term);
                reconstructed.push(' ');
            }
        }

        if reconstructed.is_empty() {
            tracing::debug!("No target terms found, using fallback phrase");
            return self.fallback_phrase.clone();
        }

        reconstructed.trim_end().to_string()
    }
}

/// Sequential substitution: each entry rewrites the output of the previous one
fn substitute(text: &str, entries: &[DictionaryEntry]) -> Result<String, CoreError> {
    let mut translated = text.to_string();

    for entry in entries {
        let pattern = whole_word_pattern(&entry.source_term)?;
        let replaced = pattern.replace_all(&translated, NoExpand(&entry.target_term));
        translated = replaced.into_owned();
    }

    Ok(translated)
}

/// Term bounded by a non-word character or the string edge on each side.
/// Half boundaries only look outward, so terms with punctuation at an edge
/// still match.
fn whole_word_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"\b{{start-half}}{}\b{{end-half}}",
        regex::escape(term)
    ))
}
