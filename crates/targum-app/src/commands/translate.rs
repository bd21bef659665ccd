use std::io::Write;

use targum_core::{Direction, TranslationRequest, TranslationResult};
use targum_translator::{TranslateError, Translator};
use targum_types::Labels;

use crate::state::AppState;

pub async fn handle_translate(
    state: &AppState,
    text: String,
    reverse: bool,
    remote: bool,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    let direction = if reverse {
        Direction::TargetToSource
    } else {
        Direction::SourceToTarget
    };
    let request = TranslationRequest::new(text, direction);

    let translator: Box<dyn Translator> = if remote {
        Box::new(state.remote_translator())
    } else {
        Box::new(state.translator.clone())
    };
    tracing::debug!("Translating with provider: {}", translator.metadata().name);

    let result = match translator.translate(&request).await {
        Ok(result) => result,
        Err(TranslateError::InvalidInput(_)) => anyhow::bail!(labels.empty_text),
        Err(TranslateError::ServiceUnavailable(reason)) => {
            tracing::warn!("Translation unavailable: {reason}");
            anyhow::bail!(labels.service_unavailable)
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        render_translation(labels, &result, out)?;
    }

    Ok(())
}

pub fn render_translation(
    labels: &Labels,
    result: &TranslationResult,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(out, "{}: {}", labels.aramaic, result.reconstructed_source)?;
    writeln!(out, "{}: {}", labels.translation, result.translated_text)
}
