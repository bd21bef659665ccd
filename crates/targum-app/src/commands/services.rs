use std::io::Write;
use std::path::Path;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use targum_core::{Direction, TranslationRequest};

use super::translate::render_translation;
use crate::state::AppState;

pub async fn handle_health(state: &AppState, out: &mut dyn Write) -> anyhow::Result<()> {
    let labels = state.labels();
    if state.api_client().check_connection().await {
        writeln!(out, "{}", labels.server_connected)?;
    } else {
        writeln!(out, "{}", labels.server_disconnected)?;
    }
    Ok(())
}

pub async fn handle_ocr(
    state: &AppState,
    image: &Path,
    translate: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    let bytes = tokio::fs::read(image).await?;
    tracing::info!("Sending {} bytes from {} to OCR", bytes.len(), image.display());

    let text = state
        .api_client()
        .extract_text_from_image(&BASE64_STANDARD.encode(&bytes))
        .await;
    if text.trim().is_empty() {
        anyhow::bail!(labels.service_unavailable);
    }

    writeln!(out, "{text}")?;

    if translate {
        let request = TranslationRequest::new(text, Direction::SourceToTarget);
        let result = state.translator.translate_sync(&request)?;
        writeln!(out)?;
        render_translation(labels, &result, out)?;
    }

    Ok(())
}

pub async fn handle_ai_assist(
    state: &AppState,
    text: &str,
    prompt: Option<&str>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    if text.trim().is_empty() {
        anyhow::bail!(labels.empty_text);
    }

    let answer = state.api_client().ask_ai_assistant(text, prompt).await;
    if answer.is_empty() {
        anyhow::bail!(labels.service_unavailable);
    }

    writeln!(out, "{answer}")?;
    Ok(())
}

pub async fn handle_analyze(
    state: &AppState,
    text: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let labels = state.labels();
    if text.trim().is_empty() {
        anyhow::bail!(labels.empty_text);
    }

    let result = state.ai_client().analyze_structure(text).await;
    if result.analysis.is_empty() {
        anyhow::bail!(labels.service_unavailable);
    }

    writeln!(out, "{}", result.analysis)?;
    for phrase in &result.structure.phrases {
        writeln!(out, "  - {phrase}")?;
    }
    if !result.structure.grammar.is_empty() {
        writeln!(out, "  {}", result.structure.grammar)?;
    }
    if !result.structure.contextual_meaning.is_empty() {
        writeln!(out, "  {}", result.structure.contextual_meaning)?;
    }
    Ok(())
}
