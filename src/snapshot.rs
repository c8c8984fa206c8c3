//! JSON snapshots of topics, languages and engine configuration
//!
//! The engine never reads files itself; these helpers exist for the CLI and
//! for callers that keep their corpus on disk.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use topicmatch_core::{Document, EngineConfig, LanguageCandidate};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load a corpus snapshot: a JSON array of `{id, name, description}`
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let corpus: Vec<Document> = read_json(path.as_ref())?;
    tracing::info!(topics = corpus.len(), path = %path.as_ref().display(), "loaded corpus");
    Ok(corpus)
}

/// Load language candidates: a JSON array of `{id, name, is_modern, is_popular}`
pub fn load_languages<P: AsRef<Path>>(path: P) -> Result<Vec<LanguageCandidate>> {
    let languages: Vec<LanguageCandidate> = read_json(path.as_ref())?;
    tracing::info!(languages = languages.len(), path = %path.as_ref().display(), "loaded languages");
    Ok(languages)
}

/// Load and validate an engine configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config = EngineConfig::from_json_str(&json).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
