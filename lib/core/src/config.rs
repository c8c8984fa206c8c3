//! Engine configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::error::{Error, Result};
use crate::tokenizer::TokenizerConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of leading candidates drawn from in top-k mode
pub const DEFAULT_TOP_K: usize = 3;

/// How the final document is picked from a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectMode {
    /// Highest score, lowest corpus index among ties
    #[default]
    Best,
    /// Uniform pick among the `top_k` highest scores
    #[serde(alias = "topk-random", alias = "topk")]
    TopKRandom,
}

impl FromStr for SelectMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "best" | "best-match" => Ok(SelectMode::Best),
            "top-k-random" | "topk-random" | "topk" => Ok(SelectMode::TopKRandom),
            other => Err(Error::InvalidConfig(format!("unknown select mode: {}", other))),
        }
    }
}

impl std::fmt::Display for SelectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectMode::Best => write!(f, "best"),
            SelectMode::TopKRandom => write!(f, "top-k-random"),
        }
    }
}

/// What to do when no document shares a term with the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Pick uniformly from the whole corpus
    #[default]
    Random,
    /// Fail with [`Error::NoRelevantMatch`]
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub mode: SelectMode,

    #[serde(default = "default_top_k")]
    pub top_k: usize,

    #[serde(default)]
    pub fallback: FallbackPolicy,

    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: SelectMode::default(),
            top_k: DEFAULT_TOP_K,
            fallback: FallbackPolicy::default(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".to_string()));
        }
        if self.tokenizer.min_token_chars == 0 {
            return Err(Error::InvalidConfig("tokenizer.min_token_chars must be at least 1".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SelectMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}
