//! Word tokenizer for topic descriptions and interest queries
//!
//! Segmentation is delegated to `charabia`, which detects the script and
//! runs a dictionary-based morphological segmenter for languages written
//! without spaces (lindera for Japanese):
//!
//! ```text
//! 収支管理や投資情報  ->  収支 | 管理 | や | 投資 | 情報
//! ```
//!
//! Only word tokens are kept. Each is taken verbatim from the input, then
//! lowercased and filtered by a minimum character length.

use charabia::Tokenize;
use serde::{Deserialize, Serialize};

/// Tokens with fewer characters than this are dropped by default
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;

/// Tokenizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Minimum token length, counted in characters (not bytes)
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,

    /// Lowercase tokens before they reach the vocabulary
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_min_token_chars() -> usize {
    DEFAULT_MIN_TOKEN_CHARS
}

fn default_lowercase() -> bool {
    true
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            lowercase: true,
        }
    }
}

/// Splits natural-language text into normalized word tokens
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    #[inline]
    #[must_use]
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize text. Empty or whitespace-only input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        text.tokenize()
            .filter(|token| token.is_word())
            .map(|token| self.normalize(&text[token.byte_start..token.byte_end]))
            .filter(|token| token.chars().count() >= self.config.min_token_chars)
            .collect()
    }

    fn normalize(&self, word: &str) -> String {
        if self.config.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

/// Tokenize with the default settings
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}
