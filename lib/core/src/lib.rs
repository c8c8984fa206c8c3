//! # topicmatch Core
//!
//! Core library for the topicmatch recommendation engine.
//!
//! This crate provides the building blocks of text matching:
//!
//! - [`Tokenizer`] - Unicode word segmentation with run joining for Japanese text
//! - [`Vocabulary`] - TF-IDF model learned from one corpus snapshot
//! - [`TermVector`] - Sparse, non-negative term weight vector
//! - [`Document`] / [`LanguageCandidate`] - Caller-owned input records
//! - [`LanguageFilter`] - Attribute filters for language selection
//! - [`EngineConfig`] - Selection mode, top-k size, fallback policy, tokenizer settings
//!
//! ## Example
//!
//! ```rust
//! use topicmatch_core::{tokenize, Vocabulary};
//!
//! let corpus: Vec<Vec<String>> = ["タスク管理アプリ", "地図アプリ"]
//!     .iter()
//!     .map(|text| tokenize(text))
//!     .collect();
//! let (vocabulary, documents) = Vocabulary::build(&corpus).unwrap();
//!
//! let query = vocabulary.project(&tokenize("タスクを管理する"));
//! let first = query.cosine_similarity(&documents[0]).unwrap();
//! let second = query.cosine_similarity(&documents[1]).unwrap();
//! assert!(first > second);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod tokenizer;
pub mod vector;
pub mod vectorizer;

pub use config::{EngineConfig, FallbackPolicy, SelectMode, DEFAULT_TOP_K};
pub use document::{Document, DocumentId, LanguageCandidate};
pub use error::{Error, Result};
pub use filter::{CandidateFilter, LanguageFilter};
pub use tokenizer::{tokenize, Tokenizer, TokenizerConfig, DEFAULT_MIN_TOKEN_CHARS};
pub use vector::TermVector;
pub use vectorizer::Vocabulary;
