//! # topicmatch
//!
//! Recommends a portfolio project topic and a programming language from a
//! learner's free-text interests.
//!
//! Topic descriptions are tokenized, weighted with TF-IDF and compared to the
//! query by cosine similarity. The best match (or a random pick among the top
//! few) becomes the topic; the language is either the one the learner named or
//! a random pick among candidates that fit their preference.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! topicmatch recommend --corpus data/topics.json --languages data/languages.json \
//!     --text "タスクを管理したい" --preference modern
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use topicmatch::prelude::*;
//!
//! let corpus = vec![
//!     Document::new(1u64, "todo list", "タスクや予定を管理するためのアプリ。"),
//!     Document::new(2u64, "map app", "地図を表示し、目的地までのルート案内を提供するアプリ。"),
//! ];
//! let languages = vec![
//!     LanguageCandidate::new(1, "Rust", true, false),
//!     LanguageCandidate::new(2, "COBOL", false, false),
//! ];
//!
//! let engine = RecommendationEngine::new(EngineConfig::default()).unwrap();
//! let request = RecommendationRequest {
//!     free_text: "タスクを管理する".to_string(),
//!     programming_language: "わからない".to_string(),
//!     learning_preference: "modern".to_string(),
//!     ..Default::default()
//! };
//! let mut rng = StdRng::seed_from_u64(7);
//! let rec = engine.recommend(&request, &corpus, &languages, &mut rng).unwrap();
//! assert_eq!(rec.to_string(), "build todo list in Rust");
//! ```
//!
//! ## Crate Structure
//!
//! - `topicmatch-core` - Tokenizer, sparse term vectors, TF-IDF vocabulary, filters, config
//! - `topicmatch-similarity` - Ranking, selection, recommendation engine, explanations

pub mod snapshot;

// Re-export core types
pub use topicmatch_core::{
    tokenize, CandidateFilter, Document, DocumentId, EngineConfig, Error, FallbackPolicy, LanguageCandidate,
    LanguageFilter, Result, SelectMode, TermVector, Tokenizer, TokenizerConfig, Vocabulary,
};

// Re-export similarity
pub use topicmatch_similarity::{
    rank, select, select_language, select_recommendation, LanguageChoice, LanguageRequest, MatchKind,
    MatchOutcome, MatchReport, Ranker, Ranking, Recommendation, RecommendationEngine, RecommendationRequest,
    ScoredDocument, Selection,
};

pub use snapshot::{load_config, load_corpus, load_languages};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        select_language, select_recommendation, Document, DocumentId, EngineConfig, Error, FallbackPolicy,
        LanguageCandidate, LanguageFilter, LanguageRequest, MatchKind, Ranking, Recommendation,
        RecommendationEngine, RecommendationRequest, Result, SelectMode,
    };
}
