//! # topicmatch Similarity
//!
//! Cosine ranking and recommendation selection on top of `topicmatch-core`.
//!
//! ## Features
//!
//! - **Ranking**: cosine similarity of a query against every corpus document,
//!   ordered by score with a stable index tie-break
//! - **Selection**: best match or a uniform pick among the top k, with a
//!   uniform fallback when nothing matches
//! - **Language choice**: filtered uniform pick among language candidates
//! - **Explainability**: serializable per-document score reports
//!
//! ## Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use topicmatch_core::{Document, SelectMode};
//! use topicmatch_similarity::select_recommendation;
//!
//! let corpus = vec![
//!     Document::new(1u64, "todo list", "タスク管理アプリ"),
//!     Document::new(2u64, "map app", "地図アプリ"),
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let topic = select_recommendation("タスクを管理する", &corpus, SelectMode::Best, &mut rng).unwrap();
//! assert_eq!(topic.name, "todo list");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tokenizer  │────>│ Vocabulary  │────>│   Ranker    │
//! │ (text→terms)│     │  (tf-idf)   │     │  (cosine)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │  Selector   │
//!                                         │(topic, lang)│
//!                                         └─────────────┘
//! ```

pub mod explain;
pub mod rank;
pub mod selector;

pub use explain::{ExplainedScore, MatchOutcome, MatchReport};
pub use rank::{rank, select, MatchKind, Ranker, Ranking, ScoredDocument, Selection};
pub use selector::{
    select_language, select_recommendation, LanguageChoice, LanguageRequest, Recommendation,
    RecommendationEngine, RecommendationRequest, UNDECIDED_LANGUAGE,
};
pub use topicmatch_core::{Error, Result};
