//! Recommendation selector
//!
//! Composes tokenizer, vectorizer and ranker into one call per request:
//!
//! ```text
//! corpus descriptions ─ tokenize ─┐
//!                                 ├─ build ─ vocabulary + document vectors ─┐
//! query text ──────── tokenize ───┘                                         ├─ rank ─ select
//!                                      project(query, vocabulary) ──────────┘
//! ```
//!
//! Nothing derived from a corpus outlives the call, so one engine can serve
//! any number of threads, each with its own corpus snapshot and random source.

use crate::explain::MatchOutcome;
use crate::rank::{MatchKind, Ranker, Ranking};
use rand::Rng;
use serde::{Deserialize, Serialize};
use topicmatch_core::{
    CandidateFilter, Document, EngineConfig, Error, LanguageCandidate, LanguageFilter, Result, SelectMode,
    Tokenizer, Vocabulary,
};

/// Language values meaning "choose one for me"
pub const UNDECIDED_LANGUAGE: &[&str] = &["わからない", "unknown"];

/// What the learner asked for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRequest {
    pub free_text: String,
    pub interest_fields: Vec<String>,
    pub programming_language: String,
    pub learning_preference: String,
}

impl RecommendationRequest {
    /// Free text and interest fields joined into one query string
    pub fn query_text(&self) -> String {
        std::iter::once(self.free_text.as_str())
            .chain(self.interest_fields.iter().map(String::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn language_request(&self) -> LanguageRequest {
        LanguageRequest::from_preference(&self.programming_language, &self.learning_preference)
    }
}

/// How the language half of a recommendation is decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageRequest {
    /// Caller already chose; returned unchanged
    Explicit(String),
    /// Draw from the candidates, optionally filtered
    Pick(Option<LanguageFilter>),
}

impl LanguageRequest {
    /// Interpret a requested language and a technology preference.
    ///
    /// An empty language or one of [`UNDECIDED_LANGUAGE`] asks for a pick
    /// filtered by [`LanguageFilter::from_preference`].
    pub fn from_preference(language: &str, preference: &str) -> Self {
        let language = language.trim();
        let undecided =
            language.is_empty() || UNDECIDED_LANGUAGE.iter().any(|u| language.eq_ignore_ascii_case(u));
        if undecided {
            LanguageRequest::Pick(LanguageFilter::from_preference(preference))
        } else {
            LanguageRequest::Explicit(language.to_string())
        }
    }
}

/// The language side of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChoice<'a> {
    Explicit(&'a str),
    Candidate(&'a LanguageCandidate),
}

impl<'a> LanguageChoice<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            LanguageChoice::Explicit(name) => name,
            LanguageChoice::Candidate(candidate) => &candidate.name,
        }
    }
}

/// Final (topic, language) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub topic: Document,
    pub language: String,
    pub score: f32,
    pub kind: MatchKind,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "build {} in {}", self.topic.name, self.language)
    }
}

/// Stateless recommendation engine; holds configuration only
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: EngineConfig,
    tokenizer: Tokenizer,
    ranker: Ranker,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(config.tokenizer),
            ranker: Ranker::from_config(&config),
            config,
        })
    }

    /// Default configuration with a different selection mode
    pub fn with_mode(mode: SelectMode) -> Self {
        let config = EngineConfig::default().with_mode(mode);
        Self {
            tokenizer: Tokenizer::new(config.tokenizer),
            ranker: Ranker::from_config(&config),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score every corpus document against the query text
    pub fn rank_corpus(&self, query_text: &str, corpus: &[Document]) -> Result<Ranking> {
        if corpus.is_empty() {
            return Err(Error::NoTopicsAvailable);
        }

        let descriptions: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| self.tokenizer.tokenize(&doc.description))
            .collect();
        let (vocabulary, documents) = Vocabulary::build(&descriptions)?;

        let query_tokens = self.tokenizer.tokenize(query_text);
        let query = vocabulary.project(&query_tokens);
        tracing::debug!(
            query_tokens = query_tokens.len(),
            matched_terms = query.nnz(),
            "projected query"
        );

        self.ranker.rank(&query, &documents)
    }

    /// Rank and select, keeping the ranking for inspection
    pub fn explain_recommendation<'a, R: Rng>(
        &self,
        query_text: &str,
        corpus: &'a [Document],
        rng: &mut R,
    ) -> Result<MatchOutcome<'a>> {
        let ranking = self.rank_corpus(query_text, corpus)?;
        let selection = self.ranker.select(&ranking, rng)?;
        // rank_corpus yields one entry per corpus document, so the index is in bounds
        let document = &corpus[selection.index];

        tracing::debug!(
            index = selection.index,
            score = selection.score,
            kind = ?selection.kind,
            topic = %document.name,
            "selected topic"
        );

        Ok(MatchOutcome {
            document,
            selection,
            ranking,
        })
    }

    /// Pick the topic document for a query text
    pub fn select_recommendation<'a, R: Rng>(
        &self,
        query_text: &str,
        corpus: &'a [Document],
        rng: &mut R,
    ) -> Result<&'a Document> {
        self.explain_recommendation(query_text, corpus, rng)
            .map(|outcome| outcome.document)
    }

    /// Resolve the language half of a request
    pub fn choose_language<'a, R: Rng>(
        &self,
        request: &'a LanguageRequest,
        candidates: &'a [LanguageCandidate],
        rng: &mut R,
    ) -> Result<LanguageChoice<'a>> {
        match request {
            LanguageRequest::Explicit(name) => Ok(LanguageChoice::Explicit(name)),
            LanguageRequest::Pick(filter) => {
                let filter = filter.as_ref().map(|f| f as &dyn CandidateFilter);
                select_language(candidates, filter, rng).map(LanguageChoice::Candidate)
            }
        }
    }

    /// Topic first, then language
    pub fn recommend<R: Rng>(
        &self,
        request: &RecommendationRequest,
        corpus: &[Document],
        languages: &[LanguageCandidate],
        rng: &mut R,
    ) -> Result<Recommendation> {
        let outcome = self.explain_recommendation(&request.query_text(), corpus, rng)?;
        let language_request = request.language_request();
        let language = self.choose_language(&language_request, languages, rng)?;

        Ok(Recommendation {
            topic: outcome.document.clone(),
            language: language.name().to_string(),
            score: outcome.selection.score,
            kind: outcome.selection.kind,
        })
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_mode(SelectMode::Best)
    }
}

/// Pick the topic document for a query text using default settings
pub fn select_recommendation<'a, R: Rng>(
    query_text: &str,
    corpus: &'a [Document],
    mode: SelectMode,
    rng: &mut R,
) -> Result<&'a Document> {
    RecommendationEngine::with_mode(mode).select_recommendation(query_text, corpus, rng)
}

/// Uniform pick among the candidates accepted by `filter` (all, if `None`)
pub fn select_language<'a, R: Rng>(
    candidates: &'a [LanguageCandidate],
    filter: Option<&dyn CandidateFilter>,
    rng: &mut R,
) -> Result<&'a LanguageCandidate> {
    let pool: Vec<&LanguageCandidate> = candidates
        .iter()
        .filter(|c| filter.map_or(true, |f| f.matches(c)))
        .collect();

    if pool.is_empty() {
        return Err(Error::NoMatchingLanguage);
    }

    Ok(pool[rng.random_range(0..pool.len())])
}
