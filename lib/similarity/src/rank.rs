//! Cosine ranking and final pick selection
//!
//! [`rank`] scores every document vector against the query and orders the
//! result by descending score, breaking ties by ascending corpus index.
//! [`Ranker::select`] then turns a ranking into a single corpus index
//! according to the configured [`SelectMode`] and [`FallbackPolicy`].

use ordered_float::OrderedFloat;
use rand::Rng;
use serde::Serialize;
use topicmatch_core::{EngineConfig, Error, FallbackPolicy, Result, SelectMode, TermVector, DEFAULT_TOP_K};

/// Similarity of one corpus document to the query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    /// Position of the document in the corpus
    pub index: usize,
    /// Cosine similarity in [0.0, 1.0]
    pub score: f32,
}

/// All documents of a corpus, best first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<ScoredDocument>,
}

impl Ranking {
    /// Order raw per-document scores. `scores[i]` belongs to corpus index `i`.
    pub fn from_scores(scores: Vec<f32>) -> Self {
        let mut entries: Vec<ScoredDocument> = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| ScoredDocument {
                index,
                score: if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 },
            })
            .collect();

        entries.sort_by(|a, b| {
            OrderedFloat(b.score)
                .cmp(&OrderedFloat(a.score))
                .then(a.index.cmp(&b.index))
        });

        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[ScoredDocument] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredDocument> {
        self.entries.iter()
    }

    #[inline]
    pub fn best(&self) -> Option<&ScoredDocument> {
        self.entries.first()
    }

    /// Highest score, 0.0 for an empty ranking
    #[inline]
    pub fn max_score(&self) -> f32 {
        self.best().map_or(0.0, |s| s.score)
    }

    /// True when at least one document shares a term with the query
    #[inline]
    pub fn has_match(&self) -> bool {
        self.max_score() > 0.0
    }

    /// The first `k` entries, or all of them if the ranking is shorter
    pub fn top(&self, k: usize) -> &[ScoredDocument] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// Score of the document at a corpus index
    pub fn score_of(&self, index: usize) -> Option<f32> {
        self.entries.iter().find(|s| s.index == index).map(|s| s.score)
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a ScoredDocument;
    type IntoIter = std::slice::Iter<'a, ScoredDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Score every document against the query.
///
/// All vectors must come from the same vocabulary; a dimensionality mismatch
/// is reported instead of truncating or padding.
pub fn rank(query: &TermVector, documents: &[TermVector]) -> Result<Ranking> {
    let scores = documents
        .iter()
        .map(|doc| {
            if doc.dim() != query.dim() {
                return Err(Error::DimensionMismatch {
                    expected: query.dim(),
                    actual: doc.dim(),
                });
            }
            query.cosine_similarity(doc)
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok(Ranking::from_scores(scores))
}

/// How a selection was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Best,
    TopK,
    /// No document matched; picked uniformly from the whole corpus
    Fallback,
}

/// The document picked from a ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Selection {
    pub index: usize,
    pub score: f32,
    pub kind: MatchKind,
}

/// Turns rankings into picks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    mode: SelectMode,
    top_k: usize,
    fallback: FallbackPolicy,
}

impl Ranker {
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            top_k: DEFAULT_TOP_K,
            fallback: FallbackPolicy::Random,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.mode)
            .with_top_k(config.top_k)
            .with_fallback(config.fallback)
    }

    /// Set the top-k pool size (at least 1)
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    #[inline]
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    #[inline]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    #[inline]
    pub fn rank(&self, query: &TermVector, documents: &[TermVector]) -> Result<Ranking> {
        rank(query, documents)
    }

    /// Pick one corpus index from a ranking.
    ///
    /// When every score is zero the pick falls back to a uniform draw over
    /// the whole corpus, or fails with [`Error::NoRelevantMatch`] under
    /// [`FallbackPolicy::Reject`].
    pub fn select<R: Rng>(&self, ranking: &Ranking, rng: &mut R) -> Result<Selection> {
        if ranking.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        if !ranking.has_match() {
            return match self.fallback {
                FallbackPolicy::Reject => Err(Error::NoRelevantMatch),
                FallbackPolicy::Random => {
                    let index = rng.random_range(0..ranking.len());
                    tracing::warn!(
                        documents = ranking.len(),
                        index,
                        "no document shares a term with the query, picking at random"
                    );
                    Ok(Selection {
                        index,
                        score: 0.0,
                        kind: MatchKind::Fallback,
                    })
                }
            };
        }

        let (picked, kind) = match self.mode {
            SelectMode::Best => (ranking.entries[0], MatchKind::Best),
            SelectMode::TopKRandom => {
                let pool = ranking.top(self.top_k);
                (pool[rng.random_range(0..pool.len())], MatchKind::TopK)
            }
        };

        Ok(Selection {
            index: picked.index,
            score: picked.score,
            kind,
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(SelectMode::Best)
    }
}

/// Pick from a ranking with the default top-k size and random fallback
pub fn select<R: Rng>(ranking: &Ranking, mode: SelectMode, rng: &mut R) -> Result<Selection> {
    Ranker::new(mode).select(ranking, rng)
}
