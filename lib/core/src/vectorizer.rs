//! TF-IDF vectorizer
//!
//! Builds a vocabulary and smoothed inverse document frequencies from the
//! tokenized corpus of a single call, then projects documents and queries into
//! that space:
//!
//! ```text
//! idf(t)    = ln((1 + N) / (1 + df(t))) + 1
//! w(t, d)   = count(t, d) * idf(t)
//! ```
//!
//! Every vector is L2-normalized afterwards. Vocabulary indices follow the
//! lexicographic order of the terms, so the same corpus always produces the
//! same vectors.

use crate::error::{Error, Result};
use crate::vector::TermVector;
use ahash::{AHashMap, AHashSet};

/// Terms observed in one corpus together with their IDF weights
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: AHashMap<String, usize>,
    idf: Vec<f32>,
    num_documents: usize,
}

impl Vocabulary {
    /// Learn the vocabulary from tokenized documents and vectorize each of them.
    ///
    /// Returns one vector per document, in corpus order.
    pub fn build(corpus: &[Vec<String>]) -> Result<(Self, Vec<TermVector>)> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut doc_freq: AHashMap<&str, usize> = AHashMap::new();
        for tokens in corpus {
            let unique: AHashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = doc_freq.keys().map(|t| (*t).to_string()).collect();
        terms.sort_unstable();

        let n = corpus.len() as f64;
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
                (((1.0 + n) / (1.0 + df)).ln() + 1.0) as f32
            })
            .collect();

        let index: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let vocabulary = Self {
            terms,
            index,
            idf,
            num_documents: corpus.len(),
        };

        let vectors = corpus.iter().map(|tokens| vocabulary.project(tokens)).collect();

        tracing::debug!(
            documents = vocabulary.num_documents,
            terms = vocabulary.len(),
            "built tf-idf vocabulary"
        );

        Ok((vocabulary, vectors))
    }

    /// Map tokens into this vocabulary. Unknown terms are ignored.
    pub fn project(&self, tokens: &[String]) -> TermVector {
        let mut counts: AHashMap<usize, u32> = AHashMap::new();
        for token in tokens {
            if let Some(&i) = self.index.get(token) {
                *counts.entry(i).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(i, count)| (i, count as f32 * self.idf[i]))
            .collect();

        let mut vector = TermVector::from_unique_entries(self.len(), entries);
        vector.normalize();
        vector
    }

    /// Number of terms, which is also the dimensionality of every vector
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the vocabulary was learned from
    #[inline]
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Terms in index order
    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.index_of(term).map(|i| self.idf[i])
    }
}

/// Learn a vocabulary from tokenized documents; see [`Vocabulary::build`]
#[inline]
pub fn build(corpus: &[Vec<String>]) -> Result<(Vocabulary, Vec<TermVector>)> {
    Vocabulary::build(corpus)
}

/// Project tokens into an existing vocabulary; see [`Vocabulary::project`]
#[inline]
pub fn project(tokens: &[String], vocabulary: &Vocabulary) -> TermVector {
    vocabulary.project(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn docs(texts: &[&str]) -> Vec<Vec<String>> {
        texts.iter().map(|t| tokenize(t)).collect()
    }

    #[test]
    fn test_empty_corpus() {
        assert_eq!(build(&[]).unwrap_err(), Error::EmptyCorpus);
    }

    #[test]
    fn test_smoothed_idf() {
        let corpus = docs(&["chat app", "map app"]);
        let (vocab, _) = build(&corpus).unwrap();

        assert_eq!(vocab.terms(), &["app", "chat", "map"]);
        assert!((vocab.idf("app").unwrap() - 1.0).abs() < 1e-6);
        let rare = (3.0f64 / 2.0).ln() as f32 + 1.0;
        assert!((vocab.idf("chat").unwrap() - rare).abs() < 1e-6);
        assert!(vocab.idf("weather").is_none());
    }

    #[test]
    fn test_vectors_share_dimension_and_unit_norm() {
        let corpus = docs(&["chat app", "map app", "weather forecast app"]);
        let (vocab, vectors) = build(&corpus).unwrap();

        assert_eq!(vectors.len(), 3);
        for v in &vectors {
            assert_eq!(v.dim(), vocab.len());
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
        assert_eq!(project(&tokenize("chat"), &vocab).dim(), vocab.len());
    }

    #[test]
    fn test_term_weights() {
        // "chat" is rarer than "app", so it carries more weight
        let corpus = docs(&["chat app", "map app"]);
        let (vocab, vectors) = build(&corpus).unwrap();
        let chat = vectors[0].get(vocab.index_of("chat").unwrap());
        let app = vectors[0].get(vocab.index_of("app").unwrap());
        assert!(chat > app);
    }

    #[test]
    fn test_document_without_terms_is_zero() {
        let corpus = docs(&["chat app", "!!", ""]);
        let (_, vectors) = build(&corpus).unwrap();
        assert!(vectors[1].is_zero());
        assert!(vectors[2].is_zero());
    }

    #[test]
    fn test_unknown_terms_dropped() {
        let corpus = docs(&["chat app", "map app"]);
        let (vocab, _) = build(&corpus).unwrap();

        let v = project(&tokenize("quantum blockchain"), &vocab);
        assert!(v.is_zero());
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_build_is_reproducible() {
        let corpus = docs(&[
            "タスクや予定を管理するためのアプリ。",
            "リアルタイムでメッセージのやり取りができるアプリ。",
            "地図を表示し、目的地までのルート案内を提供するアプリ。",
        ]);
        let (vocab_a, vectors_a) = build(&corpus).unwrap();
        let (vocab_b, vectors_b) = build(&corpus).unwrap();
        assert_eq!(vocab_a.terms(), vocab_b.terms());
        assert_eq!(vectors_a, vectors_b);
    }
}
