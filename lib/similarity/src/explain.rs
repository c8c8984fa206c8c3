//! Explainability for recommendation results
//!
//! Serializable views over a ranking that show how the final topic was
//! chosen: the score of every document and the kind of pick that was made.

use crate::rank::{MatchKind, Ranking, Selection};
use serde::Serialize;
use topicmatch_core::{Document, DocumentId};

/// One ranked document with its identity resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedScore {
    pub rank: usize,
    pub index: usize,
    pub id: DocumentId,
    pub name: String,
    pub score: f32,
}

impl ExplainedScore {
    /// Resolve every ranking entry against the corpus it was computed from
    pub fn from_ranking(ranking: &Ranking, corpus: &[Document]) -> Vec<Self> {
        ranking
            .iter()
            .enumerate()
            .filter_map(|(rank, scored)| {
                corpus.get(scored.index).map(|doc| Self {
                    rank: rank + 1,
                    index: scored.index,
                    id: doc.id.clone(),
                    name: doc.name.clone(),
                    score: scored.score,
                })
            })
            .collect()
    }
}

/// A selected document together with the ranking it was drawn from
#[derive(Debug, Clone)]
pub struct MatchOutcome<'a> {
    pub document: &'a Document,
    pub selection: Selection,
    pub ranking: Ranking,
}

impl<'a> MatchOutcome<'a> {
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.selection.kind == MatchKind::Fallback
    }

    /// Serializable report; `limit` caps the number of ranking rows
    pub fn explain(&self, corpus: &[Document], limit: Option<usize>) -> MatchReport {
        let mut ranking = ExplainedScore::from_ranking(&self.ranking, corpus);
        if let Some(limit) = limit {
            ranking.truncate(limit);
        }
        MatchReport {
            id: self.document.id.clone(),
            name: self.document.name.clone(),
            score: self.selection.score,
            kind: self.selection.kind,
            ranking,
        }
    }
}

/// Response structure for a ranking request
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub id: DocumentId,
    pub name: String,
    pub score: f32,
    pub kind: MatchKind,
    pub ranking: Vec<ExplainedScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new(1u64, "todo list", "タスクや予定を管理するためのアプリ。"),
            Document::new(2u64, "map app", "地図を表示するアプリ。"),
            Document::new(3u64, "chat app", "メッセージのやり取りができるアプリ。"),
        ]
    }

    #[test]
    fn test_explained_scores_follow_ranking() {
        let corpus = corpus();
        let ranking = Ranking::from_scores(vec![0.1, 0.5, 0.0]);
        let explained = ExplainedScore::from_ranking(&ranking, &corpus);

        assert_eq!(explained.len(), 3);
        assert_eq!(explained[0].rank, 1);
        assert_eq!(explained[0].name, "map app");
        assert_eq!(explained[2].id, DocumentId::Integer(3));
    }

    #[test]
    fn test_report_serialization() {
        let corpus = corpus();
        let ranking = Ranking::from_scores(vec![0.1, 0.5, 0.0]);
        let outcome = MatchOutcome {
            document: &corpus[1],
            selection: Selection {
                index: 1,
                score: 0.5,
                kind: MatchKind::Best,
            },
            ranking,
        };
        assert!(!outcome.is_fallback());

        let report = outcome.explain(&corpus, Some(2));
        assert_eq!(report.ranking.len(), 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "best");
        assert_eq!(json["id"], 2);
        assert_eq!(json["ranking"][0]["name"], "map app");
    }
}
