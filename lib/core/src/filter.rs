// Attribute filters for language candidates
use crate::document::LanguageCandidate;
use serde::{Deserialize, Serialize};

pub trait CandidateFilter {
    fn matches(&self, candidate: &LanguageCandidate) -> bool;
}

impl<F> CandidateFilter for F
where
    F: Fn(&LanguageCandidate) -> bool,
{
    fn matches(&self, candidate: &LanguageCandidate) -> bool {
        self(candidate)
    }
}

/// Declarative filter over the boolean attributes of a language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageFilter {
    Modern(bool),
    Popular(bool),
    And(Vec<LanguageFilter>),
    Or(Vec<LanguageFilter>),
    Not(Box<LanguageFilter>),
}

impl LanguageFilter {
    #[inline]
    pub fn modern() -> Self {
        LanguageFilter::Modern(true)
    }

    #[inline]
    pub fn legacy() -> Self {
        LanguageFilter::Modern(false)
    }

    #[inline]
    pub fn popular() -> Self {
        LanguageFilter::Popular(true)
    }

    /// Filter implied by a learner's technology preference.
    ///
    /// `modern`, `legacy` and `popular` are recognized (case-insensitive);
    /// anything else means no restriction.
    pub fn from_preference(preference: &str) -> Option<Self> {
        match preference.trim().to_lowercase().as_str() {
            "modern" => Some(Self::modern()),
            "legacy" => Some(Self::legacy()),
            "popular" => Some(Self::popular()),
            _ => None,
        }
    }

    fn matches_condition(filter: &LanguageFilter, candidate: &LanguageCandidate) -> bool {
        match filter {
            LanguageFilter::Modern(expected) => candidate.is_modern == *expected,
            LanguageFilter::Popular(expected) => candidate.is_popular == *expected,
            LanguageFilter::And(filters) => filters.iter().all(|f| Self::matches_condition(f, candidate)),
            LanguageFilter::Or(filters) => filters.iter().any(|f| Self::matches_condition(f, candidate)),
            LanguageFilter::Not(filter) => !Self::matches_condition(filter, candidate),
        }
    }
}

impl CandidateFilter for LanguageFilter {
    fn matches(&self, candidate: &LanguageCandidate) -> bool {
        Self::matches_condition(self, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rust() -> LanguageCandidate {
        LanguageCandidate::new(1, "Rust", true, false)
    }

    fn cobol() -> LanguageCandidate {
        LanguageCandidate::new(2, "COBOL", false, false)
    }

    #[test]
    fn test_attribute_filters() {
        assert!(LanguageFilter::modern().matches(&rust()));
        assert!(!LanguageFilter::modern().matches(&cobol()));
        assert!(LanguageFilter::legacy().matches(&cobol()));
        assert!(!LanguageFilter::popular().matches(&rust()));
    }

    #[test]
    fn test_combinators() {
        let modern_or_popular = LanguageFilter::Or(vec![LanguageFilter::modern(), LanguageFilter::popular()]);
        assert!(modern_or_popular.matches(&rust()));
        assert!(!modern_or_popular.matches(&cobol()));

        let both = LanguageFilter::And(vec![LanguageFilter::modern(), LanguageFilter::popular()]);
        assert!(!both.matches(&rust()));

        let not_modern = LanguageFilter::Not(Box::new(LanguageFilter::modern()));
        assert!(not_modern.matches(&cobol()));
    }

    #[test]
    fn test_closure_filter() {
        let short_name = |c: &LanguageCandidate| c.name.len() <= 4;
        assert!(short_name.matches(&rust()));
        assert!(!short_name.matches(&cobol()));
    }

    #[test]
    fn test_from_preference() {
        assert_eq!(LanguageFilter::from_preference("modern"), Some(LanguageFilter::Modern(true)));
        assert_eq!(LanguageFilter::from_preference(" Legacy "), Some(LanguageFilter::Modern(false)));
        assert_eq!(LanguageFilter::from_preference("whatever"), None);
    }

    #[test]
    fn test_serde_shape() {
        let filter: LanguageFilter = serde_json::from_str(r#"{"and": [{"modern": true}, {"popular": true}]}"#).unwrap();
        assert_eq!(
            filter,
            LanguageFilter::And(vec![LanguageFilter::modern(), LanguageFilter::popular()])
        );
    }
}
