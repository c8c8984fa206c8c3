use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Empty corpus: no documents to vectorize")]
    EmptyCorpus,

    #[error("No topics available")]
    NoTopicsAvailable,

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("No language matches the requested filter")]
    NoMatchingLanguage,

    #[error("No relevant topic found for the query")]
    NoRelevantMatch,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for conditions caused by absent data rather than caller misuse.
    ///
    /// Callers map these to a "no data" response instead of an internal error.
    #[must_use]
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            Error::EmptyCorpus
                | Error::NoTopicsAvailable
                | Error::NoMatchingLanguage
                | Error::NoRelevantMatch
        )
    }
}
