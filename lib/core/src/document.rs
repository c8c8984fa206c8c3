use serde::{Deserialize, Serialize};

/// Identifier of a topic document, as stored by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Integer(u64),
    String(String),
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentId::Integer(i) => write!(f, "{}", i),
            DocumentId::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for DocumentId {
    fn from(i: u64) -> Self {
        DocumentId::Integer(i)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId::String(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId::String(s.to_string())
    }
}

/// A candidate topic: a name plus the free-text description it is matched on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub description: String,
}

impl Document {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<DocumentId>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A programming language that can be paired with a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCandidate {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_modern: bool,
    #[serde(default)]
    pub is_popular: bool,
}

impl LanguageCandidate {
    #[inline]
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, is_modern: bool, is_popular: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_modern,
            is_popular,
        }
    }
}
