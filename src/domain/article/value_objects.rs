use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Opaque article identifier. Ids are embedded in generated file names
/// (visual diffs), so path separators are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        if value.contains('/') || value.contains('\\') {
            return Err(DomainError::Validation(
                "article id cannot contain path separators".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleBody> for String {
    fn from(value: ArticleBody) -> Self {
        value.0
    }
}

/// Review workflow status. Transitions are guarded by [`super::Article`];
/// the raw enum only knows how to render and parse itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Submitted,
    EditorAssigned,
    CorrectionsRequested,
    Approved,
    Published,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::EditorAssigned => "editor-assigned",
            Self::CorrectionsRequested => "corrections-requested",
            Self::Approved => "approved",
            Self::Published => "published",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "submitted" => Ok(Self::Submitted),
            "editor-assigned" => Ok(Self::EditorAssigned),
            "corrections-requested" => Ok(Self::CorrectionsRequested),
            "approved" => Ok(Self::Approved),
            "published" => Ok(Self::Published),
            other => Err(DomainError::Validation(format!(
                "unknown article status: {other}"
            ))),
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_rejects_empty_and_separators() {
        assert!(ArticleId::new("").is_err());
        assert!(ArticleId::new("   ").is_err());
        assert!(ArticleId::new("a/b").is_err());
        assert!(ArticleId::new("a\\b").is_err());
        assert!(ArticleId::new("A1").is_ok());
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            ArticleStatus::Submitted,
            ArticleStatus::EditorAssigned,
            ArticleStatus::CorrectionsRequested,
            ArticleStatus::Approved,
            ArticleStatus::Published,
        ] {
            assert_eq!(ArticleStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(ArticleStatus::parse("draft").is_err());
    }
}
