// src/domain/article/entity.rs
use crate::domain::actor::ActorId;
use crate::domain::article::events::ArticleEvent;
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleStatus, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub status: ArticleStatus,
    pub author_id: ActorId,
    pub assigned_editor_id: Option<ActorId>,
    pub co_author_ids: Vec<ActorId>,
    pub editor_comments: Option<String>,
    pub pdf_path: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Submitted → EditorAssigned.
    pub fn assign_editor(
        &mut self,
        editor: ActorId,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleEvent> {
        match self.status {
            ArticleStatus::Submitted => {
                self.status = ArticleStatus::EditorAssigned;
                self.assigned_editor_id = Some(editor.clone());
                self.updated_at = now;
                Ok(ArticleEvent::EditorAssigned {
                    id: self.id.clone(),
                    editor,
                    at: now,
                })
            }
            other => Err(self.transition_error("assign editor", other)),
        }
    }

    /// EditorAssigned → CorrectionsRequested. Comments are optional and
    /// replace any comments from an earlier review round.
    pub fn request_corrections(
        &mut self,
        comments: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleEvent> {
        match self.status {
            ArticleStatus::EditorAssigned => {
                self.status = ArticleStatus::CorrectionsRequested;
                self.editor_comments = comments.clone();
                self.updated_at = now;
                Ok(ArticleEvent::CorrectionsRequested {
                    id: self.id.clone(),
                    comments,
                    at: now,
                })
            }
            other => Err(self.transition_error("request corrections", other)),
        }
    }

    /// CorrectionsRequested → EditorAssigned. The revised manuscript goes
    /// back to the editor already on the article.
    pub fn resubmit_revision(
        &mut self,
        body: ArticleBody,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleEvent> {
        match self.status {
            ArticleStatus::CorrectionsRequested => {
                if self.assigned_editor_id.is_none() {
                    return Err(DomainError::Conflict(
                        "corrections were requested but no editor is assigned".into(),
                    ));
                }
                self.status = ArticleStatus::EditorAssigned;
                self.body = body;
                self.updated_at = now;
                Ok(ArticleEvent::Resubmitted {
                    id: self.id.clone(),
                    at: now,
                })
            }
            other => Err(self.transition_error("resubmit revision", other)),
        }
    }

    /// EditorAssigned → Approved.
    pub fn approve(&mut self, now: DateTime<Utc>) -> DomainResult<ArticleEvent> {
        match self.status {
            ArticleStatus::EditorAssigned => {
                self.status = ArticleStatus::Approved;
                self.editor_comments = None;
                self.updated_at = now;
                Ok(ArticleEvent::Approved {
                    id: self.id.clone(),
                    at: now,
                })
            }
            other => Err(self.transition_error("approve", other)),
        }
    }

    /// Approved → Published.
    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<ArticleEvent> {
        match self.status {
            ArticleStatus::Approved => {
                self.status = ArticleStatus::Published;
                self.published_at = Some(now);
                self.updated_at = now;
                Ok(ArticleEvent::Published {
                    id: self.id.clone(),
                    at: now,
                })
            }
            other => Err(self.transition_error("publish", other)),
        }
    }

    pub fn set_pdf_path(&mut self, path: impl Into<String>, now: DateTime<Utc>) {
        self.pdf_path = Some(path.into());
        self.updated_at = now;
    }

    fn transition_error(&self, action: &str, current: ArticleStatus) -> DomainError {
        DomainError::InvalidTransition(format!(
            "cannot {action} article {} while {current}",
            self.id
        ))
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: ActorId,
    pub co_author_ids: Vec<ActorId>,
    pub pdf_path: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Partial update carried to the write repository. Only set fields are
/// written; the status change and its outbox rows commit together.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub status: Option<ArticleStatus>,
    pub body: Option<ArticleBody>,
    pub assigned_editor_id: Option<ActorId>,
    pub editor_comments: Option<Option<String>>,
    pub pdf_path: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: None,
            body: None,
            assigned_editor_id: None,
            editor_comments: None,
            pdf_path: None,
            published_at: None,
            updated_at,
        }
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_assigned_editor(mut self, editor: ActorId) -> Self {
        self.assigned_editor_id = Some(editor);
        self
    }

    pub fn with_editor_comments(mut self, comments: Option<String>) -> Self {
        self.editor_comments = Some(comments);
        self
    }

    pub fn with_pdf_path(mut self, path: impl Into<String>) -> Self {
        self.pdf_path = Some(path.into());
        self
    }

    pub fn with_published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new("A1").unwrap(),
            title: ArticleTitle::new("Contract Law Basics").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            status: ArticleStatus::Submitted,
            author_id: ActorId::new("author-1").unwrap(),
            assigned_editor_id: None,
            co_author_ids: vec![],
            editor_comments: None,
            pdf_path: None,
            submitted_at: Utc::now(),
            published_at: None,
            updated_at: Utc::now(),
        }
    }

    fn editor() -> ActorId {
        ActorId::new("editor-1").unwrap()
    }

    #[test]
    fn full_review_cycle_walks_every_state() {
        let mut article = sample_article();
        let now = Utc::now();

        article.assign_editor(editor(), now).unwrap();
        assert_eq!(article.status, ArticleStatus::EditorAssigned);

        article
            .request_corrections(Some("fix citations".into()), now)
            .unwrap();
        assert_eq!(article.status, ArticleStatus::CorrectionsRequested);
        assert_eq!(article.editor_comments.as_deref(), Some("fix citations"));

        article
            .resubmit_revision(ArticleBody::new("revised").unwrap(), now)
            .unwrap();
        assert_eq!(article.status, ArticleStatus::EditorAssigned);

        article.approve(now).unwrap();
        assert_eq!(article.status, ArticleStatus::Approved);
        assert!(article.editor_comments.is_none());

        article.publish(now).unwrap();
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.published_at, Some(now));
    }

    #[test]
    fn publish_requires_prior_approval() {
        let mut article = sample_article();
        let err = article.publish(Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
    }

    #[test]
    fn assign_editor_rejected_after_approval() {
        let mut article = sample_article();
        let now = Utc::now();
        article.assign_editor(editor(), now).unwrap();
        article.approve(now).unwrap();
        assert!(article.assign_editor(editor(), now).is_err());
    }

    #[test]
    fn resubmit_only_from_corrections_requested() {
        let mut article = sample_article();
        let err = article
            .resubmit_revision(ArticleBody::new("revised").unwrap(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
    }
}
