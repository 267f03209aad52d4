// src/application/dto.rs
use crate::domain::actor::Actor;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub body: String,
    pub status: String,
    pub author_id: String,
    pub assigned_editor_id: Option<String>,
    pub co_author_ids: Vec<String>,
    pub editor_comments: Option<String>,
    pub pdf_path: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            body: article.body.into(),
            status: article.status.as_str().to_string(),
            author_id: article.author_id.into(),
            assigned_editor_id: article.assigned_editor_id.map(Into::into),
            co_author_ids: article.co_author_ids.into_iter().map(Into::into).collect(),
            editor_comments: article.editor_comments,
            pdf_path: article.pdf_path,
            submitted_at: article.submitted_at,
            published_at: article.published_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<Actor> for ActorDto {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id.into(),
            name: actor.name.to_string(),
            email: actor.email.to_string(),
            role: actor.role.as_str().to_string(),
            created_at: actor.created_at,
        }
    }
}
