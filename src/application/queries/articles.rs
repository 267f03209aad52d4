// src/application/queries/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleReadRepository, ArticleStatus},
};

/// Read side consumed by the external HTTP layer (article content endpoint,
/// editorial dashboards). Deliberately small; the write path owns the rest.
pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_by_id(&self, id: &str) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))
    }

    pub async fn list_by_status(&self, status: &str) -> ApplicationResult<Vec<ArticleDto>> {
        let status = ArticleStatus::parse(status)?;
        let articles = self.read_repo.list_by_status(status).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
