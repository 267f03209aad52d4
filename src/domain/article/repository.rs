use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::errors::DomainResult;
use crate::domain::outbox::NewOutboxMessage;
use async_trait::async_trait;

/// Writers take the outbox rows for the transition alongside the mutation
/// and must commit both atomically. A crash can therefore never leave a
/// status change without its notifications on record.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(
        &self,
        article: NewArticle,
        notifications: Vec<NewOutboxMessage>,
    ) -> DomainResult<Article>;

    async fn update(
        &self,
        update: ArticleUpdate,
        notifications: Vec<NewOutboxMessage>,
    ) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<Article>>;
}
