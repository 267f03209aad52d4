// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{actors::ActorDirectoryService, articles::ArticleWorkflowService},
        ports::time::Clock,
        queries::ArticleQueryService,
    },
    domain::{
        actor::ActorRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
        outbox::OutboxRepository,
    },
};

/// Wires the command and query services over the injected ports. The HTTP
/// layer (external to this crate) holds one of these per process.
pub struct ApplicationServices {
    pub article_workflow: Arc<ArticleWorkflowService>,
    pub actor_directory: Arc<ActorDirectoryService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        actor_repo: Arc<dyn ActorRepository>,
        outbox_repo: Arc<dyn OutboxRepository>,
        clock: Arc<dyn Clock>,
        portal_url: impl Into<String>,
    ) -> Self {
        let article_workflow = Arc::new(ArticleWorkflowService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&actor_repo),
            Arc::clone(&clock),
        ));

        let actor_directory = Arc::new(ActorDirectoryService::new(
            Arc::clone(&actor_repo),
            Arc::clone(&outbox_repo),
            Arc::clone(&clock),
            portal_url,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            article_workflow,
            actor_directory,
            article_queries,
        }
    }
}
