// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        notifications::Recipients,
        ports::time::Clock,
    },
    domain::{
        actor::{Actor, ActorRepository, Role},
        article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
    },
};

pub struct ArticleWorkflowService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) actor_repo: Arc<dyn ActorRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

/// Owned actor set backing a borrowed [`Recipients`] view.
pub(super) struct LoadedRecipients {
    author: Actor,
    editor: Option<Actor>,
    co_authors: Vec<Actor>,
    admins: Vec<Actor>,
}

impl LoadedRecipients {
    pub(super) fn as_recipients(&self) -> Recipients<'_> {
        Recipients {
            author: &self.author,
            editor: self.editor.as_ref(),
            co_authors: &self.co_authors,
            admins: &self.admins,
        }
    }
}

impl ArticleWorkflowService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        actor_repo: Arc<dyn ActorRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            actor_repo,
            clock,
        }
    }

    pub(super) async fn load_article(&self, id: &ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))
    }

    pub(super) async fn load_actor(&self, id: &crate::domain::actor::ActorId) -> ApplicationResult<Actor> {
        self.actor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("actor {id} not found")))
    }

    /// Resolves every actor the article's notifications may address.
    /// Admin lookup is skipped unless the caller needs the publish fan-out.
    pub(super) async fn load_recipients(
        &self,
        article: &Article,
        with_admins: bool,
    ) -> ApplicationResult<LoadedRecipients> {
        let author = self.load_actor(&article.author_id).await?;

        let editor = match &article.assigned_editor_id {
            Some(id) => Some(self.load_actor(id).await?),
            None => None,
        };

        let mut co_authors = Vec::with_capacity(article.co_author_ids.len());
        for id in &article.co_author_ids {
            co_authors.push(self.load_actor(id).await?);
        }

        let admins = if with_admins {
            self.actor_repo.list_by_role(Role::Admin).await?
        } else {
            Vec::new()
        };

        Ok(LoadedRecipients {
            author,
            editor,
            co_authors,
            admins,
        })
    }
}
