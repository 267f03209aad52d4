// src/application/commands/articles/submit.rs
use super::ArticleWorkflowService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        notifications,
    },
    domain::{
        actor::ActorId,
        article::{ArticleBody, ArticleEvent, ArticleId, ArticleTitle, NewArticle},
    },
};
use uuid::Uuid;

pub struct SubmitArticleCommand {
    pub title: String,
    pub body: String,
    pub author_id: String,
    pub co_author_ids: Vec<String>,
    pub pdf_path: Option<String>,
}

impl ArticleWorkflowService {
    /// Creates the article in `Submitted` and enqueues the author's
    /// confirmation mail in the same transaction.
    pub async fn submit(&self, command: SubmitArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let author_id = ActorId::new(command.author_id)?;
        let mut co_author_ids = Vec::with_capacity(command.co_author_ids.len());
        for id in command.co_author_ids {
            co_author_ids.push(ActorId::new(id)?);
        }
        if co_author_ids.contains(&author_id) {
            return Err(ApplicationError::validation(
                "author cannot also be listed as co-author",
            ));
        }

        let now = self.clock.now();
        let id = ArticleId::new(Uuid::new_v4().to_string())?;

        let author = self.load_actor(&author_id).await?;
        let mut co_authors = Vec::with_capacity(co_author_ids.len());
        for co_author_id in &co_author_ids {
            co_authors.push(self.load_actor(co_author_id).await?);
        }

        let event = ArticleEvent::Submitted {
            id: id.clone(),
            author: author_id.clone(),
            at: now,
        };
        let recipients = notifications::Recipients {
            author: &author,
            editor: None,
            co_authors: &co_authors,
            admins: &[],
        };
        let messages = notifications::messages_for(&event, title.as_str(), &recipients);

        let new_article = NewArticle {
            id,
            title,
            body,
            author_id,
            co_author_ids,
            pdf_path: command.pdf_path,
            submitted_at: now,
        };

        let created = self.write_repo.insert(new_article, messages).await?;
        tracing::info!(article_id = %created.id, event = event.kind(), "article submitted");
        Ok(created.into())
    }
}
