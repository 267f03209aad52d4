// src/application/commands/articles/publish.rs
use super::ArticleWorkflowService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, notifications},
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct PublishArticleCommand {
    pub article_id: String,
}

impl ArticleWorkflowService {
    /// Approved → Published. Admin fan-out records the publication; the
    /// author was already congratulated at approval.
    pub async fn publish(&self, command: PublishArticleCommand) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::new(command.article_id)?;

        let mut article = self.load_article(&article_id).await?;
        let now = self.clock.now();
        let event = article.publish(now)?;

        let recipients = self.load_recipients(&article, true).await?;
        let messages = notifications::messages_for(
            &event,
            article.title.as_str(),
            &recipients.as_recipients(),
        );

        let update = ArticleUpdate::new(article_id, now)
            .with_status(article.status)
            .with_published_at(now);
        let updated = self.write_repo.update(update, messages).await?;
        tracing::info!(article_id = %updated.id, event = event.kind(), "article published");
        Ok(updated.into())
    }
}
