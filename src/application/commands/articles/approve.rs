// src/application/commands/articles/approve.rs
use super::ArticleWorkflowService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, notifications},
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct ApproveArticleCommand {
    pub article_id: String,
}

impl ArticleWorkflowService {
    /// EditorAssigned → Approved. The author hears first; co-authors get
    /// the same congratulations as additional fan-out.
    pub async fn approve(&self, command: ApproveArticleCommand) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::new(command.article_id)?;

        let mut article = self.load_article(&article_id).await?;
        let now = self.clock.now();
        let event = article.approve(now)?;

        let recipients = self.load_recipients(&article, false).await?;
        let messages = notifications::messages_for(
            &event,
            article.title.as_str(),
            &recipients.as_recipients(),
        );

        let update = ArticleUpdate::new(article_id, now)
            .with_status(article.status)
            .with_editor_comments(None);
        let updated = self.write_repo.update(update, messages).await?;
        tracing::info!(article_id = %updated.id, event = event.kind(), "article approved");
        Ok(updated.into())
    }
}
