// src/application/commands/articles/request_corrections.rs
use super::ArticleWorkflowService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, notifications},
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct RequestCorrectionsCommand {
    pub article_id: String,
    pub comments: Option<String>,
}

impl ArticleWorkflowService {
    /// EditorAssigned → CorrectionsRequested. The author's notification
    /// carries the editor's comments only when any were given.
    pub async fn request_corrections(
        &self,
        command: RequestCorrectionsCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let comments = command
            .comments
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let mut article = self.load_article(&article_id).await?;
        let now = self.clock.now();
        let event = article.request_corrections(comments.clone(), now)?;

        let recipients = self.load_recipients(&article, false).await?;
        let messages = notifications::messages_for(
            &event,
            article.title.as_str(),
            &recipients.as_recipients(),
        );

        let update = ArticleUpdate::new(article_id, now)
            .with_status(article.status)
            .with_editor_comments(comments);
        let updated = self.write_repo.update(update, messages).await?;
        tracing::info!(article_id = %updated.id, event = event.kind(), "corrections requested");
        Ok(updated.into())
    }
}
