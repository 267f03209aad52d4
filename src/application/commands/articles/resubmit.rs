// src/application/commands/articles/resubmit.rs
use super::ArticleWorkflowService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, notifications},
    domain::article::{ArticleBody, ArticleId, ArticleUpdate},
};

pub struct ResubmitRevisionCommand {
    pub article_id: String,
    pub body: String,
}

impl ArticleWorkflowService {
    /// CorrectionsRequested → EditorAssigned. The revised manuscript goes
    /// straight back to the editor already on the article.
    pub async fn resubmit_revision(
        &self,
        command: ResubmitRevisionCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let body = ArticleBody::new(command.body)?;

        let mut article = self.load_article(&article_id).await?;
        let now = self.clock.now();
        let event = article.resubmit_revision(body.clone(), now)?;

        let recipients = self.load_recipients(&article, false).await?;
        let messages = notifications::messages_for(
            &event,
            article.title.as_str(),
            &recipients.as_recipients(),
        );

        let update = ArticleUpdate::new(article_id, now)
            .with_status(article.status)
            .with_body(body);
        let updated = self.write_repo.update(update, messages).await?;
        tracing::info!(article_id = %updated.id, event = event.kind(), "revision resubmitted");
        Ok(updated.into())
    }
}
