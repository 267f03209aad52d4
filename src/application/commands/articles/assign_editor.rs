// src/application/commands/articles/assign_editor.rs
use super::ArticleWorkflowService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        notifications,
    },
    domain::{
        actor::{ActorId, Role},
        article::{ArticleId, ArticleUpdate},
    },
};

pub struct AssignEditorCommand {
    pub article_id: String,
    pub editor_id: String,
}

impl ArticleWorkflowService {
    /// Submitted → EditorAssigned. Notifies the author of the status change
    /// and hands the editor their review task.
    pub async fn assign_editor(&self, command: AssignEditorCommand) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let editor_id = ActorId::new(command.editor_id)?;

        let editor = self.load_actor(&editor_id).await?;
        if editor.role != Role::Editor {
            return Err(ApplicationError::validation(format!(
                "actor {editor_id} is not an editor"
            )));
        }

        let mut article = self.load_article(&article_id).await?;
        let now = self.clock.now();
        let event = article.assign_editor(editor_id.clone(), now)?;

        let recipients = self.load_recipients(&article, false).await?;
        let messages = notifications::messages_for(
            &event,
            article.title.as_str(),
            &recipients.as_recipients(),
        );

        let update = ArticleUpdate::new(article_id, now)
            .with_status(article.status)
            .with_assigned_editor(editor_id);
        let updated = self.write_repo.update(update, messages).await?;
        tracing::info!(article_id = %updated.id, event = event.kind(), "editor assigned");
        Ok(updated.into())
    }
}
