// src/application/commands/articles/mod.rs
mod approve;
mod assign_editor;
mod publish;
mod request_corrections;
mod resubmit;
mod service;
mod submit;

pub use approve::ApproveArticleCommand;
pub use assign_editor::AssignEditorCommand;
pub use publish::PublishArticleCommand;
pub use request_corrections::RequestCorrectionsCommand;
pub use resubmit::ResubmitRevisionCommand;
pub use service::ArticleWorkflowService;
pub use submit::SubmitArticleCommand;
