// src/infrastructure/repositories/mod.rs
mod sqlite_actor;
mod sqlite_article;
mod sqlite_outbox;

pub use sqlite_actor::SqliteActorRepository;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_outbox::SqliteOutboxRepository;
