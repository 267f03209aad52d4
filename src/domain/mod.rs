pub mod actor;
pub mod article;
pub mod errors;
pub mod outbox;
