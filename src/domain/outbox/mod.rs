pub mod entity;
pub mod repository;

pub use entity::{DeliveryStatus, NewOutboxMessage, OutboxMessage, OutboxMessageId};
pub use repository::OutboxRepository;
