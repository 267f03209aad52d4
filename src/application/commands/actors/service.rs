// src/application/commands/actors/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{actor::ActorRepository, outbox::OutboxRepository},
};

pub struct ActorDirectoryService {
    pub(super) actor_repo: Arc<dyn ActorRepository>,
    pub(super) outbox_repo: Arc<dyn OutboxRepository>,
    pub(super) clock: Arc<dyn Clock>,
    /// Front-end landing page linked from the welcome mail.
    pub(super) portal_url: String,
}

impl ActorDirectoryService {
    pub fn new(
        actor_repo: Arc<dyn ActorRepository>,
        outbox_repo: Arc<dyn OutboxRepository>,
        clock: Arc<dyn Clock>,
        portal_url: impl Into<String>,
    ) -> Self {
        Self {
            actor_repo,
            outbox_repo,
            clock,
            portal_url: portal_url.into(),
        }
    }
}
