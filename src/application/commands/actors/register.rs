// src/application/commands/actors/register.rs
use super::ActorDirectoryService;
use crate::{
    application::{
        dto::ActorDto,
        error::ApplicationResult,
        notifications::templates,
    },
    domain::{
        actor::{ActorId, ActorName, EmailAddress, NewActor, Role},
        outbox::NewOutboxMessage,
    },
};
use uuid::Uuid;

pub struct RegisterActorCommand {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl ActorDirectoryService {
    /// Registers an author, editor or admin and queues the welcome mail.
    /// Credentials are none of this crate's business; the actor record only
    /// exists so notifications have somewhere to go.
    pub async fn register(&self, command: RegisterActorCommand) -> ApplicationResult<ActorDto> {
        let name = ActorName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;
        let role = Role::parse(&command.role)?;
        let now = self.clock.now();

        let new_actor = NewActor {
            id: ActorId::new(Uuid::new_v4().to_string())?,
            name,
            email,
            role,
            created_at: now,
        };
        let actor = self.actor_repo.insert(new_actor).await?;

        let content = templates::registration_welcome(actor.name.as_str(), &self.portal_url);
        let welcome = NewOutboxMessage::new(
            None,
            actor.email.clone(),
            content.subject,
            content.html,
            now,
        );
        self.outbox_repo.append(welcome).await?;

        tracing::info!(actor_id = %actor.id, role = %actor.role, "actor registered");
        Ok(actor.into())
    }
}
