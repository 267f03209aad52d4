// src/domain/actor/entity.rs
use crate::domain::actor::value_objects::{ActorId, ActorName, EmailAddress, Role};
use chrono::{DateTime, Utc};

/// Author, editor or admin. The core only needs enough of a person to
/// address a notification; credentials and sessions live elsewhere.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub name: ActorName,
    pub email: EmailAddress,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActor {
    pub id: ActorId,
    pub name: ActorName,
    pub email: EmailAddress,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
