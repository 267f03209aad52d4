use crate::domain::actor::{
    Actor, ActorId, ActorName, ActorRepository, EmailAddress, NewActor, Role,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::sqlite_outbox::map_error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Debug, FromRow)]
struct ActorRow {
    id: String,
    name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActorRow> for Actor {
    type Error = DomainError;

    fn try_from(row: ActorRow) -> Result<Self, Self::Error> {
        Ok(Actor {
            id: ActorId::new(row.id)?,
            name: ActorName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            role: Role::parse(&row.role)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct SqliteActorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteActorRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActorRepository for SqliteActorRepository {
    async fn insert(&self, actor: NewActor) -> DomainResult<Actor> {
        sqlx::query(
            "INSERT INTO actors (id, name, email, role, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(actor.id.as_str())
        .bind(actor.name.as_str())
        .bind(actor.email.as_str())
        .bind(actor.role.as_str())
        .bind(actor.created_at)
        .execute(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(Actor {
            id: actor.id,
            name: actor.name,
            email: actor.email,
            role: actor.role,
            created_at: actor.created_at,
        })
    }

    async fn find_by_id(&self, id: &ActorId) -> DomainResult<Option<Actor>> {
        let row = sqlx::query_as::<_, ActorRow>(
            "SELECT id, name, email, role, created_at FROM actors WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Actor::try_from).transpose()
    }

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<Actor>> {
        let rows = sqlx::query_as::<_, ActorRow>(
            "SELECT id, name, email, role, created_at FROM actors WHERE role = ? ORDER BY name",
        )
        .bind(role.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Actor::try_from).collect()
    }
}
