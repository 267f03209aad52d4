use crate::domain::actor::entity::{Actor, NewActor};
use crate::domain::actor::value_objects::{ActorId, Role};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn insert(&self, actor: NewActor) -> DomainResult<Actor>;
    async fn find_by_id(&self, id: &ActorId) -> DomainResult<Option<Actor>>;
    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<Actor>>;
}
