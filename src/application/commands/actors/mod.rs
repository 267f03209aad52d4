// src/application/commands/actors/mod.rs
mod register;
mod service;

pub use register::RegisterActorCommand;
pub use service::ActorDirectoryService;
