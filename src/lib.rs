//! Core of the Law Nation legal-journal platform: the article review
//! workflow (a guarded state machine over submission statuses), the
//! notification outbox written atomically with each transition, and the
//! dispatcher that hands composed emails to the delivery provider.
//!
//! The HTTP surface, authentication and the production database schema
//! live in the journal's main backend; this crate exposes ports for them.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
