// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use lawnation_core::application::ports::mailer::{EmailMessage, MailError, Mailer};
use lawnation_core::application::ports::time::Clock;
use lawnation_core::domain::actor::{Actor, ActorId, ActorRepository, NewActor, Role};
use lawnation_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use lawnation_core::domain::errors::{DomainError, DomainResult};
use lawnation_core::domain::outbox::{
    DeliveryStatus, NewOutboxMessage, OutboxMessage, OutboxMessageId, OutboxRepository,
};

/* -------------------------------- clock -------------------------------- */

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/* -------------------------------- actors -------------------------------- */

pub struct InMemoryActorRepo {
    inner: Mutex<HashMap<String, Actor>>,
}

impl InMemoryActorRepo {
    pub fn new(actors: impl IntoIterator<Item = Actor>) -> Self {
        Self {
            inner: Mutex::new(
                actors
                    .into_iter()
                    .map(|a| (a.id.as_str().to_string(), a))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl ActorRepository for InMemoryActorRepo {
    async fn insert(&self, actor: NewActor) -> DomainResult<Actor> {
        let actor = Actor {
            id: actor.id,
            name: actor.name,
            email: actor.email,
            role: actor.role,
            created_at: actor.created_at,
        };
        self.inner
            .lock()
            .unwrap()
            .insert(actor.id.as_str().to_string(), actor.clone());
        Ok(actor)
    }

    async fn find_by_id(&self, id: &ActorId) -> DomainResult<Option<Actor>> {
        Ok(self.inner.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<Actor>> {
        let mut actors: Vec<Actor> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.role == role)
            .cloned()
            .collect();
        actors.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(actors)
    }
}

/* ------------------------- articles + outbox ------------------------- */

/// Article store and outbox in one, mirroring the transactional coupling
/// of the SQLite adapter: a write either lands with all of its outbox
/// rows or not at all.
#[derive(Default)]
pub struct InMemoryJournal {
    articles: Mutex<HashMap<String, Article>>,
    outbox: Mutex<Vec<OutboxMessage>>,
}

impl InMemoryJournal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn outbox_snapshot(&self) -> Vec<OutboxMessage> {
        self.outbox.lock().unwrap().clone()
    }

    pub fn push_pending(&self, message: NewOutboxMessage) {
        self.outbox.lock().unwrap().push(pending(message));
    }
}

fn pending(message: NewOutboxMessage) -> OutboxMessage {
    OutboxMessage {
        id: message.id,
        article_id: message.article_id,
        recipient: message.recipient,
        subject: message.subject,
        html: message.html,
        status: DeliveryStatus::Pending,
        error: None,
        created_at: message.created_at,
        sent_at: None,
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryJournal {
    async fn insert(
        &self,
        article: NewArticle,
        notifications: Vec<NewOutboxMessage>,
    ) -> DomainResult<Article> {
        let stored = Article {
            id: article.id,
            title: article.title,
            body: article.body,
            status: ArticleStatus::Submitted,
            author_id: article.author_id,
            assigned_editor_id: None,
            co_author_ids: article.co_author_ids,
            editor_comments: None,
            pdf_path: article.pdf_path,
            submitted_at: article.submitted_at,
            published_at: None,
            updated_at: article.submitted_at,
        };
        self.articles
            .lock()
            .unwrap()
            .insert(stored.id.as_str().to_string(), stored.clone());
        let mut outbox = self.outbox.lock().unwrap();
        outbox.extend(notifications.into_iter().map(pending));
        Ok(stored)
    }

    async fn update(
        &self,
        update: ArticleUpdate,
        notifications: Vec<NewOutboxMessage>,
    ) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(update.id.as_str())
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", update.id)))?;

        if let Some(status) = update.status {
            article.status = status;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(editor) = update.assigned_editor_id {
            article.assigned_editor_id = Some(editor);
        }
        if let Some(comments) = update.editor_comments {
            article.editor_comments = comments;
        }
        if let Some(pdf_path) = update.pdf_path {
            article.pdf_path = Some(pdf_path);
        }
        if let Some(published_at) = update.published_at {
            article.published_at = Some(published_at);
        }
        article.updated_at = update.updated_at;
        let updated = article.clone();
        drop(articles);

        let mut outbox = self.outbox.lock().unwrap();
        outbox.extend(notifications.into_iter().map(pending));
        Ok(updated)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryJournal {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.status == status)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OutboxRepository for InMemoryJournal {
    async fn append(&self, message: NewOutboxMessage) -> DomainResult<OutboxMessage> {
        let stored = pending(message);
        self.outbox.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn next_pending(&self, limit: u32) -> DomainResult<Vec<OutboxMessage>> {
        let mut messages: Vec<OutboxMessage> = self
            .outbox
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.status == DeliveryStatus::Pending)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        messages.truncate(limit as usize);
        Ok(messages)
    }

    async fn mark_sent(&self, id: &OutboxMessageId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut outbox = self.outbox.lock().unwrap();
        let message = outbox
            .iter_mut()
            .find(|m| m.id == *id && m.status == DeliveryStatus::Pending)
            .ok_or_else(|| DomainError::NotFound(format!("pending outbox message {id}")))?;
        message.status = DeliveryStatus::Sent;
        message.sent_at = Some(at);
        Ok(())
    }

    async fn mark_failed(&self, id: &OutboxMessageId, error: &str) -> DomainResult<()> {
        let mut outbox = self.outbox.lock().unwrap();
        let message = outbox
            .iter_mut()
            .find(|m| m.id == *id && m.status == DeliveryStatus::Pending)
            .ok_or_else(|| DomainError::NotFound(format!("pending outbox message {id}")))?;
        message.status = DeliveryStatus::Failed;
        message.error = Some(error.to_string());
        Ok(())
    }
}

/* -------------------------------- mailer -------------------------------- */

#[derive(Default)]
pub struct MockMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub fail_with: Mutex<Option<String>>,
}

impl MockMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        let mailer = Self::default();
        *mailer.fail_with.lock().unwrap() = Some(reason.to_string());
        Arc::new(mailer)
    }

    pub fn sent_snapshot(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        if let Some(reason) = self.fail_with.lock().unwrap().clone() {
            return Err(MailError::Transport(reason));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/* ------------------------------- fixtures ------------------------------- */

pub fn actor(id: &str, name: &str, email: &str, role: Role) -> Actor {
    Actor {
        id: ActorId::new(id).unwrap(),
        name: lawnation_core::domain::actor::ActorName::new(name).unwrap(),
        email: lawnation_core::domain::actor::EmailAddress::new(email).unwrap(),
        role,
        created_at: Utc::now(),
    }
}
