// src/application/notifications/dispatcher.rs
use crate::application::error::ApplicationResult;
use crate::application::ports::mailer::{EmailMessage, MailError, Mailer};
use crate::application::ports::time::Clock;
use crate::domain::outbox::{OutboxMessage, OutboxRepository};
use std::sync::Arc;
use std::time::Duration;

/// Outcome of one drain pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
}

/// Drains the notification outbox. Runs apart from the request path: the
/// transition that enqueued a message has already committed, so a crash
/// here leaves the message pending instead of silently dropping it.
///
/// One delivery attempt per message. A rejected send is logged with full
/// context and recorded as failed; there is no retry or backoff.
pub struct NotificationDispatcher {
    outbox: Arc<dyn OutboxRepository>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    batch_size: u32,
}

impl NotificationDispatcher {
    pub fn new(
        outbox: Arc<dyn OutboxRepository>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        batch_size: u32,
    ) -> Self {
        Self {
            outbox,
            mailer,
            clock,
            batch_size: batch_size.max(1),
        }
    }

    /// Delivers one batch of pending messages, oldest first.
    pub async fn drain_once(&self) -> ApplicationResult<DispatchReport> {
        let pending = self.outbox.next_pending(self.batch_size).await?;
        let mut report = DispatchReport::default();

        for message in pending {
            match self.deliver(&message).await {
                Ok(()) => {
                    self.outbox
                        .mark_sent(&message.id, self.clock.now())
                        .await?;
                    tracing::info!(
                        message_id = %message.id,
                        recipient = %message.recipient,
                        subject = %message.subject,
                        "notification sent"
                    );
                    report.sent += 1;
                }
                Err(err) => {
                    tracing::error!(
                        message_id = %message.id,
                        recipient = %message.recipient,
                        subject = %message.subject,
                        error = %err,
                        "notification delivery failed"
                    );
                    self.outbox
                        .mark_failed(&message.id, &err.to_string())
                        .await?;
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Polls the outbox until `shutdown` resolves. A failing drain pass is
    /// logged and the loop keeps going; the outbox itself is durable.
    pub async fn run(&self, poll_interval: Duration, shutdown: impl Future<Output = ()>) {
        let mut ticker = tokio::time::interval(poll_interval);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("notification dispatcher stopping");
                    break;
                }
                _ = ticker.tick() => {
                    match self.drain_once().await {
                        Ok(report) if report.sent > 0 || report.failed > 0 => {
                            tracing::info!(sent = report.sent, failed = report.failed, "outbox drained");
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "outbox drain pass failed");
                        }
                    }
                }
            }
        }
    }

    async fn deliver(&self, message: &OutboxMessage) -> Result<(), MailError> {
        let email = EmailMessage {
            to: message.recipient.clone(),
            subject: message.subject.clone(),
            html: message.html.clone(),
        };
        self.mailer.send(&email).await
    }
}
