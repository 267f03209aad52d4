// src/application/notifications/mod.rs
pub mod dispatcher;
pub mod templates;

use crate::domain::actor::Actor;
use crate::domain::article::ArticleEvent;
use crate::domain::outbox::NewOutboxMessage;

pub use dispatcher::{DispatchReport, NotificationDispatcher};
pub use templates::EmailContent;

/// Everyone a lifecycle event may need to address. Loaded by the command
/// before the transition is persisted so composition stays infallible.
pub struct Recipients<'a> {
    pub author: &'a Actor,
    pub editor: Option<&'a Actor>,
    pub co_authors: &'a [Actor],
    pub admins: &'a [Actor],
}

/// Maps one lifecycle event to the full set of outbox rows it owes.
/// This is the single place that knows who hears about what:
/// author confirmations on submit/assign/corrections, editor task mail on
/// assign/resubmit, co-author fan-out on approval, admin fan-out on publish.
pub fn messages_for(
    event: &ArticleEvent,
    article_title: &str,
    recipients: &Recipients<'_>,
) -> Vec<NewOutboxMessage> {
    let mut messages = Vec::new();
    let mut push = |to: &Actor, content: EmailContent, at: chrono::DateTime<chrono::Utc>| {
        messages.push(NewOutboxMessage::new(
            Some(event.article_id().clone()),
            to.email.clone(),
            content.subject,
            content.html,
            at,
        ));
    };

    match event {
        ArticleEvent::Submitted { id, at, .. } => {
            push(
                recipients.author,
                templates::submission_received(
                    recipients.author.name.as_str(),
                    article_title,
                    id.as_str(),
                ),
                *at,
            );
        }
        ArticleEvent::EditorAssigned { at, .. } => {
            push(
                recipients.author,
                templates::editor_assigned_author_notice(article_title),
                *at,
            );
            if let Some(editor) = recipients.editor {
                push(
                    editor,
                    templates::review_task_assigned(
                        editor.name.as_str(),
                        article_title,
                        recipients.author.name.as_str(),
                    ),
                    *at,
                );
            }
        }
        ArticleEvent::CorrectionsRequested { comments, at, .. } => {
            push(
                recipients.author,
                templates::correction_request(article_title, comments.as_deref()),
                *at,
            );
        }
        ArticleEvent::Resubmitted { at, .. } => {
            if let Some(editor) = recipients.editor {
                push(
                    editor,
                    templates::revision_resubmitted(editor.name.as_str(), article_title),
                    *at,
                );
            }
        }
        ArticleEvent::Approved { at, .. } => {
            push(
                recipients.author,
                templates::article_approved(recipients.author.name.as_str(), article_title),
                *at,
            );
            for co_author in recipients.co_authors {
                push(
                    co_author,
                    templates::article_approved(co_author.name.as_str(), article_title),
                    *at,
                );
            }
        }
        ArticleEvent::Published { at, .. } => {
            for admin in recipients.admins {
                push(
                    admin,
                    templates::publication_notice(
                        article_title,
                        recipients.author.name.as_str(),
                    ),
                    *at,
                );
            }
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actor::{ActorId, ActorName, EmailAddress, Role};
    use crate::domain::article::ArticleId;
    use chrono::Utc;

    fn actor(id: &str, name: &str, email: &str, role: Role) -> Actor {
        Actor {
            id: ActorId::new(id).unwrap(),
            name: ActorName::new(name).unwrap(),
            email: EmailAddress::new(email).unwrap(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn assignment_notifies_author_and_editor() {
        let author = actor("a1", "Priya", "priya@example.com", Role::Author);
        let editor = actor("e1", "Rahul", "rahul@example.com", Role::Editor);
        let event = ArticleEvent::EditorAssigned {
            id: ArticleId::new("A1").unwrap(),
            editor: editor.id.clone(),
            at: Utc::now(),
        };
        let recipients = Recipients {
            author: &author,
            editor: Some(&editor),
            co_authors: &[],
            admins: &[],
        };

        let messages = messages_for(&event, "Contract Law Basics", &recipients);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].recipient.as_str(), "priya@example.com");
        assert_eq!(messages[0].subject, "Status Update: Editor Assigned");
        assert_eq!(messages[1].recipient.as_str(), "rahul@example.com");
        assert_eq!(messages[1].subject, "New Review Task Assigned");
    }

    #[test]
    fn approval_fans_out_to_co_authors() {
        let author = actor("a1", "Priya", "priya@example.com", Role::Author);
        let co_author = actor("a2", "Meera", "meera@example.com", Role::Author);
        let event = ArticleEvent::Approved {
            id: ArticleId::new("A1").unwrap(),
            at: Utc::now(),
        };
        let recipients = Recipients {
            author: &author,
            editor: None,
            co_authors: std::slice::from_ref(&co_author),
            admins: &[],
        };

        let messages = messages_for(&event, "Contract Law Basics", &recipients);
        assert_eq!(messages.len(), 2);
        assert!(messages
            .iter()
            .all(|m| m.subject == "Article Approved and Published"));
        assert!(messages[1].html.contains("Meera"));
    }

    #[test]
    fn publish_fans_out_to_every_admin() {
        let author = actor("a1", "Priya", "priya@example.com", Role::Author);
        let admins = vec![
            actor("ad1", "Admin One", "one@example.com", Role::Admin),
            actor("ad2", "Admin Two", "two@example.com", Role::Admin),
        ];
        let event = ArticleEvent::Published {
            id: ArticleId::new("A1").unwrap(),
            at: Utc::now(),
        };
        let recipients = Recipients {
            author: &author,
            editor: None,
            co_authors: &[],
            admins: &admins,
        };

        let messages = messages_for(&event, "Contract Law Basics", &recipients);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.subject == "Article Published"));
    }

    #[test]
    fn corrections_notify_only_the_author() {
        let author = actor("a1", "Priya", "priya@example.com", Role::Author);
        let event = ArticleEvent::CorrectionsRequested {
            id: ArticleId::new("A1").unwrap(),
            comments: Some("tighten section 2".into()),
            at: Utc::now(),
        };
        let recipients = Recipients {
            author: &author,
            editor: None,
            co_authors: &[],
            admins: &[],
        };

        let messages = messages_for(&event, "Contract Law Basics", &recipients);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].html.contains("tighten section 2"));
    }
}
