use crate::domain::actor::ActorId;
use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, Utc};

/// Emitted by a successful guarded transition. Notification fan-out is
/// derived from these, never from raw status comparisons in handlers.
#[derive(Debug, Clone)]
pub enum ArticleEvent {
    Submitted {
        id: ArticleId,
        author: ActorId,
        at: DateTime<Utc>,
    },
    EditorAssigned {
        id: ArticleId,
        editor: ActorId,
        at: DateTime<Utc>,
    },
    CorrectionsRequested {
        id: ArticleId,
        comments: Option<String>,
        at: DateTime<Utc>,
    },
    Resubmitted {
        id: ArticleId,
        at: DateTime<Utc>,
    },
    Approved {
        id: ArticleId,
        at: DateTime<Utc>,
    },
    Published {
        id: ArticleId,
        at: DateTime<Utc>,
    },
}

impl ArticleEvent {
    pub fn article_id(&self) -> &ArticleId {
        match self {
            Self::Submitted { id, .. }
            | Self::EditorAssigned { id, .. }
            | Self::CorrectionsRequested { id, .. }
            | Self::Resubmitted { id, .. }
            | Self::Approved { id, .. }
            | Self::Published { id, .. } => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Submitted { .. } => "submitted",
            Self::EditorAssigned { .. } => "editor-assigned",
            Self::CorrectionsRequested { .. } => "corrections-requested",
            Self::Resubmitted { .. } => "resubmitted",
            Self::Approved { .. } => "approved",
            Self::Published { .. } => "published",
        }
    }
}
