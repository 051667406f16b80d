use super::{action::ActionKind, new_thread::NewThreadInvalidation, resolve_thread_link::ReferenceError};
use crate::{
    authorization::Denial, entities::ThreadId, merge_conflict::ConflictError, repositories,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", .0.empty_message())]
    EmptyOrMissingInput(ActionKind),
    #[error("{}", limit_message(.kind, .limit))]
    LimitExceeded { limit: usize, kind: ActionKind },
    #[error("{}", .0.not_found_message())]
    ItemsNotFound(ActionKind),
    #[error(transparent)]
    PermissionDenied(#[from] Denial),
    #[error("One or more threads can't be deleted")]
    PerItemDenied(Vec<ItemDenial>),
    #[error("One or more threads can't be merged")]
    MergeCandidates(Vec<CandidateProblem>),
    #[error(transparent)]
    InconsistentBatch(#[from] Inconsistency),
    #[error(transparent)]
    InvalidReference(#[from] ReferenceError),
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    NewThread(#[from] NewThreadInvalidation),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

fn limit_message(kind: &ActionKind, limit: &usize) -> String {
    kind.limit_message(*limit)
}

/// Posts that can't be merged with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("Posts made by different users can't be merged.")]
    DifferentAuthors,
    #[error("Post marked as best answer can't be merged with thread's first post.")]
    BestAnswerWithFirstPost,
    #[error("Posts with different visibility can't be merged.")]
    DifferentVisibility,
}

/// A thread the user is not allowed to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDenial {
    pub id: ThreadId,
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProblemStatus {
    /// Visible but not actionable
    Forbidden,
    /// Missing or invisible
    NotFound,
}

impl ProblemStatus {
    pub const fn code(self) -> u16 {
        match self {
            Self::Forbidden => 403,
            Self::NotFound => 404,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProblem {
    pub id: ThreadId,
    pub status: ProblemStatus,
    pub detail: String,
}
