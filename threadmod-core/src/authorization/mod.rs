use crate::{entities::*, repositories::Error as RepoError};
use thiserror::Error;

pub mod capability;

pub use self::capability::*;

/// A permission predicate refused an action.
///
/// The reason is meant to be shown to the acting user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Denial {
    reason: String,
}

impl Denial {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

pub type Result<T> = std::result::Result<T, Denial>;

/// The permission subsystem.
///
/// All `allow_*` predicates either pass or deny with a reason,
/// the `can_*` predicates simply answer yes or no.
pub trait Acl {
    /// Loads the permissions of the user in a category.
    ///
    /// Must be resolved before any category specific check
    /// is performed and its failure always propagates.
    fn category_acl(&self, user: &User, category: CategoryId)
        -> std::result::Result<CategoryAcl, RepoError>;

    fn allow_delete_post(&self, user: &User, post: &Post) -> Result<()>;
    fn allow_delete_event(&self, user: &User, post: &Post) -> Result<()>;
    fn allow_delete_best_answer(&self, user: &User, post: &Post) -> Result<()>;
    fn allow_merge_post(&self, user: &User, post: &Post) -> Result<()>;
    fn allow_move_post(&self, user: &User, post: &Post) -> Result<()>;
    fn allow_split_post(&self, user: &User, post: &Post) -> Result<()>;

    fn allow_delete_thread(&self, user: &User, thread: &Thread) -> Result<()>;
    // `other_thread` is set if the thread is the target
    // another thread is merged into.
    fn allow_merge_thread(&self, user: &User, thread: &Thread, other_thread: bool) -> Result<()>;

    fn can_see_thread(&self, user: &User, thread: &Thread) -> bool;
    fn can_reply_thread(&self, user: &User, thread: &Thread) -> bool;
}
