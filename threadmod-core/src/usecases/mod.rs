use crate::{authorization::Acl, entities::*, links::LinkParser};
use std::fmt;

mod action;
mod delete_posts;
mod delete_threads;
mod error;
mod merge_posts;
mod merge_thread;
mod merge_threads;
mod move_posts;
mod new_thread;
mod resolve_thread_link;
mod split_posts;
mod validate_batch;

#[cfg(test)]
pub mod tests;

pub use self::{
    action::*,
    delete_posts::*,
    delete_threads::*,
    error::{CandidateProblem, Error, Inconsistency, ItemDenial, ProblemStatus},
    merge_posts::*,
    merge_thread::*,
    merge_threads::*,
    move_posts::*,
    new_thread::*,
    resolve_thread_link::*,
    split_posts::*,
    validate_batch::ValidatedBatch,
};

mod prelude {
    pub use super::error::*;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use super::{action::ActionKind, Context, Limits};
    pub use crate::{
        authorization::*,
        entities::*,
        repositories::{CategoryRepo, Error as RepoError, PostRepo, ThreadRepo},
    };
}

pub const DEFAULT_POSTS_LIMIT: usize = 18 + 6;
pub const DEFAULT_THREADS_LIMIT: usize = 25 + 15;
pub const DEFAULT_THREAD_TITLE_MIN_LENGTH: usize = 5;
pub const DEFAULT_THREAD_TITLE_MAX_LENGTH: usize = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Max. number of posts per action
    pub posts: usize,
    /// Max. number of threads per action
    pub threads: usize,
    pub thread_title_min_length: usize,
    pub thread_title_max_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            posts: DEFAULT_POSTS_LIMIT,
            threads: DEFAULT_THREADS_LIMIT,
            thread_title_min_length: DEFAULT_THREAD_TITLE_MIN_LENGTH,
            thread_title_max_length: DEFAULT_THREAD_TITLE_MAX_LENGTH,
        }
    }
}

/// Everything a moderation use case needs to know
/// about the current request.
pub struct Context<'a, R> {
    pub repo: &'a R,
    pub acl: &'a dyn Acl,
    pub links: &'a dyn LinkParser,
    pub user: &'a User,
    pub limits: Limits,
}

impl<R> fmt::Debug for Context<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Context")
            .field("user", &self.user)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
