//! # threadmod-core
//!
//! Validation and authorization of bulk moderation actions
//! (delete, merge, move and split) on forum posts and threads.
//!
//! Nothing in here mutates the forum: every use case turns a raw
//! request into an authorized action descriptor or a precise
//! rejection. Executing the descriptor is up to the caller, which
//! should do so within a single transaction.

pub mod authorization;
pub mod batch;
pub mod links;
pub mod merge_conflict;
pub mod repositories;
pub mod usecases;
pub mod visibility;

pub mod entities {
    pub use threadmod_entities::{category::*, id::*, post::*, thread::*, user::*};
}

pub use self::repositories::Error as RepoError;
