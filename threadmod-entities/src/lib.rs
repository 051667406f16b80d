#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # threadmod-entities
//!
//! Reusable, agnostic forum entities for thread moderation.
//!
//! The entities only contain generic functionality that does not reveal any
//! moderation rules. Those live in `threadmod-core`.

pub mod category;
pub mod id;
pub mod post;
pub mod thread;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
