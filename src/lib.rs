//! Validation and authorization of bulk moderation actions
//! on forum posts and threads.
//!
//! The decision logic lives in [`threadmod_core`], the entities
//! it operates on in [`threadmod_entities`]. This crate loads the
//! configuration the limits of the use cases are derived from.

pub mod config;

pub use threadmod_core;
pub use threadmod_entities;
