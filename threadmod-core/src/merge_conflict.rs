//! Detection and resolution of diverging fields when merging entities.
//!
//! Every mergeable field is described by a [`MergeableField`]. The
//! resolver compares the values of all sources: a single distinct value
//! is adopted silently, diverging values require a resolution supplied
//! by the caller that must be one of the values of the sources.

use crate::entities::*;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};
use thiserror::Error;

pub const BEST_ANSWER: &str = "best_answer";
pub const POLL: &str = "poll";
pub const WEIGHT: &str = "weight";
pub const IS_HIDDEN: &str = "is_hidden";
pub const IS_CLOSED: &str = "is_closed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue {
    Unset,
    Post(PostId),
    Poll(PollId),
    Weight(ThreadWeight),
    Flag(bool),
}

impl From<Option<PostId>> for FieldValue {
    fn from(from: Option<PostId>) -> Self {
        from.map(Self::Post).unwrap_or(Self::Unset)
    }
}

impl From<Option<PollId>> for FieldValue {
    fn from(from: Option<PollId>) -> Self {
        from.map(Self::Poll).unwrap_or(Self::Unset)
    }
}

impl From<ThreadWeight> for FieldValue {
    fn from(from: ThreadWeight) -> Self {
        Self::Weight(from)
    }
}

impl From<bool> for FieldValue {
    fn from(from: bool) -> Self {
        Self::Flag(from)
    }
}

impl FieldValue {
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    pub const fn as_post(self) -> Option<PostId> {
        match self {
            Self::Post(id) => Some(id),
            _ => None,
        }
    }

    pub const fn as_poll(self) -> Option<PollId> {
        match self {
            Self::Poll(id) => Some(id),
            _ => None,
        }
    }

    pub const fn as_weight(self) -> Option<ThreadWeight> {
        match self {
            Self::Weight(weight) => Some(weight),
            _ => None,
        }
    }

    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(flag),
            _ => None,
        }
    }
}

/// Describes how a single field of `E` is merged.
pub struct MergeableField<E> {
    name: &'static str,
    label: &'static str,
    value_of: fn(&E) -> FieldValue,
    // Unset values don't take part in the comparison and
    // unsetting the field is always a valid resolution.
    optional: bool,
}

impl<E> Clone for MergeableField<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for MergeableField<E> {}

impl<E> fmt::Debug for MergeableField<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MergeableField")
            .field("name", &self.name)
            .field("optional", &self.optional)
            .finish()
    }
}

impl<E> MergeableField<E> {
    pub const fn new(name: &'static str, label: &'static str, value_of: fn(&E) -> FieldValue) -> Self {
        Self {
            name,
            label,
            value_of,
            optional: false,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            name: self.name,
            label: self.label,
            value_of: self.value_of,
            optional: true,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// The distinct values of all sources, in ascending order.
    pub fn candidates(&self, sources: &[E]) -> Vec<FieldValue> {
        let mut values: Vec<_> = sources
            .iter()
            .map(self.value_of)
            .filter(|value| !(self.optional && value.is_unset()))
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    pub fn accepts(&self, resolution: FieldValue, candidates: &[FieldValue]) -> bool {
        (self.optional && resolution.is_unset()) || candidates.contains(&resolution)
    }
}

pub const THREAD_BEST_ANSWER: MergeableField<Thread> =
    MergeableField::new(BEST_ANSWER, "best answer", |t: &Thread| t.best_answer.into()).optional();

pub const THREAD_POLL: MergeableField<Thread> =
    MergeableField::new(POLL, "poll", |t: &Thread| t.poll.into()).optional();

pub const THREAD_WEIGHT: MergeableField<Thread> =
    MergeableField::new(WEIGHT, "weight", |t: &Thread| t.weight.into());

pub const THREAD_IS_HIDDEN: MergeableField<Thread> =
    MergeableField::new(IS_HIDDEN, "visibility", |t: &Thread| t.is_hidden.into());

pub const THREAD_IS_CLOSED: MergeableField<Thread> =
    MergeableField::new(IS_CLOSED, "closed state", |t: &Thread| t.is_closed.into());

/// All fields that conflict when merging a thread into another existing thread.
pub const THREAD_FIELDS: &[MergeableField<Thread>] = &[
    THREAD_BEST_ANSWER,
    THREAD_POLL,
    THREAD_WEIGHT,
    THREAD_IS_HIDDEN,
    THREAD_IS_CLOSED,
];

/// Fields that conflict when merging threads into a new thread,
/// whose weight and state are chosen explicitly.
pub const THREAD_REFERENCE_FIELDS: &[MergeableField<Thread>] = &[THREAD_BEST_ANSWER, THREAD_POLL];

/// Resolutions chosen by the caller, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolutions(BTreeMap<String, FieldValue>);

impl Resolutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.0.insert(field.to_owned(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<FieldValue> {
        self.0.get(field).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResolution {
    /// The value of every field to apply to the merged entity.
    pub values: BTreeMap<&'static str, FieldValue>,
    /// Fields whose value had to be chosen by the caller.
    pub conflicting: BTreeSet<&'static str>,
}

impl MergeResolution {
    pub fn value(&self, field: &str) -> Option<FieldValue> {
        self.values.get(field).copied()
    }

    pub fn is_conflicting(&self, field: &str) -> bool {
        self.conflicting.contains(field)
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicting.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error("The merged threads have different {label}, you have to choose which one to keep.")]
    Unresolved {
        field: &'static str,
        label: &'static str,
    },
    #[error("Invalid choice of {label}.")]
    InvalidResolution {
        field: &'static str,
        label: &'static str,
    },
}

impl ConflictError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Unresolved { field, .. } | Self::InvalidResolution { field, .. } => *field,
        }
    }
}

/// Resolves all fields of the sources, in table order.
///
/// A resolution for a field without conflict is optional and never
/// replaces the agreed value, but if it is supplied it has to be valid.
pub fn resolve<E>(
    fields: &[MergeableField<E>],
    resolutions: &Resolutions,
    sources: &[E],
) -> Result<MergeResolution, ConflictError> {
    let mut result = MergeResolution::default();
    for field in fields {
        let candidates = field.candidates(sources);
        let resolution = resolutions.get(field.name());
        if let Some(resolution) = resolution {
            if !field.accepts(resolution, &candidates) {
                return Err(ConflictError::InvalidResolution {
                    field: field.name(),
                    label: field.label(),
                });
            }
        }
        let value = if candidates.len() > 1 {
            log::debug!(
                "Conflicting values of field '{}': {candidates:?}",
                field.name()
            );
            result.conflicting.insert(field.name());
            resolution.ok_or(ConflictError::Unresolved {
                field: field.name(),
                label: field.label(),
            })?
        } else {
            candidates.first().copied().unwrap_or(FieldValue::Unset)
        };
        result.values.insert(field.name(), value);
    }
    Ok(result)
}
