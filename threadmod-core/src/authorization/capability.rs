use super::{Acl, Denial};
use crate::entities::*;
use std::fmt;

type CheckFn<E> = fn(&dyn Acl, &User, &E) -> Result<(), Denial>;

/// A single named capability check of an entity.
///
/// Checks are composed into ordered lists per action and
/// evaluated one after another until the first denial.
pub struct Capability<E> {
    name: &'static str,
    applies_to: fn(&E) -> bool,
    check: CheckFn<E>,
}

impl<E> Clone for Capability<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Capability<E> {}

impl<E> fmt::Debug for Capability<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .finish()
    }
}

const fn always<E>(_: &E) -> bool {
    true
}

impl<E> Capability<E> {
    pub const fn new(name: &'static str, check: CheckFn<E>) -> Self {
        Self {
            name,
            applies_to: always::<E>,
            check,
        }
    }

    /// Restricts the check to entities matching the predicate.
    pub const fn when(self, applies_to: fn(&E) -> bool) -> Self {
        Self {
            name: self.name,
            applies_to,
            check: self.check,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn applies_to(&self, entity: &E) -> bool {
        (self.applies_to)(entity)
    }

    pub fn authorize(&self, acl: &dyn Acl, user: &User, entity: &E) -> Result<(), Denial> {
        (self.check)(acl, user, entity)
    }
}

/// Evaluates all applicable checks in order, stopping at the first denial.
pub fn authorize_all<E>(
    checks: &[Capability<E>],
    acl: &dyn Acl,
    user: &User,
    entity: &E,
) -> Result<(), Denial> {
    for check in checks.iter().filter(|c| c.applies_to(entity)) {
        check.authorize(acl, user, entity).inspect_err(|denial| {
            log::debug!("Capability '{}' denied: {denial}", check.name());
        })?;
    }
    Ok(())
}

pub const DELETE_POST: &[Capability<Post>] = &[
    Capability::new("delete_event", |acl: &dyn Acl, user: &User, post: &Post| {
        acl.allow_delete_event(user, post)
    })
    .when(|post: &Post| post.is_event),
    Capability::new("delete_best_answer", |acl: &dyn Acl, user: &User, post: &Post| {
        acl.allow_delete_best_answer(user, post)
    })
    .when(|post: &Post| !post.is_event),
    Capability::new("delete_post", |acl: &dyn Acl, user: &User, post: &Post| {
        acl.allow_delete_post(user, post)
    })
    .when(|post: &Post| !post.is_event),
];

pub const MERGE_POST: &[Capability<Post>] = &[Capability::new("merge_post", |acl: &dyn Acl, user: &User, post: &Post| {
    acl.allow_merge_post(user, post)
})];

pub const MOVE_POST: &[Capability<Post>] = &[Capability::new("move_post", |acl: &dyn Acl, user: &User, post: &Post| {
    acl.allow_move_post(user, post)
})];

pub const SPLIT_POST: &[Capability<Post>] = &[Capability::new("split_post", |acl: &dyn Acl, user: &User, post: &Post| {
    acl.allow_split_post(user, post)
})];

pub const DELETE_THREAD: &[Capability<Thread>] =
    &[Capability::new("delete_thread", |acl: &dyn Acl, user: &User, thread: &Thread| {
        acl.allow_delete_thread(user, thread)
    })];

pub const MERGE_THREAD: &[Capability<Thread>] =
    &[Capability::new("merge_thread", |acl: &dyn Acl, user: &User, thread: &Thread| {
        acl.allow_merge_thread(user, thread, false)
    })];

pub const MERGE_INTO_THREAD: &[Capability<Thread>] =
    &[Capability::new("merge_into_thread", |acl: &dyn Acl, user: &User, thread: &Thread| {
        acl.allow_merge_thread(user, thread, true)
    })];
