use super::prelude::*;
use crate::visibility;
use std::collections::BTreeSet;

/// Authorized entities of a batch, ordered by id.
///
/// Contains exactly one entity for each unique requested id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBatch<E>(Vec<E>);

impl<E> ValidatedBatch<E> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<E> {
        self.0
    }
}

impl ValidatedBatch<Post> {
    pub fn ids(&self) -> Vec<PostId> {
        self.0.iter().map(|post| post.id).collect()
    }
}

impl ValidatedBatch<Thread> {
    pub fn ids(&self) -> Vec<ThreadId> {
        self.0.iter().map(|thread| thread.id).collect()
    }
}

/// Checks an accepted item against the first accepted item of the batch.
pub(crate) type ConsistencyRule<E> = fn(first: &E, item: &E) -> std::result::Result<(), Inconsistency>;

/// Removes duplicates and rejects missing or too few ids.
pub(crate) fn requested_ids<T: Ord>(kind: ActionKind, ids: Option<Vec<T>>) -> Result<BTreeSet<T>> {
    let ids: BTreeSet<_> = ids.unwrap_or_default().into_iter().collect();
    if ids.len() < kind.min_items() {
        return Err(Error::EmptyOrMissingInput(kind));
    }
    Ok(ids)
}

pub(crate) fn check_limit(kind: ActionKind, limit: usize, count: usize) -> Result<()> {
    if count > limit {
        return Err(Error::LimitExceeded { limit, kind });
    }
    Ok(())
}

/// Authorizes every candidate, aborting at the first denial
/// or inconsistency.
pub(crate) fn authorize_candidates<E>(
    acl: &dyn Acl,
    user: &User,
    checks: &[Capability<E>],
    consistency: Option<ConsistencyRule<E>>,
    candidates: Vec<E>,
) -> Result<Vec<E>> {
    let mut accepted: Vec<E> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        authorize_all(checks, acl, user, &candidate)?;
        if let (Some(first), Some(rule)) = (accepted.first(), consistency) {
            rule(first, &candidate)?;
        }
        accepted.push(candidate);
    }
    Ok(accepted)
}

/// Validates the requested posts of a thread.
///
/// 1. Rejects missing ids and batches exceeding the limit
/// 2. Loads the visible posts among the requested ids
/// 3. Authorizes each of them with all applicable checks
/// 4. Applies the consistency rule (if any) against the first post
/// 5. Fails if not every requested post has been accepted
pub(crate) fn validate_posts<R>(
    ctx: &Context<R>,
    thread: &Thread,
    kind: ActionKind,
    checks: &[Capability<Post>],
    consistency: Option<ConsistencyRule<Post>>,
    ids: Option<Vec<PostId>>,
) -> Result<ValidatedBatch<Post>>
where
    R: PostRepo,
{
    let ids = requested_ids(kind, ids)?;
    check_limit(kind, ctx.limits.posts, ids.len())?;
    log::debug!(
        "Validating {} post(s) of thread {} to be {}",
        ids.len(),
        thread.id,
        kind.past_participle()
    );
    let ids: Vec<_> = ids.into_iter().collect();
    let candidates = visibility::load_visible_posts(ctx.repo, ctx.acl, ctx.user, thread, &ids)?;
    let posts = authorize_candidates(ctx.acl, ctx.user, checks, consistency, candidates)?;
    if posts.len() != ids.len() {
        log::debug!(
            "Found {} of {} requested post(s) of thread {}",
            posts.len(),
            ids.len(),
            thread.id
        );
        return Err(Error::ItemsNotFound(kind));
    }
    Ok(ValidatedBatch(posts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicate_requested_ids() {
        let ids = requested_ids(ActionKind::DeletePosts, Some(vec![3, 1, 3, 2])).unwrap();
        assert_eq!(vec![1, 2, 3], ids.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn reject_missing_and_too_few_ids() {
        assert!(matches!(
            requested_ids::<i64>(ActionKind::MovePosts, None),
            Err(Error::EmptyOrMissingInput(ActionKind::MovePosts))
        ));
        assert!(matches!(
            requested_ids::<i64>(ActionKind::SplitPosts, Some(vec![])),
            Err(Error::EmptyOrMissingInput(ActionKind::SplitPosts))
        ));
        assert!(matches!(
            requested_ids(ActionKind::MergePosts, Some(vec![5, 5])),
            Err(Error::EmptyOrMissingInput(ActionKind::MergePosts))
        ));
        assert!(requested_ids(ActionKind::MergePosts, Some(vec![5, 6])).is_ok());
    }

    #[test]
    fn limit() {
        assert!(check_limit(ActionKind::DeletePosts, 3, 3).is_ok());
        let err = check_limit(ActionKind::DeletePosts, 3, 4).unwrap_err();
        assert_eq!(
            "No more than 3 posts can be deleted at single time.",
            err.to_string()
        );
    }
}
