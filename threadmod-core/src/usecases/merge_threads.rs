use super::{
    new_thread::{validate_new_thread, NewThread, NewThreadRequest},
    prelude::*,
    validate_batch::*,
};
use crate::{
    batch::{aggregate, ItemOutcome, ProcessingOrder},
    merge_conflict::{self, MergeResolution, Resolutions, THREAD_REFERENCE_FIELDS},
};
use std::collections::BTreeMap;

const THREAD_NOT_FOUND: &str =
    "Requested thread doesn't exist or you don't have permission to see it.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeThreadsRequest {
    pub threads: Option<Vec<ThreadId>>,
    pub new_thread: NewThreadRequest,
    pub resolutions: Resolutions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeThreads {
    pub new_thread: NewThread,
    /// Ordered by descending id
    pub threads: Vec<Thread>,
    pub resolution: MergeResolution,
}

// Every requested thread is either mergeable or reported as a problem.
fn screen_candidates<R>(ctx: &Context<R>, ids: Vec<ThreadId>) -> Result<Vec<Thread>>
where
    R: ThreadRepo,
{
    let mut loaded: BTreeMap<_, _> = ctx
        .repo
        .get_threads(&ids)?
        .into_iter()
        .map(|thread| (thread.id, thread))
        .collect();
    let loaded_ids: Vec<_> = loaded.keys().copied().collect();

    let screened = aggregate(loaded_ids, ProcessingOrder::Descending, |id| -> Result<_> {
        let Some(thread) = loaded.remove(&id) else {
            return Ok(ItemOutcome::Skipped);
        };
        if !ctx.acl.can_see_thread(ctx.user, &thread) {
            return Ok(ItemOutcome::Skipped);
        }
        Ok(match authorize_all(MERGE_THREAD, ctx.acl, ctx.user, &thread) {
            Ok(()) => ItemOutcome::Accepted(thread),
            Err(denial) => ItemOutcome::Rejected(CandidateProblem {
                id: thread.id,
                status: ProblemStatus::Forbidden,
                detail: denial.reason().to_owned(),
            }),
        })
    })?;

    let mut problems = screened.rejected;
    let visible: Vec<_> = screened
        .accepted
        .iter()
        .map(|thread| thread.id)
        .chain(problems.iter().map(|problem| problem.id))
        .collect();
    problems.extend(
        ids.into_iter()
            .filter(|id| !visible.contains(id))
            .map(|id| CandidateProblem {
                id,
                status: ProblemStatus::NotFound,
                detail: THREAD_NOT_FOUND.to_owned(),
            }),
    );
    if !problems.is_empty() {
        problems.sort_by_key(|problem| problem.id);
        log::debug!("{} thread(s) can't be merged", problems.len());
        return Err(Error::MergeCandidates(problems));
    }
    Ok(screened.accepted)
}

/// Validates merging many threads into a new one.
pub fn merge_threads<R>(ctx: &Context<R>, request: MergeThreadsRequest) -> Result<MergeThreads>
where
    R: ThreadRepo + CategoryRepo,
{
    let MergeThreadsRequest {
        threads,
        new_thread,
        resolutions,
    } = request;
    let kind = ActionKind::MergeThreads;
    let ids = requested_ids(kind, threads)?;
    check_limit(kind, ctx.limits.threads, ids.len())?;
    let new_thread = validate_new_thread(ctx, &new_thread)?;
    log::debug!("Validating {} thread(s) to be merged", ids.len());

    let threads = screen_candidates(ctx, ids.into_iter().collect())?;
    let resolution = merge_conflict::resolve(THREAD_REFERENCE_FIELDS, &resolutions, &threads)?;
    log::info!(
        "Authorized merging of {} threads into a new thread in category {}",
        threads.len(),
        new_thread.category.id
    );
    Ok(MergeThreads {
        new_thread,
        threads,
        resolution,
    })
}
