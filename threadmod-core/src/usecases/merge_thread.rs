use super::{
    prelude::*,
    resolve_thread_link::{resolve_thread_link, LinkPurpose},
};
use crate::merge_conflict::{self, MergeResolution, Resolutions, THREAD_FIELDS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeThreadRequest {
    /// Link to the thread the current one is merged into
    pub other_thread: Option<String>,
    pub resolutions: Resolutions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeThread {
    pub thread: ThreadId,
    pub other_thread: Thread,
    pub resolution: MergeResolution,
}

/// Validates merging `thread` into the linked thread.
pub fn merge_thread<R>(ctx: &Context<R>, thread: &Thread, request: MergeThreadRequest) -> Result<MergeThread>
where
    R: ThreadRepo,
{
    let MergeThreadRequest {
        other_thread,
        resolutions,
    } = request;
    let other_thread = resolve_thread_link(
        ctx,
        thread,
        other_thread.as_deref(),
        LinkPurpose::MergeThread,
    )?;
    let sources = [thread.clone(), other_thread];
    let resolution = merge_conflict::resolve(THREAD_FIELDS, &resolutions, &sources)?;
    let [_, other_thread] = sources;
    log::info!(
        "Authorized merging thread {} into thread {} ({} conflict(s))",
        thread.id,
        other_thread.id,
        resolution.conflicting.len()
    );
    Ok(MergeThread {
        thread: thread.id,
        other_thread,
        resolution,
    })
}
