use super::prelude::*;
use crate::visibility;
use thiserror::Error;

/// What the referenced thread is going to be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPurpose {
    /// Target of posts moved out of the current thread
    MovePosts,
    /// Target the current thread is merged into
    MergeThread,
}

impl LinkPurpose {
    fn same_thread_message(self) -> &'static str {
        match self {
            Self::MovePosts => "Thread to move posts to is same as current one.",
            Self::MergeThread => "You can't merge thread with itself.",
        }
    }

    fn cannot_reply_message(self) -> &'static str {
        match self {
            Self::MovePosts => "You can't move posts to threads you can't reply.",
            Self::MergeThread => "You can't merge this thread into thread you can't reply.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("Enter link to new thread.")]
    Missing,
    #[error("This is not a valid thread link.")]
    Invalid,
    #[error("{}", .0.same_thread_message())]
    SameThread(LinkPurpose),
    #[error("The thread you have entered link to doesn't exist or you don't have permission to see it.")]
    NotFound,
    #[error(transparent)]
    Denied(#[from] Denial),
    #[error("{}", .0.cannot_reply_message())]
    CannotReply(LinkPurpose),
}

/// Resolves a link entered by the user into a thread
/// other than `current` the user may act on.
pub fn resolve_thread_link<R>(
    ctx: &Context<R>,
    current: &Thread,
    link: Option<&str>,
    purpose: LinkPurpose,
) -> Result<Thread>
where
    R: ThreadRepo,
{
    let link = link
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .ok_or(ReferenceError::Missing)?;
    let id = ctx
        .links
        .thread_id_from_link(link)
        .ok_or(ReferenceError::Invalid)?;
    if id == current.id {
        return Err(ReferenceError::SameThread(purpose).into());
    }
    let other = visibility::load_visible_thread(ctx.repo, ctx.acl, ctx.user, id)?
        .ok_or(ReferenceError::NotFound)?;
    if purpose == LinkPurpose::MergeThread {
        authorize_all(MERGE_INTO_THREAD, ctx.acl, ctx.user, &other)
            .map_err(ReferenceError::Denied)?;
    }
    if !ctx.acl.can_reply_thread(ctx.user, &other) {
        return Err(ReferenceError::CannotReply(purpose).into());
    }
    log::debug!("Resolved link '{link}' to thread {}", other.id);
    Ok(other)
}
