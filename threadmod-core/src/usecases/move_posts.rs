use super::{
    prelude::*,
    resolve_thread_link::{resolve_thread_link, LinkPurpose},
    validate_batch::*,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePostsRequest {
    /// Link to the thread the posts are moved to
    pub new_thread: Option<String>,
    pub posts: Option<Vec<PostId>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePosts {
    pub thread: ThreadId,
    pub new_thread: Thread,
    pub posts: ValidatedBatch<Post>,
}

pub fn move_posts<R>(ctx: &Context<R>, thread: &Thread, request: MovePostsRequest) -> Result<MovePosts>
where
    R: PostRepo + ThreadRepo,
{
    let MovePostsRequest { new_thread, posts } = request;
    let new_thread = resolve_thread_link(ctx, thread, new_thread.as_deref(), LinkPurpose::MovePosts)?;
    let posts = validate_posts(ctx, thread, ActionKind::MovePosts, MOVE_POST, None, posts)?;
    log::info!(
        "Authorized moving {} post(s) from thread {} to thread {}",
        posts.len(),
        thread.id,
        new_thread.id
    );
    Ok(MovePosts {
        thread: thread.id,
        new_thread,
        posts,
    })
}
