use super::{
    new_thread::{validate_new_thread, NewThread, NewThreadRequest},
    prelude::*,
    validate_batch::*,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPostsRequest {
    pub new_thread: NewThreadRequest,
    pub posts: Option<Vec<PostId>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPosts {
    pub thread: ThreadId,
    pub new_thread: NewThread,
    pub posts: ValidatedBatch<Post>,
}

pub fn split_posts<R>(ctx: &Context<R>, thread: &Thread, request: SplitPostsRequest) -> Result<SplitPosts>
where
    R: PostRepo + CategoryRepo,
{
    let SplitPostsRequest { new_thread, posts } = request;
    let new_thread = validate_new_thread(ctx, &new_thread)?;
    let posts = validate_posts(ctx, thread, ActionKind::SplitPosts, SPLIT_POST, None, posts)?;
    log::info!(
        "Authorized splitting {} post(s) of thread {} into a new thread in category {}",
        posts.len(),
        thread.id,
        new_thread.category.id
    );
    Ok(SplitPosts {
        thread: thread.id,
        new_thread,
        posts,
    })
}
