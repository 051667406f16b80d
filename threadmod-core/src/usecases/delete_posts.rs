use super::{prelude::*, validate_batch::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePosts {
    pub thread: ThreadId,
    pub posts: ValidatedBatch<Post>,
}

pub fn delete_posts<R>(
    ctx: &Context<R>,
    thread: &Thread,
    posts: Option<Vec<PostId>>,
) -> Result<DeletePosts>
where
    R: PostRepo,
{
    let posts = validate_posts(ctx, thread, ActionKind::DeletePosts, DELETE_POST, None, posts)?;
    log::info!(
        "Authorized deletion of {} post(s) of thread {}",
        posts.len(),
        thread.id
    );
    Ok(DeletePosts {
        thread: thread.id,
        posts,
    })
}
