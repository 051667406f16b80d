use super::{prelude::*, validate_batch::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePosts {
    pub thread: ThreadId,
    /// The first post is the one all others are merged into.
    pub posts: ValidatedBatch<Post>,
}

// Checks a post against the first (i.e. oldest) post of the batch.
fn check_mergeable(first: &Post, post: &Post) -> std::result::Result<(), Inconsistency> {
    if !first.has_same_author(post) {
        return Err(Inconsistency::DifferentAuthors);
    }
    if first.is_first_post && post.is_best_answer {
        return Err(Inconsistency::BestAnswerWithFirstPost);
    }
    // The first post of a thread shares the visibility of the thread
    if !first.is_first_post && !first.has_same_visibility(post) {
        return Err(Inconsistency::DifferentVisibility);
    }
    Ok(())
}

pub fn merge_posts<R>(
    ctx: &Context<R>,
    thread: &Thread,
    posts: Option<Vec<PostId>>,
) -> Result<MergePosts>
where
    R: PostRepo,
{
    let posts = validate_posts(
        ctx,
        thread,
        ActionKind::MergePosts,
        MERGE_POST,
        Some(check_mergeable),
        posts,
    )?;
    log::info!(
        "Authorized merging of {} posts of thread {}",
        posts.len(),
        thread.id
    );
    Ok(MergePosts {
        thread: thread.id,
        posts,
    })
}
