//! Restricts candidates to those the acting user is allowed to see.

use crate::{authorization::Acl, entities::*, repositories::*};

pub fn is_post_visible(user: &User, category_acl: &CategoryAcl, post: &Post) -> bool {
    // Hidden posts are still listed, only their content is
    // concealed. Unapproved posts are only visible for their
    // authors and for moderators that are able to approve them.
    !post.is_unapproved || category_acl.can_approve_content || post.is_posted_by(user.id)
}

/// Loads the requested posts of a thread that are visible for the user.
///
/// The posts are ordered by ascending id. Requested ids of posts that
/// don't exist or are invisible are omitted.
pub fn load_visible_posts<R>(
    repo: &R,
    acl: &dyn Acl,
    user: &User,
    thread: &Thread,
    ids: &[PostId],
) -> Result<Vec<Post>, Error>
where
    R: PostRepo,
{
    let category_acl = acl.category_acl(user, thread.category)?;
    let mut posts = repo.get_posts_of_thread(thread.id, ids)?;
    posts.retain(|post| post.thread == thread.id && is_post_visible(user, &category_acl, post));
    posts.sort_unstable_by_key(|post| post.id);
    posts.dedup_by_key(|post| post.id);
    Ok(posts)
}

/// Loads a single thread if it exists and is visible for the user.
pub fn load_visible_thread<R>(
    repo: &R,
    acl: &dyn Acl,
    user: &User,
    id: ThreadId,
) -> Result<Option<Thread>, Error>
where
    R: ThreadRepo,
{
    match repo.get_thread(id) {
        Ok(thread) if acl.can_see_thread(user, &thread) => Ok(Some(thread)),
        Ok(_) | Err(Error::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}
