// Read-only data access traits.
// Each repository is responsible for a single entity. The moderation
// use cases never modify anything, they only load the candidates
// of an action at a consistent snapshot.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PostRepo {
    // Posts of the given thread whose id is contained in `ids`.
    // Ids without a matching post are silently omitted.
    fn get_posts_of_thread(&self, thread_id: ThreadId, ids: &[PostId]) -> Result<Vec<Post>>;
}

// Only threads of the public threads tree are loaded, i.e. private
// threads are reported as `NotFound` or omitted.
pub trait ThreadRepo {
    fn get_thread(&self, id: ThreadId) -> Result<Thread>;

    // Ids without a matching thread are silently omitted.
    fn get_threads(&self, ids: &[ThreadId]) -> Result<Vec<Thread>>;
}

pub trait CategoryRepo {
    fn get_category(&self, id: CategoryId) -> Result<Category>;
}
