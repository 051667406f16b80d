use crate::id::{CategoryId, PostId, ThreadId, UserId};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id            : PostId,
    pub thread        : ThreadId,
    pub category      : CategoryId,
    // None for anonymous authors and deleted accounts,
    // identified by `poster_name` only.
    pub poster_id     : Option<UserId>,
    pub poster_name   : String,
    pub is_hidden     : bool,
    pub is_unapproved : bool,
    pub is_first_post : bool,
    pub is_event      : bool,
    pub is_best_answer: bool,
}

impl Post {
    pub fn is_posted_by(&self, user_id: UserId) -> bool {
        self.poster_id == Some(user_id)
    }

    /// Both posts have been written by the same author.
    ///
    /// Anonymous posts (without a `poster_id`) are
    /// compared by their `poster_name`.
    pub fn has_same_author(&self, other: &Post) -> bool {
        match (self.poster_id, other.poster_id) {
            (None, None) => self.poster_name == other.poster_name,
            (lhs, rhs) => lhs == rhs,
        }
    }

    pub fn has_same_visibility(&self, other: &Post) -> bool {
        self.is_hidden == other.is_hidden && self.is_unapproved == other.is_unapproved
    }
}
