use crate::{id::CategoryId, thread::ThreadWeight};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Categories of private threads and other trees
    /// can't be targeted by thread moderation.
    pub is_threads_tree: bool,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_threads_tree: true,
        }
    }
}

/// Permissions of a user within a single category.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAcl {
    pub can_see             : bool,
    pub can_browse          : bool,
    pub can_start_threads   : bool,
    pub can_pin_threads     : ThreadWeight,
    pub can_hide_threads    : bool,
    pub can_close_threads   : bool,
    pub can_approve_content : bool,
}

impl CategoryAcl {
    pub fn can_see_and_browse(&self) -> bool {
        self.can_see && self.can_browse
    }

    pub fn can_pin_with(&self, weight: ThreadWeight) -> bool {
        weight <= self.can_pin_threads
    }
}
