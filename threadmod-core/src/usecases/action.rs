/// The kind of a bulk moderation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    DeletePosts,
    MergePosts,
    MovePosts,
    SplitPosts,
    DeleteThreads,
    MergeThreads,
}

impl ActionKind {
    pub const fn noun(self) -> &'static str {
        match self {
            Self::DeletePosts | Self::MergePosts | Self::MovePosts | Self::SplitPosts => "post",
            Self::DeleteThreads | Self::MergeThreads => "thread",
        }
    }

    pub const fn verb(self) -> &'static str {
        match self {
            Self::DeletePosts | Self::DeleteThreads => "delete",
            Self::MergePosts | Self::MergeThreads => "merge",
            Self::MovePosts => "move",
            Self::SplitPosts => "split",
        }
    }

    pub const fn past_participle(self) -> &'static str {
        match self {
            Self::DeletePosts | Self::DeleteThreads => "deleted",
            Self::MergePosts | Self::MergeThreads => "merged",
            Self::MovePosts => "moved",
            Self::SplitPosts => "split",
        }
    }

    /// Merging requires at least two items.
    pub const fn min_items(self) -> usize {
        match self {
            Self::MergePosts | Self::MergeThreads => 2,
            _ => 1,
        }
    }

    pub fn empty_message(self) -> String {
        match self.min_items() {
            1 => format!(
                "You have to specify at least one {} to {}.",
                self.noun(),
                self.verb()
            ),
            _ => format!(
                "You have to select at least two {}s to {}.",
                self.noun(),
                self.verb()
            ),
        }
    }

    pub fn limit_message(self, limit: usize) -> String {
        let plural = if limit == 1 { "" } else { "s" };
        format!(
            "No more than {limit} {}{plural} can be {} at single time.",
            self.noun(),
            self.past_participle()
        )
    }

    pub fn not_found_message(self) -> String {
        format!(
            "One or more {}s to {} could not be found.",
            self.noun(),
            self.verb()
        )
    }
}
