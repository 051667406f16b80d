use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;
use strum::{Display, EnumString};
use thiserror::Error;

use crate::id::{CategoryId, PollId, PostId, ThreadId};

/// Pinning weight of a thread.
///
/// The weights are ordered: a user allowed to pin threads
/// globally is also allowed to pin them in a category.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ThreadWeight {
    #[default]
    Default          = 0,
    PinnedInCategory = 1,
    PinnedGlobally   = 2,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid thread weight {0}")]
pub struct ThreadWeightOutOfRange(pub i64);

impl TryFrom<i64> for ThreadWeight {
    type Error = ThreadWeightOutOfRange;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        Self::from_i64(from).ok_or(ThreadWeightOutOfRange(from))
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id            : ThreadId,
    pub category      : CategoryId,
    pub title         : String,
    pub weight        : ThreadWeight,
    pub is_hidden     : bool,
    pub is_closed     : bool,
    pub is_unapproved : bool,
    pub best_answer   : Option<PostId>,
    pub poll          : Option<PollId>,
}

impl Thread {
    pub fn has_best_answer(&self) -> bool {
        self.best_answer.is_some()
    }

    pub fn has_poll(&self) -> bool {
        self.poll.is_some()
    }
}
