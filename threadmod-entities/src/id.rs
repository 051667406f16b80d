use std::{fmt, num::ParseIntError, str::FromStr};

/// Primitive representation of all database identifiers.
pub type IdValue = i64;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(IdValue);

        impl $name {
            pub const fn new(value: IdValue) -> Self {
                Self(value)
            }

            pub const fn value(self) -> IdValue {
                self.0
            }
        }

        impl From<IdValue> for $name {
            fn from(from: IdValue) -> Self {
                Self(from)
            }
        }

        impl From<$name> for IdValue {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<IdValue>().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifies a registered user.
    UserId
);
numeric_id!(CategoryId);
numeric_id!(ThreadId);
numeric_id!(PostId);
numeric_id!(PollId);
