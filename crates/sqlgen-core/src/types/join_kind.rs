use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a clause within a declaration.
///
/// `From` is synthetic: it marks the leading table of every declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
    From,
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    /// The canonical clause keyword text, e.g. `join` for `Inner`.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::Inner => "join",
            Self::Left => "left join",
            Self::Right => "right join",
            Self::Full => "full join",
            Self::Cross => "cross join",
        }
    }

    /// Whether a clause of this kind must carry an `on` condition.
    pub fn requires_condition(self) -> bool {
        !matches!(self, Self::From | Self::Cross)
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => write!(f, "FROM"),
            Self::Inner => write!(f, "INNER"),
            Self::Left => write!(f, "LEFT"),
            Self::Right => write!(f, "RIGHT"),
            Self::Full => write!(f, "FULL"),
            Self::Cross => write!(f, "CROSS"),
        }
    }
}
