use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

// dense internal node index, assigned in insertion order
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
pub struct VID(pub usize);

impl VID {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn as_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl From<usize> for VID {
    fn from(id: usize) -> Self {
        VID(id)
    }
}

impl From<VID> for usize {
    fn from(id: VID) -> Self {
        id.0
    }
}

#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
pub struct EID(pub usize);

impl From<EID> for usize {
    fn from(id: EID) -> Self {
        id.0
    }
}

impl From<usize> for EID {
    fn from(id: usize) -> Self {
        EID(id)
    }
}

/// The external label of a node, as it appears in the input.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize, Deserialize)]
pub enum GID {
    U64(u64),
    Str(String),
}

impl GID {
    pub fn into_str(self) -> Option<String> {
        match self {
            GID::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GID::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            GID::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn to_str(&self) -> Cow<'_, str> {
        match self {
            GID::U64(v) => Cow::Owned(v.to_string()),
            GID::Str(v) => Cow::Borrowed(v),
        }
    }
}

impl Display for GID {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GID::U64(v) => write!(f, "{}", v),
            GID::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<u64> for GID {
    fn from(id: u64) -> Self {
        GID::U64(id)
    }
}

impl From<usize> for GID {
    fn from(id: usize) -> Self {
        GID::U64(id as u64)
    }
}

// negative integers have no numeric label, keep them as text
impl From<i32> for GID {
    fn from(id: i32) -> Self {
        u64::try_from(id).map_or_else(|_| GID::Str(id.to_string()), GID::U64)
    }
}

impl From<i64> for GID {
    fn from(id: i64) -> Self {
        u64::try_from(id).map_or_else(|_| GID::Str(id.to_string()), GID::U64)
    }
}

impl From<&str> for GID {
    fn from(id: &str) -> Self {
        GID::Str(id.to_owned())
    }
}

impl From<String> for GID {
    fn from(id: String) -> Self {
        GID::Str(id)
    }
}

impl From<&GID> for GID {
    fn from(id: &GID) -> Self {
        id.clone()
    }
}
