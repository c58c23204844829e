use serde::{Deserialize, Serialize};

/// Numeric identifier of a reference sequence, as assigned by a reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefId(pub i32);

impl RefId {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for RefId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strand a hinted seed aligns to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    /// Interpret an encoded orientation byte.
    ///
    /// Only `+` means forward; every other byte is treated as reverse.
    #[must_use]
    pub fn from_orientation(byte: u8) -> Self {
        if byte == b'+' {
            Self::Forward
        } else {
            Self::Reverse
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}
