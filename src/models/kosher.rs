use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KitchenError;

/// Dietary category of an ingredient.
///
/// Meaty and Milky ingredients may not share a dish; Parve goes with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KosherType {
    Meaty,
    Milky,
    Parve,
}

impl KosherType {
    pub const ALL: [KosherType; 3] = [KosherType::Meaty, KosherType::Milky, KosherType::Parve];

    /// Whether two categories may be served together.
    pub fn is_compatible_with(self, other: KosherType) -> bool {
        !matches!(
            (self, other),
            (KosherType::Meaty, KosherType::Milky) | (KosherType::Milky, KosherType::Meaty)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KosherType::Meaty => "Meaty",
            KosherType::Milky => "Milky",
            KosherType::Parve => "Parve",
        }
    }
}

impl fmt::Display for KosherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw discriminants follow declaration order: 0 = Meaty, 1 = Milky, 2 = Parve.
impl TryFrom<u8> for KosherType {
    type Error = KitchenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        KosherType::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| KitchenError::BadKosherType(value.to_string()))
    }
}

impl FromStr for KosherType {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KosherType::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KitchenError::BadKosherType(s.to_string()))
    }
}
