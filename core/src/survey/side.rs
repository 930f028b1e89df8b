use crate::prelude::SwathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the vessel a swath edge lies on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Starboard,
    Port,
    /// Not yet configured.
    #[default]
    Unknown,
}

impl Side {
    pub fn is_concrete(self) -> bool {
        !matches!(self, Side::Unknown)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Starboard => "starboard",
            Side::Port => "port",
            Side::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl FromStr for Side {
    type Err = SwathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "starboard" | "stbd" => Ok(Side::Starboard),
            "port" => Ok(Side::Port),
            "unknown" => Ok(Side::Unknown),
            other => Err(SwathError::InvalidConfig(format!(
                "unrecognized side '{}'",
                other
            ))),
        }
    }
}
