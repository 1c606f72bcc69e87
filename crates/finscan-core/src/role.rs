//! The locally stored role tag that selects which surface the front end shows.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Consumer,
  Fisherman,
}

impl Role {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Consumer => "consumer",
      Self::Fisherman => "fisherman",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "consumer" => Ok(Self::Consumer),
      "fisherman" => Ok(Self::Fisherman),
      other => Err(Error::UnknownRole(other.to_owned())),
    }
  }
}
