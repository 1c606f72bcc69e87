//! Error types for `finscan-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A catalog artifact failed validation; the whole load is rejected.
  #[error("invalid catalog: {0}")]
  InvalidCatalog(String),

  #[error("invalid catch entry: {0}")]
  InvalidCatch(String),

  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  /// Wrap a backend error from any [`crate::store::StateStore`].
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
