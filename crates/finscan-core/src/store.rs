//! The `StateStore` trait: durable key-value storage for user-local state.
//!
//! The trait is implemented by storage backends (e.g. `finscan-store-sqlite`)
//! and by [`crate::MemoryStore`] for tests. Higher layers receive a store
//! handle explicitly; nothing in the core reaches for ambient storage.

use std::future::Future;

/// Abstraction over a string-keyed blob store.
///
/// `put` must replace the whole value for a key atomically: a reader observes
/// either the previous blob or the new one, never a mix.
pub trait StateStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the blob stored under `key`. Returns `None` if absent.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Overwrite the blob stored under `key`.
  fn put<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Delete `key`. Removing an absent key is not an error.
  fn remove<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
