//! [`MemoryStore`]: an in-process [`StateStore`] for tests and throwaway
//! sessions.

use std::{
  collections::HashMap,
  convert::Infallible,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::store::StateStore;

/// A `HashMap`-backed store. Cloning is cheap and clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Raw contents under `key`, bypassing the async interface.
  pub fn raw(&self, key: &str) -> Option<String> { self.lock().get(key).cloned() }
}

impl StateStore for MemoryStore {
  type Error = Infallible;

  async fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.lock().get(key).cloned())
  }

  async fn put(&self, key: &str, value: String) -> Result<(), Infallible> {
    self.lock().insert(key.to_owned(), value);
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<(), Infallible> {
    self.lock().remove(key);
    Ok(())
  }
}
