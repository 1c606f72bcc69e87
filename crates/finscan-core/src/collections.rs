//! The persisted collections manager: scan history, purchase marks, and the
//! catch log, each stored as one JSON blob under its own key.
//!
//! Every mutation reads the current blob, applies its policy, and writes the
//! whole collection back with a single `put`. Malformed blobs read as empty.

use std::collections::{BTreeSet, HashSet};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
  Error, Result,
  catch::{CatchEntry, NewCatch},
  role::Role,
  store::StateStore,
};

/// Maximum number of identifiers kept in the scan history.
pub const HISTORY_LIMIT: usize = 10;

pub const HISTORY_KEY: &str = "scanHistory";
pub const PURCHASES_KEY: &str = "purchasedFish";
pub const CATCHES_KEY: &str = "fishCatches";
pub const ROLE_KEY: &str = "userRole";

// ─── Collection kind ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
  History,
  Purchases,
  Catches,
}

impl CollectionKind {
  pub fn key(self) -> &'static str {
    match self {
      Self::History => HISTORY_KEY,
      Self::Purchases => PURCHASES_KEY,
      Self::Catches => CATCHES_KEY,
    }
  }
}

// ─── Policies ────────────────────────────────────────────────────────────────

/// Move `id` to the front, dropping any earlier occurrence, then keep at most
/// `limit` entries.
pub fn push_front_dedup(list: &mut Vec<String>, id: &str, limit: usize) {
  list.retain(|existing| existing != id);
  list.insert(0, id.to_owned());
  list.truncate(limit);
}

/// Drop every repeat of an id after its first occurrence.
pub fn dedup_keep_first(list: &mut Vec<String>) {
  let mut seen = HashSet::new();
  list.retain(|id| seen.insert(id.clone()));
}

/// Remove `id` if present, otherwise add it. Returns the new membership.
pub fn toggle_member(set: &mut BTreeSet<String>, id: &str) -> bool {
  if set.remove(id) {
    false
  } else {
    set.insert(id.to_owned());
    true
  }
}

// ─── Manager ─────────────────────────────────────────────────────────────────

/// Typed access to the persisted collections held in a [`StateStore`].
pub struct Collections<S> {
  store: S,
}

impl<S: StateStore> Collections<S> {
  pub fn new(store: S) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  async fn read<T>(&self, key: &str) -> Result<T>
  where
    T: DeserializeOwned + Default,
  {
    let Some(raw) = self.store.get(key).await.map_err(Error::store)? else {
      return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
      Ok(value) => Ok(value),
      Err(e) => {
        warn!(
          key,
          bytes = raw.len(),
          error = %e,
          "discarding malformed persisted state"
        );
        Ok(T::default())
      }
    }
  }

  async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    self.store.put(key, json).await.map_err(Error::store)?;
    debug!(key, "collection persisted");
    Ok(())
  }

  // ── Scan history ──────────────────────────────────────────────────────────

  /// Identifiers, most recent first. Repeats already on disk collapse to
  /// their newest occurrence.
  pub async fn load_history(&self) -> Result<Vec<String>> {
    let mut history: Vec<String> = self.read(HISTORY_KEY).await?;
    dedup_keep_first(&mut history);
    history.truncate(HISTORY_LIMIT);
    Ok(history)
  }

  /// Record a scan of `id` and return the new history.
  pub async fn push_history(&self, id: &str) -> Result<Vec<String>> {
    let mut history = self.load_history().await?;
    push_front_dedup(&mut history, id, HISTORY_LIMIT);
    self.write(HISTORY_KEY, &history).await?;
    Ok(history)
  }

  // ── Purchase marks ────────────────────────────────────────────────────────

  pub async fn load_purchases(&self) -> Result<BTreeSet<String>> {
    self.read(PURCHASES_KEY).await
  }

  pub async fn is_purchased(&self, id: &str) -> Result<bool> {
    Ok(self.load_purchases().await?.contains(id))
  }

  /// Flip the purchase mark on `id` and return the new set.
  pub async fn toggle_purchase(&self, id: &str) -> Result<BTreeSet<String>> {
    let mut purchases = self.load_purchases().await?;
    let marked = toggle_member(&mut purchases, id);
    self.write(PURCHASES_KEY, &purchases).await?;
    debug!(id, marked, "purchase mark toggled");
    Ok(purchases)
  }

  // ── Catch log ─────────────────────────────────────────────────────────────

  /// Entries in the order they were logged.
  ///
  /// The log is decoded as a whole: one malformed entry (an unparseable date,
  /// say) makes the entire log read as empty, and the next
  /// [`append_catch`](Self::append_catch) replaces it.
  pub async fn load_catches(&self) -> Result<Vec<CatchEntry>> {
    self.read(CATCHES_KEY).await
  }

  /// Validate `input`, assign it an id, append it, and return the new log.
  pub async fn append_catch(&self, input: NewCatch) -> Result<Vec<CatchEntry>> {
    input.validate()?;
    let mut log = self.load_catches().await?;
    let entry = input.into_entry();
    debug!(id = %entry.id, species = %entry.species, "catch logged");
    log.push(entry);
    self.write(CATCHES_KEY, &log).await?;
    Ok(log)
  }

  // ── Clearing ──────────────────────────────────────────────────────────────

  pub async fn clear(&self, kind: CollectionKind) -> Result<()> {
    self.store.remove(kind.key()).await.map_err(Error::store)?;
    debug!(key = kind.key(), "collection cleared");
    Ok(())
  }

  // ── Role ──────────────────────────────────────────────────────────────────

  /// The stored role, or `None` if absent or unrecognised.
  pub async fn role(&self) -> Result<Option<Role>> {
    let raw = self.store.get(ROLE_KEY).await.map_err(Error::store)?;
    Ok(raw.and_then(|r| match r.parse() {
      Ok(role) => Some(role),
      Err(e) => {
        warn!(error = %e, "ignoring stored role");
        None
      }
    }))
  }

  pub async fn set_role(&self, role: Role) -> Result<()> {
    self
      .store
      .put(ROLE_KEY, role.as_str().to_owned())
      .await
      .map_err(Error::store)
  }

  pub async fn clear_role(&self) -> Result<()> {
    self.store.remove(ROLE_KEY).await.map_err(Error::store)
  }
}
