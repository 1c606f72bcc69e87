//! The simulated scan: a fixed delay, a lookup, and a history write.
//!
//! Only one scan may be in flight per [`ScanGate`]. A scan requested while
//! another is pending is rejected rather than queued, so two scans can never
//! interleave their history writes.

use std::{
  sync::atomic::{AtomicBool, Ordering},
  time::Duration,
};

use tracing::debug;

use crate::{
  Catalog, Collections, Resolution, Result, seafood::SeafoodRecord,
  store::StateStore,
};

/// What a scan produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanOutcome<'c> {
  /// The code matched; it has been pushed onto the history.
  Found(&'c SeafoodRecord),
  /// The code is not in the catalog. History is untouched.
  NotFound,
  /// Another scan was already pending on this gate.
  Busy,
}

/// Releases the pending flag when dropped, including on cancellation.
struct PendingGuard<'g>(&'g AtomicBool);

impl<'g> PendingGuard<'g> {
  fn acquire(flag: &'g AtomicBool) -> Option<Self> {
    flag
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .ok()
      .map(|_| Self(flag))
  }
}

impl Drop for PendingGuard<'_> {
  fn drop(&mut self) { self.0.store(false, Ordering::Release); }
}

#[derive(Debug)]
pub struct ScanGate {
  delay:   Duration,
  pending: AtomicBool,
}

impl Default for ScanGate {
  fn default() -> Self { Self::new(Self::DEFAULT_DELAY) }
}

impl ScanGate {
  pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

  pub fn new(delay: Duration) -> Self {
    Self { delay, pending: AtomicBool::new(false) }
  }

  pub fn delay(&self) -> Duration { self.delay }

  pub fn is_pending(&self) -> bool { self.pending.load(Ordering::Acquire) }

  /// Wait out the scan delay, resolve `code`, and on a hit record it in the
  /// history.
  pub async fn scan<'c, S: StateStore>(
    &self,
    code: &str,
    catalog: &'c Catalog,
    collections: &Collections<S>,
  ) -> Result<ScanOutcome<'c>> {
    let Some(_guard) = PendingGuard::acquire(&self.pending) else {
      debug!(code, "scan rejected, another scan is pending");
      return Ok(ScanOutcome::Busy);
    };

    tokio::time::sleep(self.delay).await;

    match catalog.resolve(code) {
      Resolution::Found(record) => {
        collections.push_history(&record.id).await?;
        debug!(code, name = %record.name, "scan matched");
        Ok(ScanOutcome::Found(record))
      }
      Resolution::NotFound => {
        debug!(code, "scan did not match");
        Ok(ScanOutcome::NotFound)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::MemoryStore;

  fn gate() -> ScanGate { ScanGate::new(Duration::from_millis(20)) }

  #[tokio::test]
  async fn hit_is_pushed_to_history() {
    let g = gate();
    let m = Collections::new(MemoryStore::new());
    let out = g.scan("FISH004", Catalog::builtin(), &m).await.unwrap();

    match out {
      ScanOutcome::Found(r) => assert_eq!(r.name, "Rainbow Trout"),
      other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(m.load_history().await.unwrap(), vec!["FISH004"]);
    assert!(!g.is_pending());
  }

  #[tokio::test]
  async fn miss_leaves_history_alone() {
    let g = gate();
    let m = Collections::new(MemoryStore::new());
    let out = g.scan("FISH999", Catalog::builtin(), &m).await.unwrap();
    assert_eq!(out, ScanOutcome::NotFound);
    assert!(m.load_history().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn second_scan_while_pending_is_rejected() {
    let g = gate();
    let m = Collections::new(MemoryStore::new());
    let catalog = Catalog::builtin();

    let (first, second) = tokio::join!(
      g.scan("FISH001", catalog, &m),
      g.scan("FISH002", catalog, &m),
    );

    assert!(matches!(first.unwrap(), ScanOutcome::Found(_)));
    assert_eq!(second.unwrap(), ScanOutcome::Busy);
    assert_eq!(m.load_history().await.unwrap(), vec!["FISH001"]);

    // The gate is free again once the first scan completes.
    let third = g.scan("FISH002", catalog, &m).await.unwrap();
    assert!(matches!(third, ScanOutcome::Found(_)));
  }

  #[tokio::test]
  async fn cancelled_scan_frees_the_gate() {
    let g = ScanGate::new(Duration::from_secs(60));
    let m = Collections::new(MemoryStore::new());

    let res = tokio::time::timeout(
      Duration::from_millis(10),
      g.scan("FISH001", Catalog::builtin(), &m),
    )
    .await;

    assert!(res.is_err());
    assert!(!g.is_pending());
    assert!(m.load_history().await.unwrap().is_empty());
  }
}
