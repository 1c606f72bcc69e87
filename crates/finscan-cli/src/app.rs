//! Command dispatcher: each user action maps to one core operation plus a
//! rendered response.

use anyhow::{Result, bail};
use finscan_core::{
  Catalog, CollectionKind, Collections, Resolution,
  catch::NewCatch,
  role::Role,
  scan::{ScanGate, ScanOutcome},
  score::ScoreCard,
  store::StateStore,
};
use rand_core::{OsRng, RngCore};
use serde::Serialize;

use crate::view;

const NOT_FOUND_HINT: &str = "Fish not found. The requested fish may not \
                              exist in our database.";

/// Serialised form of `show --json`.
#[derive(Serialize)]
struct RecordJson<'a> {
  record:    &'a finscan_core::seafood::SeafoodRecord,
  scores:    ScoreCard,
  purchased: bool,
}

/// Top-level application state for one invocation.
pub struct App<S> {
  pub catalog:     Catalog,
  pub collections: Collections<S>,
  pub gate:        ScanGate,
}

impl<S: StateStore> App<S> {
  pub fn new(catalog: Catalog, store: S, gate: ScanGate) -> Self {
    Self { catalog, collections: Collections::new(store), gate }
  }

  /// Pick a random code from the catalog, as a stand-in for the camera.
  pub fn random_code(&self) -> Option<String> {
    let ids = self.catalog.ids();
    if ids.is_empty() {
      return None;
    }
    let idx = OsRng.next_u32() as usize % ids.len();
    Some(ids[idx].to_owned())
  }

  // ── Consumer ──────────────────────────────────────────────────────────────

  pub async fn scan(&self, code: Option<String>) -> Result<String> {
    let code = match code.or_else(|| self.random_code()) {
      Some(c) => c,
      None => bail!("the catalog is empty; nothing to scan"),
    };

    match self.gate.scan(&code, &self.catalog, &self.collections).await? {
      ScanOutcome::Found(record) => {
        let purchased = self.collections.is_purchased(&record.id).await?;
        Ok(format!(
          "Fish found: {}\n\n{}",
          record.name,
          view::detail::render(record, purchased)
        ))
      }
      ScanOutcome::NotFound => Ok(format!(
        "No fish found: the scanned code {code:?} is not recognized.\n"
      )),
      ScanOutcome::Busy => Ok("A scan is already in progress.\n".to_owned()),
    }
  }

  pub async fn show(&self, id: &str, json: bool) -> Result<String> {
    let Resolution::Found(record) = self.catalog.resolve(id) else {
      return Ok(format!("{NOT_FOUND_HINT}\n"));
    };
    let purchased = self.collections.is_purchased(id).await?;

    if json {
      let doc = RecordJson { record, scores: ScoreCard::for_record(record), purchased };
      return Ok(serde_json::to_string_pretty(&doc)? + "\n");
    }
    Ok(view::detail::render(record, purchased))
  }

  pub fn catalog_listing(&self, json: bool) -> Result<String> {
    let records = self.catalog.records();
    if json {
      return Ok(serde_json::to_string_pretty(&records)? + "\n");
    }
    Ok(view::list::render(&records, "The catalog is empty."))
  }

  pub async fn history(&self) -> Result<String> {
    let ids = self.collections.load_history().await?;
    let records = self.catalog.resolve_all(&ids);
    Ok(view::list::render(
      &records,
      "No recent scans. Scan a fish to see it here.",
    ))
  }

  pub async fn clear_history(&self) -> Result<String> {
    self.collections.clear(CollectionKind::History).await?;
    Ok("Your scan history has been cleared.\n".to_owned())
  }

  pub async fn toggle_purchase(&self, id: &str) -> Result<String> {
    let Some(record) = self.catalog.get(id) else {
      return Ok(format!("{NOT_FOUND_HINT}\n"));
    };
    let purchases = self.collections.toggle_purchase(id).await?;
    let verb = if purchases.contains(id) { "Marked" } else { "Unmarked" };
    Ok(format!("{verb} {} as purchased.\n", record.name))
  }

  pub async fn purchases(&self) -> Result<String> {
    let ids = self.collections.load_purchases().await?;
    let records = self.catalog.resolve_all(&ids);
    Ok(view::list::render(
      &records,
      "You haven't marked any fish as purchased yet.",
    ))
  }

  pub async fn map(&self) -> Result<String> {
    let ids = self.collections.load_purchases().await?;
    let records = self.catalog.resolve_all(&ids);
    Ok(view::list::render_map(&records))
  }

  // ── Role ──────────────────────────────────────────────────────────────────

  pub async fn login(&self, role: Role) -> Result<String> {
    self.collections.set_role(role).await?;
    Ok(format!("You are logged in as a {role}.\n"))
  }

  pub async fn logout(&self) -> Result<String> {
    self.collections.clear_role().await?;
    Ok("You have been logged out.\n".to_owned())
  }

  pub async fn whoami(&self) -> Result<String> {
    Ok(match self.collections.role().await? {
      Some(role) => format!("{role}\n"),
      None => "Not logged in.\n".to_owned(),
    })
  }

  // ── Fisherman ─────────────────────────────────────────────────────────────

  async fn require_fisherman(&self) -> Result<()> {
    match self.collections.role().await? {
      Some(Role::Fisherman) => Ok(()),
      _ => bail!("the catch log requires the fisherman role; run `finscan login fisherman`"),
    }
  }

  pub async fn log_catch(&self, input: NewCatch) -> Result<String> {
    self.require_fisherman().await?;
    let species = input.species.clone();
    let log = self.collections.append_catch(input).await?;
    let entry = log.last().map(|e| e.weight.as_str()).unwrap_or_default();
    Ok(format!("Catch logged successfully! You logged a {entry}kg {species}.\n"))
  }

  pub async fn catches(&self) -> Result<String> {
    self.require_fisherman().await?;
    let log = self.collections.load_catches().await?;
    Ok(view::catches::render(&log))
  }

  pub async fn clear_catches(&self) -> Result<String> {
    self.require_fisherman().await?;
    self.collections.clear(CollectionKind::Catches).await?;
    Ok("Your catch log has been cleared.\n".to_owned())
  }

  pub async fn catch_label(&self, id: &str) -> Result<String> {
    self.require_fisherman().await?;
    let log = self.collections.load_catches().await?;
    match log.iter().find(|e| e.id == id) {
      Some(entry) => Ok(view::catches::render_label(entry)),
      None => Ok(format!("No catch with id {id:?} in your log.\n")),
    }
  }
}
