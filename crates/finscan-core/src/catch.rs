//! Catch-log entries authored by fishermen.
//!
//! Entries are immutable once created. The log only ever grows by appending,
//! or is cleared as a whole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, geo::Coordinates};

/// A persisted catch-log entry.
///
/// `weight` stays string-encoded in storage, exactly as it was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchEntry {
  /// Assigned at creation; time-ordered within a process.
  pub id:          String,
  pub species:     String,
  pub location:    String,
  pub date:        NaiveDate,
  /// Decimal kilograms.
  pub weight:      String,
  #[serde(default)]
  pub notes:       String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub coordinates: Option<Coordinates>,
}

impl CatchEntry {
  /// Weight in kilograms, if the stored string parses.
  pub fn weight_kg(&self) -> Option<f64> { self.weight.trim().parse().ok() }
}

/// Input to [`crate::Collections::append_catch`]. The id is always assigned by
/// the manager; it is not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewCatch {
  pub species:     String,
  pub location:    String,
  pub date:        NaiveDate,
  pub weight:      String,
  pub notes:       String,
  pub coordinates: Option<Coordinates>,
}

impl NewCatch {
  /// Convenience constructor with empty notes and no position fix.
  pub fn new(
    species: impl Into<String>,
    location: impl Into<String>,
    date: NaiveDate,
    weight: impl Into<String>,
  ) -> Self {
    Self {
      species: species.into(),
      location: location.into(),
      date,
      weight: weight.into(),
      notes: String::new(),
      coordinates: None,
    }
  }

  /// Reject entries the log must never contain.
  pub fn validate(&self) -> Result<()> {
    if self.species.trim().is_empty() {
      return Err(Error::InvalidCatch("species is required".into()));
    }
    match self.weight.trim().parse::<f64>() {
      Ok(w) if w.is_finite() && w >= 0.0 => {}
      _ => {
        return Err(Error::InvalidCatch(format!(
          "weight {:?} is not a non-negative decimal",
          self.weight
        )));
      }
    }
    if let Some(c) = self.coordinates
      && !c.is_valid()
    {
      return Err(Error::InvalidCatch(format!(
        "coordinates out of range ({}, {})",
        c.latitude, c.longitude
      )));
    }
    Ok(())
  }

  pub(crate) fn into_entry(self) -> CatchEntry {
    CatchEntry {
      id:          Uuid::now_v7().to_string(),
      species:     self.species,
      location:    self.location,
      date:        self.date,
      weight:      self.weight.trim().to_owned(),
      notes:       self.notes,
      coordinates: self.coordinates,
    }
  }
}
