//! The catalog (an immutable identifier → record table) and the resolver.
//!
//! A catalog is validated as a whole when it is built. Any schema violation
//! rejects the entire load; there is no partially-valid catalog.

use std::{
  collections::{HashMap, HashSet},
  sync::LazyLock,
};

use crate::{Error, Result, seafood::SeafoodRecord, seed};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
  records: seed::records()
    .into_iter()
    .map(|r| (r.id.clone(), r))
    .collect(),
});

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Outcome of [`Catalog::resolve`]. An unknown identifier is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'c> {
  Found(&'c SeafoodRecord),
  NotFound,
}

impl<'c> Resolution<'c> {
  pub fn record(self) -> Option<&'c SeafoodRecord> {
    match self {
      Self::Found(r) => Some(r),
      Self::NotFound => None,
    }
  }

  pub fn is_found(self) -> bool { matches!(self, Self::Found(_)) }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Catalog {
  records: HashMap<String, SeafoodRecord>,
}

impl Catalog {
  /// The compiled-in seed catalog.
  pub fn builtin() -> &'static Catalog { &BUILTIN }

  /// Build a catalog from records, validating every one of them.
  pub fn from_records(records: Vec<SeafoodRecord>) -> Result<Self> {
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
      validate_record(&record)?;
      if map.contains_key(&record.id) {
        return Err(Error::InvalidCatalog(format!(
          "duplicate id {:?}",
          record.id
        )));
      }
      map.insert(record.id.clone(), record);
    }
    Ok(Self { records: map })
  }

  /// Parse and validate a JSON array of records.
  ///
  /// Unknown category labels and missing fields are reported as
  /// [`Error::InvalidCatalog`].
  pub fn from_json(json: &str) -> Result<Self> {
    let records: Vec<SeafoodRecord> = serde_json::from_str(json)
      .map_err(|e| Error::InvalidCatalog(e.to_string()))?;
    Self::from_records(records)
  }

  /// Exact-match lookup. No case folding, no trimming.
  pub fn resolve(&self, id: &str) -> Resolution<'_> {
    match self.records.get(id) {
      Some(r) => Resolution::Found(r),
      None => Resolution::NotFound,
    }
  }

  pub fn get(&self, id: &str) -> Option<&SeafoodRecord> { self.records.get(id) }

  /// Map stored identifiers to records, preserving order and skipping any the
  /// catalog does not know.
  pub fn resolve_all<'a, I>(&'a self, ids: I) -> Vec<&'a SeafoodRecord>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    ids
      .into_iter()
      .filter_map(|id| self.records.get(id.as_ref()))
      .collect()
  }

  /// All records, ordered by identifier.
  pub fn records(&self) -> Vec<&SeafoodRecord> {
    let mut all: Vec<_> = self.records.values().collect();
    all.sort_by(|a, b| a.id.cmp(&b.id));
    all
  }

  /// All identifiers, sorted.
  pub fn ids(&self) -> Vec<&str> {
    let mut ids: Vec<_> = self.records.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

// ─── Validation ──────────────────────────────────────────────────────────────

fn validate_record(r: &SeafoodRecord) -> Result<()> {
  let fail = |what: String| Err(Error::InvalidCatalog(format!("{:?}: {what}", r.id)));

  if r.id.is_empty() {
    return Err(Error::InvalidCatalog("record with empty id".into()));
  }

  let n = &r.nutrition;
  for (field, value) in [
    ("protein", n.protein),
    ("omega3", n.omega3),
    ("calories", n.calories),
    ("co2 value", r.co2_emissions.value),
  ] {
    if !value.is_finite() || value < 0.0 {
      return fail(format!("{field} must be a non-negative number, got {value}"));
    }
  }

  if let Some(c) = r.coordinates
    && !c.is_valid()
  {
    return fail(format!(
      "coordinates out of range ({}, {})",
      c.latitude, c.longitude
    ));
  }

  let mut seen = HashSet::new();
  for cert in &r.certifications {
    if !seen.insert(cert.as_str()) {
      return fail(format!("duplicate certification {cert:?}"));
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geo::Coordinates;

  fn sample_json() -> String {
    serde_json::to_string(&Catalog::builtin().records()).unwrap()
  }

  #[test]
  fn builtin_has_the_seed_records() {
    let c = Catalog::builtin();
    assert_eq!(c.len(), 5);
    assert_eq!(
      c.ids(),
      vec!["FISH001", "FISH002", "FISH003", "FISH004", "FISH005"]
    );
  }

  #[test]
  fn builtin_passes_validation() {
    let owned = Catalog::builtin().records().into_iter().cloned().collect();
    Catalog::from_records(owned).expect("seed data is valid");
  }

  #[test]
  fn resolve_known_id() {
    let r = Catalog::builtin().resolve("FISH002");
    assert!(r.is_found());
    assert_eq!(r.record().unwrap().name, "Alaskan Pollock");
  }

  #[test]
  fn resolve_unknown_id_is_not_found() {
    assert_eq!(Catalog::builtin().resolve("FISH999"), Resolution::NotFound);
  }

  #[test]
  fn resolve_is_exact_match() {
    let c = Catalog::builtin();
    assert!(!c.resolve("fish001").is_found());
    assert!(!c.resolve(" FISH001").is_found());
    assert!(!c.resolve("").is_found());
  }

  #[test]
  fn resolve_all_skips_unknown_and_keeps_order() {
    let got = Catalog::builtin().resolve_all(["FISH003", "GONE", "FISH001"]);
    let ids: Vec<_> = got.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["FISH003", "FISH001"]);
  }

  #[test]
  fn json_roundtrip_preserves_labels() {
    let json = sample_json();
    assert!(json.contains("\"Consider Alternatives\""));
    assert!(json.contains("\"Very Low\""));
    assert!(json.contains("\"Very High\""));
    assert!(json.contains("\"scientificName\""));

    let c = Catalog::from_json(&json).unwrap();
    assert_eq!(c.len(), 5);
    assert_eq!(c.get("FISH003"), Catalog::builtin().get("FISH003"));
  }

  #[test]
  fn unknown_category_label_rejects_load() {
    let json = sample_json().replacen("\"Very Low\"", "\"Trace\"", 1);
    let err = Catalog::from_json(&json).unwrap_err();
    assert!(matches!(err, Error::InvalidCatalog(_)));
  }

  #[test]
  fn duplicate_id_rejects_load() {
    let mut records: Vec<SeafoodRecord> =
      Catalog::builtin().records().into_iter().cloned().collect();
    records[1].id = records[0].id.clone();
    let err = Catalog::from_records(records).unwrap_err();
    assert!(err.to_string().contains("duplicate id"));
  }

  #[test]
  fn out_of_range_coordinates_reject_load() {
    let mut records: Vec<SeafoodRecord> =
      Catalog::builtin().records().into_iter().cloned().collect();
    records[0].coordinates = Some(Coordinates::new(91.0, 0.0));
    assert!(Catalog::from_records(records).is_err());
  }

  #[test]
  fn negative_nutrition_rejects_load() {
    let mut records: Vec<SeafoodRecord> =
      Catalog::builtin().records().into_iter().cloned().collect();
    records[2].nutrition.omega3 = -0.1;
    assert!(Catalog::from_records(records).is_err());
  }

  #[test]
  fn duplicate_certification_rejects_load() {
    let mut records: Vec<SeafoodRecord> =
      Catalog::builtin().records().into_iter().cloned().collect();
    records[1].certifications = vec!["MSC Certified".into(), "MSC Certified".into()];
    assert!(Catalog::from_records(records).is_err());
  }
}
