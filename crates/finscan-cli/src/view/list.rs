//! One-line-per-record listings (catalog, history, purchases, map).

use finscan_core::{
  geo::{Coordinates, GeoBounds},
  score::ScoreCard,
  seafood::SeafoodRecord,
};

use super::fmt_score;

/// `FISH002  Alaskan Pollock        Recommended            S 100  H 63.4`
pub fn record_line(record: &SeafoodRecord) -> String {
  let card = ScoreCard::for_record(record);
  format!(
    "{:<9}{:<24}{:<23}S {:>3}  H {}",
    record.id,
    record.name,
    record.recommendation.label(),
    card.sustainability,
    fmt_score(card.health),
  )
}

/// Render `records`, or `empty` when there are none.
pub fn render(records: &[&SeafoodRecord], empty: &str) -> String {
  if records.is_empty() {
    return format!("{empty}\n");
  }
  let mut out = String::new();
  for r in records {
    out.push_str(&record_line(r));
    out.push('\n');
  }
  out
}

/// Purchased records that carry a position, with the box enclosing them.
pub fn render_map(records: &[&SeafoodRecord]) -> String {
  let located: Vec<(&SeafoodRecord, Coordinates)> = records
    .iter()
    .filter_map(|r| r.coordinates.map(|c| (*r, c)))
    .collect();

  let Some(bounds) = GeoBounds::enclosing(located.iter().map(|(_, c)| *c)) else {
    return "No purchased fish with a known origin. Mark a fish as purchased \
            first.\n"
      .to_owned();
  };

  let mut out = String::new();
  for (r, c) in &located {
    out.push_str(&format!(
      "{:<9}{:<24}{:>8.2} {:>9.2}  {}\n",
      r.id, r.name, c.latitude, c.longitude, r.origin
    ));
  }
  let center = bounds.center();
  out.push_str(&format!(
    "\nbounds  S {:.2}  W {:.2}  N {:.2}  E {:.2}  (center {:.2}, {:.2})\n",
    bounds.south, bounds.west, bounds.north, bounds.east, center.latitude,
    center.longitude,
  ));
  out
}
