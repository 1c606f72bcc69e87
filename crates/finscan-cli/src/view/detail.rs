//! Record detail view: identity, guidance, nutrition, emissions, scores.

use finscan_core::{score::ScoreCard, seafood::SeafoodRecord};

use super::{fmt_score, score_with_label};

const LABEL_WIDTH: usize = 16;

fn row(out: &mut String, label: &str, value: impl std::fmt::Display) {
  out.push_str(&format!("  {label:<LABEL_WIDTH$}{value}\n"));
}

/// Render a full detail page for `record`.
pub fn render(record: &SeafoodRecord, purchased: bool) -> String {
  let card = ScoreCard::for_record(record);
  let mut out = String::new();

  out.push_str(&format!("{} ({})\n", record.name, record.scientific_name));
  out.push_str(&format!("  {}\n", record.id));
  if !record.description.is_empty() {
    out.push_str(&format!("\n  {}\n", record.description));
  }

  out.push('\n');
  row(&mut out, "Recommendation", record.recommendation);
  row(&mut out, "Stock status", record.stock_status);
  row(&mut out, "Origin", &record.origin);
  row(&mut out, "Fishery", &record.fishery);
  row(&mut out, "Fishing method", &record.fishing_method);
  if let Some(c) = record.coordinates {
    row(&mut out, "Position", format!("{:.2}, {:.2}", c.latitude, c.longitude));
  }
  let certs = if record.certifications.is_empty() {
    "none".to_owned()
  } else {
    record.certifications.join(", ")
  };
  row(&mut out, "Certifications", certs);

  let n = &record.nutrition;
  out.push_str("\nNutrition (per 100 g)\n");
  row(&mut out, "Protein", format!("{} g", n.protein));
  row(&mut out, "Omega-3", format!("{} g", n.omega3));
  row(&mut out, "Calories", n.calories);
  row(&mut out, "Mercury", n.mercury);

  out.push_str("\nCO2 emissions\n");
  row(
    &mut out,
    "Footprint",
    format!(
      "{} kg CO2 per kg ({})",
      record.co2_emissions.value, record.co2_emissions.rating
    ),
  );

  out.push('\n');
  out.push_str(&render_scores(&card));

  if purchased {
    out.push_str("\n  * marked as purchased\n");
  }
  out
}

/// Both scores with their per-factor contributions.
pub fn render_scores(card: &ScoreCard) -> String {
  let mut out = String::new();
  let s = &card.sustainability_parts;
  let h = &card.health_parts;

  out.push_str(&format!(
    "Sustainability  {}\n",
    score_with_label(f64::from(card.sustainability), card.sustainability_label)
  ));
  row(&mut out, "stock", s.stock);
  row(&mut out, "recommendation", s.recommendation);
  row(&mut out, "co2", s.co2);
  row(&mut out, "certifications", s.certifications);

  out.push_str(&format!(
    "Health          {}\n",
    score_with_label(card.health, card.health_label)
  ));
  row(&mut out, "protein", fmt_score(h.protein));
  row(&mut out, "omega-3", fmt_score(h.omega3));
  row(&mut out, "mercury", fmt_score(h.mercury));
  out
}

#[cfg(test)]
mod tests {
  use finscan_core::Catalog;

  use super::*;

  #[test]
  fn detail_includes_scores_and_guidance() {
    let r = Catalog::builtin().get("FISH001").unwrap();
    let text = render(r, false);
    assert!(text.starts_with("Atlantic Salmon (Salmo salar)"));
    assert!(text.contains("Consider Alternatives"));
    assert!(text.contains("Sustainability  58 (Fair)"));
    assert!(text.contains("Health          93 (Excellent)"));
    assert!(!text.contains("purchased"));
  }

  #[test]
  fn purchased_marker_is_shown() {
    let r = Catalog::builtin().get("FISH002").unwrap();
    assert!(render(r, true).contains("marked as purchased"));
  }

  #[test]
  fn missing_certifications_read_none() {
    let r = Catalog::builtin().get("FISH003").unwrap();
    assert!(render(r, false).contains("none"));
  }
}
