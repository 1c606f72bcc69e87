//! Sustainability and health scoring.
//!
//! Both scores are additive sums of independently bounded terms, so every
//! point is reproducible from the tables below. Categorical tables are
//! exhaustive matches; adding a category variant will not compile until it is
//! given a point value here.

use serde::Serialize;

use crate::seafood::{
  Co2Rating, MercuryLevel, Nutrition, Recommendation, SeafoodRecord, StockStatus,
};

// ─── Point tables ────────────────────────────────────────────────────────────

pub fn stock_points(s: StockStatus) -> u8 {
  match s {
    StockStatus::Abundant => 30,
    StockStatus::Moderate => 20,
    StockStatus::Low => 10,
    StockStatus::Critical => 0,
  }
}

pub fn recommendation_points(r: Recommendation) -> u8 {
  match r {
    Recommendation::Recommended => 30,
    Recommendation::ConsiderAlternatives => 15,
    Recommendation::Avoid => 0,
  }
}

pub fn co2_points(r: Co2Rating) -> u8 {
  match r {
    Co2Rating::Low => 20,
    Co2Rating::Medium => 13,
    Co2Rating::High => 7,
    Co2Rating::VeryHigh => 0,
  }
}

/// Ten points per certification, capped at twenty.
pub fn certification_points(count: usize) -> u8 {
  count.saturating_mul(10).min(20) as u8
}

pub fn mercury_points(m: MercuryLevel) -> f64 {
  match m {
    MercuryLevel::VeryLow => 30.0,
    MercuryLevel::Low => 23.0,
    MercuryLevel::Moderate => 15.0,
    MercuryLevel::High => 0.0,
  }
}

/// 1.5 points per gram, capped at 30.
pub fn protein_points(grams: f64) -> f64 { (grams * 1.5).min(30.0) }

/// 20 points per gram, capped at 40.
pub fn omega3_points(grams: f64) -> f64 { (grams * 20.0).min(40.0) }

// ─── Breakdowns ──────────────────────────────────────────────────────────────

/// Per-factor contributions to the sustainability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SustainabilityBreakdown {
  pub stock:          u8,
  pub recommendation: u8,
  pub co2:            u8,
  pub certifications: u8,
}

impl SustainabilityBreakdown {
  pub fn of(record: &SeafoodRecord) -> Self {
    Self {
      stock:          stock_points(record.stock_status),
      recommendation: recommendation_points(record.recommendation),
      co2:            co2_points(record.co2_emissions.rating),
      certifications: certification_points(record.certifications.len()),
    }
  }

  /// At most 100; each term is individually bounded.
  pub fn total(&self) -> u8 {
    self.stock + self.recommendation + self.co2 + self.certifications
  }
}

/// Per-factor contributions to the health score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthBreakdown {
  pub protein: f64,
  pub omega3:  f64,
  pub mercury: f64,
}

impl HealthBreakdown {
  pub fn of(nutrition: &Nutrition) -> Self {
    Self {
      protein: protein_points(nutrition.protein),
      omega3:  omega3_points(nutrition.omega3),
      mercury: mercury_points(nutrition.mercury),
    }
  }

  pub fn total(&self) -> f64 { self.protein + self.omega3 + self.mercury }
}

pub fn sustainability_score(record: &SeafoodRecord) -> u8 {
  SustainabilityBreakdown::of(record).total()
}

pub fn health_score(record: &SeafoodRecord) -> f64 {
  HealthBreakdown::of(&record.nutrition).total()
}

// ─── Labels ──────────────────────────────────────────────────────────────────

/// Qualitative band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ScoreLabel {
  Poor,
  Fair,
  Good,
  VeryGood,
  Excellent,
}

impl ScoreLabel {
  pub fn from_score(score: f64) -> Self {
    if score >= 90.0 {
      Self::Excellent
    } else if score >= 75.0 {
      Self::VeryGood
    } else if score >= 60.0 {
      Self::Good
    } else if score >= 40.0 {
      Self::Fair
    } else {
      Self::Poor
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Poor => "Poor",
      Self::Fair => "Fair",
      Self::Good => "Good",
      Self::VeryGood => "Very Good",
      Self::Excellent => "Excellent",
    }
  }
}

impl std::fmt::Display for ScoreLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Score card ──────────────────────────────────────────────────────────────

/// Both scores for a record, with their breakdowns and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCard {
  pub sustainability:       u8,
  pub sustainability_label: ScoreLabel,
  pub sustainability_parts: SustainabilityBreakdown,
  pub health:               f64,
  pub health_label:         ScoreLabel,
  pub health_parts:         HealthBreakdown,
}

impl ScoreCard {
  pub fn for_record(record: &SeafoodRecord) -> Self {
    let sustainability_parts = SustainabilityBreakdown::of(record);
    let health_parts = HealthBreakdown::of(&record.nutrition);
    let sustainability = sustainability_parts.total();
    let health = health_parts.total();
    Self {
      sustainability,
      sustainability_label: ScoreLabel::from_score(f64::from(sustainability)),
      sustainability_parts,
      health,
      health_label: ScoreLabel::from_score(health),
      health_parts,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    Catalog,
    seafood::{Co2Emissions, Nutrition},
  };

  const EPS: f64 = 1e-9;

  fn base() -> SeafoodRecord {
    Catalog::builtin().get("FISH001").unwrap().clone()
  }

  #[test]
  fn perfect_sustainability_is_100() {
    let mut r = base();
    r.stock_status = StockStatus::Abundant;
    r.recommendation = Recommendation::Recommended;
    r.co2_emissions = Co2Emissions { value: 1.0, rating: Co2Rating::Low };
    r.certifications = vec!["A".into(), "B".into()];

    let parts = SustainabilityBreakdown::of(&r);
    assert_eq!(
      parts,
      SustainabilityBreakdown {
        stock:          30,
        recommendation: 30,
        co2:            20,
        certifications: 20,
      }
    );
    assert_eq!(sustainability_score(&r), 100);
  }

  #[test]
  fn health_scenario_saturates_omega3() {
    let mut r = base();
    r.nutrition = Nutrition {
      protein:  20.0,
      omega3:   2.2,
      calories: 208.0,
      mercury:  MercuryLevel::Low,
    };
    let parts = HealthBreakdown::of(&r.nutrition);
    assert!((parts.protein - 30.0).abs() < EPS);
    assert!((parts.omega3 - 40.0).abs() < EPS);
    assert!((parts.mercury - 23.0).abs() < EPS);
    assert!((health_score(&r) - 93.0).abs() < EPS);
  }

  #[test]
  fn certifications_cap_at_twenty() {
    assert_eq!(certification_points(0), 0);
    assert_eq!(certification_points(1), 10);
    assert_eq!(certification_points(2), 20);
    assert_eq!(certification_points(7), 20);
    assert_eq!(certification_points(usize::MAX), 20);
  }

  #[test]
  fn nutrient_terms_are_clamped() {
    assert!((protein_points(0.0)).abs() < EPS);
    assert!((protein_points(10.0) - 15.0).abs() < EPS);
    assert!((protein_points(500.0) - 30.0).abs() < EPS);
    assert!((omega3_points(1.0) - 20.0).abs() < EPS);
    assert!((omega3_points(50.0) - 40.0).abs() < EPS);
  }

  #[test]
  fn seed_catalog_scores() {
    let c = Catalog::builtin();
    let expected = [
      ("FISH001", 58, 93.0),
      ("FISH002", 100, 63.4),
      ("FISH003", 0, 54.0),
      ("FISH004", 100, 80.0),
      ("FISH005", 67, 56.0),
    ];
    for (id, sustainability, health) in expected {
      let r = c.get(id).unwrap();
      assert_eq!(sustainability_score(r), sustainability, "{id}");
      assert!((health_score(r) - health).abs() < 1e-6, "{id}");
    }
  }

  #[test]
  fn all_catalog_scores_in_range() {
    for r in Catalog::builtin().records() {
      let card = ScoreCard::for_record(r);
      assert!(card.sustainability <= 100);
      assert!((0.0..=100.0).contains(&card.health));
    }
  }

  #[test]
  fn best_possible_health_is_100() {
    let n = Nutrition {
      protein:  100.0,
      omega3:   100.0,
      calories: 0.0,
      mercury:  MercuryLevel::VeryLow,
    };
    assert!((HealthBreakdown::of(&n).total() - 100.0).abs() < EPS);
  }

  #[test]
  fn sustainability_is_monotonic_in_each_factor() {
    let r = base();

    let mut prev = 0;
    for s in StockStatus::ALL {
      let score = sustainability_score(&SeafoodRecord { stock_status: s, ..r.clone() });
      assert!(score >= prev, "stock {s}");
      prev = score;
    }

    let mut prev = 0;
    for rec in Recommendation::ALL {
      let score =
        sustainability_score(&SeafoodRecord { recommendation: rec, ..r.clone() });
      assert!(score >= prev, "recommendation {rec}");
      prev = score;
    }

    let mut prev = 0;
    for rating in Co2Rating::ALL {
      let mut next = r.clone();
      next.co2_emissions.rating = rating;
      let score = sustainability_score(&next);
      assert!(score >= prev, "co2 {rating}");
      prev = score;
    }

    let mut prev = 0;
    for n in 0..5 {
      let mut next = r.clone();
      next.certifications = (0..n).map(|i| format!("cert-{i}")).collect();
      let score = sustainability_score(&next);
      assert!(score >= prev, "{n} certifications");
      prev = score;
    }
  }

  #[test]
  fn health_is_monotonic_in_mercury() {
    let mut prev = -1.0;
    for m in MercuryLevel::ALL {
      let p = mercury_points(m);
      assert!(p > prev, "mercury {m}");
      prev = p;
    }
  }

  #[test]
  fn label_thresholds() {
    assert_eq!(ScoreLabel::from_score(100.0), ScoreLabel::Excellent);
    assert_eq!(ScoreLabel::from_score(90.0), ScoreLabel::Excellent);
    assert_eq!(ScoreLabel::from_score(89.9), ScoreLabel::VeryGood);
    assert_eq!(ScoreLabel::from_score(75.0), ScoreLabel::VeryGood);
    assert_eq!(ScoreLabel::from_score(60.0), ScoreLabel::Good);
    assert_eq!(ScoreLabel::from_score(59.99), ScoreLabel::Fair);
    assert_eq!(ScoreLabel::from_score(40.0), ScoreLabel::Fair);
    assert_eq!(ScoreLabel::from_score(39.0), ScoreLabel::Poor);
    assert_eq!(ScoreLabel::from_score(0.0), ScoreLabel::Poor);
  }

  #[test]
  fn score_card_labels_follow_scores() {
    let card = ScoreCard::for_record(Catalog::builtin().get("FISH001").unwrap());
    assert_eq!(card.sustainability, 58);
    assert_eq!(card.sustainability_label, ScoreLabel::Fair);
    assert_eq!(card.health_label, ScoreLabel::Excellent);
  }
}
