//! Seafood record types, the immutable rows of the catalog.
//!
//! Every categorical attribute is a closed enum. Category values serialise
//! with the human labels used by the seed data (`"Very Low"`,
//! `"Consider Alternatives"`, ...); an unknown label fails deserialisation
//! instead of silently scoring as zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

// ─── Stock ───────────────────────────────────────────────────────────────────

/// Health of the wild or farmed population the product comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
  Abundant,
  Moderate,
  Low,
  Critical,
}

impl StockStatus {
  /// All variants, worst first.
  pub const ALL: [Self; 4] =
    [Self::Critical, Self::Low, Self::Moderate, Self::Abundant];

  pub fn label(self) -> &'static str {
    match self {
      Self::Abundant => "Abundant",
      Self::Moderate => "Moderate",
      Self::Low => "Low",
      Self::Critical => "Critical",
    }
  }
}

// ─── Recommendation ──────────────────────────────────────────────────────────

/// Consumer guidance attached to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
  Recommended,
  #[serde(rename = "Consider Alternatives")]
  ConsiderAlternatives,
  Avoid,
}

impl Recommendation {
  /// All variants, worst first.
  pub const ALL: [Self; 3] =
    [Self::Avoid, Self::ConsiderAlternatives, Self::Recommended];

  pub fn label(self) -> &'static str {
    match self {
      Self::Recommended => "Recommended",
      Self::ConsiderAlternatives => "Consider Alternatives",
      Self::Avoid => "Avoid",
    }
  }
}

// ─── Nutrition ───────────────────────────────────────────────────────────────

/// Mercury content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MercuryLevel {
  #[serde(rename = "Very Low")]
  VeryLow,
  Low,
  Moderate,
  High,
}

impl MercuryLevel {
  /// All variants, worst first.
  pub const ALL: [Self; 4] =
    [Self::High, Self::Moderate, Self::Low, Self::VeryLow];

  pub fn label(self) -> &'static str {
    match self {
      Self::VeryLow => "Very Low",
      Self::Low => "Low",
      Self::Moderate => "Moderate",
      Self::High => "High",
    }
  }
}

/// Nutritional values per 100 g of product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
  /// Grams of protein per 100 g.
  pub protein:  f64,
  /// Grams of omega-3 fatty acids per 100 g.
  pub omega3:   f64,
  /// Kilocalories per 100 g.
  pub calories: f64,
  pub mercury:  MercuryLevel,
}

// ─── Emissions ───────────────────────────────────────────────────────────────

/// Carbon footprint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Co2Rating {
  Low,
  Medium,
  High,
  #[serde(rename = "Very High")]
  VeryHigh,
}

impl Co2Rating {
  /// All variants, worst first.
  pub const ALL: [Self; 4] =
    [Self::VeryHigh, Self::High, Self::Medium, Self::Low];

  pub fn label(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
      Self::VeryHigh => "Very High",
    }
  }
}

/// Greenhouse-gas footprint of the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Emissions {
  /// kg CO2e per kg of product.
  pub value:  f64,
  pub rating: Co2Rating,
}

// ─── Display ─────────────────────────────────────────────────────────────────

macro_rules! display_via_label {
  ($($ty:ty),* $(,)?) => {
    $(
      impl fmt::Display for $ty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
          f.write_str(self.label())
        }
      }
    )*
  };
}

display_via_label!(StockStatus, Recommendation, MercuryLevel, Co2Rating);

// ─── Record ──────────────────────────────────────────────────────────────────

/// One catalog entry. Created once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeafoodRecord {
  /// Identifier printed on the tag; unique within a catalog.
  pub id:              String,
  pub name:            String,
  pub scientific_name: String,
  pub stock_status:    StockStatus,
  pub recommendation:  Recommendation,
  pub nutrition:       Nutrition,
  pub origin:          String,
  pub fishery:         String,
  pub fishing_method:  String,
  pub co2_emissions:   Co2Emissions,
  /// Certification labels in display order; no duplicates.
  #[serde(default)]
  pub certifications:  Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub coordinates:     Option<Coordinates>,
  #[serde(default)]
  pub description:     String,
}
