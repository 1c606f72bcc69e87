//! Plain-text rendering for terminal output.

pub mod catches;
pub mod detail;
pub mod list;

use finscan_core::score::ScoreLabel;

/// Format a health score the way the detail view shows it: whole numbers
/// without a decimal, anything else to one place.
pub fn fmt_score(score: f64) -> String {
  if score.fract() == 0.0 {
    format!("{score:.0}")
  } else {
    format!("{score:.1}")
  }
}

/// `58 (Fair)`
pub fn score_with_label(score: f64, label: ScoreLabel) -> String {
  format!("{} ({label})", fmt_score(score))
}
