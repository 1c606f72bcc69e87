//! Catch-log listing and printable tags.

use finscan_core::catch::CatchEntry;

pub fn render(entries: &[CatchEntry]) -> String {
  if entries.is_empty() {
    return "No catches logged yet.\n".to_owned();
  }

  let mut out = String::new();
  for e in entries {
    out.push_str(&format!("{}  {}\n", e.id, e.species));
    out.push_str(&format!("    {} • {} • {}kg\n", e.location, e.date, e.weight));
    if let Some(c) = e.coordinates {
      out.push_str(&format!("    at {:.4}, {:.4}\n", c.latitude, c.longitude));
    }
    if !e.notes.is_empty() {
      out.push_str(&format!("    {}\n", e.notes));
    }
  }

  let total: f64 = entries.iter().filter_map(CatchEntry::weight_kg).sum();
  out.push_str(&format!("\n{} catches, {total:.2} kg total\n", entries.len()));
  out
}

/// A boxed text tag to attach to the catch, carrying its identifier.
pub fn render_label(entry: &CatchEntry) -> String {
  let lines = [
    format!("ID: {}", entry.id),
    format!("Species: {}", entry.species),
    format!("Weight: {}kg", entry.weight),
    format!("Date: {}", entry.date),
  ];
  let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

  let mut out = String::new();
  out.push_str(&format!("+{}+\n", "-".repeat(width + 2)));
  for l in &lines {
    out.push_str(&format!("| {l:<width$} |\n"));
  }
  out.push_str(&format!("+{}+\n", "-".repeat(width + 2)));
  out
}
