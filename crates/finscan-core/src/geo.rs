//! Geographic coordinates and bounding boxes.

use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub latitude:  f64,
  pub longitude: f64,
}

impl Coordinates {
  pub fn new(latitude: f64, longitude: f64) -> Self {
    Self { latitude, longitude }
  }

  /// Latitude within [-90, 90] and longitude within [-180, 180].
  pub fn is_valid(&self) -> bool {
    (-90.0..=90.0).contains(&self.latitude)
      && (-180.0..=180.0).contains(&self.longitude)
  }
}

/// The smallest latitude/longitude box containing a set of points.
///
/// Does not handle boxes spanning the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
  pub south: f64,
  pub west:  f64,
  pub north: f64,
  pub east:  f64,
}

impl GeoBounds {
  /// Returns `None` for an empty iterator.
  pub fn enclosing<I>(points: I) -> Option<Self>
  where
    I: IntoIterator<Item = Coordinates>,
  {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let init = Self {
      south: first.latitude,
      west:  first.longitude,
      north: first.latitude,
      east:  first.longitude,
    };
    Some(iter.fold(init, |b, p| Self {
      south: b.south.min(p.latitude),
      west:  b.west.min(p.longitude),
      north: b.north.max(p.latitude),
      east:  b.east.max(p.longitude),
    }))
  }

  pub fn center(&self) -> Coordinates {
    Coordinates::new(
      (self.south + self.north) / 2.0,
      (self.west + self.east) / 2.0,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn coordinate_ranges() {
    assert!(Coordinates::new(90.0, -180.0).is_valid());
    assert!(Coordinates::new(-90.0, 180.0).is_valid());
    assert!(!Coordinates::new(90.5, 0.0).is_valid());
    assert!(!Coordinates::new(0.0, -180.1).is_valid());
    assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
  }

  #[test]
  fn bounds_of_nothing_is_none() {
    assert!(GeoBounds::enclosing(std::iter::empty()).is_none());
  }

  #[test]
  fn bounds_enclose_all_points() {
    let b = GeoBounds::enclosing([
      Coordinates::new(62.5, 6.1),
      Coordinates::new(57.0, -170.0),
      Coordinates::new(38.0, 5.0),
    ])
    .unwrap();

    assert_eq!(b.south, 38.0);
    assert_eq!(b.north, 62.5);
    assert_eq!(b.west, -170.0);
    assert_eq!(b.east, 6.1);

    let c = b.center();
    assert_eq!(c.latitude, 50.25);
    assert!((c.longitude + 81.95).abs() < 1e-9);
  }

  #[test]
  fn single_point_bounds_collapse() {
    let p = Coordinates::new(10.0, 20.0);
    let b = GeoBounds::enclosing([p]).unwrap();
    assert_eq!(b.center(), p);
  }
}
