//! Planar and geographic coordinate types.
//!
//! [`Point`] is the planar `(x, y)` pair every spatial index works in.  Any
//! record that can report such a pair implements [`HasPoint`], which is how
//! payload-carrying records (e.g. a street vertex with its `NodeId`) are
//! stored in an index and handed back unchanged by nearest-point queries.
//!
//! [`GeoPoint`] is a WGS-84 `(lon, lat)` pair.  Its planar projection is the
//! raw degree pair (`x = lon`, `y = lat`), which is what snapping compares.

use std::fmt;

// ── Point ─────────────────────────────────────────────────────────────────────

/// An immutable 2-D coordinate.  Equality is componentwise.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Preferred for comparisons.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point x: {}, y: {}", self.x, self.y)
    }
}

// ── HasPoint ──────────────────────────────────────────────────────────────────

/// A record that exposes a planar coordinate.
///
/// Spatial indexes are generic over `HasPoint` records but always order and
/// measure on the coordinate pair alone.
pub trait HasPoint {
    fn point(&self) -> Point;
}

impl HasPoint for Point {
    #[inline]
    fn point(&self) -> Point {
        *self
    }
}

impl<T: HasPoint + ?Sized> HasPoint for &T {
    #[inline]
    fn point(&self) -> Point {
        (**self).point()
    }
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Obeys the triangle inequality, so it is a consistent routing heuristic
    /// whenever edge weights are themselves great-circle lengths.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl HasPoint for GeoPoint {
    #[inline]
    fn point(&self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
