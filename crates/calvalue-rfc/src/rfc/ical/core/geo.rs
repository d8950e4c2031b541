//! GEO value type (RFC 5545 §3.8.1.6).

use std::fmt;

/// Longest numeral kept for one coordinate.
pub const GEO_COORD_MAX_LEN: usize = 15;

/// One coordinate of a GEO value.
///
/// Kept as the numeral text it was parsed from, always with `.` as the
/// decimal separator, so printing reproduces the input digits exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GeoCoord(String);

impl GeoCoord {
    /// Wraps a numeral, truncating it to [`GEO_COORD_MAX_LEN`] characters.
    #[must_use]
    pub fn from_numeral(numeral: &str) -> Self {
        Self(numeral.chars().take(GEO_COORD_MAX_LEN).collect())
    }

    /// Formats `value` with six decimals.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        Self::from_numeral(&format!("{value:.6}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the longest parseable prefix; `0.0` if none.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        crate::rfc::ical::parse::leading_f64(&self.0).unwrap_or(0.0)
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Geo {
    pub lat: GeoCoord,
    pub lon: GeoCoord,
}

impl Geo {
    #[must_use]
    pub const fn new(lat: GeoCoord, lon: GeoCoord) -> Self {
        Self { lat, lon }
    }

    #[must_use]
    pub fn from_f64(lat: f64, lon: f64) -> Self {
        Self::new(GeoCoord::from_f64(lat), GeoCoord::from_f64(lon))
    }
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_display() {
        let geo = Geo::new(
            GeoCoord::from_numeral("37.386013"),
            GeoCoord::from_numeral("-122.082932"),
        );
        assert_eq!(geo.to_string(), "37.386013;-122.082932");
    }

    #[test]
    fn coord_truncates_long_numerals() {
        let coord = GeoCoord::from_numeral("1.234567890123456789");
        assert_eq!(coord.as_str().len(), GEO_COORD_MAX_LEN);
    }

    #[test]
    fn coord_from_f64_uses_point_separator() {
        let geo = Geo::from_f64(48.5, -2.25);
        assert_eq!(geo.to_string(), "48.500000;-2.250000");
        assert!((geo.lon.as_f64() + 2.25).abs() < f64::EPSILON);
    }
}
