//! Coordinate Reference System codes.

use std::fmt;

/// An EPSG-registered coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrsCode(pub u32);

impl CrsCode {
    /// WGS84 Geographic (lat/lon in degrees)
    pub const WGS84: CrsCode = CrsCode(4326);
    /// NAD83 Geographic
    pub const NAD83: CrsCode = CrsCode(4269);
    /// Web Mercator (meters)
    pub const WEB_MERCATOR: CrsCode = CrsCode(3857);

    /// Interpret a GeoKey code value. 0 is "undefined" and 32767 is
    /// "user-defined"; neither names a registered CRS.
    pub fn from_geokey(value: u16) -> Option<Self> {
        match value {
            0 | 32767 => None,
            code => Some(CrsCode(u32::from(code))),
        }
    }

    /// Check if this is a geographic (lat/lon) CRS.
    pub fn is_geographic(&self) -> bool {
        matches!(self.0, 4326 | 4269 | 4258 | 4230 | 4283 | 4167)
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}
