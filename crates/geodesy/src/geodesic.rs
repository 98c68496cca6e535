//! WGS84 inverse/direct geodesic wrappers.

use std::sync::OnceLock;

use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

use crate::error::{GeodesyError, GeodesyResult};

fn wgs84() -> &'static Geodesic {
    static WGS84: OnceLock<Geodesic> = OnceLock::new();
    WGS84.get_or_init(Geodesic::wgs84)
}

/// Fixed origin for distance/bearing computations, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferencePoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that the point is a usable geodesic origin.
    pub fn validate(&self) -> GeodesyResult<()> {
        validate_latlon(self.latitude, self.longitude)
    }

    /// Distance and bearing from this point to `(latitude, longitude)`.
    pub fn offset_to(&self, latitude: f64, longitude: f64) -> GeodesyResult<GeodesicOffset> {
        let (distance, bearing) =
            latlon_to_metres(latitude, longitude, self.latitude, self.longitude)?;
        Ok(GeodesicOffset { distance, bearing })
    }

    /// Point reached by applying `offset` from this point.
    pub fn apply(&self, offset: &GeodesicOffset) -> GeodesyResult<(f64, f64)> {
        metres_to_latlon(
            self.latitude,
            self.longitude,
            offset.eastings(),
            offset.northings(),
        )
    }
}

/// Solution of the inverse problem: metres along the geodesic and the
/// initial bearing in degrees clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicOffset {
    pub distance: f64,
    pub bearing: f64,
}

impl GeodesicOffset {
    /// East component of the offset in metres.
    pub fn eastings(&self) -> f64 {
        self.distance * self.bearing.to_radians().sin()
    }

    /// North component of the offset in metres.
    pub fn northings(&self) -> f64 {
        self.distance * self.bearing.to_radians().cos()
    }
}

/// Distance (m) and initial bearing (deg) from the reference point to
/// `(latitude, longitude)` on WGS84.
///
/// The bearing at zero distance is whatever the solver reports and carries
/// no meaning.
pub fn latlon_to_metres(
    latitude: f64,
    longitude: f64,
    latitude_reference: f64,
    longitude_reference: f64,
) -> GeodesyResult<(f64, f64)> {
    validate_latlon(latitude, longitude)?;
    validate_latlon(latitude_reference, longitude_reference)?;

    let (s12, azi1, _azi2, _a12): (f64, f64, f64, f64) =
        wgs84().inverse(latitude_reference, longitude_reference, latitude, longitude);
    Ok((s12, azi1))
}

/// Walk `(eastings, northings)` metres from `(latitude, longitude)` along the
/// WGS84 geodesic with azimuth `atan2(eastings, northings)`.
pub fn metres_to_latlon(
    latitude: f64,
    longitude: f64,
    eastings: f64,
    northings: f64,
) -> GeodesyResult<(f64, f64)> {
    validate_latlon(latitude, longitude)?;
    if !eastings.is_finite() {
        return Err(GeodesyError::non_finite("eastings", eastings));
    }
    if !northings.is_finite() {
        return Err(GeodesyError::non_finite("northings", northings));
    }

    // A zero offset must hand back the origin bit-for-bit.
    if eastings == 0.0 && northings == 0.0 {
        return Ok((latitude, longitude));
    }

    let s12 = eastings.hypot(northings);
    let azi1 = eastings.atan2(northings).to_degrees();
    let (lat2, lon2): (f64, f64) = wgs84().direct(latitude, longitude, azi1, s12);
    Ok((lat2, lon2))
}

fn validate_latlon(latitude: f64, longitude: f64) -> GeodesyResult<()> {
    if !latitude.is_finite() {
        return Err(GeodesyError::non_finite("latitude", latitude));
    }
    if !longitude.is_finite() {
        return Err(GeodesyError::non_finite("longitude", longitude));
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeodesyError::InvalidLatitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeodesyError::InvalidLongitude(longitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_same_point_has_zero_distance() {
        let (distance, _bearing) = latlon_to_metres(44.571, -125.149, 44.571, -125.149).unwrap();
        assert_abs_diff_eq!(distance, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_reports_metres() {
        // One degree of longitude along the equator is a * pi / 180.
        let (distance, bearing) = latlon_to_metres(0.0, 1.0, 0.0, 0.0).unwrap();
        assert_abs_diff_eq!(distance, 111_319.490_793, epsilon = 1e-3);
        assert_abs_diff_eq!(bearing, 90.0, epsilon = 1e-9);

        let (distance, _) = latlon_to_metres(10.0, 20.0, 10.0, 20.0).unwrap();
        assert_abs_diff_eq!(distance, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_offset_returns_origin_exactly() {
        let origin = (44.571, -125.149);
        assert_eq!(metres_to_latlon(origin.0, origin.1, 0.0, 0.0).unwrap(), origin);
        assert_eq!(metres_to_latlon(-0.1, 179.9, 0.0, 0.0).unwrap(), (-0.1, 179.9));
    }

    #[test]
    fn test_bearing_components() {
        let east = GeodesicOffset {
            distance: 10.0,
            bearing: 90.0,
        };
        assert_abs_diff_eq!(east.eastings(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(east.northings(), 0.0, epsilon = 1e-12);

        let south_west = GeodesicOffset {
            distance: 2.0_f64.sqrt(),
            bearing: -135.0,
        };
        assert_abs_diff_eq!(south_west.eastings(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(south_west.northings(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        assert_eq!(
            latlon_to_metres(91.0, 0.0, 0.0, 0.0),
            Err(GeodesyError::InvalidLatitude(91.0))
        );
        assert_eq!(
            latlon_to_metres(0.0, 0.0, 0.0, -180.5),
            Err(GeodesyError::InvalidLongitude(-180.5))
        );
        assert!(matches!(
            metres_to_latlon(0.0, 0.0, f64::NAN, 0.0),
            Err(GeodesyError::NonFinite { name: "eastings", .. })
        ));
        assert!(matches!(
            metres_to_latlon(f64::INFINITY, 0.0, 1.0, 1.0),
            Err(GeodesyError::NonFinite { name: "latitude", .. })
        ));
    }

    #[test]
    fn test_reference_point_validate() {
        assert!(ReferencePoint::new(44.571, -125.149).validate().is_ok());
        assert!(ReferencePoint::new(-90.5, 0.0).validate().is_err());
    }
}
