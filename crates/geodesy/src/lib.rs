//! Geodesic conversions between lat/lon and metric offsets.
//!
//! Both directions solve the geodesic problem on the WGS84 ellipsoid:
//! - the inverse problem gives distance and initial bearing between two points
//! - the direct problem walks a distance along a bearing from an origin
//!
//! Offsets are expressed as eastings/northings in metres, with the bearing
//! measured clockwise from north.

pub mod error;
pub mod geodesic;

pub use error::{GeodesyError, GeodesyResult};
pub use geodesic::{latlon_to_metres, metres_to_latlon, GeodesicOffset, ReferencePoint};
