use geo::{Destination, Geodesic};
use geo_types::Point;

use crate::error::{GenerationError, Result};
use crate::trajectory::TrackPoint;

/// Forward projection: the point reached by traveling `distance_km` from
/// `from` along the given initial bearing (degrees clockwise from north,
/// any real value accepted).
pub trait DestinationProjector {
    fn destination(&self, from: TrackPoint, distance_km: f64, bearing_deg: f64)
        -> Result<TrackPoint>;
}

/// Geodesic forward projection on the WGS84 ellipsoid (Karney's algorithm,
/// accurate to roundoff).
pub struct GeodesicProjector;

impl DestinationProjector for GeodesicProjector {
    fn destination(
        &self,
        from: TrackPoint,
        distance_km: f64,
        bearing_deg: f64,
    ) -> Result<TrackPoint> {
        if !from.latitude.is_finite()
            || !from.longitude.is_finite()
            || !distance_km.is_finite()
            || !bearing_deg.is_finite()
        {
            return Err(GenerationError::ProjectionFailure(format!(
                "non-finite projection input: from=({}, {}), distance_km={}, bearing_deg={}",
                from.latitude, from.longitude, distance_km, bearing_deg
            )));
        }
        if distance_km < 0.0 {
            return Err(GenerationError::ProjectionFailure(format!(
                "negative projection distance: {} km",
                distance_km
            )));
        }
        // geo points are (x, y) = (lng, lat); distances are in meters
        let start = Point::new(from.longitude, from.latitude);
        let end = Geodesic.destination(start, bearing_deg, distance_km * 1000.0);
        let reached = TrackPoint {
            latitude: end.y(),
            longitude: end.x(),
        };
        if !reached.latitude.is_finite() || !reached.longitude.is_finite() {
            return Err(GenerationError::ProjectionFailure(format!(
                "projection produced a non-finite point from ({}, {})",
                from.latitude, from.longitude
            )));
        }
        Ok(reached)
    }
}
