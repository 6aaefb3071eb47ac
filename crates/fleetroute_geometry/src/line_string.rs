use geo_types::{Coord, LineString};
use geojson::Geometry;

use crate::{
    lat_lng::LatLng,
    polyline::{self, PolylineError},
};

pub fn route_line_string(path: &[LatLng]) -> LineString<f64> {
    LineString::new(path.iter().map(Coord::from).collect())
}

/// GeoJSON `LineString` for a decoded path, with positions in `[lng, lat]` order.
pub fn route_geometry(path: &[LatLng]) -> Geometry {
    Geometry::new(geojson::Value::from(&route_line_string(path)))
}

pub fn decode_geometry(encoded: &str) -> Result<Geometry, PolylineError> {
    let path = polyline::decode(encoded)?;
    Ok(route_geometry(&path))
}
