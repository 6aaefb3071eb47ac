use serde::{Deserialize, Serialize};

/// A geographic point in the `(latitude, longitude)` order used by the routing API
/// and by encoded polylines.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLng {
            latitude,
            longitude,
        }
    }
}

// GeoJSON positions are x = longitude, y = latitude.
impl From<&LatLng> for geo_types::Coord<f64> {
    fn from(value: &LatLng) -> Self {
        geo_types::Coord {
            x: value.longitude,
            y: value.latitude,
        }
    }
}
