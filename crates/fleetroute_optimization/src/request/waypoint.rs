use fleetroute_geometry::lat_lng::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat_lng: LatLng,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub location: Location,
}

impl Waypoint {
    pub fn lat_lng(&self) -> LatLng {
        self.location.lat_lng
    }
}

impl From<LatLng> for Waypoint {
    fn from(lat_lng: LatLng) -> Self {
        Waypoint {
            location: Location { lat_lng },
        }
    }
}
