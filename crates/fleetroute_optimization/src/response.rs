use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResponse {
    #[serde(default)]
    pub routes: Vec<ShipmentRoute>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRoute {
    #[serde(default)]
    pub route_label: String,

    #[serde(default)]
    pub visits: Vec<Visit>,

    #[serde(default)]
    pub route_distance_meters: f64,

    /// Kept exactly as the service formats it, e.g. `"3605s"`.
    #[serde(default)]
    pub route_duration: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_polyline: Option<RoutePolyline>,
}

impl ShipmentRoute {
    /// The encoded polyline, if the service sent a non-empty one.
    pub fn encoded_polyline(&self) -> Option<&str> {
        self.route_polyline
            .as_ref()
            .map(|polyline| polyline.encoded_polyline.as_str())
            .filter(|encoded| !encoded.is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(default)]
    pub shipment_label: String,

    #[serde(default)]
    pub visit_request_duration: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePolyline {
    #[serde(default)]
    pub encoded_polyline: String,
}
