use std::collections::BTreeMap;

use fleetroute_geometry::lat_lng::LatLng;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::{api_duration::ApiDuration, time_window::TimeWindow, waypoint::Waypoint};

pub const ITEM_COUNT_DEMAND: &str = "item_count";

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Load {
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub arrival_waypoint: Waypoint,
    pub duration: ApiDuration,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_windows: Vec<TimeWindow>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub label: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pickups: Vec<VisitRequest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deliveries: Vec<VisitRequest>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub demands: BTreeMap<String, Load>,
}

pub struct ShipmentBuilder {
    label: String,
    pickups: Vec<VisitRequest>,
    deliveries: Vec<VisitRequest>,
    demands: BTreeMap<String, Load>,
}

impl ShipmentBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        ShipmentBuilder {
            label: label.into(),
            pickups: Vec::new(),
            deliveries: Vec::new(),
            demands: BTreeMap::new(),
        }
    }

    pub fn add_pickup(&mut self, location: LatLng, duration: ApiDuration) -> &mut ShipmentBuilder {
        self.pickups.push(VisitRequest {
            arrival_waypoint: location.into(),
            duration,
            time_windows: Vec::new(),
        });
        self
    }

    pub fn add_delivery(
        &mut self,
        location: LatLng,
        duration: ApiDuration,
    ) -> &mut ShipmentBuilder {
        self.deliveries.push(VisitRequest {
            arrival_waypoint: location.into(),
            duration,
            time_windows: Vec::new(),
        });
        self
    }

    pub fn set_demand(&mut self, demand_type: impl Into<String>, amount: u64) -> &mut ShipmentBuilder {
        self.demands.insert(demand_type.into(), Load { amount });
        self
    }

    pub fn build(self) -> Shipment {
        Shipment {
            label: self.label,
            pickups: self.pickups,
            deliveries: self.deliveries,
            demands: self.demands,
        }
    }
}
