use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{shipment::Shipment, time_window::TimeWindow, vehicle::Vehicle};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchMode {
    ReturnFast,
    ConsumeAllAvailableTime,
}

/// Body of an `optimizeTours` call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRequest {
    pub vehicles: Vec<Vehicle>,
    pub shipments: Vec<Shipment>,
    pub global_start_time: Timestamp,
    pub global_end_time: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_mode: Option<SearchMode>,

    #[serde(default)]
    pub consider_road_traffic: bool,

    #[serde(default)]
    pub populate_polylines: bool,

    #[serde(default)]
    pub populate_transition_polylines: bool,
}

impl RoutingRequest {
    pub fn global_time_window(&self) -> TimeWindow {
        TimeWindow::new(self.global_start_time, self.global_end_time)
    }

    pub fn vehicle(&self, label: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.label == label)
    }
}

pub struct RoutingRequestBuilder {
    global_time_window: TimeWindow,
    vehicles: Vec<Vehicle>,
    shipments: Vec<Shipment>,
    search_mode: Option<SearchMode>,
    consider_road_traffic: bool,
    populate_polylines: bool,
    populate_transition_polylines: bool,
}

impl RoutingRequestBuilder {
    pub fn new(global_time_window: TimeWindow) -> Self {
        RoutingRequestBuilder {
            global_time_window,
            vehicles: Vec::new(),
            shipments: Vec::new(),
            search_mode: None,
            consider_road_traffic: false,
            populate_polylines: false,
            populate_transition_polylines: false,
        }
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> &mut RoutingRequestBuilder {
        self.vehicles.push(vehicle);
        self
    }

    pub fn add_shipment(&mut self, shipment: Shipment) -> &mut RoutingRequestBuilder {
        self.shipments.push(shipment);
        self
    }

    pub fn set_search_mode(&mut self, search_mode: SearchMode) -> &mut RoutingRequestBuilder {
        self.search_mode = Some(search_mode);
        self
    }

    pub fn set_consider_road_traffic(&mut self, consider: bool) -> &mut RoutingRequestBuilder {
        self.consider_road_traffic = consider;
        self
    }

    pub fn set_populate_polylines(&mut self, populate: bool) -> &mut RoutingRequestBuilder {
        self.populate_polylines = populate;
        self
    }

    pub fn set_populate_transition_polylines(
        &mut self,
        populate: bool,
    ) -> &mut RoutingRequestBuilder {
        self.populate_transition_polylines = populate;
        self
    }

    pub fn build(self) -> RoutingRequest {
        RoutingRequest {
            vehicles: self.vehicles,
            shipments: self.shipments,
            global_start_time: self.global_time_window.start_time,
            global_end_time: self.global_time_window.end_time,
            search_mode: self.search_mode,
            consider_road_traffic: self.consider_road_traffic,
            populate_polylines: self.populate_polylines,
            populate_transition_polylines: self.populate_transition_polylines,
        }
    }
}

#[cfg(test)]
mod tests {
    use fleetroute_geometry::lat_lng::LatLng;

    use super::*;
    use crate::request::{
        api_duration::ApiDuration,
        shipment::{ITEM_COUNT_DEMAND, ShipmentBuilder},
        vehicle::VehicleBuilder,
    };

    fn window() -> TimeWindow {
        TimeWindow::from_iso("2025-08-10T07:00:00Z", "2025-08-10T09:00:00Z").unwrap()
    }

    #[test]
    fn test_build_request() {
        let mut shipment = ShipmentBuilder::new("TEAM820,Zaw Min");
        shipment
            .add_pickup(LatLng::new(16.776539, 96.168959), ApiDuration::from_secs(300))
            .set_demand(ITEM_COUNT_DEMAND, 1);

        let mut builder = RoutingRequestBuilder::new(window());
        builder
            .add_vehicle(VehicleBuilder::new("van", LatLng::new(16.776474, 96.171004)).build())
            .add_shipment(shipment.build())
            .set_search_mode(SearchMode::ReturnFast)
            .set_consider_road_traffic(true)
            .set_populate_polylines(true);
        let request = builder.build();

        assert_eq!(request.global_time_window(), window());
        assert!(request.vehicle("van").is_some());
        assert!(request.vehicle("truck").is_none());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["globalStartTime"], "2025-08-10T07:00:00Z");
        assert_eq!(json["globalEndTime"], "2025-08-10T09:00:00Z");
        assert_eq!(json["searchMode"], "RETURN_FAST");
        assert_eq!(json["considerRoadTraffic"], true);
        assert_eq!(json["populatePolylines"], true);
        assert_eq!(json["populateTransitionPolylines"], false);
        assert_eq!(json["shipments"][0]["label"], "TEAM820,Zaw Min");
        assert_eq!(json["vehicles"][0]["label"], "van");
    }

    #[test]
    fn test_search_mode_is_omitted_when_unset() {
        let request = RoutingRequestBuilder::new(window()).build();
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("searchMode").is_none());
        assert_eq!(json["vehicles"], serde_json::json!([]));
    }
}
