use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::Context;
use fleetroute_geometry::lat_lng::LatLng;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    export::RouteProperties,
    request::{
        api_duration::ApiDuration,
        routing_request::{RoutingRequest, RoutingRequestBuilder, SearchMode},
        shipment::{ITEM_COUNT_DEMAND, ShipmentBuilder},
        time_window::TimeWindow,
        vehicle::{Vehicle, VehicleBuilder},
    },
    response::ShipmentRoute,
};

const DISPLAY_TIME_FORMAT: &str = "%H:%M";

/// A request together with the display-only data used to annotate the exported routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub request: RoutingRequest,

    /// Driver name per vehicle label. Never sent to the API.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub drivers: BTreeMap<String, String>,
}

impl RoutePlan {
    pub fn new(request: RoutingRequest) -> Self {
        RoutePlan {
            request,
            drivers: BTreeMap::new(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open route plan {}", path.display()))?;

        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse route plan {}", path.display()))
    }

    pub fn with_driver(mut self, vehicle: impl Into<String>, driver: impl Into<String>) -> Self {
        self.drivers.insert(vehicle.into(), driver.into());
        self
    }

    /// The vehicle that drove `route`: matched by label, falling back to the route position.
    pub fn vehicle_for_route(&self, route: &ShipmentRoute, index: usize) -> Option<&Vehicle> {
        self.request
            .vehicle(&route.route_label)
            .or_else(|| self.request.vehicles.get(index))
    }

    pub fn route_properties(&self, route: &ShipmentRoute, index: usize) -> RouteProperties {
        let vehicle = self.vehicle_for_route(route, index);
        let vehicle_label = vehicle
            .map(|vehicle| vehicle.label.clone())
            .unwrap_or_else(|| route.route_label.clone());

        let time_window = vehicle
            .and_then(Vehicle::first_time_window)
            .cloned()
            .unwrap_or_else(|| self.request.global_time_window());

        RouteProperties {
            driver: self.drivers.get(&vehicle_label).cloned(),
            vehicle: vehicle_label,
            departure: time_window.start_time.strftime(DISPLAY_TIME_FORMAT).to_string(),
            arrival: time_window.end_time.strftime(DISPLAY_TIME_FORMAT).to_string(),
        }
    }

    /// Morning pickup run in Yangon: one vehicle, fourteen single-item pickups.
    pub fn sample() -> Self {
        const VEHICLE: &str = "5/345-U Aung";
        const PICKUPS: [(&str, f64, f64); 14] = [
            ("TEAM432,Kyaw Thaung", 16.77122, 96.175772),
            ("TEAM820,Zaw Min", 16.776539, 96.168959),
            ("TEAM286,Mya Hnin", 16.778781, 96.16733),
            ("TEAM698,Ko Ko", 16.78585, 96.161588),
            ("TEAM851,Aye Chan", 16.786012, 96.14788),
            ("TEAM344,Soe Win", 16.779877, 96.13744),
            ("TEAM289,Hla Hla", 16.780137, 96.13744),
            ("TEAM570,Thura", 16.780642, 96.131666),
            ("TEAM517,Than Myint", 16.793038, 96.122994),
            ("TEAM363,Moe Moe", 16.802123, 96.122292),
            ("TEAM627,Aung Aung", 16.803815, 96.12437),
            ("TEAM795,Khin Khin", 16.803723, 96.133336),
            ("TEAM544,Nay Lin", 16.804693, 96.133012),
            ("TEAM719,Wai Yan", 16.815558, 96.128566),
        ];

        // 2025-08-10 07:00 to 09:00 UTC
        let shift = TimeWindow::new(
            Timestamp::constant(1_754_809_200, 0),
            Timestamp::constant(1_754_816_400, 0),
        );

        let mut vehicle = VehicleBuilder::new(VEHICLE, LatLng::new(16.776474, 96.171004));
        vehicle
            .set_end(LatLng::new(16.803815, 96.12437))
            .add_available_time_window(shift.clone())
            .set_capacity(vec![15])
            .set_cost_per_hour(60.0)
            .set_cost_per_kilometer(5.0);

        let mut builder = RoutingRequestBuilder::new(shift);
        builder
            .add_vehicle(vehicle.build())
            .set_search_mode(SearchMode::ReturnFast)
            .set_consider_road_traffic(true)
            .set_populate_polylines(true)
            .set_populate_transition_polylines(true);

        for (label, latitude, longitude) in PICKUPS {
            let mut shipment = ShipmentBuilder::new(label);
            shipment
                .add_pickup(LatLng::new(latitude, longitude), ApiDuration::from_secs(300))
                .set_demand(ITEM_COUNT_DEMAND, 1);
            builder.add_shipment(shipment.build());
        }

        RoutePlan::new(builder.build()).with_driver(VEHICLE, "Aung")
    }
}
