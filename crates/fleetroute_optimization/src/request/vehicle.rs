use fleetroute_geometry::lat_lng::LatLng;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::{time_window::TimeWindow, waypoint::Waypoint};

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub label: String,
    pub start_waypoint: Waypoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_waypoint: Option<Waypoint>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_time_windows: Vec<TimeWindow>,

    /// Maximum load per demand type, sent as int64 strings.
    #[serde_as(as = "Vec<DisplayFromStr>")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capacity: Vec<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_hour: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_kilometer: Option<f64>,
}

impl Vehicle {
    pub fn first_time_window(&self) -> Option<&TimeWindow> {
        self.available_time_windows.first()
    }
}

pub struct VehicleBuilder {
    label: String,
    start: LatLng,
    end: Option<LatLng>,
    available_time_windows: Vec<TimeWindow>,
    capacity: Vec<u64>,
    cost_per_hour: Option<f64>,
    cost_per_kilometer: Option<f64>,
}

impl VehicleBuilder {
    pub fn new(label: impl Into<String>, start: LatLng) -> Self {
        VehicleBuilder {
            label: label.into(),
            start,
            end: None,
            available_time_windows: Vec::new(),
            capacity: Vec::new(),
            cost_per_hour: None,
            cost_per_kilometer: None,
        }
    }

    pub fn set_end(&mut self, end: LatLng) -> &mut VehicleBuilder {
        self.end = Some(end);
        self
    }

    pub fn add_available_time_window(&mut self, time_window: TimeWindow) -> &mut VehicleBuilder {
        self.available_time_windows.push(time_window);
        self
    }

    pub fn set_capacity(&mut self, capacity: Vec<u64>) -> &mut VehicleBuilder {
        self.capacity = capacity;
        self
    }

    pub fn set_cost_per_hour(&mut self, cost_per_hour: f64) -> &mut VehicleBuilder {
        self.cost_per_hour = Some(cost_per_hour);
        self
    }

    pub fn set_cost_per_kilometer(&mut self, cost_per_kilometer: f64) -> &mut VehicleBuilder {
        self.cost_per_kilometer = Some(cost_per_kilometer);
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            label: self.label,
            start_waypoint: self.start.into(),
            end_waypoint: self.end.map(Waypoint::from),
            available_time_windows: self.available_time_windows,
            capacity: self.capacity,
            cost_per_hour: self.cost_per_hour,
            cost_per_kilometer: self.cost_per_kilometer,
        }
    }
}
