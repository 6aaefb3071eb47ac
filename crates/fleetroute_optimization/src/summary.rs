use std::fmt;

use crate::response::ShipmentRoute;

/// Meters to kilometers, rounded half away from zero to two decimals.
pub fn meters_to_kilometers(meters: f64) -> f64 {
    (meters / 10.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisitSummary {
    /// 1-indexed position in the route.
    pub sequence: usize,
    pub shipment_label: String,
    pub wait: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub label: String,
    pub distance_km: f64,
    pub duration: String,
    pub visits: Vec<VisitSummary>,
}

impl From<&ShipmentRoute> for RouteSummary {
    fn from(route: &ShipmentRoute) -> Self {
        RouteSummary {
            label: route.route_label.clone(),
            distance_km: meters_to_kilometers(route.route_distance_meters),
            duration: route.route_duration.clone(),
            visits: route
                .visits
                .iter()
                .enumerate()
                .map(|(index, visit)| VisitSummary {
                    sequence: index + 1,
                    shipment_label: visit.shipment_label.clone(),
                    wait: visit.visit_request_duration.clone(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle: {}", self.label)?;
        writeln!(f, "Distance: {:.2} km", self.distance_km)?;
        writeln!(f, "Duration: {}", self.duration)?;
        writeln!(f)?;
        writeln!(f, "Pickup order:")?;
        for visit in &self.visits {
            writeln!(
                f,
                "{}. {} (wait: {})",
                visit.sequence, visit.shipment_label, visit.wait
            )?;
        }
        Ok(())
    }
}
