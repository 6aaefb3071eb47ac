use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use fleetroute_geometry::{line_string::decode_geometry, polyline::PolylineError};
use geojson::{Feature, FeatureCollection, JsonObject};
use tracing::warn;

use crate::{plan::RoutePlan, response::ShipmentRoute};

pub const DEFAULT_OUTPUT_FILE: &str = "route_output.geojson";

/// Descriptive properties attached to each exported route feature.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteProperties {
    pub vehicle: String,
    pub driver: Option<String>,
    pub departure: String,
    pub arrival: String,
}

impl From<&RouteProperties> for JsonObject {
    fn from(properties: &RouteProperties) -> Self {
        let mut object = JsonObject::new();
        object.insert("vehicle".to_string(), properties.vehicle.clone().into());
        if let Some(driver) = &properties.driver {
            object.insert("driver".to_string(), driver.clone().into());
        }
        object.insert("departure".to_string(), properties.departure.clone().into());
        object.insert("arrival".to_string(), properties.arrival.clone().into());
        object
    }
}

/// Builds the route's `LineString` feature, or `None` when the route carries no polyline.
pub fn route_feature(
    route: &ShipmentRoute,
    properties: &RouteProperties,
) -> Result<Option<Feature>, PolylineError> {
    let Some(encoded) = route.encoded_polyline() else {
        return Ok(None);
    };

    let geometry = decode_geometry(encoded)?;

    Ok(Some(Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties.into()),
        foreign_members: None,
    }))
}

/// One feature per route that has a polyline. `None` when no route has one.
pub fn route_feature_collection(
    routes: &[ShipmentRoute],
    plan: &RoutePlan,
) -> Result<Option<FeatureCollection>, PolylineError> {
    let mut features = Vec::with_capacity(routes.len());

    for (index, route) in routes.iter().enumerate() {
        let properties = plan.route_properties(route, index);

        match route_feature(route, &properties)? {
            Some(feature) => features.push(feature),
            None => warn!("Route {:?} has no polyline", route.route_label),
        }
    }

    if features.is_empty() {
        return Ok(None);
    }

    Ok(Some(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }))
}

pub fn write_feature_collection(path: &Path, collection: &FeatureCollection) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, collection)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use fleetroute_geometry::polyline;

    use super::*;
    use crate::response::RoutePolyline;

    const ENCODED: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn route(label: &str, encoded: Option<&str>) -> ShipmentRoute {
        ShipmentRoute {
            route_label: label.to_string(),
            route_polyline: encoded.map(|encoded| RoutePolyline {
                encoded_polyline: encoded.to_string(),
            }),
            ..ShipmentRoute::default()
        }
    }

    fn properties() -> RouteProperties {
        RouteProperties {
            vehicle: String::from("5/345-U Aung"),
            driver: Some(String::from("Aung")),
            departure: String::from("07:00"),
            arrival: String::from("09:00"),
        }
    }

    fn coordinates(feature: &Feature) -> Vec<Vec<f64>> {
        match &feature.geometry.as_ref().unwrap().value {
            geojson::Value::LineString(coordinates) => coordinates.clone(),
            other => panic!("expected a LineString, got {:?}", other),
        }
    }

    #[test]
    fn test_route_feature_swaps_decoded_points() {
        let feature = route_feature(&route("van", Some(ENCODED)), &properties())
            .unwrap()
            .unwrap();

        let decoded = polyline::decode(ENCODED).unwrap();
        let coordinates = coordinates(&feature);

        assert_eq!(coordinates.len(), decoded.len());
        for (position, point) in coordinates.iter().zip(&decoded) {
            assert_eq!(position, &vec![point.longitude, point.latitude]);
        }

        let properties = feature.properties.unwrap();
        assert_eq!(properties["vehicle"], "5/345-U Aung");
        assert_eq!(properties["driver"], "Aung");
        assert_eq!(properties["departure"], "07:00");
        assert_eq!(properties["arrival"], "09:00");
    }

    #[test]
    fn test_route_feature_without_polyline() {
        assert!(matches!(
            route_feature(&route("van", None), &properties()),
            Ok(None)
        ));
        assert!(matches!(
            route_feature(&route("van", Some("")), &properties()),
            Ok(None)
        ));
    }

    #[test]
    fn test_route_feature_invalid_polyline() {
        assert!(route_feature(&route("van", Some("_p~iF")), &properties()).is_err());
    }

    #[test]
    fn test_driver_is_omitted_when_unknown() {
        let properties = RouteProperties {
            driver: None,
            ..properties()
        };

        let object = JsonObject::from(&properties);

        assert!(!object.contains_key("driver"));
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn test_feature_collection_has_one_feature_per_route() {
        let plan = RoutePlan::sample();
        let routes = vec![
            route("5/345-U Aung", Some(ENCODED)),
            route("spare", None),
            route("second", Some(ENCODED)),
        ];

        let collection = route_feature_collection(&routes, &plan).unwrap().unwrap();

        assert_eq!(collection.features.len(), 2);
        assert!(route_feature_collection(&routes[1..2], &plan).unwrap().is_none());
        assert!(route_feature_collection(&[], &plan).unwrap().is_none());
    }

    #[test]
    fn test_write_feature_collection() {
        let plan = RoutePlan::sample();
        let collection = route_feature_collection(&[route("5/345-U Aung", Some(ENCODED))], &plan)
            .unwrap()
            .unwrap();

        let folder = tempfile::tempdir().unwrap();
        let path = folder.path().join(DEFAULT_OUTPUT_FILE);
        write_feature_collection(&path, &collection).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(written["type"], "FeatureCollection");
        assert_eq!(written["features"][0]["type"], "Feature");
        assert_eq!(written["features"][0]["geometry"]["type"], "LineString");
        assert_eq!(
            written["features"][0]["geometry"]["coordinates"][0],
            serde_json::json!([-120.2, 38.5])
        );
        assert_eq!(written["features"][0]["properties"]["vehicle"], "5/345-U Aung");
    }
}
