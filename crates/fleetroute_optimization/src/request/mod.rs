pub mod api_duration;
pub mod routing_request;
pub mod shipment;
pub mod time_window;
pub mod vehicle;
pub mod waypoint;
