pub mod lat_lng;
pub mod line_string;
pub mod polyline;
