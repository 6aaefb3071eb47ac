//! Google's encoded polyline algorithm.
//!
//! Each coordinate is scaled by 1e5, rounded, delta-encoded against the previous point,
//! zig-zag encoded and written as 5-bit chunks offset by 63. Latitude comes first.

use thiserror::Error;

use crate::lat_lng::LatLng;

const PRECISION: f64 = 1e5;
const CHUNK_OFFSET: u8 = 63;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION_BIT: i64 = 0x20;

#[derive(Debug, Error, PartialEq)]
pub enum PolylineError {
    #[error("invalid character {character:?} at byte {position}")]
    InvalidCharacter { position: usize, character: char },

    #[error("polyline ends in the middle of a value at byte {position}")]
    Truncated { position: usize },

    #[error("value starting at byte {position} does not fit in 64 bits")]
    Overflow { position: usize },
}

pub fn decode(encoded: &str) -> Result<Vec<LatLng>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;

    while index < bytes.len() {
        let latitude_start = index;
        let (delta_latitude, next) = decode_value(bytes, index)?;
        let longitude_start = next;
        let (delta_longitude, next) = decode_value(bytes, next)?;
        index = next;

        latitude = latitude
            .checked_add(delta_latitude)
            .ok_or(PolylineError::Overflow {
                position: latitude_start,
            })?;
        longitude = longitude
            .checked_add(delta_longitude)
            .ok_or(PolylineError::Overflow {
                position: longitude_start,
            })?;

        points.push(LatLng::new(
            latitude as f64 / PRECISION,
            longitude as f64 / PRECISION,
        ));
    }

    Ok(points)
}

pub fn encode(points: &[LatLng]) -> String {
    let mut encoded = String::with_capacity(points.len() * 8);
    let mut previous_latitude: i64 = 0;
    let mut previous_longitude: i64 = 0;

    for point in points {
        let latitude = scale(point.latitude);
        let longitude = scale(point.longitude);

        encode_value(latitude - previous_latitude, &mut encoded);
        encode_value(longitude - previous_longitude, &mut encoded);

        previous_latitude = latitude;
        previous_longitude = longitude;
    }

    encoded
}

fn scale(value: f64) -> i64 {
    (value * PRECISION).round() as i64
}

fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut index = start;

    loop {
        let byte = *bytes
            .get(index)
            .ok_or(PolylineError::Truncated { position: index })?;

        if !(CHUNK_OFFSET..=CHUNK_OFFSET + 63).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                position: index,
                character: byte as char,
            });
        }

        let chunk = (byte - CHUNK_OFFSET) as i64;
        let payload = (chunk & CHUNK_MASK) as u64;

        // The last chunk only has `u64::BITS - shift` bits left.
        if shift >= u64::BITS
            || (shift > u64::BITS - CHUNK_BITS && payload >> (u64::BITS - shift) != 0)
        {
            return Err(PolylineError::Overflow { position: start });
        }

        result |= payload << shift;
        shift += CHUNK_BITS;
        index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let half = (result >> 1) as i64;
    let value = if result & 1 == 1 { !half } else { half };

    Ok((value, index))
}

fn encode_value(delta: i64, encoded: &mut String) {
    let zigzag = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = zigzag as u64;

    while value >= CONTINUATION_BIT as u64 {
        let chunk = (CONTINUATION_BIT as u64 | (value & CHUNK_MASK as u64)) as u8;
        encoded.push(char::from(chunk + CHUNK_OFFSET));
        value >>= CHUNK_BITS;
    }

    encoded.push(char::from(value as u8 + CHUNK_OFFSET));
}
