use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl TimeWindow {
    pub fn new(start_time: Timestamp, end_time: Timestamp) -> Self {
        TimeWindow {
            start_time,
            end_time,
        }
    }

    pub fn from_iso(start: &str, end: &str) -> Result<Self, jiff::Error> {
        Ok(TimeWindow {
            start_time: start.parse()?,
            end_time: end.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iso() {
        let time_window =
            TimeWindow::from_iso("2025-08-10T07:00:00Z", "2025-08-10T09:00:00Z").unwrap();

        let start: Timestamp = "2025-08-10T07:00:00Z".parse().unwrap();
        let end: Timestamp = "2025-08-10T09:00:00Z".parse().unwrap();

        assert_eq!(time_window, TimeWindow::new(start, end));
    }

    #[test]
    fn test_from_iso_invalid() {
        assert!(TimeWindow::from_iso("07:00", "2025-08-10T09:00:00Z").is_err());
    }

    #[test]
    fn test_serialize() {
        let time_window =
            TimeWindow::from_iso("2025-08-10T07:00:00Z", "2025-08-10T09:00:00Z").unwrap();

        assert_eq!(
            serde_json::to_value(&time_window).unwrap(),
            serde_json::json!({
                "startTime": "2025-08-10T07:00:00Z",
                "endTime": "2025-08-10T09:00:00Z"
            })
        );
    }
}
