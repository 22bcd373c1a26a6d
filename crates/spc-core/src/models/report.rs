//! Device report model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payload posted to the collection endpoint.
///
/// Built fresh for every submission attempt. Absent coordinates serialize
/// as JSON `null`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReport {
    /// Persistent installation identifier
    pub phone_id: String,
    /// Push-messaging token current at submission time
    pub fcm_token: String,
    /// Last known latitude
    pub lat: Option<f64>,
    /// Last known longitude
    pub lon: Option<f64>,
}

impl DeviceReport {
    /// Create a report for the given identifier, token and optional position
    #[must_use]
    pub fn new(
        phone_id: impl Into<String>,
        fcm_token: impl Into<String>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Self {
        Self {
            phone_id: phone_id.into(),
            fcm_token: fcm_token.into(),
            lat,
            lon,
        }
    }

    /// Whether the report carries a full position
    #[must_use]
    pub const fn has_location(&self) -> bool {
        self.lat.is_some() && self.lon.is_some()
    }
}

impl fmt::Debug for DeviceReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DeviceReport")
            .field("phone_id", &self.phone_id)
            .field("fcm_token", &"[REDACTED]")
            .field("lat", &self.lat)
            .field("lon", &self.lon)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_wire_field_names() {
        let report = DeviceReport::new("abc-123", "token-1", Some(37.0), Some(-97.0));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "phone_id": "abc-123",
                "fcm_token": "token-1",
                "lat": 37.0,
                "lon": -97.0,
            })
        );
    }

    #[test]
    fn absent_coordinates_serialize_as_null() {
        let report = DeviceReport::new("abc-123", "token-1", None, None);
        let body = serde_json::to_string(&report).unwrap();
        assert!(body.contains("\"lat\":null"));
        assert!(body.contains("\"lon\":null"));
        assert!(!report.has_location());
    }

    #[test]
    fn debug_redacts_push_token() {
        let report = DeviceReport::new("abc-123", "sensitive-token", None, None);
        let debug_output = format!("{report:?}");
        assert!(!debug_output.contains("sensitive-token"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("abc-123"));
    }
}
