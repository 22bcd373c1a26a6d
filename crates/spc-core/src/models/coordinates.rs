//! Geographic position model

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidInput(format!(
                "latitude must be within [-90, 90], got {lat}"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidInput(format!(
                "longitude must be within [-180, 180], got {lon}"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Parse the `"lat,lon"` form
    pub fn parse(raw: &str) -> Result<Self> {
        let (lat, lon) = raw
            .split_once(',')
            .ok_or_else(|| Error::InvalidInput(format!("expected \"lat,lon\", got {raw:?}")))?;
        let lat = parse_degrees(lat, "latitude")?;
        let lon = parse_degrees(lon, "longitude")?;
        Self::new(lat, lon)
    }

    /// Split into the optional pair carried by a report
    #[must_use]
    pub const fn into_parts(self) -> (Option<f64>, Option<f64>) {
        (Some(self.lat), Some(self.lon))
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_degrees(raw: &str, field: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|error| Error::InvalidInput(format!("invalid {field} {raw:?}: {error}")))
}
