//! spc-core - Core library for SPC Report
//!
//! This crate contains the device report model, the persisted device
//! identifier, the push-token and location capabilities, and the HTTP
//! submission flow used by every SPC Report host.

pub mod config;
pub mod device_id;
pub mod error;
pub mod location;
pub mod models;
pub mod storage;
pub mod submitter;
pub mod token;
pub mod transport;
pub mod util;

pub use error::{Error, Result};
pub use models::{Coordinates, DeviceReport};
pub use submitter::ReportSubmitter;
