//! Data models for SPC Report

mod coordinates;
mod report;

pub use coordinates::Coordinates;
pub use report::DeviceReport;
