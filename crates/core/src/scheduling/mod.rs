//! Availability computation pipeline: fetch, reconcile, sweep.

pub mod availability;
pub mod ports;
pub mod reconcile;
pub mod service;
pub mod timezone;

pub use service::AvailabilityService;
