//! Interview lifecycle: CRUD, guarded approvals, busy projection.

pub mod busy;
pub mod ports;
pub mod service;

pub use service::InterviewService;
