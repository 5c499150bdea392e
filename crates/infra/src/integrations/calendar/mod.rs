//! External calendar integration.
//!
//! OAuth happens out-of-band; the client only carries the resulting
//! bearer token.

pub mod client;

pub use client::CalendarApiClient;
