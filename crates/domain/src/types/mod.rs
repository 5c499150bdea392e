//! Domain data types for the scheduling engine

pub mod application;
pub mod conversation;
pub mod event;
pub mod interview;
pub mod slot;

pub use application::*;
pub use conversation::*;
pub use event::*;
pub use interview::*;
pub use slot::*;
