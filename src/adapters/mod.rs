//! Adapter implementations of the tracker ports.

pub mod live;
pub mod replaying;
