//! Starfield - animated particle backdrop
//!
//! Library half of the `starfield` binary: configuration loading and the
//! systems the event loop drives.

pub mod config;
pub mod systems;
