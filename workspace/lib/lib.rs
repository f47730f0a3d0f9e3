//! Configuration, logging, and plotting for the driver binaries.

pub mod config;
pub mod logging;
pub mod render;
pub mod sweep;
