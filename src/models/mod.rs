//! Database models and configuration shared across the directory.

pub mod company;
#[cfg(feature = "server")]
pub mod config;
