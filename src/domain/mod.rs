//! Domain aggregates exposed by the directory service layer.

pub mod company;
pub mod types;
