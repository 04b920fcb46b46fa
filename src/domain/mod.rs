//! Domain layer: models, errors, and the ports the jobs depend on.

pub mod errors;
pub mod models;
pub mod ports;
