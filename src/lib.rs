pub mod beacon;
pub mod configuration;
pub mod errors;
pub mod fingerprint;
pub mod models;
pub mod routes;
pub mod startup;
pub mod stats;
pub mod store;
pub mod telemetry;
