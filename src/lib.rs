pub mod benchmark;
pub mod config;
pub mod errors;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

pub use benchmark::{BenchmarkReport, run_benchmark};
pub use validation::{ValidationStrategy, is_email_from_domain, is_valid_email};
