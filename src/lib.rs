pub mod config;
pub mod csv_export;
pub mod error;
pub mod filter;
pub mod model;
pub mod routes;
pub mod schema;
pub mod service;
pub mod store;
pub mod validation;
