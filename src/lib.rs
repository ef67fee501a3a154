pub mod config;
pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod ops;
pub mod routes;
pub mod server;
pub mod state;
