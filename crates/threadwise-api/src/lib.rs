pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
