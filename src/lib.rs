pub mod components;
pub mod conf;
pub mod error;
pub mod page;
pub mod startup;
pub mod static_routes;
pub mod telemetry;
pub mod trace;

mod routes;
