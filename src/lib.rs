pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod state;

pub use app::build_router;
