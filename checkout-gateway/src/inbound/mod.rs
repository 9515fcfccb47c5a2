//! Inbound HTTP adapter.

pub mod cors;
pub mod handlers;
pub mod server;

pub use cors::CorsOptions;
pub use server::HttpServer;
