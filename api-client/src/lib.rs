pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::ApiClient;
pub use errors::ApiError;
