pub mod config;
pub mod error;
pub mod search_server;
pub mod types;
