// Mumbai Lead Generator - API Core
//
// This crate provides the backend for the simulated lead-generation tool:
// synthetic lead records streamed to the embedded single-page UI over SSE,
// with CSV export of whatever the client has accumulated.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
