//! Kernel module - transport infrastructure.

pub mod sse;
