//! Shared utilities for the stockchat workspace

pub mod logging;

pub use logging::init_tracing;
