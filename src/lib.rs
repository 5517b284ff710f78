// Public API exports (shared between client and server)
pub mod domain;
pub mod shared;
pub mod config;

// Navigation sidebar components and the demo app
pub mod app;
