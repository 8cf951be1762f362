//! HTTP exposition layer of the purpleprom exporter.
//!
//! The binary in `main.rs` wires CLI flags and logging, then serves the
//! router built by [`app::build_app`]. The router is exported as a library
//! so integration tests can drive it in-process.

pub mod app;
