// src/lib.rs
//! Stagehand
//!
//! Spatial placement and manipulation of a single 3D object, either anchored
//! to real-world surfaces through AR hit tests or dragged around a fixed
//! virtual room under bounds and obstacle constraints.

pub mod app;
pub mod ar;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod host;
pub mod math;
pub mod prelude;
pub mod room;
pub mod scene;

// Re-export main types for convenience
pub use app::PlacementApp;
pub use error::{PlacementError, Result};

/// Install the `env_logger` backend for the `log` macros used throughout the
/// crate. Defaults to `info`; `RUST_LOG` overrides it. Safe to call twice.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
