//! showcase-core library.
//!
//! The listing pipeline (`listing`) is a set of pure functions over
//! [`model::ProjectRecord`] slices. [`view::Gallery`] owns the records plus the
//! per-view selection/reveal state and is the entry point rendering layers
//! talk to.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums at module seams, `anyhow::Result`
//!   where files are read.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod error;
pub mod ingest;
pub mod listing;
pub mod model;
pub mod recruit;
pub mod tabs;
pub mod view;
