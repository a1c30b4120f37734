//! Session driver.
//!
//! Wires bootstrap, resource upload, shader compilation and the frame loop
//! into one run, and owns the configuration that run consumes.

mod config;
mod session;

pub use config::{StarterConfig, SHADER_DIR_ENV};
pub use session::{Session, SessionReport};
