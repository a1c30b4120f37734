//! GLSK engine crate.
//!
//! Bootstraps a windowed OpenGL core-profile context, routes windowing,
//! driver and shader diagnostics into one channel, compiles the starter
//! shaders and drives the clear/present frame loop.

pub mod context;
pub mod core;
pub mod device;
pub mod diag;
pub mod frame;
pub mod fs;
pub mod logging;
pub mod platform;
pub mod shader;
pub mod time;

#[cfg(test)]
mod testing;
