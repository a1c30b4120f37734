//! Context bootstrap.
//!
//! Acquires a window/surface with a current core-profile context and a
//! loaded device, optionally wiring driver debug output into the diagnostic
//! channel. Release is tied to ownership: dropping the returned `Context`
//! destroys the window and then terminates the windowing subsystem.

mod bootstrap;
mod config;
mod error;

pub use bootstrap::{acquire_context, Context, DiagnosticMode, Surface};
pub use config::{ContextConfig, DIAGNOSTICS_ENV};
pub use error::{BootstrapError, BootstrapStep};
