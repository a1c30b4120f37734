//! Diagnostic channel.
//!
//! Classifies and formats messages from the windowing layer, the graphics
//! driver's debug output, the shader compiler and the bootstrapper into one
//! line-per-message stream. Classification never fails: unknown enumerants
//! degrade to an `UNKNOWN` tag.

mod classify;
mod message;
mod reporter;

pub use classify::{DebugSeverity, DebugSource, DebugType, UNKNOWN_TAG};
pub use message::{DiagnosticMessage, Origin};
pub use reporter::{DiagnosticReporter, DiagnosticSink, LogSink};
