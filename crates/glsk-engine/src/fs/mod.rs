//! Whole-file resource loading.
//!
//! Two-call protocol: `size_of` first (zero means "do not load"), then
//! `load_into` a caller-provided buffer. `load` combines both.

mod loader;

pub use loader::{load, load_into, size_of};
