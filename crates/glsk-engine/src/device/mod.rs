//! Graphics device layer.
//!
//! This module is responsible for:
//! - the `Device` trait: the raw device calls the starter kit issues
//! - the OpenGL implementation over a loaded `glow` function table
//! - ownership of device-resident vertex data
//! - viewport / clear color value types

mod api;
mod buffer;
mod error;
mod gl;
mod viewport;

pub use api::{ContextFlags, Device, VertexAttribute};
pub use buffer::{Vertex, VertexBuffer, TRIANGLE};
pub use error::DeviceError;
pub use gl::GlDevice;
pub use viewport::{ClearColor, Viewport};
