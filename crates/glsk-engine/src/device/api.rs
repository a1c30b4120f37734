use std::fmt::Debug;

use crate::diag::DiagnosticReporter;
use crate::shader::ShaderStage;

use super::{ClearColor, DeviceError, Viewport};

/// Attributes of the live context, queried after the function table loads.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ContextFlags {
    /// The driver honored the request for a debug-capable context.
    pub debug: bool,
}

/// Layout of one float vertex attribute inside an interleaved buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub stride: i32,
    pub offset: i32,
}

/// Raw device-call primitives used by the starter kit.
///
/// A `Device` only exists once the function table has been loaded for the
/// current context, so every method may assume the API is callable.
/// Object handles are plain copies; ownership (and release) is tracked by
/// the wrapper types in this crate.
pub trait Device {
    type Shader: Copy + Debug;
    type Buffer: Copy + Debug;
    type VertexArray: Copy + Debug;

    fn context_flags(&self) -> ContextFlags;

    /// Registers `reporter` as the driver's debug message sink and switches
    /// delivery to synchronous (in-call, in-order).
    fn install_debug_sink(&mut self, reporter: DiagnosticReporter);

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, DeviceError>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, DeviceError>;
    fn create_buffer(&self) -> Result<Self::Buffer, DeviceError>;

    /// Uploads `bytes` as static vertex data and records `attribute` in `vao`.
    fn upload_vertices(
        &self,
        vao: Self::VertexArray,
        buffer: Self::Buffer,
        bytes: &[u8],
        attribute: VertexAttribute,
    );
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn delete_vertex_array(&self, vao: Self::VertexArray);

    fn set_viewport(&self, viewport: Viewport);
    fn clear(&self, color: ClearColor);
}
