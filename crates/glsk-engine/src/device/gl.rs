use glow::HasContext;

use crate::diag::DiagnosticReporter;
use crate::shader::ShaderStage;

use super::{ClearColor, ContextFlags, Device, DeviceError, VertexAttribute, Viewport};

/// OpenGL device backed by a loaded `glow` function table.
pub struct GlDevice {
    gl: glow::Context,
}

impl GlDevice {
    /// Wraps a function table loaded for the current context.
    pub fn new(gl: glow::Context) -> Self {
        let version = gl.version();
        log::info!(
            "OpenGL {}.{} loaded ({})",
            version.major,
            version.minor,
            version.vendor_info
        );
        Self { gl }
    }
}

fn stage_kind(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        ShaderStage::Geometry => glow::GEOMETRY_SHADER,
    }
}

// SAFETY (all blocks below): a `GlDevice` is only constructed by the
// platform after the context is current and the function table resolved;
// handles passed in were created by this same context.
impl Device for GlDevice {
    type Shader = glow::NativeShader;
    type Buffer = glow::NativeBuffer;
    type VertexArray = glow::NativeVertexArray;

    fn context_flags(&self) -> ContextFlags {
        let flags = unsafe { self.gl.get_parameter_i32(glow::CONTEXT_FLAGS) } as u32;
        ContextFlags {
            debug: flags & glow::CONTEXT_FLAG_DEBUG_BIT != 0,
        }
    }

    fn install_debug_sink(&mut self, reporter: DiagnosticReporter) {
        unsafe {
            self.gl.enable(glow::DEBUG_OUTPUT);
            self.gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
            self.gl
                .debug_message_callback(move |source, kind, id, severity, message| {
                    reporter.driver_message(source, kind, id, severity, message);
                });
            self.gl.debug_message_control(
                glow::DONT_CARE,
                glow::DONT_CARE,
                glow::DONT_CARE,
                &[],
                true,
            );
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, DeviceError> {
        unsafe { self.gl.create_shader(stage_kind(stage)) }
            .map_err(|e| DeviceError::allocation("shader object", e))
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, DeviceError> {
        unsafe { self.gl.create_vertex_array() }
            .map_err(|e| DeviceError::allocation("vertex array", e))
    }

    fn create_buffer(&self) -> Result<Self::Buffer, DeviceError> {
        unsafe { self.gl.create_buffer() }.map_err(|e| DeviceError::allocation("buffer", e))
    }

    fn upload_vertices(
        &self,
        vao: Self::VertexArray,
        buffer: Self::Buffer,
        bytes: &[u8],
        attribute: VertexAttribute,
    ) {
        unsafe {
            self.gl.bind_vertex_array(Some(vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            self.gl.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components,
                glow::FLOAT,
                false,
                attribute.stride,
                attribute.offset,
            );
            self.gl.enable_vertex_attrib_array(attribute.location);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
            self.gl.bind_vertex_array(None);
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn delete_vertex_array(&self, vao: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vao) }
    }

    fn set_viewport(&self, viewport: Viewport) {
        unsafe {
            self.gl.viewport(
                viewport.x,
                viewport.y,
                viewport.width as i32,
                viewport.height as i32,
            )
        }
    }

    fn clear(&self, color: ClearColor) {
        unsafe {
            self.gl.clear_color(color.r, color.g, color.b, color.a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }
}
