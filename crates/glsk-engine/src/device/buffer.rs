use bytemuck::{Pod, Zeroable};

use super::{Device, DeviceError, VertexAttribute};

/// Position-only vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTE: VertexAttribute = VertexAttribute {
        location: 0,
        components: 3,
        stride: std::mem::size_of::<Vertex>() as i32,
        offset: 0,
    };
}

/// Starter triangle in normalized device coordinates.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5, 0.0] },
    Vertex { position: [0.5, -0.5, 0.0] },
    Vertex { position: [0.0, 0.5, 0.0] },
];

/// Device-resident vertex data (vertex array + buffer object).
///
/// Borrows the device, so it is always released before the context that
/// owns the device is destroyed.
pub struct VertexBuffer<'d, D: Device> {
    device: &'d D,
    vao: D::VertexArray,
    buffer: D::Buffer,
    vertex_count: usize,
}

impl<'d, D: Device> VertexBuffer<'d, D> {
    pub fn new(device: &'d D, vertices: &[Vertex]) -> Result<Self, DeviceError> {
        let vao = device.create_vertex_array()?;
        let buffer = match device.create_buffer() {
            Ok(b) => b,
            Err(e) => {
                device.delete_vertex_array(vao);
                return Err(e);
            }
        };

        device.upload_vertices(vao, buffer, bytemuck::cast_slice(vertices), Vertex::ATTRIBUTE);
        log::debug!("uploaded {} vertices", vertices.len());

        Ok(Self {
            device,
            vao,
            buffer,
            vertex_count: vertices.len(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl<D: Device> Drop for VertexBuffer<'_, D> {
    fn drop(&mut self) {
        self.device.delete_buffer(self.buffer);
        self.device.delete_vertex_array(self.vao);
    }
}
