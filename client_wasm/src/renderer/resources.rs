use crate::camera::{Camera, CameraUniform};
use crate::mesh::Vertex;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex buffer that grows to fit the largest frame seen so far
pub struct DynamicBuffer {
    pub buffer: Buffer,
    pub capacity: usize,
    pub len: u32,
    label: &'static str,
}

impl DynamicBuffer {
    pub fn new(device: &Device, label: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: create_vertex_buffer(device, label, capacity),
            capacity,
            len: 0,
            label,
        }
    }

    /// Copy `vertices` to the GPU, reallocating when they no longer fit
    pub fn upload(&mut self, device: &Device, queue: &Queue, vertices: &[Vertex]) {
        if vertices.len() > self.capacity {
            self.capacity = vertices.len().next_power_of_two();
            self.buffer = create_vertex_buffer(device, self.label, self.capacity);
            log::debug!("{} grown to {} vertices", self.label, self.capacity);
        }
        if !vertices.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.len = vertices.len() as u32;
    }
}

fn create_vertex_buffer(device: &Device, label: &str, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub struct TableBuffers {
    pub camera: Buffer,
    pub triangles: DynamicBuffer,
    pub lines: DynamicBuffer,
}

pub fn create_buffers(
    device: &Device,
    camera: &Camera,
    triangle_capacity: usize,
    line_capacity: usize,
) -> TableBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    TableBuffers {
        camera: camera_buffer,
        triangles: DynamicBuffer::new(device, "Felt Vertex Buffer", triangle_capacity),
        lines: DynamicBuffer::new(device, "Outline Vertex Buffer", line_capacity),
    }
}
