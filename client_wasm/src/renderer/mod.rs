pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::{Camera, CameraUniform};
use crate::mesh::DrawList;
use resources::TableBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    // Pipelines
    pub fill_pipeline: RenderPipeline,
    pub line_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: TableBuffers,
}

impl Renderer {
    /// Set up wgpu on `canvas` for a `table_width` x `table_height` table
    ///
    /// `initial` sizes the vertex buffers so the first frame does not reallocate.
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        table_width: f32,
        table_height: f32,
        initial: &DrawList,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let aspect = ctx.size.0 as f32 / ctx.size.1 as f32;
        let camera = Camera::orthographic(table_width, table_height, aspect);

        let buffers = resources::create_buffers(
            &ctx.device,
            &camera,
            initial.triangles.len(),
            initial.lines.len(),
        );
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            fill_pipeline: pipes.fill_pipeline,
            line_pipeline: pipes.line_pipeline,
            camera_bind_group,
            buffers,
        })
    }

    pub fn draw(&mut self, draw_list: &DrawList) -> Result<(), String> {
        draw::draw_frame(self, draw_list)
    }

    /// Resize the rendering surface and refit the camera
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();

        self.camera.set_aspect(width as f32 / height as f32);
        let camera_uniform = CameraUniform::from_camera(&self.camera);
        self.queue
            .write_buffer(&self.buffers.camera, 0, bytemuck::bytes_of(&camera_uniform));
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}
