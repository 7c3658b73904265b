use super::Renderer;
use crate::mesh::DrawList;
use wgpu::*;

/// Floor around the table
const BACKGROUND: Color = Color {
    r: 0.02,
    g: 0.02,
    b: 0.02,
    a: 1.0,
};

pub fn draw_frame(renderer: &mut Renderer, draw_list: &DrawList) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws to the fresh surface
            renderer.reconfigure();
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    let buffers = &mut renderer.buffers;
    buffers
        .triangles
        .upload(&renderer.device, &renderer.queue, &draw_list.triangles);
    buffers
        .lines
        .upload(&renderer.device, &renderer.queue, &draw_list.lines);

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Table Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(BACKGROUND),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Felt first, outlines on top
    let triangles = &renderer.buffers.triangles;
    if triangles.len > 0 {
        pass.set_pipeline(&renderer.fill_pipeline);
        pass.set_vertex_buffer(0, triangles.buffer.slice(..));
        pass.draw(0..triangles.len, 0..1);
    }

    let lines = &renderer.buffers.lines;
    if lines.len > 0 {
        pass.set_pipeline(&renderer.line_pipeline);
        pass.set_vertex_buffer(0, lines.buffer.slice(..));
        pass.draw(0..lines.len, 0..1);
    }
}
