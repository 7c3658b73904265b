use web_sys::HtmlCanvasElement;
use wgpu::*;

/// GPU handles for drawing the table onto one canvas
pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// Canvas backing size, never zero so the surface can be configured
fn canvas_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    (canvas.width().max(1), canvas.height().max(1))
}

/// sRGB if the canvas offers it, else whatever comes first
fn table_surface_format(caps: &SurfaceCapabilities) -> Option<TextureFormat> {
    caps.formats
        .iter()
        .copied()
        .find(TextureFormat::is_srgb)
        .or_else(|| caps.formats.first().copied())
}

fn table_surface_config(format: TextureFormat, (width, height): (u32, u32)) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        // vsync: one simulation frame per display refresh
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}

pub async fn init_wgpu(canvas: HtmlCanvasElement) -> Result<WgpuContext, String> {
    let size = canvas_size(&canvas);

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("table canvas has no WebGPU surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "no WebGPU adapter can draw the table".to_string())?;

    // Flat 2D lines and triangles fit in the smallest limits
    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Billiards Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults(),
                memory_hints: MemoryHints::MemoryUsage,
            },
            None,
        )
        .await
        .map_err(|e| format!("table device request failed: {:?}", e))?;

    let format = table_surface_format(&surface.get_capabilities(&adapter))
        .ok_or_else(|| "table canvas offers no surface formats".to_string())?;
    let config = table_surface_config(format, size);
    surface.configure(&device, &config);

    log::info!(
        "table surface ready: {}x{} px, {:?}, adapter {}",
        size.0,
        size.1,
        format,
        adapter.get_info().name
    );

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}
