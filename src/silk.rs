//! Silk shader background: injects a canvas into each tagged container and
//! drives a fullscreen wgpu pass with the silk interference pattern.

use crate::core::silk::{hex_to_rgb, SilkParams, DEFAULT_COLOR_HEX, TIME_RATE};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn init_all(document: &web::Document) {
    for container in dom::select_all(document, "[data-silk-background]") {
        let Ok(container) = container.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let params = params_from_attrs(&container);
        start_instance(document, container, params);
    }
}

fn params_from_attrs(el: &web::Element) -> SilkParams {
    let d = SilkParams::default();
    let color = match el.get_attribute("data-silk-color") {
        Some(raw) => hex_to_rgb(&raw).unwrap_or_else(|| {
            log::warn!(
                "[silk] bad data-silk-color \"{}\"; using {}",
                raw,
                DEFAULT_COLOR_HEX
            );
            d.color
        }),
        None => d.color,
    };
    SilkParams {
        color,
        speed: dom::attr_f32_or(el, "data-silk-speed", d.speed),
        scale: dom::attr_f32_or(el, "data-silk-scale", d.scale),
        rotation: dom::attr_f32_or(el, "data-silk-rotation", d.rotation),
        noise_intensity: dom::attr_f32_or(el, "data-silk-noise", d.noise_intensity),
        opacity: dom::attr_f32_or(el, "data-silk-opacity", d.opacity),
    }
}

fn start_instance(document: &web::Document, container: web::HtmlElement, params: SilkParams) {
    let Some(canvas) = inject_canvas(document, &container, params.opacity) else {
        log::error!("[silk] could not create background canvas");
        return;
    };
    sync_backing_size(&container, &canvas);
    if let Some(window) = web::window() {
        let container = container.clone();
        let canvas_resize = canvas.clone();
        dom::on_event(&window.into(), "resize", move |_| {
            sync_backing_size(&container, &canvas_resize);
        });
    }

    // Leak a canvas clone to satisfy the 'static lifetime for the surface.
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    spawn_local(async move {
        match GpuState::new(leaked_canvas).await {
            Ok(gpu) => run_loop(gpu, canvas, params),
            Err(e) => {
                log::error!("[silk] GPU init failed; background stays static: {:?}", e);
            }
        }
    });
}

fn inject_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
    opacity: f32,
) -> Option<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    dom::set_style(&canvas, "position", "absolute");
    dom::set_style(&canvas, "top", "0");
    dom::set_style(&canvas, "left", "0");
    dom::set_style(&canvas, "width", "100%");
    dom::set_style(&canvas, "height", "100%");
    dom::set_style(&canvas, "z-index", "0");
    dom::set_style(&canvas, "opacity", &format!("{}", opacity));
    dom::set_style(container, "position", "relative");
    container
        .insert_before(&canvas, container.first_child().as_ref())
        .ok()?;
    Some(canvas)
}

/// Keep the canvas backing store at container size times device pixel ratio
/// (clamped to 2 to bound fill cost on high-density screens).
fn sync_backing_size(container: &web::HtmlElement, canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let dpr = window.device_pixel_ratio().min(2.0);
        let rect = container.get_bounding_client_rect();
        let w = (rect.width() * dpr) as u32;
        let h = (rect.height() * dpr) as u32;
        canvas.set_width(w.max(1));
        canvas.set_height(h.max(1));
    }
}

fn run_loop(mut gpu: GpuState<'static>, canvas: web::HtmlCanvasElement, params: SilkParams) {
    let mut last = Instant::now();
    let mut time = 0.0_f32;
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;
        time += dt * TIME_RATE;

        gpu.resize_if_needed(canvas.width(), canvas.height());
        if let Err(e) = gpu.render(&params, time) {
            log::error!("[silk] render error: {:?}", e);
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SilkUniforms {
    color: [f32; 4],
    // x: time, y: speed, z: scale, w: rotation
    params: [f32; 4],
    // x: noise intensity
    noise: [f32; 4],
}

struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("silk_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SILK_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("silk_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("silk_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("silk_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_silk"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("silk_uniforms"),
            size: std::mem::size_of::<SilkUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("silk_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            width,
            height,
        })
    }

    fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self, params: &SilkParams, time: f32) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("silk_encoder"),
            });
        let uniforms = SilkUniforms {
            color: [params.color.x, params.color.y, params.color.z, 1.0],
            params: [time, params.speed, params.scale, params.rotation],
            noise: [params.noise_intensity, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("silk_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
