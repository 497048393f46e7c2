use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use tracing::{debug, warn};
use winit::window::Window;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::ScreenPoint;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Presents frames through a `pixels` framebuffer sized to the canvas, with
/// the surface sized to the window. `pixels` scales between the two.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    canvas: CanvasSize,
    surface_width: u32,
    surface_height: u32,
    last_presented_generation: u64,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, canvas: CanvasSize) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(canvas.width(), canvas.height(), surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            canvas,
            surface_width: size.width,
            surface_height: size.height,
            last_presented_generation: 0,
        }
    }

    fn copy_pixel_buffer_into_pixels_frame(&mut self, frame: &FrameData) {
        let canvas = frame.pixel_buffer.canvas();

        if canvas != self.canvas {
            self.pixels
                .resize_buffer(canvas.width(), canvas.height())
                .expect("Failed to resize buffer");
            self.canvas = canvas;
        }

        let src = frame.pixel_buffer.buffer();
        let dest = self.pixels.frame_mut();

        assert_eq!(
            dest.len(),
            src.len(),
            "pixels frame length {} does not match frame length {} for {}x{}",
            dest.len(),
            src.len(),
            canvas.width(),
            canvas.height()
        );

        dest.copy_from_slice(src);
    }
}

impl InteractiveControllerPresenterPort for PixelsPresenter {
    fn present(&mut self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation <= self.last_presented_generation {
                    return;
                }

                self.copy_pixel_buffer_into_pixels_frame(&frame);
                self.last_presented_generation = frame.generation;
                debug!(
                    generation = frame.generation,
                    render_duration = ?frame.render_duration,
                    "frame copied to surface"
                );
            }
            RenderEvent::Error(error) => {
                warn!(%error, "render failed; keeping previous frame");
            }
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // egui on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }

    fn window_pos_to_canvas(&self, position: (f32, f32)) -> ScreenPoint {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        ScreenPoint::new(x as f64, y as f64)
    }
}
