// Copyright 2024 the Vello Authors
// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear transformations visualizer.
//!
//! Arrow keys rotate and scale the sprite, Q and E shear it, WASD moves it,
//! R (or the Reset button) restores it and Escape quits.

mod input;

use anyhow::Result;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::prelude::*;
use vello::kurbo::{Affine, Point, Size};
use vello::peniko::color::palette;
use vello::util::{RenderContext, RenderSurface};
use vello::{AaConfig, Renderer, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use vello::wgpu;

use lintrans::{pipeline, Action, Config, FramePacer, Integrator, Sprite, Tick};
use lintrans_vello::layout::Layout;

use crate::input::InputSampler;

enum RenderState<'s> {
    /// `RenderSurface` and `Window` for active rendering.
    Active {
        // The `RenderSurface` and the `Window` must be in this order, so that the surface is dropped first.
        surface: Box<RenderSurface<'s>>,
        window: Arc<Window>,
    },
    /// Cache a window so that it can be reused when the app is resumed after being suspended.
    Suspended(Option<Arc<Window>>),
}

struct Visualizer<'s> {
    /// The vello `RenderContext` which is a global context that lasts for the lifetime of the application.
    context: RenderContext,

    /// An array of renderers, one per wgpu device.
    renderers: Vec<Option<Renderer>>,

    /// The window, and also the surface while actively rendering.
    state: RenderState<'s>,

    /// Scene submitted to the renderer, in physical pixels.
    scene: Scene,
    /// Scene built each tick, in logical pixels.
    fragment: Scene,

    /// Lintrans Vello environment.
    lv_environment: lintrans_vello::Environment,

    /// Placement of the demo area and sidebar, in logical pixels.
    layout: Layout,
    /// Last cursor position, in logical pixels.
    cursor: Point,

    /// The reference shape.
    sprite: Sprite,
    /// Owner of the transform state.
    integrator: Integrator,
    /// Fixed-rate tick timing.
    pacer: FramePacer,
    /// Keys and button clicks since the last tick.
    input: InputSampler,
}

impl Visualizer<'_> {
    fn new(config: Config) -> Self {
        Self {
            context: RenderContext::new(),
            renderers: vec![],
            state: RenderState::Suspended(None),
            scene: Scene::new(),
            fragment: Scene::new(),
            lv_environment: Default::default(),
            layout: Layout::new(Size::ZERO),
            cursor: Point::ZERO,
            sprite: config.sprite(),
            integrator: Integrator::new(config.rates),
            pacer: FramePacer::new(config.target_fps),
            input: InputSampler::default(),
        }
    }
}

impl ApplicationHandler for Visualizer<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let RenderState::Suspended(cached_window) = &mut self.state else {
            return;
        };

        // Get the winit window cached in a previous Suspended event or else create a new window.
        let window = match cached_window.take() {
            Some(window) => window,
            None => match create_winit_window(event_loop) {
                Ok(window) => window,
                Err(e) => {
                    tracing::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            },
        };

        // Create a vello Surface.
        let size = window.inner_size();
        let surface_future = self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        );
        let surface = match pollster::block_on(surface_future) {
            Ok(surface) => surface,
            Err(e) => {
                tracing::error!("Failed to create surface: {e}");
                event_loop.exit();
                return;
            }
        };

        // Create a vello Renderer for the surface (using its device id).
        self.renderers
            .resize_with(self.context.devices.len(), || None);
        if self.renderers[surface.dev_id].is_none() {
            match create_vello_renderer(&self.context, &surface) {
                Ok(renderer) => self.renderers[surface.dev_id] = Some(renderer),
                Err(e) => {
                    tracing::error!("Failed to create renderer: {e}");
                    event_loop.exit();
                    return;
                }
            }
        }

        self.layout = logical_layout(&window);
        self.pacer.restart();
        window.request_redraw();

        // Save the Window and Surface to a state variable.
        self.state = RenderState::Active {
            surface: Box::new(surface),
            window,
        };
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let RenderState::Active { window, .. } = &self.state {
            self.state = RenderState::Suspended(Some(window.clone()));
        }
        self.input.release_all();
    }

    #[tracing::instrument(skip_all)]
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let (surface, window) = match &mut self.state {
            RenderState::Active { surface, window } if window.id() == window_id => {
                (surface, window)
            }
            _ => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if !event.repeat {
                        self.input.key(code, event.state.is_pressed());
                    }
                }
            }

            WindowEvent::Focused(false) => self.input.release_all(),

            WindowEvent::Resized(size) => {
                self.context
                    .resize_surface(surface, size.width, size.height);
                self.layout = logical_layout(window);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let winit::dpi::LogicalPosition::<f64> { x, y } =
                    position.to_logical(window.scale_factor());
                self.cursor = Point { x, y };
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if self.layout.hit_reset(self.cursor) {
                    tracing::debug!("reset button clicked");
                    self.input.trigger(Action::Reset);
                }
            }

            WindowEvent::RedrawRequested => {
                let dt = self.pacer.tick(Instant::now());
                if self.integrator.step(self.input.sample(), dt) == Tick::Quit {
                    tracing::info!("quit requested");
                    event_loop.exit();
                    return;
                }

                let frame = pipeline::evaluate(self.integrator.state(), &self.sprite);

                self.fragment.reset();
                self.lv_environment
                    .add_frame_to_scene(&mut self.fragment, &self.layout, &frame);

                // Empty the scene of objects to draw, reusing its allocation.
                self.scene.reset();
                self.scene
                    .append(&self.fragment, Some(Affine::scale(window.scale_factor())));

                let wgpu::SurfaceConfiguration { width, height, .. } = surface.config;

                let device_handle = &self.context.devices[surface.dev_id];

                let surface_texture = match tracing::info_span!("get_current_texture")
                    .in_scope(|| surface.surface.get_current_texture())
                {
                    Ok(texture) => texture,
                    Err(e) => {
                        tracing::warn!("Skipping frame, no surface texture: {e}");
                        return;
                    }
                };

                let Some(renderer) = self.renderers[surface.dev_id].as_mut() else {
                    return;
                };

                // Render to the surface's texture.
                let rendered = tracing::info_span!("render_to_texture").in_scope(|| {
                    renderer.render_to_texture(
                        &device_handle.device,
                        &device_handle.queue,
                        &self.scene,
                        &surface.target_view,
                        &vello::RenderParams {
                            base_color: palette::css::BLACK, // Background color
                            width,
                            height,
                            antialiasing_method: AaConfig::Area,
                        },
                    )
                });
                if let Err(e) = rendered {
                    tracing::error!("Failed to render: {e}");
                    event_loop.exit();
                    return;
                }

                let mut encoder =
                    device_handle
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Surface Blit"),
                        });
                surface.blitter.copy(
                    &device_handle.device,
                    &mut encoder,
                    &surface.target_view,
                    &surface_texture
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default()),
                );
                device_handle.queue.submit([encoder.finish()]);

                tracing::info_span!("present_surface").in_scope(|| {
                    // Queue the texture to be presented on the surface.
                    surface_texture.present();
                });

                device_handle.device.poll(wgpu::Maintain::Poll);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let RenderState::Active { window, .. } = &self.state else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };

        match self.pacer.next_deadline() {
            Some(deadline) if Instant::now() < deadline => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            _ => {
                window.request_redraw();
                event_loop.set_control_flow(ControlFlow::Wait);
            }
        }
    }
}

#[cfg(feature = "tracing-tracy-memory")]
#[global_allocator]
static GLOBAL: tracy_client::ProfiledAllocator<std::alloc::System> =
    tracy_client::ProfiledAllocator::new(std::alloc::System, 100);

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        );

    #[cfg(feature = "tracing-tracy")]
    let tracy_layer = tracing_tracy::TracyLayer::default();
    #[cfg(feature = "tracing-tracy")]
    let subscriber = subscriber.with(tracy_layer);

    subscriber.init();

    let config = Config::default();
    tracing::info!(?config, "starting");

    let mut app = Visualizer::new(config);

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}

/// Layout for the window's current size in logical pixels.
fn logical_layout(window: &Window) -> Layout {
    let LogicalSize::<f64> { width, height } =
        window.inner_size().to_logical(window.scale_factor());
    Layout::new(Size { width, height })
}

/// Helper function that creates a Winit window and returns it (wrapped in an Arc for sharing between threads)
fn create_winit_window(event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
    let attr = Window::default_attributes()
        .with_inner_size(LogicalSize::new(1280, 720))
        .with_resizable(true)
        .with_title("Linear Transformations Demo");
    Ok(Arc::new(event_loop.create_window(attr)?))
}

/// Helper function that creates a vello `Renderer` for a given `RenderContext` and `RenderSurface`
fn create_vello_renderer(
    render_cx: &RenderContext,
    surface: &RenderSurface<'_>,
) -> Result<Renderer, vello::Error> {
    Renderer::new(
        &render_cx.devices[surface.dev_id].device,
        RendererOptions {
            use_cpu: false,
            antialiasing_support: vello::AaSupport::area_only(),
            num_init_threads: NonZeroUsize::new(1),
            pipeline_cache: None,
        },
    )
}
