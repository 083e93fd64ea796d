use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use vitrine::cli::{Cli, SceneKind};
use vitrine::config::Tuning;
use vitrine::frame::FrameClock;
use vitrine::gpu::GpuState;
use vitrine::scenes::{CrystalScene, MorphScene, Scene};
use vitrine::viewport::Viewport;

struct App {
    cli: Cli,
    tuning: Tuning,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    scene: Option<Box<dyn Scene>>,
    clock: FrameClock,
    /// While occluded the scripted timeline is frozen; rendering continues
    occluded: bool,
}

impl App {
    fn new(cli: Cli, tuning: Tuning) -> Self {
        Self {
            cli,
            tuning,
            window: None,
            gpu: None,
            scene: None,
            clock: FrameClock::new(),
            occluded: false,
        }
    }

    fn build_scene(&self, gpu: &GpuState) -> Box<dyn Scene> {
        match self.cli.scene {
            SceneKind::Morph => Box::new(MorphScene::new(
                gpu,
                &self.tuning,
                &self.cli.texture_a,
                &self.cli.texture_b,
            )),
            SceneKind::Crystal => Box::new(CrystalScene::new(gpu, &self.tuning, &self.cli.model)),
        }
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let size = window.inner_size();
    Viewport::from_window(size.width, size.height, window.scale_factor())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("vitrine")
                .with_transparent(true)
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let viewport = viewport_of(&window);
        let gpu = match pollster::block_on(GpuState::new(window.clone(), viewport)) {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("failed to initialize GPU: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let scene = self.build_scene(&gpu);
        log::info!("running scene '{}'", scene.name());

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.scene = Some(scene);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Occluded(occluded) => {
                self.occluded = occluded;
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(gpu), Some(scene)) =
                    (&self.window, &mut self.gpu, &mut self.scene)
                {
                    let viewport = viewport_of(window);
                    gpu.resize(viewport);
                    scene.resize(viewport);
                }
            }
            WindowEvent::RedrawRequested => {
                let time = self.clock.tick();
                if let (Some(gpu), Some(scene)) = (&mut self.gpu, &mut self.scene) {
                    scene.advance(time, !self.occluded);
                    match scene.render(gpu) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("surface out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("frame dropped: {}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut tuning = match &cli.config {
        Some(path) => Tuning::from_file(path)?,
        None => Tuning::default(),
    };
    if let Some(speed) = cli.speed {
        tuning.crystal.speed_factor = speed;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, tuning);
    event_loop.run_app(&mut app)?;

    Ok(())
}
