//! Application shell: window lifecycle and the render loop
//!
//! One iteration of the loop is: poll input events, snapshot them, update the
//! camera, upload the camera uniform, draw every block, present. The loop
//! ends on window close or Escape.

use std::sync::Arc;

use cgmath::Vector3;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::error::ViewerError;
use crate::gfx::{
    camera::{
        camera_controller::CameraController, camera_utils::CameraManager, fly_camera::FlyCamera,
    },
    rendering::render_engine::RenderEngine,
    scene::{loader::CubeInstance, scene::Scene},
};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "blockview";

/// Initial camera placement: looking at the origin from (4, 4, 4).
const INITIAL_EYE: Vector3<f32> = Vector3::new(4.0, 4.0, 4.0);
const INITIAL_TARGET: Vector3<f32> = Vector3::new(0.0, 0.0, 0.0);

pub struct ViewerApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    init_error: Option<ViewerError>,
}

impl ViewerApp {
    /// Creates the viewer for an already-loaded set of blocks.
    pub fn new(blocks: Vec<CubeInstance>) -> Result<Self, ViewerError> {
        let event_loop = EventLoop::new()
            .map_err(|e| ViewerError::Init(format!("failed to create event loop: {e}")))?;

        let aspect = WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32;
        let camera = FlyCamera::new(INITIAL_EYE, INITIAL_TARGET, aspect);
        let camera_manager = CameraManager::new(camera, CameraController::default());
        let scene = Scene::new(camera_manager, blocks);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                scene,
                init_error: None,
            },
        })
    }

    /// Runs the event loop until window close or Escape.
    ///
    /// Window and GPU setup happen inside the loop (winit hands us the window
    /// in `resumed`), so a startup failure there is carried out of the loop
    /// and returned from here.
    pub fn run(mut self) -> Result<(), ViewerError> {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .map_err(|e| ViewerError::Init(format!("event loop failed: {e}")))?;

        match self.app_state.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let window = event_loop
            .create_window(
                WindowAttributes::default()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
            )
            .map_err(|e| ViewerError::Init(format!("failed to create window: {e}")))?;

        let window_handle = Arc::new(window);
        let (width, height) = window_handle.inner_size().into();

        let renderer = pollster::block_on(RenderEngine::new(window_handle.clone(), width, height))?;

        self.scene
            .init_gpu_resources(renderer.device(), renderer.transform_layout());
        self.scene
            .camera_manager
            .camera
            .resize_projection(width, height);

        info!("viewer ready with {} blocks", self.scene.blocks().len());

        self.window = Some(window_handle);
        self.render_engine = Some(renderer);
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_graphics(event_loop) {
            // Everything acquired so far is dropped on the way out; the
            // binary turns this into the init exit code.
            error!("{err}");
            self.init_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if matches!(
                    event.physical_key,
                    winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
                ) {
                    event_loop.exit();
                    return;
                }
                self.scene.camera_manager.process_keyboard_event(&event);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.scene.update();
                render_engine.update(self.scene.camera_manager.camera.uniform);
                render_engine.render_frame(&self.scene);
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        self.scene.camera_manager.process_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
