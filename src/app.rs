use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use cgmath::{Rad, Vector3};
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::ar::{ArSession, SessionPhase};
use crate::cli::{StartupArgs, Variant};
use crate::config::{ArConfig, RoomConfig};
use crate::constants::FLOOR_Y;
use crate::gesture::{TouchEvent, TouchPhase, TouchPoint};
use crate::host::{
    touch_input, DesktopSurface, FrameRenderer, FrameView, LogRenderer, MouseTouch, ViewCamera,
};
use crate::room::{GizmoDrag, GizmoMode, RoomConfigurator};
use crate::scene::{AssetProvider, ObjAssetProvider};

const WINDOW_WIDTH: u32 = 1200;
const WINDOW_HEIGHT: u32 = 800;

// Radians of gizmo rotation per pixel of horizontal pointer motion
const ROTATE_DRAG_SENSITIVITY: f32 = 0.01;

/// Desktop window running one deployment variant
pub struct PlacementApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

enum Experience {
    Ar {
        session: ArSession,
        surface: DesktopSurface,
    },
    Room {
        configurator: RoomConfigurator,
        camera: ViewCamera,
        /// Contact currently dragging the gizmo, with its last position
        grab: Option<TouchPoint>,
    },
}

struct AppState {
    window: Option<Arc<Window>>,
    experience: Experience,
    renderer: Box<dyn FrameRenderer>,
    mouse: MouseTouch,
    contacts: usize,
    screen_size: (f32, f32),
    load_error: Option<String>,
}

impl PlacementApp {
    /// Load assets for the selected variant and prepare the event loop.
    /// Asset failures are reported in the window title, not returned.
    pub fn new(args: &StartupArgs) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut provider = ObjAssetProvider::new();
        let model_path = args.model_path();
        info!("starting {:?} variant with model {}", args.variant, model_path.display());

        let camera = ViewCamera::new(
            Vector3::new(0.0, 4.0, 6.0),
            Vector3::new(0.0, 0.0, 0.0),
            WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        );

        let mut load_error = None;
        let experience = match args.variant {
            Variant::Ar => {
                let mut session = ArSession::new(ArConfig::default());
                if let Err(e) = session.set_template(provider.load_object(&model_path)) {
                    load_error = Some(e.to_string());
                }
                Experience::Ar {
                    session,
                    surface: DesktopSurface::new(camera, WINDOW_WIDTH, WINDOW_HEIGHT),
                }
            }
            Variant::Room => {
                let mut configurator = RoomConfigurator::new(RoomConfig::default());
                if let Err(e) = configurator.load_room(provider.load_room(&args.room)) {
                    load_error = Some(e.to_string());
                }
                if let Err(e) = configurator.load_object(provider.load_object(&model_path)) {
                    load_error = Some(e.to_string());
                }
                Experience::Room {
                    configurator,
                    camera,
                    grab: None,
                }
            }
        };

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                experience,
                renderer: Box::new(LogRenderer::new()),
                mouse: MouseTouch::new(),
                contacts: 0,
                screen_size: (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
                load_error,
            },
        })
    }

    /// Replace the default logging renderer
    pub fn with_renderer(mut self, renderer: Box<dyn FrameRenderer>) -> Self {
        self.app_state.renderer = renderer;
        self
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated with an error")
    }
}

impl AppState {
    fn handle_touch(&mut self, event: TouchEvent) {
        match event.phase {
            TouchPhase::Start => self.contacts += 1,
            TouchPhase::End => self.contacts = self.contacts.saturating_sub(1),
            TouchPhase::Move => {}
        }

        match &mut self.experience {
            Experience::Ar { session, surface } => {
                session.touch(event);
                let point = event.point;
                match event.phase {
                    TouchPhase::Start | TouchPhase::Move => {
                        surface.set_pointer(Some((point.x, point.y)))
                    }
                    TouchPhase::End => {
                        surface.set_pointer(None);
                        // Releasing the last contact is the select; drags are
                        // filtered by the recognizer's cool-down
                        if self.contacts == 0 {
                            let outcome = session.select(Instant::now());
                            info!("select: {:?}", outcome);
                        }
                    }
                }
            }
            Experience::Room {
                configurator,
                camera,
                grab,
            } => {
                let point = event.point;
                match (event.phase, *grab) {
                    (TouchPhase::Start, None) => *grab = Some(point),
                    (TouchPhase::Move, Some(previous)) if previous.id == point.id => {
                        let drag = match configurator.gizmo_mode() {
                            GizmoMode::Translate => {
                                floor_delta(camera, self.screen_size, previous, point)
                                    .map(GizmoDrag::Translate)
                            }
                            GizmoMode::Rotate => Some(GizmoDrag::Rotate(Rad(
                                (point.x - previous.x) * ROTATE_DRAG_SENSITIVITY,
                            ))),
                        };
                        if let Some(drag) = drag {
                            configurator.on_gizmo_drag(drag);
                        }
                        *grab = Some(point);
                    }
                    (TouchPhase::End, Some(previous)) if previous.id == point.id => *grab = None,
                    _ => {}
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        if key == KeyCode::Escape {
            event_loop.exit();
            return;
        }

        match &mut self.experience {
            Experience::Room { configurator, .. } => match (key, digit_index(key)) {
                (KeyCode::KeyT, _) => configurator.set_gizmo_mode(GizmoMode::Translate),
                (KeyCode::KeyR, _) => configurator.set_gizmo_mode(GizmoMode::Rotate),
                // 1-3 pick wall textures, 4-6 floor textures
                (_, Some(i)) if i < 3 => {
                    configurator.update_wall_texture(i);
                }
                (_, Some(i)) => {
                    configurator.update_floor_texture(i - 3);
                }
                _ => {}
            },
            Experience::Ar { session, surface } => {
                if key == KeyCode::Space {
                    if session.phase() == SessionPhase::NoSession {
                        session.begin_session(surface);
                    } else {
                        session.end_session();
                    }
                }
            }
        }
    }

    fn redraw(&mut self) {
        let result = match &mut self.experience {
            Experience::Ar { session, surface } => {
                surface.begin_frame();
                let report = session.frame(&*surface, Instant::now());
                let view = FrameView {
                    object: session.object(),
                    reticle: Some(&report.reticle),
                    ..Default::default()
                };
                self.renderer.render(&view)
            }
            Experience::Room { configurator, .. } => {
                let view = FrameView {
                    room: Some(&configurator.layout().room),
                    object: configurator.object(),
                    gizmo: configurator
                        .object()
                        .map(|_| configurator.axis_visibility()),
                    ..Default::default()
                };
                self.renderer.render(&view)
            }
        };

        if let Err(e) = result {
            error!("render failed: {}", e);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = match &self.load_error {
            Some(reason) => format!("stagehand - {}", reason),
            None => "stagehand".to_string(),
        };
        match event_loop.create_window(
            WindowAttributes::default()
                .with_title(title)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        ) {
            Ok(window) => {
                let (width, height): (u32, u32) = window.inner_size().into();
                self.screen_size = (width as f32, height as f32);
                if let Experience::Ar { session, surface } = &mut self.experience {
                    surface.resize(width, height);
                    session.begin_session(surface);
                }
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                error!("failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(key_code, event_loop),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.screen_size = (width as f32, height as f32);
                match &mut self.experience {
                    Experience::Ar { surface, .. } => surface.resize(width, height),
                    Experience::Room { camera, .. } => camera.resize_projection(width, height),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                if let Experience::Ar { surface, .. } = &mut self.experience {
                    surface.set_aim(Some((x, y)));
                }
                if let Some(touch) = self.mouse.cursor_moved(x, y) {
                    self.handle_touch(touch);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Experience::Ar { surface, .. } = &mut self.experience {
                    surface.set_aim(None);
                }
                if let Some(touch) = self.mouse.cursor_left() {
                    self.handle_touch(touch);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(touch) = self.mouse.button(state) {
                    self.handle_touch(touch);
                }
            }
            WindowEvent::Touch(touch) => {
                if touch.id == touch_input::MOUSE_TOUCH_ID && self.mouse.is_pressed() {
                    warn!("touch id {} collides with the emulated mouse contact", touch.id);
                }
                self.handle_touch(touch_input::from_winit(&touch));
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

/// World-space motion on the floor between two screen positions
fn floor_delta(
    camera: &ViewCamera,
    screen_size: (f32, f32),
    from: TouchPoint,
    to: TouchPoint,
) -> Option<Vector3<f32>> {
    let a = camera
        .screen_to_ray((from.x, from.y), screen_size)
        .intersect_horizontal_plane(FLOOR_Y)?;
    let b = camera
        .screen_to_ray((to.x, to.y), screen_size)
        .intersect_horizontal_plane(FLOOR_Y)?;
    Some(b - a)
}

fn digit_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Digit1 => Some(0),
        KeyCode::Digit2 => Some(1),
        KeyCode::Digit3 => Some(2),
        KeyCode::Digit4 => Some(3),
        KeyCode::Digit5 => Some(4),
        KeyCode::Digit6 => Some(5),
        _ => None,
    }
}
