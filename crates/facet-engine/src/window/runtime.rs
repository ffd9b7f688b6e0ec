use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputFrame, InputState, Key, MouseButton, PressPhase};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "facet".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime: one window, one GPU context, one app.
pub struct Runtime;

impl Runtime {
    /// Blocks on the platform event loop until the app exits or the window
    /// closes. Window and GPU setup errors surface here rather than panicking
    /// inside the loop.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("creating the winit event loop")?;
        let mut host = Host::new(config, gpu_init, app);

        event_loop.run_app(&mut host).context("event loop failed")?;

        host.startup_error.map_or(Ok(()), Err)
    }
}

// The surface inside `Gpu<'w>` borrows the window it presents to, so the
// window and its GPU context live together in one self-referencing value.
#[self_referencing]
struct Display {
    input: InputState,
    deltas: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// winit `ApplicationHandler` driving a single [`Display`] and the app.
struct Host<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    display: Option<Display>,
    display_id: Option<WindowId>,
    wants_exit: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A: App + 'static> Host<A> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            display: None,
            display_id: None,
            wants_exit: false,
            startup_error: None,
        }
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.wants_exit = true;
        event_loop.exit();
    }

    fn open_display(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(self.config.title.clone())
                    .with_inner_size(self.config.initial_size),
            )
            .context("opening the window")?;
        self.display_id = Some(window.id());

        let gpu_init = self.gpu_init.clone();
        self.display = Some(
            DisplayTryBuilder {
                input: InputState::default(),
                deltas: InputFrame::default(),
                clock: FrameClock::new(),
                window,
                gpu_builder: |w| {
                    pollster::block_on(Gpu::new(w, gpu_init)).context("initializing the GPU")
                },
            }
            .try_build()?,
        );
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(display) = &mut self.display else { return };
        let app = &mut self.app;

        let mut verdict = AppControl::Continue;
        display.with_mut(|d| {
            let time = d.clock.tick();
            verdict = app.on_frame(&mut FrameCtx {
                window: WindowCtx { window: d.window },
                gpu: d.gpu,
                input: d.input,
                input_frame: d.deltas,
                time,
            });
            // Transitions were consumed by the frame above.
            d.deltas.clear();
        });

        if verdict == AppControl::Exit {
            self.shut_down(event_loop);
        }
    }

    fn resize_surface(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(display) = &mut self.display {
            display.with_gpu_mut(|gpu| gpu.resize(size));
            display.with_window(|w| w.request_redraw());
        }
    }
}

impl<A: App + 'static> ApplicationHandler for Host<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }
        match self.open_display(event_loop) {
            Ok(()) => {
                if let Some(display) = &self.display {
                    display.with_window(|w| w.request_redraw());
                }
            }
            Err(e) => {
                log::error!("startup failed: {e:#}");
                self.startup_error = Some(e);
                self.shut_down(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.wants_exit {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; the pages are cheap to re-record.
        if let Some(display) = &self.display {
            display.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.wants_exit || Some(window_id) != self.display_id {
            return;
        }

        // Split borrows so the ouroboros closure does not capture `self`.
        let (app, display) = (&mut self.app, &mut self.display);
        let Some(display) = display else { return };

        let mut verdict = AppControl::Continue;
        display.with_mut(|d| {
            if let Some(ev) = input_event_from_winit(d.window, d.input, &event) {
                d.input.apply_event(d.deltas, ev);
            }
            verdict = app.on_window_event(&event);
        });
        if verdict == AppControl::Exit {
            self.shut_down(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.display = None;
                self.shut_down(event_loop);
            }
            WindowEvent::Resized(size) => self.resize_surface(size),
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(display) = &self.display {
                    let size = display.with_window(|w| w.inner_size());
                    self.resize_surface(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

fn input_event_from_winit(
    window: &Window,
    input: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),
        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = cursor_in_logical_px(window, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state, button, .. } => {
            // Button events carry no position; use the last pointer move.
            let (x, y) = input.pointer_pos.unwrap_or((0.0, 0.0));
            Some(InputEvent::PointerButton {
                button: button_of(*button),
                phase: phase_of(*state),
                x,
                y,
            })
        }

        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: key_of(event.physical_key),
            phase: phase_of(event.state),
            repeat: event.repeat,
        }),

        _ => None,
    }
}

fn phase_of(s: ElementState) -> PressPhase {
    match s {
        ElementState::Pressed => PressPhase::Pressed,
        ElementState::Released => PressPhase::Released,
    }
}

fn cursor_in_logical_px(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn button_of(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn key_of(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::KeyR => Key::R,
        KeyCode::Digit1 => Key::Digit(1),
        KeyCode::Digit2 => Key::Digit(2),
        KeyCode::Digit3 => Key::Digit(3),
        KeyCode::Digit4 => Key::Digit(4),
        KeyCode::Digit5 => Key::Digit(5),
        KeyCode::Digit6 => Key::Digit(6),
        KeyCode::Digit7 => Key::Digit(7),
        KeyCode::Digit8 => Key::Digit(8),
        KeyCode::Digit9 => Key::Digit(9),
        other => Key::Unknown(other as u32),
    }
}
