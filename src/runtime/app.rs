use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window, WindowId};

use gridlook::cli::StartupConfig;
use gridlook::commands::Cmd;
use gridlook::config::ViewerConfig;
use gridlook::input::{key_to_msg, pointer_button, wheel_delta};
use gridlook::messages::{AppMsg, Msg, ViewerMsg};
use gridlook::model::AppModel;
use gridlook::theme::ViewerTheme;
use gridlook::update::update;

use super::renderer::Renderer;

/// How often the loop wakes to collect dialog results
const ASYNC_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: (f64, f64),
    startup_image: Option<std::path::PathBuf>,
    quit_requested: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(
        window_width: u32,
        window_height: u32,
        config: ViewerConfig,
        theme: ViewerTheme,
        startup: StartupConfig,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        let mut model = AppModel::new(window_width, window_height, config, theme);
        model.grid_after_load = startup.show_grid;

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: (0.0, 0.0),
            startup_image: startup.image,
            quit_requested: false,
            msg_tx,
            msg_rx,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.model.window_size;
        let window_attributes = Window::default_attributes()
            .with_title(self.model.title())
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        // The physical size can differ from the logical request on HiDPI
        let size = window.inner_size();
        update(&mut self.model, Msg::resize(size.width, size.height));

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                update(&mut self.model, Msg::resize(size.width, size.height))
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let command = self.modifiers.control_key() || self.modifiers.super_key();
                let msg = key_to_msg(&event.logical_key, command)?;
                update(&mut self.model, msg)
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = (position.x, position.y);
                update(
                    &mut self.model,
                    Msg::Viewer(ViewerMsg::PointerMove {
                        x: position.x,
                        y: position.y,
                    }),
                )
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button);
                let (x, y) = self.mouse_position;
                let msg = match state {
                    ElementState::Pressed => ViewerMsg::PointerDown { button, x, y },
                    ElementState::Released => ViewerMsg::PointerUp { button },
                };
                let cmd = update(&mut self.model, Msg::Viewer(msg));
                self.update_cursor_icon();
                cmd
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = self.mouse_position;
                update(&mut self.model, Msg::wheel(wheel_delta(delta), x, y))
            }
            WindowEvent::DroppedFile(path) => update(&mut self.model, Msg::open(path.clone())),
            _ => None,
        }
    }

    fn update_cursor_icon(&self) {
        let Some(window) = &self.window else { return };
        let icon = if self.model.viewport.is_panning() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Default
        };
        window.set_cursor(icon);
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.is_quit() {
            self.quit_requested = true;
        }
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Cmd::UpdateTitle => {
                if let Some(window) = &self.window {
                    window.set_title(&self.model.title());
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }

            // =====================================================================
            // File Dialogs (using rfd)
            // =====================================================================
            Cmd::ShowOpenFileDialog { start_dir } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let mut dlg = rfd::FileDialog::new()
                        .add_filter("Images", gridlook::image::IMAGE_EXTENSIONS);
                    if let Some(dir) = start_dir {
                        dlg = dlg.set_directory(dir);
                    }

                    let path = dlg.pick_file();
                    let _ = tx.send(Msg::App(AppMsg::OpenFileDialogResult { path }));
                });
            }

            Cmd::ShowSaveFileDialog { suggested_path } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let mut dlg = rfd::FileDialog::new();
                    if let Some(ref path) = suggested_path {
                        if let Some(dir) = path.parent() {
                            dlg = dlg.set_directory(dir);
                        }
                        if let Some(name) = path.file_name() {
                            dlg = dlg.set_file_name(name.to_string_lossy());
                        }
                    }

                    let path = dlg.save_file();
                    let _ = tx.send(Msg::App(AppMsg::SaveFileDialogResult { path }));
                });
            }

            Cmd::Quit => {}
        }
    }

    fn process_async_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to create window: {}", e);
            event_loop.exit();
            return;
        }

        if let Some(path) = self.startup_image.take() {
            if let Some(cmd) = update(&mut self.model, Msg::open(path)) {
                self.process_cmd(cmd);
            }
        }
        self.process_cmd(Cmd::redraw_with_status());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !ours {
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            self.process_cmd(cmd);
        }

        if self.quit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            Instant::now() + ASYNC_POLL_INTERVAL,
        ));

        self.process_async_messages();

        if self.quit_requested {
            event_loop.exit();
        }
    }
}
