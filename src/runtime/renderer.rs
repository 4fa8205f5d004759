//! softbuffer-backed renderer
//!
//! Owns the window surface and draws the model into it every frame.

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::{Context, Surface};
use winit::window::Window;

use gridlook::model::AppModel;
use gridlook::view::{Frame, Rect};

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        Ok(Self {
            surface,
            // Sized lazily on the first frame
            width: 0,
            height: 0,
        })
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window_size;
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            // Minimized
            return Ok(());
        };

        if self.width != width || self.height != height {
            self.surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
            self.width = width;
            self.height = height;
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            let area = Rect::new(0.0, 0.0, width as f32, height as f32);
            model.viewport.render(&mut frame, area, &model.theme);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}
