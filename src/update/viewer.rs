//! Viewport message handlers
//!
//! Translates `ViewerMsg` into controller calls. Only transitions that
//! changed what is on screen request a redraw.

use crate::commands::Cmd;
use crate::messages::ViewerMsg;
use crate::model::AppModel;
use crate::viewport::Point;

pub fn update_viewer(model: &mut AppModel, msg: ViewerMsg) -> Option<Cmd> {
    let viewport = &mut model.viewport;

    let changed = match msg {
        ViewerMsg::Wheel { delta, x, y } => viewport.on_wheel(delta, Point::new(x, y)),

        ViewerMsg::PointerDown { button, x, y } => {
            viewport.on_pointer_down(button, Point::new(x, y));
            false
        }

        ViewerMsg::PointerMove { x, y } => viewport.on_pointer_move(Point::new(x, y)),

        ViewerMsg::PointerUp { button } => {
            viewport.on_pointer_up(button);
            false
        }

        ViewerMsg::ToggleGrid => {
            if !viewport.has_image() {
                return None;
            }
            let on = viewport.toggle_grid();
            tracing::debug!(on, "grid toggled");
            true
        }

        ViewerMsg::FitToWindow => viewport.fit_to_window(),
    };

    changed.then_some(Cmd::Redraw)
}
