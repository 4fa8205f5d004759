//! App message handlers (file operations, window events)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::image::load_image;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::viewport::ViewportSize;

/// Handle app messages (file operations, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            model.viewport.on_resize(ViewportSize::new(width, height));
            Some(Cmd::Redraw)
        }

        AppMsg::OpenImage(path) => open_image(model, path),

        AppMsg::SaveImage(path) => {
            match model
                .viewport
                .save_current_image(&path, model.config.save_format)
            {
                Ok(_) => model.status.info(format!("Saved: {}", path.display())),
                Err(e) => {
                    tracing::warn!("Failed to save {}: {}", path.display(), e);
                    model.status.error(e.to_string());
                }
            }
            Some(Cmd::UpdateTitle)
        }

        AppMsg::Quit => Some(Cmd::Quit),

        AppMsg::OpenFileDialog => {
            let start_dir = model
                .current_path
                .as_ref()
                .and_then(|p| p.parent())
                .map(|p| p.to_path_buf());
            Some(Cmd::ShowOpenFileDialog { start_dir })
        }

        AppMsg::OpenFileDialogResult { path } => match path {
            Some(path) => open_image(model, path),
            None => None,
        },

        AppMsg::SaveFileDialog => {
            if !model.viewport.has_image() {
                model.status.error("No image to save");
                return Some(Cmd::UpdateTitle);
            }
            Some(Cmd::ShowSaveFileDialog {
                suggested_path: model.current_path.clone(),
            })
        }

        AppMsg::SaveFileDialogResult { path } => {
            path.and_then(|path| update_app(model, AppMsg::SaveImage(path)))
        }
    }
}

/// Decode `path` and hand it to the viewport. A failed decode leaves the
/// previous image on screen.
fn open_image(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    match load_image(&path) {
        Ok(buffer) => {
            model.viewport.load_image(buffer);
            model.current_path = Some(path);

            let want_grid = model.grid_after_load || model.config.show_grid_on_load;
            if want_grid && !model.viewport.show_grid() {
                model.viewport.toggle_grid();
            }
            model.grid_after_load = false;

            Some(Cmd::redraw_with_status())
        }
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", path.display(), e);
            model.status.error(e.to_string());
            Some(Cmd::UpdateTitle)
        }
    }
}
