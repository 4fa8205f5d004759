//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod viewer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use viewer::update_viewer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Viewer(m) => viewer::update_viewer(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status(model);
    result
}

/// Move queued viewport events into the status line
fn sync_status(model: &mut AppModel) {
    for event in model.viewport.take_events() {
        tracing::info!("{}", event);
        model.status.info(event.to_string());
    }
}

/// Traced update wrapper (debug builds only)
///
/// Pointer motion is too chatty to log on every event.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::ViewerMsg;

    let is_noisy = matches!(&msg, Msg::Viewer(ViewerMsg::PointerMove { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = model.viewport.transform();
    let result = update_inner(model, msg);
    let after = model.viewport.transform();

    if before != after {
        debug!(
            target: "transform",
            scale = after.scale,
            offset_x = after.offset_x,
            offset_y = after.offset_y,
            steps = model.viewport.zoom_steps(),
            "transform changed"
        );
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Viewer::Wheel { delta: 1.0, x: 10.0, y: 10.0 }`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Viewer(m) => format!("Viewer::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
