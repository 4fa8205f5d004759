//! winit input translation
//!
//! Maps raw winit events to plain messages so the viewport never sees a
//! windowing type. Only the mapping lives here; the runtime decides when
//! to call it.

use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::Key;

use crate::messages::{AppMsg, Msg, ViewerMsg};
use crate::viewport::PointerButton;

/// Map a winit mouse button to the buttons the controller distinguishes
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Right,
        _ => PointerButton::Other,
    }
}

/// Signed wheel amount; positive means the wheel rolled forward (away from
/// the user). Only the sign is used for zooming.
pub fn wheel_delta(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y as f64,
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    }
}

/// Map a key press to a message
///
/// `command` is Ctrl on Linux/Windows and Cmd on macOS.
pub fn key_to_msg(key: &Key, command: bool) -> Option<Msg> {
    let Key::Character(ch) = key else {
        return None;
    };

    match (ch.to_lowercase().as_str(), command) {
        ("o", true) => Some(Msg::App(AppMsg::OpenFileDialog)),
        ("s", true) => Some(Msg::App(AppMsg::SaveFileDialog)),
        ("q", true) => Some(Msg::App(AppMsg::Quit)),
        ("g", false) => Some(Msg::Viewer(ViewerMsg::ToggleGrid)),
        ("f", false) => Some(Msg::Viewer(ViewerMsg::FitToWindow)),
        _ => None,
    }
}
