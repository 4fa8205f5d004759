//! End-to-end message flow tests
//!
//! Drives the model through `update` the way the runtime does and checks
//! the resulting state, commands, and status line.

mod common;

use common::{coordinate_image, solid, test_model, write_png};
use gridlook::commands::Cmd;
use gridlook::messages::{AppMsg, Msg, ViewerMsg};
use gridlook::model::StatusKind;
use gridlook::update::update;
use gridlook::viewport::PointerButton;
use tempfile::TempDir;

#[test]
fn test_open_image_fits_and_reports_size() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "wide.png", &solid(1600, 400));
    let mut model = test_model();

    let cmd = update(&mut model, Msg::open(&path));
    assert_eq!(cmd, Some(Cmd::redraw_with_status()));
    assert_eq!(model.viewport.transform().scale, 0.5);
    assert_eq!(model.status.text, "Image size: 1600x400");
    assert_eq!(model.status.kind, StatusKind::Info);
    assert_eq!(model.title(), "gridlook - Image size: 1600x400");
    assert_eq!(model.current_path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_failed_load_keeps_previous_image() {
    let dir = TempDir::new().unwrap();
    let good = write_png(dir.path(), "good.png", &coordinate_image(10, 5));
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, b"\x89PNG broken").unwrap();
    let mut model = test_model();

    update(&mut model, Msg::open(&good));
    update(&mut model, Msg::wheel(1.0, 100.0, 100.0));
    let transform = model.viewport.transform();

    let cmd = update(&mut model, Msg::open(&bad));
    assert_eq!(cmd, Some(Cmd::UpdateTitle));
    assert_eq!(model.viewport.image(), Some(&coordinate_image(10, 5)));
    assert_eq!(model.viewport.transform(), transform);
    assert_eq!(model.viewport.zoom_steps(), 1);
    assert_eq!(model.status.kind, StatusKind::Error);
    assert_eq!(model.current_path.as_deref(), Some(good.as_path()));
}

#[test]
fn test_wheel_and_pan_messages() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(800, 600));
    let mut model = test_model();
    update(&mut model, Msg::open(&path));

    assert_eq!(
        update(&mut model, Msg::wheel(1.0, 0.0, 0.0)),
        Some(Cmd::Redraw)
    );
    assert_eq!(model.viewport.zoom_steps(), 1);

    let down = ViewerMsg::PointerDown {
        button: PointerButton::Middle,
        x: 50.0,
        y: 50.0,
    };
    assert_eq!(update(&mut model, Msg::Viewer(down)), None);
    assert_eq!(
        update(
            &mut model,
            Msg::Viewer(ViewerMsg::PointerMove { x: 40.0, y: 45.0 })
        ),
        Some(Cmd::Redraw)
    );
    assert_eq!(model.viewport.transform().offset_x, 10.0);
    assert_eq!(model.viewport.transform().offset_y, 5.0);

    let up = ViewerMsg::PointerUp {
        button: PointerButton::Middle,
    };
    update(&mut model, Msg::Viewer(up.clone()));
    update(&mut model, Msg::Viewer(up));
    assert!(!model.viewport.is_panning());

    assert_eq!(
        update(&mut model, Msg::Viewer(ViewerMsg::FitToWindow)),
        Some(Cmd::Redraw)
    );
    assert_eq!(model.viewport.zoom_steps(), 0);
    assert_eq!(model.viewport.transform().offset_x, 0.0);
}

#[test]
fn test_zoom_out_at_fit_requests_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(80, 60));
    let mut model = test_model();
    update(&mut model, Msg::open(&path));

    assert_eq!(update(&mut model, Msg::wheel(-1.0, 5.0, 5.0)), None);
}

#[test]
fn test_resize_refits() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(400, 1600));
    let mut model = test_model();
    update(&mut model, Msg::open(&path));
    update(&mut model, Msg::wheel(1.0, 10.0, 10.0));

    update(&mut model, Msg::resize(800, 800));
    assert_eq!(model.window_size, (800, 800));
    assert_eq!(model.viewport.transform().scale, 0.5);
    assert_eq!(model.viewport.zoom_steps(), 0);
}

#[test]
fn test_empty_model_ignores_viewer_input() {
    let mut model = test_model();
    assert_eq!(update(&mut model, Msg::wheel(1.0, 1.0, 1.0)), None);
    assert_eq!(update(&mut model, Msg::Viewer(ViewerMsg::ToggleGrid)), None);
    assert_eq!(update(&mut model, Msg::Viewer(ViewerMsg::FitToWindow)), None);
    assert!(!model.viewport.show_grid());
    assert!(model.status.is_empty());
}

#[test]
fn test_toggle_grid_message() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(10, 10));
    let mut model = test_model();
    update(&mut model, Msg::open(&path));

    assert_eq!(
        update(&mut model, Msg::Viewer(ViewerMsg::ToggleGrid)),
        Some(Cmd::Redraw)
    );
    assert!(model.viewport.show_grid());
}

#[test]
fn test_grid_after_load_applies_once() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(10, 10));
    let mut model = test_model();
    model.grid_after_load = true;

    update(&mut model, Msg::open(&path));
    assert!(model.viewport.show_grid());
    assert!(!model.grid_after_load);

    update(&mut model, Msg::Viewer(ViewerMsg::ToggleGrid));
    update(&mut model, Msg::open(&path));
    assert!(!model.viewport.show_grid());
}

#[test]
fn test_config_grid_on_every_load() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(10, 10));
    let mut model = test_model();
    model.config.show_grid_on_load = true;

    update(&mut model, Msg::open(&path));
    update(&mut model, Msg::Viewer(ViewerMsg::ToggleGrid));
    assert!(!model.viewport.show_grid());

    update(&mut model, Msg::open(&path));
    assert!(model.viewport.show_grid());
}

#[test]
fn test_save_dialog_without_image() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::App(AppMsg::SaveFileDialog));
    assert_eq!(cmd, Some(Cmd::UpdateTitle));
    assert_eq!(model.status.kind, StatusKind::Error);
}

#[test]
fn test_dialogs_suggest_current_location() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(10, 10));
    let mut model = test_model();
    update(&mut model, Msg::open(&path));

    assert_eq!(
        update(&mut model, Msg::App(AppMsg::SaveFileDialog)),
        Some(Cmd::ShowSaveFileDialog {
            suggested_path: Some(path.clone())
        })
    );
    assert_eq!(
        update(&mut model, Msg::App(AppMsg::OpenFileDialog)),
        Some(Cmd::ShowOpenFileDialog {
            start_dir: Some(dir.path().to_path_buf())
        })
    );
}

#[test]
fn test_dialog_results() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &coordinate_image(3, 3));
    let mut model = test_model();

    assert_eq!(
        update(
            &mut model,
            Msg::App(AppMsg::OpenFileDialogResult { path: None })
        ),
        None
    );
    assert!(!model.viewport.has_image());

    update(
        &mut model,
        Msg::App(AppMsg::OpenFileDialogResult {
            path: Some(path.clone()),
        }),
    );
    assert!(model.viewport.has_image());

    let out = dir.path().join("copy.png");
    update(
        &mut model,
        Msg::App(AppMsg::SaveFileDialogResult {
            path: Some(out.clone()),
        }),
    );
    assert!(out.exists());
    assert_eq!(model.status.kind, StatusKind::Info);
    assert!(model.status.text.contains("copy.png"));

    assert_eq!(
        update(
            &mut model,
            Msg::App(AppMsg::SaveFileDialogResult { path: None })
        ),
        None
    );
}

#[test]
fn test_save_failure_reports_error() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "a.png", &solid(3, 3));
    let mut model = test_model();
    update(&mut model, Msg::open(&path));

    let out = dir.path().join("no").join("such").join("dir.png");
    update(&mut model, Msg::App(AppMsg::SaveImage(out)));
    assert_eq!(model.status.kind, StatusKind::Error);
    assert!(model.viewport.has_image());
}

#[test]
fn test_quit() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::App(AppMsg::Quit)).unwrap();
    assert!(cmd.is_quit());
}
