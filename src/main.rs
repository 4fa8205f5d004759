use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use gridlook::cli::CliArgs;
use gridlook::config::ViewerConfig;
use gridlook::theme::{load_theme, ViewerTheme};

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    gridlook::tracing::init();

    let args = CliArgs::parse();
    let startup = args.into_config().map_err(|e| anyhow::anyhow!(e))?;

    let config = ViewerConfig::load();
    let theme_id = startup.theme.as_deref().unwrap_or(&config.theme);
    let theme = load_theme(theme_id).unwrap_or_else(|e| {
        tracing::warn!("Falling back to the default theme: {}", e);
        ViewerTheme::default()
    });

    let event_loop = EventLoop::new()?;
    let mut app = App::new(800, 600, config, theme, startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
