use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use sidepanel::cli::CliArgs;

#[cfg(debug_assertions)]
mod debug_dump;
mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    sidepanel::tracing::init();

    let config_path = args.config_path();
    let write_config = args.write_config;
    let base = args.load_config();
    let config = args
        .into_config(base)
        .map_err(anyhow::Error::msg)
        .context("Invalid command-line arguments")?;

    if write_config {
        let path = config_path.context("No config directory available")?;
        config.save_to(&path).map_err(anyhow::Error::msg)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    tracing::info!(
        breakpoint_px = config.disclosure.breakpoint_px,
        provide_toggle = config.page.provide_toggle,
        "Starting side panel demo"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
