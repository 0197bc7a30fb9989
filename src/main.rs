use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use partition::cli::CliArgs;

#[cfg(debug_assertions)]
mod debug_dump;
mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    partition::tracing::init();

    let startup_config = args.into_config().map_err(|e| anyhow::anyhow!(e))?;

    if startup_config.print_config {
        let yaml = startup_config
            .config
            .to_yaml()
            .map_err(|e| anyhow::anyhow!(e))?;
        print!("{}", yaml);
        return Ok(());
    }

    if startup_config.write_config {
        let path = startup_config
            .save_config()
            .map_err(|e| anyhow::anyhow!(e))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup_config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
