use clap::Parser;

use mandelbrot_explorer::{RunViewerCommand, ViewerArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = ViewerArgs::parse().into_options()?;
    RunViewerCommand::new(options).execute()?;

    Ok(())
}
