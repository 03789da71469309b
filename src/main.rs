use clap::Parser;
use mandelbrot_explorer::{StaticArgs, StaticRenderController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = StaticArgs::parse();
    let mut controller = StaticRenderController::new(args.render_config()?, args.presenters())?;

    controller.generate()?;
    let written = controller.write(&args.output)?;
    let names: Vec<String> = written.iter().map(|path| path.display().to_string()).collect();
    println!("Mandelbrot set image saved as {}", names.join(" and "));

    Ok(())
}
