mod app;
mod engine;
mod renderer;
mod sim;

use app::App;
use clap::Parser;
use engine::window::GameWindow;

#[derive(Parser)]
#[command(name = "hoverx", about = "Steering and wall-reflection debug demo")]
struct Args {
    /// Draw the wall, normal, projected, incident, and reflected vectors
    #[arg(long)]
    diagnostics: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let sdl = sdl2::init().expect("Failed to init SDL2");
    let window = GameWindow::new(&sdl, "HoverX!", 640, 480);
    log::info!("hoverx started (diagnostics: {})", args.diagnostics);

    let mut app = App::new(args.diagnostics);
    app.run(&sdl, &window);
}
