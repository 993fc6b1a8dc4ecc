use std::path::Path;

use blockview::{gfx::scene::loader::load_blocks, ViewerApp, ViewerError};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("ERROR: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run() -> Result<(), ViewerError> {
    let path = std::env::args_os()
        .nth(1)
        .ok_or(ViewerError::MissingArgument)?;

    let blocks = load_blocks(Path::new(&path))?;
    let app = ViewerApp::new(blocks)?;
    app.run()
}
