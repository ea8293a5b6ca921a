use std::io;

use dual_sssp::config::MenuConfig;
use dual_sssp::menu::Menu;
use dual_sssp::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = MenuConfig::from_env()?;
    let session = match config.seed {
        Some(seed) => Session::seeded(seed),
        None => Session::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(session, config, stdin.lock(), stdout.lock());
    menu.run()?;

    Ok(())
}
