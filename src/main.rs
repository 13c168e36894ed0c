// sortty: step-by-step sorting algorithm visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use sortty::config;
use sortty::controller::Controller;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match config::load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sortty::logging::init(&settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let bounds = settings.size_bounds()?;
    let rng = match settings.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    info!(
        algorithm = %settings.algorithm,
        array_size = settings.array_size,
        seed = ?settings.seed,
        "starting"
    );

    let controller = Controller::new(bounds, rng);
    let mut app = App::new(controller, &settings);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("exiting");
    Ok(())
}
