use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io::stdout, time::Duration};

use tswap::config::{Args, Cmd, Config};
use tswap::constants::FRAME_POLL;
use tswap::logging;

mod app;
mod input;
mod ui;

use app::App;
use input::handle_input;
use ui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;

    if let Some(path) = &config.log_file {
        logging::init_log_file(path)?;
        if config.verbose {
            logging::enable_verbose_logging();
        }
    }

    if let Some(Cmd::Simulate { moves }) = args.cmd {
        return simulate(&config, moves);
    }

    let mut app = App::new(config)?;

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup runs even when the game loop failed
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(FRAME_POLL))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if kind == KeyEventKind::Press {
                            app.reset()?;
                        }
                    }
                    _ => {
                        handle_input(app, code, kind)?;
                    }
                }
            }
        }

        app.update()?;
    }
    Ok(())
}

fn simulate(config: &Config, moves: u32) -> Result<(), Box<dyn std::error::Error>> {
    let report = tswap::game::simulate(config, moves)?;
    println!("moves:         {}", report.moves);
    println!("score:         {}", report.score);
    println!("longest chain: {}", report.longest_chain);
    Ok(())
}
