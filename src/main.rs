use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use grid_snake::clock::TickClock;
use grid_snake::config::{Theme, FRAME_INTERVAL_MS, TICK_INTERVAL_MS, THEME_CLASSIC};
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::score::{load_max_score, save_max_score};
use grid_snake::theme::load_theme;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the RNG for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let theme = match load_theme() {
        Ok(theme) => theme,
        Err(error) => {
            eprintln!("Ignoring user theme: {error}");
            THEME_CLASSIC
        }
    };

    install_panic_hook();

    run(cli, theme)?;
    cleanup_terminal()?;
    Ok(())
}

fn run(cli: Cli, theme: Theme) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut input = InputHandler::new();

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };
    state.max_score = load_max_score();

    let mut clock = TickClock::new(Duration::from_millis(TICK_INTERVAL_MS), Instant::now());

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, &theme))?;

        let mut quit = false;
        while let Some(game_input) = input.poll_input()? {
            if matches!(game_input, GameInput::Quit) {
                quit = true;
                break;
            }

            state.apply_input(game_input);
        }
        if quit {
            break;
        }

        if clock.poll(Instant::now()) {
            let outcome = state.tick();
            if outcome.score_changed() {
                if let Err(error) = save_max_score(state.max_score) {
                    eprintln!("Failed to save max score: {error}");
                }
            }
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
