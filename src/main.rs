use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use gridsnake::config::{GRID, THEME_CLASSIC};
use gridsnake::error::HostError;
use gridsnake::game::GameEngine;
use gridsnake::input::{map_key_event, GameInput};
use gridsnake::renderer;
use gridsnake::ui::hud::HudInfo;

/// How long one input poll blocks before the loop checks the tick clock.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(about = "Classic single-player grid snake in the terminal")]
struct Cli {
    /// Seed the food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a session log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), HostError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(LevelFilter::Info, LogConfig::default(), File::create(path)?)?;
    }
    info!("starting session");

    install_panic_hook();

    let engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(GRID, seed),
        None => GameEngine::new(),
    };

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, engine);
    cleanup_terminal()?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut engine: GameEngine,
) -> Result<(), HostError> {
    let mut last_tick = Instant::now();

    loop {
        let snapshot = engine.snapshot();
        terminal.draw(|frame| {
            renderer::render(
                frame,
                &snapshot,
                engine.bounds(),
                &HudInfo {
                    high_score: engine.high_score(),
                    show_high_score: engine.runs_completed() > 0,
                    running: engine.is_running(),
                    theme: &THEME_CLASSIC,
                },
            )
        })?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                match map_key_event(key) {
                    Some(GameInput::Quit) => break,
                    Some(GameInput::Start) if !engine.is_running() => {
                        engine.start();
                        last_tick = Instant::now();
                        info!("run started");
                    }
                    Some(GameInput::Direction(direction)) => engine.set_direction(direction),
                    Some(GameInput::Start) | None => {}
                }
            }
        }

        // The interval is re-read every cycle so a meal's speed-up takes
        // effect on the very next tick.
        let interval = Duration::from_millis(engine.current_interval_ms());
        if engine.is_running() && last_tick.elapsed() >= interval {
            let score_before = engine.score();
            let high_before = engine.high_score();
            engine.tick();
            last_tick = Instant::now();

            if !engine.is_running() {
                info!("run ended at score {score_before}");
                if engine.high_score() > high_before {
                    info!("new high score {}", engine.high_score());
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, HostError> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn cleanup_terminal() -> Result<(), HostError> {
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
