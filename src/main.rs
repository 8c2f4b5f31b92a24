mod build_info;
mod config;
mod games;
mod input;
mod menu;
mod scores;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Settings;
use games::ActiveGame;
use input::{handle_game_key, handle_menu_key};
use menu::{MenuAction, MenuState};
use scores::{ScoreLog, SessionRecord};

/// Input poll timeout per frame (~60 FPS).
const FRAME_MS: u64 = 16;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut settings_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!(
                    "parlor {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Parlor - Terminal Reflex Arcade\n");
                println!("Usage: parlor [options]\n");
                println!("Options:");
                println!("  --settings <path>  Load tuning from a settings.json");
                println!("  --version          Show version information");
                println!("  --help             Show this help message");
                return Ok(());
            }
            "--settings" => {
                i += 1;
                match args.get(i) {
                    Some(path) => settings_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("--settings requires a path");
                        std::process::exit(2);
                    }
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'parlor --help' for usage.");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    // A bad settings file is fatal, reported before the terminal is touched
    let settings = match Settings::load_or_default(settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("parlor: settings error: {}", e);
            std::process::exit(1);
        }
    };

    let score_log = ScoreLog::new()?;
    let mut records = score_log.load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut menu_state = MenuState::new();
    let mut active: Option<ActiveGame> = None;
    let mut last_frame = Instant::now();

    // Main loop: draw, advance the active game by elapsed time, poll input
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match &active {
                Some(game) => ui::render_game(frame, area, game),
                None => ui::menu_scene::render_menu_scene(frame, area, &menu_state, &records),
            }
        })?;

        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        if let Some(game) = active.as_mut() {
            game.tick(dt_ms, &mut rng);
        }

        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match active.as_mut() {
                    Some(game) => {
                        if game.is_over() {
                            // Any key dismisses the result screen; record the
                            // session on the way out. The log is best-effort.
                            if let Some(summary) = game.summary() {
                                let record = SessionRecord::from_summary(&summary);
                                let _ = score_log.append(&record);
                                records.push(record);
                            }
                            active = None;
                        } else {
                            handle_game_key(key_event.code, game, &mut rng);
                        }
                    }
                    None => match handle_menu_key(key_event.code, &mut menu_state) {
                        Some(MenuAction::Launch(kind, difficulty)) => {
                            active =
                                Some(ActiveGame::start(kind, difficulty, &settings, &mut rng));
                        }
                        Some(MenuAction::Quit) => break,
                        None => {}
                    },
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
