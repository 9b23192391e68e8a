use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use log::{debug, info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use skyhop::build_info;
use skyhop::input::{map_key, KeyAction};
use skyhop::ui::draw_ui;
use skyhop::{logging, GameConfig, GameController, REALTIME_FRAME_MS};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--init-config" => {
                let path = GameConfig::default_path()?;
                if GameConfig::write_default(&path)? {
                    println!("Wrote default settings to {}", path.display());
                } else {
                    println!("{} already exists, left unchanged", path.display());
                }
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyhop - dodge the pipes\n");
                println!("Usage: skyhop [option]\n");
                println!("Options:");
                println!("  --init-config  Write default settings to ~/.skyhop/config.json");
                println!("  --version      Show version information");
                println!("  --help         Show this help message\n");
                println!("Keys: Space jumps (and starts), Esc or q quits.");
                println!("Settings: ~/.skyhop/config.json, log: ~/.skyhop/skyhop.log");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyhop --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let (config, config_problem) = GameConfig::load_or_default();
    if let Err(e) = logging::init_log(config.log_level_filter()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    info!("{} starting", build_info::version_line());
    if let Some(problem) = config_problem {
        warn!("using default settings, ignoring {}", problem);
    }
    debug!("config: {:?}", config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, GameController::new(config));

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(cursor::Show)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    if let Err(ref e) = result {
        log::error!("terminal loop failed: {}", e);
    }
    info!("exiting");
    result
}

/// Frame loop: drain input, advance one frame, draw, then wait for the next
/// frame slot.
fn run<B: Backend>(terminal: &mut Terminal<B>, mut game: GameController) -> io::Result<()> {
    let clock = Instant::now();
    let frame_time = Duration::from_millis(REALTIME_FRAME_MS);
    let mut rng = rand::thread_rng();

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(KeyAction::Quit) => return Ok(()),
                    Some(KeyAction::Game(input)) => game.handle_input(input),
                    None => {}
                }
            }
        }

        let now_ms = clock.elapsed().as_millis() as u64;
        let frame = game.run_frame(now_ms, &mut rng);
        if frame.ran && (frame.spawned || frame.scored > 0 || frame.collided) {
            debug!(
                "t={}ms delta={:?} spawned={} scored={} pruned={} collided={}",
                now_ms, frame.delta_ms, frame.spawned, frame.scored, frame.pruned, frame.collided
            );
        }

        let snapshot = game.snapshot();
        terminal.draw(|f| draw_ui(f, &snapshot))?;

        if let Some(wait) = frame_time.checked_sub(frame_start.elapsed()) {
            thread::sleep(wait);
        }
    }
}
