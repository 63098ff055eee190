use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info::version_line;
use flappy::clock::FrameClock;
use flappy::core::constants::REALTIME_FRAME_MS;
use flappy::flight::{process_tap, process_tick, FlightEvent, FlightSession};
use flappy::input::{map_event, AppAction};
use flappy::ui::draw_ui;
use flappy::utils::logging::init_file_logging;
use flappy::utils::persistence::{load_config, save_config};
use flappy::FlightConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(about = "Flappy Bird in your terminal", long_about = None, disable_version_flag = true)]
struct Cli {
    /// Tuning file (defaults to ~/.flappy/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the gap offsets, for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the viewport width in px
    #[arg(long)]
    width: Option<f64>,

    /// Override the viewport height in px
    #[arg(long)]
    height: Option<f64>,

    /// Write the effective config as JSON and exit
    #[arg(long)]
    write_config: bool,

    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    let (mut config, config_error) = match load_config(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (FlightConfig::default(), Some(e)),
    };
    if let Some(width) = cli.width {
        config.viewport_width = width;
    }
    if let Some(height) = cli.height {
        config.viewport_height = height;
    }
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if cli.write_config {
        let path = save_config(cli.config.as_deref(), &config)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    let log_path = init_file_logging(&config.log_level)?;
    info!(version = %version_line(), log = %log_path.display(), "starting");
    if let Some(e) = config_error {
        warn!(error = %e, "could not load config, using defaults");
    }

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut session = FlightSession::new(config);
    info!(
        width = session.viewport.width,
        height = session.viewport.height,
        seed = ?cli.seed,
        "session created"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut session, &mut rng);

    // Restore the terminal whatever happened in the loop
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        warn!(error = %e, "game loop failed");
    }
    info!(score = session.score, "exiting");
    result
}

/// Frame loop: draw, drain input, tick.
fn run(terminal: &mut Tui, session: &mut FlightSession, rng: &mut ChaCha8Rng) -> io::Result<()> {
    let mut clock = FrameClock::default();
    let frame = Duration::from_millis(REALTIME_FRAME_MS);

    loop {
        terminal.draw(|f| draw_ui(f, session))?;

        if event::poll(frame)? {
            loop {
                match map_event(&event::read()?) {
                    AppAction::Tap => log_events(&process_tap(session)),
                    AppAction::Quit => return Ok(()),
                    AppAction::None => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let result = process_tick(session, clock.tick(), rng);
        log_events(&result.events);
    }
}

fn log_events(events: &[FlightEvent]) {
    for event in events {
        match event {
            FlightEvent::Started => info!("round started"),
            FlightEvent::Flapped { velocity } => debug!(velocity, "flap"),
            FlightEvent::PipePassed { score } => info!(score, "pipe passed"),
            FlightEvent::PipeRecycled {
                gap_offset,
                speed_multiplier,
            } => debug!(gap_offset, speed_multiplier, "pipe recycled"),
            FlightEvent::Crashed { cause, score } => info!(?cause, score, "crashed"),
            FlightEvent::Restarted => info!("round restarted"),
        }
    }
}
