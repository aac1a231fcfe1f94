use std::{fs::File, io, sync::Mutex};

use spong::{
    audio::Mixer,
    cli,
    config::PRG_NAME,
    keyboard::Keyboard,
    round::{play_match, Platform, SleepTimer},
    screen::Screen,
    Config, Game,
};
use tracing_subscriber::EnvFilter;

struct App {
    config: Config,
    game: Game,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            game: config.new_game(),
            config,
        }
    }

    fn run(&mut self, terminal: ratatui::DefaultTerminal) -> io::Result<()> {
        let rules = self.config.rules();
        let mut input = Keyboard::new()?;
        let mut display = Screen::new(terminal, &rules);
        let mut audio = Mixer::new(self.game.sound_enabled);
        let mut timer = SleepTimer;

        let mut platform = Platform {
            input: &mut input,
            display: &mut display,
            audio: &mut audio,
            timer: &mut timer,
        };
        play_match(&mut self.game, &rules, &mut platform, &mut rand::rng())
    }
}

/// Logs go to the file named by `SPONG_LOG`, never to the terminal the game
/// is drawn on.
fn init_tracing() {
    let Some(path) = std::env::var_os("SPONG_LOG") else {
        return;
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{PRG_NAME}: warning: cannot open log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> io::Result<()> {
    init_tracing();
    let config = cli::parse_config();
    tracing::info!(?config, "starting");

    let mut app = App::new(config);
    let terminal = ratatui::init();
    let app_result = app.run(terminal);
    ratatui::restore();

    match &app_result {
        Ok(()) => {
            println!("Thanks for playing {PRG_NAME}!");
            println!("Final Score: {} - {}", app.game.points.0, app.game.points.1);
        }
        Err(e) => {
            eprintln!("Game ended with error: {}", e);
        }
    }

    app_result
}
