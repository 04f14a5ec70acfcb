//! Runs one match game between Bob and Alice and prints the winner.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use snap::{GameOptions, MatchGame, Player, Players};

fn init_logging() {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    // Logs go to stderr so stdout carries only the result.
    if TermLogger::init(
        LevelFilter::Info,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("logger already initialized");
    }
}

fn main() -> ExitCode {
    init_logging();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();

    let mut players = Players::new(seed.wrapping_add(1));
    players.add_player(Player::new("Bob", 0));
    players.add_player(Player::new("Alice", 0));

    let mut game = MatchGame::with_options(options, players, seed);
    let winner = match game.play() {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("game failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Deck of {} packs, match condition is {}",
        options.packs, options.condition
    );
    println!("Winner is {winner}");
    ExitCode::SUCCESS
}
