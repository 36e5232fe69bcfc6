use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pokedle_client::terminal::{Command, HELP, render_page};
use pokedle_client::{Config, GameSession, HttpGuessApi};
use pokedle_core::PresenterState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the page on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Pokédle client...");

    let config = Config::from_env().context("failed to load configuration")?;
    let api = HttpGuessApi::from_config(&config).context("failed to create API client")?;
    info!("Using game server at {}", api.base_url());

    let state = PresenterState::with_preferred_language(config.locale(), &config.lang);
    let mut session = GameSession::new(api, state);

    session.refresh_hints().await;
    println!("{}", render_page(session.state()));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read from stdin")?,
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line) {
            Command::Guess(guess) => {
                if !session.state().accepts_input() {
                    debug!("Game is over, not sending '{}'", guess);
                    continue;
                }
                session.submit(&guess).await;
            }
            Command::Language(Some(lang)) => {
                if !session.state_mut().select_description_language(&lang) {
                    println!("No description in '{lang}'.");
                }
            }
            Command::Language(None) => {
                session.state_mut().toggle_description_language();
            }
            Command::Play => match session.state_mut().cry_mut() {
                Some(cry) => {
                    cry.toggle();
                }
                None => println!("The cry is not unlocked yet."),
            },
            Command::Seek(secs) => {
                if let Some(cry) = session.state_mut().cry_mut() {
                    cry.seek_to(secs);
                }
            }
            Command::Dump => {
                println!("{}", serde_json::to_string_pretty(session.state())?);
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Invalid(input) => {
                println!("Unknown command '{input}'. Type :help for commands.");
                continue;
            }
        }

        println!("{}", render_page(session.state()));
    }

    info!("Goodbye.");
    Ok(())
}
