use std::fmt;

use pokedle_core::{GuessView, PresenterState, UiFragment};
use pokedle_types::{Badge, Tone};

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Guess(String),
    /// `:lang fr` selects, bare `:lang` cycles.
    Language(Option<String>),
    Play,
    Seek(f64),
    Dump,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Guess(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();
        match (name, arg) {
            ("lang", lang) => Command::Language(lang.map(str::to_string)),
            ("play", None) => Command::Play,
            ("seek", Some(secs)) => match secs.parse::<f64>() {
                Ok(secs) if secs.is_finite() => Command::Seek(secs),
                _ => Command::Invalid(line.to_string()),
            },
            ("dump", None) => Command::Dump,
            ("help", None) => Command::Help,
            ("quit" | "q", None) => Command::Quit,
            _ => Command::Invalid(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a Pokémon name to guess.
  :lang [code]   switch the description language (cycles without a code)
  :play          toggle the cry player's play/pause state
  :seek <secs>   move the cry player's position
                 (audio plays only in a browser front-end)
  :dump          print the page state as JSON
  :quit          leave";

fn tone_marker(tone: Tone) -> char {
    match tone {
        Tone::Ok => '+',
        Tone::Wrong => 'x',
        Tone::Neutral => '~',
    }
}

pub fn render_badge(badge: &Badge) -> String {
    format!("[{} {}]", tone_marker(badge.tone), badge.text)
}

fn render_badges(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(render_badge)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &GuessView) -> fmt::Result {
    writeln!(f, "{}", row.title)?;
    if !row.sprite.is_empty() {
        writeln!(f, "  sprite: {}", row.sprite)?;
    }
    writeln!(f, "  {}", render_badges(&row.badges))?;
    if let Some(line) = &row.reveal_line {
        writeln!(f, "  {}", line)?;
    }
    Ok(())
}

fn write_panel(f: &mut fmt::Formatter<'_>, panel: &UiFragment) -> fmt::Result {
    if panel.is_empty() {
        return Ok(());
    }
    writeln!(f, "-- Hints --")?;

    if let Some(description) = &panel.description {
        let languages = description.languages();
        if description.has_toggle() {
            let selected = description.selected_language().unwrap_or("");
            let choices: Vec<String> = languages
                .iter()
                .map(|lang| {
                    if *lang == selected {
                        format!("*{lang}")
                    } else {
                        lang.to_string()
                    }
                })
                .collect();
            writeln!(f, "Description [{}]:", choices.join(" "))?;
        } else {
            writeln!(f, "Description:")?;
        }
        writeln!(f, "  {}", description.text())?;
    }

    if !panel.types.is_empty() {
        writeln!(f, "Types: {}", render_badges(&panel.types))?;
    }

    if let Some(cry) = &panel.cry {
        let button = if cry.is_playing() { "pause" } else { "play" };
        writeln!(f, "Cry: ({button}) {}  {}", cry.time_display(), cry.url())?;
    }
    Ok(())
}

/// Text rendering of the page, newest guess first.
pub struct Page<'a>(pub &'a PresenterState);

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "=== Pokédle ===")?;

        if state.form().is_hidden() {
            writeln!(f, "(game over)")?;
        }
        if !state.status().is_empty() {
            writeln!(f, "{}", state.status())?;
        }

        write_panel(f, state.panel())?;

        if !state.guesses().is_empty() {
            writeln!(f, "-- Guesses --")?;
            for row in state.guesses() {
                write_row(f, row)?;
            }
        }
        Ok(())
    }
}

pub fn render_page(state: &PresenterState) -> String {
    Page(state).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedle_types::HintsUnlockResponse;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("  Pikachu "),
            Command::Guess("Pikachu".to_string())
        );
        assert_eq!(Command::parse(":lang"), Command::Language(None));
        assert_eq!(
            Command::parse(":lang de"),
            Command::Language(Some("de".to_string()))
        );
        assert_eq!(Command::parse(":play"), Command::Play);
        assert_eq!(Command::parse(":seek 1.5"), Command::Seek(1.5));
        assert_eq!(
            Command::parse(":seek later"),
            Command::Invalid(":seek later".to_string())
        );
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(
            Command::parse(":dance"),
            Command::Invalid(":dance".to_string())
        );
    }

    #[test]
    fn test_render_badge() {
        assert_eq!(render_badge(&Badge::new(">3G", Tone::Wrong)), "[x >3G]");
        assert_eq!(render_badge(&Badge::new("fire", Tone::Neutral)), "[~ fire]");
    }

    #[test]
    fn test_render_page_with_panel() {
        let mut state = PresenterState::default();
        state.apply_unlocks(&HintsUnlockResponse {
            types: Some(vec!["grass".to_string()]),
            cry: Some("https://cries.example/1.ogg".to_string()),
            ..Default::default()
        });
        let page = render_page(&state);
        assert!(page.contains("Types: [~ grass]"));
        assert!(page.contains("Cry: (play) 0:00 / 0:00  https://cries.example/1.ogg"));
        assert!(!page.contains("-- Guesses --"));
    }

    #[test]
    fn test_page_shows_cry_time_after_host_sync() {
        let mut state = PresenterState::default();
        state.apply_unlocks(&HintsUnlockResponse {
            cry: Some("https://cries.example/1.ogg".to_string()),
            ..Default::default()
        });
        let cry = state.cry_mut().unwrap();
        cry.toggle();
        cry.sync(1.2, Some(2.5));

        let page = format!("{}", Page(&state));
        assert_eq!(page, render_page(&state));
        assert!(page.starts_with("=== Pokédle ===\n"));
        assert!(page.contains("Cry: (pause) 0:01 / 0:02  https://cries.example/1.ogg"));
    }
}
