use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::Comparison;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessRequest {
    pub guess: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessedPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sprite: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity of the day's target, only sent once it has been found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reveal {
    pub id: u32,
    pub name: String,
}

/// Hints computed by the server for one guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GuessHints {
    pub type1: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub type2: String, // empty for single-typed Pokémon
    #[serde(default)]
    pub type1_match: bool,
    #[serde(default)]
    pub type2_match: bool,
    #[serde(default)]
    pub type1_match_wrong_place: bool,
    #[serde(default)]
    pub type2_match_wrong_place: bool,
    pub guessed_gen: i32,
    pub correct_gen: i32,
    pub weight_hint: Comparison,
    pub height_hint: Comparison,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess_position: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess_fully_evolved: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_fully_evolved: Option<i32>,
}

/// Evolution-line hints, present only when the server sends all four fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvolutionHints {
    pub guess_position: i32,
    pub target_position: i32,
    pub guess_fully_evolved: i32,
    pub target_fully_evolved: i32,
}

impl GuessHints {
    pub fn evolution(&self) -> Option<EvolutionHints> {
        Some(EvolutionHints {
            guess_position: self.guess_position?,
            target_position: self.target_position?,
            guess_fully_evolved: self.guess_fully_evolved?,
            target_fully_evolved: self.target_fully_evolved?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GuessResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub guess: Option<GuessedPokemon>,
    #[serde(default)]
    pub hints: Option<GuessHints>,
    #[serde(default)]
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<Reveal>,
    #[serde(default)]
    pub guess_counter: u32,
}

/// A guess the server accepted and evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedGuess {
    pub guess: GuessedPokemon,
    pub hints: GuessHints,
    pub correct: bool,
    pub reveal: Option<Reveal>,
    pub guess_counter: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    Accepted(Box<AcceptedGuess>),
    /// `message` is the server's error text, if it sent one.
    Rejected { message: Option<String> },
}

impl GuessResponse {
    pub fn into_outcome(self) -> GuessOutcome {
        if !self.ok {
            return GuessOutcome::Rejected {
                message: self.error.filter(|message| !message.is_empty()),
            };
        }

        match (self.guess, self.hints) {
            (Some(guess), Some(hints)) => GuessOutcome::Accepted(Box::new(AcceptedGuess {
                guess,
                hints,
                correct: self.correct,
                reveal: self.reveal,
                guess_counter: self.guess_counter,
            })),
            // ok without a payload is as good as an unexplained rejection
            _ => GuessOutcome::Rejected { message: None },
        }
    }
}
