#![allow(dead_code)]

use pokedle_types::{AcceptedGuess, Comparison, GuessHints, GuessedPokemon, Reveal};

/// Hints for a guess that shares nothing with the target
pub fn create_miss_hints() -> GuessHints {
    GuessHints {
        type1: "normal".to_string(),
        type2: String::new(),
        type1_match: false,
        type2_match: false,
        type1_match_wrong_place: false,
        type2_match_wrong_place: false,
        guessed_gen: 1,
        correct_gen: 4,
        weight_hint: Comparison::from_prefixed(">4kg"),
        height_hint: Comparison::from_prefixed("<0.3m"),
        guess_position: Some(0),
        target_position: Some(1),
        guess_fully_evolved: Some(0),
        target_fully_evolved: Some(0),
    }
}

/// Hints for the target itself
pub fn create_exact_hints() -> GuessHints {
    GuessHints {
        type1: "electric".to_string(),
        type2: String::new(),
        type1_match: true,
        type2_match: true,
        type1_match_wrong_place: false,
        type2_match_wrong_place: false,
        guessed_gen: 4,
        correct_gen: 4,
        weight_hint: Comparison::from_prefixed("3.9kg"),
        height_hint: Comparison::from_prefixed("0.4m"),
        guess_position: Some(1),
        target_position: Some(1),
        guess_fully_evolved: Some(0),
        target_fully_evolved: Some(0),
    }
}

pub fn create_pokemon(id: u32, name: &str) -> GuessedPokemon {
    GuessedPokemon {
        id,
        name: name.to_string(),
        sprite: format!("https://sprites.example/{id}.png"),
    }
}

/// A wrong guess at the given attempt count
pub fn create_miss(id: u32, name: &str, guess_counter: u32) -> AcceptedGuess {
    AcceptedGuess {
        guess: create_pokemon(id, name),
        hints: create_miss_hints(),
        correct: false,
        reveal: None,
        guess_counter,
    }
}

/// The winning guess, revealing the target
pub fn create_win(guess_counter: u32) -> AcceptedGuess {
    AcceptedGuess {
        guess: create_pokemon(417, "pachirisu"),
        hints: create_exact_hints(),
        correct: true,
        reveal: Some(Reveal {
            id: 417,
            name: "pachirisu".to_string(),
        }),
        guess_counter,
    }
}
