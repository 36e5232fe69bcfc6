use pokedle_types::{Badge, Comparison, Direction, EvolutionStage, GuessHints, Tone};

/// Which badges a hint row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintRowVariant {
    /// Types, generation, weight and height.
    Basic,
    /// Basic plus evolution position and fully-evolved badges.
    Full,
}

impl HintRowVariant {
    /// Full when the server sent every evolution field.
    pub fn for_hints(hints: &GuessHints) -> Self {
        if hints.evolution().is_some() {
            HintRowVariant::Full
        } else {
            HintRowVariant::Basic
        }
    }
}

/// Classify one type slot. A wrong-place match wins over an exact match.
pub fn classify_type_badge(type_name: &str, matched: bool, wrong_place: bool) -> Badge {
    let tone = if wrong_place {
        Tone::Neutral
    } else if matched {
        Tone::Ok
    } else {
        Tone::Wrong
    };
    Badge::new(type_name, tone)
}

/// `">3G"` means the target comes from a later generation than 3.
pub fn classify_generation_badge(guessed_gen: i32, correct_gen: i32) -> Badge {
    let comparison = Comparison::new(
        Direction::needed(guessed_gen, correct_gen),
        format!("{guessed_gen}G"),
    );
    classify_comparison_badge(&comparison)
}

pub fn classify_comparison_badge(comparison: &Comparison) -> Badge {
    let tone = match comparison.direction {
        Direction::Equal => Tone::Ok,
        Direction::GreaterNeeded | Direction::LessNeeded => Tone::Wrong,
    };
    Badge::new(comparison.display(), tone)
}

/// Classify a pre-formatted `>`/`<` token. The text is kept as sent.
pub fn classify_prefixed_badge(token: &str) -> Badge {
    classify_comparison_badge(&Comparison::from_prefixed(token))
}

pub fn classify_position_badge(guess_position: i32, target_position: i32) -> Badge {
    let label = EvolutionStage::from_index(guess_position).label();
    Badge::new(label, tone_for(guess_position == target_position))
}

pub fn classify_evolution_badge(guess_fully_evolved: i32, target_fully_evolved: i32) -> Badge {
    let text = if guess_fully_evolved == 1 {
        "fully evolved"
    } else {
        "not fully evolved"
    };
    Badge::new(text, tone_for(guess_fully_evolved == target_fully_evolved))
}

/// Badges for one guess, in display order.
pub fn build_hint_row(hints: &GuessHints) -> Vec<Badge> {
    build_hint_row_with(hints, HintRowVariant::for_hints(hints))
}

/// Like [`build_hint_row`] with an explicit variant. Asking for the full row
/// on hints without evolution data yields the basic row.
pub fn build_hint_row_with(hints: &GuessHints, variant: HintRowVariant) -> Vec<Badge> {
    let mut badges = vec![
        classify_type_badge(&hints.type1, hints.type1_match, hints.type1_match_wrong_place),
        classify_type_badge(&hints.type2, hints.type2_match, hints.type2_match_wrong_place),
        classify_generation_badge(hints.guessed_gen, hints.correct_gen),
        classify_comparison_badge(&hints.weight_hint),
        classify_comparison_badge(&hints.height_hint),
    ];

    if variant == HintRowVariant::Full {
        if let Some(evolution) = hints.evolution() {
            badges.push(classify_position_badge(
                evolution.guess_position,
                evolution.target_position,
            ));
            badges.push(classify_evolution_badge(
                evolution.guess_fully_evolved,
                evolution.target_fully_evolved,
            ));
        }
    }

    badges
}

fn tone_for(matches: bool) -> Tone {
    if matches { Tone::Ok } else { Tone::Wrong }
}
