/// Guesses needed to climb one rung of the hint ladder.
pub const GUESSES_PER_HINT: u32 = 3;

/// Number of hints the ladder advertises.
pub const ADVERTISED_HINTS: u32 = 3;

/// Attempt-count bucket gating the advertised hint unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    /// No attempt made yet.
    NotStarted,
    /// Waiting for hint number `next_hint` (1-based).
    Pending { next_hint: u32 },
    /// Every advertised hint is behind the player.
    Exhausted,
}

impl ProgressTier {
    pub fn for_counter(guess_counter: u32) -> Self {
        if guess_counter == 0 {
            return ProgressTier::NotStarted;
        }
        let tier = guess_counter / GUESSES_PER_HINT;
        if tier < ADVERTISED_HINTS {
            ProgressTier::Pending {
                next_hint: tier + 1,
            }
        } else {
            ProgressTier::Exhausted
        }
    }
}

/// Status line shown under the guess form.
pub fn describe_progress(guess_counter: u32) -> String {
    match ProgressTier::for_counter(guess_counter) {
        ProgressTier::NotStarted => String::new(),
        ProgressTier::Pending { next_hint } => {
            let remaining = next_hint * GUESSES_PER_HINT - guess_counter;
            format!(
                "Attempt #{guess_counter}. {remaining} more guess(es) before Hint #{next_hint}."
            )
        }
        ProgressTier::Exhausted => format!("Attempt #{guess_counter}"),
    }
}
