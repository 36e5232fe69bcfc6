use pokedle_core::PresenterState;
use pokedle_types::{GuessOutcome, GuessRequest, SubmitFailure};
use tracing::{debug, error, info, warn};

use crate::api::GuessApi;

/// What happened to one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input, nothing sent.
    Ignored,
    Accepted { won: bool },
    Failed(SubmitFailure),
}

/// One player's game: the page state plus the server it talks to.
///
/// Submissions are not serialized against each other. Callers that fire two
/// at once get rows in the order the responses arrive.
pub struct GameSession<A> {
    api: A,
    state: PresenterState,
    last_counter: u32,
}

impl<A: GuessApi> GameSession<A> {
    pub fn new(api: A, state: PresenterState) -> Self {
        Self {
            api,
            state,
            last_counter: 0,
        }
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PresenterState {
        &mut self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Submit a guess, then refresh the unlocked hints if it was accepted.
    ///
    /// This does not look at the win lock; front-ends stop offering input
    /// once [`PresenterState::accepts_input`] turns false, and the server is
    /// the one that actually refuses guesses after the game is over.
    pub async fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let Some(guess) = self.state.begin_submit(raw) else {
            return SubmitOutcome::Ignored;
        };

        let request = GuessRequest {
            guess,
            lang: Some(self.state.preferred_language().to_string()),
        };
        info!("Submitting guess '{}'", request.guess);

        let response = match self.api.submit_guess(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Guess submission for '{}' failed: {}", request.guess, e);
                self.state.apply_network_error();
                return SubmitOutcome::Failed(SubmitFailure::Network);
            }
        };

        match response.into_outcome() {
            GuessOutcome::Rejected { message } => {
                debug!("Guess '{}' rejected: {:?}", request.guess, message);
                self.state.apply_rejection(message.as_deref());
                SubmitOutcome::Failed(SubmitFailure::Rejected { message })
            }
            GuessOutcome::Accepted(accepted) => {
                if accepted.guess_counter < self.last_counter {
                    warn!(
                        "Attempt counter went backwards ({} after {})",
                        accepted.guess_counter, self.last_counter
                    );
                }
                self.last_counter = self.last_counter.max(accepted.guess_counter);

                self.state.apply_guess(&accepted);
                if accepted.correct {
                    info!("Target found after {} attempts", accepted.guess_counter);
                }

                self.refresh_hints().await;
                SubmitOutcome::Accepted {
                    won: accepted.correct,
                }
            }
        }
    }

    /// Poll the unlocked hints. On failure the previous panel stays up.
    pub async fn refresh_hints(&mut self) -> bool {
        match self.api.fetch_hints().await {
            Ok(unlocks) => {
                self.state.apply_unlocks(&unlocks);
                true
            }
            Err(e) => {
                warn!("Failed to fetch unlocked hints: {}", e);
                false
            }
        }
    }
}
