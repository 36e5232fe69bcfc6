use pokedle_types::{AcceptedGuess, Badge, HintsUnlockResponse, Reveal};
use serde::Serialize;
use tracing::debug;

use crate::badges::build_hint_row;
use crate::cry_player::CryPlayer;
use crate::locale::Locale;
use crate::progress::describe_progress;
use crate::unlocks::{UiFragment, render_progressive_hints};

/// One row of the guess history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessView {
    pub title: String,
    pub sprite: String,
    pub badges: Vec<Badge>,
    pub is_win: bool,
    pub reveal_line: Option<String>,
}

/// Turn an accepted guess into its history row.
pub fn render_guess_result(accepted: &AcceptedGuess, locale: Locale) -> GuessView {
    let reveal_line = match (&accepted.reveal, accepted.correct) {
        (Some(reveal), true) => Some(locale.reveal_line(reveal)),
        _ => None,
    };

    GuessView {
        title: format!("#{} — {}", accepted.guess.id, accepted.guess.name),
        sprite: accepted.guess.sprite.clone(),
        badges: build_hint_row(&accepted.hints),
        is_win: accepted.correct,
        reveal_line,
    }
}

/// An interactive control. Once locked it stays disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    enabled: bool,
    locked: bool,
}

impl Control {
    pub fn new() -> Self {
        Self {
            enabled: true,
            locked: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && self.locked {
            debug!("ignoring attempt to re-enable a locked control");
            return;
        }
        self.enabled = enabled;
    }

    pub fn lock(&mut self) {
        self.enabled = false;
        self.locked = true;
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputField {
    pub control: Control,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuessForm {
    hidden: bool,
}

impl GuessForm {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Everything the page shows, owned in one place so several games can be
/// presented side by side and tested without a rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct PresenterState {
    form: GuessForm,
    input: InputField,
    submit: Control,
    list: Vec<GuessView>,
    status: String,
    panel: UiFragment,
    #[serde(skip)]
    locale: Locale,
    preferred_lang: String,
    revealed: Option<Reveal>,
}

impl PresenterState {
    pub fn new(locale: Locale) -> Self {
        Self::with_preferred_language(locale, locale.code())
    }

    pub fn with_preferred_language(locale: Locale, preferred_lang: &str) -> Self {
        Self {
            form: GuessForm::default(),
            input: InputField::default(),
            submit: Control::new(),
            list: Vec::new(),
            status: String::new(),
            panel: UiFragment::default(),
            locale,
            preferred_lang: preferred_lang.trim().to_lowercase(),
            revealed: None,
        }
    }

    pub fn form(&self) -> &GuessForm {
        &self.form
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn submit(&self) -> &Control {
        &self.submit
    }

    /// Newest guess first.
    pub fn guesses(&self) -> &[GuessView] {
        &self.list
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn panel(&self) -> &UiFragment {
        &self.panel
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Language code sent with guesses and used to pick the description.
    pub fn preferred_language(&self) -> &str {
        &self.preferred_lang
    }

    pub fn revealed(&self) -> Option<&Reveal> {
        self.revealed.as_ref()
    }

    pub fn accepts_input(&self) -> bool {
        !self.form.hidden && self.input.control.is_enabled() && self.submit.is_enabled()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        if self.input.control.is_enabled() {
            self.input.value = value.into();
        }
    }

    pub fn set_controls_enabled(&mut self, enabled: bool) {
        self.input.control.set_enabled(enabled);
        self.submit.set_enabled(enabled);
    }

    /// Start a submission: returns the trimmed guess, or `None` for blank input.
    /// The input is cleared before the request goes out.
    pub fn begin_submit(&mut self, raw: &str) -> Option<String> {
        let guess = raw.trim();
        if guess.is_empty() {
            return None;
        }
        let guess = guess.to_string();
        self.input.value.clear();
        self.status = self.locale.checking().to_string();
        Some(guess)
    }

    pub fn apply_guess(&mut self, accepted: &AcceptedGuess) {
        let view = render_guess_result(accepted, self.locale);
        self.status = describe_progress(accepted.guess_counter);
        self.list.insert(0, view);

        if accepted.correct {
            self.render_win_state(accepted.reveal.as_ref());
        }
    }

    pub fn apply_rejection(&mut self, message: Option<&str>) {
        self.status = message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| self.locale.fallback_error())
            .to_string();
    }

    pub fn apply_network_error(&mut self) {
        self.status = self.locale.network_error().to_string();
    }

    pub fn apply_unlocks(&mut self, response: &HintsUnlockResponse) {
        let mut fragment = render_progressive_hints(response, &self.preferred_lang);
        fragment.carry_over_from(&self.panel);
        self.panel = fragment;
    }

    /// Terminal state: input and submit are locked for good and the form hidden.
    pub fn render_win_state(&mut self, reveal: Option<&Reveal>) {
        self.input.control.lock();
        self.submit.lock();
        self.form.hidden = true;
        if reveal.is_some() {
            self.revealed = reveal.cloned();
        }
        debug!(revealed = ?self.revealed, "guess form locked");
    }

    pub fn select_description_language(&mut self, lang: &str) -> bool {
        match self.panel.description.as_mut() {
            Some(panel) => panel.select(lang),
            None => false,
        }
    }

    pub fn toggle_description_language(&mut self) -> Option<String> {
        self.panel
            .description
            .as_mut()
            .and_then(|panel| panel.toggle().map(str::to_string))
    }

    pub fn cry_mut(&mut self) -> Option<&mut CryPlayer> {
        self.panel.cry.as_mut()
    }
}

impl Default for PresenterState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
