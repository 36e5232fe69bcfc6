use pokedle_types::{Badge, Description, HintsUnlockResponse, Tone};
use serde::Serialize;

use crate::cry_player::CryPlayer;

/// Toggle order for localized descriptions. Other codes follow alphabetically.
pub const LANGUAGE_ORDER: [&str; 5] = ["en", "fr", "de", "it", "es"];

/// Pokédex description with an optional per-language toggle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionPanel {
    entries: Vec<DescriptionEntry>,
    selected: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct DescriptionEntry {
    lang: Option<String>,
    text: String,
}

impl DescriptionPanel {
    /// `None` for a localized description with no entries.
    pub fn new(description: &Description, preferred_lang: &str) -> Option<Self> {
        let entries = match description {
            Description::Text(text) => vec![DescriptionEntry {
                lang: None,
                text: text.clone(),
            }],
            Description::Localized(by_lang) => {
                let mut entries: Vec<DescriptionEntry> = by_lang
                    .iter()
                    .map(|(lang, text)| DescriptionEntry {
                        lang: Some(lang.clone()),
                        text: text.clone(),
                    })
                    .collect();
                // BTreeMap iteration is already alphabetical, so a stable sort
                // on the rank keeps unknown codes in order.
                entries.sort_by_key(|entry| language_rank(entry.lang.as_deref().unwrap_or("")));
                entries
            }
        };

        if entries.is_empty() {
            return None;
        }

        let mut panel = Self {
            entries,
            selected: 0,
        };
        panel.select(preferred_lang);
        Some(panel)
    }

    pub fn text(&self) -> &str {
        &self.entries[self.selected].text
    }

    /// `None` for a plain-text description.
    pub fn selected_language(&self) -> Option<&str> {
        self.entries[self.selected].lang.as_deref()
    }

    pub fn languages(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| entry.lang.as_deref())
            .collect()
    }

    pub fn has_toggle(&self) -> bool {
        self.languages().len() > 1
    }

    /// Switch to `lang`. Unknown codes leave the selection alone.
    pub fn select(&mut self, lang: &str) -> bool {
        let wanted = lang.trim().to_lowercase();
        match self
            .entries
            .iter()
            .position(|entry| entry.lang.as_deref() == Some(wanted.as_str()))
        {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Advance to the next language, wrapping around.
    pub fn toggle(&mut self) -> Option<&str> {
        if self.has_toggle() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
        self.selected_language()
    }
}

fn language_rank(lang: &str) -> usize {
    LANGUAGE_ORDER
        .iter()
        .position(|known| *known == lang)
        .unwrap_or(LANGUAGE_ORDER.len())
}

/// Auxiliary panel content unlocked so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiFragment {
    pub description: Option<DescriptionPanel>,
    pub types: Vec<Badge>,
    pub cry: Option<CryPlayer>,
}

impl UiFragment {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.types.is_empty() && self.cry.is_none()
    }

    /// Keep what the player set on the previous panel: the chosen description
    /// language and the player state of an unchanged cry.
    pub fn carry_over_from(&mut self, previous: &UiFragment) {
        if let (Some(panel), Some(old)) = (self.description.as_mut(), previous.description.as_ref()) {
            if let Some(lang) = old.selected_language() {
                panel.select(lang);
            }
        }

        if let (Some(cry), Some(old)) = (self.cry.as_mut(), previous.cry.as_ref()) {
            if cry.url() == old.url() {
                *cry = old.clone();
            }
        }
    }
}

/// Build the auxiliary panel from whatever the server has unlocked.
pub fn render_progressive_hints(response: &HintsUnlockResponse, preferred_lang: &str) -> UiFragment {
    let description = response
        .description
        .as_ref()
        .and_then(|description| DescriptionPanel::new(description, preferred_lang));

    let types = response
        .types
        .iter()
        .flatten()
        .map(|type_name| Badge::new(type_name.as_str(), Tone::Neutral))
        .collect();

    let cry = response
        .cry
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(CryPlayer::new);

    UiFragment {
        description,
        types,
        cry,
    }
}
