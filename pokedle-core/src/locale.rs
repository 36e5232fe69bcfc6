use pokedle_types::Reveal;

/// Language of the page chrome (status lines and the reveal message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "fr" => Locale::Fr,
            _ => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn checking(&self) -> &'static str {
        match self {
            Locale::En => "Checking…",
            Locale::Fr => "Vérification…",
        }
    }

    pub fn fallback_error(&self) -> &'static str {
        match self {
            Locale::En => "Error.",
            Locale::Fr => "Erreur.",
        }
    }

    pub fn network_error(&self) -> &'static str {
        match self {
            Locale::En => "Network error.",
            Locale::Fr => "Erreur réseau.",
        }
    }

    pub fn reveal_line(&self, reveal: &Reveal) -> String {
        match self {
            Locale::En => format!(
                "Congrats! The Pokémon of the day was #{} — {}.",
                reveal.id, reveal.name
            ),
            Locale::Fr => format!(
                "Bravo ! Le Pokémon du jour était #{} — {}.",
                reveal.id, reveal.name
            ),
        }
    }
}
