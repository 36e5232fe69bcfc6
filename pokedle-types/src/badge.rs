use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Tone {
    Ok,      // Green - attribute matches the target
    Wrong,   // Red - attribute does not match
    Neutral, // Amber - present in the target but in the other slot
}

impl Tone {
    /// Class name the page stylesheet uses for this tone.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Ok => "ok",
            Tone::Wrong => "wrong",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Badge {
    pub text: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Which way the player has to move to reach the target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Direction {
    Equal,
    GreaterNeeded,
    LessNeeded,
}

impl Direction {
    pub fn needed<T: PartialOrd>(guess: T, target: T) -> Self {
        if guess < target {
            Direction::GreaterNeeded
        } else if guess > target {
            Direction::LessNeeded
        } else {
            Direction::Equal
        }
    }

    /// Display prefix: `>` means "the answer is above this guess".
    pub fn prefix(&self) -> &'static str {
        match self {
            Direction::Equal => "",
            Direction::GreaterNeeded => ">",
            Direction::LessNeeded => "<",
        }
    }
}

/// A server-decided comparison between the guess and the target.
///
/// Older servers send these as pre-formatted tokens such as `"<12.5kg"`; those
/// are accepted on deserialization and split into a direction and a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Comparison {
    pub direction: Direction,
    pub value: String,
}

impl Comparison {
    pub fn new(direction: Direction, value: impl Into<String>) -> Self {
        Self {
            direction,
            value: value.into(),
        }
    }

    pub fn from_prefixed(token: &str) -> Self {
        if let Some(rest) = token.strip_prefix('>') {
            Self::new(Direction::GreaterNeeded, rest)
        } else if let Some(rest) = token.strip_prefix('<') {
            Self::new(Direction::LessNeeded, rest)
        } else {
            Self::new(Direction::Equal, token)
        }
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.direction.prefix(), self.value)
    }

    pub fn is_equal(&self) -> bool {
        self.direction == Direction::Equal
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ComparisonRepr {
    Token(String),
    Tagged { direction: Direction, value: String },
}

impl<'de> Deserialize<'de> for Comparison {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ComparisonRepr::deserialize(deserializer)? {
            ComparisonRepr::Token(token) => Comparison::from_prefixed(&token),
            ComparisonRepr::Tagged { direction, value } => Comparison { direction, value },
        })
    }
}

/// Position of a Pokémon in its evolution line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionStage {
    Basic,
    Stage1,
    Stage2,
    /// Any index the label table does not cover.
    Unknown(i32),
}

impl EvolutionStage {
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => EvolutionStage::Basic,
            1 => EvolutionStage::Stage1,
            2 => EvolutionStage::Stage2,
            other => EvolutionStage::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EvolutionStage::Basic => "BASIC",
            EvolutionStage::Stage1 => "LVL 1",
            EvolutionStage::Stage2 => "LVL 2",
            EvolutionStage::Unknown(_) => "Unknown",
        }
    }
}
