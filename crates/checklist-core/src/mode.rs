//! Mode tags — which source field a category is read from and how ids are derived
//!
//! The tag strings are an external contract and are matched exactly,
//! including the capitalized `"Walkthrough"`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the `id` of a normalized entry is derived from its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// The raw source string is used as the id
    Verbatim,
    /// The id is `hasher::hash` of the text
    Hashed,
}

/// Category layout selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// `items`: a list of strings
    #[serde(rename = "items")]
    Items,
    /// `entries`: a list of strings
    #[serde(rename = "bosses")]
    Bosses,
    /// `events`: a list of `{ "text": ... }` objects
    #[serde(rename = "Walkthrough")]
    Walkthrough,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Items, Mode::Bosses, Mode::Walkthrough];

    /// Exact, case-sensitive lookup. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Mode> {
        match tag {
            "items" => Some(Mode::Items),
            "bosses" => Some(Mode::Bosses),
            "Walkthrough" => Some(Mode::Walkthrough),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Items => "items",
            Mode::Bosses => "bosses",
            Mode::Walkthrough => "Walkthrough",
        }
    }

    /// Name of the collection field read from each category
    pub fn source_field(&self) -> &'static str {
        match self {
            Mode::Items => "items",
            Mode::Bosses => "entries",
            Mode::Walkthrough => "events",
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        match self {
            Mode::Items | Mode::Bosses => IdStrategy::Verbatim,
            Mode::Walkthrough => IdStrategy::Hashed,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}
