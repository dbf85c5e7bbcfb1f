//! Search status shown next to the input field.

use std::fmt;
use std::str::FromStr;

/// Where a search stands, as reported to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// A search was dispatched and has not been delivered yet.
    Searching,
    /// The delivered result holds at least one word.
    Found,
    /// The delivered result is empty.
    NotFound,
    /// The input was emptied; list and status are blank.
    Cleared,
    /// The input was rejected and corrected.
    InputWarning,
}

/// How a front end should colour a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Notice,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Polish,
    English,
}

impl Status {
    pub fn for_results(words: &[String]) -> Self {
        if words.is_empty() {
            Status::NotFound
        } else {
            Status::Found
        }
    }

    pub fn message(self, language: Language) -> &'static str {
        match (self, language) {
            (Status::Searching, Language::Polish) => "Szukam...",
            (Status::Searching, Language::English) => "Searching...",
            (Status::Found, Language::Polish) => "Oto pasujące słowa:",
            (Status::Found, Language::English) => "Here are the matching words:",
            (Status::NotFound, Language::Polish) => "Nie znaleziono żadnego słowa.",
            (Status::NotFound, Language::English) => "No word found.",
            (Status::InputWarning, Language::Polish) => {
                "Nie można wprowadzać więcej niż jednej spacji!"
            }
            (Status::InputWarning, Language::English) => "Cannot enter more than one space!",
            (Status::Cleared, _) => "",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Status::Found => Tone::Success,
            Status::Cleared => Tone::Plain,
            Status::Searching | Status::NotFound | Status::InputWarning => Tone::Notice,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pl" | "polish" | "polski" => Ok(Language::Polish),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language: {} (expected pl or en)", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Polish => write!(f, "pl"),
            Language::English => write!(f, "en"),
        }
    }
}
