//! Display languages and bilingual text.
//!
//! Every user-facing string in the reference tables is authored in both
//! English and Hindi. Callers pick one side with [`Localized::get`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            other => Err(CoreError::InvalidLanguage(other.to_string())),
        }
    }
}

/// An English/Hindi pair of the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Localized<T> {
    pub en: T,
    pub hi: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, hi: T) -> Self {
        Self { en, hi }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }
}

impl Localized<String> {
    pub fn text(en: &str, hi: &str) -> Self {
        Self::new(en.to_string(), hi.to_string())
    }
}

impl Localized<Vec<String>> {
    pub fn list(en: &[&str], hi: &[&str]) -> Self {
        Self::new(
            en.iter().map(|s| s.to_string()).collect(),
            hi.iter().map(|s| s.to_string()).collect(),
        )
    }
}
