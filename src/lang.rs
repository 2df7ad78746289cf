//! Recognized languages and document labels.
//!
//! The recognized set is small and fixed: it mirrors the key set of the
//! confidence threshold table. Everything else maps to [Label::Other].
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A language the corpus is stratified on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    En,
    Ru,
}

impl Lang {
    /// Every recognized language, in the order the external classifier
    /// reports its groups.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "ru" => Ok(Lang::Ru),
            other => Err(Error::UnknownLang(other.to_string())),
        }
    }
}

/// Label carried by a document: a recognized language or the catch-all.
///
/// Defaults to [Label::Other], which is also what a document keeps when no
/// ground truth is obtainable or the classifier never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    Lang(Lang),
    #[default]
    Other,
}

impl Label {
    pub fn is(&self, lang: Lang) -> bool {
        matches!(self, Label::Lang(l) if *l == lang)
    }
}

impl From<Lang> for Label {
    fn from(lang: Lang) -> Self {
        Label::Lang(lang)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Lang(lang) => write!(f, "{}", lang),
            Label::Other => write!(f, "other"),
        }
    }
}
