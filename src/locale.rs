// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale registry for ticket-desc.
//!
//! Japanese is the source language of every ticket file and is never an
//! output target. The output languages have a stable numeric index that the
//! CLI `-l` flag uses:
//!
//! | Index | Code | Language |
//! |-------|------|----------|
//! | -     | jp   | Japanese (source) |
//! | 0     | en   | English  |
//! | 1     | ko   | Korean   |
//! | 2     | ru   | Russian  |
//!
//! Per-language literals live in [`Localized`] tables keyed by [`Lang`]
//! instead of positional arrays, so adding a language is a compile error
//! everywhere a literal is missing.

use serde::{Deserialize, Serialize};

/// Output languages a description can be generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Ko,
    Ru,
}

impl Lang {
    /// Stable index used by the `-l` flag.
    pub fn index(&self) -> u8 {
        match self {
            Lang::En => 0,
            Lang::Ko => 1,
            Lang::Ru => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Lang> {
        match index {
            0 => Some(Lang::En),
            1 => Some(Lang::Ko),
            2 => Some(Lang::Ru),
            _ => None,
        }
    }

    /// All output languages, in index order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Ko, Lang::Ru]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Locale::from(*self).label())
    }
}

/// Any locale a name can be resolved in, including the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Jp,
    En,
    Ko,
    Ru,
}

impl Locale {
    /// Upper-case label used in diagnostics ("JP", "EN", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Jp => "JP",
            Locale::En => "EN",
            Locale::Ko => "KO",
            Locale::Ru => "RU",
        }
    }

    /// The output language this locale corresponds to, `None` for the source.
    pub fn as_lang(&self) -> Option<Lang> {
        match self {
            Locale::Jp => None,
            Locale::En => Some(Lang::En),
            Locale::Ko => Some(Lang::Ko),
            Locale::Ru => Some(Lang::Ru),
        }
    }
}

impl From<Lang> for Locale {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Locale::En,
            Lang::Ko => Locale::Ko,
            Lang::Ru => Locale::Ru,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One literal per output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T = &'static str> {
    pub en: T,
    pub ko: T,
    pub ru: T,
}

impl<T> Localized<T> {
    pub const fn new(en: T, ko: T, ru: T) -> Self {
        Self { en, ko, ru }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::En => &self.en,
            Lang::Ko => &self.ko,
            Lang::Ru => &self.ru,
        }
    }
}

impl Localized<&'static str> {
    pub fn text(&self, lang: Lang) -> &'static str {
        *self.get(lang)
    }
}
