// SPDX-License-Identifier: PMPL-1.0-or-later

//! Voice performer name directory and fallback resolution.
//!
//! Performer names are credited in Japanese. The directory maps each
//! credited name to its English, Korean and Russian spelling; a spelling
//! may be empty, in which case [`FallbackChain`] says which locale to try
//! next. Every chain ends at Japanese, where the credited name is used
//! verbatim, so resolution always terminates.
//!
//! Names that are not in the directory at all are returned unchanged and
//! flagged, which is how new performers get noticed and added.

mod table;

use crate::error::ChainError;
use crate::locale::{Lang, Locale};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

/// Translations of one performer name. Empty means "not translated".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameEntry {
    pub en: String,
    pub ko: String,
    pub ru: String,
}

impl NameEntry {
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ko => &self.ko,
            Lang::Ru => &self.ru,
        }
    }
}

/// Which locale to consult when a name has no translation in a language.
///
/// Validated on construction: every output language has exactly one link
/// and following the links always reaches [`Locale::Jp`] without revisiting
/// a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    links: BTreeMap<Lang, Locale>,
}

impl FallbackChain {
    pub fn new(links: impl IntoIterator<Item = (Lang, Locale)>) -> Result<Self, ChainError> {
        let chain = Self {
            links: links.into_iter().collect(),
        };
        for &lang in Lang::all() {
            chain.walk(lang)?;
        }
        Ok(chain)
    }

    /// The locale consulted after `lang`.
    pub fn next(&self, lang: Lang) -> Locale {
        self.links.get(&lang).copied().unwrap_or(Locale::Jp)
    }

    /// Locales visited when resolving a name in `lang`, ending with JP.
    pub fn path(&self, lang: Lang) -> Vec<Locale> {
        let mut path = vec![Locale::from(lang)];
        let mut current = lang;
        while let Some(next) = self.next(current).as_lang() {
            // Validated acyclic: the path holds at most every language once.
            if path.len() > Lang::all().len() {
                break;
            }
            path.push(Locale::from(next));
            current = next;
        }
        path.push(Locale::Jp);
        path
    }

    fn walk(&self, start: Lang) -> Result<(), ChainError> {
        let mut seen = vec![start];
        let mut current = start;
        loop {
            let next = self
                .links
                .get(&current)
                .copied()
                .ok_or(ChainError::MissingLink(current))?;
            match next.as_lang() {
                None => return Ok(()),
                Some(lang) if seen.contains(&lang) => return Err(ChainError::Cycle(start)),
                Some(lang) => {
                    seen.push(lang);
                    current = lang;
                }
            }
        }
    }
}

impl Default for FallbackChain {
    /// English and Korean fall back to Japanese; Russian tries English first.
    fn default() -> Self {
        Self {
            links: BTreeMap::from([
                (Lang::En, Locale::Jp),
                (Lang::Ko, Locale::Jp),
                (Lang::Ru, Locale::En),
            ]),
        }
    }
}

/// Something worth telling the user about while resolving a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameWarning {
    /// The credited name is not in the directory yet.
    UnknownPerformer { name: String },
    /// The name has no spelling in `from`; `to` is tried next.
    MissingTranslation {
        name: String,
        from: Locale,
        to: Locale,
    },
}

impl fmt::Display for NameWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameWarning::UnknownPerformer { name } => {
                write!(f, "new voice actor: {}", name)
            }
            NameWarning::MissingTranslation { name, from, to } => write!(
                f,
                "no translation for {} in {}, falling back to {}",
                name, from, to
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    pub warnings: Vec<NameWarning>,
}

pub struct NameDirectory {
    entries: HashMap<String, NameEntry>,
    chain: FallbackChain,
}

impl NameDirectory {
    pub fn new(entries: HashMap<String, NameEntry>, chain: FallbackChain) -> Self {
        Self { entries, chain }
    }

    /// The performer table shipped with the tool and the default chain.
    pub fn builtin() -> Self {
        let entries = table::PERFORMERS
            .iter()
            .map(|&(jp, en, ko, ru)| {
                (
                    jp.to_string(),
                    NameEntry {
                        en: en.to_string(),
                        ko: ko.to_string(),
                        ru: ru.to_string(),
                    },
                )
            })
            .collect();
        Self::new(entries, FallbackChain::default())
    }

    /// Add or replace entries from a YAML or JSON file mapping credited
    /// names to `{en, ko, ru}`. Returns the number of entries read.
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading names file {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let extra: HashMap<String, NameEntry> = if is_json {
            serde_json::from_str(&data).context("parsing names file as json")?
        } else {
            serde_yaml::from_str(&data).context("parsing names file as yaml")?
        };
        let count = extra.len();
        self.entries.extend(extra);
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<&NameEntry> {
        self.entries.get(name)
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    /// Spell a credited performer name in `lang`.
    pub fn resolve(&self, name: &str, lang: Lang) -> Resolution {
        let Some(entry) = self.get(name) else {
            return Resolution {
                name: name.to_string(),
                warnings: vec![NameWarning::UnknownPerformer {
                    name: name.to_string(),
                }],
            };
        };

        let mut warnings = Vec::new();
        for locale in self.chain.path(lang) {
            let Some(current) = locale.as_lang() else {
                break;
            };
            let spelled = entry.get(current);
            if !spelled.is_empty() {
                return Resolution {
                    name: spelled.to_string(),
                    warnings,
                };
            }
            warnings.push(NameWarning::MissingTranslation {
                name: name.to_string(),
                from: locale,
                to: self.chain.next(current),
            });
        }

        Resolution {
            name: name.to_string(),
            warnings,
        }
    }
}

impl Default for NameDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
