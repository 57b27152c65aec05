// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record processor
//!
//! Walks the records of one group, decides which need a description,
//! and runs classifier, name directory and renderer on them. A record is
//! only touched when it has a translated name and either no description
//! yet or the run forces regeneration, so re-running is a no-op.

use crate::classify::Classifier;
use crate::error::GenerateError;
use crate::groups::Group;
use crate::locale::Lang;
use crate::names::{NameDirectory, NameWarning};
use crate::render;
use crate::report::{GeneratedItem, GroupReport};
use crate::types::{Classification, Family, ItemRecord};
use anyhow::{Context, Result};

/// Voice descriptions containing this come from an obsolete template that
/// leaked into voice files and are regenerated even without `force`.
pub const STALE_VOICE_MARKER: &str = "Salon";

/// Run-wide settings, fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub lang: Lang,
    /// Regenerate descriptions that are already present.
    pub force: bool,
}

/// Why a record was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// No translated name to put in the description yet.
    NoName,
    /// Already has a description and the run is not forced.
    AlreadyPresent,
}

pub fn skip_reason(record: &ItemRecord, family: Family, force: bool) -> Option<Skip> {
    if record.name().is_empty() {
        return Some(Skip::NoName);
    }
    let existing = record.description();
    if existing.is_empty() || force {
        return None;
    }
    if family == Family::Voice && existing.contains(STALE_VOICE_MARKER) {
        return None;
    }
    Some(Skip::AlreadyPresent)
}

/// A generated description plus whatever came up while resolving names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    pub warnings: Vec<NameWarning>,
}

pub struct Engine {
    classifier: Classifier,
    names: NameDirectory,
    options: Options,
}

impl Engine {
    pub fn new(names: NameDirectory, options: Options) -> Result<Self> {
        let classifier = Classifier::new().context("compiling classifier patterns")?;
        Ok(Self {
            classifier,
            names,
            options,
        })
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Classify and render one record, regardless of whether it needs it.
    pub fn describe(
        &self,
        record: &ItemRecord,
        family: Family,
    ) -> Result<Description, GenerateError> {
        let class = self.classifier.classify(record, family)?;
        let lang = self.options.lang;

        let (credit, warnings) = match &class {
            Classification::Voice(flags) => {
                let resolved = self.names.resolve(&flags.performer, lang);
                (Some(resolved.name), resolved.warnings)
            }
            _ => (None, Vec::new()),
        };

        Ok(Description {
            text: render::render(&class, credit.as_deref(), lang),
            warnings,
        })
    }

    /// Generate descriptions for every record of a group that needs one.
    ///
    /// Fails on the first record whose text cannot be classified; the
    /// caller must then not persist the group.
    pub fn process_group(&self, group: &Group, records: &mut [ItemRecord]) -> Result<GroupReport> {
        let mut report = GroupReport::processed(group);

        for (index, record) in records.iter_mut().enumerate() {
            match skip_reason(record, group.family, self.options.force) {
                Some(Skip::NoName) => {
                    report.skipped_no_name += 1;
                    continue;
                }
                Some(Skip::AlreadyPresent) => {
                    report.skipped_present += 1;
                    continue;
                }
                None => {}
            }

            let description = self.describe(record, group.family).with_context(|| {
                format!(
                    "record #{} \"{}\" in {}",
                    index,
                    record.name(),
                    group.file_name
                )
            })?;

            report.generated.push(GeneratedItem {
                name: record.name().to_string(),
                warnings: description.warnings,
            });
            record.set_description(description.text);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CosmeticKind, Slot};

    fn engine(lang: Lang, force: bool) -> Engine {
        Engine::new(NameDirectory::builtin(), Options { lang, force }).unwrap()
    }

    #[test]
    fn skip_rules() {
        let family = Family::Cosmetic(CosmeticKind::Eye);
        let no_name = ItemRecord::new("目", "", "新しい瞳", "");
        assert_eq!(skip_reason(&no_name, family, true), Some(Skip::NoName));

        let done = ItemRecord::new("目", "Eye", "新しい瞳", "Unlocks");
        assert_eq!(skip_reason(&done, family, false), Some(Skip::AlreadyPresent));
        assert_eq!(skip_reason(&done, family, true), None);

        let fresh = ItemRecord::new("目", "Eye", "新しい瞳", "");
        assert_eq!(skip_reason(&fresh, family, false), None);
    }

    #[test]
    fn stale_voice_descriptions_are_regenerated() {
        let stale = ItemRecord::new("", "Voice A", "ＣＶ下野 紘", "for use in the Beauty Salon.");
        assert_eq!(skip_reason(&stale, Family::Voice, false), None);

        let cosmetic = Family::Cosmetic(CosmeticKind::Accessory);
        assert_eq!(skip_reason(&stale, cosmetic, false), Some(Skip::AlreadyPresent));
    }

    #[test]
    fn unknown_performer_still_generates() {
        let record = ItemRecord::new("", "Voice X", "新しいボイス。\nＣＶ新人 声優", "");
        let description = engine(Lang::En, false)
            .describe(&record, Family::Voice)
            .unwrap();
        assert!(description.text.ends_with("CV: 新人 声優"));
        assert_eq!(
            description.warnings,
            vec![NameWarning::UnknownPerformer {
                name: "新人 声優".to_string()
            }]
        );
    }

    #[test]
    fn process_group_counts_outcomes() {
        let group = Group::layered("Basewear_Female", Slot::Basewear);
        let mut records = vec![
            ItemRecord::new("水着Ａ", "Swimsuit A [Ba]", "女性のみ使用可能。", ""),
            ItemRecord::new("水着Ｂ", "", "女性のみ使用可能。", ""),
            ItemRecord::new("水着Ｃ", "Swimsuit C [Ba]", "", "Already done."),
        ];
        let report = engine(Lang::En, false)
            .process_group(&group, &mut records)
            .unwrap();
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.skipped_no_name, 1);
        assert_eq!(report.skipped_present, 1);
        assert_eq!(
            records[0].description(),
            "Unlocks the new basewear\n\"Swimsuit A [Ba]\".\nOnly usable on female characters."
        );
        assert_eq!(records[1].description(), "");
        assert_eq!(records[2].description(), "Already done.");
    }

    #[test]
    fn process_group_fails_on_unrecognized_shape() {
        let mut records = vec![ItemRecord::new("", "Voice Y", "新しいボイス。", "")];
        let err = engine(Lang::En, false)
            .process_group(&Group::voices(), &mut records)
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Voice Y"));
        assert!(message.contains("ＣＶ"));
    }
}
