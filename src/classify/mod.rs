// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pattern classifier
//!
//! Reads a record's Japanese explanation text (and, where the format needs
//! it, its names) and derives the [`Classification`] the renderer works
//! from. Optional modifiers that are absent resolve to "unrestricted";
//! patterns a family cannot do without are reported as [`GenerateError`].

pub mod markers;

use crate::error::GenerateError;
use crate::types::*;
use regex::Regex;

pub struct Classifier {
    sticker_name: Regex,
    lobby_name_delimiters: Regex,
}

impl Classifier {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            sticker_name: Regex::new(markers::STICKER_NAME_PATTERN)?,
            lobby_name_delimiters: Regex::new(markers::LOBBY_NAME_DELIMITERS)?,
        })
    }

    /// Classify a record loaded from a group of the given family.
    pub fn classify(
        &self,
        record: &ItemRecord,
        family: Family,
    ) -> Result<Classification, GenerateError> {
        match family {
            Family::Layered { default_slot } => {
                classify_layered(record, default_slot).map(Classification::Layered)
            }
            Family::Cosmetic(kind) => self
                .classify_cosmetic(record, kind)
                .map(Classification::Cosmetic),
            Family::LobbyAction => Ok(Classification::LobbyAction(self.classify_lobby(record))),
            Family::Voice => classify_voice(record).map(Classification::Voice),
        }
    }

    fn classify_cosmetic(
        &self,
        record: &ItemRecord,
        kind: CosmeticKind,
    ) -> Result<CosmeticFlags, GenerateError> {
        let text = record.source_text();
        let mut flags = CosmeticFlags {
            kind,
            style: CosmeticStyle::Named,
            item_name: record.name().to_string(),
            sex: SexLock::None,
            body_type: BodyType::All,
            size_locked: false,
            color_locked: false,
            copyright_notice: false,
        };

        if is_selectable(text) {
            flags.style = CosmeticStyle::Selectable;
            flags.body_type = body_type(text)?;
            return Ok(flags);
        }

        if record.source_name() == markers::NO_STICKER_NAME {
            flags.style = CosmeticStyle::NoSticker;
            return Ok(flags);
        }

        if kind == CosmeticKind::Sticker {
            flags.item_name = self.sticker_item_name(record)?;
        }

        flags.sex = sex_lock(text);
        flags.size_locked = text.contains(markers::SIZE_LOCKED);
        flags.color_locked = text.contains(markers::COLOR_LOCKED);
        flags.copyright_notice = markers::COPYRIGHT_ITEMS.contains(&record.source_name());
        Ok(flags)
    }

    /// Some stickers are called something else in-game than on their
    /// ticket. The explanation text carries the in-game name; when the two
    /// differ the ticket's " Sticker" suffix is dropped from the name.
    fn sticker_item_name(&self, record: &ItemRecord) -> Result<String, GenerateError> {
        let in_game = self
            .sticker_name
            .captures(record.source_text())
            .and_then(|caps| caps.get(1))
            .ok_or(GenerateError::MissingStickerName)?
            .as_str();

        let name = record.name();
        if in_game == record.source_name() {
            Ok(name.to_string())
        } else {
            Ok(name
                .strip_suffix(markers::STICKER_SUFFIX)
                .unwrap_or(name)
                .to_string())
        }
    }

    fn classify_lobby(&self, record: &ItemRecord) -> LobbyFlags {
        let text = record.source_text();
        let style = if text.contains(markers::LOBBY_NAMED) {
            LobbyStyle::Named {
                name: self.lobby_action_name(record.name()).to_string(),
            }
        } else if text.contains(markers::LOBBY_HAND_POSE) {
            LobbyStyle::HandPose
        } else {
            LobbyStyle::Selectable
        };

        LobbyFlags {
            style,
            extra: lobby_extra(text),
        }
    }

    /// Old lobby action names look like `No.123 "Wave"`; the action name is
    /// the quoted part. Names without a number (photon chairs) are used as-is.
    fn lobby_action_name<'a>(&self, name: &'a str) -> &'a str {
        let parts: Vec<&str> = self.lobby_name_delimiters.split(name).collect();
        parts.get(1).or(parts.first()).copied().unwrap_or(name)
    }
}

fn classify_layered(
    record: &ItemRecord,
    default_slot: Option<Slot>,
) -> Result<LayeredFlags, GenerateError> {
    let text = record.source_text();
    let slot = wear_slot(record.name(), default_slot)?;
    let hides_innerwear = text.contains(markers::HIDES_INNERWEAR);

    if is_selectable(text) {
        Ok(LayeredFlags {
            style: UnlockStyle::Selectable,
            slot,
            item_name: record.name().to_string(),
            sex: SexLock::None,
            body_type: body_type(text)?,
            hides_innerwear,
        })
    } else {
        Ok(LayeredFlags {
            style: UnlockStyle::Named,
            slot,
            item_name: record.name().to_string(),
            sex: sex_lock(text),
            body_type: BodyType::All,
            hides_innerwear,
        })
    }
}

fn classify_voice(record: &ItemRecord) -> Result<VoiceFlags, GenerateError> {
    let text = record.source_text();
    Ok(VoiceFlags {
        restriction: voice_restriction(text),
        performer: performer(text)?.to_string(),
    })
}

pub fn is_selectable(text: &str) -> bool {
    text.contains(markers::SELECTABLE)
}

/// Female-only is checked before male-only; a text never carries both.
pub fn sex_lock(text: &str) -> SexLock {
    if text.contains(markers::FEMALE_ONLY) {
        SexLock::Female
    } else if text.contains(markers::MALE_ONLY) {
        SexLock::Male
    } else {
        SexLock::None
    }
}

/// Two independent checks: the race ("human", "cast" or neither) and the
/// type 1/type 2 qualifier. Without a race marker a qualifier applies to
/// both races; with neither the item fits everyone.
pub fn body_type(text: &str) -> Result<BodyType, GenerateError> {
    enum Race {
        Any,
        Human,
        Cast,
    }

    let race = if text.contains(markers::BODY_HUMAN) && !text.contains(markers::BODY_HUMAN_AND_CAST)
    {
        Race::Human
    } else if text.contains(markers::BODY_CAST) {
        Race::Cast
    } else {
        Race::Any
    };

    let type_1 = text.contains(markers::BODY_TYPE_1);
    let type_2 = !type_1 && text.contains(markers::BODY_TYPE_2);

    match (race, type_1, type_2) {
        (Race::Any, true, _) => Ok(BodyType::AnyType1),
        (Race::Any, _, true) => Ok(BodyType::AnyType2),
        (Race::Any, false, false) => Ok(BodyType::All),
        (Race::Human, true, _) => Ok(BodyType::HumanType1),
        (Race::Human, _, true) => Ok(BodyType::HumanType2),
        (Race::Cast, true, _) => Ok(BodyType::CastType1),
        (Race::Cast, _, true) => Ok(BodyType::CastType2),
        _ => Err(GenerateError::UnqualifiedBodyType),
    }
}

pub fn lobby_extra(text: &str) -> Option<LobbyExtra> {
    markers::LOBBY_EXTRAS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, extra)| *extra)
}

pub fn voice_restriction(text: &str) -> VoiceRestriction {
    markers::VOICE_RESTRICTIONS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, restriction)| *restriction)
        .unwrap_or(VoiceRestriction::Unrestricted)
}

/// Performer name as credited after the ＣＶ marker (up to a second marker,
/// if any). May be empty when the credit is left blank.
pub fn performer(text: &str) -> Result<&str, GenerateError> {
    text.split(markers::VOICE_CREDIT)
        .nth(1)
        .ok_or(GenerateError::MissingCredit)
}

/// Slot from a trailing "[Xx]" tag in the item name, else the group default.
pub fn wear_slot(name: &str, default_slot: Option<Slot>) -> Result<Slot, GenerateError> {
    if !name.ends_with(']') {
        return default_slot.ok_or(GenerateError::MissingSlot);
    }

    let tag = name
        .split('[')
        .nth(1)
        .ok_or_else(|| GenerateError::UnknownSlot(name.to_string()))?;
    let code: String = tag.chars().take(2).collect();
    Slot::from_code(&code).ok_or(GenerateError::UnknownSlot(code))
}
