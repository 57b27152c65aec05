// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for ticket-desc
//!
//! [`ItemRecord`] is the on-disk record; everything else describes the
//! classification derived from it, which is recomputed on every run and
//! never stored.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SOURCE_NAME_FIELD: &str = "jp_text";
pub const NAME_FIELD: &str = "tr_text";
pub const SOURCE_TEXT_FIELD: &str = "jp_explain";
pub const DESCRIPTION_FIELD: &str = "tr_explain";

const REQUIRED_FIELDS: [&str; 4] = [
    SOURCE_NAME_FIELD,
    NAME_FIELD,
    SOURCE_TEXT_FIELD,
    DESCRIPTION_FIELD,
];

/// A single ticket record as stored in a group file.
///
/// The record keeps every field it was loaded with, in the original order,
/// so that writing a group back only ever changes `tr_explain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ItemRecord {
    fields: Map<String, Value>,
}

impl ItemRecord {
    pub fn new(source_name: &str, name: &str, source_text: &str, description: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(SOURCE_NAME_FIELD.to_string(), Value::from(source_name));
        fields.insert(NAME_FIELD.to_string(), Value::from(name));
        fields.insert(SOURCE_TEXT_FIELD.to_string(), Value::from(source_text));
        fields.insert(DESCRIPTION_FIELD.to_string(), Value::from(description));
        Self { fields }
    }

    /// Japanese item name (`jp_text`).
    pub fn source_name(&self) -> &str {
        self.text(SOURCE_NAME_FIELD)
    }

    /// Translated item name (`tr_text`). Empty when not translated yet.
    pub fn name(&self) -> &str {
        self.text(NAME_FIELD)
    }

    /// Japanese explanation text (`jp_explain`), only ever pattern-matched.
    pub fn source_text(&self) -> &str {
        self.text(SOURCE_TEXT_FIELD)
    }

    /// Generated description (`tr_explain`). Empty when not generated yet.
    pub fn description(&self) -> &str {
        self.text(DESCRIPTION_FIELD)
    }

    pub fn set_description(&mut self, description: String) {
        self.fields
            .insert(DESCRIPTION_FIELD.to_string(), Value::String(description));
    }

    fn text(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

impl TryFrom<Map<String, Value>> for ItemRecord {
    type Error = RecordError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        for key in REQUIRED_FIELDS {
            match fields.get(key) {
                None => return Err(RecordError::MissingField(key)),
                Some(Value::String(_)) => {}
                Some(_) => return Err(RecordError::NotAString(key)),
            }
        }
        Ok(Self { fields })
    }
}

impl From<ItemRecord> for Map<String, Value> {
    fn from(record: ItemRecord) -> Self {
        record.fields
    }
}

/// Layered wear slot, written as a two-letter tag in item names ("[Ba]").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Innerwear,
    Basewear,
    Setwear,
    FullSetwear,
    Outerwear,
}

impl Slot {
    pub fn code(&self) -> &'static str {
        match self {
            Slot::Innerwear => "In",
            Slot::Basewear => "Ba",
            Slot::Setwear => "Se",
            Slot::FullSetwear => "Fu",
            Slot::Outerwear => "Ou",
        }
    }

    pub fn from_code(code: &str) -> Option<Slot> {
        match code {
            "In" => Some(Slot::Innerwear),
            "Ba" => Some(Slot::Basewear),
            "Se" => Some(Slot::Setwear),
            "Fu" => Some(Slot::FullSetwear),
            "Ou" => Some(Slot::Outerwear),
            _ => None,
        }
    }
}

/// Beauty salon cosmetic kinds, one per cosmetic group file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CosmeticKind {
    Accessory,
    BodyPaint,
    Eye,
    EyeBrow,
    EyeLash,
    FacePaint,
    Hairstyle,
    Sticker,
}

impl CosmeticKind {
    pub fn all() -> &'static [CosmeticKind] {
        &[
            CosmeticKind::Accessory,
            CosmeticKind::BodyPaint,
            CosmeticKind::Eye,
            CosmeticKind::EyeBrow,
            CosmeticKind::EyeLash,
            CosmeticKind::FacePaint,
            CosmeticKind::Hairstyle,
            CosmeticKind::Sticker,
        ]
    }

    /// Group name as it appears in the file name (`Item_Stack_<name>.txt`).
    pub fn group_name(&self) -> &'static str {
        match self {
            CosmeticKind::Accessory => "Accessory",
            CosmeticKind::BodyPaint => "BodyPaint",
            CosmeticKind::Eye => "Eye",
            CosmeticKind::EyeBrow => "EyeBrow",
            CosmeticKind::EyeLash => "EyeLash",
            CosmeticKind::FacePaint => "FacePaint",
            CosmeticKind::Hairstyle => "Hairstyle",
            CosmeticKind::Sticker => "Sticker",
        }
    }
}

/// Top-level item family. Decides which markers are inspected and which
/// template set is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Layered wear; `default_slot` covers items whose name has no "[Xx]" tag.
    Layered { default_slot: Option<Slot> },
    Cosmetic(CosmeticKind),
    LobbyAction,
    Voice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SexLock {
    None,
    Male,
    Female,
}

/// Body-type restriction of "selectable" tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    All,
    /// Type qualifier without a race marker: human and cast alike.
    AnyType1,
    AnyType2,
    HumanType1,
    HumanType2,
    CastType1,
    CastType2,
}

/// Old-style tickets embed the item name; new-style ones unlock a
/// selectable option and carry no name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockStyle {
    Named,
    Selectable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayeredFlags {
    pub style: UnlockStyle,
    pub slot: Slot,
    pub item_name: String,
    pub sex: SexLock,
    pub body_type: BodyType,
    pub hides_innerwear: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CosmeticStyle {
    Named,
    Selectable,
    /// The "no sticker" ticket, which has a fixed description.
    NoSticker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticFlags {
    pub kind: CosmeticKind,
    pub style: CosmeticStyle,
    pub item_name: String,
    pub sex: SexLock,
    pub body_type: BodyType,
    pub size_locked: bool,
    pub color_locked: bool,
    pub copyright_notice: bool,
}

/// Extra capability advertised by a lobby action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LobbyExtra {
    ActionRandom,
    ActionWeapons,
    Action,
    Reaction,
    Weapons,
    /// NGS class pose: finger motion, weapons shown, not usable in PSO2 blocks.
    ClassPose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LobbyStyle {
    Named { name: String },
    Selectable,
    HandPose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyFlags {
    pub style: LobbyStyle,
    pub extra: Option<LobbyExtra>,
}

/// Race and sex restriction of a voice ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceRestriction {
    HumanMale,
    HumanFemale,
    CastMale,
    CastFemale,
    AnyMale,
    AnyFemale,
    Unrestricted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceFlags {
    pub restriction: VoiceRestriction,
    /// Performer name exactly as credited in the Japanese text.
    pub performer: String,
}

/// Everything the renderer needs to know about one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Layered(LayeredFlags),
    Cosmetic(CosmeticFlags),
    LobbyAction(LobbyFlags),
    Voice(VoiceFlags),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_keeps_unknown_fields_and_order() {
        let raw = r#"{"assign":12,"jp_text":"水着","tr_text":"Swimsuit","jp_explain":"x","tr_explain":"","extra":[1,2]}"#;
        let mut record: ItemRecord = serde_json::from_str(raw).unwrap();
        record.set_description("done".to_string());
        let out = serde_json::to_string(&record).unwrap();
        assert_eq!(
            out,
            r#"{"assign":12,"jp_text":"水着","tr_text":"Swimsuit","jp_explain":"x","tr_explain":"done","extra":[1,2]}"#
        );
    }

    #[test]
    fn record_requires_text_fields() {
        let missing = json!({"jp_text": "a", "tr_text": "b", "jp_explain": "c"});
        let err = serde_json::from_value::<ItemRecord>(missing).unwrap_err();
        assert!(err.to_string().contains("tr_explain"));

        let wrong_type = json!({"jp_text": "a", "tr_text": 3, "jp_explain": "c", "tr_explain": ""});
        let err = serde_json::from_value::<ItemRecord>(wrong_type).unwrap_err();
        assert!(err.to_string().contains("tr_text"));
    }

    #[test]
    fn accessors_read_fields() {
        let record = ItemRecord::new("水着", "Swimsuit", "説明", "");
        assert_eq!(record.source_name(), "水着");
        assert_eq!(record.name(), "Swimsuit");
        assert_eq!(record.source_text(), "説明");
        assert_eq!(record.description(), "");
    }

    #[test]
    fn slot_codes_roundtrip() {
        for slot in [
            Slot::Innerwear,
            Slot::Basewear,
            Slot::Setwear,
            Slot::FullSetwear,
            Slot::Outerwear,
        ] {
            assert_eq!(Slot::from_code(slot.code()), Some(slot));
        }
        assert_eq!(Slot::from_code("NG"), None);
    }
}
