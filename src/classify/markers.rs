// SPDX-License-Identifier: PMPL-1.0-or-later

//! Literal Japanese markers recognized in ticket explanation text.
//!
//! The lists that are checked "first match wins" are kept as ordered
//! slices; their order is part of the classification contract.

use crate::types::{LobbyExtra, VoiceRestriction};

/// New-style tickets that unlock a selectable option.
pub const SELECTABLE: &str = "選択可能になる。";

pub const FEMALE_ONLY: &str = "女性のみ使用可能。";
pub const MALE_ONLY: &str = "男性のみ使用可能。";

pub const HIDES_INNERWEAR: &str = "着用時はインナーが非表示になります。";
pub const SIZE_LOCKED: &str = "サイズ調整はできません。";
pub const COLOR_LOCKED: &str = "カラーは変更できません";

pub const BODY_HUMAN: &str = "：ヒト型";
/// Appears in "ヒト型/キャスト" restrictions, which are not human-only.
pub const BODY_HUMAN_AND_CAST: &str = "/キャスト";
pub const BODY_CAST: &str = "：キャスト";
pub const BODY_TYPE_1: &str = "タイプ1<c>";
pub const BODY_TYPE_2: &str = "タイプ2<c>";

/// Old-style lobby action tickets name the action in 『』.
pub const LOBBY_NAMED: &str = "ロビアク『";
pub const LOBBY_HAND_POSE: &str = "使用すると新しい手のポーズが";

/// Checked in order; the first marker found decides the capability.
pub const LOBBY_EXTRAS: [(&str, LobbyExtra); 6] = [
    ("対応機能：ボタン派生／ランダム", LobbyExtra::ActionRandom),
    ("対応機能：ボタン派生／武器装備反映", LobbyExtra::ActionWeapons),
    ("対応機能：ボタン派生", LobbyExtra::Action),
    ("対応機能：リアクション", LobbyExtra::Reaction),
    ("対応機能：武器装備反映", LobbyExtra::Weapons),
    (
        "対応機能：対応服指可動／\n武器装備反映／『PSO2』ブロック非対応",
        LobbyExtra::ClassPose,
    ),
];

/// Race-specific markers must come before the sex-only ones they contain.
pub const VOICE_RESTRICTIONS: [(&str, VoiceRestriction); 6] = [
    ("人間男性のみ使用可能。", VoiceRestriction::HumanMale),
    ("人間女性のみ使用可能。", VoiceRestriction::HumanFemale),
    ("キャスト男性のみ使用可能。", VoiceRestriction::CastMale),
    ("キャスト女性のみ使用可能。", VoiceRestriction::CastFemale),
    (MALE_ONLY, VoiceRestriction::AnyMale),
    (FEMALE_ONLY, VoiceRestriction::AnyFemale),
];

pub const VOICE_CREDIT: &str = "ＣＶ";

pub const NO_STICKER_NAME: &str = "ステッカーなし";
/// Pulls the in-game sticker name out of the explanation text.
pub const STICKER_NAME_PATTERN: &str = "ステッカーの\n(.+[ＡＢＣ]?)が選択可能。";
/// Dropped from the translated name when the in-game name differs.
pub const STICKER_SUFFIX: &str = " Sticker";

/// Items that must carry a licensor copyright line.
pub const COPYRIGHT_ITEMS: [&str; 1] = ["ハローキティチェーン"];

/// Delimiters around the action name in old-style lobby action names.
pub const LOBBY_NAME_DELIMITERS: &str = "[\"「」]";
