// SPDX-License-Identifier: PMPL-1.0-or-later

//! Description templates and fragments.
//!
//! These literals are published in-game verbatim, including their line
//! breaks and the `<yellow>`/`<c>` color markup, so they must not be
//! reformatted. Placeholders: `{itype}` item type label, `{iname}` item
//! name, `{sexlock}` inline sex restriction (cosmetics only).

use crate::locale::Localized;
use crate::types::{BodyType, CosmeticKind, LobbyExtra, SexLock, Slot, VoiceRestriction};

// ─── Layered wear ────────────────────────────────────────────────────

pub fn slot_label(slot: Slot) -> Localized {
    match slot {
        Slot::Innerwear => Localized::new(
            "innerwear",
            "이너웨어",
            "внутреннюю одежду (In)",
        ),
        Slot::Basewear => Localized::new(
            "basewear",
            "베이스웨어",
            "верхнюю одежду (Ba)",
        ),
        Slot::Setwear => Localized::new(
            "setwear",
            "세트 웨어",
            "комплектную одежду (Se)",
        ),
        Slot::FullSetwear => Localized::new(
            "full setwear",
            "풀세트 웨어",
            "полн.компл.одежду (Fu)",
        ),
        Slot::Outerwear => Localized::new(
            "outerwear",
            "아우터 웨어",
            "внешнюю одежду (Ou)",
        ),
    }
}

/// Old-style layered wear ticket naming the item.
pub const LAYERED_NAMED: Localized = Localized::new(
    "Unlocks the new {itype}\n\"{iname}\".",
    "사용하면 새로운 {itype}인\n\"{iname}\"\n의 사용이 가능해진다.",
    "Разблокирует новую\n{itype}\n\"{iname}\".",
);

pub fn layered_sex_lock(sex: SexLock) -> Localized {
    match sex {
        SexLock::None => Localized::new("", "", ""),
        SexLock::Male => Localized::new(
            "\nOnly usable on male characters.",
            " 남성만 가능.",
            "\nТолько для мужских персонажей.",
        ),
        SexLock::Female => Localized::new(
            "\nOnly usable on female characters.",
            " 여성만 가능.",
            "\nТолько для женских персонажей.",
        ),
    }
}

pub const HIDES_INNERWEAR: Localized = Localized::new(
    "※Hides innerwear when worn.",
    "※착용 시 이너웨어는 표시하지 않음.",
    "※При экипировке скрывает In.",
);

// ─── Selectable (new-style) tickets ─────────────────────────────────

/// New-style ticket for layered wear and cosmetics.
pub const SELECTABLE: Localized = Localized::new(
    "Unlocks a new {itype} for use.",
    "사용하면 새로운 {itype}\n선택이 가능해집니다.",
    "Разблок {itype}.",
);

pub const BODY_TYPE_STATEMENT: Localized = Localized::new(
    "Type: ",
    "대응: ",
    "Тип: ",
);

/// `None` for [`BodyType::All`], which gets no fragment.
pub fn body_type_label(body_type: BodyType) -> Option<Localized> {
    match body_type {
        BodyType::All => None,
        BodyType::AnyType1 => Some(Localized::new(
            "Human/Cast Type 1",
            "인간형/캐스트타입1",
            "Человек/CAST (тип1)",
        )),
        BodyType::AnyType2 => Some(Localized::new(
            "Human/Cast Type 2",
            "인간형/캐스트타입2",
            "Человек/CAST (тип2)",
        )),
        BodyType::HumanType1 => Some(Localized::new(
            "Human Type 1",
            "인간형 타입1",
            "Человек (тип1)",
        )),
        BodyType::HumanType2 => Some(Localized::new(
            "Human Type 2",
            "인간형 타입2",
            "Человек (тип2)",
        )),
        BodyType::CastType1 => Some(Localized::new(
            "Cast Type 1",
            "캐스트 타입1",
            "CAST (тип1)",
        )),
        BodyType::CastType2 => Some(Localized::new(
            "Cast Type 2",
            "캐스트 타입2",
            "CAST (тип2)",
        )),
    }
}

// ─── Cosmetics ───────────────────────────────────────────────────────

pub fn cosmetic_label(kind: CosmeticKind) -> Localized {
    match kind {
        CosmeticKind::Accessory => Localized::new(
            "accessory",
            "악세서리",
            "аксессуар",
        ),
        CosmeticKind::BodyPaint => Localized::new(
            "body paint",
            "바디 페인트",
            "рис. тела",
        ),
        CosmeticKind::Eye => Localized::new(
            "eye pattern",
            "눈동자",
            "глаза",
        ),
        CosmeticKind::EyeBrow => Localized::new(
            "eyebrow type",
            "눈썹",
            "брови",
        ),
        CosmeticKind::EyeLash => Localized::new(
            "eyelash type",
            "속눈썹",
            "ресницы",
        ),
        CosmeticKind::FacePaint => Localized::new(
            "makeup",
            "메이크업",
            "макияж",
        ),
        CosmeticKind::Hairstyle => Localized::new(
            "hairstyle",
            "헤어스타일",
            "причёску",
        ),
        CosmeticKind::Sticker => Localized::new(
            "sticker",
            "스티커",
            "стикер",
        ),
    }
}

/// Old-style beauty salon ticket naming the item.
pub const COSMETIC_NAMED: Localized = Localized::new(
    "Unlocks the {sexlock}{itype}\n\"{iname}\"\nfor use in the Beauty Salon.",
    "사용하면 새로운 {sexlock}{itype}\n\"{iname}\"\n의 사용이 가능해진다.",
    "Разблок-т {itype} {sexlock}\n\"{iname}\"\nдля использования в салоне.",
);

pub fn cosmetic_sex_lock(sex: SexLock) -> Localized {
    match sex {
        SexLock::None => Localized::new("", "", ""),
        SexLock::Male => Localized::new(
            "male-only ",
            "남성 전용 ",
            "только для М",
        ),
        SexLock::Female => Localized::new(
            "female-only ",
            "여성 전용 ",
            "только для Ж",
        ),
    }
}

pub const SIZE_LOCKED: Localized = Localized::new(
    "※Size cannot be adjusted.",
    "※사이즈 조정은 할 수 없습니다.",
    "※Нельзя отрегулировать размер.",
);

pub const COLOR_LOCKED: Localized = Localized::new(
    "※Color cannot be changed",
    "※색상은 변경할 수 없습니다",
    "※Цвет нельзщя изменить.",
);

pub const NO_STICKER: Localized = Localized::new(
    "Unlocks the ability to not display a\nsticker in the Beauty Salon.",
    "특정 스티커 숨김 허가 티켓.\n사용하면 스티커의\n숨김이 선택 가능해집니다.",
    "Разблокирует возможность\nне отображать стикер в салоне.",
);

pub const COPYRIGHT_NOTICE: &str = "c'76,'15 SANRIO APPR.NO.S564996";

// ─── Lobby actions ───────────────────────────────────────────────────

pub const LOBBY_NAMED: Localized = Localized::new(
    "Unlocks the new Lobby Action\n\"{iname}\".",
    "『{iname}』 로비 액션을\n모든 캐릭터에 등록한다.",
    "Разблокирует новый лобби-экшн:\n\"{iname}\".",
);

pub const LOBBY_SELECTABLE: Localized = Localized::new(
    "Unlocks a new Lobby Action for use by\nall characters on your account.",
    "사용하면 새로운 로비 액션이\n모든 캐릭터에서 사용 가능해진다.",
    "Разблокирует новый лобби-экшн\nдля всех персонажей вашего акка.",
);

pub const HAND_POSE: Localized = Localized::new(
    "When used, allows you to select a\nnew hand pose for all characters.\n<yellow>※Does not support all Lobby Actions.\n※Cannot perform in [PSO2] Blocks.<c>",
    "사용하면 새로운 손가락 포즈가\n모든 캐릭터로 선택할 수 있게 된다.\n<yellow>※일부 로비 액션 미지원/\n『PSO2』블록 비대응<c>",
    "Даёт возможность использовать\nверсию с двигающимися пальцами.\n<yellow>※Поддерж-т не все лобби-экшены.\n※Нельзя использовать в блоке PSO2<c>",
);

pub const FINGER_MOTION: Localized = Localized::new(
    "\n<yellow>※Finger motion limited based on outfit.<c>",
    "\n<yellow>※지원 기능: 대응복 손가락 가동<c>",
    "\n<yellow>※Одежда влияет на движ-е пальцев<c>",
);

pub fn lobby_extra(extra: LobbyExtra) -> Localized {
    match extra {
        LobbyExtra::ActionRandom => Localized::new(
            "Has button actions/randomness.",
            "지원 기능: 버튼 파생/랜덤",
            "Есть кнопка действия/рандом.",
        ),
        LobbyExtra::ActionWeapons => Localized::new(
            "Shows equipment, has extra actions.\n<yellow>Doesn't show some weapons.<c>",
            "지원 기능: 버튼 파생/무기 장비 반영\n<yellow>일부 무기 반영 불가<c>",
            "Отображ. оружие; доп действие.\n<yellow>Не показывает некоторое оружие.<c>",
        ),
        LobbyExtra::Action => Localized::new(
            "Use action buttons for extra actions.",
            "지원 기능: 버튼 파생",
            "Доступно доп действие.",
        ),
        LobbyExtra::Reaction => Localized::new(
            "Reaction has extra actions.",
            "지원 기능: 리액션",
            "Есть доп действие реакцией.",
        ),
        LobbyExtra::Weapons => Localized::new(
            "Shows equipped weapons.\n<yellow>Doesn't show some weapons.<c>",
            "지원 기능: 무기 장비 반영\n<yellow>일부 무기 반영 불가<c>",
            "Показывает экип-е оружие.\n<yellow>Не показывает некоторое оружие.<c>",
        ),
        LobbyExtra::ClassPose => Localized::new(
            "<yellow>※Finger motion outfit limited. Shows\nequipment. Cannot perform in [PSO2].<c>",
            "<yellow>※지원 기능: 대응복 손가락 가동/\n무기 장비 반영/『PSO2』블록 비대응<c>",
            "<yellow>Движ. завис-т от одежды| Отображ.\nэкип. оружие| Только для NGS.<c>",
        ),
    }
}

// ─── Voices ──────────────────────────────────────────────────────────

pub const VOICE: Localized = Localized::new(
    "Allows a new voice to be selected.",
    "사용하면 새로운 보이스 사용 가능.",
    "Позволяет выбрать новый голос.",
);

pub fn voice_restriction(restriction: VoiceRestriction) -> Localized {
    match restriction {
        VoiceRestriction::HumanMale => Localized::new(
            "Non-Cast male characters only.",
            "인간 남성만 사용 가능.",
            "Только для М не CAST'ов.",
        ),
        VoiceRestriction::HumanFemale => Localized::new(
            "Non-Cast female characters only.",
            "인간 여성만 사용 가능.",
            "Только для Ж не CAST'ов.",
        ),
        VoiceRestriction::CastMale => Localized::new(
            "Male Casts only.",
            "캐스트 남성만 사용 가능.",
            "Только для М CAST'ов.",
        ),
        VoiceRestriction::CastFemale => Localized::new(
            "Female Casts only.",
            "캐스트 여성만 사용 가능.",
            "Только для Ж CAST'ов.",
        ),
        VoiceRestriction::AnyMale => Localized::new(
            "Male characters only (all races).",
            "남성만 사용 가능.",
            "Только М персонажей (все расы).",
        ),
        VoiceRestriction::AnyFemale => Localized::new(
            "Female characters only (all races).",
            "여성만 사용 가능.",
            "Только Ж персонажей (все расы).",
        ),
        VoiceRestriction::Unrestricted => Localized::new(
            "Usable by all characters.",
            "모두 사용 가능.",
            "Доступно всем персонажам.",
        ),
    }
}

pub const VOICE_CREDIT: &str = "CV: ";
