// SPDX-License-Identifier: PMPL-1.0-or-later

//! Template renderer
//!
//! Turns a [`Classification`] into the final description text: a base
//! template with the item name and type label substituted, followed by the
//! optional fragments in a fixed per-family order. The game shows the text
//! as markup, so fragment order is part of the output contract.

pub mod templates;

use crate::locale::{Lang, Localized};
use crate::types::*;

/// Render the description of a classified record.
///
/// `credit` is the resolved performer name for voice tickets; when it is
/// `None` the credited Japanese name is used as-is.
pub fn render(class: &Classification, credit: Option<&str>, lang: Lang) -> String {
    let item_type = item_type_label(class)
        .map(|label| label.text(lang))
        .unwrap_or_default();
    match class {
        Classification::Layered(flags) => render_layered(flags, item_type, lang),
        Classification::Cosmetic(flags) => render_cosmetic(flags, item_type, lang),
        Classification::LobbyAction(flags) => render_lobby(flags, lang),
        Classification::Voice(flags) => {
            render_voice(flags, credit.unwrap_or(&flags.performer), lang)
        }
    }
}

/// The item type label substituted for `{itype}`, if the family has one.
pub fn item_type_label(class: &Classification) -> Option<Localized> {
    match class {
        Classification::Layered(flags) => Some(templates::slot_label(flags.slot)),
        Classification::Cosmetic(flags) => Some(templates::cosmetic_label(flags.kind)),
        Classification::LobbyAction(_) | Classification::Voice(_) => None,
    }
}

fn render_layered(flags: &LayeredFlags, item_type: &str, lang: Lang) -> String {
    let mut text = match flags.style {
        UnlockStyle::Named => {
            let mut text = fill(templates::LAYERED_NAMED.text(lang), item_type, &flags.item_name);
            text.push_str(templates::layered_sex_lock(flags.sex).text(lang));
            text
        }
        UnlockStyle::Selectable => {
            let mut text = fill(templates::SELECTABLE.text(lang), item_type, "");
            push_body_type(&mut text, flags.body_type, lang);
            text
        }
    };
    if flags.hides_innerwear {
        push_highlight(&mut text, templates::HIDES_INNERWEAR.text(lang));
    }
    text
}

fn render_cosmetic(flags: &CosmeticFlags, item_type: &str, lang: Lang) -> String {
    match flags.style {
        CosmeticStyle::NoSticker => templates::NO_STICKER.text(lang).to_string(),
        CosmeticStyle::Selectable => {
            let mut text = fill(templates::SELECTABLE.text(lang), item_type, "");
            push_body_type(&mut text, flags.body_type, lang);
            text
        }
        CosmeticStyle::Named => {
            let base = templates::COSMETIC_NAMED
                .text(lang)
                .replace("{sexlock}", templates::cosmetic_sex_lock(flags.sex).text(lang));
            let mut text = fill(&base, item_type, &flags.item_name);
            if flags.size_locked {
                push_highlight(&mut text, templates::SIZE_LOCKED.text(lang));
            }
            if flags.color_locked {
                push_highlight(&mut text, templates::COLOR_LOCKED.text(lang));
            }
            if flags.copyright_notice {
                text.push('\n');
                text.push_str(templates::COPYRIGHT_NOTICE);
            }
            text
        }
    }
}

fn render_lobby(flags: &LobbyFlags, lang: Lang) -> String {
    match &flags.style {
        LobbyStyle::HandPose => templates::HAND_POSE.text(lang).to_string(),
        LobbyStyle::Named { name } => {
            let mut text = fill(templates::LOBBY_NAMED.text(lang), "", name);
            push_lobby_extra(&mut text, flags.extra, lang);
            text
        }
        LobbyStyle::Selectable => {
            let mut text = templates::LOBBY_SELECTABLE.text(lang).to_string();
            push_lobby_extra(&mut text, flags.extra, lang);
            // Class poses already advertise finger motion in their extra line.
            if flags.extra != Some(LobbyExtra::ClassPose) {
                text.push_str(templates::FINGER_MOTION.text(lang));
            }
            text
        }
    }
}

fn render_voice(flags: &VoiceFlags, performer: &str, lang: Lang) -> String {
    let mut text = templates::VOICE.text(lang).to_string();
    text.push('\n');
    text.push_str(templates::voice_restriction(flags.restriction).text(lang));
    text.push('\n');
    text.push_str(templates::VOICE_CREDIT);
    text.push_str(performer);
    text
}

/// Substitute the type label, then the item name. The name goes last so
/// braces inside it are never treated as placeholders.
fn fill(template: &str, item_type: &str, item_name: &str) -> String {
    template
        .replace("{itype}", item_type)
        .replace("{iname}", item_name)
}

fn push_highlight(text: &mut String, fragment: &str) {
    text.push_str("\n<yellow>");
    text.push_str(fragment);
    text.push_str("<c>");
}

fn push_body_type(text: &mut String, body_type: BodyType, lang: Lang) {
    if let Some(label) = templates::body_type_label(body_type) {
        let fragment = format!(
            "※{}{}",
            templates::BODY_TYPE_STATEMENT.text(lang),
            label.text(lang)
        );
        push_highlight(text, &fragment);
    }
}

fn push_lobby_extra(text: &mut String, extra: Option<LobbyExtra>, lang: Lang) {
    if let Some(extra) = extra {
        text.push('\n');
        text.push_str(templates::lobby_extra(extra).text(lang));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layered(style: UnlockStyle) -> LayeredFlags {
        LayeredFlags {
            style,
            slot: Slot::Basewear,
            item_name: "Swimsuit A [Ba]".to_string(),
            sex: SexLock::None,
            body_type: BodyType::All,
            hides_innerwear: false,
        }
    }

    fn cosmetic(style: CosmeticStyle) -> CosmeticFlags {
        CosmeticFlags {
            kind: CosmeticKind::Accessory,
            style,
            item_name: "Cat Ears".to_string(),
            sex: SexLock::None,
            body_type: BodyType::All,
            size_locked: false,
            color_locked: false,
            copyright_notice: false,
        }
    }

    #[test]
    fn layered_named_with_sex_lock_and_innerwear() {
        let mut flags = layered(UnlockStyle::Named);
        flags.sex = SexLock::Female;
        flags.hides_innerwear = true;
        let text = render(&Classification::Layered(flags), None, Lang::En);
        assert_eq!(
            text,
            "Unlocks the new basewear\n\"Swimsuit A [Ba]\".\n\
             Only usable on female characters.\n\
             <yellow>※Hides innerwear when worn.<c>"
        );
    }

    #[test]
    fn layered_selectable_body_type_before_innerwear() {
        let mut flags = layered(UnlockStyle::Selectable);
        flags.body_type = BodyType::CastType2;
        flags.hides_innerwear = true;
        let text = render(&Classification::Layered(flags), None, Lang::En);
        assert_eq!(
            text,
            "Unlocks a new basewear for use.\n\
             <yellow>※Type: Cast Type 2<c>\n\
             <yellow>※Hides innerwear when worn.<c>"
        );
    }

    #[test]
    fn layered_named_korean_sex_lock_stays_inline() {
        let mut flags = layered(UnlockStyle::Named);
        flags.sex = SexLock::Female;
        flags.hides_innerwear = true;
        let text = render(&Classification::Layered(flags), None, Lang::Ko);
        assert_eq!(
            text,
            "사용하면 새로운 베이스웨어인\n\"Swimsuit A [Ba]\"\n의 사용이 가능해진다. 여성만 가능.\n\
             <yellow>※착용 시 이너웨어는 표시하지 않음.<c>"
        );
    }

    #[test]
    fn layered_selectable_russian_type_line() {
        let mut flags = layered(UnlockStyle::Selectable);
        flags.body_type = BodyType::AnyType1;
        let text = render(&Classification::Layered(flags), None, Lang::Ru);
        assert_eq!(
            text,
            "Разблок верхнюю одежду (Ba).\n<yellow>※Тип: Человек/CAST (тип1)<c>"
        );
    }

    #[test]
    fn lobby_selectable_russian_extra_then_finger_motion() {
        let flags = LobbyFlags {
            style: LobbyStyle::Selectable,
            extra: Some(LobbyExtra::Reaction),
        };
        let text = render(&Classification::LobbyAction(flags), None, Lang::Ru);
        assert_eq!(
            text,
            "Разблокирует новый лобби-экшн\nдля всех персонажей вашего акка.\n\
             Есть доп действие реакцией.\n\
             <yellow>※Одежда влияет на движ-е пальцев<c>"
        );
    }

    #[test]
    fn selectable_for_all_body_types_has_no_fragment() {
        let flags = cosmetic(CosmeticStyle::Selectable);
        let text = render(&Classification::Cosmetic(flags), None, Lang::En);
        assert_eq!(text, "Unlocks a new accessory for use.");
    }

    #[test]
    fn cosmetic_named_fragment_order() {
        let mut flags = cosmetic(CosmeticStyle::Named);
        flags.sex = SexLock::Male;
        flags.size_locked = true;
        flags.color_locked = true;
        flags.copyright_notice = true;
        let text = render(&Classification::Cosmetic(flags), None, Lang::En);
        assert_eq!(
            text,
            "Unlocks the male-only accessory\n\"Cat Ears\"\nfor use in the Beauty Salon.\n\
             <yellow>※Size cannot be adjusted.<c>\n\
             <yellow>※Color cannot be changed<c>\n\
             c'76,'15 SANRIO APPR.NO.S564996"
        );
    }

    #[test]
    fn cosmetic_named_russian_keeps_space_before_sex_lock() {
        let flags = cosmetic(CosmeticStyle::Named);
        let text = render(&Classification::Cosmetic(flags), None, Lang::Ru);
        assert!(text.starts_with("Разблок-т аксессуар \n\"Cat Ears\""));
    }

    #[test]
    fn lobby_selectable_adds_finger_motion_unless_class_pose() {
        let plain = LobbyFlags {
            style: LobbyStyle::Selectable,
            extra: Some(LobbyExtra::Reaction),
        };
        let text = render(&Classification::LobbyAction(plain), None, Lang::En);
        assert!(text.ends_with(
            "Reaction has extra actions.\n<yellow>※Finger motion limited based on outfit.<c>"
        ));

        let pose = LobbyFlags {
            style: LobbyStyle::Selectable,
            extra: Some(LobbyExtra::ClassPose),
        };
        let text = render(&Classification::LobbyAction(pose), None, Lang::En);
        assert!(!text.contains("Finger motion limited based on outfit"));
        assert!(text.ends_with("Cannot perform in [PSO2].<c>"));
    }

    #[test]
    fn lobby_named_substitutes_action_name() {
        let flags = LobbyFlags {
            style: LobbyStyle::Named {
                name: "Wave".to_string(),
            },
            extra: None,
        };
        let text = render(&Classification::LobbyAction(flags), None, Lang::Ko);
        assert_eq!(text, "『Wave』 로비 액션을\n모든 캐릭터에 등록한다.");
    }

    #[test]
    fn voice_uses_resolved_credit() {
        let flags = VoiceFlags {
            restriction: VoiceRestriction::CastFemale,
            performer: "下野 紘".to_string(),
        };
        let class = Classification::Voice(flags);
        assert_eq!(
            render(&class, Some("Hiro Shimono"), Lang::En),
            "Allows a new voice to be selected.\nFemale Casts only.\nCV: Hiro Shimono"
        );
        assert!(render(&class, None, Lang::En).ends_with("CV: 下野 紘"));
    }

    #[test]
    fn item_name_braces_are_not_placeholders() {
        let mut flags = layered(UnlockStyle::Named);
        flags.item_name = "{itype} Suit".to_string();
        let text = render(&Classification::Layered(flags), None, Lang::En);
        assert!(text.contains("\"{itype} Suit\""));
    }

    #[test]
    fn item_type_labels() {
        let class = Classification::Layered(layered(UnlockStyle::Named));
        assert_eq!(item_type_label(&class).map(|l| l.text(Lang::Ko)), Some("베이스웨어"));
        let voice = Classification::Voice(VoiceFlags {
            restriction: VoiceRestriction::Unrestricted,
            performer: String::new(),
        });
        assert_eq!(item_type_label(&voice), None);
    }
}
