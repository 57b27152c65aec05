// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for a full run over a JSON directory of group files

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use ticket_desc::locale::Lang;
use ticket_desc::process::Options;
use ticket_desc::report::GroupStatus;
use ticket_desc::run::{self, RunConfig};
use ticket_desc::storage;
use ticket_desc::types::ItemRecord;

fn config(dir: &Path, lang: Lang, force: bool) -> RunConfig {
    RunConfig {
        json_dir: dir.to_path_buf(),
        options: Options { lang, force },
        names_file: None,
        quiet: true,
    }
}

fn write_group(dir: &Path, file_name: &str, records: &[ItemRecord]) {
    let content = storage::to_group_json(records).unwrap();
    fs::write(dir.join(file_name), content).unwrap();
}

fn read_group(dir: &Path, file_name: &str) -> Vec<ItemRecord> {
    let content = fs::read_to_string(dir.join(file_name)).unwrap();
    storage::parse_records(&content).unwrap()
}

#[test]
fn test_run_fills_named_layered_wear() {
    let dir = TempDir::new().unwrap();
    write_group(
        dir.path(),
        "Item_Basewear_Female.txt",
        &[ItemRecord::new(
            "水着Ａ",
            "Swimsuit A [Ba]",
            "新しいベースウェア『水着Ａ』が\n使用可能になる。\n女性のみ使用可能。\n着用時はインナーが非表示になります。",
            "",
        )],
    );

    let report = run::run(&config(dir.path(), Lang::En, false)).expect("run should succeed");
    assert_eq!(report.total_generated(), 1);

    let records = read_group(dir.path(), "Item_Basewear_Female.txt");
    assert_eq!(
        records[0].description(),
        "Unlocks the new basewear\n\"Swimsuit A [Ba]\".\n\
         Only usable on female characters.\n\
         <yellow>※Hides innerwear when worn.<c>"
    );
}

#[test]
fn test_run_skips_missing_groups() {
    let dir = TempDir::new().unwrap();
    let report = run::run(&config(dir.path(), Lang::En, false)).unwrap();

    assert_eq!(report.groups.len(), 16);
    assert_eq!(report.missing_groups(), 16);
    assert!(report
        .groups
        .iter()
        .all(|g| g.status == GroupStatus::Missing));
    assert_eq!(
        fs::read_dir(dir.path()).unwrap().count(),
        0,
        "a run must not create group files that did not exist"
    );
}

#[test]
fn test_run_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("json");
    let err = run::run(&config(&missing, Lang::En, false)).unwrap_err();
    assert!(err.to_string().contains("Not a directory"));
}

#[test]
fn test_second_run_rewrites_identical_bytes() {
    let dir = TempDir::new().unwrap();
    write_group(
        dir.path(),
        "Item_Stack_Eye.txt",
        &[
            ItemRecord::new("瞳Ａ", "Eye A", "新しい瞳が選択可能になる。", ""),
            ItemRecord::new("瞳Ｂ", "", "新しい瞳が選択可能になる。", ""),
        ],
    );

    run::run(&config(dir.path(), Lang::En, false)).unwrap();
    let first = fs::read(dir.path().join("Item_Stack_Eye.txt")).unwrap();

    let report = run::run(&config(dir.path(), Lang::En, false)).unwrap();
    let second = fs::read(dir.path().join("Item_Stack_Eye.txt")).unwrap();

    assert_eq!(first, second);
    assert_eq!(report.total_generated(), 0);
    let eye = report
        .groups
        .iter()
        .find(|g| g.group == "Eye")
        .expect("eye group reported");
    assert_eq!(eye.skipped_present, 1);
    assert_eq!(eye.skipped_no_name, 1);
}

#[test]
fn test_selectable_cosmetic_without_body_marker_has_no_type_line() {
    let dir = TempDir::new().unwrap();
    write_group(
        dir.path(),
        "Item_Stack_Eye.txt",
        &[ItemRecord::new("瞳Ａ", "Eye A", "新しい瞳が選択可能になる。", "")],
    );

    run::run(&config(dir.path(), Lang::En, false)).unwrap();
    let records = read_group(dir.path(), "Item_Stack_Eye.txt");
    assert_eq!(records[0].description(), "Unlocks a new eye pattern for use.");
}

#[test]
fn test_selectable_layered_wear_keeps_shared_type_restriction() {
    let dir = TempDir::new().unwrap();
    write_group(
        dir.path(),
        "Item_Basewear_Male.txt",
        &[ItemRecord::new(
            "スーツＡ",
            "Suit A [Ba]",
            "新しいベースウェアが選択可能になる。\n<yellow>※対応：ヒト型/キャストタイプ1<c>",
            "",
        )],
    );

    run::run(&config(dir.path(), Lang::En, false)).unwrap();
    let records = read_group(dir.path(), "Item_Basewear_Male.txt");
    assert_eq!(
        records[0].description(),
        "Unlocks a new basewear for use.\n<yellow>※Type: Human/Cast Type 1<c>"
    );
}

#[test]
fn test_force_regenerates_existing_descriptions() {
    let dir = TempDir::new().unwrap();
    write_group(
        dir.path(),
        "Item_Stack_Voice.txt",
        &[ItemRecord::new(
            "ボイスA",
            "Voice A",
            "新しいボイスが使用可能になる。\n男性のみ使用可能。\nＣＶ下野 紘",
            "Hand-written text.",
        )],
    );

    let report = run::run(&config(dir.path(), Lang::En, false)).unwrap();
    assert_eq!(report.total_generated(), 0);
    assert_eq!(
        read_group(dir.path(), "Item_Stack_Voice.txt")[0].description(),
        "Hand-written text."
    );

    let report = run::run(&config(dir.path(), Lang::En, true)).unwrap();
    assert_eq!(report.total_generated(), 1);
    assert_eq!(
        read_group(dir.path(), "Item_Stack_Voice.txt")[0].description(),
        "Allows a new voice to be selected.\n\
         Male characters only (all races).\n\
         CV: Hiro Shimono"
    );
}

#[test]
fn test_unknown_performer_warns_and_keeps_source_name() {
    let dir = TempDir::new().unwrap();
    write_group(
        dir.path(),
        "Item_Stack_Voice.txt",
        &[ItemRecord::new(
            "ボイスB",
            "Voice B",
            "新しいボイスが使用可能になる。\nＣＶ新人 声優",
            "",
        )],
    );

    let report = run::run(&config(dir.path(), Lang::Ko, false)).unwrap();
    assert_eq!(report.total_generated(), 1);
    assert_eq!(report.total_warnings(), 1);

    let description = read_group(dir.path(), "Item_Stack_Voice.txt")[0]
        .description()
        .to_string();
    assert!(description.ends_with("CV: 新人 声優"));
}

#[test]
fn test_names_file_overrides_builtin_table() {
    let dir = TempDir::new().unwrap();
    let json_dir = dir.path().join("json");
    fs::create_dir(&json_dir).unwrap();
    write_group(
        &json_dir,
        "Item_Stack_Voice.txt",
        &[ItemRecord::new(
            "ボイスB",
            "Voice B",
            "新しいボイスが使用可能になる。\nＣＶ新人 声優",
            "",
        )],
    );
    let names = dir.path().join("names.yaml");
    fs::write(
        &names,
        "\"新人 声優\":\n  en: Newcomer\n  ko: 신인\n  ru: Новичок\n",
    )
    .unwrap();

    let mut config = config(&json_dir, Lang::Ru, false);
    config.names_file = Some(names);
    let report = run::run(&config).unwrap();

    assert_eq!(report.total_warnings(), 0);
    let description = read_group(&json_dir, "Item_Stack_Voice.txt")[0]
        .description()
        .to_string();
    assert!(description.ends_with("CV: Новичок"));
}

#[test]
fn test_malformed_group_file_aborts_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Item_Stack_Accessory.txt"), "[{\"jp_text\": ").unwrap();

    let err = run::run(&config(dir.path(), Lang::En, false)).unwrap_err();
    assert!(format!("{:#}", err).contains("Item_Stack_Accessory.txt"));
}

#[test]
fn test_unclassifiable_record_leaves_group_untouched() {
    let dir = TempDir::new().unwrap();
    write_group(
        dir.path(),
        "Item_Stack_Voice.txt",
        &[
            ItemRecord::new(
                "ボイスA",
                "Voice A",
                "新しいボイスが使用可能になる。\nＣＶ下野 紘",
                "",
            ),
            ItemRecord::new("ボイスC", "Voice C", "新しいボイスが使用可能になる。", ""),
        ],
    );
    let before = fs::read(dir.path().join("Item_Stack_Voice.txt")).unwrap();

    let err = run::run(&config(dir.path(), Lang::En, false)).unwrap_err();
    assert!(format!("{:#}", err).contains("Voice C"));

    let after = fs::read(dir.path().join("Item_Stack_Voice.txt")).unwrap();
    assert_eq!(before, after, "a failed group must not be written");
}

#[test]
fn test_extra_fields_survive_a_run() {
    let dir = TempDir::new().unwrap();
    let original = "[\n\t{\n\t\t\"assign\": 7,\n\t\t\"jp_text\": \"瞳Ａ\",\n\t\t\"tr_text\": \"Eye A\",\n\t\t\"jp_explain\": \"新しい瞳が選択可能になる。\",\n\t\t\"tr_explain\": \"\"\n\t}\n]\n";
    fs::write(dir.path().join("Item_Stack_Eye.txt"), original).unwrap();

    run::run(&config(dir.path(), Lang::En, false)).unwrap();

    let rewritten = fs::read_to_string(dir.path().join("Item_Stack_Eye.txt")).unwrap();
    assert!(rewritten.starts_with("[\n\t{\n\t\t\"assign\": 7,\n\t\t\"jp_text\": \"瞳Ａ\","));
    assert!(rewritten.contains("\"tr_explain\": \"Unlocks a new eye pattern for use.\""));
}
