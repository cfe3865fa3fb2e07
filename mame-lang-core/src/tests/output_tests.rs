use super::*;
use crate::listing::parse_listing;
use crate::settings::LangSettings;

const LISTING: &str = "<mame build=\"0.271\">\n\
\t<machine name=\"1942\">\n\t\t<description>1942 (Revision B)</description>\n\
\t<machine name=\"1942b\">\n\t\t<description>1942 (bootleg of 1942, set 2)</description>\n\
\t<machine name=\"pacman\">\n\t\t<description>Pac-Man</description>\n\
\t<machine name=\"puckman\">\n\t\t<description>PAC-MAN [BET]</description>\n\
\t<machine name=\"galaga\">\n\t\t<description>Galaga (Namco rev. B)</description>\n\
\t<machine name=\"galagao\">\n\t\t<description>GALAGA (Namco)</description>\n\
\t<machine name=\"dkong\">\n\t\t<description>Donkey Kong (US set 1)</description>\n";

fn dictionary(pairs: &[(&str, &str)]) -> Dictionary {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn sample() -> Generation {
    let listing = parse_listing(LISTING.as_bytes()).unwrap();
    let titles = dictionary(&[("1942", "一九四二"), ("pac-man", "吃豆人"), ("donkey kong", "大金刚")]);
    let bootlegs = dictionary(&[
        ("bootleg", "盗版"),
        ("bootleg of 1942", "盗版自 一九四二"),
        ("revision", "修订版"),
    ]);
    let rules = BootlegRules::new(&bootlegs).unwrap();
    generate(&listing, &titles, &rules, encoding_rs::GBK)
}

#[test]
fn test_generate_records() {
    let generation = sample();
    let lines: Vec<_> = generation.records.iter().map(|r| r.line.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "一九四二 (修订版 B)",
            "一九四二 (盗版自 一九四二, 第 2 套)",
            "吃豆人",
            "吃豆人 [博彩]",
            "大金刚 (US 第 1 套)",
        ]
    );
    assert_eq!(generation.records[0].name, "1942");
    assert!(generation.failures.is_empty());
}

#[test]
fn test_untranslated_deduplicated_in_order() {
    let generation = sample();
    assert_eq!(generation.untranslated, vec!["galaga"]);
}

#[test]
fn test_list_line_format() {
    let record = OutputRecord {
        name: "pacman".to_string(),
        line: "吃豆人".to_string(),
    };
    assert_eq!(record.to_list_line(), "pacman\t吃豆人\t吃豆人\n");
}

#[test]
fn test_encoded_matches_utf8_copy() {
    let generation = sample();
    let expected: String = generation
        .records
        .iter()
        .map(OutputRecord::to_list_line)
        .collect();
    assert_eq!(generation.utf8_text(), expected);

    let utf8 = generation.utf8_text();
    let (reencoded, _, had_errors) = encoding_rs::GBK.encode(&utf8);
    assert!(!had_errors);
    assert_eq!(reencoded.as_ref(), generation.encoded.as_slice());
}

#[test]
fn test_unencodable_record_skipped() {
    let listing = parse_listing(
        "\t<machine name=\"a\">\n\t\t<description>A</description>\n\
         \t<machine name=\"b\">\n\t\t<description>B (set 1)</description>\n"
            .as_bytes(),
    )
    .unwrap();
    let titles = dictionary(&[("a", "游戏🎮"), ("b", "乙")]);
    let rules = BootlegRules::new(&Dictionary::new()).unwrap();
    let generation = generate(&listing, &titles, &rules, encoding_rs::GBK);

    assert_eq!(generation.records.len(), 1);
    assert_eq!(generation.records[0].name, "b");
    assert_eq!(generation.failures.len(), 1);
    assert_eq!(generation.failures[0].name, "a");
    assert_eq!(generation.failures[0].title, "游戏🎮");
    assert_eq!(generation.utf8_text(), "b\t乙 (第 1 套)\t乙 (第 1 套)\n");
}

#[test]
fn test_utf16_label_falls_back_to_utf8() {
    let listing =
        parse_listing("\t<machine name=\"a\">\n\t\t<description>A</description>\n".as_bytes())
            .unwrap();
    let titles = dictionary(&[("a", "甲")]);
    let rules = BootlegRules::new(&Dictionary::new()).unwrap();
    let encoding = crate::settings::resolve_encoding("utf-16le").unwrap();
    let generation = generate(&listing, &titles, &rules, encoding);

    assert_eq!(generation.encoding, encoding_rs::UTF_8);
    assert_eq!(generation.encoded, "a\t甲\t甲\n".as_bytes());
    assert_eq!(generation.utf8_text(), "a\t甲\t甲\n");
}

#[test]
fn test_write_generation() {
    let tmp = tempfile::TempDir::new().unwrap();
    let paths = LangSettings::default().resolve(tmp.path()).unwrap();
    let generation = sample();

    write_generation(&generation, &paths).unwrap();

    let primary = fs::read(&paths.list_file).unwrap();
    assert_eq!(primary, generation.encoded);
    let (decoded, _) = encoding_rs::GBK.decode_without_bom_handling(&primary);
    let utf8 = fs::read_to_string(&paths.utf8_list_file).unwrap();
    assert_eq!(decoded, utf8);
    assert_eq!(utf8.lines().count(), 5);

    let report = fs::read_to_string(&paths.untranslated).unwrap();
    assert_eq!(report, "galaga\n");
}
