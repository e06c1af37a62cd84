// Property tests over the built-in tables.
//
// - text without polite forms passes through unchanged
// - every expanded rule rewrites its own key to its value
// - literal exceptions keep their configured value in the final rule set
// - contextual extraction is deterministic
// - insertion order decides overlapping keys

use libdearu::{convert, standard_converter, standard_tables};
use libdearu_core::{apply, expand, RuleSet, ToneConverter};
use proptest::prelude::*;

// Already-assertive sentences, including plain verbs that end in ます
// (覚ます, 冷ます) and the kana of the copula forms.
fn assertive_sentence() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("目を覚ます。"), Just("スープを冷ます。"), Just("用事を済ます。"),
        Just("耳を澄ます。"), Just("友を励ます。"), Just("ますます増す。"),
        Just("話す。"), Just("雨だった。"), Just("本である。"),
        Just("彼は学校に行く。"), Just("これは本だ。"), Just("例を示す。"),
        Just("画面に表示する。"), Just("参照のこと。"), Just("静かだったが、"),
        Just("靴を磨かなかった。"), Just("水を飲んだ。"), Just("手紙を書いた。"),
        Just("しかし、"), Just("さて、"), Just("ではない。"), Just("すでに済んだ。"),
        Just("\n"),
    ]
}

proptest! {
    #[test]
    fn assertive_text_is_unchanged(parts in proptest::collection::vec(assertive_sentence(), 0..16)) {
        let text = parts.concat();
        prop_assert_eq!(convert(&text).unwrap(), text);
    }

    #[test]
    fn extraction_is_deterministic(
        parts in proptest::collection::vec(
            prop_oneof![
                Just("書きます"), Just("磨きませんでした"), Just("食べます"),
                Just("祈ります"), Just("泳ぎました"), Just("本"), Just("。"),
                Just("で"), Just("を"),
            ],
            0..20,
        )
    ) {
        let conv = standard_converter().unwrap();
        let text: String = parts.concat();
        let first = conv.contextual_rules(&text);
        let second = conv.contextual_rules(&text);
        prop_assert_eq!(&first, &second);
        let a: Vec<(&str, &str)> = first.iter().collect();
        let b: Vec<(&str, &str)> = second.iter().collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn converted_output_is_stable(
        parts in proptest::collection::vec(
            prop_oneof![
                Just("これは本です。"), Just("行きます。"), Just("表示します。"),
                Just("示しました。"), Just("参照してください。"), Just("磨きません。"),
                Just("食べませんでした。"), Just("\n"),
            ],
            0..12,
        )
    ) {
        let conv = standard_converter().unwrap();
        let once = conv.convert(&parts.concat()).unwrap();
        let twice = conv.convert(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn every_expanded_rule_rewrites_its_key() {
    let tables = standard_tables();
    let expanded = expand(&tables.stems, &tables.endings).unwrap();
    assert!(!expanded.is_empty());
    for (key, value) in expanded.iter() {
        let single: RuleSet = vec![(key, value)].into_iter().collect();
        assert_eq!(apply(&single, key.to_string()), value, "rule {} -> {}", key, value);
    }
}

#[test]
fn literal_exceptions_keep_configured_values() {
    let conv = standard_converter().unwrap();
    let rules = conv.static_rules().unwrap();
    let tables = conv.tables();

    for rule in &tables.exceptions {
        assert_eq!(rules.get(&rule.polite), Some(rule.assertive.as_str()), "head {}", rule.polite);
    }
    for rule in &tables.tail {
        assert_eq!(rules.get(&rule.polite), Some(rule.assertive.as_str()), "tail {}", rule.polite);
    }
}

#[test]
fn tail_beats_expander_on_shared_key() {
    let mut tables = standard_tables();
    let expanded = expand(&tables.stems, &tables.endings).unwrap();
    assert_eq!(expanded.get("行きます"), Some("行く"));

    tables.tail.push(libdearu_core::LiteralRule::new("行きます", "参る"));
    let conv = ToneConverter::new(tables).unwrap();
    assert_eq!(conv.static_rules().unwrap().get("行きます"), Some("参る"));
    assert_eq!(conv.convert("明日行きます。").unwrap(), "明日参る。");
}

#[test]
fn specific_rule_is_ordered_before_generic_suffix() {
    let conv = standard_converter().unwrap();
    let rules = conv.static_rules().unwrap();
    let specific = rules.position("表示します").unwrap();
    let generic = rules.position("示します").unwrap();
    assert!(specific < generic);

    let out = apply(&rules, "表示します".to_string());
    assert_eq!(out, "表示する");
}

#[test]
fn reversed_order_corrupts_compound() {
    let reversed: RuleSet = vec![("示します", "示す"), ("表示します", "表示する")]
        .into_iter()
        .collect();
    assert_eq!(apply(&reversed, "表示します".to_string()), "表示す");
}

#[test]
fn every_static_key_converts_in_isolation() {
    let conv = standard_converter().unwrap();
    let rules = conv.static_rules().unwrap();
    for (key, value) in rules.iter() {
        assert_eq!(conv.convert(key).unwrap(), value, "key {}", key);
    }
}
