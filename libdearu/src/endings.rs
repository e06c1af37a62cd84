// libdearu/src/endings.rs
//
// Built-in ending-conversion table.
//
// Each pattern lists the five polite endings in slot order (present,
// volitional, past, past-negative, negative) with their plain-form
// replacements. Godan patterns carry the i-row kana that precedes ます so a
// bare kanji stem can be used; ichidan and suru patterns start at ます / し.
//
// Override patterns (aru, dekiru, wakaru) embed the normalized stem in the
// assertive side; the stem entry's own spelling is discarded.

use libdearu_core::{EndingTable, InflectionPattern, SLOT_COUNT};
use phf::phf_map;

type Endings = [(&'static str, &'static str); SLOT_COUNT];

static ENDINGS: phf::Map<&'static str, Endings> = phf_map! {
    // 五段
    "godan-ku" => [
        ("きます", "く"), ("きましょう", "こう"), ("きました", "いた"),
        ("きませんでした", "かなかった"), ("きません", "かない"),
    ],
    // 行く: past is 行った, not 行いた
    "godan-iku" => [
        ("きます", "く"), ("きましょう", "こう"), ("きました", "った"),
        ("きませんでした", "かなかった"), ("きません", "かない"),
    ],
    "godan-gu" => [
        ("ぎます", "ぐ"), ("ぎましょう", "ごう"), ("ぎました", "いだ"),
        ("ぎませんでした", "がなかった"), ("ぎません", "がない"),
    ],
    "godan-su" => [
        ("します", "す"), ("しましょう", "そう"), ("しました", "した"),
        ("しませんでした", "さなかった"), ("しません", "さない"),
    ],
    "godan-tsu" => [
        ("ちます", "つ"), ("ちましょう", "とう"), ("ちました", "った"),
        ("ちませんでした", "たなかった"), ("ちません", "たない"),
    ],
    "godan-nu" => [
        ("にます", "ぬ"), ("にましょう", "のう"), ("にました", "んだ"),
        ("にませんでした", "ななかった"), ("にません", "なない"),
    ],
    "godan-bu" => [
        ("びます", "ぶ"), ("びましょう", "ぼう"), ("びました", "んだ"),
        ("びませんでした", "ばなかった"), ("びません", "ばない"),
    ],
    "godan-mu" => [
        ("みます", "む"), ("みましょう", "もう"), ("みました", "んだ"),
        ("みませんでした", "まなかった"), ("みません", "まない"),
    ],
    "godan-ru" => [
        ("ります", "る"), ("りましょう", "ろう"), ("りました", "った"),
        ("りませんでした", "らなかった"), ("りません", "らない"),
    ],
    "godan-u" => [
        ("います", "う"), ("いましょう", "おう"), ("いました", "った"),
        ("いませんでした", "わなかった"), ("いません", "わない"),
    ],
    // 一段 / 来る (漢字表記)
    "ichidan" => [
        ("ます", "る"), ("ましょう", "よう"), ("ました", "た"),
        ("ませんでした", "なかった"), ("ません", "ない"),
    ],
    // サ変
    "suru" => [
        ("します", "する"), ("しましょう", "しよう"), ("しました", "した"),
        ("しませんでした", "しなかった"), ("しません", "しない"),
    ],
    // override: ある (ない has no stem)
    "aru" => [
        ("ります", "ある"), ("りましょう", "あろう"), ("りました", "あった"),
        ("りませんでした", "なかった"), ("りません", "ない"),
    ],
    // override: できる is always written 出来る
    "dekiru" => [
        ("ます", "出来る"), ("ましょう", "出来よう"), ("ました", "出来た"),
        ("ませんでした", "出来なかった"), ("ません", "出来ない"),
    ],
    // override: わかる / 判る are written 分かる
    "wakaru" => [
        ("ります", "分かる"), ("りましょう", "分かろう"), ("りました", "分かった"),
        ("りませんでした", "分からなかった"), ("りません", "分からない"),
    ],
};

/// Build the built-in ending table, ids in sorted order.
pub fn standard_endings() -> EndingTable {
    let mut ids: Vec<&&str> = ENDINGS.keys().collect();
    ids.sort();
    ids.into_iter()
        .filter_map(|id| ENDINGS.get(*id).map(|e| (*id, InflectionPattern::from_strs(*e))))
        .collect()
}

/// Raw endings for one built-in pattern.
pub fn pattern_endings(id: &str) -> Option<&'static Endings> {
    ENDINGS.get(id)
}
