// libdearu/src/exceptions.rs
//
// Built-in literal exception tables.
//
// HEAD rules run before everything else: irregular forms that the stem
// tables cannot express, most specific first (参照してください before
// してください). TAIL rules are merged after the expanded stems and catch
// copula forms and whatever suru / passive / causative residue the stem
// tables did not list.
//
// The tail deliberately has no bare ます rule. Every "kanji + okurigana +
// ます" form would collapse into it before the contextual pass could see it.

use libdearu_core::LiteralTable;

const HEAD: &[(&str, &str)] = &[
    ("覚えておいてください", "覚えておくこと"),
    ("忘れないでください", "忘れないこと"),
    ("参照してください", "参照のこと"),
    ("使用してください", "使用のこと"),
    ("注意してください", "注意のこと"),
    ("確認してください", "確認のこと"),
    ("出してください", "出すこと"),
    ("してください", "すること"),
    ("ご覧ください", "見ること"),
    ("お待ちください", "待つこと"),
    ("ないでください", "ないこと"),
    ("ておりませんでした", "ていなかった"),
    ("でおりませんでした", "でいなかった"),
    ("ておりました", "ていた"),
    ("でおりました", "でいた"),
    ("ておりません", "ていない"),
    ("でおりません", "でいない"),
    ("ております", "ている"),
    ("でおります", "でいる"),
    ("することです", "する"),
    ("ありがとうございます", "ありがとう"),
    ("でございます", "である"),
    ("ございませんでした", "なかった"),
    ("ございません", "ない"),
    ("ございました", "あった"),
    ("ございます", "ある"),
    ("いたします", "する"),
    ("致します", "する"),
];

const TAIL: &[(&str, &str)] = &[
    // サ変の残り
    ("しませんでした", "しなかった"),
    ("しましょう", "しよう"),
    ("しました", "した"),
    ("しません", "しない"),
    ("します", "する"),
    // いる
    ("いませんでした", "いなかった"),
    ("いましょう", "いよう"),
    ("いました", "いた"),
    ("いません", "いない"),
    ("います", "いる"),
    // 受身・可能 (〜れる / 〜られる)
    ("れませんでした", "れなかった"),
    ("れました", "れた"),
    ("れません", "れない"),
    ("れます", "れる"),
    // 使役 (〜せる / 〜させる)
    ("せませんでした", "せなかった"),
    ("せました", "せた"),
    ("せません", "せない"),
    ("せます", "せる"),
    // 断定の助動詞: after every ませんでした rule above
    ("ですが", "だが"),
    ("ですから", "だから"),
    ("でしょうか", "だろうか"),
    ("でしょう", "だろう"),
    ("でした", "だった"),
    ("ですか", "か"),
    ("です", "だ"),
    // でした above also hits 〜ませんでした forms left for the contextual pass
    ("ませんだった", "ませんでした"),
];

pub fn standard_exceptions() -> LiteralTable {
    LiteralTable::from_pairs(HEAD)
}

pub fn standard_tail() -> LiteralTable {
    LiteralTable::from_pairs(TAIL)
}
