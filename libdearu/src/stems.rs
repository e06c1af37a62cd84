// libdearu/src/stems.rs
//
// Built-in stem registries.
//
// Order is significant. The static pass applies rules in registry order, so
// an entry whose surface forms contain another entry's forms must come
// first: 表示します contains 示します, 提出します contains 出します. All
// suru-compounds are therefore registered before the godan-su stems.
//
// The secondary registry covers "one kanji + okurigana" verbs that are not
// listed here. It only sees text the static pass left untouched, so any verb
// whose okurigana class is ambiguous (起きる vs 書く, 借りる vs 取る,
// 落ちる vs 待つ) must be listed in the primary registry, and so must
// single-kanji ichidan verbs (煮る, 経る) whose polite form is kanji + ます.

use libdearu_core::{SecondaryEntry, SecondaryRegistry, StemEntry, StemRegistry};

/// (stems, linker, pattern, override)
type Row = (&'static [&'static str], &'static str, &'static str, bool);

const PRIMARY: &[Row] = &[
    // サ変複合語: before every godan-su stem they contain
    (&["表示", "提示", "指示", "掲示", "明示", "暗示", "例示", "図示", "教示"], "", "suru", false),
    (&["提出", "検出", "抽出", "算出", "輸出", "導出", "放出", "排出"], "", "suru", false),
    (&["解消", "抹消", "推移", "譲渡", "代表", "発表", "公表", "描写", "複写", "会話", "対話"], "", "suru", false),
    (&["利用", "使用", "参照", "注意", "確認", "実行", "作成", "追加", "削除", "変更"], "", "suru", false),
    (&["設定", "指定", "定義", "実装", "処理", "保存", "生成", "説明", "提供", "検索"], "", "suru", false),
    (&["表現", "理解", "想定", "推奨", "検討", "比較", "存在", "対応", "意味", "発生"], "", "suru", false),
    (&["出力", "入力", "記述", "紹介", "返却", "受信", "送信", "取得", "更新", "登録"], "", "suru", false),
    // 五段 す
    (&["示", "出", "返", "渡", "指", "押", "試", "表", "残", "消", "戻", "移"], "", "godan-su", false),
    (&["話", "探", "隠", "直", "貸", "写", "回", "離", "壊", "許", "促", "記"], "", "godan-su", false),
    (&["起こ", "落と", "減ら", "増や", "果た", "満た", "動か", "生か", "活か", "及ぼ", "呼び出"], "", "godan-su", false),
    (&["増", "干", "覚ま", "冷ま", "冷や", "澄ま", "済ま", "励ま", "醒ま", "鳴ら", "濡ら"], "", "godan-su", false),
    // 不規則・表記統一
    (&["あ", "有"], "", "aru", true),
    (&["でき", "出来"], "", "dekiru", true),
    (&["わか", "分か", "判"], "", "wakaru", true),
    // 補助動詞: 〜ています / 〜ておきます / 〜てしまいます / 〜てみます
    (&["て", "で"], "い", "ichidan", false),
    (&["て", "で"], "お", "godan-ku", false),
    (&["て", "で"], "しま", "godan-u", false),
    (&["て", "で"], "み", "ichidan", false),
    // 五段 く・ぐ
    (&["行", "い"], "", "godan-iku", false),
    (&["聞", "書", "置", "働", "続", "動", "開", "描", "引", "歩", "効", "招", "解"], "", "godan-ku", false),
    (&["泳", "急", "防", "稼", "注", "繋", "継"], "", "godan-gu", false),
    // 五段 つ・ぬ・ぶ・む
    (&["待", "持", "立", "た", "保", "勝", "打", "育", "役立"], "", "godan-tsu", false),
    (&["死"], "", "godan-nu", false),
    (&["呼", "学", "選", "遊", "運", "結", "並", "喜", "及"], "", "godan-bu", false),
    (&["読", "読み込", "含", "進", "住", "望", "頼", "楽し", "組", "済", "生", "踏"], "", "godan-mu", false),
    // 五段 る
    (&["取", "受け取", "な", "成", "異な", "終わ", "始ま", "変わ", "知", "送", "作", "入"], "", "godan-ru", false),
    (&["帰", "戻", "守", "乗", "切", "走", "減", "困", "渡", "限", "図", "計", "至", "頑張"], "", "godan-ru", false),
    // おります (humble いる); 〜ております is handled by the head table
    (&["お"], "", "godan-ru", false),
    (&["当た", "上が", "下が", "集ま", "決ま", "止ま", "伝わ", "加わ", "関わ", "係わ", "残"], "", "godan-ru", false),
    // 五段 う
    (&["会", "出会", "言", "い", "思", "使", "行", "違", "伴", "従", "扱", "買"], "", "godan-u", false),
    (&["払", "向か", "手伝", "習", "失", "補", "願", "問", "争", "競", "誘", "養"], "", "godan-u", false),
    (&["笑", "吸", "歌", "洗", "拾", "迷", "揃", "追", "救", "雇", "舞", "匂"], "", "godan-u", false),
    // 一段
    (&["あたえ", "与え"], "", "ichidan", false),
    (&["あて", "当て"], "られ", "ichidan", false),
    (&["あて", "当て"], "", "ichidan", false),
    (&["うけ", "受け"], "", "ichidan", false),
    (&["たべ", "食べ"], "", "ichidan", false),
    (&["考え", "伝え", "覚え", "教え", "答え", "変え", "加え", "備え", "捉え", "支え"], "", "ichidan", false),
    (&["比べ", "調べ", "述べ", "決め", "求め", "始め", "止め", "認め", "含め", "進め", "集め", "定め"], "", "ichidan", false),
    (&["上げ", "挙げ", "投げ", "続け", "付け", "分け", "避け", "設け", "向け", "助け", "受け付け"], "", "ichidan", false),
    (&["捨て", "建て", "立て", "育て", "入れ", "忘れ", "離れ", "生まれ", "触れ", "見せ", "載せ", "任せ"], "", "ichidan", false),
    (&["起き", "生き", "過ぎ", "借り", "降り", "足り", "落ち", "用い", "感じ", "信じ", "閉じ", "応じ"], "", "ichidan", false),
    // single-kanji ichidan: the secondary registry has no bare ます key
    (&["見", "出", "寝", "着", "居", "似", "得", "来", "煮", "経", "射"], "", "ichidan", false),
];

/// (okurigana stems, phonetic pattern, ideographic pattern)
type SecondaryRow = (&'static [&'static str], &'static str, &'static str);

const SECONDARY: &[SecondaryRow] = &[
    (&[""], "godan-ku", "godan-ku"),
    (&[""], "godan-gu", "godan-gu"),
    (&[""], "godan-tsu", "godan-tsu"),
    (&[""], "godan-nu", "godan-nu"),
    (&[""], "godan-bu", "godan-bu"),
    (&[""], "godan-mu", "godan-mu"),
    (&[""], "godan-ru", "godan-ru"),
    // no "" stem: kanji + ます would also match plain 覚ます / 冷ます
    (&["え", "け", "げ", "じ", "て", "べ", "め"], "ichidan", "ichidan"),
];

/// The built-in primary registry, in application order.
pub fn standard_stems() -> StemRegistry {
    PRIMARY
        .iter()
        .map(|(stems, linker, pattern, over)| {
            let entry = StemEntry::new(*stems, *linker, *pattern);
            if *over {
                entry.with_override()
            } else {
                entry
            }
        })
        .collect()
}

/// The built-in secondary registry.
pub fn standard_secondary() -> SecondaryRegistry {
    SECONDARY
        .iter()
        .map(|(stems, phonetic, ideographic)| SecondaryEntry::new(*stems, "", *phonetic, *ideographic))
        .collect()
}
