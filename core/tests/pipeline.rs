// core/tests/pipeline.rs
//
// Integration tests for the converter over tables loaded from TOML.
//
// Tests cover:
// - both passes over a small hand-written table set
// - file channels end to end
// - failed reads leave the sink untouched
// - one converter shared by several threads

use libdearu_core::{
    FileSink, FileSource, MemoryChannel, TextSource, ToneConverter, ToneError, ToneTables,
};
use std::path::PathBuf;

const TABLES: &str = r#"
exceptions = [
    { polite = "参照してください", assertive = "参照のこと" },
]
tail = [
    { polite = "です", assertive = "だ" },
]

[endings]
godan-iku = [
    { polite = "きます", assertive = "く" },
    { polite = "きましょう", assertive = "こう" },
    { polite = "きました", assertive = "った" },
    { polite = "きませんでした", assertive = "かなかった" },
    { polite = "きません", assertive = "かない" },
]
godan-ku = [
    { polite = "きます", assertive = "く" },
    { polite = "きましょう", assertive = "こう" },
    { polite = "きました", assertive = "いた" },
    { polite = "きませんでした", assertive = "かなかった" },
    { polite = "きません", assertive = "かない" },
]
ichidan = [
    { polite = "ます", assertive = "る" },
    { polite = "ましょう", assertive = "よう" },
    { polite = "ました", assertive = "た" },
    { polite = "ませんでした", assertive = "なかった" },
    { polite = "ません", assertive = "ない" },
]

[[stems]]
stems = ["行"]
pattern = "godan-iku"

[[stems]]
stems = ["食べ"]
pattern = "ichidan"

[[secondary]]
stems = [""]
phonetic = "godan-ku"
ideographic = "godan-ku"
"#;

fn converter() -> ToneConverter {
    let tables = ToneTables::from_toml_str(TABLES).unwrap();
    ToneConverter::new(tables).unwrap()
}

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("libdearu_core_pipeline_{}_{}.txt", tag, std::process::id()))
}

#[test]
fn converts_with_toml_tables() {
    let conv = converter();
    let input = "学校に行きました。りんごを食べます。字を書きませんでした。これは本です。参照してください。";
    let (out, report) = conv.convert_with_report(input).unwrap();
    assert_eq!(
        out,
        "学校に行った。りんごを食べる。字を書かなかった。これは本だ。参照のこと。"
    );
    assert_eq!(report.contextual_rules.get("書きませんでした"), Some("書かなかった"));
    assert_eq!(report.contextual_rules.len(), 1);
    assert_eq!(report.static_hits.len(), 4);
}

#[test]
fn explicit_stem_beats_generic_class() {
    // 行 is listed with its irregular past; the generic class would give 行いた
    let conv = converter();
    assert_eq!(conv.convert("行きました").unwrap(), "行った");
    assert_eq!(conv.convert("書きました").unwrap(), "書いた");
}

#[test]
fn file_channels_end_to_end() {
    let conv = converter();
    let input = temp_path("in");
    let output = temp_path("out");
    std::fs::write(&input, "明日行きます。\n手紙を書きます。\n").unwrap();

    let mut source = FileSource::new(&input);
    let mut sink = FileSink::new(&output);
    conv.run(&mut source, &mut sink).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
    assert_eq!(written, "明日行く。\n手紙を書く。\n");
}

#[test]
fn failed_read_leaves_sink_untouched() {
    let conv = converter();
    let mut source = FileSource::new("/nonexistent/libdearu_core/input.txt");
    let mut sink = MemoryChannel::new("previous contents");
    let err = conv.run(&mut source, &mut sink).unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, ToneError::SourceUnavailable { .. }));
    assert_eq!(sink.contents(), "previous contents");
}

#[test]
fn unknown_pattern_in_toml_is_rejected() {
    let broken = format!("{}\n[[stems]]\nstems = [\"読\"]\npattern = \"godan-mu\"\n", TABLES);
    let tables = ToneTables::from_toml_str(&broken).unwrap();
    match ToneConverter::new(tables) {
        Err(ToneError::UnknownPattern { pattern, stem }) => {
            assert_eq!(pattern, "godan-mu");
            assert_eq!(stem, "読");
        }
        other => panic!("expected UnknownPattern, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn shared_converter_across_threads() {
    let conv = converter();
    let inputs = [
        "学校に行きます。",
        "手紙を書きました。",
        "りんごを食べませんでした。",
        "これは本です。",
    ];
    let expected: Vec<String> = inputs.iter().map(|t| conv.convert(t).unwrap()).collect();

    let conv = &conv;
    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|t| s.spawn(move || conv.convert(t).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}

#[test]
fn memory_channel_reads_its_contents() {
    let mut channel = MemoryChannel::new("本です");
    assert_eq!(channel.read().unwrap(), "本です");
}
