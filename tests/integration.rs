//! Integration tests for loading real files and running the pipeline on them

use chatlens::config::{ChartConfig, SearchConfig};
use chatlens::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

const SAMPLE_CHAT: &str = "\
[2023-01-01, 12:00 PM] Alice: Hello, how are you?
[2023-01-01, 1:00 PM] Bob: I'm good, thanks!
[2023-01-01, 1:05 PM] Alice: Great to hear. Say hello to Carol for me
this line continues the previous message
[2023-01-02, 9:15 AM] Carol: hello hello
[2023-01-02, 9:16 AM] Bob: <Media omitted>
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn test_load_sample_split() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "_chat.txt", SAMPLE_CHAT);

    let table = load(&path, true).unwrap();
    assert_eq!(table.columns(), Column::SPLIT);
    assert_eq!(table.len(), 5);

    let first = &table.rows()[0];
    assert_eq!(first.timestamp.date(), Some("2023-01-01"));
    assert_eq!(first.timestamp.time(), Some("12:00 PM"));
    assert_eq!(first.sender, "Alice");
    assert_eq!(first.content, "Hello, how are you?");
}

#[test]
fn test_load_sample_raw() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "_chat.txt", SAMPLE_CHAT);

    let table = load(&path, false).unwrap();
    assert_eq!(table.columns(), Column::RAW);
    assert_eq!(table.rows()[1].get(Column::Timestamp), Some("2023-01-01, 1:00 PM"));
    assert_eq!(table.rows()[1].get(Column::Date), None);
}

#[test]
fn test_load_default_splits() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "chat.txt", SAMPLE_CHAT);

    let table = load_default(&path).unwrap();
    assert!(table.has_column(Column::Date));
    assert!(!table.has_column(Column::Timestamp));
}

#[test]
fn test_load_uses_supplied_path() {
    let dir = tempdir().unwrap();
    write_fixture(&dir, "_chat.txt", "[d, 1] Wrong: file");
    let path = write_fixture(&dir, "other.txt", "[d, 1] Right: file");

    let table = load(&path, true).unwrap();
    assert_eq!(table.rows()[0].sender, "Right");
}

#[test]
fn test_load_keeps_file_order_and_drops_malformed() {
    let dir = tempdir().unwrap();
    let content = "\
[d, 1] A: one
garbage
[d, 2] B: two
[no separator here
[d, 3] C: three
[d, 4] D without colon
";
    let path = write_fixture(&dir, "mixed.txt", content);

    let table = load(&path, true).unwrap();
    let senders: Vec<&str> = table.iter().map(|r| r.sender.as_str()).collect();
    assert_eq!(senders, vec!["A", "B", "C"]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = load(dir.path().join("nope.txt"), true).unwrap_err();
    assert!(err.is_file_access());
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_load_directory_is_file_access_error() {
    let dir = tempdir().unwrap();
    let err = load(dir.path(), true).unwrap_err();
    assert!(err.is_file_access());
}

#[test]
fn test_load_invalid_utf8_is_file_access_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, [b'[', b'd', b']', b' ', 0xFF, 0xFE, b':', b' ', b'x']).unwrap();

    let err = load(&path, true).unwrap_err();
    assert!(err.is_file_access());
}

#[test]
fn test_load_timestamp_without_comma_fails_split() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "bad.txt", "[d, 1] A: ok\n[12:00] B: no comma\n");

    let err = load(&path, true).unwrap_err();
    assert!(err.is_invalid_timestamp());
    assert!(err.to_string().contains("12:00"));

    // Without splitting the same file loads fine
    assert_eq!(load(&path, false).unwrap().len(), 2);
}

#[test]
fn test_load_empty_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "empty.txt", "");

    let split = load(&path, true).unwrap();
    assert!(split.is_empty());
    assert_eq!(split.columns(), Column::SPLIT);

    let raw = load(&path, false).unwrap();
    assert!(raw.is_empty());
    assert_eq!(raw.columns(), Column::RAW);
}

#[test]
fn test_load_crlf_line_endings() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "crlf.txt", "[d, 1] A: one\r\n[d, 2] B: two\r\n");

    let table = load(&path, true).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].content, "one");
}

#[test]
fn test_chat_loader_with_config() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "_chat.txt", SAMPLE_CHAT);

    let loader = ChatLoader::with_config(LoaderConfig::new().with_split_timestamp(false));
    let table = loader.load(&path).unwrap();
    assert_eq!(table.columns(), Column::RAW);
}

// =========================================================================
// Distribution
// =========================================================================

#[test]
fn test_distribution_is_alphabetical() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "_chat.txt", SAMPLE_CHAT);
    let table = load(&path, true).unwrap();

    let dist = sender_distribution(&table);
    let pairs: Vec<(&str, usize)> = dist.iter().collect();
    assert_eq!(pairs, vec![("Alice", 2), ("Bob", 2), ("Carol", 1)]);
    assert_eq!(dist.total(), table.len());
}

#[test]
fn test_distribution_ignores_row_order() {
    let a = load_str("[d, 1] Alice: x\n[d, 2] Alice: y\n[d, 3] Bob: z", true).unwrap();
    let b = load_str("[d, 1] Bob: z\n[d, 2] Alice: y\n[d, 3] Alice: x", true).unwrap();

    let da = sender_distribution(&a);
    let db = sender_distribution(&b);
    assert_eq!(da.get("Alice"), Some(2));
    assert_eq!(da.get("Bob"), Some(1));
    assert_eq!(da, db);
}

#[test]
fn test_report_then_svg() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "_chat.txt", SAMPLE_CHAT);
    let table = load(&path, true).unwrap();

    let mut out = Vec::new();
    let dist = report_sender_distribution_to(&mut out, &table, &ChartConfig::default()).unwrap();
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("Sender\nAlice  2\nBob    2\nCarol  1\n"));

    let svg_path = dir.path().join("senders.svg");
    BarChart::from_distribution(&dist, &ChartConfig::default())
        .write_svg(&svg_path)
        .unwrap();
    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("class=\"bar\"").count(), 3);
    assert!(svg.contains("Carol"));
}

#[test]
fn test_report_on_empty_table() {
    let table = load_str("", true).unwrap();
    let mut out = Vec::new();
    let dist = report_sender_distribution_to(&mut out, &table, &ChartConfig::default()).unwrap();
    assert!(dist.is_empty());

    let chart = BarChart::from_distribution(&dist, &ChartConfig::default());
    assert!(chart.bars().is_empty());
    assert!(!chart.render_svg().contains("class=\"bar\""));
}

// =========================================================================
// Search
// =========================================================================

#[test]
fn test_search_hello_example() {
    let table = load_str(
        "[d, 1] A: Hello there\n[d, 2] B: bye\n[d, 3] C: say hello!",
        true,
    )
    .unwrap();

    let hits = search("hello", &table).unwrap();
    assert_eq!(hits.columns(), Column::SEARCH);
    let contents: Vec<&str> = hits.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, vec!["Hello there", "say hello!"]);
}

#[test]
fn test_search_sample_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "_chat.txt", SAMPLE_CHAT);
    let table = load(&path, true).unwrap();

    let hits = search("hello", &table).unwrap();
    let senders: Vec<&str> = hits.iter().map(|r| r.sender.as_str()).collect();
    assert_eq!(senders, vec!["Alice", "Carol"]);
    assert_eq!(count_word_usage("hello", &table).unwrap(), 2);
}

#[test]
fn test_search_requires_split_table() {
    let table = load_str("[d, 1] A: hello", false).unwrap();
    let err = search("hello", &table).unwrap_err();
    assert!(err.is_missing_column());
    assert!(err.to_string().contains("Date"));
}

#[test]
fn test_search_on_empty_table() {
    let table = load_str("", true).unwrap();
    let hits = search("anything", &table).unwrap();
    assert!(hits.is_empty());
    assert_eq!(hits.columns(), Column::SEARCH);
}

#[test]
fn test_search_metacharacters_are_literal() {
    let table = load_str("[d, 1] A: what?\n[d, 2] B: whatever\n[d, 3] C: a.b", true).unwrap();

    assert_eq!(search("what?", &table).unwrap().len(), 1);
    assert_eq!(search(".", &table).unwrap().len(), 1);

    let pattern = search_with("what.*", &table, &SearchConfig::new().pattern()).unwrap();
    assert_eq!(pattern.len(), 2);
}

#[test]
fn test_search_result_does_not_touch_input() {
    let table = load_str("[d, 1] A: hello\n[d, 2] B: bye", true).unwrap();
    let before = table.clone();
    let _ = search("hello", &table).unwrap();
    assert_eq!(table, before);
}

// =========================================================================
// Rendering
// =========================================================================

#[test]
fn test_render_search_hits_all_formats() {
    let table = load_str(
        "[2023-01-01, 12:00 PM] Alice: Hello; friend\n[2023-01-01, 1:00 PM] Bob: bye",
        true,
    )
    .unwrap();
    let hits = search("hello", &table).unwrap();

    let text = render(&hits, TableFormat::Text).unwrap();
    assert_eq!(
        text,
        "   Date        Sender  Content\n0  2023-01-01  Alice   Hello; friend\n"
    );

    let csv = render(&hits, TableFormat::Csv).unwrap();
    assert!(csv.starts_with("Date;Sender;Content\n"));
    assert!(csv.contains("\"Hello; friend\""));

    let json = render(&hits, TableFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["Sender"], "Alice");
    assert_eq!(parsed[0]["Date"], "2023-01-01");
    assert!(parsed[0].get("Time").is_none());
}
