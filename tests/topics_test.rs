//! Integration tests for building the topic notebooks.

use llm_param_notebooks::notebook::Document;
use llm_param_notebooks::topics::{self, Topic};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_build_all_writes_every_topic() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("notebooks/prompt-engineering/parameters");

    let paths = topics::build_all(&out_dir).unwrap();
    assert_eq!(paths.len(), Topic::all().len());

    for topic in Topic::all() {
        let path = out_dir.join(topic.file_name());
        assert!(paths.contains(&path), "{} missing from result", topic);

        let parsed = Document::read(&path).unwrap();
        assert_eq!(parsed.blocks(), topic.blocks().unwrap().as_slice());
    }
}

#[test]
fn test_rebuilding_is_byte_identical() {
    let dir = tempdir().unwrap();

    let path = topics::build_topic(Topic::StopSequences, dir.path()).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    topics::build_topic(Topic::StopSequences, dir.path()).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_written_notebook_is_nbformat_v4() {
    let dir = tempdir().unwrap();
    let path = topics::build_topic(Topic::Temperature, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "01_temperature.ipynb");

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["nbformat"], 4);

    let cells = value["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 5);
    assert_eq!(cells[0]["cell_type"], "markdown");
    assert_eq!(cells[0]["source"][0], "# Temperature Parameter in LLMs\n");
    assert_eq!(cells[1]["cell_type"], "code");
    assert_eq!(cells[1]["outputs"], serde_json::json!([]));
    assert!(cells[1]["execution_count"].is_null());
}

#[test]
fn test_seed_notebook_layout() {
    let doc = Topic::Seed.document().unwrap();
    assert_eq!(doc.len(), 7);
    assert!(doc.blocks()[5].text().contains("test_seed = 42"));
}
