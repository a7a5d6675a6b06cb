use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

const DOC: &str = r#"{
  "documentId": "once",
  "body": { "content": [
    { "endIndex": 1, "sectionBreak": {} },
    { "startIndex": 1, "endIndex": 34, "paragraph": { "elements": [
      { "startIndex": 1, "endIndex": 34, "textRun": {
        "content": "<code> <conf> #lang=java </conf>\n",
        "textStyle": { "italic": true } } }
    ] } },
    { "startIndex": 34, "endIndex": 41, "paragraph": { "elements": [
      { "startIndex": 34, "endIndex": 41, "textRun": { "content": "int x;\n", "textStyle": {} } }
    ] } },
    { "startIndex": 41, "endIndex": 49, "paragraph": { "elements": [
      { "startIndex": 41, "endIndex": 49, "textRun": {
        "content": "</code>\n", "textStyle": { "italic": true } } }
    ] } }
  ] }
}"#;

fn highlighter(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docs-highlighter"));
    // keep any real config file out of the way
    cmd.env("HOME", home.path()).env("RUST_LOG", "warn");
    cmd
}

#[test]
fn once_prints_one_batch() {
    let home = TempDir::new().unwrap();
    let doc = home.path().join("doc.json");
    std::fs::write(&doc, DOC).unwrap();

    let output = highlighter(&home).arg(&doc).arg("--once").output().unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 1);

    let edits = lines[0]["edits"].as_array().unwrap();
    assert_eq!(edits[0]["kind"], "update_font");
    assert_eq!(edits[0]["range"], serde_json::json!({ "start": 34, "end": 41 }));
    assert!(edits.iter().any(|e| e["kind"] == "update_foreground_color"
        && e["range"] == serde_json::json!({ "start": 34, "end": 37 })));
}

#[test]
fn once_fails_for_missing_document() {
    let home = TempDir::new().unwrap();
    let output = highlighter(&home)
        .arg(home.path().join("missing.json"))
        .arg("--once")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Document not found"));
}

#[test]
fn edits_path_from_config_file() {
    let home = TempDir::new().unwrap();
    let doc = home.path().join("doc.json");
    let edits = home.path().join("edits.jsonl");
    std::fs::write(&doc, DOC).unwrap();
    let config_dir = home.path().join(".config/docs-highlighter");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!(
            "document = {:?}\nedits_path = {:?}\n",
            doc.display().to_string(),
            edits.display().to_string()
        ),
    )
    .unwrap();

    let output = highlighter(&home).arg("--once").output().unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&edits).unwrap().lines().count(), 1);
}
