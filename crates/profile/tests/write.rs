use profile::{
    DEFAULT_FILE_NAME, ProfileRecord, RandomGuids, WriteError, generate, write_multi_file,
    write_single_file,
};
use serde_json::Value;
use ssh::HostEntry;
use std::fs;
use std::path::Path;

fn records(names: &[&str]) -> Vec<ProfileRecord> {
    let entries: Vec<HostEntry> = names
        .iter()
        .filter_map(|name| HostEntry::from_alias(name))
        .collect();
    generate(&entries, "Default", &mut RandomGuids)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_single_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    let input = records(&["alpha", "beta", "gamma"]);

    let written = write_single_file(&input, &path).unwrap();
    assert_eq!(written, path);

    let value = read_json(&path);
    let profiles = value["Profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 3);
    for (profile, name) in profiles.iter().zip(["alpha", "beta", "gamma"]) {
        assert_eq!(profile["Name"], name);
        assert_eq!(profile["Command"], format!("ssh {name}"));
        assert_eq!(profile["Dynamic Profile Parent Name"], "Default");
        assert_eq!(profile["Custom Command"], "Yes");
        assert_eq!(profile["Tags"], serde_json::json!(["ssh"]));
    }
}

#[test]
fn test_single_file_parses_back_into_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let input = records(&["one", "two"]);

    write_single_file(&input, &path).unwrap();

    let document: profile::ProfileDocument =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document.profiles, input);
}

#[test]
fn test_single_file_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a/b/c/profiles.json");

    write_single_file(&records(&["x"]), &path).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_single_file_key_order_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    write_single_file(&records(&["web"]), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let positions: Vec<usize> = [
        "\"Name\"",
        "\"Guid\"",
        "\"Dynamic Profile Parent Name\"",
        "\"Custom Command\"",
        "\"Command\"",
        "\"Tags\"",
    ]
    .iter()
    .map(|key| text.find(key).unwrap())
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.ends_with('\n'));
}

#[test]
fn test_single_file_with_no_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    write_single_file(&[], &path).unwrap();
    assert_eq!(read_json(&path)["Profiles"], serde_json::json!([]));
}

#[test]
fn test_multi_file_sanitizes_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("profiles");

    let written = write_multi_file(&records(&["prod/db", "web.example.com"]), &out).unwrap();

    assert_eq!(
        written,
        vec![out.join("prod_db.json"), out.join("web.example.com.json")]
    );

    let value = read_json(&out.join("prod_db.json"));
    let profiles = value["Profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["Name"], "prod/db");
    assert_eq!(profiles[0]["Command"], "ssh prod/db");
}

#[test]
fn test_multi_file_one_file_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let written = write_multi_file(&records(&["a", "b", "c"]), dir.path()).unwrap();

    assert_eq!(written.len(), 3);
    for path in &written {
        let value = read_json(path);
        assert_eq!(value["Profiles"].as_array().unwrap().len(), 1);
    }
}

#[test]
fn test_write_failure_reports_target_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "").unwrap();
    let target = blocker.join("profiles.json");

    let err = write_single_file(&records(&["x"]), &target).unwrap_err();
    assert!(matches!(err, WriteError::CreateDir { .. }));
    assert_eq!(err.path(), blocker);
}

#[test]
fn test_multi_file_failure_reports_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let err = write_multi_file(&records(&["x"]), &blocker).unwrap_err();
    assert_eq!(err.path(), blocker);
    assert!(err.to_string().contains("not-a-dir"));
}
