use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{LpToolError, TestCase, TESTCASE_SCHEMA_V1};

pub const CASE_FILE_SUFFIX: &str = ".case.json";

/// Every `*.case.json` file under `root`, sorted by path.
pub fn discover_case_files(root: &Path) -> Result<Vec<PathBuf>, LpToolError> {
    let mut cases = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().to_string_lossy().ends_with(CASE_FILE_SUFFIX))
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();

    if cases.is_empty() {
        return Err(LpToolError::CasesEmpty {
            path: root.to_path_buf(),
        });
    }

    cases.sort();
    Ok(cases)
}

pub fn read_test_case(case_path: &Path) -> Result<TestCase, LpToolError> {
    let raw = fs::read_to_string(case_path).map_err(|source| LpToolError::ReadFile {
        path: case_path.to_path_buf(),
        source,
    })?;
    let parsed: TestCase = serde_json::from_str(&raw).map_err(|source| LpToolError::ParseCase {
        path: case_path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(LpToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod source_tests {
    use super::*;

    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should move forward")
            .as_nanos();
        std::env::temp_dir().join(format!("lp-tool-{}-{}", name, nanos))
    }

    fn write_file(path: &Path, content: &str) {
        let parent = path.parent().expect("path should have parent");
        fs::create_dir_all(parent).expect("parent dir should be created");
        fs::write(path, content).expect("file should be written");
    }

    #[test]
    fn discover_case_files_filters_and_sorts() {
        let root = temp_dir("discover");
        write_file(&root.join("b.case.json"), "{}");
        write_file(&root.join("nested").join("a.case.json"), "{}");
        write_file(&root.join("notes.json"), "{}");
        write_file(&root.join("readme.txt"), "skip");

        let files = discover_case_files(&root).expect("scan should pass");
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("b.case.json"));
        assert!(files[1].ends_with("nested/a.case.json"));
    }

    #[test]
    fn discover_case_files_fails_when_none_found() {
        let root = temp_dir("empty");
        write_file(&root.join("ignore.txt"), "skip");

        let error = discover_case_files(&root).expect_err("empty dir should fail");
        assert!(matches!(error, LpToolError::CasesEmpty { .. }));
    }

    #[test]
    fn read_test_case_parses_valid_json() {
        let root = temp_dir("case-ok");
        let case_path = root.join("ok.case.json");
        write_file(
            &case_path,
            r#"{
  "schemaVersion":"lp-tool-case.v1",
  "variables":{"x":"a b"},
  "steps":[{"command":["lget","x","end"],"expect":{"kind":"value","value":"b"}}]
}"#,
        );

        let parsed = read_test_case(&case_path).expect("case should parse");
        assert_eq!(parsed.schema_version, TESTCASE_SCHEMA_V1);
        assert_eq!(parsed.variables["x"], "a b");
        assert_eq!(parsed.steps.len(), 1);
    }

    #[test]
    fn read_test_case_reports_read_error() {
        let missing_path = temp_dir("case-read-error").join("missing.case.json");
        let error = read_test_case(&missing_path).expect_err("missing case should fail");
        assert!(matches!(error, LpToolError::ReadFile { .. }));
    }

    #[test]
    fn read_test_case_reports_parse_and_schema_errors() {
        let root = temp_dir("case-errors");

        let bad_json_path = root.join("bad.case.json");
        write_file(&bad_json_path, "{");
        let parse_error = read_test_case(&bad_json_path).expect_err("parse should fail");
        assert!(matches!(parse_error, LpToolError::ParseCase { .. }));

        let bad_schema_path = root.join("bad-schema.case.json");
        write_file(&bad_schema_path, r#"{"schemaVersion":"v0","steps":[]}"#);
        let schema_error = read_test_case(&bad_schema_path).expect_err("schema should fail");
        assert!(matches!(
            schema_error,
            LpToolError::InvalidSchemaVersion { .. }
        ));
    }
}
