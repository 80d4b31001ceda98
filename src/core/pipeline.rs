use crate::core::dedupe::dedupe_by_field;
use crate::core::project::project_all;
use crate::core::{
    DedupeConfigProvider, Pipeline, ProjectConfigProvider, Storage, TransformResult,
};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Read the whole file at `path` and parse it as a JSON list of items.
/// The root must be a list; anything else aborts the run.
fn read_record_list<S: Storage>(storage: &S, path: &str) -> Result<Vec<Value>> {
    let bytes = match storage.read_file(path) {
        Ok(bytes) => bytes,
        Err(EtlError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(EtlError::InputNotFoundError {
                path: path.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    let root: Value = serde_json::from_slice(&bytes).map_err(|e| EtlError::InputParseError {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    match root {
        Value::Array(items) => Ok(items),
        other => Err(EtlError::UnexpectedShapeError {
            path: path.to_string(),
            found: json_type_name(&other).to_string(),
        }),
    }
}

fn classify_write_error(path: &str, err: EtlError) -> EtlError {
    match err {
        EtlError::IoError(io) => EtlError::OutputWriteError {
            path: path.to_string(),
            reason: io.to_string(),
        },
        other => other,
    }
}

/// Serialize `records` with stable two-space indentation and write the whole
/// document in one shot. Non-ASCII characters are written literally.
fn write_record_list<S: Storage>(storage: &S, path: &str, records: &[Value]) -> Result<()> {
    let document = serde_json::to_string_pretty(records)?;
    storage
        .write_file(path, document.as_bytes())
        .map_err(|e| classify_write_error(path, e))
}

pub struct ProjectPipeline<S: Storage, C: ProjectConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ProjectConfigProvider> ProjectPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ProjectConfigProvider> Pipeline for ProjectPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Value>> {
        tracing::debug!("Reading records from: {}", self.config.input_path());
        read_record_list(&self.storage, self.config.input_path())
    }

    fn transform(&self, items: Vec<Value>) -> Result<TransformResult> {
        let (records, skipped_items) = project_all(items, self.config.fields());

        Ok(TransformResult {
            records,
            skipped_items,
            removed_duplicates: 0,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        write_record_list(&self.storage, self.config.output_path(), &result.records)?;

        tracing::info!("Kept fields: {}", self.config.fields().join(", "));
        Ok(self.config.output_path().to_string())
    }
}

pub struct DedupePipeline<S: Storage, C: DedupeConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: DedupeConfigProvider> DedupePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: DedupeConfigProvider> Pipeline for DedupePipeline<S, C> {
    fn extract(&self) -> Result<Vec<Value>> {
        tracing::debug!("Reading records from: {}", self.config.input_path());
        read_record_list(&self.storage, self.config.input_path())
    }

    fn transform(&self, items: Vec<Value>) -> Result<TransformResult> {
        let (records, removed_duplicates) = dedupe_by_field(items, self.config.key_field());

        Ok(TransformResult {
            records,
            skipped_items: 0,
            removed_duplicates,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let document = serde_json::to_string_pretty(&result.records)?;

        // 寫入前先把結果印出來供人工核對
        println!("--- Data After Removing Duplicates ---");
        println!("{}", document);
        println!("--------------------------------------");

        let path = self.config.output_path();
        self.storage
            .write_file(path, document.as_bytes())
            .map_err(|e| classify_write_error(path, e))?;

        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DedupeConfig, ProjectConfig};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone)]
    struct MockStorage {
        files: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Rc::new(RefCell::new(HashMap::new())),
            }
        }

        fn put(&self, path: &str, content: &str) {
            self.files
                .borrow_mut()
                .insert(path.to_string(), content.as_bytes().to_vec());
        }

        fn get(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn project_config() -> ProjectConfig {
        ProjectConfig {
            input_path: "players_orig.json".to_string(),
            output_path: "players.json".to_string(),
            fields: vec!["short_name".to_string(), "potential".to_string()],
        }
    }

    #[test]
    fn test_extract_parses_a_list_root() {
        let storage = MockStorage::new();
        storage.put(
            "players_orig.json",
            r#"[{"short_name": "A"}, {"short_name": "B"}]"#,
        );
        let pipeline = ProjectPipeline::new(storage, project_config());

        let items = pipeline.extract().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], json!({"short_name": "A"}));
    }

    #[test]
    fn test_extract_missing_input_is_classified() {
        let pipeline = ProjectPipeline::new(MockStorage::new(), project_config());

        let err = pipeline.extract().unwrap_err();

        assert!(matches!(
            err,
            EtlError::InputNotFoundError { ref path } if path == "players_orig.json"
        ));
    }

    #[test]
    fn test_extract_invalid_json_is_classified() {
        let storage = MockStorage::new();
        storage.put("players_orig.json", "{not json");
        let pipeline = ProjectPipeline::new(storage, project_config());

        let err = pipeline.extract().unwrap_err();

        assert!(matches!(err, EtlError::InputParseError { .. }));
    }

    #[test]
    fn test_extract_rejects_non_list_root() {
        let storage = MockStorage::new();
        storage.put("players_orig.json", r#"{"short_name": "A"}"#);
        let pipeline = ProjectPipeline::new(storage, project_config());

        let err = pipeline.extract().unwrap_err();

        assert!(matches!(
            err,
            EtlError::UnexpectedShapeError { ref found, .. } if found == "an object"
        ));
    }

    #[test]
    fn test_dedupe_extract_rejects_non_list_root_too() {
        // Root-shape validation is deliberately the same for both tools.
        let storage = MockStorage::new();
        storage.put("teams.json", r#""just a string""#);
        let pipeline = DedupePipeline::new(storage, DedupeConfig::default());

        let err = pipeline.extract().unwrap_err();

        assert!(matches!(
            err,
            EtlError::UnexpectedShapeError { ref found, .. } if found == "a string"
        ));
    }

    #[test]
    fn test_project_load_writes_pretty_document() {
        let storage = MockStorage::new();
        let pipeline = ProjectPipeline::new(storage.clone(), project_config());

        let result = TransformResult {
            records: vec![json!({"short_name": "K. Mbappé"})],
            skipped_items: 0,
            removed_duplicates: 0,
        };
        let output_path = pipeline.load(result).unwrap();

        assert_eq!(output_path, "players.json");
        let written = String::from_utf8(storage.get("players.json").unwrap()).unwrap();
        assert!(written.contains("\n  {"));
        // Accented characters are written literally, never \u-escaped.
        assert!(written.contains("K. Mbappé"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_dedupe_full_pass_through_stages() {
        let storage = MockStorage::new();
        storage.put(
            "teams.json",
            r#"[
                {"Team Name": "Arsenal", "City": "London"},
                {"Team Name": "Arsenal", "City": "Elsewhere"},
                {"Team Name": "Liverpool", "City": "Liverpool"}
            ]"#,
        );
        let pipeline = DedupePipeline::new(storage.clone(), DedupeConfig::default());

        let items = pipeline.extract().unwrap();
        let result = pipeline.transform(items).unwrap();
        assert_eq!(result.removed_duplicates, 1);

        let output_path = pipeline.load(result).unwrap();
        assert_eq!(output_path, "unique_teams.json");

        let written = storage.get("unique_teams.json").unwrap();
        let reparsed: Vec<Value> = serde_json::from_slice(&written).unwrap();
        assert_eq!(
            reparsed,
            vec![
                json!({"Team Name": "Arsenal", "City": "London"}),
                json!({"Team Name": "Liverpool", "City": "Liverpool"}),
            ]
        );
    }
}
