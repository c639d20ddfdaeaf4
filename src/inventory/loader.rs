//! Inventory YAML loading.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{ReportError, Result};

use super::host::{HostEntry, HostReport};

/// Read and parse the inventory document at `path`.
///
/// # Errors
///
/// Returns `FileNotFound` if the file doesn't exist, `InventoryParse` if it
/// is not a mapping of mappings, and `EmptyInventory` if it has no hosts.
pub fn load_inventory(path: &Path) -> Result<HostReport> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::from_read(path, e))?;
    let report = parse_inventory(&content, path)?;

    tracing::debug!(
        "Loaded {} hosts from {}",
        report.hosts().len(),
        path.display()
    );

    Ok(report)
}

/// Parse inventory YAML. `path` is only used in error messages.
pub fn parse_inventory(content: &str, path: &Path) -> Result<HostReport> {
    let doc: Value = serde_yaml::from_str(content).map_err(|e| ReportError::InventoryParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mapping = match doc {
        Value::Mapping(m) => m,
        Value::Null => {
            return Err(ReportError::EmptyInventory {
                path: path.to_path_buf(),
            })
        }
        other => {
            return Err(ReportError::InventoryParse {
                path: path.to_path_buf(),
                message: format!("expected a mapping of hosts, found {}", kind_of(&other)),
            })
        }
    };

    let mut hosts = Vec::with_capacity(mapping.len());
    for (key, params) in mapping {
        let name = key_text(&key, path)?;
        hosts.push(parse_host(name, params, path)?);
    }

    if hosts.is_empty() {
        return Err(ReportError::EmptyInventory {
            path: path.to_path_buf(),
        });
    }

    Ok(HostReport::new(hosts))
}

fn parse_host(name: String, params: Value, path: &Path) -> Result<HostEntry> {
    let mut host = HostEntry::new(name);

    let mapping = match params {
        Value::Mapping(m) => m,
        Value::Null => return Ok(host),
        other => {
            return Err(ReportError::InventoryParse {
                path: path.to_path_buf(),
                message: format!(
                    "host '{}' must map to parameters, found {}",
                    host.name,
                    kind_of(&other)
                ),
            })
        }
    };

    for (key, value) in mapping {
        let parameter = key_text(&key, path)?;
        match scalar_text(&value) {
            Some(Some(text)) => host.set(parameter, text),
            // null: treated as not reported for this host
            Some(None) => {}
            None => {
                return Err(ReportError::UnsupportedValue {
                    host: host.name,
                    parameter,
                })
            }
        }
    }

    Ok(host)
}

/// Text of a scalar. `Some(None)` for null, `None` for non-scalars.
fn scalar_text(value: &Value) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::Bool(b) => Some(Some(b.to_string())),
        Value::Number(n) => Some(Some(n.to_string())),
        Value::String(s) => Some(Some(s.clone())),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn key_text(key: &Value, path: &Path) -> Result<String> {
    match scalar_text(key) {
        Some(Some(text)) => Ok(text),
        _ => Err(ReportError::InventoryParse {
            path: path.to_path_buf(),
            message: format!("unsupported key of type {}", kind_of(key)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ParameterSet;

    fn parse(yaml: &str) -> Result<HostReport> {
        parse_inventory(yaml, Path::new("report.yaml"))
    }

    #[test]
    fn preserves_host_and_parameter_order() {
        let report = parse(
            r#"
zeta:
  svc_status: Running
  agent_version: "2.5"
alpha:
  svc_status: inactive
  agent_version: "1.0"
"#,
        )
        .unwrap();

        assert_eq!(report.host_names(), vec!["zeta", "alpha"]);
        assert_eq!(
            report.parameters(ParameterSet::FirstHost),
            vec!["svc_status", "agent_version"]
        );
    }

    #[test]
    fn coerces_numbers_and_booleans_to_text() {
        let report = parse("h:\n  agent_version: 2.5\n  enabled: true\n  build: 42\n").unwrap();
        let host = &report.hosts()[0];
        assert_eq!(host.get("agent_version"), Some("2.5"));
        assert_eq!(host.get("enabled"), Some("true"));
        assert_eq!(host.get("build"), Some("42"));
    }

    #[test]
    fn numeric_host_names_become_text() {
        let report = parse("10:\n  svc_status: Running\n").unwrap();
        assert_eq!(report.host_names(), vec!["10"]);
    }

    #[test]
    fn null_values_are_absent() {
        let report = parse("h:\n  agent_version: ~\n  svc_status: Running\n").unwrap();
        let host = &report.hosts()[0];
        assert!(host.get("agent_version").is_none());
        assert_eq!(host.get("svc_status"), Some("Running"));
    }

    #[test]
    fn host_without_parameters_is_kept() {
        let report = parse("a:\nb:\n  svc_status: Running\n").unwrap();
        assert_eq!(report.host_names(), vec!["a", "b"]);
        assert!(report.parameters(ParameterSet::FirstHost).is_empty());
    }

    #[test]
    fn empty_document_is_empty_inventory() {
        assert!(matches!(parse(""), Err(ReportError::EmptyInventory { .. })));
        assert!(matches!(parse("{}"), Err(ReportError::EmptyInventory { .. })));
    }

    #[test]
    fn top_level_sequence_is_parse_error() {
        let err = parse("- a\n- b\n").unwrap_err();
        assert!(matches!(err, ReportError::InventoryParse { .. }));
        assert!(err.to_string().contains("a sequence"));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        assert!(matches!(
            parse("host: [unclosed"),
            Err(ReportError::InventoryParse { .. })
        ));
    }

    #[test]
    fn duplicate_parameter_keys_are_rejected() {
        let err = parse("h:\n  agent_version: \"1.0\"\n  agent_version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ReportError::InventoryParse { .. }));
        assert!(err.to_string().contains("agent_version"));
    }

    #[test]
    fn nested_values_are_unsupported() {
        let err = parse("h:\n  agent_version:\n    - 1\n    - 2\n").unwrap_err();
        assert!(matches!(
            err,
            ReportError::UnsupportedValue { ref host, ref parameter }
                if host == "h" && parameter == "agent_version"
        ));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = load_inventory(&temp.path().join("report.yaml"));
        assert!(matches!(result, Err(ReportError::FileNotFound { .. })));
    }
}
