//! Source file parsing

use std::collections::HashMap;

use crate::error::ResourceLoadError;
use crate::resources::catalog::{ComponentSource, ResourceCategory, SourceFormat};

/// Parsed content of one resource component
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResourceData {
    Table(HashMap<String, String>),
    List(Vec<String>),
}

impl ResourceData {
    pub(crate) fn into_table(self) -> HashMap<String, String> {
        match self {
            ResourceData::Table(table) => table,
            // a list declared where a table is expected maps every entry to itself
            ResourceData::List(list) => list.into_iter().map(|e| (e.clone(), e)).collect(),
        }
    }

    pub(crate) fn into_list(self) -> Vec<String> {
        match self {
            ResourceData::Table(table) => {
                let mut keys: Vec<String> = table.into_keys().collect();
                keys.sort();
                keys
            }
            ResourceData::List(list) => list,
        }
    }
}

/// Read and parse one component according to its format
pub(crate) fn load_component(
    category: ResourceCategory,
    source: &ComponentSource,
) -> Result<ResourceData, ResourceLoadError> {
    let format = source.resolved_format()?;

    let content =
        std::fs::read_to_string(&source.path).map_err(|e| ResourceLoadError::Read {
            category: category.as_str(),
            component: source.component.clone(),
            path: source.path.clone(),
            source: e,
        })?;

    match format {
        SourceFormat::KeyValue => {
            let table: HashMap<String, String> =
                serde_json::from_str(&content).map_err(|e| ResourceLoadError::Parse {
                    category: category.as_str(),
                    component: source.component.clone(),
                    path: source.path.clone(),
                    source: e,
                })?;
            Ok(ResourceData::Table(table))
        }
        SourceFormat::LineList => Ok(ResourceData::List(parse_lines(&content))),
    }
}

/// Split newline-delimited content, dropping empty lines and CR endings
pub(crate) fn parse_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_lines_trailing_newline() {
        assert_eq!(parse_lines("ang\nsa\nng\n"), vec!["ang", "sa", "ng"]);
    }

    #[test]
    fn test_parse_lines_crlf_and_blank() {
        assert_eq!(parse_lines("the\r\n\r\nis\r\n"), vec!["the", "is"]);
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn test_load_key_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contract-en.json");
        fs::write(&path, r#"{"can't": "cannot", "i'm": "i am"}"#).unwrap();

        let data = load_component(
            ResourceCategory::Contractions,
            &ComponentSource::new("en", &path),
        )
        .unwrap();
        let table = data.into_table();
        assert_eq!(table.get("can't").map(String::as_str), Some("cannot"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_key_value_rejects_nested_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contract-en.json");
        fs::write(&path, r#"{"can't": ["cannot"]}"#).unwrap();

        let result = load_component(
            ResourceCategory::Contractions,
            &ComponentSource::new("en", &path),
        );
        assert!(matches!(result, Err(ResourceLoadError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_component(
            ResourceCategory::Emojis,
            &ComponentSource::new("all", "/nonexistent/emojis-all.txt"),
        );
        match result {
            Err(ResourceLoadError::Read {
                category,
                component,
                ..
            }) => {
                assert_eq!(category, "emojis");
                assert_eq!(component, "all");
            }
            other => panic!("Expected Read error, got {other:?}"),
        }
    }
}
