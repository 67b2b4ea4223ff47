//! Case catalog of pre-filled example applications.
//!
//! Loaded once at startup from a static JSON array. Any failure leaves the
//! catalog empty; the rest of the service works without it.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::domain::application::ApplicationRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read case catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("case catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("case catalog must be a JSON array, found {0}")]
    NotAnArray(&'static str),

    #[error("case {index} is not a complete application record: {source}")]
    Shape {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Listing entry shown in the case picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseSummary {
    pub index: usize,
    pub label: String,
}

/// Read-only, ordered list of example records.
#[derive(Debug, Clone, Default)]
pub struct CaseCatalog {
    cases: Vec<ApplicationRecord>,
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a catalog payload. Every element must be a complete record.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<ApplicationRecord>, CatalogError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(CatalogError::NotAnArray(json_kind(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| CatalogError::Shape { index, source })
        })
        .collect()
}

impl CaseCatalog {
    pub fn new(cases: Vec<ApplicationRecord>) -> Self {
        Self { cases }
    }

    /// Load the catalog from `path`. Never fails: errors are logged and
    /// yield an empty catalog.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path.as_ref()).await {
            Ok(catalog) => {
                info!(cases = catalog.len(), "Case catalog loaded");
                catalog
            }
            Err(e) => {
                error!(error = %e, "Failed to load case catalog, continuing with none");
                Self::default()
            }
        }
    }

    pub async fn try_load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(parse_catalog(&bytes)?))
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Record at `index`, if any.
    pub fn select(&self, index: usize) -> Option<&ApplicationRecord> {
        self.cases.get(index)
    }

    pub fn summaries(&self) -> Vec<CaseSummary> {
        self.cases
            .iter()
            .enumerate()
            .map(|(index, case)| CaseSummary {
                index,
                label: case_label(case, index),
            })
            .collect()
    }
}

/// English name, else Chinese name, else `Case <n>` (1-based).
pub fn case_label(case: &ApplicationRecord, index: usize) -> String {
    if !case.name_en.is_empty() {
        case.name_en.clone()
    } else if !case.name_zh.is_empty() {
        case.name_zh.clone()
    } else {
        format!("Case {}", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn sample(name_en: &str, name_zh: &str) -> ApplicationRecord {
        let mut r = ApplicationRecord::default_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        r.name_en = name_en.into();
        r.name_zh = name_zh.into();
        r
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_array_of_records() {
        let cases = vec![sample("Cardiac Stent", "心臟支架"), sample("", "")];
        let file = write_temp(&serde_json::to_string(&cases).unwrap());

        let catalog = CaseCatalog::load(file.path()).await;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.select(0), Some(&cases[0]));
        assert!(catalog.select(2).is_none());
    }

    #[tokio::test]
    async fn non_array_payload_yields_empty_catalog() {
        let file = write_temp(r#"{"cases": []}"#);
        let catalog = CaseCatalog::load(file.path()).await;
        assert!(catalog.is_empty());

        assert!(matches!(
            parse_catalog(br#"{"cases": []}"#),
            Err(CatalogError::NotAnArray("an object"))
        ));
    }

    #[tokio::test]
    async fn missing_resource_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CaseCatalog::load(dir.path().join("defaultdataset.json")).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_yields_empty_catalog() {
        let file = write_temp("[{\"docNo\": ");
        assert!(CaseCatalog::load(file.path()).await.is_empty());
    }

    #[test]
    fn bundled_dataset_parses() {
        let cases = parse_catalog(include_bytes!("../../data/defaultdataset.json")).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(case_label(&cases[0], 0), "Cardiac Stent");
        assert_eq!(case_label(&cases[2], 2), "電動病床");
    }

    #[test]
    fn incomplete_record_is_a_shape_error() {
        let err = parse_catalog(br#"[{"docNo": "1"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Shape { index: 0, .. }));
    }

    #[test]
    fn labels_prefer_english_then_chinese_then_position() {
        let catalog = CaseCatalog::new(vec![
            sample("Cardiac Stent", "心臟支架"),
            sample("", "血糖試紙"),
            sample("", ""),
        ]);
        let labels: Vec<String> = catalog.summaries().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Cardiac Stent", "血糖試紙", "Case 3"]);
    }
}
