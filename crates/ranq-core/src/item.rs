//! Searchable item records
//!
//! Items are owned by the caller and treated as immutable snapshots by the
//! ranking engine. The CLI reads collections from a JSON array file or falls
//! back to the built-in sample set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RanqError, Result};

/// A searchable record: identity, display name, free-text body, and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, caller-assigned identifier
    pub id: u64,
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Load an item collection from a JSON array file.
    ///
    /// Malformed JSON or a non-array document maps to a data error rather
    /// than a generic JSON failure, so the CLI can exit with the data code.
    pub fn load_all(path: &Path) -> Result<Vec<Item>> {
        let content = std::fs::read_to_string(path).map_err(|e| RanqError::InvalidItems {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| RanqError::InvalidItems {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Built-in sample collection used when no items file is supplied.
    pub fn samples() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "React Hooks".to_string(),
                text: "Understanding React Hooks and their usage".to_string(),
                tags: vec![
                    "react".to_string(),
                    "javascript".to_string(),
                    "frontend".to_string(),
                ],
            },
            Item {
                id: 2,
                name: "TypeScript Basics".to_string(),
                text: "Introduction to TypeScript fundamentals".to_string(),
                tags: vec!["typescript".to_string(), "javascript".to_string()],
            },
            Item {
                id: 3,
                name: "CSS Grid".to_string(),
                text: "Modern layout with CSS Grid".to_string(),
                tags: vec!["css".to_string(), "frontend".to_string()],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_samples_have_unique_ids() {
        let items = Item::samples();
        let mut ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_load_all_round_trip() {
        let items = Item::samples();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, serde_json::to_string_pretty(&items).unwrap()).unwrap();

        let loaded = Item::load_all(&path).unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_load_all_missing_tags_defaults_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"[{{"id": 7, "name": "Bare", "text": "no tags"}}]"#).unwrap();

        let loaded = Item::load_all(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].tags.is_empty());
    }

    #[test]
    fn test_load_all_malformed_is_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Item::load_all(&path).unwrap_err();
        assert!(matches!(err, RanqError::InvalidItems { .. }));
    }

    #[test]
    fn test_load_all_missing_file_is_data_error() {
        let err = Item::load_all(Path::new("/nonexistent/items.json")).unwrap_err();
        assert!(matches!(err, RanqError::InvalidItems { .. }));
    }
}
