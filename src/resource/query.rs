//! Query parameter construction for list operations.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::transport::TransportError;

/// Flattens a search filter into one level of string query parameters.
///
/// The filter serializes to a JSON object whose top-level fields become
/// query parameters. Null fields are skipped, scalars render naturally,
/// arrays join with commas, and nested objects pass through as their JSON
/// text (anything deeper than one level is opaque to this client).
pub(crate) fn flatten_query<S: Serialize>(
    search: &S,
) -> Result<HashMap<String, String>, TransportError> {
    let value = serde_json::to_value(search)?;

    let mut query = HashMap::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_basic_scalars() {
        #[derive(Serialize)]
        struct Search {
            limit: u32,
            name: String,
            active: bool,
        }

        let query = flatten_query(&Search {
            limit: 50,
            name: "gear".to_string(),
            active: true,
        })
        .unwrap();

        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("name"), Some(&"gear".to_string()));
        assert_eq!(query.get("active"), Some(&"true".to_string()));
    }

    #[test]
    fn test_skips_none_fields() {
        #[derive(Serialize)]
        struct Search {
            limit: Option<u32>,
            name: Option<String>,
        }

        let query = flatten_query(&Search {
            limit: Some(50),
            name: None,
        })
        .unwrap();

        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert!(!query.contains_key("name"));
    }

    #[test]
    fn test_joins_arrays_with_commas() {
        #[derive(Serialize)]
        struct Search {
            ids: Vec<u64>,
        }

        let query = flatten_query(&Search { ids: vec![1, 2, 3] }).unwrap();
        assert_eq!(query.get("ids"), Some(&"1,2,3".to_string()));
    }

    #[test]
    fn test_nested_objects_pass_through_as_json() {
        let search = serde_json::json!({ "range": { "min": 1, "max": 9 } });
        let query = flatten_query(&search).unwrap();

        let range = query.get("range").unwrap();
        let parsed: Value = serde_json::from_str(range).unwrap();
        assert_eq!(parsed["min"], 1);
    }

    #[test]
    fn test_unit_filter_produces_no_params() {
        let query = flatten_query(&()).unwrap();
        assert!(query.is_empty());
    }
}
