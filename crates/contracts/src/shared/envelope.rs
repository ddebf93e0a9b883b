//! Response envelope used by every admin endpoint.
//!
//! The server always answers with `{ status, message?, data? }`. A `200`
//! with `status: false` is an application-level failure, so decoding yields
//! a tagged [`ApiResponse`] instead of an optional-chained blob. Shape
//! mismatches (not an envelope, missing list key, undecodable rows) are
//! reported as `Err(String)`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw envelope as it arrives on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Tagged result of a call that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u32>,
}

/// One decoded page of a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    /// Always at least 1, even for an empty collection
    pub total_pages: u32,
    pub total_items: Option<u64>,
}

const DEFAULT_FAILURE: &str = "Request was rejected by the server";

fn parse_envelope(body: Value) -> Result<Envelope, String> {
    serde_json::from_value(body).map_err(|e| format!("Unexpected response shape: {}", e))
}

fn failure(message: Option<String>) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE.to_string())
}

/// Decode a paginated list envelope whose rows live under `data.<list_key>`.
pub fn decode_list<T: DeserializeOwned>(
    body: Value,
    list_key: &str,
) -> Result<ApiResponse<ListPayload<T>>, String> {
    let envelope = parse_envelope(body)?;
    if !envelope.status {
        return Ok(ApiResponse::Failure {
            message: failure(envelope.message),
        });
    }

    let mut data = match envelope.data {
        Some(Value::Object(map)) => map,
        Some(other) => return Err(format!("Expected object in `data`, got {}", kind(&other))),
        None => return Err("Response has no `data` field".to_string()),
    };

    let rows = data
        .remove(list_key)
        .ok_or_else(|| format!("Response has no `data.{}` list", list_key))?;
    let items: Vec<T> = serde_json::from_value(rows)
        .map_err(|e| format!("Failed to decode `data.{}`: {}", list_key, e))?;

    let pagination = data
        .remove("pagination")
        .map(serde_json::from_value::<Pagination>)
        .transpose()
        .map_err(|e| format!("Failed to decode pagination: {}", e))?
        .unwrap_or_default();

    Ok(ApiResponse::Success(ListPayload {
        items,
        total_pages: pagination.total_pages.unwrap_or(1).max(1),
        total_items: pagination.total_items,
    }))
}

/// Decode the envelope of a mutation (create / update / toggle / delete).
///
/// The echoed record is optional: some endpoints return it directly in
/// `data`, some under `data.<record_key>`, others return nothing. A record
/// that does not decode is treated as absent, the mutation itself still
/// succeeded.
pub fn decode_mutation<T: DeserializeOwned>(
    body: Value,
    record_key: Option<&str>,
) -> Result<ApiResponse<Option<T>>, String> {
    let envelope = parse_envelope(body)?;
    if !envelope.status {
        return Ok(ApiResponse::Failure {
            message: failure(envelope.message),
        });
    }

    let record = envelope.data.and_then(|data| {
        let nested = record_key.and_then(|key| data.get(key).cloned());
        nested
            .and_then(|value| serde_json::from_value::<T>(value).ok())
            .or_else(|| serde_json::from_value::<T>(data).ok())
    });

    Ok(ApiResponse::Success(record))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    }

    #[test]
    fn test_decode_list_success() {
        let body = json!({
            "status": true,
            "data": {
                "managers": [{ "_id": "1", "name": "Ann" }, { "_id": "2", "name": "Bob" }],
                "pagination": { "totalPages": 4, "totalItems": 52 }
            }
        });
        let decoded = decode_list::<Row>(body, "managers").unwrap();
        match decoded {
            ApiResponse::Success(page) => {
                assert_eq!(page.items.len(), 2);
                assert_eq!(page.total_pages, 4);
                assert_eq!(page.total_items, Some(52));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_list_without_pagination_has_one_page() {
        let body = json!({ "status": true, "data": { "venues": [] } });
        let decoded = decode_list::<Row>(body, "venues").unwrap();
        assert_eq!(
            decoded,
            ApiResponse::Success(ListPayload {
                items: vec![],
                total_pages: 1,
                total_items: None,
            })
        );
    }

    #[test]
    fn test_decode_list_status_false_is_failure() {
        let body = json!({ "status": false, "message": "Session expired" });
        let decoded = decode_list::<Row>(body, "managers").unwrap();
        assert_eq!(
            decoded,
            ApiResponse::Failure {
                message: "Session expired".to_string()
            }
        );
    }

    #[test]
    fn test_decode_list_missing_key_is_shape_error() {
        let body = json!({ "status": true, "data": { "sellers": [] } });
        let err = decode_list::<Row>(body, "managers").unwrap_err();
        assert!(err.contains("data.managers"));
    }

    #[test]
    fn test_decode_list_not_an_envelope() {
        assert!(decode_list::<Row>(json!([1, 2, 3]), "managers").is_err());
    }

    #[test]
    fn test_decode_mutation_nested_and_direct_record() {
        let nested = json!({ "status": true, "data": { "manager": { "_id": "7", "name": "Eve" } } });
        let direct = json!({ "status": true, "data": { "_id": "7", "name": "Eve" } });
        let expected = ApiResponse::Success(Some(Row {
            id: "7".to_string(),
            name: "Eve".to_string(),
        }));
        assert_eq!(decode_mutation::<Row>(nested, Some("manager")).unwrap(), expected);
        assert_eq!(decode_mutation::<Row>(direct, Some("manager")).unwrap(), expected);
    }

    #[test]
    fn test_decode_mutation_without_record() {
        let body = json!({ "status": true, "message": "Deleted" });
        assert_eq!(
            decode_mutation::<Row>(body, None).unwrap(),
            ApiResponse::Success(None)
        );
    }

    #[test]
    fn test_blank_failure_message_gets_default() {
        let body = json!({ "status": false, "message": "  " });
        match decode_mutation::<Row>(body, None).unwrap() {
            ApiResponse::Failure { message } => assert_eq!(message, DEFAULT_FAILURE),
            other => panic!("unexpected {:?}", other),
        }
    }
}
