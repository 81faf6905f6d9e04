//! The `getCharacters` GraphQL operation.
//!
//! Holds the query document, the request/response envelopes and the cache
//! key used to decide which pages belong to the same accumulated list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GalleryError, GalleryResult};
use crate::types::CharacterPage;

/// Operation name as it appears in the document
pub const OPERATION_NAME: &str = "getCharacters";

/// Name of the variable that selects the page. Excluded from the cache key.
pub const PAGE_VARIABLE: &str = "page";

/// The paginated characters query.
pub const GET_CHARACTERS: &str = r#"query getCharacters($page: Int) {
  characters(page: $page) {
    info {
      count
      pages
      next
      prev
    }
    results {
      id
      name
      status
      species
      gender
      origin {
        name
      }
      image
    }
  }
}"#;

/// Variables for [`GET_CHARACTERS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariables {
    pub page: u32,
}

impl QueryVariables {
    pub fn page(page: u32) -> Self {
        Self { page }
    }
}

/// POST body sent to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: QueryVariables,
}

impl<'a> GraphQlRequest<'a> {
    pub fn characters(page: u32) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            query: GET_CHARACTERS,
            variables: QueryVariables::page(page),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<CharactersData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct CharactersData {
    #[serde(default)]
    characters: Option<CharacterPage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    #[serde(default)]
    message: String,
}

/// Decode a response body into a page.
///
/// A non-empty `errors` list fails the whole response. A null
/// `data.characters` decodes to an empty page so the accumulator can ignore it.
pub fn decode_characters_response(body: &str) -> GalleryResult<CharacterPage> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        return Err(GalleryError::GraphQl(
            errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    Ok(response
        .data
        .and_then(|d| d.characters)
        .unwrap_or_default())
}

/// Cache key for accumulated results.
///
/// Built from the operation name and every variable except the page, so all
/// pages of the same logical query share one key and a change to any other
/// argument produces a different key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    operation: String,
    fixed_args: String,
}

impl QueryKey {
    /// Derive the key from a variables object. Non-object values are treated
    /// as having no fixed arguments.
    pub fn from_variables(operation: &str, variables: &Value) -> Self {
        let fixed: serde_json::Map<String, Value> = match variables {
            Value::Object(map) => map
                .iter()
                .filter(|(k, _)| k.as_str() != PAGE_VARIABLE)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            _ => serde_json::Map::new(),
        };
        Self {
            operation: operation.to_string(),
            // serde_json maps are ordered by key, so this is canonical
            fixed_args: Value::Object(fixed).to_string(),
        }
    }

    /// Key for the characters query
    pub fn characters() -> Self {
        Self::from_variables(OPERATION_NAME, &serde_json::json!({}))
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.operation, self.fixed_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GraphQlRequest::characters(3)).unwrap();
        assert_eq!(body["operationName"], "getCharacters");
        assert_eq!(body["variables"], json!({ "page": 3 }));
        assert!(body["query"].as_str().unwrap().contains("characters(page: $page)"));
    }

    #[test]
    fn test_document_selects_all_fields() {
        for field in [
            "count", "pages", "next", "prev", "id", "name", "status", "species", "gender",
            "origin", "image",
        ] {
            assert!(GET_CHARACTERS.contains(field), "missing field {}", field);
        }
    }

    #[test]
    fn test_decode_page() {
        let body = r#"{"data":{"characters":{
            "info":{"count":826,"pages":42,"next":2,"prev":null},
            "results":[{"id":"1","name":"Rick Sanchez","status":"Alive","species":"Human",
                        "gender":"Male","origin":{"name":"Earth (C-137)"},"image":"https://x/1.jpeg"}]
        }}}"#;
        let page = decode_characters_response(body).unwrap();
        assert_eq!(page.info.count, 826);
        assert_eq!(page.info.next, Some(2));
        assert_eq!(page.info.prev, None);
        let results = page.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].origin_name(), Some("Earth (C-137)"));
    }

    #[test]
    fn test_decode_graphql_errors() {
        let body = r#"{"data":null,"errors":[{"message":"Syntax Error"}]}"#;
        let err = decode_characters_response(body).unwrap_err();
        assert!(matches!(err, GalleryError::GraphQl(ref m) if m == &vec!["Syntax Error".to_string()]));
    }

    #[test]
    fn test_decode_null_characters_is_empty_page() {
        let page = decode_characters_response(r#"{"data":{"characters":null}}"#).unwrap();
        assert!(page.is_degenerate());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_characters_response("<html>").unwrap_err();
        assert!(matches!(err, GalleryError::Serialization(_)));
    }

    #[test]
    fn test_key_ignores_page_variable() {
        let a = QueryKey::from_variables(OPERATION_NAME, &json!({ "page": 1 }));
        let b = QueryKey::from_variables(OPERATION_NAME, &json!({ "page": 7 }));
        assert_eq!(a, b);
        assert_eq!(a, QueryKey::characters());
    }

    #[test]
    fn test_key_changes_with_other_variables() {
        let a = QueryKey::from_variables(OPERATION_NAME, &json!({ "page": 1, "name": "rick" }));
        let b = QueryKey::from_variables(OPERATION_NAME, &json!({ "page": 1, "name": "morty" }));
        assert_ne!(a, b);
        assert_ne!(a, QueryKey::characters());
    }
}
