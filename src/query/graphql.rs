use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::query::error::QueryError;
use crate::query::types::Character;
use crate::query::QueryClient;

/// Parametrized character page query.
pub const CHARACTERS_QUERY: &str =
    "query ($page: Int) { characters(page: $page) { results { id name status image } } }";

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<CharactersData>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct CharactersData {
    characters: Option<CharacterPage>,
}

#[derive(Debug, Deserialize)]
struct CharacterPage {
    results: Option<Vec<Character>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// [`QueryClient`] that POSTs the characters query to a GraphQL endpoint.
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
    request_timeout: Duration,
}

impl GraphQlClient {
    pub fn new(api: &ApiConfig) -> Result<Self, QueryError> {
        let client = Client::builder()
            .connect_timeout(api.connect_timeout())
            .build()
            .map_err(QueryError::Transport)?;

        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            request_timeout: api.timeout(),
        })
    }

    async fn do_fetch(&self, page: u32) -> Result<Vec<Character>, QueryError> {
        let body = serde_json::json!({
            "query": CHARACTERS_QUERY,
            "variables": { "page": page },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(QueryError::Transport)?;

        let status = response.status();
        tracing::debug!(page, status = status.as_u16(), "Characters query answered");

        let text = response.text().await.map_err(QueryError::Transport)?;

        if !status.is_success() {
            // Prefer the server's own GraphQL error message when it sent one.
            if let Ok(parsed) = serde_json::from_str::<GraphQlResponse>(&text) {
                if let Some(first) = parsed.errors.into_iter().next() {
                    return Err(QueryError::GraphQl(first.message));
                }
            }
            return Err(QueryError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let parsed: GraphQlResponse = serde_json::from_str(&text).map_err(QueryError::Decode)?;
        if let Some(first) = parsed.errors.into_iter().next() {
            return Err(QueryError::GraphQl(first.message));
        }

        parsed
            .data
            .and_then(|data| data.characters)
            .and_then(|page| page.results)
            .ok_or(QueryError::MissingData)
    }
}

#[async_trait]
impl QueryClient for GraphQlClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Character>, QueryError> {
        match timeout(self.request_timeout, self.do_fetch(page)).await {
            Ok(result) => result,
            Err(_) => Err(QueryError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_results_envelope() {
        let json = r#"{"data":{"characters":{"results":[
            {"id":"1","name":"Rick Sanchez","status":"Alive","image":"u1"}
        ]}}}"#;
        let parsed: GraphQlResponse = serde_json::from_str(json).unwrap();
        let results = parsed.data.unwrap().characters.unwrap().results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].image_url, "u1");
    }

    #[test]
    fn parses_error_envelope_with_null_data() {
        let json = r#"{"errors":[{"message":"404: Not Found"}],"data":{"characters":null}}"#;
        let parsed: GraphQlResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.errors[0].message, "404: Not Found");
        assert!(parsed.data.unwrap().characters.is_none());
    }

    #[test]
    fn query_selects_page_variable_and_card_fields() {
        assert!(CHARACTERS_QUERY.contains("characters(page: $page)"));
        for field in ["id", "name", "status", "image"] {
            assert!(CHARACTERS_QUERY.contains(field));
        }
    }
}
