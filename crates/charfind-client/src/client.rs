use anyhow::{Context, Result};
use async_trait::async_trait;
use charfind_core::error::Error;
use charfind_core::traits::Lookup;
use charfind_core::types::CharacterRecord;
use reqwest::StatusCode;

/// Thin adapter over the character service: one `GET` per eligible
/// query, identifier appended as a path segment.
///
/// No retries and no timeout beyond the transport default. Eligibility
/// checking and failure-swallowing live in [`Lookup::search`]; this
/// type only performs the fetch and maps the response.
pub struct HttpLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

#[async_trait]
impl Lookup for HttpLookupClient {
    async fn fetch(&self, id: &str) -> Result<Option<CharacterRecord>> {
        let url = self.endpoint(id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let record: CharacterRecord = response
                    .json()
                    .await
                    .with_context(|| format!("malformed body from {url}"))?;
                Ok(Some(record))
            }
            status => Err(Error::Service(status.as_u16()).into()),
        }
    }
}
