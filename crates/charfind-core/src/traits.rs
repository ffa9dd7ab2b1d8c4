use anyhow::Result;
use async_trait::async_trait;

use crate::types::{CharacterRecord, SearchOutcome};

/// Whether a raw query may be sent to the service: non-empty and fully
/// convertible to a finite number.
///
/// Evaluated independently of the numbers-only validator so the client
/// stays safe to call with any string.
pub fn fetch_eligible(query: &str) -> bool {
    !query.is_empty() && query.parse::<f64>().map_or(false, f64::is_finite)
}

/// Seam between the pipeline and the external character service.
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Fetch the record for `id`. `Ok(None)` is a service-reported
    /// not-found; `Err` is a transport or service failure.
    async fn fetch(&self, id: &str) -> Result<Option<CharacterRecord>>;

    /// Decide eligibility and run one lookup attempt.
    ///
    /// Failures are swallowed into a benign `NotFound` so a single bad
    /// attempt can never stall the stream for later queries.
    async fn search(&self, query: &str) -> SearchOutcome {
        if !fetch_eligible(query) {
            return SearchOutcome::NotApplicable;
        }
        match self.fetch(query).await {
            Ok(Some(record)) => SearchOutcome::Found(record),
            Ok(None) => SearchOutcome::NotFound,
            Err(err) => {
                tracing::warn!(query, error = %err, "lookup failed, treating as no result");
                SearchOutcome::NotFound
            }
        }
    }
}
