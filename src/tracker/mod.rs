pub mod jira;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::issue::IssueSummary;

pub const PAGE_SIZE: usize = 100;

/// Failure of an upstream search call, carrying the original cause.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Jira search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Jira rejected the search (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Matches for the whole query, not just this page.
    pub total: u64,
    pub issues: Vec<IssueSummary>,
}

/// Seam over the tracking service's search endpoint.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(
        &self,
        jql: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<SearchPage, RetrievalError>;
}

/// Total match count: one search requesting zero results.
pub async fn count(backend: &dyn SearchBackend, jql: &str) -> Result<u64, RetrievalError> {
    let page = backend.search(jql, 0, 0).await?;
    Ok(page.total)
}

/// All matches, paged by [`PAGE_SIZE`]. A short page signals exhaustion.
pub async fn fetch_all(
    backend: &dyn SearchBackend,
    jql: &str,
) -> Result<Vec<IssueSummary>, RetrievalError> {
    let mut all_issues = Vec::new();
    let mut start_at = 0;
    loop {
        let page = backend.search(jql, start_at, PAGE_SIZE).await?;
        let fetched = page.issues.len();
        all_issues.extend(page.issues);
        if fetched < PAGE_SIZE {
            break;
        }
        start_at += PAGE_SIZE;
    }
    Ok(all_issues)
}

#[cfg(test)]
pub mod tests;
