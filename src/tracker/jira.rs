use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use super::{RetrievalError, SearchBackend, SearchPage};
use crate::model::issue::IssueSummary;

pub struct JiraClient {
    base_url: String,
    auth_header: String,
    client: reqwest::Client,
}

impl JiraClient {
    pub fn new(base_url: String, email: String, api_token: String) -> Self {
        let creds = format!("{email}:{api_token}");
        let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {encoded}"),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    total: u64,
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

#[derive(Deserialize)]
struct JiraIssue {
    key: String,
    fields: IssueFields,
}

#[derive(Deserialize)]
struct IssueFields {
    summary: Option<String>,
}

#[async_trait]
impl SearchBackend for JiraClient {
    async fn search(
        &self,
        jql: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<SearchPage, RetrievalError> {
        let url = format!(
            "{}/rest/api/3/search?jql={}&startAt={start_at}&maxResults={max_results}&fields=summary",
            self.base_url,
            urlencoding::encode(jql)
        );

        let resp = self
            .client
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RetrievalError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let search: SearchResponse = resp.json().await?;
        let issues = search
            .issues
            .into_iter()
            .map(|issue| IssueSummary {
                key: issue.key,
                summary: issue.fields.summary.unwrap_or_default(),
            })
            .collect();

        Ok(SearchPage {
            total: search.total,
            issues,
        })
    }
}
