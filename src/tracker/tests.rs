use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{count, fetch_all, RetrievalError, SearchBackend, SearchPage, PAGE_SIZE};
use crate::model::issue::IssueSummary;

/// A mock backend serving a fixed issue list, recording every search call.
struct MockBackend {
    issues: Vec<IssueSummary>,
    calls: Arc<Mutex<Vec<(usize, usize)>>>,
    should_fail: bool,
}

impl MockBackend {
    fn with_issue_count(n: usize) -> Self {
        let issues = (0..n)
            .map(|i| IssueSummary {
                key: format!("IPC-{i}"),
                summary: format!("Use case {i}"),
            })
            .collect();
        Self {
            issues,
            calls: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    fn failing() -> Self {
        let mut backend = Self::with_issue_count(0);
        backend.should_fail = true;
        backend
    }

    fn calls(&self) -> Vec<(usize, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    async fn search(
        &self,
        _jql: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<SearchPage, RetrievalError> {
        self.calls.lock().unwrap().push((start_at, max_results));
        if self.should_fail {
            return Err(RetrievalError::Rejected {
                status: 401,
                body: "auth failure".into(),
            });
        }
        let end = (start_at + max_results).min(self.issues.len());
        let issues = if start_at >= self.issues.len() {
            Vec::new()
        } else {
            self.issues[start_at..end].to_vec()
        };
        Ok(SearchPage {
            total: self.issues.len() as u64,
            issues,
        })
    }
}

#[tokio::test]
async fn count_requests_zero_results() {
    let backend = MockBackend::with_issue_count(42);
    let total = count(&backend, "project = X").await.unwrap();
    assert_eq!(total, 42);
    assert_eq!(backend.calls(), vec![(0, 0)]);
}

#[tokio::test]
async fn fetch_all_pages_until_short_page() {
    let backend = MockBackend::with_issue_count(250);
    let issues = fetch_all(&backend, "project = X").await.unwrap();
    assert_eq!(issues.len(), 250);
    // 100, 100, 50 — the short third page stops the loop.
    assert_eq!(
        backend.calls(),
        vec![(0, PAGE_SIZE), (100, PAGE_SIZE), (200, PAGE_SIZE)]
    );
    assert_eq!(issues[0].key, "IPC-0");
    assert_eq!(issues[249].key, "IPC-249");
}

#[tokio::test]
async fn fetch_all_exact_page_boundary_needs_confirming_call() {
    let backend = MockBackend::with_issue_count(200);
    let issues = fetch_all(&backend, "project = X").await.unwrap();
    assert_eq!(issues.len(), 200);
    // Two full pages cannot prove exhaustion; a third, empty page does.
    assert_eq!(backend.calls().len(), 3);
}

#[tokio::test]
async fn fetch_all_zero_matches_is_normal() {
    let backend = MockBackend::with_issue_count(0);
    let issues = fetch_all(&backend, "project = X").await.unwrap();
    assert!(issues.is_empty());
    assert_eq!(backend.calls(), vec![(0, PAGE_SIZE)]);
}

#[tokio::test]
async fn fetch_all_preserves_service_order() {
    let backend = MockBackend::with_issue_count(150);
    let issues = fetch_all(&backend, "project = X").await.unwrap();
    let keys: Vec<&str> = issues.iter().map(|i| i.key.as_str()).collect();
    let expected: Vec<String> = (0..150).map(|i| format!("IPC-{i}")).collect();
    assert_eq!(keys, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn count_propagates_retrieval_error() {
    let backend = MockBackend::failing();
    let err = count(&backend, "project = X").await.unwrap_err();
    match err {
        RetrievalError::Rejected { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "auth failure");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_propagates_retrieval_error() {
    let backend = MockBackend::failing();
    let err = fetch_all(&backend, "project = X").await.unwrap_err();
    assert!(matches!(err, RetrievalError::Rejected { status: 401, .. }));
    // No further pages are requested after a failure.
    assert_eq!(backend.calls().len(), 1);
}

#[test]
fn retrieval_error_display_carries_detail() {
    let err = RetrievalError::Rejected {
        status: 400,
        body: "Field 'produtc' does not exist".into(),
    };
    let text = err.to_string();
    assert!(text.contains("400"));
    assert!(text.contains("does not exist"));
}
