use std::time::Instant;

use tokio::sync::mpsc;

use crate::cache::TtlCache;
use crate::event::KeyAction;
use crate::jql;
use crate::model::filter::{ComponentFilter, FilterSelection, Industry, StatusGroup};
use crate::model::issue::IssueSummary;
use crate::tracker::{self, SearchBackend};

#[derive(Debug, Clone)]
pub enum Action {
    Key(KeyAction),
    Tick,
    CountLoaded { jql: String, total: u64 },
    IssuesLoaded { jql: String, issues: Vec<IssueSummary> },
    FetchError(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Industry,
    Component,
    Status,
}

impl FilterField {
    pub fn next(self) -> FilterField {
        match self {
            FilterField::Industry => FilterField::Component,
            FilterField::Component => FilterField::Status,
            FilterField::Status => FilterField::Industry,
        }
    }

    pub fn prev(self) -> FilterField {
        match self {
            FilterField::Industry => FilterField::Status,
            FilterField::Component => FilterField::Industry,
            FilterField::Status => FilterField::Component,
        }
    }
}

pub struct App {
    pub focused: FilterField,
    pub industry_idx: usize,
    pub component_idx: usize,
    pub status_idx: usize,
    pub jql: String,
    pub count: Option<u64>,
    pub issues: Vec<IssueSummary>,
    pub loading_count: bool,
    pub loading_issues: bool,
    pub error: Option<String>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub action_tx: mpsc::UnboundedSender<Action>,
    backend: Box<dyn SearchBackend>,
    count_cache: TtlCache<u64>,
    issue_cache: TtlCache<Vec<IssueSummary>>,
}

impl App {
    pub fn new(backend: Box<dyn SearchBackend>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        let mut app = Self {
            focused: FilterField::Industry,
            industry_idx: 0,
            component_idx: 0,
            status_idx: 0,
            jql: String::new(),
            count: None,
            issues: Vec::new(),
            loading_count: false,
            loading_issues: false,
            error: None,
            flash_message: None,
            should_quit: false,
            action_tx,
            backend,
            count_cache: TtlCache::default(),
            issue_cache: TtlCache::default(),
        };
        app.jql = jql::build_jql(&app.selection());
        app
    }

    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            industry: Industry::ALL[self.industry_idx],
            component: ComponentFilter::options()[self.component_idx],
            status: StatusGroup::ALL[self.status_idx],
        }
    }

    pub fn show_issue_list(&self) -> bool {
        !self.selection().component.is_wildcard()
    }

    pub async fn update(&mut self, action: Action) {
        // Clear flash message after 3 seconds
        if let Some((_, t)) = &self.flash_message {
            if t.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }

        match action {
            Action::Key(key) => self.handle_key(key).await,
            Action::Tick => {}
            Action::CountLoaded { jql, total } => {
                // Ignore results for a query the user has already moved past.
                if jql == self.jql {
                    self.count_cache.insert(&jql, total);
                    self.count = Some(total);
                    self.loading_count = false;
                }
            }
            Action::IssuesLoaded { jql, issues } => {
                if jql == self.jql {
                    self.issue_cache.insert(&jql, issues.clone());
                    self.issues = issues;
                    self.loading_issues = false;
                }
            }
            Action::FetchError(msg) => {
                self.loading_count = false;
                self.loading_issues = false;
                // Drop results from the previous query; an error must not
                // render as a stale list or a false "no issues" notice.
                self.issues.clear();
                self.error = Some(msg);
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    async fn handle_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Up => {
                if self.step_focused(-1) {
                    self.refresh(false).await;
                }
            }
            KeyAction::Down => {
                if self.step_focused(1) {
                    self.refresh(false).await;
                }
            }
            KeyAction::NextFilter => {
                self.focused = self.focused.next();
            }
            KeyAction::PrevFilter => {
                self.focused = self.focused.prev();
            }
            KeyAction::Refresh => {
                self.flash_message = Some(("Refreshing from Jira".into(), Instant::now()));
                self.refresh(true).await;
            }
        }
    }

    // Returns false when already at the end of the focused list.
    fn step_focused(&mut self, delta: isize) -> bool {
        let (idx, len) = match self.focused {
            FilterField::Industry => (&mut self.industry_idx, Industry::ALL.len()),
            FilterField::Component => (&mut self.component_idx, ComponentFilter::options().len()),
            FilterField::Status => (&mut self.status_idx, StatusGroup::ALL.len()),
        };
        let next = idx.checked_add_signed(delta).filter(|n| *n < len);
        match next {
            Some(n) => {
                *idx = n;
                true
            }
            None => false,
        }
    }

    // Count first, then issues, strictly sequential. `force` invalidates the
    // cache for the current query.
    pub async fn refresh(&mut self, force: bool) {
        self.jql = jql::build_jql(&self.selection());
        self.error = None;
        let jql = self.jql.clone();

        if force {
            self.count_cache.invalidate(&jql);
            self.issue_cache.invalidate(&jql);
        }

        self.count = self.count_cache.get(&jql);
        if self.count.is_none() {
            self.loading_count = true;
            match tracker::count(self.backend.as_ref(), &jql).await {
                Ok(total) => {
                    let _ = self.action_tx.send(Action::CountLoaded {
                        jql: jql.clone(),
                        total,
                    });
                }
                Err(e) => {
                    let _ = self.action_tx.send(Action::FetchError(e.to_string()));
                    return;
                }
            }
        }

        if !self.show_issue_list() {
            self.issues.clear();
            self.loading_issues = false;
            return;
        }

        if let Some(issues) = self.issue_cache.get(&jql) {
            self.issues = issues;
            return;
        }
        self.loading_issues = true;
        match tracker::fetch_all(self.backend.as_ref(), &jql).await {
            Ok(issues) => {
                let _ = self.action_tx.send(Action::IssuesLoaded { jql, issues });
            }
            Err(e) => {
                let _ = self.action_tx.send(Action::FetchError(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::Component;
    use crate::tracker::{RetrievalError, SearchPage};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingBackend {
        calls: Arc<AtomicUsize>,
        total: u64,
    }

    #[async_trait]
    impl SearchBackend for CountingBackend {
        async fn search(
            &self,
            _jql: &str,
            _start_at: usize,
            _max_results: usize,
        ) -> Result<SearchPage, RetrievalError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(SearchPage {
                total: self.total,
                issues: Vec::new(),
            })
        }
    }

    /// Serves one issue until `fail` is flipped, then rejects every search.
    struct FlakyBackend {
        fail: Arc<AtomicBool>,
    }

    #[async_trait]
    impl SearchBackend for FlakyBackend {
        async fn search(
            &self,
            _jql: &str,
            start_at: usize,
            max_results: usize,
        ) -> Result<SearchPage, RetrievalError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RetrievalError::Rejected {
                    status: 503,
                    body: "service unavailable".into(),
                });
            }
            let issues = if max_results == 0 || start_at > 0 {
                Vec::new()
            } else {
                vec![IssueSummary {
                    key: "IPC-1".into(),
                    summary: "Order intake".into(),
                }]
            };
            Ok(SearchPage { total: 1, issues })
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl SearchBackend for FailingBackend {
        async fn search(
            &self,
            _jql: &str,
            _start_at: usize,
            _max_results: usize,
        ) -> Result<SearchPage, RetrievalError> {
            Err(RetrievalError::Rejected {
                status: 500,
                body: "boom".into(),
            })
        }
    }

    fn app_with(backend: Box<dyn SearchBackend>) -> (App, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(backend, tx), rx)
    }

    async fn drain(app: &mut App, rx: &mut mpsc::UnboundedReceiver<Action>) {
        while let Ok(action) = rx.try_recv() {
            app.update(action).await;
        }
    }

    #[test]
    fn default_selection_is_wildcard_component() {
        let (app, _rx) = app_with(Box::new(CountingBackend {
            calls: Arc::new(AtomicUsize::new(0)),
            total: 0,
        }));
        assert_eq!(app.selection().component, ComponentFilter::All);
        assert!(!app.show_issue_list());
        assert!(app.jql.contains("component IN"));
    }

    #[test]
    fn filter_focus_cycles() {
        assert_eq!(FilterField::Industry.next(), FilterField::Component);
        assert_eq!(FilterField::Status.next(), FilterField::Industry);
        assert_eq!(FilterField::Industry.prev(), FilterField::Status);
    }

    #[tokio::test]
    async fn refresh_uses_cache_on_second_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut app, mut rx) = app_with(Box::new(CountingBackend {
            calls: calls.clone(),
            total: 12,
        }));

        app.refresh(false).await;
        drain(&mut app, &mut rx).await;
        assert_eq!(app.count, Some(12));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        app.refresh(false).await;
        drain(&mut app, &mut rx).await;
        assert_eq!(app.count, Some(12));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn forced_refresh_invalidates_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut app, mut rx) = app_with(Box::new(CountingBackend {
            calls: calls.clone(),
            total: 12,
        }));

        app.refresh(false).await;
        drain(&mut app, &mut rx).await;
        app.refresh(true).await;
        drain(&mut app, &mut rx).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fetch_failure_sets_error_and_clears_loading() {
        let (mut app, mut rx) = app_with(Box::new(FailingBackend));
        app.refresh(false).await;
        drain(&mut app, &mut rx).await;
        assert!(!app.loading_count);
        let error = app.error.as_deref().unwrap();
        assert!(error.contains("500"));
        assert!(error.contains("boom"));
        assert_eq!(app.count, None);
    }

    #[tokio::test]
    async fn single_component_selection_fetches_issue_list() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut app, mut rx) = app_with(Box::new(CountingBackend {
            calls: calls.clone(),
            total: 0,
        }));
        // Move the component picker off the wildcard.
        app.component_idx = 1;
        assert_eq!(
            app.selection().component,
            ComponentFilter::Only(Component::BuyToOrder)
        );

        app.refresh(false).await;
        drain(&mut app, &mut rx).await;
        assert!(app.show_issue_list());
        // One count call plus one (empty) page.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(app.issues.is_empty());
    }

    #[tokio::test]
    async fn failed_refresh_clears_previous_issue_list() {
        let fail = Arc::new(AtomicBool::new(false));
        let (mut app, mut rx) = app_with(Box::new(FlakyBackend { fail: fail.clone() }));
        app.component_idx = 1;
        app.refresh(false).await;
        drain(&mut app, &mut rx).await;
        assert_eq!(app.issues.len(), 1);

        // Next selection's fetch fails; the old list must not survive it.
        fail.store(true, Ordering::SeqCst);
        app.component_idx = 2;
        app.refresh(false).await;
        drain(&mut app, &mut rx).await;
        assert!(app.error.is_some());
        assert!(app.issues.is_empty());
    }

    #[tokio::test]
    async fn stale_results_are_ignored() {
        let (mut app, _rx) = app_with(Box::new(CountingBackend {
            calls: Arc::new(AtomicUsize::new(0)),
            total: 5,
        }));
        let old_jql = app.jql.clone();
        app.industry_idx = 1;
        app.jql = jql::build_jql(&app.selection());

        app.update(Action::CountLoaded {
            jql: old_jql,
            total: 99,
        })
        .await;
        assert_eq!(app.count, None);
    }

    #[tokio::test]
    async fn step_focused_stops_at_bounds() {
        let (mut app, _rx) = app_with(Box::new(CountingBackend {
            calls: Arc::new(AtomicUsize::new(0)),
            total: 0,
        }));
        assert!(!app.step_focused(-1));
        assert_eq!(app.industry_idx, 0);
        for _ in 0..Industry::ALL.len() {
            app.step_focused(1);
        }
        assert_eq!(app.industry_idx, Industry::ALL.len() - 1);
    }
}
