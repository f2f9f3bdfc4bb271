use crate::view_model::{ResultsPanel, SessionViewModel};
use crate::{Article, DEFAULT_METHOD_TOKEN};

/// Monotonic id attached to every dispatched search.
pub type RequestId = u64;

/// Result of one backend round-trip, already folded to a user-facing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Success(Vec<Article>),
    Failed(String),
}

/// Lifecycle of the search session. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Article>),
    Failed(String),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    method_token: String,
    state: SessionState,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    submitted_query: Option<String>,
    dirty: bool,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            method_token: DEFAULT_METHOD_TOKEN.to_string(),
            state: SessionState::Idle,
            next_request_id: 1,
            in_flight: None,
            submitted_query: None,
            dirty: false,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with a different preselected method token.
    pub fn with_method(method_token: impl Into<String>) -> Self {
        Self {
            method_token: method_token.into(),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn method_token(&self) -> &str {
        &self.method_token
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Id of the request whose outcome the session is waiting for.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn view(&self) -> SessionViewModel {
        let results = match &self.state {
            SessionState::Idle => ResultsPanel::Hidden,
            SessionState::Loading => ResultsPanel::Loading,
            SessionState::Success(articles) if articles.is_empty() => ResultsPanel::NoResults {
                query: self.submitted_query.clone().unwrap_or_default(),
            },
            SessionState::Success(articles) => ResultsPanel::Articles(articles.clone()),
            SessionState::Failed(message) => ResultsPanel::Error(message.clone()),
        };
        SessionViewModel {
            query: self.query.clone(),
            method_token: self.method_token.clone(),
            controls_enabled: !self.state.is_loading(),
            results,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    pub(crate) fn select_method(&mut self, method_token: String) {
        if self.method_token != method_token {
            self.method_token = method_token;
            self.dirty = true;
        }
    }

    /// Enters `Loading`, dropping any previous payload, and hands out a fresh request id.
    pub(crate) fn begin_request(&mut self, submitted_query: &str) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.state = SessionState::Loading;
        self.in_flight = Some(request_id);
        self.submitted_query = Some(submitted_query.to_string());
        self.dirty = true;
        request_id
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.state = SessionState::Failed(message);
        self.in_flight = None;
        self.dirty = true;
    }

    /// Applies an outcome if it belongs to the in-flight request. Stale outcomes are dropped.
    pub(crate) fn complete(&mut self, request_id: RequestId, outcome: SearchOutcome) -> bool {
        if !self.state.is_loading() || self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.state = match outcome {
            SearchOutcome::Success(articles) => SessionState::Success(articles),
            SearchOutcome::Failed(message) => SessionState::Failed(message),
        };
        self.dirty = true;
        true
    }
}
