use crate::Article;

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsPanel {
    /// Nothing searched yet.
    #[default]
    Hidden,
    Loading,
    Articles(Vec<Article>),
    /// Search succeeded with zero hits for `query`.
    NoResults { query: String },
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub query: String,
    pub method_token: String,
    /// Input, method selector and search button are disabled while loading.
    pub controls_enabled: bool,
    pub results: ResultsPanel,
    pub dirty: bool,
}
