use thiserror::Error;

/// Token the shell sends for plain TF-IDF linear search.
pub const LINEAR_TOKEN: &str = "linear";
/// Prefix of reduced-rank tokens; the rank follows it, e.g. `svd-300`.
pub const SVD_PREFIX: &str = "svd-";

const LINEAR_ENDPOINT: &str = "/linear_search";
const SVD_ENDPOINT: &str = "/svd_search";

/// Retrieval strategy offered by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMethod {
    Linear,
    ReducedRank { rank: i64 },
}

impl SearchMethod {
    /// Endpoint path on the backend origin.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchMethod::Linear => LINEAR_ENDPOINT,
            SearchMethod::ReducedRank { .. } => SVD_ENDPOINT,
        }
    }

    pub fn rank(&self) -> Option<i64> {
        match self {
            SearchMethod::Linear => None,
            SearchMethod::ReducedRank { rank } => Some(*rank),
        }
    }

    /// Token that `resolve` maps back to this method.
    pub fn token(&self) -> String {
        match self {
            SearchMethod::Linear => LINEAR_TOKEN.to_string(),
            SearchMethod::ReducedRank { rank } => format!("{SVD_PREFIX}{rank}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("Unknown search method: {0}")]
    UnknownMethod(String),
    #[error("Invalid SVD rank selected.")]
    InvalidRank,
}

/// Parses a method token chosen by the user.
///
/// Whether a rank is one of the offered precomputed ranks is not checked here;
/// the shell only offers tokens built from its configured catalog.
pub fn resolve(method_id: &str) -> Result<SearchMethod, ResolutionError> {
    if method_id == LINEAR_TOKEN {
        return Ok(SearchMethod::Linear);
    }
    match method_id.strip_prefix(SVD_PREFIX) {
        Some(suffix) => suffix
            .parse::<i64>()
            .map(|rank| SearchMethod::ReducedRank { rank })
            .map_err(|_| ResolutionError::InvalidRank),
        None => Err(ResolutionError::UnknownMethod(method_id.to_string())),
    }
}
