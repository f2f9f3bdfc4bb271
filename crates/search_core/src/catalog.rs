use crate::SearchMethod;

/// Ranks for which the backend ships precomputed SVD components.
pub const DEFAULT_SVD_RANKS: [i64; 10] = [100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];

/// Method selected when a session starts.
pub const DEFAULT_METHOD_TOKEN: &str = crate::LINEAR_TOKEN;

/// One selectable entry of the method picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodOption {
    pub token: String,
    pub label: String,
}

impl MethodOption {
    fn for_method(method: SearchMethod) -> Self {
        let label = match method {
            SearchMethod::Linear => "Linear Search (TF-IDF Cosine)".to_string(),
            SearchMethod::ReducedRank { rank } => format!("Linear SVD Search (k={rank})"),
        };
        Self {
            token: method.token(),
            label,
        }
    }
}

/// Builds the picker entries: linear first, then one entry per rank in the given order.
pub fn method_options(ranks: &[i64]) -> Vec<MethodOption> {
    std::iter::once(SearchMethod::Linear)
        .chain(ranks.iter().map(|&rank| SearchMethod::ReducedRank { rank }))
        .map(MethodOption::for_method)
        .collect()
}
