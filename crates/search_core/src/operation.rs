use serde::{Deserialize, Serialize};

use crate::SearchMethod;

/// A resolved search: method plus a trimmed, non-empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    method: SearchMethod,
    query: String,
}

impl Operation {
    /// Returns `None` when the query is empty or whitespace only.
    pub fn new(method: SearchMethod, raw_query: &str) -> Option<Self> {
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            method,
            query: query.to_string(),
        })
    }

    pub fn method(&self) -> SearchMethod {
        self.method
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn endpoint(&self) -> &'static str {
        self.method.endpoint()
    }

    pub fn rank(&self) -> Option<i64> {
        self.method.rank()
    }
}

/// A ranked hit as returned by the backend. Order in the response is the rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
}
