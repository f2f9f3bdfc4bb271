#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one backend round-trip and report back with `Msg::SearchCompleted`.
    Search {
        request_id: crate::RequestId,
        operation: crate::Operation,
    },
}
