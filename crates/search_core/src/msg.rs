#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    QueryChanged(String),
    /// User picked a method token from the method selector.
    MethodSelected(String),
    /// User clicked Search.
    SearchSubmitted,
    /// User pressed Enter in the query input.
    EnterPressed,
    /// Engine finished the request issued under `request_id`.
    SearchCompleted {
        request_id: crate::RequestId,
        outcome: crate::SearchOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
