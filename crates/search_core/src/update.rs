use crate::{resolve, Effect, Msg, Operation, SearchSession};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchSession, msg: Msg) -> (SearchSession, Vec<Effect>) {
    let effects = match msg {
        // Controls are disabled while loading; the pending request's inputs stay as submitted.
        Msg::QueryChanged(query) => {
            if !state.state().is_loading() {
                state.set_query(query);
            }
            Vec::new()
        }
        Msg::MethodSelected(method_token) => {
            if !state.state().is_loading() {
                state.select_method(method_token);
            }
            Vec::new()
        }
        Msg::SearchSubmitted | Msg::EnterPressed => trigger(&mut state),
        Msg::SearchCompleted {
            request_id,
            outcome,
        } => {
            state.complete(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn trigger(state: &mut SearchSession) -> Vec<Effect> {
    // Single flight: a second trigger while loading is absorbed.
    if state.state().is_loading() {
        return Vec::new();
    }

    match resolve(state.method_token()) {
        Ok(method) => {
            let Some(operation) = Operation::new(method, state.query()) else {
                return Vec::new();
            };
            let request_id = state.begin_request(operation.query());
            vec![Effect::Search {
                request_id,
                operation,
            }]
        }
        Err(err) => {
            let query = state.query().trim().to_string();
            if query.is_empty() {
                return Vec::new();
            }
            // Resolution failures never reach the network.
            state.begin_request(&query);
            state.fail(err.to_string());
            Vec::new()
        }
    }
}
