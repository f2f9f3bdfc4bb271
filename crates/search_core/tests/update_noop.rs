use search_core::{
    update, Article, Effect, Msg, ResultsPanel, SearchOutcome, SearchSession, SessionState,
};

fn loading_session(query: &str) -> (SearchSession, u64) {
    let (state, _) = update(SearchSession::new(), Msg::QueryChanged(query.to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    match effects.as_slice() {
        [Effect::Search { request_id, .. }] => (state, *request_id),
        other => panic!("expected one search effect, got {other:?}"),
    }
}

#[test]
fn update_is_noop() {
    let state = SearchSession::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn blank_query_never_leaves_idle() {
    for query in ["", "   ", "\t\n"] {
        let (state, _) = update(SearchSession::new(), Msg::QueryChanged(query.to_string()));
        let before = state.clone();
        let (next, effects) = update(state, Msg::SearchSubmitted);

        assert_eq!(next, before);
        assert!(effects.is_empty());
    }
}

#[test]
fn blank_query_with_bad_method_is_still_noop() {
    let (state, _) = update(SearchSession::new(), Msg::MethodSelected("bogus".into()));
    let before = state.clone();
    let (next, effects) = update(state, Msg::EnterPressed);

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn blank_query_keeps_resting_success() {
    let (state, request_id) = loading_session("cats");
    let results = vec![Article {
        title: "Cats".into(),
        link: "https://example.com/cats".into(),
        summary: "felines".into(),
    }];
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            outcome: SearchOutcome::Success(results.clone()),
        },
    );
    let (state, _) = update(state, Msg::QueryChanged("  ".into()));
    let (state, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(state.state(), &SessionState::Success(results));
    assert!(effects.is_empty());
}

#[test]
fn trigger_while_loading_is_ignored() {
    let (state, request_id) = loading_session("cats");
    let (state, _) = update(state, Msg::QueryChanged("dogs".into()));
    let (state, effects) = update(state, Msg::SearchSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.state(), &SessionState::Loading);
    assert_eq!(state.in_flight(), Some(request_id));

    let (state, effects) = update(state, Msg::EnterPressed);
    assert!(effects.is_empty());
    assert_eq!(state.in_flight(), Some(request_id));
}

#[test]
fn method_change_while_loading_is_ignored() {
    let (state, _) = loading_session("cats");
    let (state, _) = update(state, Msg::MethodSelected("svd-100".into()));

    assert_eq!(state.method_token(), "linear");
}

#[test]
fn query_edit_while_loading_keeps_submitted_query() {
    let (state, request_id) = loading_session("cats");
    let (state, _) = update(state, Msg::QueryChanged("dogs".into()));
    assert_eq!(state.query(), "cats");

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            outcome: SearchOutcome::Success(Vec::new()),
        },
    );
    let view = state.view();
    assert_eq!(view.query, "cats");
    assert_eq!(
        view.results,
        ResultsPanel::NoResults {
            query: "cats".into()
        }
    );
}

#[test]
fn stale_completion_is_discarded() {
    let (state, request_id) = loading_session("cats");
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id: request_id + 41,
            outcome: SearchOutcome::Failed("late".into()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.state(), &SessionState::Loading);
    assert_eq!(state.in_flight(), Some(request_id));
}

#[test]
fn completion_after_resting_state_is_discarded() {
    let (state, request_id) = loading_session("cats");
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            outcome: SearchOutcome::Failed("first".into()),
        },
    );
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            outcome: SearchOutcome::Success(Vec::new()),
        },
    );

    assert_eq!(state.state(), &SessionState::Failed("first".into()));
}

#[test]
fn older_request_cannot_overwrite_newer() {
    let (state, first) = loading_session("cats");
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: first,
            outcome: SearchOutcome::Failed("boom".into()),
        },
    );
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let second = match effects.as_slice() {
        [Effect::Search { request_id, .. }] => *request_id,
        other => panic!("expected one search effect, got {other:?}"),
    };

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: first,
            outcome: SearchOutcome::Success(Vec::new()),
        },
    );
    assert_eq!(state.state(), &SessionState::Loading);
    assert_eq!(state.in_flight(), Some(second));
}
