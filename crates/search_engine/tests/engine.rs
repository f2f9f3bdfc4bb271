use std::sync::{Arc, Mutex};
use std::time::Duration;

use search_core::{Article, Operation, SearchMethod};
use search_engine::{EngineEvent, EngineHandle, EngineStopped, SearchError, SearchExecutor};

#[derive(Default)]
struct RecordingExecutor {
    calls: Mutex<Vec<(String, Option<i64>, String)>>,
}

#[async_trait::async_trait]
impl SearchExecutor for RecordingExecutor {
    async fn execute(&self, operation: &Operation) -> Result<Vec<Article>, SearchError> {
        self.calls.lock().unwrap().push((
            operation.endpoint().to_string(),
            operation.rank(),
            operation.query().to_string(),
        ));
        if operation.query() == "fail" {
            return Err(SearchError::Transport("connection refused".into()));
        }
        Ok(vec![Article {
            title: operation.query().to_string(),
            link: "https://example.com".into(),
            summary: String::new(),
        }])
    }
}

fn next_event(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine running")
        .expect("engine event")
}

#[test]
fn engine_reports_completion_with_request_id() {
    let executor = Arc::new(RecordingExecutor::default());
    let engine = EngineHandle::spawn(executor.clone()).expect("engine");

    let operation = Operation::new(SearchMethod::ReducedRank { rank: 400 }, "cats").unwrap();
    engine.submit(7, operation);

    match next_event(&engine) {
        EngineEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 7);
            let articles = result.expect("ok");
            assert_eq!(articles.len(), 1);
            assert_eq!(articles[0].title, "cats");
        }
    }
    assert_eq!(
        executor.calls.lock().unwrap().clone(),
        vec![("/svd_search".to_string(), Some(400), "cats".to_string())]
    );
    assert!(engine.try_recv().is_none());
}

#[test]
fn engine_forwards_failures() {
    let engine = EngineHandle::spawn(Arc::new(RecordingExecutor::default())).expect("engine");

    engine.submit(3, Operation::new(SearchMethod::Linear, "fail").unwrap());

    assert_eq!(
        next_event(&engine),
        EngineEvent::SearchCompleted {
            request_id: 3,
            result: Err(SearchError::Transport("connection refused".into())),
        }
    );
}

struct StalledExecutor;

#[async_trait::async_trait]
impl SearchExecutor for StalledExecutor {
    async fn execute(&self, _operation: &Operation) -> Result<Vec<Article>, SearchError> {
        std::future::pending().await
    }
}

#[test]
fn timeout_without_completion_is_not_a_stop() {
    let engine = EngineHandle::spawn(Arc::new(StalledExecutor)).expect("engine");
    engine.submit(1, Operation::new(SearchMethod::Linear, "cats").unwrap());

    assert_eq!(engine.recv_timeout(Duration::from_millis(50)), Ok(None));
}

#[test]
fn shutdown_reports_stopped_instead_of_timing_out() {
    let mut engine = EngineHandle::spawn(Arc::new(StalledExecutor)).expect("engine");
    engine.submit(1, Operation::new(SearchMethod::Linear, "cats").unwrap());
    engine.shutdown();

    assert_eq!(engine.recv_timeout(Duration::from_secs(5)), Err(EngineStopped));
    assert!(engine.try_recv().is_none());
}
