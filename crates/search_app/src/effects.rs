use std::sync::Arc;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use search_core::{Effect, Msg, SearchOutcome};
use search_engine::{
    EngineEvent, EngineHandle, EngineStopped, ExecutorSettings, ReqwestExecutor, SearchExecutor,
};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ExecutorSettings) -> anyhow::Result<Self> {
        let executor = ReqwestExecutor::new(settings)?;
        Self::with_executor(Arc::new(executor))
    }

    pub fn with_executor(executor: Arc<dyn SearchExecutor>) -> anyhow::Result<Self> {
        let engine = EngineHandle::spawn(executor)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search {
                    request_id,
                    operation,
                } => {
                    engine_info!(
                        "Search request_id={} endpoint={} k={:?} query_len={}",
                        request_id,
                        operation.endpoint(),
                        operation.rank(),
                        operation.query().len()
                    );
                    self.engine.submit(request_id, operation);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine completion, as a session message.
    pub fn next_msg(&self, timeout: Duration) -> Result<Option<Msg>, EngineStopped> {
        Ok(self.engine.recv_timeout(timeout)?.map(to_msg))
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }

    pub fn try_next_msg(&self) -> Option<Msg> {
        self.engine.try_recv().map(to_msg)
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => {
            let outcome = match result {
                Ok(articles) => {
                    engine_info!("Search {} returned {} articles", request_id, articles.len());
                    SearchOutcome::Success(articles)
                }
                Err(err) => {
                    engine_warn!("Search {} failed: {:?}", request_id, err);
                    SearchOutcome::Failed(err.to_string())
                }
            };
            Msg::SearchCompleted {
                request_id,
                outcome,
            }
        }
    }
}
