use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use search_core::{Operation, RequestId};

use crate::execute::SearchExecutor;
use crate::{EngineEvent, EngineStopped};

enum EngineCommand {
    Search {
        request_id: RequestId,
        operation: Operation,
    },
}

/// Runs searches on a background tokio runtime and reports completions over a channel.
///
/// Every submitted request completes with exactly one `EngineEvent`; deciding whether
/// an outcome is still wanted is left to the session.
pub struct EngineHandle {
    cmd_tx: Option<mpsc::Sender<EngineCommand>>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn spawn(executor: Arc<dyn SearchExecutor>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let executor = executor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(executor.as_ref(), command, event_tx).await;
                });
            }
            engine_info!("Search engine shutting down");
        });

        Ok(Self {
            cmd_tx: Some(cmd_tx),
            event_rx,
        })
    }

    pub fn submit(&self, request_id: RequestId, operation: Operation) {
        let Some(cmd_tx) = &self.cmd_tx else {
            engine_warn!("Search {} dropped: engine is shut down", request_id);
            return;
        };
        let _ = cmd_tx.send(EngineCommand::Search {
            request_id,
            operation,
        });
    }

    /// Stops accepting searches. The worker thread exits and drops in-flight requests,
    /// after which `recv_timeout` reports `EngineStopped`.
    pub fn shutdown(&mut self) {
        self.cmd_tx = None;
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next completion. `Ok(None)` means the timeout passed.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineStopped> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(EngineStopped),
        }
    }
}

async fn handle_command(
    executor: &dyn SearchExecutor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search {
            request_id,
            operation,
        } => {
            let result = executor.execute(&operation).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}
