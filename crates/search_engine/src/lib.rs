//! Search engine: backend round-trips and effect execution.
mod engine;
mod execute;
mod types;

pub use engine::EngineHandle;
pub use execute::{ExecutorSettings, ReqwestExecutor, SearchExecutor, DEFAULT_BASE_URL};
pub use types::{EngineEvent, EngineStopped, SearchError};
