//! Search core: pure session state machine, method resolution and view-model helpers.
mod catalog;
mod effect;
mod method;
mod msg;
mod operation;
mod state;
mod update;
mod view_model;

pub use catalog::{method_options, MethodOption, DEFAULT_METHOD_TOKEN, DEFAULT_SVD_RANKS};
pub use effect::Effect;
pub use method::{resolve, ResolutionError, SearchMethod, LINEAR_TOKEN, SVD_PREFIX};
pub use msg::Msg;
pub use operation::{Article, Operation};
pub use state::{RequestId, SearchOutcome, SearchSession, SessionState};
pub use update::update;
pub use view_model::{ResultsPanel, SessionViewModel};
