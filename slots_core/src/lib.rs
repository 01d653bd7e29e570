pub mod engine;
pub mod error;
pub mod paytable;
pub mod rng;
pub mod session;
pub mod symbols;

pub use crate::engine::{evaluate, sample_grid, sample_indices, GameConfig, Grid, Machine, RoundOutcome};
pub use crate::error::{EngineError, EngineResult, SessionError};
pub use crate::paytable::Paytable;
pub use crate::rng::SessionRng;
pub use crate::session::{BetInput, Session, SessionSummary, DEFAULT_NAME};
pub use crate::symbols::{Symbol, SymbolTable};
