#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("symbol pool has {pool} entries but the grid needs {rows} distinct draws per column")]
    PoolTooSmall { pool: usize, rows: usize },
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type EngineResult<T> = Result<T, EngineError>;
