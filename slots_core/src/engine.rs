use crate::{
    error::{EngineError, EngineResult},
    paytable::Paytable,
    symbols::{Symbol, SymbolTable},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

pub const STARTING_BALANCE: u64 = 200;
const GRID_RULE: &str = "----------";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub symbols: SymbolTable,
    pub paytable: Paytable,
    pub rows: usize,
    pub cols: usize,
    pub starting_balance: u64,
}

impl GameConfig {
    pub fn default_3x3() -> Self {
        Self {
            symbols: SymbolTable::default_counts(),
            paytable: Paytable::simple_default(),
            rows: 3,
            cols: 3,
            starting_balance: STARTING_BALANCE,
        }
    }

    /// Rejects shapes the sampler could never fill.
    pub fn validate(&self) -> EngineResult<()> {
        check_shape(self.symbols.pool_len(), self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::default_3x3()
    }
}

fn check_shape(pool: usize, rows: usize, cols: usize) -> EngineResult<()> {
    if rows == 0 || cols == 0 {
        return Err(EngineError::EmptyGrid { rows, cols });
    }
    if pool < rows {
        return Err(EngineError::PoolTooSmall { pool, rows });
    }
    Ok(())
}

/// One round's symbols, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Symbol>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{GRID_RULE}")?;
        for row in &self.rows {
            let line: Vec<&str> = row.iter().map(|s| s.label()).collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        writeln!(f, "{GRID_RULE}")
    }
}

/// Picks pool indices for a `rows` x `cols` window. Within a column every
/// index is distinct; columns are drawn independently.
pub fn sample_indices<R: Rng + ?Sized>(
    rng: &mut R,
    pool_len: usize,
    rows: usize,
    cols: usize,
) -> EngineResult<Vec<Vec<usize>>> {
    check_shape(pool_len, rows, cols)?;
    let mut window = vec![Vec::with_capacity(cols); rows];
    for _ in 0..cols {
        let mut taken = HashSet::with_capacity(rows);
        for row in window.iter_mut() {
            // rejection sampling; terminates because pool_len >= rows
            let idx = loop {
                let candidate = rng.gen_range(0..pool_len);
                if taken.insert(candidate) {
                    break candidate;
                }
            };
            row.push(idx);
        }
    }
    Ok(window)
}

pub fn sample_grid<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[Symbol],
    rows: usize,
    cols: usize,
) -> EngineResult<Grid> {
    let indices = sample_indices(rng, pool.len(), rows, cols)?;
    let rows = indices
        .into_iter()
        .map(|row| row.into_iter().map(|i| pool[i]).collect())
        .collect();
    Ok(Grid { rows })
}

/// Multiplier for each row: the paytable value when every cell in the row
/// holds the same symbol, 0 otherwise.
pub fn evaluate(grid: &Grid, paytable: &Paytable) -> Vec<u64> {
    grid.rows
        .iter()
        .map(|row| match row.split_first() {
            Some((first, rest)) if rest.iter().all(|s| s == first) => paytable.multiplier(*first),
            _ => 0,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub line_multipliers: Vec<u64>,
    pub line_wins: Vec<u64>,
    pub total_win: u64,
}

impl RoundOutcome {
    pub fn settle(line_multipliers: Vec<u64>, bet: u64) -> Self {
        let line_wins: Vec<u64> = line_multipliers
            .iter()
            .map(|m| m.saturating_mul(bet))
            .collect();
        let total_win = line_wins.iter().fold(0u64, |acc, w| acc.saturating_add(*w));
        Self {
            line_multipliers,
            line_wins,
            total_win,
        }
    }

    /// `(line number, win, multiplier)` for every paying row, 1-based.
    pub fn winning_lines(&self) -> impl Iterator<Item = (usize, u64, u64)> + '_ {
        self.line_multipliers
            .iter()
            .zip(&self.line_wins)
            .enumerate()
            .filter(|(_, (m, _))| **m > 0)
            .map(|(i, (m, w))| (i + 1, *w, *m))
    }
}

/// A validated configuration together with its prebuilt pool.
#[derive(Debug, Clone)]
pub struct Machine {
    config: GameConfig,
    pool: Vec<Symbol>,
}

impl Machine {
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        config.validate()?;
        let pool = config.symbols.build_pool();
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn pool(&self) -> &[Symbol] {
        &self.pool
    }

    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> EngineResult<Grid> {
        let grid = sample_grid(rng, &self.pool, self.config.rows, self.config.cols)?;
        debug!(rows = self.config.rows, cols = self.config.cols, "spun grid");
        Ok(grid)
    }

    pub fn settle(&self, grid: &Grid, bet: u64) -> RoundOutcome {
        RoundOutcome::settle(evaluate(grid, &self.config.paytable), bet)
    }
}
