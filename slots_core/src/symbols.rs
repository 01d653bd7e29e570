use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    pub fn label(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How many copies of each symbol go into the pool. A symbol with more
/// copies is drawn proportionally more often.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolTable(pub BTreeMap<Symbol, u32>);

impl SymbolTable {
    pub fn new(counts: impl IntoIterator<Item = (Symbol, u32)>) -> Self {
        Self(counts.into_iter().collect())
    }

    pub fn default_counts() -> Self {
        Self::new([
            (Symbol::A, 4),
            (Symbol::B, 7),
            (Symbol::C, 12),
            (Symbol::D, 20),
        ])
    }

    /// Number of entries `build_pool` will produce.
    pub fn pool_len(&self) -> usize {
        self.0.values().map(|&c| c as usize).sum()
    }

    /// Flattens the table into the weighted pool, in symbol order so a
    /// fixed seed always sees the same layout.
    pub fn build_pool(&self) -> Vec<Symbol> {
        let mut pool = Vec::with_capacity(self.pool_len());
        for (&symbol, &count) in &self.0 {
            pool.extend(std::iter::repeat(symbol).take(count as usize));
        }
        pool
    }
}
