use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payout multiplier per symbol for a full-row match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paytable(pub BTreeMap<Symbol, u64>);

impl Paytable {
    pub fn new(entries: impl IntoIterator<Item = (Symbol, u64)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn simple_default() -> Self {
        Self::new([
            (Symbol::A, 20),
            (Symbol::B, 10),
            (Symbol::C, 5),
            (Symbol::D, 2),
        ])
    }

    /// Multiplier for `symbol`; symbols without an entry pay nothing.
    pub fn multiplier(&self, symbol: Symbol) -> u64 {
        self.0.get(&symbol).copied().unwrap_or(0)
    }
}
