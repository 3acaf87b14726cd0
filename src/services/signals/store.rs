//! Current-signal store: the latest signal per symbol.

use crate::types::TradingSignal;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory store holding the most recent signal for each symbol.
///
/// Keys are uppercase symbols. Storing a signal replaces any previous one
/// for the same symbol; no history is kept.
pub struct SignalStore {
    signals: DashMap<String, TradingSignal>,
}

impl SignalStore {
    /// Create a new signal store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            signals: DashMap::new(),
        })
    }

    /// All current signals, sorted by symbol.
    pub fn get_signals(&self) -> Vec<TradingSignal> {
        let mut signals: Vec<TradingSignal> =
            self.signals.iter().map(|entry| entry.value().clone()).collect();
        signals.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        signals
    }

    /// Current signal for a symbol (case-insensitive).
    pub fn get_signal(&self, symbol: &str) -> Option<TradingSignal> {
        self.signals
            .get(&symbol.to_uppercase())
            .map(|entry| entry.value().clone())
    }

    /// Store a signal, replacing the previous one for its symbol.
    pub fn update_signal(&self, signal: TradingSignal) -> TradingSignal {
        let key = signal.symbol.to_uppercase();
        debug!("Storing {} signal for {}", signal.signal_type, key);
        self.signals.insert(key, signal.clone());
        signal
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
