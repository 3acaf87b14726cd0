//! Market overview holder.

use crate::types::MarketOverview;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Holds the current market overview, initializing it on first read.
pub struct MarketOverviewStore {
    overview: RwLock<Option<MarketOverview>>,
}

impl MarketOverviewStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            overview: RwLock::new(None),
        })
    }

    /// The stored overview, or the initial overview (which is then stored).
    pub async fn get_or_init(&self) -> MarketOverview {
        if let Some(overview) = self.overview.read().await.as_ref() {
            return overview.clone();
        }

        let mut guard = self.overview.write().await;
        guard
            .get_or_insert_with(|| {
                info!("Market overview not set, storing initial overview");
                MarketOverview::initial()
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initializes_once() {
        let store = MarketOverviewStore::new();
        let first = store.get_or_init().await;
        let second = store.get_or_init().await;
        assert_eq!(first, second);
        assert_eq!(first.fear_greed_index, 47);
    }

    #[tokio::test]
    async fn test_concurrent_readers_share_one_overview() {
        let store = MarketOverviewStore::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.get_or_init().await })
            })
            .collect();

        let first = store.get_or_init().await;
        for handle in handles {
            assert_eq!(handle.await.unwrap(), first);
        }
    }
}
