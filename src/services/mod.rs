pub mod market;
pub mod signals;

pub use market::MarketOverviewStore;
pub use signals::{SignalEngine, SignalStore};
