//! Trading signals service module.
//!
//! Provides technical indicator calculations, rule-based classification,
//! explanation text and the engine that composes them per symbol.

pub mod classifier;
pub mod engine;
pub mod explanation;
pub mod indicators;
pub mod sentiment;
pub mod store;

pub use classifier::{determine_signal_type, signal_strength, SignalScore};
pub use engine::SignalEngine;
pub use explanation::generate_explanation;
pub use indicators::calculate_indicators;
pub use sentiment::{FixedSentiment, SentimentProvider, SimulatedSentiment};
pub use store::SignalStore;
