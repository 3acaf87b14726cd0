pub mod asset;
pub mod market;
pub mod signals;

pub use asset::*;
pub use market::*;
pub use signals::*;
