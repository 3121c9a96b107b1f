//! API data models

pub mod dispatch;
pub mod insight;
pub mod prediction;

pub use dispatch::*;
pub use insight::*;
pub use prediction::*;
