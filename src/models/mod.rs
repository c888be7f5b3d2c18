pub mod contract;
pub mod export;
pub mod filters;
pub mod notification;
pub mod stats;

pub use contract::*;
pub use export::*;
pub use filters::*;
pub use notification::*;
pub use stats::*;
