mod base;
mod iterator;
mod queue;

pub use base::*;
pub use iterator::*;
pub use queue::*;
