mod dataset;
mod kind;

pub use dataset::*;
pub use kind::*;
