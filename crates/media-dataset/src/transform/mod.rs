mod base;
mod tensor;

pub use base::*;
pub use tensor::*;
