pub mod errors;
pub mod mask;

pub use errors::*;
pub use mask::*;
