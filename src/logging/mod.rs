pub mod diag;
pub mod sink;

pub use diag::{DebugMask, Diagnostics};
pub use sink::{DiagSink, LogSink};
