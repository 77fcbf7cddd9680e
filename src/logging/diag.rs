//! Diagnostics context.
//!
//! Replaces a process-wide debug mask: each option list holds a
//! `Diagnostics` value selecting the categories it reports and the sink it
//! reports to. Diagnostics never influence control flow.
use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use log::Level;

use super::sink::{DiagSink, LogSink};

bitflags! {
    /// Diagnostic categories.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DebugMask: u32 {
        const INIT    = 1 << 1;
        const CACHE   = 1 << 2;
        const OPTIONS = 1 << 3;
        const ALL     = 0xFFFF;
    }
}

#[derive(Clone)]
pub struct Diagnostics {
    mask: DebugMask,
    sink: Arc<dyn DiagSink>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DebugMask::empty())
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("mask", &self.mask)
            .finish_non_exhaustive()
    }
}

impl Diagnostics {
    /// Report the categories in `mask` through the `log` facade.
    #[must_use]
    pub fn new(mask: DebugMask) -> Self {
        Self {
            mask,
            sink: Arc::new(LogSink),
        }
    }

    /// Mask taken from `LIBMOUNT_DEBUG`, see [`crate::config::Config::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        crate::config::Config::from_env().diagnostics()
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn mask(&self) -> DebugMask {
        self.mask
    }

    #[must_use]
    pub fn enabled(&self, category: DebugMask) -> bool {
        self.mask.intersects(category)
    }

    /// Emit `msg()` at `level` when `category` is enabled; `msg` is not
    /// evaluated otherwise.
    pub fn log<F>(&self, level: Level, category: DebugMask, msg: F)
    where
        F: FnOnce() -> String,
    {
        if self.enabled(category) {
            self.sink.log(level, category, &msg());
        }
    }

    pub fn debug<F>(&self, category: DebugMask, msg: F)
    where
        F: FnOnce() -> String,
    {
        self.log(Level::Debug, category, msg);
    }

    pub fn warn<F>(&self, category: DebugMask, msg: F)
    where
        F: FnOnce() -> String,
    {
        self.log(Level::Warn, category, msg);
    }
}
