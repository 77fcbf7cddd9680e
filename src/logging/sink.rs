use log::Level;

use super::DebugMask;
use crate::constants::{LOG_TARGET, LOG_TARGET_CACHE, LOG_TARGET_INIT, LOG_TARGET_OPTIONS};

/// Receiver of diagnostic messages.
pub trait DiagSink: Send + Sync {
    fn log(&self, level: Level, category: DebugMask, msg: &str);
}

/// Default sink: forwards to the `log` facade, one target per category.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagSink for LogSink {
    fn log(&self, level: Level, category: DebugMask, msg: &str) {
        log::log!(target: category_target(category), level, "{msg}");
    }
}

fn category_target(category: DebugMask) -> &'static str {
    if category == DebugMask::INIT {
        LOG_TARGET_INIT
    } else if category == DebugMask::CACHE {
        LOG_TARGET_CACHE
    } else if category == DebugMask::OPTIONS {
        LOG_TARGET_OPTIONS
    } else {
        LOG_TARGET
    }
}
