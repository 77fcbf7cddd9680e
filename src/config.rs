//! Construction-time configuration for option lists.
use crate::constants::DEBUG_ENV;
use crate::logging::{DebugMask, Diagnostics};
use crate::optmap::BuiltinMap;
use crate::utils::{getenv_safe, parse_ulong};

/// Knobs an [`OptionList`](crate::optls::OptionList) is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Diagnostic categories to report.
    pub debug: DebugMask,
    /// Compiled-in maps loaded into the list, searched in this order.
    pub builtin_maps: Vec<BuiltinMap>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: DebugMask::empty(),
            builtin_maps: vec![BuiltinMap::Linux, BuiltinMap::Userspace],
        }
    }
}

impl Config {
    /// Defaults, with the debug mask read from `LIBMOUNT_DEBUG`.
    ///
    /// The variable is ignored when unset, unparsable, or when the process
    /// runs set-uid/set-gid.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            debug: debug_mask_from_env(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> Diagnostics {
        let diag = Diagnostics::new(self.debug);
        diag.debug(DebugMask::INIT, || {
            format!("library debug mask: 0x{:04x}", self.debug.bits())
        });
        diag
    }
}

fn debug_mask_from_env() -> DebugMask {
    getenv_safe(DEBUG_ENV)
        .and_then(|raw| parse_ulong(raw.trim()))
        .and_then(|bits| u32::try_from(bits).ok())
        .map(DebugMask::from_bits_retain)
        .unwrap_or_default()
}
