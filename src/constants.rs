//! Shared crate-wide constants for mountopts.
//!
//! Centralizes the option-string grammar characters, instance mask bit
//! positions, and environment knobs used across modules.

/// Separator between option tokens.
pub const OPT_SEPARATOR: char = ',';

/// Separator between an option name and its value.
pub const VALUE_SEPARATOR: char = '=';

/// Quote character; separators inside a quoted region do not split tokens.
pub const QUOTE: char = '"';

/// Prefix of the negated form of an invertible option (`noexec` for `exec`).
pub const INVERT_PREFIX: &str = "no";

/// First bit available to per-entry bookkeeping. Map classification bits
/// must stay below this position.
pub const LOCAL_MASK_SHIFT: u32 = 10;

/// Environment variable holding the diagnostics category mask.
pub const DEBUG_ENV: &str = "LIBMOUNT_DEBUG";

/// Base `log` target; per-category targets below nest under it.
pub const LOG_TARGET: &str = "mountopts";
pub const LOG_TARGET_INIT: &str = "mountopts::init";
pub const LOG_TARGET_CACHE: &str = "mountopts::cache";
pub const LOG_TARGET_OPTIONS: &str = "mountopts::options";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_targets_nest_under_base() {
        for target in [LOG_TARGET_INIT, LOG_TARGET_CACHE, LOG_TARGET_OPTIONS] {
            let rest = target.strip_prefix(LOG_TARGET).unwrap();
            assert!(rest.starts_with("::"), "{target}");
        }
    }
}
