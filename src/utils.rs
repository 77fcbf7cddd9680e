//! Small helpers shared by the config layer and value decoding.
use std::env;

/// True when the real and effective ids differ (set-uid or set-gid run).
fn is_privileged() -> bool {
    use rustix::process::{getegid, geteuid, getgid, getuid};
    getuid() != geteuid() || getgid() != getegid()
}

/// Read an environment variable unless the process runs set-uid/set-gid.
#[must_use]
pub fn getenv_safe(name: &str) -> Option<String> {
    if is_privileged() {
        return None;
    }
    env::var(name).ok()
}

/// Parse an unsigned integer the way `strtoul(s, NULL, 0)` picks its base:
/// `0x` prefix for hex, a leading `0` for octal, decimal otherwise. The
/// whole string must be consumed.
#[must_use]
pub fn parse_ulong(s: &str) -> Option<u64> {
    let s = s.strip_prefix('+').unwrap_or(s);
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Signed counterpart of [`parse_ulong`].
#[must_use]
pub fn parse_long(s: &str) -> Option<i64> {
    match s.strip_prefix('-') {
        Some(rest) => {
            let mag = parse_ulong(rest)?;
            if mag == i64::MIN.unsigned_abs() {
                Some(i64::MIN)
            } else {
                i64::try_from(mag).ok().map(|v| -v)
            }
        }
        None => parse_ulong(s).and_then(|v| i64::try_from(v).ok()),
    }
}
