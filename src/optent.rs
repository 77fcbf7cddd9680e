//! A single parsed option.
//!
//! An entry owns its value and, unless it matched a descriptor under its
//! exact spelling, its name. The descriptor reference is borrowed from the
//! map tables and is never released with the entry.
use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::constants::{OPT_SEPARATOR, QUOTE, VALUE_SEPARATOR};
use crate::optmap::{enum_to_number, resolve, MapRef, OptMap, OptMapTable, Resolved, ValueType};
use crate::optstr::OptTokens;
use crate::types::errors::{OptionError, Result};
use crate::types::mask::{EntryMask, LocalMask, MapMask};
use crate::utils::{parse_long, parse_ulong};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptEntry<'m> {
    name: Cow<'m, str>,
    value: Option<String>,
    mask: EntryMask,
    map: Option<MapRef<'m>>,
}

impl<'m> OptEntry<'m> {
    /// Build an entry for `name[=value]`, classified against `tables`.
    ///
    /// Unknown names are accepted and produce an entry without a map
    /// reference and with an empty classification.
    ///
    /// # Errors
    ///
    /// `MalformedToken` for an empty name, a name containing `,`, `=` or
    /// `"`, or a value the option-string grammar cannot carry (unbalanced
    /// quotes, a separator outside quotes next to a quote).
    /// `MissingRequiredValue` when the descriptor demands a value that is
    /// absent, `UnexpectedValue` when a boolean option is given one.
    pub fn new(name: &str, value: Option<&str>, tables: &[&'m OptMapTable]) -> Result<Self> {
        check_name(name)?;
        if let Some(v) = value {
            check_value_syntax(v)?;
        }
        let resolved = resolve(tables, name);
        let name = match resolved {
            Some(r) if !r.inverted => Cow::Borrowed(r.map.entry.name),
            _ => Cow::Owned(name.to_string()),
        };
        let mut ent = Self {
            name,
            value: value.map(str::to_string),
            mask: EntryMask::default(),
            map: None,
        };
        ent.apply(resolved);
        check_value(ent.map, &ent.name, ent.value.as_deref())?;
        Ok(ent)
    }

    /// Pull the next token from `tokens` and build its entry.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn next_from(
        tokens: &mut OptTokens<'_>,
        tables: &[&'m OptMapTable],
    ) -> Option<Result<Self>> {
        tokens
            .next()
            .map(|tok| tok.and_then(|tok| Self::new(tok.name, tok.value, tables)))
    }

    /// Resolve the entry again against `tables`. Name and value are kept.
    /// Returns whether a descriptor matched.
    pub fn reassign(&mut self, tables: &[&'m OptMapTable]) -> bool {
        let resolved = resolve(tables, &self.name);
        self.apply(resolved);
        self.map.is_some()
    }

    /// Like [`OptEntry::reassign`], but a match whose value requirements
    /// the entry does not meet is dropped and the entry is left unknown.
    ///
    /// # Errors
    ///
    /// The value check that rejected the match; the entry is then unknown.
    pub fn reassign_checked(&mut self, tables: &[&'m OptMapTable]) -> Result<bool> {
        let resolved = resolve(tables, &self.name);
        let checked = match resolved {
            Some(r) => check_value(Some(r.map), &self.name, self.value.as_deref()),
            None => Ok(()),
        };
        match checked {
            Ok(()) => {
                self.apply(resolved);
                Ok(self.map.is_some())
            }
            Err(e) => {
                self.apply(None);
                Err(e)
            }
        }
    }

    fn apply(&mut self, resolved: Option<Resolved<'m>>) {
        self.map = resolved.map(|r| r.map);
        self.mask
            .set_class(self.map.map_or(MapMask::empty(), |m| m.entry.mask));
        self.mask
            .set_local(LocalMask::INVERTED, resolved.is_some_and(|r| r.inverted));
        self.mask.set_local(LocalMask::HAS_VALUE, self.value.is_some());
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the value. The entry is unchanged on error.
    ///
    /// # Errors
    ///
    /// Same value checks as [`OptEntry::new`].
    pub fn set_value(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(v) = value {
            check_value_syntax(v)?;
        }
        check_value(self.map, &self.name, value)?;
        self.value = value.map(str::to_string);
        self.mask.set_local(LocalMask::HAS_VALUE, self.value.is_some());
        Ok(())
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.mask.has_local(LocalMask::HAS_VALUE)
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.mask.has_local(LocalMask::INVERTED)
    }

    /// No descriptor matched this option.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.map.is_none()
    }

    #[must_use]
    pub fn mask(&self) -> EntryMask {
        self.mask
    }

    #[must_use]
    pub fn map(&self) -> Option<&'m OptMapTable> {
        self.map.map(|m| m.table)
    }

    #[must_use]
    pub fn mapent(&self) -> Option<&'m OptMap> {
        self.map.map(|m| m.entry)
    }

    /// `MS_*`/`MNT_MS_*` id of the matched descriptor.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.mapent().map(|e| e.id)
    }

    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.mapent().map(OptMap::value_type)
    }

    /// Value as an unsigned number, base chosen like `strtoul(.., 0)`.
    ///
    /// # Errors
    ///
    /// `MissingRequiredValue` without a value, `InvalidNumber` otherwise.
    pub fn number_value(&self) -> Result<u64> {
        let raw = self.require_value()?;
        parse_ulong(raw).ok_or_else(|| self.invalid_number(raw))
    }

    /// Value as a signed number.
    ///
    /// # Errors
    ///
    /// As [`OptEntry::number_value`].
    pub fn signed_value(&self) -> Result<i64> {
        let raw = self.require_value()?;
        parse_long(raw).ok_or_else(|| self.invalid_number(raw))
    }

    /// Decode an enumerated value through the descriptor's literal table.
    ///
    /// # Errors
    ///
    /// `NotEnum` for unknown or non-enumerated options,
    /// `MissingRequiredValue` without a value, `InvalidEnumValue` when no
    /// literal matches.
    pub fn enum_value(&self) -> Result<i32> {
        let mapent = self.mapent().ok_or_else(|| OptionError::NotEnum {
            name: self.name.to_string(),
        })?;
        enum_to_number(mapent, self.require_value()?)
    }

    fn require_value(&self) -> Result<&str> {
        self.value().ok_or_else(|| OptionError::MissingRequiredValue {
            name: self.name.to_string(),
        })
    }

    fn invalid_number(&self, raw: &str) -> OptionError {
        OptionError::InvalidNumber {
            name: self.name.to_string(),
            value: raw.to_string(),
        }
    }

    /// Serializable view used by list dumps.
    #[must_use]
    pub fn snapshot(&self) -> EntrySnapshot<'_> {
        EntrySnapshot {
            name: &self.name,
            value: self.value(),
            map: self.map().map(OptMapTable::name),
            value_type: self.mapent().map(OptMap::type_format),
            mask: self.mask.bits(),
            inverted: self.is_inverted(),
        }
    }
}

fn check_value(map: Option<MapRef<'_>>, name: &str, value: Option<&str>) -> Result<()> {
    let Some(map) = map else {
        return Ok(());
    };
    match (map.entry.requires_value(), value) {
        (true, None) => Err(OptionError::MissingRequiredValue {
            name: name.to_string(),
        }),
        (false, Some(_)) => Err(OptionError::UnexpectedValue {
            name: name.to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(OptionError::malformed(name, "missing option name"));
    }
    if name.contains([OPT_SEPARATOR, VALUE_SEPARATOR, QUOTE]) {
        return Err(OptionError::malformed(name, "reserved character in option name"));
    }
    Ok(())
}

/// A value must survive rendering and re-tokenizing unchanged.
fn check_value_syntax(value: &str) -> Result<()> {
    let mut quoted = false;
    let mut bare_separator = false;
    for c in value.chars() {
        if c == QUOTE {
            quoted = !quoted;
        } else if c == OPT_SEPARATOR && !quoted {
            bare_separator = true;
        }
    }
    if quoted {
        return Err(OptionError::malformed(value, "unterminated quote"));
    }
    if bare_separator && value.contains(QUOTE) {
        return Err(OptionError::malformed(value, "separator outside quotes"));
    }
    Ok(())
}

/// Quote-free values containing the separator are wrapped on output.
fn needs_quotes(value: &str) -> bool {
    value.contains(OPT_SEPARATOR) && !value.contains(QUOTE)
}

impl fmt::Display for OptEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match self.value() {
            Some(v) if needs_quotes(v) => write!(f, "{VALUE_SEPARATOR}{QUOTE}{v}{QUOTE}"),
            Some(v) => write!(f, "{VALUE_SEPARATOR}{v}"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySnapshot<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub map: Option<&'static str>,
    pub value_type: Option<String>,
    pub mask: u32,
    pub inverted: bool,
}
