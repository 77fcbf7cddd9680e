//! Static option descriptors and the tables that group them.
use std::fmt;

use crate::types::MapMask;

/// Literal → integer pairs of an enumerated option.
pub type EnumLiterals = &'static [(&'static str, i32)];

/// How an option's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSpec {
    /// No value; the option is a switch.
    Boolean,
    /// Free text, passed through as-is.
    Text,
    /// Unsigned or signed integer.
    Number,
    /// One of a fixed set of literals.
    Enum(EnumLiterals),
}

/// Value type tag of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Text,
    Number,
    Enum,
}

impl ValueType {
    /// The scanf-like token libmount uses to describe a value type.
    #[must_use]
    pub const fn as_format(&self) -> &'static str {
        match self {
            ValueType::Boolean => "",
            ValueType::Text => "%s",
            ValueType::Number => "%u",
            ValueType::Enum => "{...}",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_format())
    }
}

/// One known option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptMap {
    pub name: &'static str,
    /// Associated `MS_*` or `MNT_MS_*` bit, 0 when none.
    pub id: u64,
    pub mask: MapMask,
    pub value: ValueSpec,
}

impl OptMap {
    /// A boolean option.
    #[must_use]
    pub const fn flag(name: &'static str, id: u64, mask: MapMask) -> Self {
        Self {
            name,
            id,
            mask,
            value: ValueSpec::Boolean,
        }
    }

    /// An option with a value of the given kind.
    #[must_use]
    pub const fn valued(name: &'static str, id: u64, mask: MapMask, value: ValueSpec) -> Self {
        Self {
            name,
            id,
            mask,
            value,
        }
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self.value {
            ValueSpec::Boolean => ValueType::Boolean,
            ValueSpec::Text => ValueType::Text,
            ValueSpec::Number => ValueType::Number,
            ValueSpec::Enum(_) => ValueType::Enum,
        }
    }

    #[must_use]
    pub const fn requires_value(&self) -> bool {
        !matches!(self.value, ValueSpec::Boolean)
    }

    #[must_use]
    pub const fn is_invertible(&self) -> bool {
        self.mask.contains(MapMask::INVERT)
    }

    /// Literal table of an enumerated option.
    #[must_use]
    pub const fn literals(&self) -> Option<EnumLiterals> {
        match self.value {
            ValueSpec::Enum(lits) => Some(lits),
            _ => None,
        }
    }

    /// Full type description, e.g. `{none,ordered,writeback}` for an enum.
    #[must_use]
    pub fn type_format(&self) -> String {
        match self.value {
            ValueSpec::Enum(lits) => {
                let names: Vec<&str> = lits.iter().map(|(name, _)| *name).collect();
                format!("{{{}}}", names.join(","))
            }
            _ => self.value_type().as_format().to_string(),
        }
    }
}

/// An ordered collection of descriptors.
#[derive(Debug, PartialEq, Eq)]
pub struct OptMapTable {
    name: &'static str,
    entries: &'static [OptMap],
}

impl OptMapTable {
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [OptMap]) -> Self {
        Self { name, entries }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [OptMap] {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
