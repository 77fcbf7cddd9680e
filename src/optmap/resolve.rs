//! Name → descriptor resolution across ordered map tables.
use crate::constants::INVERT_PREFIX;
use crate::types::errors::{OptionError, Result};

use super::table::{OptMap, OptMapTable, ValueType};

/// A descriptor together with the table it was found in.
#[derive(Debug, Clone, Copy)]
pub struct MapRef<'m> {
    pub table: &'m OptMapTable,
    pub entry: &'m OptMap,
}

impl PartialEq for MapRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table) && std::ptr::eq(self.entry, other.entry)
    }
}

impl Eq for MapRef<'_> {}

/// Result of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'m> {
    pub map: MapRef<'m>,
    /// The name matched through its "no"-prefixed form.
    pub inverted: bool,
}

fn find_exact<'m, F>(tables: &[&'m OptMapTable], name: &str, accept: F) -> Option<MapRef<'m>>
where
    F: Fn(&OptMap) -> bool,
{
    tables.iter().copied().find_map(|table| {
        table
            .entries()
            .iter()
            .find(|ent| ent.name == name && accept(ent))
            .map(|entry| MapRef { table, entry })
    })
}

/// Look `name` up in `tables`.
///
/// Exact names are searched first across every table, in table order and
/// then descriptor order. Only when that fails and `name` starts with "no"
/// is the remainder looked up among invertible boolean descriptors.
/// `None` means the option is unknown, which callers treat as pass-through.
#[must_use]
pub fn resolve<'m>(tables: &[&'m OptMapTable], name: &str) -> Option<Resolved<'m>> {
    if name.is_empty() {
        return None;
    }
    if let Some(map) = find_exact(tables, name, |_| true) {
        return Some(Resolved {
            map,
            inverted: false,
        });
    }
    let rest = name.strip_prefix(INVERT_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    find_exact(tables, rest, |ent| {
        ent.is_invertible() && ent.value_type() == ValueType::Boolean
    })
    .map(|map| Resolved {
        map,
        inverted: true,
    })
}

/// Decode an enumerated value into its integer.
///
/// # Errors
///
/// `NotEnum` when `mapent` is not enumerated, `InvalidEnumValue` when no
/// literal matches `raw` exactly.
pub fn enum_to_number(mapent: &OptMap, raw: &str) -> Result<i32> {
    let lits = mapent.literals().ok_or_else(|| OptionError::NotEnum {
        name: mapent.name.to_string(),
    })?;
    lits.iter()
        .find(|(lit, _)| *lit == raw)
        .map(|(_, num)| *num)
        .ok_or_else(|| OptionError::InvalidEnumValue {
            name: mapent.name.to_string(),
            value: raw.to_string(),
        })
}

#[must_use]
pub fn value_type(mapent: &OptMap) -> ValueType {
    mapent.value_type()
}

/// Whether the parser must demand a `=value` suffix.
#[must_use]
pub fn requires_value(mapent: &OptMap) -> bool {
    mapent.requires_value()
}
