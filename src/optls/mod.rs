//! Option list: an ordered, owned sequence of parsed options.
//!
//! The list borrows its map tables (they must outlive it) and owns every
//! entry. Entries keep input order; a later duplicate takes precedence over
//! an earlier one when consumers read the list, but nothing here
//! deduplicates.

pub mod iter;

use std::fmt;

use serde_json::{json, Value};

use crate::config::Config;
use crate::logging::{DebugMask, Diagnostics};
use crate::optent::OptEntry;
use crate::optmap::{builtin_map, BuiltinMap, OptMapTable};
use crate::optstr::OptTokens;
use crate::types::errors::Result;
use crate::types::mask::MapMask;

pub use iter::{Direction, OptIter};

#[derive(Debug, Clone, Default)]
pub struct OptionList<'m> {
    maps: Vec<&'m OptMapTable>,
    opts: Vec<OptEntry<'m>>,
    diag: Diagnostics,
}

impl OptionList<'static> {
    /// A list over the builtin maps selected by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let maps = config
            .builtin_maps
            .iter()
            .map(|which| builtin_map(*which))
            .collect();
        Self {
            maps,
            opts: Vec::new(),
            diag: config.diagnostics(),
        }
    }
}

impl<'m> OptionList<'m> {
    #[must_use]
    pub fn new(maps: &[&'m OptMapTable]) -> Self {
        Self {
            maps: maps.to_vec(),
            opts: Vec::new(),
            diag: Diagnostics::default(),
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diag: Diagnostics) -> Self {
        self.diag = diag;
        self
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    #[must_use]
    pub fn maps(&self) -> &[&'m OptMapTable] {
        &self.maps
    }

    /// Append a map to the search order and classify options that were
    /// unknown so far. Returns how many of them now match.
    ///
    /// An option whose value does not fit its new descriptor (a bare
    /// value-requiring option, a boolean with a value) stays unknown and is
    /// reported as a warning under `DebugMask::OPTIONS`.
    pub fn add_map(&mut self, map: &'m OptMapTable) -> usize {
        self.maps.push(map);
        let maps = &self.maps;
        let diag = &self.diag;
        let mut matched = 0;
        for ent in self.opts.iter_mut().filter(|ent| ent.is_unknown()) {
            match ent.reassign_checked(maps) {
                Ok(true) => matched += 1,
                Ok(false) => {}
                Err(e) => diag.warn(DebugMask::OPTIONS, || {
                    format!("option '{}' left unknown: {e}", ent.name())
                }),
            }
        }
        self.diag.debug(DebugMask::OPTIONS, || {
            format!("added map '{}', {matched} option(s) reassigned", map.name())
        });
        matched
    }

    pub fn add_builtin_map(&mut self, which: BuiltinMap) -> usize {
        self.add_map(builtin_map(which))
    }

    /// Parse `optstr` and append its options in order.
    ///
    /// # Errors
    ///
    /// The first malformed token or missing/unexpected value aborts the
    /// call. Options appended before it stay in the list.
    pub fn parse_append(&mut self, optstr: &str) -> Result<()> {
        self.diag
            .debug(DebugMask::OPTIONS, || format!("parsing '{optstr}'"));
        let mut tokens = OptTokens::new(optstr);
        while let Some(next) = OptEntry::next_from(&mut tokens, &self.maps) {
            match next {
                Ok(ent) => self.push(ent),
                Err(e) => {
                    self.diag
                        .debug(DebugMask::OPTIONS, || format!("parse failed: {e}"));
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Append a single option.
    ///
    /// # Errors
    ///
    /// As [`OptEntry::new`]; the list is unchanged on error.
    pub fn add_option(&mut self, name: &str, value: Option<&str>) -> Result<&OptEntry<'m>> {
        let ent = OptEntry::new(name, value, &self.maps)?;
        let idx = self.opts.len();
        self.push(ent);
        Ok(&self.opts[idx])
    }

    fn push(&mut self, ent: OptEntry<'m>) {
        self.diag.debug(DebugMask::OPTIONS, || {
            format!(
                "option '{ent}' map={} mask=0x{:04x}",
                ent.map().map_or("none", OptMapTable::name),
                ent.mask().bits()
            )
        });
        if ent.mask().contains(MapMask::NOSYS) {
            self.diag.warn(DebugMask::OPTIONS, || {
                format!("option '{}' is not supported by the kernel", ent.name())
            });
        }
        self.opts.push(ent);
    }

    /// The last occurrence spelled `name`. Matching is on the written
    /// spelling: `get_option("exec")` does not find `noexec`.
    #[must_use]
    pub fn get_option(&self, name: &str) -> Option<&OptEntry<'m>> {
        self.opts.iter().rev().find(|ent| ent.name() == name)
    }

    pub fn get_option_mut(&mut self, name: &str) -> Option<&mut OptEntry<'m>> {
        self.opts.iter_mut().rev().find(|ent| ent.name() == name)
    }

    /// Drop every occurrence spelled `name`. Returns how many were removed.
    pub fn remove_option(&mut self, name: &str) -> usize {
        self.remove_where(|ent| ent.name() == name)
    }

    /// Drop options whose classification intersects `mask`.
    pub fn remove_by_mask(&mut self, mask: MapMask) -> usize {
        self.remove_where(|ent| ent.mask().intersects(mask))
    }

    fn remove_where<F>(&mut self, pred: F) -> usize
    where
        F: Fn(&OptEntry<'m>) -> bool,
    {
        let before = self.opts.len();
        self.opts.retain(|ent| !pred(ent));
        let removed = before - self.opts.len();
        self.diag
            .debug(DebugMask::OPTIONS, || format!("removed {removed} option(s)"));
        removed
    }

    /// Options whose classification intersects `mask`, in list order.
    pub fn entries_with(&self, mask: MapMask) -> impl Iterator<Item = &OptEntry<'m>> + '_ {
        self.opts.iter().filter(move |ent| ent.mask().intersects(mask))
    }

    #[must_use]
    pub fn iter(&self, direction: Direction) -> OptIter<'_, 'm> {
        OptIter::new(&self.opts, direction)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.opts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    pub fn clear(&mut self) {
        self.opts.clear();
    }

    /// Render the list back to an option string.
    #[must_use]
    pub fn to_optstr(&self) -> String {
        self.to_optstr_without(MapMask::empty())
    }

    /// Render, skipping options classified with any bit of `mask`
    /// (e.g. `MapMask::NOMTAB` for a mount-table record).
    #[must_use]
    pub fn to_optstr_without(&self, mask: MapMask) -> String {
        let parts: Vec<String> = self
            .opts
            .iter()
            .filter(|ent| !ent.mask().intersects(mask))
            .map(ToString::to_string)
            .collect();
        parts.join(",")
    }

    /// JSON view of the list, also reported under `DebugMask::OPTIONS`.
    #[must_use]
    pub fn dump(&self) -> Value {
        let maps: Vec<&str> = self.maps.iter().map(|m| m.name()).collect();
        let options: Vec<Value> = self
            .opts
            .iter()
            .map(|ent| {
                serde_json::to_value(ent.snapshot()).unwrap_or_else(|e| {
                    self.diag.warn(DebugMask::OPTIONS, || {
                        format!("cannot serialize option '{}': {e}", ent.name())
                    });
                    Value::Null
                })
            })
            .collect();
        let out = json!({ "maps": maps, "options": options });
        self.diag.debug(DebugMask::OPTIONS, || out.to_string());
        out
    }
}

impl fmt::Display for OptionList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_optstr())
    }
}

impl<'a, 'm> IntoIterator for &'a OptionList<'m> {
    type Item = &'a OptEntry<'m>;
    type IntoIter = OptIter<'a, 'm>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(Direction::Forward)
    }
}
