//! Option masks.
//!
//! An entry's mask overlays two bit-sets: the classification bits copied
//! from its map descriptor, and instance bits set while parsing. Instance
//! bits are additive and never change what the classification says.
use bitflags::bitflags;

use crate::constants::LOCAL_MASK_SHIFT;

bitflags! {
    /// Classification carried by a map descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MapMask: u32 {
        /// Has a "no"-prefixed negated form sharing the descriptor.
        const INVERT = 1 << 1;
        /// Must not be written to the persisted mount table.
        const NOMTAB = 1 << 2;
        /// Contributes to the mount(2) flag word.
        const MFLAG  = 1 << 3;
        /// Contributes to the mount(2) data string.
        const MDATA  = 1 << 4;
        /// Recognized but not honored by the running kernel.
        const NOSYS  = 1 << 5;
    }
}

bitflags! {
    /// Per-entry bookkeeping bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LocalMask: u32 {
        /// The entry carries an explicit `=value`.
        const HAS_VALUE = 1 << LOCAL_MASK_SHIFT;
        /// The entry was written in its "no"-prefixed form.
        const INVERTED  = 1 << (LOCAL_MASK_SHIFT + 1);
    }
}

const _: () = assert!(MapMask::all().bits() & LocalMask::all().bits() == 0);
const _: () = assert!(MapMask::all().bits() < (1 << LOCAL_MASK_SHIFT));

/// Runtime mask of an option entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntryMask {
    class: MapMask,
    local: LocalMask,
}

impl EntryMask {
    #[must_use]
    pub const fn new(class: MapMask, local: LocalMask) -> Self {
        Self { class, local }
    }

    /// Classification bits copied from the descriptor.
    #[must_use]
    pub const fn class(&self) -> MapMask {
        self.class
    }

    #[must_use]
    pub const fn local(&self) -> LocalMask {
        self.local
    }

    /// Combined integer form; bits never overlap.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.class.bits() | self.local.bits()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.class.is_empty() && self.local.is_empty()
    }

    /// True when every bit of `mask` is present in the classification.
    #[must_use]
    pub fn contains(&self, mask: MapMask) -> bool {
        self.class.contains(mask)
    }

    /// True when any bit of `mask` is present in the classification.
    #[must_use]
    pub fn intersects(&self, mask: MapMask) -> bool {
        self.class.intersects(mask)
    }

    #[must_use]
    pub fn has_local(&self, bit: LocalMask) -> bool {
        self.local.contains(bit)
    }

    pub(crate) fn set_class(&mut self, class: MapMask) {
        self.class = class;
    }

    pub(crate) fn set_local(&mut self, bit: LocalMask, on: bool) {
        self.local.set(bit, on);
    }
}
