//! Option maps compiled into the library.
//!
//! `LINUX_MAP` lists the generic VFS options that end up in the mount(2)
//! flag word. `USERSPACE_MAP` lists the options interpreted by mount(8)
//! itself; none of them reach the kernel.
use crate::types::MapMask;

use super::table::{OptMap, OptMapTable, ValueSpec};

pub const MS_RDONLY: u64 = 1;
pub const MS_NOSUID: u64 = 1 << 1;
pub const MS_NODEV: u64 = 1 << 2;
pub const MS_NOEXEC: u64 = 1 << 3;
pub const MS_SYNCHRONOUS: u64 = 1 << 4;
pub const MS_REMOUNT: u64 = 1 << 5;
pub const MS_MANDLOCK: u64 = 1 << 6;
pub const MS_DIRSYNC: u64 = 1 << 7;
pub const MS_NOSYMFOLLOW: u64 = 1 << 8;
pub const MS_NOATIME: u64 = 1 << 10;
pub const MS_NODIRATIME: u64 = 1 << 11;
pub const MS_BIND: u64 = 1 << 12;
pub const MS_MOVE: u64 = 1 << 13;
pub const MS_REC: u64 = 1 << 14;
pub const MS_SILENT: u64 = 1 << 15;
pub const MS_RELATIME: u64 = 1 << 21;
pub const MS_I_VERSION: u64 = 1 << 23;
pub const MS_STRICTATIME: u64 = 1 << 24;
pub const MS_LAZYTIME: u64 = 1 << 25;

pub const MNT_MS_NOAUTO: u64 = 1 << 1;
pub const MNT_MS_USER: u64 = 1 << 2;
pub const MNT_MS_USERS: u64 = 1 << 3;
pub const MNT_MS_OWNER: u64 = 1 << 4;
pub const MNT_MS_GROUP: u64 = 1 << 5;
pub const MNT_MS_NETDEV: u64 = 1 << 6;
pub const MNT_MS_COMMENT: u64 = 1 << 8;
pub const MNT_MS_NOFAIL: u64 = 1 << 10;
pub const MNT_MS_UHELPER: u64 = 1 << 11;
pub const MNT_MS_HELPER: u64 = 1 << 12;
pub const MNT_MS_OFFSET: u64 = 1 << 14;
pub const MNT_MS_SIZELIMIT: u64 = 1 << 15;
pub const MNT_MS_ENCRYPTION: u64 = 1 << 16;

const FLAG: MapMask = MapMask::MFLAG;
const FLAG_INV: MapMask = MapMask::MFLAG.union(MapMask::INVERT);
const FLAG_NOMTAB: MapMask = MapMask::MFLAG.union(MapMask::NOMTAB);

const LINUX_ENTRIES: &[OptMap] = &[
    OptMap::flag("defaults", 0, FLAG),
    OptMap::flag("ro", MS_RDONLY, FLAG),
    OptMap::flag("rw", MS_RDONLY, FLAG),
    OptMap::flag("exec", MS_NOEXEC, FLAG_INV),
    OptMap::flag("suid", MS_NOSUID, FLAG_INV),
    OptMap::flag("dev", MS_NODEV, FLAG_INV),
    OptMap::flag("sync", MS_SYNCHRONOUS, FLAG),
    OptMap::flag("async", MS_SYNCHRONOUS, FLAG),
    OptMap::flag("dirsync", MS_DIRSYNC, FLAG),
    OptMap::flag("remount", MS_REMOUNT, FLAG_NOMTAB),
    OptMap::flag("bind", MS_BIND, FLAG_NOMTAB),
    OptMap::flag("rbind", MS_BIND | MS_REC, FLAG_NOMTAB),
    OptMap::flag("move", MS_MOVE, FLAG_NOMTAB),
    // mandatory locking is gone since Linux 5.15
    OptMap::flag("mand", MS_MANDLOCK, FLAG_INV.union(MapMask::NOSYS)),
    OptMap::flag("atime", MS_NOATIME, FLAG_INV),
    OptMap::flag("diratime", MS_NODIRATIME, FLAG_INV),
    OptMap::flag("relatime", MS_RELATIME, FLAG_INV),
    OptMap::flag("strictatime", MS_STRICTATIME, FLAG_INV),
    OptMap::flag("lazytime", MS_LAZYTIME, FLAG_INV),
    OptMap::flag("iversion", MS_I_VERSION, FLAG_INV),
    OptMap::flag("symfollow", MS_NOSYMFOLLOW, FLAG_INV),
    OptMap::flag("silent", MS_SILENT, FLAG),
    OptMap::flag("loud", MS_SILENT, FLAG),
];

const USERSPACE_ENTRIES: &[OptMap] = &[
    OptMap::flag("auto", MNT_MS_NOAUTO, MapMask::INVERT),
    OptMap::flag("user", MNT_MS_USER, MapMask::INVERT),
    OptMap::flag("users", MNT_MS_USERS, MapMask::INVERT),
    OptMap::flag("owner", MNT_MS_OWNER, MapMask::INVERT),
    OptMap::flag("group", MNT_MS_GROUP, MapMask::INVERT),
    OptMap::flag("_netdev", MNT_MS_NETDEV, MapMask::empty()),
    OptMap::flag("nofail", MNT_MS_NOFAIL, MapMask::NOMTAB),
    OptMap::valued("comment", MNT_MS_COMMENT, MapMask::NOMTAB, ValueSpec::Text),
    OptMap::valued("uhelper", MNT_MS_UHELPER, MapMask::empty(), ValueSpec::Text),
    OptMap::valued("helper", MNT_MS_HELPER, MapMask::NOMTAB, ValueSpec::Text),
    OptMap::valued("offset", MNT_MS_OFFSET, MapMask::NOMTAB, ValueSpec::Number),
    OptMap::valued("sizelimit", MNT_MS_SIZELIMIT, MapMask::NOMTAB, ValueSpec::Number),
    OptMap::valued("encryption", MNT_MS_ENCRYPTION, MapMask::NOMTAB, ValueSpec::Text),
];

/// Generic kernel VFS options.
pub static LINUX_MAP: OptMapTable = OptMapTable::new("linux", LINUX_ENTRIES);

/// Options consumed by mount(8) and friends.
pub static USERSPACE_MAP: OptMapTable = OptMapTable::new("userspace", USERSPACE_ENTRIES);

/// Selector for the compiled-in maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinMap {
    Linux,
    Userspace,
}

#[must_use]
pub fn builtin_map(which: BuiltinMap) -> &'static OptMapTable {
    match which {
        BuiltinMap::Linux => &LINUX_MAP,
        BuiltinMap::Userspace => &USERSPACE_MAP,
    }
}
