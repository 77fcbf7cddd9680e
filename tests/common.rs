//! Shared test helpers for the mountopts integration tests.
#![allow(dead_code)]

use log::Level;
use std::sync::{Arc, Mutex};

use mountopts::logging::{DebugMask, DiagSink};
use mountopts::optmap::{OptMap, OptMapTable, ValueSpec};
use mountopts::MapMask;

/// A simple in-memory sink to capture diagnostics during tests.
#[derive(Clone, Default, Debug)]
pub struct TestSink {
    pub lines: Arc<Mutex<Vec<(Level, DebugMask, String)>>>,
}

impl DiagSink for TestSink {
    fn log(&self, level: Level, category: DebugMask, msg: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((level, category, msg.to_string()));
    }
}

impl TestSink {
    pub fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, m)| m.clone())
            .collect()
    }
}

const FLAGS: MapMask = MapMask::MFLAG;

const BASIC_ENTRIES: &[OptMap] = &[
    OptMap::flag("rw", 0, FLAGS),
    OptMap::flag("exec", 8, FLAGS.union(MapMask::INVERT)),
    OptMap::flag("relatime", 1 << 21, FLAGS),
];

/// Boolean flag options only.
pub static BASIC_MAP: OptMapTable = OptMapTable::new("basic", BASIC_ENTRIES);

pub const JOURNAL_MODES: &[(&str, i32)] = &[("none", 0), ("ordered", 1), ("writeback", 2)];

const EXTFS_ENTRIES: &[OptMap] = &[
    OptMap::valued("data", 0, MapMask::MDATA, ValueSpec::Enum(JOURNAL_MODES)),
    OptMap::valued("size", 0, MapMask::MDATA, ValueSpec::Number),
    OptMap::valued("context", 0, MapMask::MDATA, ValueSpec::Text),
    OptMap::flag("acl", 0, MapMask::MDATA.union(MapMask::INVERT)),
];

/// Filesystem-specific options carried in the mount data string.
pub static EXTFS_MAP: OptMapTable = OptMapTable::new("extfs", EXTFS_ENTRIES);
