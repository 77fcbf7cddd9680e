#![forbid(unsafe_code)]
//! mountopts: mount option strings parsed into classified, queryable lists.
//!
//! Model highlights:
//! - Option maps (`optmap`) are static tables describing every known option: value type,
//!   whether it feeds the mount(2) flag word or data string, whether it stays out of the
//!   mount table, whether the kernel honors it, and whether it has a "no"-prefixed form.
//! - An `OptionList` borrows an ordered set of maps and owns the `OptEntry` values parsed
//!   from option strings, in input order. Unknown options are kept unclassified.
//! - Diagnostics are an explicit context held by each list, reported through `log`.
//!
//! ```
//! use mountopts::{Direction, MapMask, OptionList};
//! use mountopts::optmap::LINUX_MAP;
//!
//! let mut ls = OptionList::new(&[&LINUX_MAP]);
//! ls.parse_append("rw,noexec,relatime").unwrap();
//! assert!(ls.get_option("noexec").unwrap().is_inverted());
//! assert_eq!(ls.entries_with(MapMask::MFLAG).count(), 3);
//! let last = ls.iter(Direction::Backward).next().unwrap();
//! assert_eq!(last.name(), "relatime");
//! ```

pub mod config;
pub mod constants;
pub mod logging;
pub mod optent;
pub mod optls;
pub mod optmap;
pub mod optstr;
pub mod types;
pub mod utils;

pub use config::Config;
pub use optent::OptEntry;
pub use optls::{Direction, OptIter, OptionList};
pub use types::{EntryMask, ErrorKind, LocalMask, MapMask, OptionError, Result};
