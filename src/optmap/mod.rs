//! Option maps: static descriptors of known options and the lookups over them.
//!
//! Submodules:
//! - `table`: descriptor and table types
//! - `resolve`: name lookup across ordered tables, enum decoding
//! - `builtin`: maps compiled into the library

pub mod builtin;
pub mod resolve;
pub mod table;

pub use builtin::{builtin_map, BuiltinMap, LINUX_MAP, USERSPACE_MAP};
pub use resolve::{enum_to_number, requires_value, resolve, value_type, MapRef, Resolved};
pub use table::{EnumLiterals, OptMap, OptMapTable, ValueSpec, ValueType};
