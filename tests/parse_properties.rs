//! Parsing behavior of option lists over caller-supplied maps.
//! Covers input order, inversion, has-value tracking, required values,
//! unknown pass-through, traversal in both directions, and list teardown.

mod common;

use common::{BASIC_MAP, EXTFS_MAP};
use mountopts::optmap::{enum_to_number, requires_value, resolve, ValueType};
use mountopts::{Direction, LocalMask, MapMask, OptEntry, OptionError, OptionList};

#[test]
fn parses_flags_in_order_with_inversion() {
    let mut ls = OptionList::new(&[&BASIC_MAP]);
    ls.parse_append("rw,noexec,relatime").unwrap();
    let ents: Vec<&OptEntry> = ls.iter(Direction::Forward).collect();
    assert_eq!(ents.len(), 3);
    assert_eq!(ents[0].name(), "rw");
    assert_eq!(ents[2].name(), "relatime");

    let second = ents[1];
    assert_eq!(second.mapent().unwrap().name, "exec");
    assert!(second.mask().has_local(LocalMask::INVERTED));
    assert!(second.mask().contains(MapMask::MFLAG | MapMask::INVERT));
    assert!(!ents[0].is_inverted());
}

#[test]
fn has_value_bit_tracks_supplied_values() {
    let mut ls = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
    ls.parse_append("rw,data=ordered,unknown=1,plain,size=0,context=\"a,b\",noacl")
        .unwrap();
    for ent in &ls {
        assert_eq!(
            ent.mask().has_local(LocalMask::HAS_VALUE),
            ent.value().is_some(),
            "has-value mismatch for {}",
            ent.name()
        );
    }
    assert_eq!(ls.iter(Direction::Forward).filter(|e| e.has_value()).count(), 4);
    assert_eq!(ls.get_option("context").unwrap().value(), Some("\"a,b\""));
}

#[test]
fn enum_values_decode_or_fail() {
    let data = &EXTFS_MAP.entries()[0];
    assert_eq!(enum_to_number(data, "ordered"), Ok(1));
    assert_eq!(
        enum_to_number(data, "bogus"),
        Err(OptionError::InvalidEnumValue {
            name: "data".into(),
            value: "bogus".into()
        })
    );

    // parsing stores the raw value, decoding is a separate step
    let mut ls = OptionList::new(&[&EXTFS_MAP]);
    ls.parse_append("data=bogus").unwrap();
    assert!(ls.get_option("data").unwrap().enum_value().is_err());
}

#[test]
fn missing_required_value_aborts_but_keeps_prefix() {
    for ent in EXTFS_MAP.entries() {
        let expect = ent.value_type() != ValueType::Boolean;
        assert_eq!(requires_value(ent), expect, "{}", ent.name);
    }
    for ent in BASIC_MAP.entries() {
        assert!(!requires_value(ent));
    }

    let mut ls = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
    let err = ls.parse_append("rw,noexec,size,relatime").unwrap_err();
    assert_eq!(err, OptionError::MissingRequiredValue { name: "size".into() });
    assert_eq!(ls.len(), 2);
    assert_eq!(ls.to_optstr(), "rw,noexec");
}

#[test]
fn malformed_token_aborts_parse() {
    let mut ls = OptionList::new(&[&BASIC_MAP]);
    let err = ls.parse_append("rw,=oops,relatime").unwrap_err();
    assert!(matches!(err, OptionError::MalformedToken { .. }));
    assert_eq!(ls.len(), 1);

    let err = ls.parse_append("relatime,,rw").unwrap_err();
    assert!(matches!(err, OptionError::MalformedToken { .. }));
    assert_eq!(ls.to_optstr(), "rw,relatime");
}

#[test]
fn both_directions_visit_every_entry_once() {
    let mut ls = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
    ls.parse_append("rw,data=writeback,x,noexec,size=7,relatime,y=z").unwrap();
    let n = ls.len();

    let fwd: Vec<&str> = ls.iter(Direction::Forward).map(OptEntry::name).collect();
    let mut bwd: Vec<&str> = ls.iter(Direction::Backward).map(OptEntry::name).collect();
    assert_eq!(fwd.len(), n);
    assert_eq!(bwd.len(), n);
    bwd.reverse();
    assert_eq!(fwd, bwd);

    let mut it = ls.iter(Direction::Backward);
    for _ in 0..n {
        assert!(it.next().is_some());
    }
    assert!(it.next().is_none());
}

#[test]
fn unknown_options_pass_through() {
    let mut ls = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
    ls.parse_append("foobar123").unwrap();
    let ent = ls.get_option("foobar123").unwrap();
    assert!(ent.map().is_none());
    assert!(ent.mapent().is_none());
    assert_eq!(ent.mask().bits(), 0);
    assert!(resolve(&[&BASIC_MAP, &EXTFS_MAP], "foobar123").is_none());
}

#[test]
fn tables_outlive_dropped_lists() {
    {
        let mut ls = OptionList::new(&[&BASIC_MAP]);
        ls.parse_append("rw,noexec").unwrap();
        drop(ls);
    }
    let mut other = OptionList::new(&[&BASIC_MAP]);
    other.parse_append("noexec").unwrap();
    assert_eq!(other.get_option("noexec").unwrap().mapent().unwrap().name, "exec");
    assert_eq!(BASIC_MAP.len(), 3);
}

#[test]
fn lists_share_tables_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut ls = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
                ls.parse_append(&format!("rw,size={i},noexec")).unwrap();
                ls.get_option("size").unwrap().number_value().unwrap()
            })
        })
        .collect();
    let mut got: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    got.sort_unstable();
    assert_eq!(got, [0, 1, 2, 3]);
}

#[test]
fn rendering_parses_back_to_the_same_entries() {
    for input in [
        "context=\"a,b\"c,size=1",
        "rw,noexec,data=writeback,context=\"x,y\",weird=,noacl",
        "context=\"\",opaque=\"1,2,3\",relatime",
    ] {
        let mut ls = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
        ls.parse_append(input).unwrap();
        let rendered = ls.to_optstr();
        assert_eq!(rendered, input);

        let mut again = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
        again.parse_append(&rendered).unwrap();
        let first: Vec<&OptEntry> = ls.iter(Direction::Forward).collect();
        let second: Vec<&OptEntry> = again.iter(Direction::Forward).collect();
        assert_eq!(first, second, "{input}");
    }
}

#[test]
fn added_options_that_cannot_render_are_refused() {
    let mut ls = OptionList::new(&[&BASIC_MAP, &EXTFS_MAP]);
    for (name, value) in [
        ("a,b", None),
        ("k=v", None),
        ("", None),
        ("context", Some("y\"z")),
        ("context", Some("\"a\",b")),
    ] {
        assert!(
            matches!(ls.add_option(name, value), Err(OptionError::MalformedToken { .. })),
            "{name:?} {value:?}"
        );
    }
    ls.add_option("context", Some("a,b")).unwrap();
    assert_eq!(ls.to_optstr(), "context=\"a,b\"");
}
