//! Public API surface smoke test.
//! Ensures typical consumer imports compile and a mount-table style flow runs.

use mountopts::optmap::{builtin_map, BuiltinMap, OptMap, OptMapTable, ValueSpec};
use mountopts::{Config, Direction, MapMask, OptionList};

const NFS_ENTRIES: &[OptMap] = &[
    OptMap::valued("vers", 0, MapMask::MDATA, ValueSpec::Number),
    OptMap::valued("sec", 0, MapMask::MDATA, ValueSpec::Enum(&[("sys", 1), ("krb5", 2)])),
    OptMap::flag("ac", 0, MapMask::MDATA.union(MapMask::INVERT)),
];
static NFS_MAP: OptMapTable = OptMapTable::new("nfs", NFS_ENTRIES);

#[test]
fn builtin_and_custom_maps_partition_options() {
    let mut ls = OptionList::from_config(&Config::default());
    ls.add_map(&NFS_MAP);
    ls.parse_append("ro,nosuid,_netdev,nofail,vers=4,sec=krb5,noac,comment=\"x,y\"")
        .unwrap();

    let flags: Vec<&str> = ls.entries_with(MapMask::MFLAG).map(|e| e.name()).collect();
    assert_eq!(flags, ["ro", "nosuid"]);

    let data: Vec<String> = ls.entries_with(MapMask::MDATA).map(ToString::to_string).collect();
    assert_eq!(data, ["vers=4", "sec=krb5", "noac"]);

    assert_eq!(
        ls.to_optstr_without(MapMask::NOMTAB),
        "ro,nosuid,_netdev,vers=4,sec=krb5,noac"
    );
    assert_eq!(ls.get_option("sec").unwrap().enum_value(), Ok(2));
    assert_eq!(ls.get_option("vers").unwrap().number_value(), Ok(4));
}

#[test]
fn add_builtin_map_reclassifies_userspace_options() {
    let mut ls = OptionList::new(&[builtin_map(BuiltinMap::Linux)]);
    ls.parse_append("rw,noauto,user").unwrap();
    assert!(ls.get_option("noauto").unwrap().is_unknown());
    assert_eq!(ls.add_builtin_map(BuiltinMap::Userspace), 2);
    let noauto = ls.get_option("noauto").unwrap();
    assert!(noauto.is_inverted());
    assert_eq!(noauto.mapent().unwrap().name, "auto");

    let last = ls.iter(Direction::Backward).next().unwrap();
    assert_eq!(last.name(), "user");
}
