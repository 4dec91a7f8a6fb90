// GaoSim: AS-level BGP Route Propagation Simulator written in Rust
// Copyright (C) 2022-2023 Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

use crate::graph::RelRecord;
use crate::io::relationships::{parse_relationships, read_relationships};
use crate::io::rib_out::write_rib;
use crate::io::seeds::{parse_rov_asns, parse_seeds, read_rov_asns, read_seeds, SeedRecord};
use crate::types::{AsId, SimError};

use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

fn rel(input: &str) -> Result<Vec<RelRecord>, SimError> {
    parse_relationships(Cursor::new(input.to_string()), Path::new("test"))
}

fn rov(input: &str) -> Result<Vec<AsId>, SimError> {
    parse_rov_asns(Cursor::new(input.to_string()), Path::new("test"))
}

/// Write a fixture file into the system temp directory. The name keeps its extension so the
/// reader picks the right decompression branch.
fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gaosim-{}-{name}", std::process::id()));
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn relationships_parse_data_lines() {
    let records = rel("# comment\n\n1|2|0|bgp\n3|4|-1\n").unwrap();
    assert_eq!(
        records,
        vec![
            RelRecord {
                left: AsId(1),
                right: AsId(2),
                indicator: 0,
            },
            RelRecord {
                left: AsId(3),
                right: AsId(4),
                indicator: -1,
            },
        ]
    );
}

#[test]
fn relationships_keep_unknown_indicators_for_the_builder() {
    // the reader preserves the raw value; the graph builder is the one that rejects it
    let records = rel("3|4|1|meta\n").unwrap();
    assert_eq!(records[0].indicator, 1);
}

#[test]
fn relationships_reject_missing_fields() {
    assert!(matches!(
        rel("42|4345\n"),
        Err(SimError::MalformedLine(line)) if line == "42|4345"
    ));
}

#[test]
fn relationships_reject_non_numeric_fields() {
    assert!(matches!(
        rel("one|2|0\n"),
        Err(SimError::MalformedLine(_))
    ));
}

#[test]
fn relationships_allow_empty_input() {
    assert_eq!(rel("# only comments\n").unwrap(), vec![]);
}

#[test]
fn seeds_parse_with_header() {
    let seeds = parse_seeds(Cursor::new(
        "asn,prefix,rov_invalid\n64500,10.0.0.0/24,true\n64501,10.0.1.0/24,0\n",
    ))
    .unwrap();
    assert_eq!(
        seeds,
        vec![
            SeedRecord {
                asn: AsId(64500),
                prefix: "10.0.0.0/24".to_string(),
                rov_invalid: true,
            },
            SeedRecord {
                asn: AsId(64501),
                prefix: "10.0.1.0/24".to_string(),
                rov_invalid: false,
            },
        ]
    );
}

#[test]
fn seeds_parse_without_header() {
    let seeds = parse_seeds(Cursor::new("7,10.0.0.0/8,F\n")).unwrap();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].asn, AsId(7));
    assert!(!seeds[0].rov_invalid);
}

#[test]
fn seeds_accept_all_boolean_spellings() {
    let input = "1,p,true\n2,p,T\n3,p,1\n4,p,false\n5,p,f\n6,p,0\n";
    let seeds = parse_seeds(Cursor::new(input)).unwrap();
    let verdicts: Vec<bool> = seeds.iter().map(|s| s.rov_invalid).collect();
    assert_eq!(verdicts, vec![true, true, true, false, false, false]);
}

#[test]
fn seeds_reject_unparseable_booleans() {
    assert!(matches!(
        parse_seeds(Cursor::new("1,10.0.0.0/24,maybe\n")),
        Err(SimError::InvalidBool(v)) if v == "maybe"
    ));
}

#[test]
fn seeds_skip_comment_lines() {
    let seeds = parse_seeds(Cursor::new("# seeded announcements\n9,10.0.0.0/24,1\n")).unwrap();
    assert_eq!(seeds[0].asn, AsId(9));
    assert!(seeds[0].rov_invalid);
}

#[test]
fn rov_list_parses_plain_and_csv_lines() {
    let asns = rov("# enforcing ASes\nasn\n64500\n64501,RIPE\n\n64502\n").unwrap();
    assert_eq!(asns, vec![AsId(64500), AsId(64501), AsId(64502)]);
}

#[test]
fn rov_list_without_header() {
    assert_eq!(rov("1\n2\n").unwrap(), vec![AsId(1), AsId(2)]);
}

#[test]
fn rov_list_rejects_garbage() {
    assert!(matches!(
        rov("1\ntwo\n"),
        Err(SimError::MalformedLine(line)) if line == "two"
    ));
}

#[test]
fn relationships_read_from_bz2_archive() {
    let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::new(6));
    encoder.write_all(b"# header\n1|2|-1\n3|4|0|bgp\n").unwrap();
    let path = write_fixture("rel.txt.bz2", &encoder.finish().unwrap());

    let records = read_relationships(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(
        records.unwrap(),
        vec![
            RelRecord {
                left: AsId(1),
                right: AsId(2),
                indicator: -1,
            },
            RelRecord {
                left: AsId(3),
                right: AsId(4),
                indicator: 0,
            },
        ]
    );
}

#[test]
fn seeds_read_from_gz_archive() {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(b"asn,prefix,rov_invalid\n64500,10.0.0.0/24,true\n")
        .unwrap();
    let path = write_fixture("seeds.csv.gz", &encoder.finish().unwrap());

    let seeds = read_seeds(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(
        seeds.unwrap(),
        vec![SeedRecord {
            asn: AsId(64500),
            prefix: "10.0.0.0/24".to_string(),
            rov_invalid: true,
        }]
    );
}

#[test]
fn rov_list_read_from_plain_file() {
    let path = write_fixture("rov.csv", b"# enforcing\n64500\n64501\n");

    let asns = read_rov_asns(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(asns.unwrap(), vec![AsId(64500), AsId(64501)]);
}

#[test]
fn rib_csv_lists_routes_ascending() {
    let mut sim = super::simulator(3, &[(1, 2)], &[], &[]);
    sim.seed_prefix("10.0.0.0/24", AsId(2), false).unwrap();
    sim.seed_prefix("192.168.0.0/16", AsId(2), false).unwrap();
    sim.propagate_all();

    let mut out = Vec::new();
    write_rib(&sim, &mut out, Path::new("test")).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "asn,prefix,as_path\n\
         1,10.0.0.0/24,1 2\n\
         1,192.168.0.0/16,1 2\n\
         2,10.0.0.0/24,2\n\
         2,192.168.0.0/16,2\n"
    );
}

#[test]
fn rib_csv_is_header_only_without_routes() {
    let sim = super::simulator(2, &[(1, 2)], &[], &[]);
    let mut out = Vec::new();
    write_rib(&sim, &mut out, Path::new("test")).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "asn,prefix,as_path\n");
}
