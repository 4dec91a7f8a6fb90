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

use crate::graph::{AsGraph, RelRecord};
use crate::types::{AsId, SimError};

use pretty_assertions::assert_eq;

#[test]
fn provider_customer_symmetry() {
    let g = super::graph(3, &[(1, 2), (1, 3)], &[]);
    assert_eq!(g.get(AsId(1)).customers, vec![AsId(2), AsId(3)]);
    assert_eq!(g.get(AsId(2)).providers, vec![AsId(1)]);
    assert_eq!(g.get(AsId(3)).providers, vec![AsId(1)]);
    assert!(g.get(AsId(1)).providers.is_empty());
}

#[test]
fn peer_symmetry() {
    let g = super::graph(2, &[], &[(1, 2)]);
    assert_eq!(g.get(AsId(1)).peers, vec![AsId(2)]);
    assert_eq!(g.get(AsId(2)).peers, vec![AsId(1)]);
}

#[test]
fn out_of_range_edges_are_ignored() {
    let mut g = AsGraph::new(3);
    g.add_provider_customer(AsId(10), AsId(1));
    g.add_provider_customer(AsId(1), AsId(10));
    g.add_peer(AsId(10), AsId(2));
    assert!(g.get(AsId(1)).providers.is_empty());
    assert!(g.get(AsId(1)).customers.is_empty());
    assert!(g.get(AsId(2)).peers.is_empty());
}

#[test]
fn duplicate_edges_are_kept() {
    let g = super::graph(2, &[(1, 2), (1, 2)], &[]);
    assert_eq!(g.get(AsId(1)).customers, vec![AsId(2), AsId(2)]);
    assert_eq!(g.get(AsId(2)).providers, vec![AsId(1), AsId(1)]);
}

#[test]
fn from_records_sizes_by_largest_asn() {
    let records = vec![
        RelRecord {
            left: AsId(1),
            right: AsId(65000),
            indicator: -1,
        },
        RelRecord {
            left: AsId(1),
            right: AsId(7),
            indicator: 0,
        },
    ];
    let g = AsGraph::from_records(&records).unwrap();
    assert_eq!(g.max_asn(), AsId(65000));
    assert_eq!(g.num_slots(), 65001);
    assert_eq!(g.get(AsId(65000)).providers, vec![AsId(1)]);
    assert_eq!(g.get(AsId(7)).peers, vec![AsId(1)]);
}

#[test]
fn from_records_rejects_unknown_indicator() {
    let records = vec![RelRecord {
        left: AsId(3),
        right: AsId(4),
        indicator: 1,
    }];
    assert!(matches!(
        AsGraph::from_records(&records),
        Err(SimError::InvalidIndicator {
            indicator: 1,
            left: AsId(3),
            right: AsId(4),
        })
    ));
}

#[test]
fn from_records_rejects_empty_input() {
    assert!(matches!(
        AsGraph::from_records(&[]),
        Err(SimError::EmptyAsSet)
    ));
}
