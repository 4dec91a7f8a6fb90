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

use crate::graph::AsGraph;
use crate::sim::Simulator;
use crate::types::AsId;

/// Build a graph with slots for `[0, max_asn]` from provider→customer pairs and peer pairs.
fn graph(max_asn: u32, provider_customer: &[(u32, u32)], peers: &[(u32, u32)]) -> AsGraph {
    let mut g = AsGraph::new(max_asn);
    for &(p, c) in provider_customer {
        g.add_provider_customer(AsId(p), AsId(c));
    }
    for &(a, b) in peers {
        g.add_peer(AsId(a), AsId(b));
    }
    g
}

/// Build a simulator over [`graph`] with the given ROV-enforcing ASes.
fn simulator(
    max_asn: u32,
    provider_customer: &[(u32, u32)],
    peers: &[(u32, u32)],
    rov: &[u32],
) -> Simulator {
    Simulator::new(
        graph(max_asn, provider_customer, peers),
        rov.iter().map(|&a| AsId(a)),
    )
    .unwrap()
}

/// The stored AS path at `asn` for `prefix`, as raw numbers. Panics if the RIB has no entry.
fn rib_path(sim: &Simulator, asn: u32, prefix: &str) -> Vec<u32> {
    sim.policy(AsId(asn))
        .unwrap()
        .local_rib()
        .get(prefix)
        .unwrap_or_else(|| panic!("AS{asn} has no route for {prefix}"))
        .as_path
        .iter()
        .map(|a| a.0)
        .collect()
}

mod test_graph;
mod test_io;
