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

//! Module defining the AS relationship graph.

use crate::types::{AsId, SimError};

use serde::{Deserialize, Serialize};

/// One relationship record of a CAIDA `as-rel2` snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelRecord {
    /// Provider in a `-1` record, first peer in a `0` record.
    pub left: AsId,
    /// Customer in a `-1` record, second peer in a `0` record.
    pub right: AsId,
    /// Raw relationship indicator: `-1` provider/customer, `0` peer. Anything else is rejected
    /// when the graph is built.
    pub indicator: i32,
}

/// Adjacency of a single AS.
///
/// The lists are built once and never deduplicated: feeding the same edge twice yields
/// duplicate entries. Symmetry is maintained by construction, `b ∈ providers(a)` iff
/// `a ∈ customers(b)`, and likewise for peers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsNode {
    /// ASes this AS buys transit from.
    pub providers: Vec<AsId>,
    /// ASes buying transit from this AS.
    pub customers: Vec<AsId>,
    /// Settlement-free peers.
    pub peers: Vec<AsId>,
}

/// The AS-level topology: a dense arena of [`AsNode`]s indexed by AS number.
///
/// Slot 0 exists so that AS numbers index directly, but AS 0 is reserved and never takes part
/// in a simulation. The graph is sized once at construction; edge insertions naming an AS
/// beyond the last slot are silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsGraph {
    nodes: Vec<AsNode>,
}

impl AsGraph {
    /// Create an empty graph with slots for every AS in `[0, max_asn]`.
    pub fn new(max_asn: u32) -> Self {
        Self {
            nodes: vec![AsNode::default(); max_asn as usize + 1],
        }
    }

    /// Build the graph from relationship records, sized by the largest AS that appears.
    ///
    /// An unknown indicator is fatal, and so is an input without any AS.
    pub fn from_records(records: &[RelRecord]) -> Result<Self, SimError> {
        let max_asn = records
            .iter()
            .flat_map(|r| [r.left.0, r.right.0])
            .max()
            .unwrap_or(0);
        if max_asn == 0 {
            return Err(SimError::EmptyAsSet);
        }

        let mut graph = Self::new(max_asn);
        for rec in records {
            match rec.indicator {
                -1 => graph.add_provider_customer(rec.left, rec.right),
                0 => graph.add_peer(rec.left, rec.right),
                i => {
                    return Err(SimError::InvalidIndicator {
                        indicator: i,
                        left: rec.left,
                        right: rec.right,
                    })
                }
            }
        }
        Ok(graph)
    }

    /// Record `provider` as a provider of `customer`, updating both adjacency lists.
    pub fn add_provider_customer(&mut self, provider: AsId, customer: AsId) {
        if provider.index() >= self.nodes.len() || customer.index() >= self.nodes.len() {
            return;
        }
        self.nodes[provider.index()].customers.push(customer);
        self.nodes[customer.index()].providers.push(provider);
    }

    /// Record a symmetric peering between `a` and `b`.
    pub fn add_peer(&mut self, a: AsId, b: AsId) {
        if a.index() >= self.nodes.len() || b.index() >= self.nodes.len() {
            return;
        }
        self.nodes[a.index()].peers.push(b);
        self.nodes[b.index()].peers.push(a);
    }

    /// The adjacency of `asn`.
    ///
    /// # Panics
    /// Panics if `asn` lies outside the arena.
    pub fn get(&self, asn: AsId) -> &AsNode {
        &self.nodes[asn.index()]
    }

    /// Number of AS slots, i.e. `max_asn + 1`.
    pub fn num_slots(&self) -> usize {
        self.nodes.len()
    }

    /// The largest AS number the arena can hold.
    pub fn max_asn(&self) -> AsId {
        AsId(self.nodes.len() as u32 - 1)
    }
}
