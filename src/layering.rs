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

//! Module computing the propagation ranks of the AS graph.
//!
//! Ranks order the rank-layered flood: every provider sits strictly above its highest-ranked
//! customer, leaves sit at rank 0. No layering exists if the provider/customer relation is
//! cyclic, so both the explicit acyclicity check and the rank computation report such a cycle
//! as [`SimError::ProviderCycle`].

use crate::graph::AsGraph;
use crate::types::{AsId, SimError};

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Active,
    Finished,
}

/// Verify that the provider→customer relation is a DAG.
///
/// Three-colour depth-first traversal over the customer edges of every AS. The traversal is
/// iterative with an explicit stack: an Internet-scale customer chain would overflow the call
/// stack long before it exhausts memory.
pub fn check_acyclic(graph: &AsGraph) -> Result<(), SimError> {
    let mut state = vec![Visit::Unvisited; graph.num_slots()];
    // (node, index of the next customer edge to follow)
    let mut stack: Vec<(AsId, usize)> = Vec::new();

    for start in 1..graph.num_slots() {
        if state[start] != Visit::Unvisited {
            continue;
        }
        state[start] = Visit::Active;
        stack.push((AsId(start as u32), 0));

        while let Some(&(u, next_child)) = stack.last() {
            let customers = &graph.get(u).customers;
            if next_child < customers.len() {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                let c = customers[next_child];
                match state[c.index()] {
                    Visit::Active => return Err(SimError::ProviderCycle),
                    Visit::Unvisited => {
                        state[c.index()] = Visit::Active;
                        stack.push((c, 0));
                    }
                    Visit::Finished => {}
                }
            } else {
                state[u.index()] = Visit::Finished;
                stack.pop();
            }
        }
    }
    Ok(())
}

/// The propagation ranks of all ASes, flattened into layers.
#[derive(Debug, Clone)]
pub struct Layering {
    ranks: Vec<u32>,
    layers: Vec<Vec<AsId>>,
}

impl Layering {
    /// Compute the unique longest-path-to-leaf rank of every AS and group the ASes by rank.
    ///
    /// Reverse topological sort: ASes without customers seed the queue at rank 0; dequeuing an
    /// AS lifts each of its providers to at least one rank above it, and a provider enters the
    /// queue once all of its customers are done. Any AS left with undone customers afterwards
    /// proves a provider/customer cycle.
    pub fn compute(graph: &AsGraph) -> Result<Self, SimError> {
        check_acyclic(graph)?;

        let n = graph.num_slots();
        let mut ranks = vec![0u32; n];
        let mut remaining: Vec<usize> = (0..n)
            .map(|slot| graph.get(AsId(slot as u32)).customers.len())
            .collect();

        let mut queue: VecDeque<AsId> = (1..n)
            .filter(|&slot| remaining[slot] == 0)
            .map(|slot| AsId(slot as u32))
            .collect();

        while let Some(u) = queue.pop_front() {
            for &p in &graph.get(u).providers {
                ranks[p.index()] = ranks[p.index()].max(ranks[u.index()] + 1);
                remaining[p.index()] -= 1;
                if remaining[p.index()] == 0 {
                    queue.push_back(p);
                }
            }
        }

        if remaining[1..].iter().any(|&r| r > 0) {
            return Err(SimError::ProviderCycle);
        }

        let num_ranks = ranks[1..].iter().max().map(|&r| r as usize + 1).unwrap_or(0);
        let mut layers = vec![Vec::new(); num_ranks];
        for slot in 1..n {
            layers[ranks[slot] as usize].push(AsId(slot as u32));
        }

        Ok(Self { ranks, layers })
    }

    /// The propagation rank of `asn`.
    ///
    /// # Panics
    /// Panics if `asn` lies outside the graph this layering was computed for.
    pub fn rank(&self, asn: AsId) -> u32 {
        self.ranks[asn.index()]
    }

    /// The ASes grouped by rank, `layers()[r]` holding every AS of rank `r`. Order within a
    /// layer is unspecified.
    pub fn layers(&self) -> &[Vec<AsId>] {
        &self.layers
    }

    /// Number of distinct ranks, i.e. `max(rank) + 1`.
    pub fn num_ranks(&self) -> usize {
        self.layers.len()
    }
}
