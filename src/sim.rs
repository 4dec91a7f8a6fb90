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

//! Module containing the propagation engine.
//!
//! The engine floods seeded announcements over the AS graph in three phases: up over
//! customer→provider edges in increasing rank order, across peer edges in a single sweep, and
//! down over provider→customer edges in decreasing rank order. Together with the
//! relationship-ranked decision procedure this reaches the Gao-Rexford fixed point in one
//! pass: a customer route beats any peer or provider route for the same prefix, so no valley
//! path can win at any AS.

use crate::bgp::{Announcement, RouteSource};
use crate::graph::AsGraph;
use crate::layering::Layering;
use crate::policy::{BgpPolicy, RouteValidation};
use crate::types::{AsId, SimError};

use log::{debug, info};
use std::collections::HashSet;

/// The propagation engine: the AS graph, one BGP process per AS slot, and the rank layering.
///
/// The graph is immutable for the lifetime of the engine. Policies are mutated only through
/// seeding and the propagation phases, all driven synchronously from the caller's thread.
#[derive(Debug)]
pub struct Simulator {
    graph: AsGraph,
    policies: Vec<BgpPolicy>,
    layering: Layering,
    /// Scratch buffer of (receiver, announcement) pairs, reused across phases.
    outbox: Vec<(AsId, Announcement)>,
}

impl Simulator {
    /// Create an engine over `graph`, with ROV enforcement at every AS in `rov_asns`.
    ///
    /// Fails with [`SimError::ProviderCycle`] if the provider/customer relation is not a DAG.
    pub fn new(graph: AsGraph, rov_asns: impl IntoIterator<Item = AsId>) -> Result<Self, SimError> {
        let layering = Layering::compute(&graph)?;
        let rov: HashSet<AsId> = rov_asns.into_iter().collect();

        let policies = (0..graph.num_slots())
            .map(|slot| {
                let asn = AsId(slot as u32);
                let validation = if rov.contains(&asn) {
                    RouteValidation::Rov
                } else {
                    RouteValidation::Standard
                };
                BgpPolicy::new(asn, validation)
            })
            .collect();

        info!(
            "simulator ready: {} AS slots, {} ranks, {} ROV ASes",
            graph.num_slots(),
            layering.num_ranks(),
            rov.len()
        );

        Ok(Self {
            graph,
            policies,
            layering,
            outbox: Vec::new(),
        })
    }

    /// The largest AS number the engine holds a process for.
    pub fn max_asn(&self) -> AsId {
        self.graph.max_asn()
    }

    /// The underlying AS graph.
    pub fn graph(&self) -> &AsGraph {
        &self.graph
    }

    /// The rank layering the phases iterate over.
    pub fn layering(&self) -> &Layering {
        &self.layering
    }

    /// The BGP process of `asn`, if it lies within the graph.
    pub fn policy(&self, asn: AsId) -> Option<&BgpPolicy> {
        self.policies.get(asn.index())
    }

    /// All BGP processes in ascending AS order, excluding the reserved AS 0.
    pub fn policies(&self) -> impl Iterator<Item = &BgpPolicy> {
        self.policies.iter().skip(1)
    }

    /// Seed an origin announcement for `prefix` at `origin` and process it immediately, so the
    /// origin's RIB holds the route before any propagation phase runs.
    ///
    /// Seeding the same announcement twice leaves the RIB unchanged. Note that an ROV-enforcing
    /// origin drops its own seed if it is marked invalid.
    pub fn seed_prefix(
        &mut self,
        prefix: &str,
        origin: AsId,
        rov_invalid: bool,
    ) -> Result<(), SimError> {
        if origin.0 == 0 || origin.index() >= self.graph.num_slots() {
            return Err(SimError::OriginOutOfRange(origin));
        }
        debug!("seed {prefix} at {origin} (rov_invalid: {rov_invalid})");
        let policy = &mut self.policies[origin.index()];
        policy.enqueue(Announcement::origin(prefix, origin, rov_invalid));
        policy.process_pending();
        Ok(())
    }

    /// Phase 1: flood routes up over customer→provider edges in increasing rank order.
    ///
    /// After the ASes of rank `r` have sent, the ASes of rank `r + 1` process their staging
    /// buffers, so every AS sends its updated best routes once its own layer's turn comes.
    pub fn propagate_up(&mut self) {
        debug!("propagate up across {} ranks", self.layering.num_ranks());
        for r in 0..self.layering.num_ranks() {
            for &asn in &self.layering.layers()[r] {
                let node = self.graph.get(asn);
                let rib = self.policies[asn.index()].local_rib();
                if rib.is_empty() {
                    continue;
                }
                for ann in rib.values() {
                    for &provider in &node.providers {
                        self.outbox
                            .push((provider, ann.forwarded(asn, provider, RouteSource::Customer)));
                    }
                }
            }
            Self::deliver(&mut self.policies, &mut self.outbox);

            if r + 1 < self.layering.num_ranks() {
                for &asn in &self.layering.layers()[r + 1] {
                    let policy = &mut self.policies[asn.index()];
                    if policy.has_pending() {
                        policy.process_pending();
                    }
                }
            }
        }
    }

    /// Phase 2: every AS sends its RIB to all peers in one sweep, then every AS processes once.
    ///
    /// Peer edges do not take part in the rank order, so the sweep order is irrelevant: all
    /// sends complete before any receiver processes.
    pub fn propagate_across_peers(&mut self) {
        debug!("propagate across peers");
        for slot in 1..self.graph.num_slots() {
            let asn = AsId(slot as u32);
            let node = self.graph.get(asn);
            let rib = self.policies[slot].local_rib();
            if rib.is_empty() {
                continue;
            }
            for ann in rib.values() {
                for &peer in &node.peers {
                    self.outbox
                        .push((peer, ann.forwarded(asn, peer, RouteSource::Peer)));
                }
            }
        }
        Self::deliver(&mut self.policies, &mut self.outbox);

        for policy in self.policies.iter_mut().skip(1) {
            if policy.has_pending() {
                policy.process_pending();
            }
        }
    }

    /// Phase 3: flood routes down over provider→customer edges in decreasing rank order,
    /// mirroring phase 1: customers process immediately after their providers have sent.
    pub fn propagate_down(&mut self) {
        debug!("propagate down across {} ranks", self.layering.num_ranks());
        for r in (1..self.layering.num_ranks()).rev() {
            for &asn in &self.layering.layers()[r] {
                let node = self.graph.get(asn);
                let rib = self.policies[asn.index()].local_rib();
                if rib.is_empty() {
                    continue;
                }
                for ann in rib.values() {
                    for &customer in &node.customers {
                        self.outbox
                            .push((customer, ann.forwarded(asn, customer, RouteSource::Provider)));
                    }
                }
            }
            Self::deliver(&mut self.policies, &mut self.outbox);

            for &asn in &self.layering.layers()[r - 1] {
                let policy = &mut self.policies[asn.index()];
                if policy.has_pending() {
                    policy.process_pending();
                }
            }
        }
    }

    /// Run the three phases once. Under Gao-Rexford preferences over a DAG customer graph, a
    /// single pass converges to the unique globally-preferred route at every AS.
    pub fn propagate_all(&mut self) {
        info!("propagate: up, across peers, down");
        self.propagate_up();
        self.propagate_across_peers();
        self.propagate_down();
    }

    fn deliver(policies: &mut [BgpPolicy], outbox: &mut Vec<(AsId, Announcement)>) {
        for (to, ann) in outbox.drain(..) {
            policies[to.index()].enqueue(ann);
        }
    }
}
