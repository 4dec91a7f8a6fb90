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

#![deny(missing_docs, missing_debug_implementations)]

//! # GaoSim
//!
//! This is a library for simulating inter-domain routing between Autonomous Systems at
//! Internet scale.
//!
//! Given a snapshot of the commercial relationships between ASes (provider/customer and
//! peer/peer, as published by CAIDA) and a set of origin announcements, GaoSim computes the
//! routing information base that every AS holds after BGP converges under the standard
//! Gao-Rexford export policy. Designated ASes can additionally enforce route origin
//! validation (ROV) and discard announcements marked invalid.
//!
//! ## Main Concepts
//!
//! The [`graph::AsGraph`] is a dense arena of per-AS adjacency lists, indexed directly by AS
//! number. [`layering::Layering`] verifies that the provider/customer relation is acyclic and
//! assigns every AS its propagation rank (leaves at rank 0, every provider strictly above its
//! highest-ranked customer). The [`sim::Simulator`] owns one [`policy::BgpPolicy`] per AS and
//! floods announcements in three rank-ordered phases: up over customer→provider edges, across
//! peer edges, and down over provider→customer edges. The decision procedure
//! ([`bgp::Announcement::compare`]) prefers routes by the relationship they were learned over
//! (customer over peer over provider), then by path length, then by lowest next hop; this is
//! what makes a single pass of the three phases converge without valley paths.
//!
//! There is no timing model and no withdrawal churn: the simulation is single-threaded,
//! synchronous, and monotone-additive.
//!
//! ## Example usage
//!
//! ```
//! use gaosim::prelude::*;
//!
//! fn main() -> Result<(), SimError> {
//!     // AS 1 provides transit to AS 2, which provides transit to AS 3.
//!     let mut graph = AsGraph::new(3);
//!     graph.add_provider_customer(AsId(1), AsId(2));
//!     graph.add_provider_customer(AsId(2), AsId(3));
//!
//!     let mut sim = Simulator::new(graph, std::iter::empty())?;
//!     sim.seed_prefix("10.0.0.0/24", AsId(3), false)?;
//!     sim.propagate_all();
//!
//!     // every AS now knows a customer route towards the origin
//!     let rib = sim.policy(AsId(1)).unwrap().local_rib();
//!     assert_eq!(
//!         rib["10.0.0.0/24"].as_path,
//!         vec![AsId(1), AsId(2), AsId(3)]
//!     );
//!     Ok(())
//! }
//! ```

pub mod bgp;
pub mod graph;
pub mod io;
pub mod layering;
pub mod policy;
pub mod prelude;
pub mod sim;
pub mod types;

#[cfg(test)]
mod test;
