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

//! Module containing the announcement type and the route decision procedure.

use crate::types::AsId;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Relationship over which a route was learned.
///
/// The declaration order is the preference order: a customer route earns revenue, a peer route
/// is settlement-free, and a provider route costs money. The derived [`Ord`] therefore ranks
/// `Origin > Customer > Peer > Provider`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RouteSource {
    /// Learned from a provider.
    Provider,
    /// Learned from a peer.
    Peer,
    /// Learned from a customer.
    Customer,
    /// Originated by the AS itself.
    Origin,
}

impl std::fmt::Display for RouteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteSource::Provider => write!(f, "provider"),
            RouteSource::Peer => write!(f, "peer"),
            RouteSource::Customer => write!(f, "customer"),
            RouteSource::Origin => write!(f, "origin"),
        }
    }
}

/// A BGP route announcement as held or exchanged by an AS.
///
/// Prefixes are opaque keys: the simulator performs no longest-prefix matching or aggregation.
/// The AS path is stored most-recent-first, so the leftmost entry of an announcement held at AS
/// `x` is `x` itself, and the rightmost entry is the origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// The announced prefix (CIDR notation, treated as an atomic key).
    pub prefix: String,
    /// AS path, most recent AS first. Always non-empty.
    pub as_path: Vec<AsId>,
    /// The AS from which this announcement was received (the origin itself for seeded routes).
    pub next_hop: AsId,
    /// Relationship over which the announcement arrived.
    pub received_from: RouteSource,
    /// Sticky route-origin-validation verdict, carried unchanged across forwarding.
    pub rov_invalid: bool,
}

impl Announcement {
    /// Create the announcement an origin AS seeds for its own prefix.
    pub fn origin(prefix: impl Into<String>, origin: AsId, rov_invalid: bool) -> Self {
        Self {
            prefix: prefix.into(),
            as_path: vec![origin],
            next_hop: origin,
            received_from: RouteSource::Origin,
            rov_invalid,
        }
    }

    /// Construct the announcement that `from` sends to its neighbor `to`.
    ///
    /// The receiver is prepended to the path, the next hop becomes the sender, and the
    /// relationship is relabeled to how the *receiver* sees the link. The ROV verdict sticks.
    pub fn forwarded(&self, from: AsId, to: AsId, received_from: RouteSource) -> Self {
        let mut as_path = Vec::with_capacity(self.as_path.len() + 1);
        as_path.push(to);
        as_path.extend_from_slice(&self.as_path);
        Self {
            prefix: self.prefix.clone(),
            as_path,
            next_hop: from,
            received_from,
            rov_invalid: self.rov_invalid,
        }
    }

    /// Compare two announcements for the same prefix. `Ordering::Greater` means `self` is
    /// strictly preferred over `other`.
    ///
    /// The decision procedure is, in order: higher relationship preference, shorter AS path,
    /// lower next hop. A full tie returns `Ordering::Equal`, in which case the incumbent route
    /// must win.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.received_from.cmp(&other.received_from) {
            Ordering::Equal => {}
            o => return o,
        }

        match self.as_path.len().cmp(&other.as_path.len()) {
            Ordering::Equal => {}
            Ordering::Greater => return Ordering::Less,
            Ordering::Less => return Ordering::Greater,
        }

        match self.next_hop.cmp(&other.next_hop) {
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => Ordering::Less,
            Ordering::Less => Ordering::Greater,
        }
    }
}
