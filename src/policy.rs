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

//! Module defining the per-AS BGP process.

use crate::bgp::Announcement;
use crate::types::AsId;

use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{hash_map::Entry, HashMap};

/// Admission behavior of a [`BgpPolicy`].
///
/// The two variants differ only at the enqueue decision, so they share one struct instead of a
/// dispatch hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteValidation {
    /// Accept every announcement.
    Standard,
    /// Enforce route origin validation: silently drop announcements marked invalid.
    Rov,
}

/// The BGP process of a single AS: its local RIB and the staging buffer of announcements
/// received since the last processing step.
#[derive(Debug, Clone)]
pub struct BgpPolicy {
    asn: AsId,
    validation: RouteValidation,
    rib: HashMap<String, Announcement>,
    staged: HashMap<String, Vec<Announcement>>,
}

impl BgpPolicy {
    /// Create an empty process for `asn`.
    pub fn new(asn: AsId, validation: RouteValidation) -> Self {
        Self {
            asn,
            validation,
            rib: HashMap::new(),
            staged: HashMap::new(),
        }
    }

    /// The AS this process belongs to.
    pub fn asn(&self) -> AsId {
        self.asn
    }

    /// The admission behavior of this process.
    pub fn validation(&self) -> RouteValidation {
        self.validation
    }

    /// Stage a received announcement for the next processing step.
    ///
    /// Under [`RouteValidation::Rov`], announcements with a sticky invalid verdict are dropped
    /// here, before they can ever enter the staging buffer.
    pub fn enqueue(&mut self, ann: Announcement) {
        if self.validation == RouteValidation::Rov && ann.rov_invalid {
            trace!("{}: drop ROV-invalid route for {}", self.asn, ann.prefix);
            return;
        }
        self.staged.entry(ann.prefix.clone()).or_default().push(ann);
    }

    /// Whether any prefix has staged candidates.
    pub fn has_pending(&self) -> bool {
        self.staged.values().any(|c| !c.is_empty())
    }

    /// Collapse the staging buffer into the RIB.
    ///
    /// For every staged prefix, the best candidate is selected with
    /// [`Announcement::compare`] and replaces the incumbent RIB entry only if strictly
    /// preferred. The staging buffer is empty afterwards. The RIB is therefore monotone under
    /// the preference order, and processing twice without intervening enqueues is a no-op.
    pub fn process_pending(&mut self) {
        for (prefix, candidates) in self.staged.drain() {
            let mut candidates = candidates.into_iter();
            let mut best = match candidates.next() {
                Some(first) => first,
                None => continue,
            };
            for c in candidates {
                if c.compare(&best) == Ordering::Greater {
                    best = c;
                }
            }

            match self.rib.entry(prefix) {
                Entry::Vacant(e) => {
                    e.insert(best);
                }
                Entry::Occupied(mut e) => {
                    if best.compare(e.get()) == Ordering::Greater {
                        e.insert(best);
                    }
                }
            }
        }
    }

    /// The current best route per prefix.
    pub fn local_rib(&self) -> &HashMap<String, Announcement> {
        &self.rib
    }
}
