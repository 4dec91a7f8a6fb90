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

//! Module containing all type definitions shared across the crate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// AS Number. AS 0 is reserved and never participates in a simulation.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsId(pub u32);

impl AsId {
    /// Index of this AS into the dense arenas (graph nodes and policies).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

impl From<u32> for AsId {
    fn from(x: u32) -> Self {
        Self(x)
    }
}

impl From<u64> for AsId {
    fn from(x: u64) -> Self {
        Self(x as u32)
    }
}

impl From<usize> for AsId {
    fn from(x: usize) -> Self {
        Self(x as u32)
    }
}

impl From<i32> for AsId {
    fn from(x: i32) -> Self {
        Self(x as u32)
    }
}

impl<T> From<&T> for AsId
where
    T: Into<AsId> + Copy,
{
    fn from(x: &T) -> Self {
        (*x).into()
    }
}

/// Simulation Errors
///
/// Every failure aborts the simulation at the point of detection. There is no retry and no
/// partial progress: the binary turns any of these into a single diagnostic line on stderr.
#[derive(Error, Debug)]
pub enum SimError {
    /// Cannot open, read, or write one of the input/output files.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file that could not be accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line in an input file does not follow the expected format.
    #[error("malformed line: {0:?}")]
    MalformedLine(String),
    /// A relationship record carries an indicator other than `-1` or `0`.
    #[error("unexpected relationship indicator {indicator} between {left} and {right}")]
    InvalidIndicator {
        /// The raw indicator value.
        indicator: i32,
        /// First AS of the record.
        left: AsId,
        /// Second AS of the record.
        right: AsId,
    },
    /// A value that must be a boolean cannot be parsed as one.
    #[error("cannot parse boolean value: {0:?}")]
    InvalidBool(String),
    /// The relationship input contains no AS at all.
    #[error("no ASes found in the relationship input")]
    EmptyAsSet,
    /// The provider/customer relation contains a cycle, so no propagation ranks exist.
    #[error("provider/customer cycle detected in the AS graph")]
    ProviderCycle,
    /// A prefix was seeded at an AS outside the graph (or at the reserved AS 0).
    #[error("origin {0} is outside the AS graph")]
    OriginOutOfRange(AsId),
    /// Error raised by the CSV reader or writer.
    #[error("{0}")]
    Csv(Box<csv::Error>),
}

impl From<csv::Error> for SimError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(Box::new(value))
    }
}
