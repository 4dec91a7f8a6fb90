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

//! Reader for CAIDA `as-rel2` relationship snapshots.
//!
//! The format is line-oriented, pipe-delimited: `X|Y|I[|extra]`, with `I = -1` meaning X is a
//! provider of Y and `I = 0` meaning X and Y peer. Comment (`#`) and empty lines are skipped
//! up to the first data line; after that, every line must parse.

use crate::graph::RelRecord;
use crate::types::{AsId, SimError};

use std::io::BufRead;
use std::path::Path;

/// Read all relationship records from `path` (plain, `.bz2`, or `.gz`).
pub fn read_relationships(path: impl AsRef<Path>) -> Result<Vec<RelRecord>, SimError> {
    let path = path.as_ref();
    let reader = super::open_input(path)?;
    parse_relationships(reader, path)
}

/// Parse relationship records from an already-open reader. `path` is only used to report I/O
/// errors.
pub fn parse_relationships(
    reader: impl BufRead,
    path: &Path,
) -> Result<Vec<RelRecord>, SimError> {
    let mut records = Vec::new();
    let mut in_data = false;

    for line in reader.lines() {
        let line = line.map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !in_data {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            in_data = true;
        }
        records.push(parse_line(&line)?);
    }

    Ok(records)
}

/// Parse a single data line. Trailing fields beyond the indicator are ignored.
fn parse_line(line: &str) -> Result<RelRecord, SimError> {
    let malformed = || SimError::MalformedLine(line.to_string());

    let mut fields = line.split('|');
    let left = fields.next().ok_or_else(malformed)?;
    let right = fields.next().ok_or_else(malformed)?;
    let indicator = fields.next().ok_or_else(malformed)?;

    Ok(RelRecord {
        left: AsId(left.trim().parse().map_err(|_| malformed())?),
        right: AsId(right.trim().parse().map_err(|_| malformed())?),
        indicator: indicator.trim().parse().map_err(|_| malformed())?,
    })
}
