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

//! Readers for the origin announcement CSV and the ROV AS list.

use crate::types::{AsId, SimError};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Read};
use std::path::Path;

/// One origin announcement to seed: `asn,prefix,rov_invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    /// The origin AS.
    pub asn: AsId,
    /// The announced prefix.
    pub prefix: String,
    /// Whether route origin validation marks this announcement invalid.
    pub rov_invalid: bool,
}

/// Read the announcement seeds from a CSV file.
///
/// An optional header is detected by a non-numeric first field, `#` lines are treated as
/// comments, and the boolean column accepts `true`/`t`/`1`/`false`/`f`/`0`
/// (case-insensitive). Everything else is fatal.
pub fn read_seeds(path: impl AsRef<Path>) -> Result<Vec<SeedRecord>, SimError> {
    let path = path.as_ref();
    parse_seeds(super::open_input(path)?)
}

/// Parse announcement seeds from an already-open reader.
pub fn parse_seeds(reader: impl Read) -> Result<Vec<SeedRecord>, SimError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seeds = Vec::new();
    let mut first = true;

    for record in csv_reader.records() {
        let record = record?;
        if first {
            first = false;
            // a non-numeric leading field marks a header line
            if !record.get(0).is_some_and(super::all_digits) {
                continue;
            }
        }

        let malformed = || SimError::MalformedLine(record.iter().join(","));

        let asn = record.get(0).ok_or_else(malformed)?;
        let prefix = record.get(1).ok_or_else(malformed)?;
        let rov = record.get(2).ok_or_else(malformed)?;

        seeds.push(SeedRecord {
            asn: AsId(asn.parse().map_err(|_| malformed())?),
            prefix: prefix.to_string(),
            rov_invalid: super::parse_bool(rov)?,
        });
    }

    Ok(seeds)
}

/// Read the list of ROV-enforcing ASes: one AS per line, with an optional header (detected by
/// a non-numeric first line) and `#` comments. On lines with commas, only the first field
/// counts.
pub fn read_rov_asns(path: impl AsRef<Path>) -> Result<Vec<AsId>, SimError> {
    let path = path.as_ref();
    let reader = super::open_input(path)?;
    parse_rov_asns(reader, path)
}

/// Parse the ROV AS list from an already-open reader. `path` is only used to report I/O
/// errors.
pub fn parse_rov_asns(reader: impl BufRead, path: &Path) -> Result<Vec<AsId>, SimError> {
    let mut asns = Vec::new();
    let mut first = true;

    for line in reader.lines() {
        let line = line.map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if first {
            first = false;
            if !super::all_digits(line) && !super::all_digits(first_field(line)) {
                continue;
            }
        }

        let field = first_field(line);
        if field.is_empty() {
            continue;
        }
        asns.push(AsId(field.parse().map_err(|_| {
            SimError::MalformedLine(line.to_string())
        })?));
    }

    Ok(asns)
}

fn first_field(line: &str) -> &str {
    line.split(',').next().unwrap_or("").trim()
}
