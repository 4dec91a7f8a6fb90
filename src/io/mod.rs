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

//! Modules reading the simulation inputs and writing the resulting RIBs.
//!
//! All file handles are scoped to the reading/writing function and closed on every exit path.

pub mod relationships;
pub mod rib_out;
pub mod seeds;

use crate::types::SimError;

use bzip2::read::BzDecoder;
use flate2::bufread::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open an input file, transparently decompressing `.bz2` and `.gz` archives (CAIDA publishes
/// its snapshots compressed). Any other extension is read as plain text.
fn open_input(path: &Path) -> Result<Box<dyn BufRead>, SimError> {
    let file = File::open(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    Ok(match path.extension().and_then(|e| e.to_str()) {
        Some("bz2") => Box::new(BufReader::new(BzDecoder::new(reader))),
        Some("gz") => Box::new(BufReader::new(GzDecoder::new(reader))),
        _ => Box::new(reader),
    })
}

/// Parse a boolean the way the announcement format defines it: case-insensitive
/// `true`/`t`/`1` and `false`/`f`/`0`. Anything else is fatal.
fn parse_bool(raw: &str) -> Result<bool, SimError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(SimError::InvalidBool(raw.to_string())),
    }
}

/// `true` iff `s` is non-empty and consists of ASCII digits only. Used for sniffing header
/// lines in the seed and ROV inputs.
fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
