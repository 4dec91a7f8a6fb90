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

//! Writer serializing the converged RIBs to CSV.

use crate::sim::Simulator;
use crate::types::SimError;

use itertools::Itertools;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One output row: the owning AS, the prefix, and the space-separated AS path in stored order
/// (leftmost entry is the owning AS, rightmost is the origin).
#[derive(Debug, Serialize)]
struct RibRow<'a> {
    asn: u32,
    prefix: &'a str,
    as_path: String,
}

/// Write every non-empty RIB to `path` as CSV with header `asn,prefix,as_path`.
pub fn write_rib_csv(sim: &Simulator, path: impl AsRef<Path>) -> Result<(), SimError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_rib(sim, file, path)
}

/// Write the RIB rows to an arbitrary writer, ascending by AS and prefix-sorted within an AS.
/// `path` is only used to report I/O errors.
pub fn write_rib(sim: &Simulator, writer: impl Write, path: &Path) -> Result<(), SimError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // written by hand so that a run without any routes still produces the header
    csv_writer.write_record(["asn", "prefix", "as_path"])?;

    for policy in sim.policies() {
        let rib = policy.local_rib();
        for (prefix, ann) in rib.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
            csv_writer.serialize(RibRow {
                asn: policy.asn().0,
                prefix,
                as_path: ann.as_path.iter().map(|a| a.0.to_string()).join(" "),
            })?;
        }
    }

    csv_writer.flush().map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
