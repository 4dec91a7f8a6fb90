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

//! Command-line front end: load a CAIDA snapshot, seed announcements, propagate, write RIBs.

use clap::Parser;
use gaosim::prelude::*;
use std::path::PathBuf;

/// Simulate Gao-Rexford route propagation over a CAIDA AS-relationship snapshot.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// CAIDA `as-rel2` relationship file (plain text, `.bz2`, or `.gz`).
    #[clap(long)]
    relationships: PathBuf,
    /// CSV of origin announcements: `asn,prefix,rov_invalid`.
    #[clap(long)]
    announcements: PathBuf,
    /// List of ASes enforcing route origin validation, one per line.
    #[clap(long)]
    rov_asns: PathBuf,
    /// Where to write the resulting RIBs.
    #[clap(long, default_value = "ribs.csv")]
    output: PathBuf,
}

fn run(args: Cli) -> Result<(), SimError> {
    let records = read_relationships(&args.relationships)?;
    let graph = AsGraph::from_records(&records)?;
    log::info!(
        "loaded {} relationship records, max ASN {}",
        records.len(),
        graph.max_asn()
    );

    let rov_asns = read_rov_asns(&args.rov_asns)?;
    let mut sim = Simulator::new(graph, rov_asns)?;

    for seed in read_seeds(&args.announcements)? {
        sim.seed_prefix(&seed.prefix, seed.asn, seed.rov_invalid)?;
    }

    sim.propagate_all();
    write_rib_csv(&sim, &args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn main() {
    pretty_env_logger::init_timed();

    let args = Cli::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
