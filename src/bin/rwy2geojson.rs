#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;

use structopt::StructOpt;

use runway_tool::error::Result;
use runway_tool::{geojson, io_util};

#[derive(StructOpt)]
#[structopt(name = "rwy2geojson", about = "Convert apron/taxi lines to GeoJSON.")]
struct Args {
    /// Input text file.
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    /// Output GeoJSON file (default: input path with a .geojson extension).
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
}

fn run() -> Result<()> {
    let args = Args::from_args();
    let out_path = args.output.clone().unwrap_or_else(|| args.input.with_extension("geojson"));

    let mut text = String::new();
    File::open(&args.input)?.read_to_string(&mut text)?;

    let collection = geojson::collection_from_text(&text)?;
    let rendered = serde_json::to_string_pretty(&collection)?;

    io_util::write_text(Some(out_path.as_path()), &format!("{}\n", rendered))?;
    println!("Wrote {} ({} features)", out_path.display(), collection.features.len());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
