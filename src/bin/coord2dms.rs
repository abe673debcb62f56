#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use structopt::StructOpt;

use runway_tool::error::{Error, Result};
use runway_tool::{io_util, txt_data};

#[derive(StructOpt)]
#[structopt(
    name = "coord2dms",
    about = "Convert decimal-degree coords in colon-separated records into hemisphere DMS format."
)]
struct Args {
    /// Direct record string to convert. If omitted, use -f or stdin.
    #[structopt(name = "record")]
    record: Option<String>,
    /// Input file containing one record per line.
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    file: Option<PathBuf>,
    /// Output file (default: stdout).
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
}

fn run() -> Result<()> {
    let args = Args::from_args();
    if args.record.is_some() && args.file.is_some() {
        return Err(Error::Usage {
            message: "Provide either a direct record argument OR --file, not both.".to_string(),
        });
    }

    let lines = io_util::read_lines(args.record.as_deref(), args.file.as_deref())?;

    let mut out_lines = Vec::new();
    for line in &lines {
        if let Some(converted) = txt_data::convert_generic_line(line)? {
            out_lines.push(converted);
        }
    }

    io_util::write_text(args.output.as_deref(), &io_util::join_lines(&out_lines))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
