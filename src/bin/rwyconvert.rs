#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use structopt::StructOpt;

use runway_tool::detect;
use runway_tool::error::{Error, Result};
use runway_tool::geo::Direction;
use runway_tool::{io_util, txt_data};

#[derive(StructOpt)]
#[structopt(
    name = "rwyconvert",
    about = "Convert runway record coordinate fields between decimal degrees and hemisphere DMS."
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
    /// Convert from hemisphere DMS back to decimal degrees.
    #[structopt(long = "reverse")]
    reverse: bool,
    /// Do not auto-detect; strictly follow --reverse (or lack of it).
    #[structopt(long = "force")]
    force: bool,
    /// Decimal places to output when converting to decimal.
    #[structopt(long = "decimal-places", default_value = "7")]
    decimal_places: usize,
}

/// A conversion that only failed because --force pinned the wrong direction
/// deserves a pointer at the fix.
fn force_hint(e: Error, fields: &[&str], requested: Direction, force: bool) -> Error {
    if !force {
        return e;
    }
    let coords = &fields[txt_data::COORD_FIELDS];
    if requested == Direction::Forward && coords.iter().any(|s| detect::looks_like_dms(s)) {
        e.with_hint(" (Hint: these look like DMS; try --reverse or remove --force)")
    } else if requested == Direction::Reverse
        && coords.iter().any(|s| detect::looks_like_decimal(s))
    {
        e.with_hint(" (Hint: these look like decimals; remove --reverse or remove --force)")
    } else {
        e
    }
}

fn run() -> Result<()> {
    let args = Args::from_args();
    if args.record.is_some() && args.file.is_some() {
        return Err(Error::Usage {
            message: "Provide either a direct record argument OR --file, not both.".to_string(),
        });
    }

    let requested = if args.reverse { Direction::Reverse } else { Direction::Forward };
    let lines = io_util::read_lines(args.record.as_deref(), args.file.as_deref())?;

    let mut out_lines = Vec::new();
    for line in &lines {
        // Comments and blank lines ride through unchanged.
        if line.trim_start().starts_with('#') || line.trim().is_empty() {
            out_lines.push(line.clone());
            continue;
        }

        let stripped = line.trim();
        let fields = txt_data::runway_fields(stripped)?;

        let mut direction = requested;
        if !args.force {
            if let Some(detected) = detect::detect_direction(&fields[txt_data::COORD_FIELDS]) {
                if detected != requested {
                    match detected {
                        Direction::Reverse => eprintln!(
                            "WARN: Input looks like DMS but --reverse was not set; \
                             auto-enabling --reverse for: {:?}",
                            stripped
                        ),
                        Direction::Forward => eprintln!(
                            "WARN: Input looks like decimal but --reverse was set; \
                             auto-disabling --reverse for: {:?}",
                            stripped
                        ),
                    }
                    direction = detected;
                }
            }
        }

        let converted = txt_data::convert_runway_fields(&fields, direction, args.decimal_places)
            .map_err(|e| force_hint(e, &fields, requested, args.force))?;
        out_lines.push(converted);
    }

    io_util::write_text(args.output.as_deref(), &io_util::join_lines(&out_lines))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
