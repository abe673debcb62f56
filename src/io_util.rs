use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::error::Result;

/// Gather input lines from a direct record argument, a file, or stdin.
/// Everything is read up front; output only starts once parsing succeeded.
pub fn read_lines(record: Option<&str>, file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(record) = record {
        return Ok(vec![record.to_string()]);
    }

    let mut buf = String::new();
    match file {
        Some(path) => {
            File::open(path)?.read_to_string(&mut buf)?;
        }
        None => {
            std::io::stdin().read_to_string(&mut buf)?;
        }
    }
    Ok(buf.lines().map(str::to_string).collect())
}

/// Join output lines: exactly one trailing newline when non-empty, none when
/// empty.
pub fn join_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

pub fn write_text(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
        }
        None => {
            std::io::stdout().write_all(text.as_bytes())?;
        }
    }
    Ok(())
}
