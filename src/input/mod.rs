//! Post snapshot input.
//!
//! Reads `PostSnapshot` objects from a JSONL file or stdin, one JSON object
//! per line. Blank lines and `#` comments are skipped; malformed lines are
//! logged as warnings and skipped rather than failing the run.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::error_handling::InputError;
use crate::models::PostSnapshot;

/// Reads post snapshots from a file, or from stdin when the path is `-`.
pub fn read_snapshots(path: &Path) -> Result<Vec<PostSnapshot>, InputError> {
    if path.as_os_str() == "-" {
        info!("Reading post snapshots from stdin");
        parse_lines(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|source| InputError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshots = parse_lines(BufReader::new(file))?;
        info!("Read {} post snapshots from {}", snapshots.len(), path.display());
        Ok(snapshots)
    }
}

fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<PostSnapshot>, InputError> {
    let mut snapshots = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match serde_json::from_str::<PostSnapshot>(trimmed) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                warn!("Skipping malformed snapshot on line {}: {}", index + 1, e);
            }
        }
    }
    Ok(snapshots)
}
