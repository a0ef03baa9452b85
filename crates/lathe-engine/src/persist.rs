//! Plain-text control point persistence.
//!
//! The format is a flat sequence of `index x y z` records separated by
//! whitespace, with no delimiter between records. The index is the record's
//! position in the file and doubles as a consistency check on load.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use lathe_core::{LatheError, Result, MAX_CONTROL_POINTS};
use lathe_math::Point3;

/// Result of loading a control point file.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Points parsed before the end of file or the first bad record.
    pub points: Vec<Point3>,
    /// Why the load stopped early, if it did.
    pub warning: Option<LatheError>,
}

/// Write `points` to `path`, one `index x y z` record per point.
pub fn save_control_points(path: &Path, points: &[Point3]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (index, p) in points.iter().enumerate() {
        write!(writer, "{} {} {} {} ", index, p.x, p.y, p.z)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read control points back from `path`.
///
/// Parsing stops at end of file, at the capacity limit, or at the first
/// record whose index is out of sequence or whose fields fail to parse;
/// in the latter cases every point read so far is retained and the cause
/// is reported as a warning rather than an error.
pub fn load_control_points(path: &Path) -> Result<LoadOutcome> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let mut points = Vec::new();
    let mut warning = None;

    while points.len() < MAX_CONTROL_POINTS {
        let Some(index_token) = tokens.next() else {
            break;
        };
        match parse_record(index_token, &mut tokens, points.len()) {
            Ok(p) => points.push(p),
            Err(e) => {
                warning = Some(e);
                break;
            }
        }
    }

    Ok(LoadOutcome { points, warning })
}

fn parse_record<'a>(
    index_token: &str,
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: usize,
) -> Result<Point3> {
    let index: usize = index_token.parse().map_err(|_| {
        LatheError::CorruptPersistedState(format!(
            "record {expected}: unreadable index {index_token:?}"
        ))
    })?;
    if index != expected {
        return Err(LatheError::CorruptPersistedState(format!(
            "record {expected}: index {index} out of sequence"
        )));
    }

    let mut coord = |name: &str| -> Result<f64> {
        let token = tokens.next().ok_or_else(|| {
            LatheError::CorruptPersistedState(format!("record {expected}: missing {name}"))
        })?;
        token.parse().map_err(|_| {
            LatheError::CorruptPersistedState(format!(
                "record {expected}: unreadable {name} {token:?}"
            ))
        })
    };

    Ok(Point3::new(coord("x")?, coord("y")?, coord("z")?))
}
