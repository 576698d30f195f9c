//! Text record format for triangulation results.
//!
//! ```text
//! 2
//! 0,10:0,0:10,0
//! 0,10:10,0:10,10
//! ```
//!
//! First line: decimal triangle count. Then one line per triangle,
//! `x1,y1:x2,y2:x3,y3`, coordinates truncated towards zero, no whitespace.
//! The reader applies the same truncation, stops at the first malformed line
//! (keeping what it parsed so far) and ignores lines past the announced count.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::error::RecordError;
use crate::point::{point, Point};
use crate::triangulation::Triangulation;

/// Upper bound on records preallocated from the header count.
const PREALLOC_RECORDS: usize = 1024;

/// One `x1,y1:x2,y2:x3,y3` line, without the newline.
struct Record([Point; 3]);

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(
            f,
            "{},{}:{},{}:{},{}",
            truncate(a.x),
            truncate(a.y),
            truncate(b.x),
            truncate(b.y),
            truncate(c.x),
            truncate(c.y)
        )
    }
}

/// Write `tri` as ear records.
pub fn write_records<W: Write>(tri: &Triangulation, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", tri.triangle_count())?;
    for t in tri.triangles() {
        writeln!(out, "{}", Record(t))?;
    }
    out.flush()
}

pub fn to_records_string(tri: &Triangulation) -> String {
    let mut s = format!("{}\n", tri.triangle_count());
    for t in tri.triangles() {
        s.push_str(&format!("{}\n", Record(t)));
    }
    s
}

/// Read ear records from a buffered reader (see [`parse_records`]).
pub fn read_records<R: BufRead>(mut reader: R) -> Result<Vec<[Point; 3]>, RecordError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_records(&text)
}

/// Parse ear records.
///
/// Line numbers in errors are 1-based and count the header.
pub fn parse_records(text: &str) -> Result<Vec<[Point; 3]>, RecordError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(RecordError::MissingHeader)?;
    let header = header.trim_end_matches('\r');
    let expected: usize = header
        .parse()
        .map_err(|_| RecordError::BadHeader(header.to_string()))?;

    let mut parsed = Vec::with_capacity(expected.min(PREALLOC_RECORDS));
    for (i, line) in lines.take(expected).enumerate() {
        match parse_line(line.trim_end_matches('\r')) {
            Ok(tri) => parsed.push(tri),
            Err(reason) => {
                return Err(RecordError::MalformedRecord {
                    line: i + 2,
                    reason,
                    parsed,
                })
            }
        }
    }
    if parsed.len() < expected {
        return Err(RecordError::Truncated { expected, parsed });
    }
    Ok(parsed)
}

fn parse_line(line: &str) -> Result<[Point; 3], &'static str> {
    let mut parts = line.split(':');
    let mut tri = [Point::zeros(); 3];
    for slot in tri.iter_mut() {
        let part = parts.next().ok_or("expected three ':'-separated points")?;
        *slot = parse_point(part)?;
    }
    if parts.next().is_some() {
        return Err("expected three ':'-separated points");
    }
    Ok(tri)
}

fn parse_point(part: &str) -> Result<Point, &'static str> {
    let (x, y) = part.split_once(',').ok_or("point is missing ','")?;
    Ok(point(parse_coord(x)?, parse_coord(y)?))
}

fn parse_coord(s: &str) -> Result<f64, &'static str> {
    let v: f64 = s.parse().map_err(|_| "coordinate is not a number")?;
    if !v.is_finite() {
        return Err("coordinate is not finite");
    }
    Ok(v.trunc())
}

#[inline]
fn truncate(v: f64) -> i64 {
    v.trunc() as i64
}
