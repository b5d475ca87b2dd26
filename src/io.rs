use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::config::{PointConfig, TunnelConfig};
use crate::error::{Result, TunnelError};
use crate::movement::Coord;
use crate::search::Outcome;

/// Parse a tunnel description.
///
/// Line format: algorithm name; `max_x max_y max_z`; start; goal; declared
/// point count; then one `x y z m1 ... mk` line per point.
pub fn parse(text: &str) -> Result<TunnelConfig> {
    let mut cursor = Cursor::new(text);

    let algorithm = cursor.next()?.trim().parse()?;
    let dimensions = parse_coord(cursor.next()?, cursor.line)?;
    let start = parse_coord(cursor.next()?, cursor.line)?;
    let goal = parse_coord(cursor.next()?, cursor.line)?;

    let count_text = cursor.next()?.trim();
    let declared: usize = count_text.parse().map_err(|_| TunnelError::Malformed {
        line: cursor.line,
        reason: format!("invalid point count {count_text:?}"),
    })?;

    let mut points = Vec::with_capacity(declared);
    for _ in 0..declared {
        points.push(parse_point(cursor.next()?, cursor.line)?);
    }

    Ok(TunnelConfig {
        algorithm,
        dimensions,
        start,
        goal,
        points,
    })
}

/// Load and parse a tunnel description file.
pub fn load(path: &Path) -> Result<TunnelConfig> {
    parse(&fs::read_to_string(path)?)
}

/// Render an outcome in the line-oriented output format: the literal `FAIL`,
/// or the total cost, the path length, and one `x y z stepCost` line per
/// path point.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Failed => "FAIL".to_owned(),
        Outcome::Found(report) => {
            let mut out = format!("{}\n{}", report.total_cost, report.path_len());
            for (&(x, y, z), &step) in report.path.iter().zip(&report.step_costs) {
                out.push_str(&format!("\n{x} {y} {z} {step}"));
            }
            out
        }
    }
}

/// Write the rendered outcome to a file.
pub fn save(path: &Path, outcome: &Outcome) -> Result<()> {
    fs::write(path, render(outcome))?;
    Ok(())
}

struct Cursor<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next(&mut self) -> Result<&'a str> {
        self.line += 1;
        self.lines.next().ok_or(TunnelError::Malformed {
            line: self.line,
            reason: "unexpected end of input".to_owned(),
        })
    }
}

fn parse_ints(text: &str, line: usize) -> Result<Vec<i32>> {
    text.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| TunnelError::Malformed {
                line,
                reason: format!("invalid integer {token:?}"),
            })
        })
        .collect()
}

fn parse_coord(text: &str, line: usize) -> Result<Coord> {
    parse_ints(text, line)?
        .into_iter()
        .collect_tuple()
        .ok_or(TunnelError::Malformed {
            line,
            reason: "expected exactly three integers".to_owned(),
        })
}

fn parse_point(text: &str, line: usize) -> Result<PointConfig> {
    let fields = parse_ints(text, line)?;
    if fields.len() < 3 {
        return Err(TunnelError::Malformed {
            line,
            reason: "expected x y z followed by movement codes".to_owned(),
        });
    }
    let coordinates = (fields[0], fields[1], fields[2]);
    let movements = fields[3..]
        .iter()
        .map(|&code| {
            u8::try_from(code).map_err(|_| TunnelError::Malformed {
                line,
                reason: format!("movement code {code} out of range"),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PointConfig {
        coordinates,
        movements,
    })
}
