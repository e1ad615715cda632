// input_model.rs
//
// Reads the whitespace-delimited problem format into typed records.
// A header line of five integers is followed by exactly `n_streets` street
// records and `n_paths` route records. Blank lines are skipped.

use crate::data_structures::{ProblemHeader, Route, Street};
use crate::error::{RecordKind, Result, ScheduleError};
use std::fs;
use std::path::Path;

/// The raw content of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInput {
    pub header: ProblemHeader,
    pub streets: Vec<Street>,
    pub routes: Vec<Route>,
}

/// Reads and parses an input file.
pub fn from_file(path: &Path) -> Result<ProblemInput> {
    let text = fs::read_to_string(path).map_err(|e| ScheduleError::io(path, e))?;
    parse(&text)
}

/// Parses the full text of an input file.
pub fn parse(text: &str) -> Result<ProblemInput> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header_line) = lines.next().ok_or(ScheduleError::EmptyInput)?;
    let header = parse_header(header_line)?;

    let records: Vec<(usize, &str)> = lines.collect();

    if records.len() < header.n_streets {
        return Err(ScheduleError::CountMismatch {
            kind: RecordKind::Street,
            declared: header.n_streets,
            found: records.len(),
        });
    }
    let (street_lines, route_lines) = records.split_at(header.n_streets);
    if route_lines.len() != header.n_paths {
        return Err(ScheduleError::CountMismatch {
            kind: RecordKind::Route,
            declared: header.n_paths,
            found: route_lines.len(),
        });
    }

    let streets = street_lines
        .iter()
        .map(|&(line, record)| parse_street(line, record))
        .collect::<Result<Vec<_>>>()?;
    let routes = route_lines
        .iter()
        .map(|&(line, record)| parse_route(line, record))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Parsed {} streets and {} routes (horizon {}s)",
        streets.len(),
        routes.len(),
        header.sim_duration
    );

    Ok(ProblemInput {
        header,
        streets,
        routes,
    })
}

fn parse_header(line: &str) -> Result<ProblemHeader> {
    let malformed = || ScheduleError::MalformedHeader(line.to_string());
    let values = line
        .split_whitespace()
        .map(|token| token.parse::<u64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;

    match values.as_slice() {
        &[sim_duration, n_intersections, n_streets, n_paths, score] => Ok(ProblemHeader {
            sim_duration: u32::try_from(sim_duration).map_err(|_| malformed())?,
            n_intersections: u32::try_from(n_intersections).map_err(|_| malformed())?,
            n_streets: usize::try_from(n_streets).map_err(|_| malformed())?,
            n_paths: usize::try_from(n_paths).map_err(|_| malformed())?,
            score: u32::try_from(score).map_err(|_| malformed())?,
        }),
        _ => Err(malformed()),
    }
}

fn parse_street(line: usize, record: &str) -> Result<Street> {
    let malformed = |reason: String| ScheduleError::MalformedStreet { line, reason };
    let tokens: Vec<&str> = record.split_whitespace().collect();
    let &[start, end, name, required_time] = tokens.as_slice() else {
        return Err(malformed(format!(
            "expected 4 fields, found {}",
            tokens.len()
        )));
    };

    let int_field = |field: &str, value: &str| {
        value
            .parse::<u32>()
            .map_err(|_| malformed(format!("{} {:?} is not a non-negative integer", field, value)))
    };

    let street = Street {
        name: name.to_string(),
        start_intersection: int_field("start intersection", start)?,
        end_intersection: int_field("end intersection", end)?,
        required_time: int_field("required time", required_time)?,
    };
    if street.required_time == 0 {
        return Err(malformed(format!(
            "street {:?} has a zero required time",
            street.name
        )));
    }
    Ok(street)
}

fn parse_route(line: usize, record: &str) -> Result<Route> {
    let mut tokens = record.split_whitespace();
    let declared = tokens.next().unwrap_or_default();
    let n_streets = declared
        .parse::<usize>()
        .map_err(|_| ScheduleError::MalformedRoute {
            line,
            reason: format!("street count {:?} is not an integer", declared),
        })?;

    Ok(Route {
        n_streets,
        streets: tokens.map(str::to_string).collect(),
    })
}

/// Renders a problem back into the input format.
pub fn to_text(input: &ProblemInput) -> String {
    let h = &input.header;
    let mut text = format!(
        "{} {} {} {} {}\n",
        h.sim_duration, h.n_intersections, h.n_streets, h.n_paths, h.score
    );
    for street in &input.streets {
        text.push_str(&format!(
            "{} {} {} {}\n",
            street.start_intersection, street.end_intersection, street.name, street.required_time
        ));
    }
    for route in &input.routes {
        text.push_str(&route.n_streets.to_string());
        for street in &route.streets {
            text.push(' ');
            text.push_str(street);
        }
        text.push('\n');
    }
    text
}
