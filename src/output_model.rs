// output_model.rs
//
// Submission format:
//   <number of schedules>
//   per schedule: <intersection id>, <number of green lights>,
//   then one "<street> <duration>" line per green light.

use crate::data_structures::{GreenLight, Schedule, ScheduleOutput};
use crate::error::{Result, ScheduleError};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the schedules in the submission text format.
pub fn to_text(output: &ScheduleOutput) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "{}", output.schedules.len());
    for schedule in &output.schedules {
        let _ = writeln!(text, "{}", schedule.intersection);
        let _ = writeln!(text, "{}", schedule.green_lights.len());
        for light in &schedule.green_lights {
            let _ = writeln!(text, "{} {}", light.street, light.duration);
        }
    }
    text
}

/// Writes the schedules to `path`, creating parent directories as needed.
pub fn to_file(output: &ScheduleOutput, path: &Path) -> Result<()> {
    create_parent(path)?;
    let file = File::create(path).map_err(|e| ScheduleError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(to_text(output).as_bytes())
        .map_err(|e| ScheduleError::io(path, e))?;
    writer.flush().map_err(|e| ScheduleError::io(path, e))?;
    log::info!(
        "Wrote {} schedules ({} green lights) to {}",
        output.len(),
        output.window_count(),
        path.display()
    );
    Ok(())
}

/// Writes the schedules as pretty-printed JSON.
pub fn to_json_file(output: &ScheduleOutput, path: &Path) -> Result<()> {
    create_parent(path)?;
    let file = File::create(path).map_err(|e| ScheduleError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, output)?;
    writer.flush().map_err(|e| ScheduleError::io(path, e))?;
    Ok(())
}

/// Reads back a file in the submission format.
pub fn from_text(text: &str) -> Result<ScheduleOutput> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    let last_line = text.lines().count();

    let n_schedules: usize = parse_field(lines.next(), last_line, "schedule count")?;
    let mut schedules = Vec::with_capacity(n_schedules);
    for _ in 0..n_schedules {
        let intersection = parse_field(lines.next(), last_line, "intersection id")?;
        let n_lights: usize = parse_field(lines.next(), last_line, "green light count")?;
        let mut green_lights = Vec::with_capacity(n_lights);
        for _ in 0..n_lights {
            let (line, record) = lines.next().ok_or(ScheduleError::MalformedOutput {
                line: last_line,
                reason: "missing green light".to_string(),
            })?;
            let (street, duration) =
                record
                    .split_once(' ')
                    .ok_or_else(|| ScheduleError::MalformedOutput {
                        line,
                        reason: format!("green light {:?} lacks a duration", record),
                    })?;
            green_lights.push(GreenLight::new(
                street,
                parse_field(Some((line, duration.trim())), last_line, "duration")?,
            ));
        }
        schedules.push(Schedule {
            intersection,
            green_lights,
        });
    }
    if let Some((line, _)) = lines.next() {
        return Err(ScheduleError::MalformedOutput {
            line,
            reason: format!("more schedule blocks than the declared {}", n_schedules),
        });
    }
    Ok(ScheduleOutput::new(schedules))
}

fn parse_field<T: std::str::FromStr>(
    entry: Option<(usize, &str)>,
    last_line: usize,
    what: &str,
) -> Result<T> {
    let (line, value) = entry.ok_or_else(|| ScheduleError::MalformedOutput {
        line: last_line,
        reason: format!("missing {}", what),
    })?;
    value.parse::<T>().map_err(|_| ScheduleError::MalformedOutput {
        line,
        reason: format!("{} {:?} is not a number", what, value),
    })
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| ScheduleError::io(dir, e))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScheduleOutput {
        ScheduleOutput::new(vec![
            Schedule {
                intersection: 1,
                green_lights: vec![
                    GreenLight::new("rue-d-athenes", 2),
                    GreenLight::new("rue-d-amsterdam", 1),
                ],
            },
            Schedule {
                intersection: 0,
                green_lights: vec![GreenLight::new("rue-de-londres", 2)],
            },
        ])
    }

    #[test]
    fn test_text_layout() {
        assert_eq!(
            to_text(&sample()),
            "2\n1\n2\nrue-d-athenes 2\nrue-d-amsterdam 1\n0\n1\nrue-de-londres 2\n"
        );
        assert_eq!(to_text(&ScheduleOutput::default()), "0\n");
    }

    #[test]
    fn test_declared_count_matches_blocks() {
        let parsed = from_text(&to_text(&sample())).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_rejects_wrong_schedule_count() {
        assert!(matches!(
            from_text("3\n1\n1\na 1\n"),
            Err(ScheduleError::MalformedOutput { line: 4, .. })
        ));
        assert!(matches!(
            from_text("0\n1\n1\na 1\n"),
            Err(ScheduleError::MalformedOutput { line: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_text_duration() {
        assert!(matches!(
            from_text("1\n7\n1\nmain-street long\n"),
            Err(ScheduleError::MalformedOutput { line: 4, .. })
        ));
    }

    #[test]
    fn test_to_file_creates_directories() {
        let dir = std::env::temp_dir().join(format!("signal_scheduler_out_{}", std::process::id()));
        let path = dir.join("nested").join("sample_out.txt");
        to_file(&sample(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_text(&sample()));

        let json_path = dir.join("sample_out.json");
        to_json_file(&sample(), &json_path).unwrap();
        let json: ScheduleOutput =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json, sample());
        let _ = fs::remove_dir_all(&dir);
    }
}
