// batch.rs
//
// Runs the scheduler over a list of input files. Each file is an independent
// job on the blocking pool: it parses its own problem, solves it and writes
// its own output, so nothing is shared between jobs. A failing file is logged
// and reported, and the remaining files still run.

use crate::config::Config;
use crate::data_structures::ScheduleOutput;
use crate::error::{Result, ScheduleError};
use crate::output_model;
use crate::problem::SimulationProblem;
use crate::scheduling::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One row of the CSV run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub file: String,
    pub strategy: String,
    pub status: String,
    pub schedules: usize,
    pub green_lights: usize,
    pub message: String,
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub records: Vec<RunRecord>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.status == "ok").count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Parses, solves and writes a single input file.
pub fn process_file(config: &Config, input: &Path) -> Result<ScheduleOutput> {
    log::info!("Running file {} ({})", input.display(), config.strategy);
    let problem = SimulationProblem::from_file(input)?;
    let output = config.strategy.solve(&problem);

    output_model::to_file(&output, &config.output_path(input))?;
    if config.json {
        output_model::to_json_file(&output, &config.json_output_path(input))?;
    }
    Ok(output)
}

/// A batch entry: either a running job or an input refused before it started.
enum Job {
    Running(tokio::task::JoinHandle<Result<ScheduleOutput>>),
    Rejected(ScheduleError),
}

/// Processes every input of `config` concurrently and collects one record
/// per file, in input order. An input whose output file is already claimed
/// by an earlier input of the batch is not run and is reported as failed.
pub async fn run_batch(config: Config) -> BatchSummary {
    let config = Arc::new(config);
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    let jobs: Vec<(PathBuf, Job)> = config
        .input_paths()
        .into_iter()
        .map(|input| {
            let output = config.output_path(&input);
            if let Some(first) = claimed.get(&output) {
                let rejected = ScheduleError::OutputCollision {
                    output,
                    first: first.clone(),
                };
                return (input, Job::Rejected(rejected));
            }
            claimed.insert(output, input.clone());

            let config = Arc::clone(&config);
            let job_input = input.clone();
            let handle =
                tokio::task::spawn_blocking(move || process_file(&config, &job_input));
            (input, Job::Running(handle))
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (input, job) in jobs {
        let outcome = match job {
            Job::Running(handle) => match handle.await {
                Ok(Ok(output)) => Ok(output),
                Ok(Err(e)) => Err(e.to_string()),
                Err(join_error) => Err(format!("job did not finish: {}", join_error)),
            },
            Job::Rejected(e) => Err(e.to_string()),
        };
        if let Err(message) = &outcome {
            log::error!("Skipping {}: {}", input.display(), message);
        }
        summary
            .records
            .push(record(&input, config.strategy, outcome.as_ref().map_err(String::clone)));
    }

    if !config.no_report {
        let report = config.report_path();
        for entry in &summary.records {
            if let Err(e) = log_to_csv(&report, entry) {
                log::warn!("Error logging run record for {}: {}", entry.file, e);
            }
        }
    }

    log::info!(
        "Batch finished: {} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    );
    summary
}

fn record(
    input: &Path,
    strategy: Strategy,
    outcome: std::result::Result<&ScheduleOutput, String>,
) -> RunRecord {
    let file = input.display().to_string();
    match outcome {
        Ok(output) => RunRecord {
            file,
            strategy: strategy.to_string(),
            status: "ok".to_string(),
            schedules: output.len(),
            green_lights: output.window_count(),
            message: String::new(),
        },
        Err(message) => RunRecord {
            file,
            strategy: strategy.to_string(),
            status: "failed".to_string(),
            schedules: 0,
            green_lights: 0,
            message,
        },
    }
}

/// Appends a record to a CSV file, writing the header only for a new file.
pub fn log_to_csv<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| ScheduleError::io(dir, e))?;
    }
    let file_exists = path.exists();
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| ScheduleError::io(path, e))?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);
    wtr.serialize(record)?;
    wtr.flush().map_err(|e| ScheduleError::io(path, e))?;
    Ok(())
}

/// Reads every record of a run report.
pub fn read_report(path: &Path) -> Result<Vec<RunRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}
