use crate::global_variables::{
    DEFAULT_INPUTS, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, INPUT_EXTENSION, JSON_OUTPUT_SUFFIX,
    OUTPUT_SUFFIX, RUN_REPORT_FILE,
};
use crate::scheduling::Strategy;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

/// Traffic signal schedules for a batch of city simulations
#[derive(StructOpt, Debug, Clone)]
#[structopt(name = "signal_scheduler")]
pub struct Config {
    /// Verbose mode (-v, -vv, -vvv); ignored when RUST_LOG is set
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: u8,

    /// Directory holding the input files
    #[structopt(short = "i", long = "input-dir", parse(from_os_str), default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory receiving the schedule files
    #[structopt(short = "o", long = "output-dir", parse(from_os_str), default_value = "output")]
    pub output_dir: PathBuf,

    /// Scheduling heuristic: naive | weighted
    #[structopt(short = "s", long = "strategy", default_value = "naive")]
    pub strategy: Strategy,

    /// Also write every schedule as JSON
    #[structopt(long = "json")]
    pub json: bool,

    /// Do not append to the CSV run report
    #[structopt(long = "no-report")]
    pub no_report: bool,

    /// Input basenames (resolved inside the input directory) or paths.
    /// Defaults to a b c d e f
    pub inputs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: 0,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            strategy: Strategy::default(),
            json: false,
            no_report: false,
            inputs: Vec::new(),
        }
    }
}

impl Config {
    /// Resolves every requested input to a file path. A bare name such as
    /// `a` becomes `<input_dir>/a.txt`; anything with a directory or an
    /// extension is taken as given.
    pub fn input_paths(&self) -> Vec<PathBuf> {
        let names: Vec<&str> = if self.inputs.is_empty() {
            DEFAULT_INPUTS.to_vec()
        } else {
            self.inputs.iter().map(String::as_str).collect()
        };

        names
            .into_iter()
            .map(|name| {
                let path = Path::new(name);
                if path.components().count() > 1 || path.extension().is_some() {
                    path.to_path_buf()
                } else {
                    self.input_dir.join(name).with_extension(INPUT_EXTENSION)
                }
            })
            .collect()
    }

    /// `<output_dir>/<input stem>_out.txt`
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", file_stem(input), OUTPUT_SUFFIX))
    }

    /// `<output_dir>/<input stem>_out.json`
    pub fn json_output_path(&self, input: &Path) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", file_stem(input), JSON_OUTPUT_SUFFIX))
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(RUN_REPORT_FILE)
    }

    /// Default log filter derived from the -v flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
