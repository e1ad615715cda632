// Default locations
pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// File naming
pub const INPUT_EXTENSION: &str = "txt";
pub const OUTPUT_SUFFIX: &str = "_out.txt";
pub const JSON_OUTPUT_SUFFIX: &str = "_out.json";
pub const RUN_REPORT_FILE: &str = "run_report.csv";

// Batch processed when no inputs are given on the command line
pub const DEFAULT_INPUTS: &[&str] = &["a", "b", "c", "d", "e", "f"];
