pub mod batch;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod global_variables;
pub mod input_model;
pub mod network;
pub mod output_model;
pub mod problem;
pub mod scheduling;
pub mod synthetic;

pub use error::{Result, ScheduleError};
pub use problem::SimulationProblem;
pub use scheduling::{ScheduleHeuristic, Strategy};
