// scheduling/mod.rs
//
// Every heuristic shares the same outer loop: the always-green baseline is
// emitted as is, and only intersections with two or more incoming streets
// are handed to the heuristic itself.

pub mod baseline;
pub mod round_robin;

use crate::data_structures::{IntersectionId, Schedule, ScheduleOutput};
use crate::network::grid::IncomingStreets;
use crate::problem::SimulationProblem;
use round_robin::{UniformRoundRobin, WeightedRoundRobin};
use std::fmt;
use std::str::FromStr;

/// A rule that decides the light cycle of a contested intersection.
pub trait ScheduleHeuristic {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Schedule for an intersection with in-degree of at least two, or
    /// `None` when the heuristic leaves it unscheduled.
    fn schedule_intersection(
        &self,
        problem: &SimulationProblem,
        intersection: IntersectionId,
        incoming: &IncomingStreets,
    ) -> Option<Schedule>;

    /// Baseline schedules followed by this heuristic's schedules.
    fn solve(&self, problem: &SimulationProblem) -> ScheduleOutput {
        let mut schedules = problem.baseline.clone();
        for (intersection, incoming) in problem.network.incoming_iter() {
            if incoming.in_degree < 2 {
                continue;
            }
            match self.schedule_intersection(problem, intersection, incoming) {
                Some(schedule) => schedules.push(schedule),
                None => log::trace!(
                    "{}: intersection {} left unscheduled",
                    self.name(),
                    intersection
                ),
            }
        }
        log::debug!(
            "{}: {} schedules ({} always green)",
            self.name(),
            schedules.len(),
            problem.baseline.len()
        );
        ScheduleOutput::new(schedules)
    }
}

/// The heuristic selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One second of green for every incoming street.
    #[default]
    Naive,
    /// Green time equal to the number of planned cars, capped at the horizon.
    Weighted,
}

impl Strategy {
    pub const VARIANTS: [&'static str; 2] = ["naive", "weighted"];

    pub fn heuristic(self) -> Box<dyn ScheduleHeuristic + Send + Sync> {
        match self {
            Strategy::Naive => Box::new(UniformRoundRobin),
            Strategy::Weighted => Box::new(WeightedRoundRobin),
        }
    }

    pub fn solve(self, problem: &SimulationProblem) -> ScheduleOutput {
        self.heuristic().solve(problem)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Naive => write!(f, "naive"),
            Strategy::Weighted => write!(f, "weighted"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "uniform" => Ok(Strategy::Naive),
            "weighted" => Ok(Strategy::Weighted),
            other => Err(format!(
                "unknown strategy {:?}, expected one of {:?}",
                other,
                Strategy::VARIANTS
            )),
        }
    }
}
