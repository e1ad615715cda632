use crate::data_structures::{GreenLight, IntersectionId, Schedule};
use crate::network::grid::IncomingStreets;
use crate::problem::SimulationProblem;
use crate::scheduling::ScheduleHeuristic;

/// Every incoming street is green for one second, in record order.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRoundRobin;

impl ScheduleHeuristic for UniformRoundRobin {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn schedule_intersection(
        &self,
        _problem: &SimulationProblem,
        intersection: IntersectionId,
        incoming: &IncomingStreets,
    ) -> Option<Schedule> {
        let green_lights = incoming
            .streets
            .iter()
            .map(|street| GreenLight::new(street.clone(), 1))
            .collect();
        Some(Schedule {
            intersection,
            green_lights,
        })
    }
}

/// Each incoming street is green for as many seconds as cars plan to pass
/// along it, capped at the simulation horizon. Streets nobody drives are
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRoundRobin;

impl ScheduleHeuristic for WeightedRoundRobin {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn schedule_intersection(
        &self,
        problem: &SimulationProblem,
        intersection: IntersectionId,
        incoming: &IncomingStreets,
    ) -> Option<Schedule> {
        let horizon = problem.sim_duration();
        let green_lights: Vec<GreenLight> = incoming
            .streets
            .iter()
            .filter_map(|street| {
                let cars = problem.traffic.count_for(street);
                let duration = u32::try_from(cars.min(u64::from(horizon))).unwrap_or(horizon);
                (duration > 0).then(|| GreenLight::new(street.clone(), duration))
            })
            .collect();

        if green_lights.is_empty() {
            return None;
        }
        log::trace!(
            "weighted: intersection {} load {} cars over {} streets",
            intersection,
            problem.traffic.intersection_load(incoming),
            green_lights.len()
        );
        Some(Schedule {
            intersection,
            green_lights,
        })
    }
}
