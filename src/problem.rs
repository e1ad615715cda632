use crate::data_structures::{ProblemHeader, Route, Schedule};
use crate::error::Result;
use crate::input_model::{self, ProblemInput};
use crate::network::grid::StreetNetwork;
use crate::network::traffic_profile::TrafficProfile;
use crate::scheduling::baseline::always_green_lights;
use std::path::Path;

/// One parsed input file together with everything derived from it.
///
/// Built once, then only read by the heuristics.
#[derive(Debug, Clone)]
pub struct SimulationProblem {
    pub header: ProblemHeader,
    pub network: StreetNetwork,
    pub traffic: TrafficProfile,
    pub routes: Vec<Route>,
    /// Permanently green schedules of the single-entry intersections.
    pub baseline: Vec<Schedule>,
}

impl SimulationProblem {
    pub fn new(input: ProblemInput) -> Self {
        let network = StreetNetwork::new(&input.streets);
        let traffic = TrafficProfile::new(&input.routes);
        let baseline = always_green_lights(&network, input.header.sim_duration);

        log::debug!(
            "Network has {} streets, {} lit intersections ({} always green), {} busy streets",
            network.len(),
            network.incoming_iter().count(),
            baseline.len(),
            traffic.busy_streets()
        );

        SimulationProblem {
            header: input.header,
            network,
            traffic,
            routes: input.routes,
            baseline,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(input_model::from_file(path)?))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self::new(input_model::parse(text)?))
    }

    /// Simulation horizon in seconds.
    pub fn sim_duration(&self) -> u32 {
        self.header.sim_duration
    }
}
