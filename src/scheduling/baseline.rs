use crate::data_structures::{GreenLight, Schedule};
use crate::network::grid::StreetNetwork;

/// Schedules for every intersection fed by a single street: that street is
/// green for the whole simulation.
pub fn always_green_lights(network: &StreetNetwork, sim_duration: u32) -> Vec<Schedule> {
    network
        .with_in_degree(1)
        .map(|(intersection, incoming)| Schedule {
            intersection,
            green_lights: vec![GreenLight::new(incoming.streets[0].clone(), sim_duration)],
        })
        .collect()
}
