use crate::data_structures::{Route, StreetId};
use crate::network::grid::IncomingStreets;
use std::collections::HashMap;

/// How many planned car trips use each street.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficProfile {
    cars: HashMap<StreetId, u64>,
}

impl TrafficProfile {
    /// Counts every occurrence of every street over all routes. A route that
    /// passes a street twice counts twice.
    pub fn new(routes: &[Route]) -> Self {
        let mut cars: HashMap<StreetId, u64> = HashMap::new();
        for route in routes {
            for street in &route.streets {
                *cars.entry(street.clone()).or_insert(0) += 1;
            }
        }
        TrafficProfile { cars }
    }

    /// Number of cars passing along `street`; zero for streets no route uses.
    pub fn count_for(&self, street: &str) -> u64 {
        self.cars.get(street).copied().unwrap_or(0)
    }

    /// Total cars approaching an intersection over all its incoming streets.
    pub fn intersection_load(&self, incoming: &IncomingStreets) -> u64 {
        incoming.streets.iter().map(|s| self.count_for(s)).sum()
    }

    /// Number of streets used by at least one route.
    pub fn busy_streets(&self) -> usize {
        self.cars.len()
    }
}
