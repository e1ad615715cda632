// synthetic.rs
//
// Random city generator. Streets connect random intersection pairs and
// every car route is a random walk: the first street is picked at random,
// then each next street leaves the intersection the previous one ended at.
// Walks stop early at dead ends.

use crate::data_structures::{IntersectionId, ProblemHeader, Route, Street};
use crate::input_model::ProblemInput;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Size of a generated city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityParams {
    pub sim_duration: u32,
    pub intersections: u32,
    pub streets: usize,
    pub cars: usize,
    /// Longest route a car may plan, in streets.
    pub max_route_len: usize,
    pub score: u32,
}

impl Default for CityParams {
    fn default() -> Self {
        CityParams {
            sim_duration: 100,
            intersections: 20,
            streets: 60,
            cars: 50,
            max_route_len: 8,
            score: 1000,
        }
    }
}

/// Generates a reproducible random city for `seed`.
pub fn generate_city(params: &CityParams, seed: u64) -> ProblemInput {
    let mut rng = StdRng::seed_from_u64(seed);
    let n_nodes = params.intersections.max(2);

    let streets: Vec<Street> = (0..params.streets)
        .map(|i| {
            let start = rng.random_range(0..n_nodes);
            // Pick any other intersection as the destination.
            let mut end = rng.random_range(0..n_nodes - 1);
            if end >= start {
                end += 1;
            }
            Street {
                name: format!("street-{}", i),
                start_intersection: start,
                end_intersection: end,
                required_time: rng.random_range(1..=params.sim_duration.clamp(1, 10)),
            }
        })
        .collect();

    let routes = plan_routes(&streets, params, &mut rng);

    ProblemInput {
        header: ProblemHeader {
            sim_duration: params.sim_duration,
            n_intersections: n_nodes,
            n_streets: streets.len(),
            n_paths: routes.len(),
            score: params.score,
        },
        streets,
        routes,
    }
}

fn plan_routes(streets: &[Street], params: &CityParams, rng: &mut StdRng) -> Vec<Route> {
    if streets.is_empty() {
        return Vec::new();
    }

    let mut outgoing: HashMap<IntersectionId, Vec<&Street>> = HashMap::new();
    for street in streets {
        outgoing
            .entry(street.start_intersection)
            .or_insert_with(Vec::new)
            .push(street);
    }

    (0..params.cars)
        .map(|_| {
            let length = rng.random_range(1..=params.max_route_len.max(1));
            let mut current = &streets[rng.random_range(0..streets.len())];
            let mut path = vec![current.name.clone()];
            while path.len() < length {
                let Some(next) = outgoing
                    .get(&current.end_intersection)
                    .and_then(|options| options.choose(&mut *rng))
                else {
                    break;
                };
                current = *next;
                path.push(current.name.clone());
            }
            Route {
                n_streets: path.len(),
                streets: path,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_model;

    #[test]
    fn test_same_seed_same_city() {
        let params = CityParams::default();
        assert_eq!(generate_city(&params, 7), generate_city(&params, 7));
    }

    #[test]
    fn test_generated_city_is_valid_input() {
        let params = CityParams::default();
        let city = generate_city(&params, 42);
        assert_eq!(city.streets.len(), params.streets);
        assert_eq!(city.routes.len(), params.cars);

        for street in &city.streets {
            assert_ne!(street.start_intersection, street.end_intersection);
            assert!(street.end_intersection < params.intersections);
        }
        for route in &city.routes {
            assert!(!route.streets.is_empty());
            assert!(route.streets.len() <= params.max_route_len);
            assert_eq!(route.n_streets, route.streets.len());
        }

        let reparsed = input_model::parse(&input_model::to_text(&city)).unwrap();
        assert_eq!(reparsed, city);
    }

    #[test]
    fn test_routes_follow_connected_streets() {
        let city = generate_city(&CityParams::default(), 3);
        let by_name: HashMap<&str, &Street> =
            city.streets.iter().map(|s| (s.name.as_str(), s)).collect();
        for route in &city.routes {
            for pair in route.streets.windows(2) {
                assert_eq!(
                    by_name[pair[0].as_str()].end_intersection,
                    by_name[pair[1].as_str()].start_intersection
                );
            }
        }
    }
}
