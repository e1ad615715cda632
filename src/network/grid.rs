use crate::data_structures::{IntersectionId, Street, StreetId};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Endpoints and travel time of a street, keyed by street name in [`StreetNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreetInfo {
    pub start_intersection: IntersectionId,
    pub end_intersection: IntersectionId,
    pub required_time: u32,
}

/// The streets that end at one intersection, i.e. the ones its light arbitrates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IncomingStreets {
    /// Number of distinct streets ending here. Always equal to `streets.len()`.
    pub in_degree: usize,
    /// Street names in the order their records were read.
    pub streets: Vec<StreetId>,
}

impl IncomingStreets {
    fn push(&mut self, street: StreetId) {
        self.streets.push(street);
        self.in_degree += 1;
    }
}

/// Represents the whole city as a directed graph of named streets.
#[derive(Debug, Clone, Default)]
pub struct StreetNetwork {
    /// Stores every street by its name.
    streets: HashMap<StreetId, StreetInfo>,
    /// Incoming streets per intersection. Intersections without incoming
    /// streets have no entry.
    incoming: BTreeMap<IntersectionId, IncomingStreets>,
}

impl StreetNetwork {
    /// Builds the street lookup and the incoming-street index in one pass.
    pub fn new(streets: &[Street]) -> Self {
        let mut lookup = HashMap::with_capacity(streets.len());
        let mut incoming: BTreeMap<IntersectionId, IncomingStreets> = BTreeMap::new();

        for street in streets {
            if lookup.contains_key(&street.name) {
                log::warn!("Duplicate street {:?} ignored", street.name);
                continue;
            }
            lookup.insert(
                street.name.clone(),
                StreetInfo {
                    start_intersection: street.start_intersection,
                    end_intersection: street.end_intersection,
                    required_time: street.required_time,
                },
            );
            incoming
                .entry(street.end_intersection)
                .or_default()
                .push(street.name.clone());
        }

        StreetNetwork {
            streets: lookup,
            incoming,
        }
    }

    /// Retrieves a street by its name.
    pub fn street(&self, name: &str) -> Option<&StreetInfo> {
        self.streets.get(name)
    }

    /// Retrieves the incoming streets of an intersection.
    pub fn incoming(&self, id: IntersectionId) -> Option<&IncomingStreets> {
        self.incoming.get(&id)
    }

    /// Iterates over every intersection with at least one incoming street,
    /// in ascending id order.
    pub fn incoming_iter(&self) -> impl Iterator<Item = (IntersectionId, &IncomingStreets)> {
        self.incoming.iter().map(|(&id, incoming)| (id, incoming))
    }

    /// Intersections whose in-degree is exactly `in_degree`.
    pub fn with_in_degree(
        &self,
        in_degree: usize,
    ) -> impl Iterator<Item = (IntersectionId, &IncomingStreets)> {
        self.incoming_iter()
            .filter(move |(_, incoming)| incoming.in_degree == in_degree)
    }

    /// Every intersection referenced by a street, as origin or destination.
    pub fn intersection_ids(&self) -> BTreeSet<IntersectionId> {
        self.streets
            .values()
            .flat_map(|info| [info.start_intersection, info.end_intersection])
            .collect()
    }

    /// Number of distinct streets.
    pub fn len(&self) -> usize {
        self.streets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }
}
