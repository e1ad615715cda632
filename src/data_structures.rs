use serde::{Deserialize, Serialize};

/// Identifier of an intersection, as referenced by street records.
pub type IntersectionId = u32;

/// Identifier (name) of a street.
pub type StreetId = String;

/// The first line of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemHeader {
    /// Length of the simulation in seconds. Upper bound for any green light.
    pub sim_duration: u32,
    /// Number of intersections in the city.
    pub n_intersections: u32,
    /// Number of street records that follow the header.
    pub n_streets: usize,
    /// Number of path records that follow the streets.
    pub n_paths: usize,
    /// Bonus points awarded for each car reaching its destination in time.
    pub score: u32,
}

/// A one-way street (edge) between two intersections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    /// Unique street name.
    pub name: StreetId,
    /// Intersection at the start of the street.
    pub start_intersection: IntersectionId,
    /// Intersection at the end of the street, where its traffic light sits.
    pub end_intersection: IntersectionId,
    /// Seconds a car needs to drive from start to end.
    pub required_time: u32,
}

/// The planned path of one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Number of streets as declared in the input record.
    pub n_streets: usize,
    /// Streets the car traverses, in order.
    pub streets: Vec<StreetId>,
}

/// A green light window: which street gets right of way, and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreenLight {
    pub street: StreetId,
    /// Seconds the light stays green within one cycle.
    pub duration: u32,
}

impl GreenLight {
    pub fn new(street: impl Into<StreetId>, duration: u32) -> Self {
        Self {
            street: street.into(),
            duration,
        }
    }
}

/// The light cycle of a single intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Intersection affected by this schedule.
    pub intersection: IntersectionId,
    /// Green lights in cycle order.
    pub green_lights: Vec<GreenLight>,
}

/// Every schedule produced for one input file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub schedules: Vec<Schedule>,
}

impl ScheduleOutput {
    pub fn new(schedules: Vec<Schedule>) -> Self {
        Self { schedules }
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Total number of green light windows across all schedules.
    pub fn window_count(&self) -> usize {
        self.schedules.iter().map(|s| s.green_lights.len()).sum()
    }
}
