//! Journey data model: stages, per-profile journeys, outage records

use crate::domain::types::{Location, Position, Profile};
use serde::Serialize;

/// One step of a traveler's journey
///
/// `cost` is minutes elapsed on a timeline stage and an effort level (1-5)
/// on a path stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    pub label: String,
    pub position: Position,
    pub cost: u32,
    pub note: String,
}

impl Stage {
    pub fn timeline(index: usize, label: &str, minutes: u32, note: &str) -> Self {
        Self {
            label: label.to_string(),
            position: Position::Sequence(index),
            cost: minutes,
            note: note.to_string(),
        }
    }

    pub fn point(x: f64, y: f64, effort: u32, label: &str, note: &str) -> Self {
        Self {
            label: label.to_string(),
            position: Position::Point { x, y },
            cost: effort,
            note: note.to_string(),
        }
    }

    /// Effort level of a path stage, widened for color lookup
    #[inline]
    pub fn effort(&self) -> i64 {
        i64::from(self.cost)
    }
}

/// One cost per profile (the `costByProfile` mapping)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCosts {
    pub standard: u32,
    pub wheelchair: u32,
    pub visually_impaired: u32,
}

impl ProfileCosts {
    pub const fn new(standard: u32, wheelchair: u32, visually_impaired: u32) -> Self {
        Self { standard, wheelchair, visually_impaired }
    }

    pub fn get(&self, profile: Profile) -> u32 {
        match profile {
            Profile::Standard => self.standard,
            Profile::Wheelchair => self.wheelchair,
            Profile::VisuallyImpaired => self.visually_impaired,
        }
    }
}

/// Authored row of the journey-time table, shared by all profiles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub label: String,
    pub minutes: ProfileCosts,
    pub note: String,
}

impl TimelineRow {
    pub fn new(label: &str, minutes: ProfileCosts, note: &str) -> Self {
        Self { label: label.to_string(), minutes, note: note.to_string() }
    }
}

/// Everything known about one profile's trip along the route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Journey {
    pub profile: Profile,
    /// Elapsed minutes per stage, indexed on the time axis
    pub timeline: Vec<Stage>,
    /// Effort per stage, positioned on the station map
    pub path: Vec<Stage>,
    pub total_distance: u32,
    pub direct_distance: u32,
    pub calories: u32,
}

impl Journey {
    /// Project the shared timeline table onto one profile
    pub fn from_rows(profile: Profile, rows: &[TimelineRow], path: Vec<Stage>) -> Self {
        let timeline = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Stage::timeline(i, &row.label, row.minutes.get(profile), &row.note))
            .collect();

        Self { profile, timeline, path, total_distance: 0, direct_distance: 0, calories: 0 }
    }

    pub fn with_distances(mut self, total: u32, direct: u32) -> Self {
        self.total_distance = total;
        self.direct_distance = direct;
        self
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    /// Index of the final timeline stage
    pub fn last_stage_index(&self) -> usize {
        self.timeline.len().saturating_sub(1)
    }
}

/// Monthly elevator outage counts per location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutageRecord {
    pub month: String,
    pub penn_station: u32,
    pub jay_street: u32,
    /// Hand-entered total; checked against the recomputed sum at load
    pub total: u32,
}

impl OutageRecord {
    pub fn new(month: &str, penn_station: u32, jay_street: u32, total: u32) -> Self {
        Self { month: month.to_string(), penn_station, jay_street, total }
    }

    pub fn count(&self, location: Location) -> u32 {
        match location {
            Location::PennStation => self.penn_station,
            Location::JayStreet => self.jay_street,
        }
    }
}

/// Legend row describing one effort level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffortLegendEntry {
    pub level: u8,
    pub description: String,
    pub examples: String,
}

impl EffortLegendEntry {
    pub fn new(level: u8, description: &str, examples: &str) -> Self {
        Self { level, description: description.to_string(), examples: examples.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<TimelineRow> {
        vec![
            TimelineRow::new("Start", ProfileCosts::new(0, 0, 0), "a"),
            TimelineRow::new("End", ProfileCosts::new(5, 9, 11), "b"),
        ]
    }

    #[test]
    fn test_from_rows_projects_profile() {
        let journey = Journey::from_rows(Profile::Wheelchair, &rows(), Vec::new());
        assert_eq!(journey.timeline.len(), 2);
        assert_eq!(journey.timeline[1].cost, 9);
        assert_eq!(journey.timeline[1].position, Position::Sequence(1));
        assert_eq!(journey.timeline[1].note, "b");
        assert_eq!(journey.last_stage_index(), 1);
    }

    #[test]
    fn test_profile_costs_exhaustive_lookup() {
        let costs = ProfileCosts::new(1, 2, 3);
        let looked_up: Vec<u32> = Profile::ALL.iter().map(|p| costs.get(*p)).collect();
        assert_eq!(looked_up, vec![1, 2, 3]);
    }

    #[test]
    fn test_outage_count_by_location() {
        let record = OutageRecord::new("January", 4, 3, 7);
        assert_eq!(record.count(Location::PennStation), 4);
        assert_eq!(record.count(Location::JayStreet), 3);
    }
}
