//! Compiled-in fixture data for the Penn Station → Jay St-MetroTech route
//!
//! `dataset()` hands out one lazily built, immutable copy. `Dataset::validate`
//! checks the authoring invariants once; binaries call it at startup.

use crate::domain::error::{DatasetError, MetricsError};
use crate::domain::journey::{EffortLegendEntry, Journey, OutageRecord, ProfileCosts, Stage, TimelineRow};
use crate::domain::types::{EffortLevel, Profile};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

/// Timeline stages the time chart highlights with a reference line
const MARKER_STAGES: [&str; 2] = ["Find Elevator", "Board Train"];

/// Extent of the station map that path stage points are placed on
pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 400.0;

/// Immutable collection of journeys, outage records and the effort legend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    timeline: Vec<TimelineRow>,
    journeys: Vec<Journey>,
    outages: Vec<OutageRecord>,
    effort_legend: Vec<EffortLegendEntry>,
}

/// Shared process-wide dataset
pub fn dataset() -> &'static Dataset {
    static DATASET: OnceLock<Dataset> = OnceLock::new();
    DATASET.get_or_init(|| {
        let data = Dataset::builtin();
        debug!(
            journeys = data.journeys.len(),
            outages = data.outages.len(),
            "dataset_initialized"
        );
        data
    })
}

impl Dataset {
    /// Build a fresh copy of the fixture
    pub fn builtin() -> Self {
        let timeline = timeline_rows();

        let journeys = vec![
            Journey::from_rows(Profile::Standard, &timeline, standard_path())
                .with_distances(650, 650)
                .with_calories(42),
            Journey::from_rows(Profile::Wheelchair, &timeline, wheelchair_path())
                .with_distances(850, 650)
                .with_calories(98),
            Journey::from_rows(Profile::VisuallyImpaired, &timeline, visually_impaired_path())
                .with_distances(750, 650)
                .with_calories(78),
        ];

        Self { timeline, journeys, outages: outage_records(), effort_legend: effort_legend() }
    }

    /// Assemble a dataset from parts (validate before use)
    pub fn from_parts(
        timeline: Vec<TimelineRow>,
        journeys: Vec<Journey>,
        outages: Vec<OutageRecord>,
        effort_legend: Vec<EffortLegendEntry>,
    ) -> Self {
        Self { timeline, journeys, outages, effort_legend }
    }

    /// Check every authoring invariant, reporting the first violation
    pub fn validate(&self) -> Result<(), DatasetError> {
        for profile in Profile::ALL {
            let count = self.journeys.iter().filter(|j| j.profile == profile).count();
            match count {
                0 => return Err(DatasetError::MissingJourney(profile)),
                1 => {}
                _ => return Err(DatasetError::DuplicateJourney(profile)),
            }
        }

        for journey in &self.journeys {
            let profile = journey.profile;

            if journey.timeline.is_empty() {
                return Err(DatasetError::EmptyTimeline(profile));
            }
            if journey.path.is_empty() {
                return Err(DatasetError::EmptyPath(profile));
            }
            if journey.timeline.len() != self.timeline.len() {
                return Err(DatasetError::TimelineLength {
                    profile,
                    found: journey.timeline.len(),
                    expected: self.timeline.len(),
                });
            }
            if journey.total_distance < journey.direct_distance {
                return Err(DatasetError::DistanceInverted {
                    profile,
                    total: journey.total_distance,
                    direct: journey.direct_distance,
                });
            }
            if let Some(index) = journey
                .timeline
                .windows(2)
                .position(|pair| pair[1].cost < pair[0].cost)
            {
                return Err(DatasetError::NonMonotonicTimeline { profile, index: index + 1 });
            }
            for (index, stage) in journey.path.iter().enumerate() {
                if EffortLevel::new(stage.effort()).is_err() {
                    return Err(DatasetError::EffortOutOfRange { profile, index, level: stage.cost });
                }
            }
        }

        for record in &self.outages {
            let computed = record.penn_station + record.jay_street;
            if computed != record.total {
                return Err(DatasetError::OutageTotalMismatch {
                    month: record.month.clone(),
                    stored: record.total,
                    computed,
                });
            }
        }

        let ordered = self
            .effort_legend
            .iter()
            .map(|entry| entry.level)
            .eq(EffortLevel::MIN..=EffortLevel::MAX);
        if !ordered {
            return Err(DatasetError::LegendOrder);
        }

        Ok(())
    }

    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }

    /// Journey for a profile
    pub fn journey(&self, profile: Profile) -> Result<&Journey, MetricsError> {
        self.journeys
            .iter()
            .find(|j| j.profile == profile)
            .ok_or(MetricsError::MissingJourney(profile))
    }

    pub fn timeline(&self) -> &[TimelineRow] {
        &self.timeline
    }

    pub fn timeline_labels(&self) -> impl Iterator<Item = &str> {
        self.timeline.iter().map(|row| row.label.as_str())
    }

    /// Timeline indices that carry a reference line
    pub fn markers(&self) -> Vec<usize> {
        self.timeline
            .iter()
            .enumerate()
            .filter(|(_, row)| MARKER_STAGES.contains(&row.label.as_str()))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn outages(&self) -> &[OutageRecord] {
        &self.outages
    }

    pub fn effort_legend(&self) -> &[EffortLegendEntry] {
        &self.effort_legend
    }
}

fn timeline_rows() -> Vec<TimelineRow> {
    vec![
        TimelineRow::new(
            "Penn Station Entrance",
            ProfileCosts::new(0, 0, 0),
            "7th Ave: Elevator access; 8th Ave: Stairs only",
        ),
        TimelineRow::new(
            "Find Elevator",
            ProfileCosts::new(1, 3, 5),
            "Multiple elevator locations mentioned in research",
        ),
        TimelineRow::new(
            "Access Platform",
            ProfileCosts::new(4, 8, 9),
            "A/C platform access requires specific elevator",
        ),
        TimelineRow::new("Board Train", ProfileCosts::new(6, 12, 14), "Platform gap challenges documented"),
        TimelineRow::new("Train Ride A/C", ProfileCosts::new(16, 22, 24), "Direct ride to Jay St-MetroTech"),
        TimelineRow::new(
            "Exit to Platform",
            ProfileCosts::new(17, 25, 27),
            "Jay St Accessible Station Lab features",
        ),
        TimelineRow::new(
            "Navigate Station",
            ProfileCosts::new(19, 31, 33),
            "Tactile guideways and wayfinding stripes",
        ),
        TimelineRow::new(
            "Exit Station",
            ProfileCosts::new(21, 35, 40),
            "NW corner Jay St and Willoughby St elevator",
        ),
    ]
}

fn standard_path() -> Vec<Stage> {
    vec![
        Stage::point(50.0, 200.0, 1, "Penn Station 7th Ave Entrance", "Elevator equipped"),
        Stage::point(110.0, 200.0, 2, "Main Concourse Navigation", "Crowded during rush hour"),
        Stage::point(200.0, 200.0, 3, "A/C Platform Access", "Multiple options available"),
        Stage::point(500.0, 200.0, 1, "Train Ride (A/C)", "10 minute direct service"),
        Stage::point(600.0, 200.0, 2, "Jay St-MetroTech Platform", "Accessible Station Lab features"),
        Stage::point(700.0, 200.0, 1, "Jay St & Willoughby Exit", "NW corner elevator location"),
    ]
}

fn wheelchair_path() -> Vec<Stage> {
    vec![
        Stage::point(50.0, 250.0, 2, "Find Accessible Entrance", "7th Ave (2023) or 8th Ave elevators"),
        Stage::point(90.0, 250.0, 4, "Elevator Wait", "Based on outage data: 4-6 days/month"),
        Stage::point(150.0, 270.0, 3, "Navigate to Platform Elevator", "Complex Penn Station layout"),
        Stage::point(220.0, 270.0, 5, "Second Elevator Wait", "Track access elevators often crowded"),
        Stage::point(270.0, 250.0, 4, "Platform Gap Navigation", "Documented safety concern"),
        Stage::point(500.0, 250.0, 2, "Train Ride", "Accessible car available"),
        Stage::point(600.0, 250.0, 4, "Jay St Exit Navigation", "Must find specific elevator"),
        Stage::point(700.0, 250.0, 3, "Exit via NW Elevator", "May have wait during peak"),
    ]
}

fn visually_impaired_path() -> Vec<Stage> {
    vec![
        Stage::point(50.0, 150.0, 3, "Locate Penn Station Entry", "Limited tactile guides at entrances"),
        Stage::point(110.0, 150.0, 5, "Navigate Crowded Concourse", "Penn Station: 600k+ daily passengers"),
        Stage::point(200.0, 150.0, 4, "Find Platform Using Audio", "Penn audio announcements available"),
        Stage::point(500.0, 150.0, 2, "Train Ride Navigation", "Metro announcements help with stops"),
        Stage::point(
            600.0,
            150.0,
            4,
            "Use Tactile Guideways",
            "Jay St Lab features: blue tiles with raised bars",
        ),
        Stage::point(
            650.0,
            150.0,
            5,
            "Braille Signage Navigation",
            "Tested at decision points in Station Lab",
        ),
        Stage::point(700.0, 150.0, 3, "Exit via Guided Path", "Way-finding stripes on floors"),
    ]
}

fn outage_records() -> Vec<OutageRecord> {
    vec![
        OutageRecord::new("January", 4, 3, 7),
        OutageRecord::new("February", 3, 4, 7),
        OutageRecord::new("March", 5, 2, 7),
        OutageRecord::new("April", 6, 3, 9),
    ]
}

fn effort_legend() -> Vec<EffortLegendEntry> {
    vec![
        EffortLegendEntry::new(1, "Easy - No barriers", "Wide corridors, clear paths"),
        EffortLegendEntry::new(2, "Minor effort - Normal navigation", "Crowded areas, basic wayfinding"),
        EffortLegendEntry::new(
            3,
            "Moderate effort - Some challenges",
            "Finding elevators, tactile navigation",
        ),
        EffortLegendEntry::new(
            4,
            "Notable effort - Significant barriers",
            "Platform gaps, poor audio/visual cues",
        ),
        EffortLegendEntry::new(
            5,
            "High effort - Major accessibility issues",
            "Long elevator waits, complex layouts",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_is_valid() {
        assert_eq!(Dataset::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_every_profile_has_one_journey() {
        let data = Dataset::builtin();
        for profile in Profile::ALL {
            let journey = data.journey(profile).unwrap();
            assert_eq!(journey.profile, profile);
            assert!(!journey.timeline.is_empty());
            assert!(!journey.path.is_empty());
        }
    }

    #[test]
    fn test_markers_point_at_reference_stages() {
        let data = Dataset::builtin();
        assert_eq!(data.markers(), vec![1, 3]);
    }

    #[test]
    fn test_shared_accessor_is_stable() {
        let first = dataset() as *const Dataset;
        let second = dataset() as *const Dataset;
        assert_eq!(first, second);
        assert_eq!(dataset(), &Dataset::builtin());
    }

    #[test]
    fn test_validate_rejects_missing_journey() {
        let data = Dataset::builtin();
        let journeys =
            data.journeys().iter().filter(|j| j.profile != Profile::Standard).cloned().collect();
        let broken = Dataset::from_parts(
            data.timeline().to_vec(),
            journeys,
            data.outages().to_vec(),
            data.effort_legend().to_vec(),
        );
        assert_eq!(broken.validate(), Err(DatasetError::MissingJourney(Profile::Standard)));
    }

    #[test]
    fn test_validate_rejects_outage_total_drift() {
        let data = Dataset::builtin();
        let mut outages = data.outages().to_vec();
        outages[3].total = 10;
        let broken = Dataset::from_parts(
            data.timeline().to_vec(),
            data.journeys().to_vec(),
            outages,
            data.effort_legend().to_vec(),
        );
        assert_eq!(
            broken.validate(),
            Err(DatasetError::OutageTotalMismatch {
                month: "April".to_string(),
                stored: 10,
                computed: 9
            })
        );
    }

    #[test]
    fn test_validate_rejects_inverted_distance() {
        let data = Dataset::builtin();
        let mut journeys = data.journeys().to_vec();
        journeys[1].direct_distance = 900;
        let broken = Dataset::from_parts(
            data.timeline().to_vec(),
            journeys,
            data.outages().to_vec(),
            data.effort_legend().to_vec(),
        );
        assert!(matches!(
            broken.validate(),
            Err(DatasetError::DistanceInverted { profile: Profile::Wheelchair, total: 850, direct: 900 })
        ));
    }

    #[test]
    fn test_validate_rejects_decreasing_timeline() {
        let data = Dataset::builtin();
        let mut journeys = data.journeys().to_vec();
        journeys[2].timeline[4].cost = 2;
        let broken = Dataset::from_parts(
            data.timeline().to_vec(),
            journeys,
            data.outages().to_vec(),
            data.effort_legend().to_vec(),
        );
        assert_eq!(
            broken.validate(),
            Err(DatasetError::NonMonotonicTimeline { profile: Profile::VisuallyImpaired, index: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_effort_outside_scale() {
        let data = Dataset::builtin();
        let mut journeys = data.journeys().to_vec();
        journeys[0].path[2].cost = 7;
        let broken = Dataset::from_parts(
            data.timeline().to_vec(),
            journeys,
            data.outages().to_vec(),
            data.effort_legend().to_vec(),
        );
        assert_eq!(
            broken.validate(),
            Err(DatasetError::EffortOutOfRange { profile: Profile::Standard, index: 2, level: 7 })
        );
    }

    fn with_journeys(data: &Dataset, journeys: Vec<Journey>) -> Dataset {
        Dataset::from_parts(
            data.timeline().to_vec(),
            journeys,
            data.outages().to_vec(),
            data.effort_legend().to_vec(),
        )
    }

    #[test]
    fn test_validate_rejects_duplicate_journey() {
        let data = Dataset::builtin();
        let mut journeys = data.journeys().to_vec();
        journeys.push(journeys[0].clone());
        assert_eq!(
            with_journeys(&data, journeys).validate(),
            Err(DatasetError::DuplicateJourney(Profile::Standard))
        );
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let data = Dataset::builtin();
        let mut journeys = data.journeys().to_vec();
        journeys[1].path.clear();
        assert_eq!(
            with_journeys(&data, journeys).validate(),
            Err(DatasetError::EmptyPath(Profile::Wheelchair))
        );
    }

    #[test]
    fn test_validate_rejects_empty_timeline() {
        let data = Dataset::builtin();
        let mut journeys = data.journeys().to_vec();
        journeys[2].timeline.clear();
        assert_eq!(
            with_journeys(&data, journeys).validate(),
            Err(DatasetError::EmptyTimeline(Profile::VisuallyImpaired))
        );
    }

    #[test]
    fn test_validate_rejects_timeline_length() {
        let data = Dataset::builtin();
        let mut journeys = data.journeys().to_vec();
        journeys[2].timeline.pop();
        assert_eq!(
            with_journeys(&data, journeys).validate(),
            Err(DatasetError::TimelineLength { profile: Profile::VisuallyImpaired, found: 7, expected: 8 })
        );
    }

    #[test]
    fn test_validate_rejects_legend_out_of_order() {
        let data = Dataset::builtin();
        let mut legend = data.effort_legend().to_vec();
        legend.remove(2);
        let broken = Dataset::from_parts(
            data.timeline().to_vec(),
            data.journeys().to_vec(),
            data.outages().to_vec(),
            legend,
        );
        assert_eq!(broken.validate(), Err(DatasetError::LegendOrder));

        let mut swapped = data.effort_legend().to_vec();
        swapped.swap(0, 4);
        let broken = Dataset::from_parts(
            data.timeline().to_vec(),
            data.journeys().to_vec(),
            data.outages().to_vec(),
            swapped,
        );
        assert_eq!(broken.validate(), Err(DatasetError::LegendOrder));
    }
}
