//! Derived metrics - turns journeys into display-ready values
//!
//! Everything here is a pure function of the dataset. Lookups that can miss
//! (stage index, profile) return `MetricsError`; color lookups clamp instead.

use crate::domain::error::MetricsError;
use crate::domain::journey::{Journey, OutageRecord, Stage};
use crate::domain::types::{Location, Profile, Rgb};
use crate::domain::Dataset;
use serde::Serialize;
use tracing::debug;

/// Effort palette, level 1 through 5 (green → dark red)
pub const EFFORT_PALETTE: [Rgb; 5] = [
    Rgb::from_hex(0x4ade80),
    Rgb::from_hex(0xfbbf24),
    Rgb::from_hex(0xfb923c),
    Rgb::from_hex(0xef4444),
    Rgb::from_hex(0xdc2626),
];

/// Elapsed minutes at a timeline stage of the journey
pub fn elapsed_at(journey: &Journey, stage_index: usize) -> Result<u32, MetricsError> {
    journey.timeline.get(stage_index).map(|stage| stage.cost).ok_or(MetricsError::StageOutOfRange {
        profile: journey.profile,
        index: stage_index,
        len: journey.timeline.len(),
    })
}

/// `elapsed_at(a) - elapsed_at(b)` at the same stage
pub fn delta(journey_a: &Journey, journey_b: &Journey, stage_index: usize) -> Result<i64, MetricsError> {
    let a = elapsed_at(journey_a, stage_index)?;
    let b = elapsed_at(journey_b, stage_index)?;
    Ok(i64::from(a) - i64::from(b))
}

/// Palette color for an effort level
///
/// Levels outside 1-5 map to the last palette entry.
pub fn effort_color(level: i64) -> Rgb {
    match usize::try_from(level) {
        Ok(l @ 1..=5) => EFFORT_PALETTE[l - 1],
        _ => {
            debug!(level, "effort_color_clamped");
            EFFORT_PALETTE[EFFORT_PALETTE.len() - 1]
        }
    }
}

/// Color of the segment between two path stages: the rounded mean effort
pub fn edge_color(stage: &Stage, next_stage: &Stage) -> Rgb {
    // halves round up
    let mean = (stage.effort() + next_stage.effort() + 1).div_euclid(2);
    effort_color(mean)
}

/// Distance walked beyond the direct route
pub fn extra_distance(journey: &Journey) -> u32 {
    journey.total_distance.saturating_sub(journey.direct_distance)
}

/// Outage count summed over all locations for one month
pub fn outage_total(record: &OutageRecord) -> u32 {
    Location::ALL.iter().map(|location| record.count(*location)).sum()
}

/// Consecutive pair of path stages with its drawing color
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub from: &'a Stage,
    pub to: &'a Stage,
    pub color: Rgb,
}

/// Segments of the journey's map path, in travel order
pub fn path_segments(journey: &Journey) -> Vec<Segment<'_>> {
    journey
        .path
        .windows(2)
        .map(|pair| Segment { from: &pair[0], to: &pair[1], color: edge_color(&pair[0], &pair[1]) })
        .collect()
}

/// Highest effort along the path
pub fn peak_effort(journey: &Journey) -> Option<u32> {
    journey.path.iter().map(|stage| stage.cost).max()
}

/// Average effort along the path
pub fn mean_effort(journey: &Journey) -> Option<f64> {
    if journey.path.is_empty() {
        return None;
    }
    let sum: u32 = journey.path.iter().map(|stage| stage.cost).sum();
    Some(f64::from(sum) / journey.path.len() as f64)
}

/// Extra calories spent compared with the reference journey
pub fn calorie_delta(reference: &Journey, other: &Journey) -> i64 {
    i64::from(other.calories) - i64::from(reference.calories)
}

/// Final-stage time penalty of one profile against the reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeImpact {
    pub profile: Profile,
    pub reference: Profile,
    pub minutes: i64,
    pub caption: &'static str,
}

impl TimeImpact {
    /// Call-out text, e.g. `+14 min`
    pub fn callout(&self) -> String {
        format!("{:+} min", self.minutes)
    }
}

pub fn time_impact(
    dataset: &Dataset,
    reference: Profile,
    profile: Profile,
) -> Result<TimeImpact, MetricsError> {
    let reference_journey = dataset.journey(reference)?;
    let journey = dataset.journey(profile)?;
    let minutes = delta(journey, reference_journey, journey.last_stage_index())?;

    let caption = match profile {
        Profile::Standard => "Baseline journey",
        Profile::Wheelchair => "Primarily due to elevator access",
        Profile::VisuallyImpaired => "Station navigation challenges",
    };

    Ok(TimeImpact { profile, reference, minutes, caption })
}

/// Hover text for one timeline stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub label: String,
    pub minutes: Vec<(Profile, u32)>,
    pub note: String,
}

impl Tooltip {
    /// `<profile label>: <n> minutes`, one line per profile
    pub fn lines(&self) -> Vec<String> {
        self.minutes
            .iter()
            .map(|(profile, minutes)| format!("{}: {} minutes", profile.label(), minutes))
            .collect()
    }
}

pub fn stage_tooltip(dataset: &Dataset, stage_index: usize) -> Result<Tooltip, MetricsError> {
    let mut minutes = Vec::with_capacity(Profile::ALL.len());
    for profile in Profile::ALL {
        minutes.push((profile, elapsed_at(dataset.journey(profile)?, stage_index)?));
    }

    let rows = dataset.timeline();
    let row = rows.get(stage_index).ok_or(MetricsError::StageOutOfRange {
        profile: Profile::Standard,
        index: stage_index,
        len: rows.len(),
    })?;
    Ok(Tooltip { label: row.label.clone(), minutes, note: row.note.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::dataset;

    fn stage(effort: u32) -> Stage {
        Stage::point(0.0, 0.0, effort, "s", "")
    }

    #[test]
    fn test_elapsed_at_reads_profile_cost() {
        let wheelchair = dataset().journey(Profile::Wheelchair).unwrap();
        assert_eq!(elapsed_at(wheelchair, 0), Ok(0));
        assert_eq!(elapsed_at(wheelchair, 3), Ok(12));
        assert_eq!(elapsed_at(wheelchair, 7), Ok(35));
    }

    #[test]
    fn test_elapsed_at_out_of_range() {
        let standard = dataset().journey(Profile::Standard).unwrap();
        assert_eq!(
            elapsed_at(standard, 8),
            Err(MetricsError::StageOutOfRange { profile: Profile::Standard, index: 8, len: 8 })
        );
    }

    #[test]
    fn test_delta_is_signed() {
        let standard = dataset().journey(Profile::Standard).unwrap();
        let wheelchair = dataset().journey(Profile::Wheelchair).unwrap();
        assert_eq!(delta(wheelchair, standard, 7), Ok(14));
        assert_eq!(delta(standard, wheelchair, 7), Ok(-14));
        assert_eq!(delta(standard, standard, 7), Ok(0));
    }

    #[test]
    fn test_effort_color_palette_and_clamp() {
        assert_eq!(effort_color(1), Rgb::from_hex(0x4ade80));
        assert_eq!(effort_color(3), Rgb::from_hex(0xfb923c));
        assert_eq!(effort_color(5), Rgb::from_hex(0xdc2626));
        assert_eq!(effort_color(0), Rgb::from_hex(0xdc2626));
        assert_eq!(effort_color(-1), Rgb::from_hex(0xdc2626));
        assert_eq!(effort_color(42), Rgb::from_hex(0xdc2626));
    }

    #[test]
    fn test_edge_color_rounds_half_up() {
        // mean 1.5 -> 2
        assert_eq!(edge_color(&stage(1), &stage(2)), effort_color(2));
        // mean 4.5 -> 5
        assert_eq!(edge_color(&stage(5), &stage(4)), effort_color(5));
        assert_eq!(edge_color(&stage(3), &stage(3)), effort_color(3));
    }

    #[test]
    fn test_path_segments_follow_path() {
        let journey = dataset().journey(Profile::Wheelchair).unwrap();
        let segments = path_segments(journey);
        assert_eq!(segments.len(), journey.path.len() - 1);
        assert_eq!(segments[0].from.label, "Find Accessible Entrance");
        assert_eq!(segments[0].to.label, "Elevator Wait");
        // efforts 2 and 4 -> 3
        assert_eq!(segments[0].color, effort_color(3));
    }

    #[test]
    fn test_effort_summaries() {
        let journey = dataset().journey(Profile::VisuallyImpaired).unwrap();
        assert_eq!(peak_effort(journey), Some(5));
        let mean = mean_effort(journey).unwrap();
        assert!((mean - 26.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_delta() {
        let standard = dataset().journey(Profile::Standard).unwrap();
        let wheelchair = dataset().journey(Profile::Wheelchair).unwrap();
        assert_eq!(calorie_delta(standard, wheelchair), 56);
    }

    #[test]
    fn test_time_impact_callouts() {
        let impact = time_impact(dataset(), Profile::Standard, Profile::Wheelchair).unwrap();
        assert_eq!(impact.minutes, 14);
        assert_eq!(impact.callout(), "+14 min");
        assert_eq!(impact.caption, "Primarily due to elevator access");

        let impact = time_impact(dataset(), Profile::Standard, Profile::VisuallyImpaired).unwrap();
        assert_eq!(impact.callout(), "+19 min");
    }

    #[test]
    fn test_stage_tooltip() {
        let tooltip = stage_tooltip(dataset(), 2).unwrap();
        assert_eq!(tooltip.label, "Access Platform");
        assert_eq!(
            tooltip.lines(),
            vec![
                "Standard Traveler: 4 minutes".to_string(),
                "Wheelchair User: 8 minutes".to_string(),
                "Visually Impaired: 9 minutes".to_string(),
            ]
        );
        assert_eq!(tooltip.note, "A/C platform access requires specific elevator");
        assert!(stage_tooltip(dataset(), 99).is_err());
    }
}
