//! Properties of the fixture dataset and the derived metrics built on it

use access_journeys::domain::{dataset, Dataset, MetricsError, Profile};
use access_journeys::services::{
    delta, edge_color, effort_color, extra_distance, outage_total, ProfileSelector, EFFORT_PALETTE,
};
use std::collections::HashSet;

#[test]
fn test_extra_distance_never_negative() {
    for journey in dataset().journeys() {
        assert!(journey.total_distance >= journey.direct_distance);
        assert_eq!(extra_distance(journey), journey.total_distance - journey.direct_distance);
    }
    let wheelchair = dataset().journey(Profile::Wheelchair).unwrap();
    assert_eq!(extra_distance(wheelchair), 200);
}

#[test]
fn test_outage_totals_match_stored_totals() {
    for record in dataset().outages() {
        assert_eq!(outage_total(record), record.total, "month {}", record.month);
    }
}

#[test]
fn test_effort_colors_distinct_in_range() {
    let colors: HashSet<_> = (1..=5).map(effort_color).collect();
    assert_eq!(colors.len(), 5);
    for level in 1..=5 {
        assert_eq!(effort_color(level), EFFORT_PALETTE[(level - 1) as usize]);
    }
}

#[test]
fn test_effort_color_clamps_outside_range() {
    let last = EFFORT_PALETTE[4];
    for level in [i64::MIN, -1, 0, 6, 100, i64::MAX] {
        assert_eq!(effort_color(level), last, "level {}", level);
    }
}

#[test]
fn test_edge_color_symmetric() {
    for journey in dataset().journeys() {
        for a in &journey.path {
            for b in &journey.path {
                assert_eq!(edge_color(a, b), edge_color(b, a));
            }
        }
    }
}

#[test]
fn test_final_stage_deltas() {
    let data = dataset();
    let standard = data.journey(Profile::Standard).unwrap();
    let wheelchair = data.journey(Profile::Wheelchair).unwrap();
    let visually_impaired = data.journey(Profile::VisuallyImpaired).unwrap();
    let last = standard.last_stage_index();

    // Fixture final stage: standard 21, wheelchair 35, visually impaired 40
    assert_eq!(delta(wheelchair, standard, last), Ok(14));
    assert_eq!(delta(visually_impaired, standard, last), Ok(19));
    assert_eq!(delta(standard, wheelchair, last), Ok(-14));
}

#[test]
fn test_delta_out_of_range_is_invalid_argument() {
    let data = dataset();
    let standard = data.journey(Profile::Standard).unwrap();
    let wheelchair = data.journey(Profile::Wheelchair).unwrap();
    assert!(matches!(
        delta(standard, wheelchair, 42),
        Err(MetricsError::StageOutOfRange { index: 42, .. })
    ));
}

#[test]
fn test_selector_round_trip() {
    let selector = ProfileSelector::default();
    selector.select(Profile::Wheelchair);
    assert_eq!(selector.current(), Profile::Wheelchair);

    let result = selector.select_id("invalid-profile");
    assert!(matches!(result, Err(MetricsError::UnknownProfile(_))));
    assert_eq!(selector.current(), Profile::Wheelchair);
}

#[test]
fn test_dataset_provider_is_pure() {
    assert_eq!(Dataset::builtin(), Dataset::builtin());
    assert_eq!(dataset(), dataset());
    assert_eq!(dataset(), &Dataset::builtin());
}

#[test]
fn test_builtin_dataset_validates() {
    dataset().validate().unwrap();
}
