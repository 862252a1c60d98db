//! Fixed text panels shown next to the charts (display only)

/// Text panel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    StationFacts,
    StationLabFeatures,
    AccessibilityStatus,
    KeyInsights,
    DataSources,
    Improvements,
    Overview,
    Methodology,
}

/// Headline figure shown alongside the per-profile time call-outs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub heading: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const MTA_COMMITMENT: Callout = Callout {
    heading: "MTA Commitment",
    value: "70 new",
    note: "accessible stations by 2024",
};

impl Section {
    pub const ALL: [Section; 8] = [
        Section::StationFacts,
        Section::StationLabFeatures,
        Section::AccessibilityStatus,
        Section::KeyInsights,
        Section::DataSources,
        Section::Improvements,
        Section::Overview,
        Section::Methodology,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::StationFacts => "Important Station Facts",
            Section::StationLabFeatures => "Jay St-MetroTech Accessible Station Lab (2019-2020)",
            Section::AccessibilityStatus => "Accessibility Status (2025)",
            Section::KeyInsights => "Key Insights",
            Section::DataSources => "Data Sources",
            Section::Improvements => "Accessibility Improvements Since 2019",
            Section::Overview => "Project Overview",
            Section::Methodology => "Methodology",
        }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Section::StationFacts => &[
                "Penn Station: Only 36 of 147 Manhattan stations are wheelchair accessible",
                "Jay St-MetroTech: Featured as MTA's Accessible Station Lab (2019-2020)",
                "Route: A or C train direct service (approximately 10 minutes ride time)",
                "Elevators: Penn Station (7th Ave, 8th Ave); Jay St (NW corner Jay & Willoughby)",
            ],
            Section::StationLabFeatures => &[
                "Blue tactile guidance tiles with raised bars",
                "Color-coded tape guideways for transfers",
                "Braille signage at decision points",
                "NaviLens app for smartphone navigation",
                "Visual boarding area floor markers",
                "Alternate route diagrams (15 total)",
            ],
            Section::AccessibilityStatus => &[
                "Penn Station: Fully Accessible (7th Ave elevator 2023, multiple platform access points)",
                "Jay St-MetroTech: Enhanced Accessible (former Station Lab, upgraded features kept)",
            ],
            Section::KeyInsights => &[
                "Wheelchair users face 14+ minute delays on identical routes",
                "Single elevator failures can make journeys impossible for wheelchair users",
                "Station Lab features show promise for system-wide improvements",
                "Visually impaired travelers navigate 19+ minutes longer than standard travelers",
                "Real-time elevator reliability remains a critical bottleneck",
            ],
            Section::DataSources => &[
                "MTA Accessibility Stations 2025",
                "NYC Council Data Team accessibility analysis",
                "Jay St-MetroTech Accessible Station Lab documentation",
            ],
            Section::Improvements => &[
                "Penn Station: New Elevator 2023 (7th Ave & 33rd St entrance)",
                "Jay St-MetroTech: Station Lab Features (12+ accessibility upgrades remain)",
                "MTA System-wide: 95% by 2055 (accessibility commitment)",
            ],
            Section::Overview => &[
                "How station accessibility infrastructure shapes each rider's trip",
                "Compares travel time, physical effort and elevator reliability",
                "Standard travelers vs wheelchair users and visually impaired riders",
                "Real data from Penn Station to Jay St-MetroTech",
                "Includes the Accessible Station Lab pilot program",
                "Simple journeys become complex for passengers with disabilities",
            ],
            // Data, tools and methods, prefixed per line
            Section::Methodology => &[
                "Data: MTA Elevator & Escalator Status API",
                "Data: NYC Council Accessibility Data",
                "Data: Station Lab documentation, field observations, user interviews",
                "Tools: React and Recharts dashboards, Figma persona journey maps",
                "Tools: QGIS for accessibility route analysis",
                "Methods: Comparative persona analysis, infrastructure dependency mapping",
                "Methods: Historical reliability tracking, journey time measurement",
            ],
        }
    }
}
