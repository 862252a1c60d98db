//! Shared types for the accessibility journey model

use crate::domain::error::MetricsError;
use serde::{Deserialize, Serialize};

/// Traveler category used to key per-stage costs
///
/// Closed set: every consumer matches exhaustively, so adding a profile is a
/// compile-time change.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Profile {
    Standard,
    /// Initial selection: the dataset's most illustrative contrast
    #[default]
    Wheelchair,
    VisuallyImpaired,
}

impl Profile {
    /// All profiles in display order
    pub const ALL: [Profile; 3] = [Profile::Standard, Profile::Wheelchair, Profile::VisuallyImpaired];

    /// Stable identifier (matches the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Standard => "standard",
            Profile::Wheelchair => "wheelchair",
            Profile::VisuallyImpaired => "visuallyImpaired",
        }
    }

    /// Human readable label used on controls and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Profile::Standard => "Standard Traveler",
            Profile::Wheelchair => "Wheelchair User",
            Profile::VisuallyImpaired => "Visually Impaired",
        }
    }

    /// Series color for this profile's line in the time chart
    pub fn series_color(&self) -> Rgb {
        match self {
            Profile::Standard => Rgb::from_hex(0x3b82f6),
            Profile::Wheelchair => Rgb::from_hex(0xef4444),
            Profile::VisuallyImpaired => Rgb::from_hex(0xa855f7),
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        match self {
            Profile::Standard => 0,
            Profile::Wheelchair => 1,
            Profile::VisuallyImpaired => 2,
        }
    }

    /// Next profile in display order, wrapping around
    pub fn next(&self) -> Profile {
        Profile::ALL[(self.index() + 1) % Profile::ALL.len()]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "standard" => Ok(Profile::Standard),
            "wheelchair" => Ok(Profile::Wheelchair),
            "visuallyImpaired" | "visually-impaired" | "visually_impaired" => {
                Ok(Profile::VisuallyImpaired)
            }
            other => Err(MetricsError::UnknownProfile(other.to_string())),
        }
    }
}

/// 24-bit color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(((hex >> 16) & 0xff) as u8, ((hex >> 8) & 0xff) as u8, (hex & 0xff) as u8)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(rgb: Rgb) -> Self {
        ratatui::style::Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Effort severity on the 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EffortLevel(u8);

impl EffortLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Strict constructor: anything outside 1-5 is an invalid argument
    pub fn new(level: i64) -> Result<Self, MetricsError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(MetricsError::EffortOutOfRange(level))
        }
    }

    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Where a stage sits: its index on the time axis or its point on the station map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Sequence(usize),
    Point { x: f64, y: f64 },
}

/// Station with a tracked elevator outage count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    PennStation,
    JayStreet,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::PennStation, Location::JayStreet];

    pub fn label(&self) -> &'static str {
        match self {
            Location::PennStation => "Penn Station",
            Location::JayStreet => "Jay St-MetroTech",
        }
    }

    pub fn series_color(&self) -> Rgb {
        match self {
            Location::PennStation => Rgb::from_hex(0x3b82f6),
            Location::JayStreet => Rgb::from_hex(0x10b981),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_str() {
        assert_eq!("standard".parse::<Profile>().unwrap(), Profile::Standard);
        assert_eq!("wheelchair".parse::<Profile>().unwrap(), Profile::Wheelchair);
        assert_eq!("visuallyImpaired".parse::<Profile>().unwrap(), Profile::VisuallyImpaired);
        assert_eq!("visually-impaired".parse::<Profile>().unwrap(), Profile::VisuallyImpaired);
        assert!(matches!(
            "invalid-profile".parse::<Profile>(),
            Err(MetricsError::UnknownProfile(ref id)) if id == "invalid-profile"
        ));
    }

    #[test]
    fn test_profile_serde_uses_identifiers() {
        let json = serde_json::to_string(&Profile::VisuallyImpaired).unwrap();
        assert_eq!(json, "\"visuallyImpaired\"");
        let parsed: Profile = serde_json::from_str("\"wheelchair\"").unwrap();
        assert_eq!(parsed, Profile::Wheelchair);
    }

    #[test]
    fn test_profile_cycle_wraps() {
        assert_eq!(Profile::Standard.next(), Profile::Wheelchair);
        assert_eq!(Profile::Wheelchair.next(), Profile::VisuallyImpaired);
        assert_eq!(Profile::VisuallyImpaired.next(), Profile::Standard);
        assert_eq!(Profile::default(), Profile::Wheelchair);
    }

    #[test]
    fn test_rgb_hex_formatting() {
        assert_eq!(Rgb::from_hex(0x4ade80).to_string(), "#4ade80");
        assert_eq!(Rgb::from_hex(0x4ade80), Rgb(0x4a, 0xde, 0x80));
    }

    #[test]
    fn test_effort_level_bounds() {
        assert_eq!(EffortLevel::new(1).unwrap().get(), 1);
        assert_eq!(EffortLevel::new(5).unwrap().get(), 5);
        assert!(matches!(EffortLevel::new(0), Err(MetricsError::EffortOutOfRange(0))));
        assert!(matches!(EffortLevel::new(6), Err(MetricsError::EffortOutOfRange(6))));
        assert!(EffortLevel::new(-3).is_err());
    }
}
