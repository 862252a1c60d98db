//! Static report - per-profile impact, distances, effort and outages
//!
//! Written as plain text or a single JSON document, to stdout or a file.

use crate::domain::error::MetricsError;
use crate::domain::types::{Profile, Rgb};
use crate::domain::Dataset;
use crate::infra::config::ReportFormat;
use crate::services::metrics::{
    calorie_delta, effort_color, elapsed_at, extra_distance, mean_effort, outage_total, peak_effort,
    time_impact,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub profile: Profile,
    pub label: &'static str,
    pub final_minutes: u32,
    pub impact_minutes: i64,
    pub callout: String,
    pub caption: &'static str,
    pub total_distance: u32,
    pub direct_distance: u32,
    pub extra_distance: u32,
    pub calories: u32,
    pub calorie_delta: i64,
    pub peak_effort: Option<u32>,
    pub mean_effort: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutageSummary {
    pub month: String,
    pub penn_station: u32,
    pub jay_street: u32,
    /// Recomputed, never the stored field
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendRow {
    pub level: u8,
    pub color: Rgb,
    pub description: String,
    pub examples: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub build: &'static str,
    pub reference: Profile,
    pub profiles: Vec<ProfileSummary>,
    pub outages: Vec<OutageSummary>,
    pub effort_legend: Vec<LegendRow>,
}

impl Report {
    /// Summarize the dataset against `reference`; `only` limits the profile rows
    pub fn build(dataset: &Dataset, reference: Profile, only: Option<Profile>) -> Result<Self, MetricsError> {
        let reference_journey = dataset.journey(reference)?;

        let mut profiles = Vec::new();
        for profile in Profile::ALL.into_iter().filter(|p| only.map_or(true, |o| o == *p)) {
            let journey = dataset.journey(profile)?;
            let impact = time_impact(dataset, reference, profile)?;
            let final_minutes = elapsed_at(journey, journey.last_stage_index())?;

            profiles.push(ProfileSummary {
                profile,
                label: profile.label(),
                final_minutes,
                impact_minutes: impact.minutes,
                callout: impact.callout(),
                caption: impact.caption,
                total_distance: journey.total_distance,
                direct_distance: journey.direct_distance,
                extra_distance: extra_distance(journey),
                calories: journey.calories,
                calorie_delta: calorie_delta(reference_journey, journey),
                peak_effort: peak_effort(journey),
                mean_effort: mean_effort(journey),
            });
        }

        let outages = dataset
            .outages()
            .iter()
            .map(|record| OutageSummary {
                month: record.month.clone(),
                penn_station: record.penn_station,
                jay_street: record.jay_street,
                total: outage_total(record),
            })
            .collect();

        let effort_legend = dataset
            .effort_legend()
            .iter()
            .map(|entry| LegendRow {
                level: entry.level,
                color: effort_color(i64::from(entry.level)),
                description: entry.description.clone(),
                examples: entry.examples.clone(),
            })
            .collect();

        debug!(reference = %reference, rows = profiles.len(), "report_built");

        Ok(Self {
            generated_at: Utc::now(),
            build: env!("GIT_HASH"),
            reference,
            profiles,
            outages,
            effort_legend,
        })
    }

    pub fn write_text<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "Penn Station -> Jay St-MetroTech journey comparison")?;
        writeln!(w, "Reference: {} (build {})", self.reference.label(), self.build)?;
        writeln!(w)?;

        writeln!(
            w,
            "{:<20} {:>6} {:>8} {:>10} {:>9} {:>6} {:>5}",
            "Profile", "Final", "Impact", "Extra dist", "Calories", "Peak", "Mean"
        )?;
        for row in &self.profiles {
            writeln!(
                w,
                "{:<20} {:>6} {:>8} {:>10} {:>9} {:>6} {:>5}",
                row.label,
                format!("{}m", row.final_minutes),
                row.callout,
                row.extra_distance,
                format!("{:+}", row.calorie_delta),
                row.peak_effort.map_or_else(|| "-".to_string(), |e| e.to_string()),
                row.mean_effort.map_or_else(|| "-".to_string(), |m| format!("{:.1}", m)),
            )?;
        }
        for row in &self.profiles {
            if row.profile != self.reference {
                writeln!(w, "  {} {}: {}", row.label, row.callout, row.caption)?;
            }
        }
        writeln!(w)?;

        writeln!(w, "Elevator outages")?;
        writeln!(w, "{:<10} {:>6} {:>6} {:>6}", "Month", "Penn", "Jay St", "Total")?;
        for row in &self.outages {
            writeln!(w, "{:<10} {:>6} {:>6} {:>6}", row.month, row.penn_station, row.jay_street, row.total)?;
        }
        writeln!(w)?;

        writeln!(w, "Effort levels")?;
        for row in &self.effort_legend {
            writeln!(w, "  {} {} {} ({})", row.level, row.color, row.description, row.examples)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, w: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)
    }

    pub fn write<W: Write>(&self, w: &mut W, format: ReportFormat) -> io::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(w),
            ReportFormat::Json => self.write_json(w),
        }
    }
}

/// Write the report to `output`, or stdout when no path is given
pub fn write_report(report: &Report, format: ReportFormat, output: Option<&Path>) -> anyhow::Result<()> {
    use anyhow::Context;

    match output {
        Some(path) => {
            // Create parent directories if they don't exist
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create report file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            report.write(&mut writer, format)?;
            writer.flush()?;
            info!(path = %path.display(), format = ?format, "report_written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            report.write(&mut lock, format)?;
            lock.flush()?;
        }
    }
    Ok(())
}
