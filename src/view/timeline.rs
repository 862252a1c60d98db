//! Journey-time chart: elapsed minutes per stage, one series per profile

use crate::domain::error::MetricsError;
use crate::domain::types::{Profile, Rgb};
use crate::domain::Dataset;
use crate::services::metrics::elapsed_at;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset as Series, GraphType};
use ratatui::Frame;
use tracing::warn;

const MARKER_COLOR: Rgb = Rgb::from_hex(0xf59e0b);

/// Minutes per stage for every profile, in `Profile::ALL` order
fn series_points(dataset: &Dataset) -> Result<Vec<(Profile, Vec<(f64, f64)>)>, MetricsError> {
    Profile::ALL
        .iter()
        .map(|profile| {
            let journey = dataset.journey(*profile)?;
            let points = (0..journey.timeline.len())
                .map(|i| elapsed_at(journey, i).map(|minutes| (i as f64, f64::from(minutes))))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((*profile, points))
        })
        .collect()
}

/// Round the top of the y axis up to the next multiple of 5
fn y_ceiling(series: &[(Profile, Vec<(f64, f64)>)]) -> f64 {
    let max = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max);
    ((max / 5.0).floor() + 1.0) * 5.0
}

pub fn draw_timeline(f: &mut Frame, area: Rect, dataset: &Dataset, selected: Profile, cursor: usize) {
    let series = match series_points(dataset) {
        Ok(series) => series,
        Err(e) => {
            warn!(error = %e, "timeline_data_unavailable");
            super::draw_placeholder(f, area, "Journey Time Comparison");
            return;
        }
    };

    let x_max = dataset.timeline().len().saturating_sub(1).max(1) as f64;
    let y_max = y_ceiling(&series);

    let marker_lines: Vec<Vec<(f64, f64)>> = dataset
        .markers()
        .into_iter()
        .map(|i| vec![(i as f64, 0.0), (i as f64, y_max)])
        .collect();
    let cursor_line = vec![(cursor as f64, 0.0), (cursor as f64, y_max)];

    let mut datasets = Vec::new();
    for line in &marker_lines {
        datasets.push(
            Series::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(MARKER_COLOR.into()))
                .data(line),
        );
    }
    datasets.push(
        Series::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&cursor_line),
    );
    for (profile, points) in &series {
        let mut style = Style::default().fg(profile.series_color().into());
        if *profile == selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        datasets.push(
            Series::default()
                .name(profile.label())
                .marker(if *profile == selected { Marker::Block } else { Marker::Braille })
                .graph_type(GraphType::Line)
                .style(style)
                .data(points),
        );
    }

    let mut labels = dataset.timeline_labels();
    let first = labels.next().unwrap_or_default().to_string();
    let last = labels.last().unwrap_or_default().to_string();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Journey Time Comparison (minutes) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .x_axis(
            Axis::default()
                .title("Stage")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .title("Minutes")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", y_max / 2.0)),
                    Span::raw(format!("{}", y_max)),
                ]),
        );

    f.render_widget(chart, area);
}
