//! Smaller dashboard panels: profile tabs, stage tooltip, effort legend,
//! outage chart, time impact call-outs and static text sections

use crate::domain::content::{Section, MTA_COMMITMENT};
use crate::domain::types::{Location, Profile};
use crate::domain::Dataset;
use crate::services::metrics::{effort_color, outage_total, stage_tooltip, time_impact};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset as Series, GraphType, List, ListItem, Paragraph, Row, Table,
    Tabs, Wrap,
};
use ratatui::Frame;
use tracing::warn;

pub fn draw_tabs(f: &mut Frame, area: Rect, selected: Profile) {
    let titles: Vec<String> =
        Profile::ALL.iter().map(|p| format!("[{}] {}", p.index() + 1, p.label())).collect();

    let tabs = Tabs::new(titles)
        .select(selected.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(selected.series_color().into())
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title(" Traveler ").borders(Borders::ALL));
    f.render_widget(tabs, area);
}

pub fn draw_tooltip(f: &mut Frame, area: Rect, dataset: &Dataset, stage_index: usize) {
    let tooltip = match stage_tooltip(dataset, stage_index) {
        Ok(tooltip) => tooltip,
        Err(e) => {
            warn!(error = %e, stage = stage_index, "tooltip_data_unavailable");
            super::draw_placeholder(f, area, "Stage");
            return;
        }
    };

    let mut lines: Vec<Line> = tooltip
        .minutes
        .iter()
        .zip(tooltip.lines())
        .map(|((profile, _), text)| {
            Line::from(Span::styled(text, Style::default().fg(profile.series_color().into())))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        tooltip.note.clone(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(format!(" {} ", tooltip.label)).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

pub fn draw_legend(f: &mut Frame, area: Rect, dataset: &Dataset) {
    let items: Vec<ListItem> = dataset
        .effort_legend()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(effort_color(i64::from(entry.level)).into())),
                Span::raw(format!("{} {}", entry.level, entry.description)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Effort Levels ").borders(Borders::ALL));
    f.render_widget(list, area);
}

pub fn draw_outages(f: &mut Frame, area: Rect, dataset: &Dataset) {
    let outages = dataset.outages();
    if outages.is_empty() {
        super::draw_placeholder(f, area, "Elevator Reliability");
        return;
    }

    let per_location: Vec<(Location, Vec<(f64, f64)>)> = Location::ALL
        .iter()
        .map(|location| {
            let points = outages
                .iter()
                .enumerate()
                .map(|(i, record)| (i as f64, f64::from(record.count(*location))))
                .collect();
            (*location, points)
        })
        .collect();

    let datasets = per_location
        .iter()
        .map(|(location, points)| {
            Series::default()
                .name(location.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(location.series_color().into()))
                .data(points)
        })
        .collect();

    let y_max = outages.iter().map(outage_total).max().unwrap_or(0).max(1);
    let first = outages.first().map(|r| r.month.clone()).unwrap_or_default();
    let last = outages.last().map(|r| r.month.clone()).unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" Elevator Outages ({}-{}) ", first, last))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (outages.len().saturating_sub(1)).max(1) as f64])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, f64::from(y_max)])
                .labels(vec![Span::raw("0"), Span::raw(y_max.to_string())]),
        );
    f.render_widget(chart, area);
}

pub fn draw_impact(f: &mut Frame, area: Rect, dataset: &Dataset, reference: Profile, selected: Profile) {
    let mut rows = Vec::new();
    for profile in Profile::ALL.into_iter().filter(|p| *p != reference) {
        let row = match time_impact(dataset, reference, profile) {
            Ok(impact) => Row::new(vec![
                Line::from(profile.label()),
                Line::from(Span::styled(
                    impact.callout(),
                    Style::default().fg(profile.series_color().into()).add_modifier(Modifier::BOLD),
                )),
                Line::from(impact.caption),
            ]),
            Err(e) => {
                warn!(error = %e, profile = %profile, "impact_data_unavailable");
                Row::new(vec![
                    Line::from(profile.label()),
                    Line::from("-"),
                    Line::from("data unavailable"),
                ])
            }
        };
        let row = if profile == selected {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        };
        rows.push(row);
    }
    rows.push(Row::new(vec![
        Line::from(MTA_COMMITMENT.heading),
        Line::from(Span::styled(
            MTA_COMMITMENT.value,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(MTA_COMMITMENT.note),
    ]));

    let table = Table::new(rows, [Constraint::Length(18), Constraint::Length(9), Constraint::Min(10)])
        .header(
            Row::new(vec!["Traveler", "Extra", "Why"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(format!(" Time Impact vs {} ", reference.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(table, area);
}

pub fn draw_section(f: &mut Frame, area: Rect, section: Section) {
    let items: Vec<ListItem> =
        section.lines().iter().map(|line| ListItem::new(format!("• {}", line))).collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", section.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}
