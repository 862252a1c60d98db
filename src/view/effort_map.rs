//! Physical effort map: the selected profile's path through both stations,
//! each segment colored by the mean effort of its endpoints

use crate::domain::dataset::{MAP_HEIGHT, MAP_WIDTH};
use crate::domain::journey::Journey;
use crate::domain::types::{Position, Profile};
use crate::domain::Dataset;
use crate::services::metrics::{effort_color, extra_distance, path_segments};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::warn;

/// Map coordinates grow downward; the canvas grows upward
fn to_canvas(position: Position) -> Option<(f64, f64)> {
    match position {
        Position::Point { x, y } => Some((x, MAP_HEIGHT - y)),
        Position::Sequence(_) => None,
    }
}

pub fn draw_effort_map(f: &mut Frame, area: Rect, dataset: &Dataset, selected: Profile) {
    let journey = match dataset.journey(selected) {
        Ok(journey) => journey,
        Err(e) => {
            warn!(error = %e, profile = %selected, "effort_map_data_unavailable");
            super::draw_placeholder(f, area, "Physical Effort Map");
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    draw_path(f, chunks[0], journey);
    draw_distance(f, chunks[1], journey);
}

/// First, last and every even-indexed stage carry a label
fn is_labeled(index: usize, len: usize) -> bool {
    index == 0 || index + 1 == len || index % 2 == 0
}

/// First three words of a stage label
fn short_label(label: &str) -> String {
    label.split(' ').take(3).collect::<Vec<_>>().join(" ")
}

fn draw_path(f: &mut Frame, area: Rect, journey: &Journey) {
    let segments = path_segments(journey);
    let len = journey.path.len();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" Physical Effort Map: {} ", journey.profile.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(journey.profile.series_color().into())),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, MAP_WIDTH])
        .y_bounds([0.0, MAP_HEIGHT])
        .paint(|ctx| {
            for segment in &segments {
                if let (Some((x1, y1)), Some((x2, y2))) =
                    (to_canvas(segment.from.position), to_canvas(segment.to.position))
                {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, segment.color.into()));
                }
            }
            for stage in &journey.path {
                if let Some((x, y)) = to_canvas(stage.position) {
                    ctx.draw(&Circle { x, y, radius: 8.0, color: effort_color(stage.effort()).into() });
                }
            }
            ctx.layer();
            for (index, stage) in journey.path.iter().enumerate() {
                if !is_labeled(index, len) {
                    continue;
                }
                if let Some((x, y)) = to_canvas(stage.position) {
                    ctx.print(x, y + 30.0, Span::styled(short_label(&stage.label), Style::default().fg(Color::White)));
                }
            }
        });

    f.render_widget(canvas, area);
}

fn draw_distance(f: &mut Frame, area: Rect, journey: &Journey) {
    let summary = Paragraph::new(Line::from(vec![
        Span::raw(format!("Distance {} ", journey.total_distance)),
        Span::styled(
            format!("(direct {}, +{}) ", journey.direct_distance, extra_distance(journey)),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(format!("| Calories {}", journey.calories)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, area);
}
