//! Terminal renderer for the journey comparison dashboard
//!
//! `App` is the top-level view state: it owns the profile selector and the
//! stage cursor. Child panels receive the selected profile as a parameter and
//! never reach for shared state.
//!
//! Panels:
//! - `timeline` - journey-time chart with reference lines
//! - `effort_map` - station map colored by effort
//! - `panels` - tabs, tooltip, legend, outages, time impact, facts

pub mod effort_map;
pub mod panels;
pub mod timeline;

use crate::domain::content::Section;
use crate::domain::types::Profile;
use crate::domain::Dataset;
use crate::infra::config::Config;
use crate::services::selector::ProfileSelector;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tokio::sync::watch;
use tracing::debug;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Dashboard view state
pub struct App<'a> {
    dataset: &'a Dataset,
    selector: ProfileSelector,
    selection_rx: watch::Receiver<Profile>,
    reference: Profile,
    stage_cursor: usize,
    section: usize,
    dirty: bool,
}

impl<'a> App<'a> {
    pub fn new(dataset: &'a Dataset, config: &Config) -> Self {
        let selector = ProfileSelector::new(config.default_profile());
        let selection_rx = selector.subscribe();
        Self {
            dataset,
            selector,
            selection_rx,
            reference: config.reference_profile(),
            stage_cursor: 0,
            section: 0,
            dirty: true,
        }
    }

    pub fn selected(&self) -> Profile {
        self.selector.current()
    }

    pub fn selector(&self) -> &ProfileSelector {
        &self.selector
    }

    pub fn stage_cursor(&self) -> usize {
        self.stage_cursor
    }

    pub fn section(&self) -> Section {
        Section::ALL[self.section % Section::ALL.len()]
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('1') | KeyCode::Char('s') => {
                self.selector.select(Profile::Standard);
            }
            KeyCode::Char('2') | KeyCode::Char('w') => {
                self.selector.select(Profile::Wheelchair);
            }
            KeyCode::Char('3') | KeyCode::Char('v') => {
                self.selector.select(Profile::VisuallyImpaired);
            }
            KeyCode::Tab => {
                self.selector.cycle();
            }
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Char('f') => {
                self.section = (self.section + 1) % Section::ALL.len();
                self.dirty = true;
            }
            _ => {}
        }
        Control::Continue
    }

    fn move_cursor(&mut self, step: isize) {
        let last = self.dataset.timeline().len().saturating_sub(1);
        let next = self.stage_cursor.saturating_add_signed(step).min(last);
        if next != self.stage_cursor {
            debug!(stage = next, "stage_cursor_moved");
            self.stage_cursor = next;
            self.dirty = true;
        }
    }

    /// Force a redraw on the next `take_redraw` (e.g. after a resize)
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// True when the screen is stale: a new selection or a local change
    pub fn take_redraw(&mut self) -> bool {
        let selection_changed = self.selection_rx.has_changed().unwrap_or(false);
        if selection_changed {
            self.selection_rx.borrow_and_update();
        }
        let redraw = self.dirty || selection_changed;
        self.dirty = false;
        redraw
    }

    pub fn draw(&self, f: &mut Frame) {
        let selected = self.selected();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(3),  // Profile tabs
                Constraint::Min(16),    // Charts
                Constraint::Length(10), // Bottom panels
            ])
            .split(f.area());

        draw_header(f, rows[0], selected);
        panels::draw_tabs(f, rows[1], selected);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(charts[0]);
        timeline::draw_timeline(f, left[0], self.dataset, selected, self.stage_cursor);
        panels::draw_tooltip(f, left[1], self.dataset, self.stage_cursor);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(charts[1]);
        effort_map::draw_effort_map(f, right[0], self.dataset, selected);
        panels::draw_legend(f, right[1], self.dataset);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Outages
                Constraint::Percentage(35), // Time impact
                Constraint::Percentage(35), // Facts
            ])
            .split(rows[3]);
        panels::draw_outages(f, bottom[0], self.dataset);
        panels::draw_impact(f, bottom[1], self.dataset, self.reference, selected);
        panels::draw_section(f, bottom[2], self.section());
    }
}

fn draw_header(f: &mut Frame, area: Rect, selected: Profile) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Same Destination, Different Journeys ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("| Selected: "),
        Span::styled(selected.label(), Style::default().fg(selected.series_color().into())),
        Span::raw(format!(" | build {} ", env!("GIT_HASH"))),
        Span::styled(
            "| 1-3 select, Tab cycle, ←/→ stage, f facts, q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Drawn in place of a panel whose data lookup failed
pub(crate) fn draw_placeholder(f: &mut Frame, area: Rect, title: &str) {
    let placeholder = Paragraph::new("data unavailable")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL));
    f.render_widget(placeholder, area);
}
