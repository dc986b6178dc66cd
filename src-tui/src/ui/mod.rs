//! Terminal rendering
//!
//! Immediate mode: every frame is drawn from the core's state at `now`.
//! Section and slide fades become colour blends toward the page background.

mod about;
mod experience;
mod music;
mod theme;

use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs};
use ratatui::Frame;

use folio_core::{Section, Tab};

use crate::state::AppState;

const CONTENT_WIDTH: u16 = 84;
const TAB_DIVIDER: &str = "    ";

const KEY_HINTS: &str = "1-3 section · Tab cycle · ←/→ songs · o link · d résumé · q quit";

pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::new().style(theme::page()), area);

    let [nav, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let portfolio = state.portfolio();
    render_nav(frame, nav, portfolio.active_tab());

    let body = centered(body, CONTENT_WIDTH);
    let opacity = portfolio.section_opacity(now);
    let profile = portfolio.profile();

    match portfolio.section() {
        Section::About(section) => about::render(frame, body, profile, section, opacity, now),
        Section::Music(section) => music::render(frame, body, profile, section, opacity, now),
        Section::Experience(section) => experience::render(frame, body, profile, section, opacity),
    }

    render_status(frame, status, state);
}

fn render_nav(frame: &mut Frame, area: Rect, active: Tab) {
    frame.render_widget(
        Block::new()
            .borders(Borders::BOTTOM)
            .border_style(theme::muted(0.3)),
        area,
    );

    let labels: Vec<&str> = Tab::ALL.iter().map(|tab| tab.nav_label()).collect();
    let width = labels.iter().map(|l| l.chars().count() as u16 + 2).sum::<u16>()
        + TAB_DIVIDER.len() as u16 * (labels.len() as u16 - 1);

    let [tabs_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let tabs = Tabs::new(labels)
        .select(active.position())
        .divider(TAB_DIVIDER)
        .style(theme::muted(1.0))
        .highlight_style(
            theme::text(1.0).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(Block::new().padding(Padding::top(1)));

    frame.render_widget(tabs, tabs_area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.status() {
        Some(status) if status.is_error => Line::from(Span::styled(
            status.message.as_str(),
            Style::new().fg(Color::Rgb(0xb9, 0x1c, 0x1c)),
        )),
        Some(status) => Line::from(Span::styled(status.message.as_str(), theme::text(1.0))),
        None => Line::from(Span::styled(KEY_HINTS, theme::muted(0.7))),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Horizontally centred column of at most `max_width`
fn centered(area: Rect, max_width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(max_width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// A rounded frame standing in for an image, with position dots underneath
fn image_frame<'a>(
    path: &'a str,
    alt: String,
    index: usize,
    len: usize,
    opacity: f32,
) -> Paragraph<'a> {
    let dots: Vec<&str> = (0..len)
        .map(|i| if i == index { "●" } else { "○" })
        .collect();
    let file_name = path.trim_start_matches('/');

    Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!("▣  {file_name}"), theme::text(opacity))),
        Line::default(),
        Line::from(Span::styled(dots.join(" "), theme::muted(opacity))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::text(opacity))
            .title(Line::from(Span::styled(alt, theme::muted(opacity))).centered()),
    )
}
