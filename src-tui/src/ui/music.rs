use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::{MusicSection, Profile};

use super::{centered, image_frame, theme};

const SLIDE_WIDTH: u16 = 40;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    music: &MusicSection,
    opacity: f32,
    now: Instant,
) {
    let [_, heading, _, slide, _, controls, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(profile.music_heading, theme::heading(opacity)))
            .alignment(Alignment::Center),
        heading,
    );

    let carousel = music.carousel();
    frame.render_widget(
        image_frame(
            carousel.current(),
            carousel.alt_text(),
            carousel.index(),
            carousel.len(),
            opacity * music.slide_opacity(now),
        ),
        centered(slide, SLIDE_WIDTH),
    );

    let buttons = Line::from(vec![
        Span::styled(" ◀ Prev ", theme::button(opacity)),
        Span::raw("   "),
        Span::styled(" Next ▶ ", theme::button(opacity)),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        controls,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("←/h   →/l", theme::muted(opacity * 0.7)))
            .alignment(Alignment::Center),
        hint,
    );
}
