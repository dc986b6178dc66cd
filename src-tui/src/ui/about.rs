use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use folio_core::{AboutSection, Profile};

use super::{centered, image_frame, theme};

const SLIDE_WIDTH: u16 = 48;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    about: &AboutSection,
    opacity: f32,
    now: Instant,
) {
    let [_, slide, _, heading, _, bio] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let carousel = about.carousel();
    let slide_opacity = opacity * about.slide_opacity(now);
    frame.render_widget(
        image_frame(
            carousel.current(),
            carousel.alt_text(),
            carousel.index(),
            carousel.len(),
            slide_opacity,
        ),
        centered(slide, SLIDE_WIDTH),
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            profile.about_heading,
            theme::heading(opacity),
        )))
        .alignment(Alignment::Center),
        heading,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(profile.about_bio, theme::muted(opacity)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        bio,
    );
}
