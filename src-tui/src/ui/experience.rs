use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use folio_core::{ExperienceSection, Profile};

use super::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    experience: &ExperienceSection,
    opacity: f32,
) {
    let [_, heading, _, body, download, saved] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            profile.experience_heading,
            theme::heading(opacity),
        ))
        .alignment(Alignment::Center),
        heading,
    );

    let mut lines: Vec<Line> = Vec::new();
    for paragraph in &profile.experience_paragraphs {
        lines.push(Line::from(Span::styled(*paragraph, theme::muted(opacity))));
        lines.push(Line::default());
    }
    let link = &profile.league_link;
    lines.push(Line::from(vec![
        Span::styled(link.before, theme::muted(opacity)),
        Span::styled(link.label, theme::link(opacity)),
        Span::styled(link.after, theme::muted(opacity)),
        Span::styled("  [o]", theme::muted(opacity * 0.7)),
    ]));

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("  {}  ", profile.resume.label), theme::button(opacity)),
            Span::styled("  [d]", theme::muted(opacity * 0.7)),
        ]))
        .alignment(Alignment::Center),
        download,
    );

    if let Some(path) = experience.saved_resume() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Saved to {}", path.display()),
                theme::muted(opacity),
            ))
            .alignment(Alignment::Center),
            saved,
        );
    }
}
