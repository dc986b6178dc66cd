//! Colours and fades
use ratatui::style::{Color, Modifier, Style};

/// Cream page background
pub const BACKGROUND: (u8, u8, u8) = (0xf5, 0xf0, 0xe6);
pub const TEXT: (u8, u8, u8) = (0x00, 0x00, 0x00);
pub const MUTED: (u8, u8, u8) = (0x37, 0x41, 0x51);
pub const LINK: (u8, u8, u8) = (0x25, 0x63, 0xeb);

/// Mix `fg` into the background by `opacity` in `[0, 1]`
pub fn faded(fg: (u8, u8, u8), opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * t).round() as u8;
    Color::Rgb(
        mix(fg.0, BACKGROUND.0),
        mix(fg.1, BACKGROUND.1),
        mix(fg.2, BACKGROUND.2),
    )
}

pub fn page() -> Style {
    Style::new().bg(rgb(BACKGROUND)).fg(rgb(TEXT))
}

pub fn text(opacity: f32) -> Style {
    Style::new().fg(faded(TEXT, opacity))
}

pub fn muted(opacity: f32) -> Style {
    Style::new().fg(faded(MUTED, opacity))
}

pub fn heading(opacity: f32) -> Style {
    text(opacity).add_modifier(Modifier::BOLD)
}

pub fn link(opacity: f32) -> Style {
    Style::new()
        .fg(faded(LINK, opacity))
        .add_modifier(Modifier::UNDERLINED)
}

/// Black button with white label, as on the page
pub fn button(opacity: f32) -> Style {
    Style::new()
        .bg(faded(TEXT, opacity))
        .fg(rgb(BACKGROUND))
        .add_modifier(Modifier::BOLD)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_endpoints() {
        assert_eq!(faded(TEXT, 1.0), Color::Rgb(0, 0, 0));
        assert_eq!(faded(TEXT, 0.0), Color::Rgb(0xf5, 0xf0, 0xe6));
        assert_eq!(faded(TEXT, 7.0), faded(TEXT, 1.0));
    }
}
