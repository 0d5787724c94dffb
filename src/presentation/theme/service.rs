use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::domain::AlertLevel;
use crate::infrastructure::config::{ThemeConfig, ThemeMode};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub mode: ThemeMode,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub title_style: Style,
    pub badge_style: Style,
    pub key_hint_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(&config.accent_color, config.mode)
    }

    pub fn new(accent_color_str: &str, mode: ThemeMode) -> Self {
        Self::from_color(parse_color(accent_color_str), mode)
    }

    #[must_use]
    pub fn from_color(accent: Color, mode: ThemeMode) -> Self {
        let (selection_lightness, base_fg, dim_fg) = match mode {
            ThemeMode::Dark => (0.2, Color::Reset, Color::DarkGray),
            ThemeMode::Light => (0.85, Color::Black, Color::Gray),
        };

        let selection_bg = ColorConverter::tint(accent, selection_lightness, 0.3);
        let selection_style = Style::default()
            .bg(selection_bg)
            .fg(ColorConverter::readable_on(selection_bg));

        let key_bg = ColorConverter::tint(accent, 0.08, 0.5);

        Self {
            accent,
            mode,
            selection_style,
            dimmed_style: Style::default().fg(dim_fg),
            base_style: Style::default().fg(base_fg),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            badge_style: Style::default()
                .bg(accent)
                .fg(ColorConverter::readable_on(accent))
                .add_modifier(Modifier::BOLD),
            key_hint_style: Style::default().bg(key_bg).fg(Color::White),
        }
    }

    #[must_use]
    pub const fn level_color(&self, level: AlertLevel) -> Color {
        match level {
            AlertLevel::Info => self.accent,
            AlertLevel::Success => Color::Green,
            AlertLevel::Warn => Color::Yellow,
            AlertLevel::Error => Color::Red,
        }
    }
}

fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Green,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let double = |i: usize| channel(&s[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#4CAF50"), Color::Rgb(76, 175, 80));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("#12"), Color::Green);
        assert_eq!(parse_color("not-a-colour"), Color::Green);
    }

    #[test]
    fn test_default_theme_uses_config_accent() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(76, 175, 80));
        assert_eq!(theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_level_colors() {
        let theme = Theme::new("blue", ThemeMode::Dark);
        assert_eq!(theme.level_color(AlertLevel::Info), Color::Blue);
        assert_eq!(theme.level_color(AlertLevel::Error), Color::Red);
    }
}
