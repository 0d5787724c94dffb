use crate::domain::entities::ProfileStatus;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

trait ProfileStatusExt {
    fn indicator(self) -> &'static str;
    fn color(self) -> Color;
}

impl ProfileStatusExt for ProfileStatus {
    fn indicator(self) -> &'static str {
        match self {
            Self::Available => "●",
            Self::Busy | Self::DoNotDisturb => "◉",
            Self::Away => "◐",
            Self::Offline => "○",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Available => Color::Green,
            Self::Busy => Color::Red,
            Self::Away => Color::Yellow,
            Self::DoNotDisturb => Color::Magenta,
            Self::Offline => Color::DarkGray,
        }
    }
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub title: Style,
    pub unread: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let version_bg = ColorConverter::tint(theme.accent, 0.08, 0.5);

        Self {
            app_name: theme.badge_style,
            version: Style::default().bg(version_bg).fg(Color::White),
            title: theme.title_style,
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
            unread: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top line: app badge, screen title, unread count and the agent's
/// availability.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title: &'a str,
    agent: Option<(&'a str, ProfileStatus)>,
    unread: usize,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str, title: &'a str) -> Self {
        Self {
            app_name,
            version,
            title,
            agent: None,
            unread: 0,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn agent(mut self, initials: &'a str, status: ProfileStatus) -> Self {
        self.agent = Some((initials, status));
        self
    }

    #[must_use]
    pub const fn unread(mut self, count: usize) -> Self {
        self.unread = count;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_right_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        if self.unread > 0 {
            spans.push(Span::styled(format!(" ✉ {} ", self.unread), self.style.unread));
            spans.push(Span::raw(" "));
        }
        if let Some((initials, status)) = self.agent {
            let style = Style::default()
                .bg(status.color())
                .fg(ColorConverter::readable_on(status.color()))
                .add_modifier(Modifier::BOLD);
            spans.push(Span::styled(
                format!(" {} {initials} ", status.indicator()),
                style,
            ));
        }
        spans
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!(" v{} ", self.version), self.style.version),
            Span::raw("  "),
            Span::styled(self.title.to_string(), self.style.title),
        ]);
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let right_spans = self.build_right_spans();
        let right_width = u16::try_from(
            right_spans
                .iter()
                .map(|s| s.content.width())
                .sum::<usize>(),
        )
        .unwrap_or(u16::MAX);

        if right_width > 0 && right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(right_spans)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_indicator() {
        assert_eq!(ProfileStatus::Available.indicator(), "●");
        assert_eq!(ProfileStatus::Offline.indicator(), "○");
    }

    #[test]
    fn test_header_renders_title_and_badge() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("dialdesk", "0.1.0", "Dashboard")
            .agent("JD", ProfileStatus::Available)
            .unread(2)
            .render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.contains("DIALDESK"));
        assert!(line.contains("Dashboard"));
        assert!(line.contains("JD"));
        assert!(line.contains(" 2 "));
    }
}
