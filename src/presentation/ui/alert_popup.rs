use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::Alert;
use crate::presentation::theme::Theme;

/// Toast in the top-right corner for the alert at the head of the queue.
pub struct AlertPopup<'a> {
    alert: &'a Alert,
    theme: &'a Theme,
}

impl<'a> AlertPopup<'a> {
    #[must_use]
    pub const fn new(alert: &'a Alert, theme: &'a Theme) -> Self {
        Self { alert, theme }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let title = format!(" {} ", self.alert.title);
        let message = &self.alert.message;

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);
        let lines = content_width.div_ceil(inner_width);
        let height = lines.saturating_add(3).clamp(3, 10);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let intersection = area.intersection(self.popup_area(area));
        if intersection.area() == 0 {
            return;
        }

        let color = self.theme.level_color(self.alert.level);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.alert.title))
            .style(Style::default().fg(color));

        let para = Paragraph::new(self.alert.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertLevel;

    #[test]
    fn test_popup_stays_inside_area() {
        let alert = Alert::new(
            AlertLevel::Success,
            "Success",
            "Call details saved successfully!",
        );
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);
        let popup = AlertPopup::new(&alert, &theme).popup_area(area);

        assert!(popup.right() <= area.right());
        assert!(popup.height >= 3);
    }

    #[test]
    fn test_renders_title() {
        let alert = Alert::new(AlertLevel::Error, "Error", "Session expired. Please login again.");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        AlertPopup::new(&alert, &theme).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Error"));
    }
}
