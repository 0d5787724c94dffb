//! Blocking dialog with a row of buttons.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::keybinding::Action;
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 64;

/// Follow-up work a dialog button triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogIntent {
    RestartQueue,
    CloseCalling,
    MarkNotificationRead(String),
    DeleteNotification(String),
    ClearNotifications,
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub label: &'static str,
    pub intent: Option<DialogIntent>,
    pub destructive: bool,
}

impl DialogButton {
    #[must_use]
    pub const fn dismiss(label: &'static str) -> Self {
        Self {
            label,
            intent: None,
            destructive: false,
        }
    }

    #[must_use]
    pub const fn confirm(label: &'static str, intent: DialogIntent) -> Self {
        Self {
            label,
            intent: Some(intent),
            destructive: false,
        }
    }

    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// What a key did to an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    Pending,
    Closed(Option<DialogIntent>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    title: String,
    message: String,
    buttons: Vec<DialogButton>,
    selected: usize,
}

impl Dialog {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        buttons: Vec<DialogButton>,
    ) -> Self {
        let buttons = if buttons.is_empty() {
            vec![DialogButton::dismiss("OK")]
        } else {
            buttons
        };
        Self {
            title: title.into(),
            message: message.into(),
            buttons,
            selected: 0,
        }
    }

    /// A message with a single OK button.
    #[must_use]
    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Vec::new())
    }

    /// Cancel plus one confirming button, with the cursor on confirm.
    #[must_use]
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        button: DialogButton,
    ) -> Self {
        let mut dialog = Self::new(title, message, vec![DialogButton::dismiss("Cancel"), button]);
        dialog.selected = 1;
        dialog
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn buttons(&self) -> &[DialogButton] {
        &self.buttons
    }

    pub fn handle_action(&mut self, action: Action) -> DialogResult {
        match action {
            Action::NavigateLeft | Action::FocusPrevious | Action::NavigateUp => {
                self.selected = self.selected.checked_sub(1).unwrap_or(self.buttons.len() - 1);
                DialogResult::Pending
            }
            Action::NavigateRight | Action::FocusNext | Action::NavigateDown => {
                self.selected = (self.selected + 1) % self.buttons.len();
                DialogResult::Pending
            }
            Action::Select => DialogResult::Closed(self.buttons[self.selected].intent.clone()),
            Action::Cancel => DialogResult::Closed(None),
            _ => DialogResult::Pending,
        }
    }

    fn area(&self, area: Rect) -> Rect {
        let max_width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
        let buttons_width: usize = self.buttons.iter().map(|b| b.label.width() + 5).sum();
        let wanted = self
            .message
            .width()
            .max(self.title.width() + 4)
            .max(buttons_width)
            + 4;
        let width = u16::try_from(wanted).unwrap_or(u16::MAX).min(max_width);

        let inner_width = usize::from(width.saturating_sub(4).max(1));
        let message_lines = self.message.width().div_ceil(inner_width).max(1);
        let height = u16::try_from(message_lines + 5)
            .unwrap_or(u16::MAX)
            .min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let dialog_area = self.area(area);
        Clear.render(dialog_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .title(Span::styled(format!(" {} ", self.title), theme.title_style));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let [message_area, button_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                .horizontal_margin(1)
                .areas(inner);

        Paragraph::new(self.message.as_str())
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        let mut spans = Vec::new();
        for (i, button) in self.buttons.iter().enumerate() {
            let base = if button.destructive {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            let style = if i == self.selected {
                theme.selection_style.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            spans.push(Span::styled(format!("[ {} ]", button.label), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
            .alignment(ratatui::layout::Alignment::Right)
            .render(button_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_closes_without_intent() {
        let mut dialog = Dialog::notice("Error", "Please select a reason for not connected");
        assert_eq!(dialog.buttons().len(), 1);
        assert_eq!(dialog.handle_action(Action::Select), DialogResult::Closed(None));
    }

    #[test]
    fn test_confirm_defaults_to_confirm_button() {
        let mut dialog = Dialog::confirm(
            "Clear All Notifications",
            "Are you sure you want to clear all notifications?",
            DialogButton::confirm("Clear All", DialogIntent::ClearNotifications).destructive(),
        );
        assert_eq!(
            dialog.handle_action(Action::Select),
            DialogResult::Closed(Some(DialogIntent::ClearNotifications))
        );
    }

    #[test]
    fn test_navigation_wraps() {
        let mut dialog = Dialog::confirm(
            "Sign Out",
            "Are you sure?",
            DialogButton::confirm("Sign Out", DialogIntent::SignOut),
        );
        dialog.handle_action(Action::NavigateRight);
        assert_eq!(dialog.handle_action(Action::Select), DialogResult::Closed(None));

        let mut dialog = Dialog::confirm(
            "Sign Out",
            "Are you sure?",
            DialogButton::confirm("Sign Out", DialogIntent::SignOut),
        );
        assert_eq!(dialog.handle_action(Action::Cancel), DialogResult::Closed(None));
    }

    #[test]
    fn test_render_fits_small_terminal() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        let dialog = Dialog::notice("No More Callers", "You have reached the end of the caller list.");
        dialog.render(area, &mut buf, &Theme::default());
        assert!(dialog.area(area).width <= 30);
        assert!(dialog.area(area).height <= 8);
    }
}
