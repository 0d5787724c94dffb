//! Notification inbox with an unread filter.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::outcome::ViewOutcome;
use crate::application::services::{NotificationCenter, NotificationFilter};
use crate::domain::keybinding::{Action, KeyScope};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Dialog, DialogButton, DialogIntent};

#[derive(Debug, Default)]
pub struct NotificationsScreen {
    selected: usize,
}

impl NotificationsScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    #[must_use]
    pub const fn scope(&self) -> KeyScope {
        KeyScope::Notifications
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Keeps the cursor inside the visible list after it shrinks.
    pub fn clamp(&mut self, center: &NotificationCenter) {
        let len = center.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn selected_id(&self, center: &NotificationCenter) -> Option<String> {
        center
            .visible()
            .get(self.selected)
            .map(|record| record.id.clone())
    }

    pub fn handle_action(&mut self, action: Action, center: &mut NotificationCenter) -> ViewOutcome {
        let len = center.visible().len();
        match action {
            Action::NavigateDown | Action::FocusNext => {
                if len > 0 {
                    self.selected = (self.selected + 1) % len;
                }
                ViewOutcome::Handled
            }
            Action::NavigateUp | Action::FocusPrevious => {
                if len > 0 {
                    self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
                }
                ViewOutcome::Handled
            }
            Action::ToggleFilter | Action::NavigateLeft | Action::NavigateRight => {
                center.toggle_filter();
                self.selected = 0;
                ViewOutcome::Handled
            }
            Action::Select => {
                let Some(record) = center.visible().get(self.selected).copied() else {
                    return ViewOutcome::Handled;
                };
                let mut buttons = vec![DialogButton::dismiss("Cancel")];
                if !record.read {
                    buttons.push(DialogButton::confirm(
                        "Mark as Read",
                        DialogIntent::MarkNotificationRead(record.id.clone()),
                    ));
                }
                buttons.push(
                    DialogButton::confirm("Delete", DialogIntent::DeleteNotification(record.id.clone()))
                        .destructive(),
                );
                ViewOutcome::Dialog(Dialog::new(
                    "Notification Options",
                    format!("\"{}\"", record.title),
                    buttons,
                ))
            }
            Action::MarkRead => {
                if let Some(id) = self.selected_id(center) {
                    center.mark_read(&id);
                    self.clamp(center);
                }
                ViewOutcome::Handled
            }
            Action::MarkAllRead => {
                center.mark_all_read();
                self.clamp(center);
                ViewOutcome::Handled
            }
            Action::Delete => {
                if let Some(id) = self.selected_id(center) {
                    center.delete(&id);
                    self.clamp(center);
                }
                ViewOutcome::Handled
            }
            Action::ClearAll => {
                if center.is_empty() {
                    return ViewOutcome::Handled;
                }
                ViewOutcome::Dialog(Dialog::confirm(
                    "Clear All Notifications",
                    "Are you sure you want to clear all notifications?",
                    DialogButton::confirm("Clear All", DialogIntent::ClearNotifications).destructive(),
                ))
            }
            _ => ViewOutcome::Ignored,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, center: &NotificationCenter) {
        let [tabs_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

        let tab = |filter: NotificationFilter, label: String| {
            if center.filter() == filter {
                Span::styled(format!(" {label} "), theme.selection_style)
            } else {
                Span::styled(format!(" {label} "), theme.dimmed_style)
            }
        };
        Paragraph::new(Line::from(vec![
            tab(NotificationFilter::All, format!("All ({})", center.total())),
            Span::raw("  "),
            tab(
                NotificationFilter::Unread,
                format!("Unread ({})", center.unread_count()),
            ),
        ]))
        .render(tabs_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Notifications ", theme.title_style));

        let visible = center.visible();
        if visible.is_empty() {
            let detail = match center.filter() {
                NotificationFilter::Unread => "You're all caught up! No unread notifications.",
                NotificationFilter::All => "You don't have any notifications yet.",
            };
            Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "No notifications",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(detail, theme.dimmed_style)),
            ])
            .alignment(Alignment::Center)
            .block(block)
            .render(list_area, buf);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|record| {
                let title_style = if record.read {
                    Style::default()
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                let dot = if record.read {
                    Span::raw("  ")
                } else {
                    Span::styled("● ", Style::default().fg(theme.accent))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        dot,
                        Span::raw(format!("{} ", record.kind.icon())),
                        Span::styled(record.title.clone(), title_style),
                        Span::styled(format!("  {}", record.time_label), theme.dimmed_style),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", record.message),
                        theme.dimmed_style,
                    )),
                ])
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(
            List::new(items)
                .block(block)
                .highlight_style(theme.selection_style),
            list_area,
            buf,
            &mut state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::inbox::seeded_notifications;

    fn setup() -> (NotificationsScreen, NotificationCenter) {
        (
            NotificationsScreen::new(),
            NotificationCenter::new(seeded_notifications()),
        )
    }

    #[test]
    fn test_select_opens_options_for_unread() {
        let (mut screen, mut center) = setup();
        let ViewOutcome::Dialog(dialog) = screen.handle_action(Action::Select, &mut center) else {
            panic!("expected options dialog");
        };
        assert_eq!(dialog.title(), "Notification Options");
        assert_eq!(dialog.message(), "\"New Message\"");
        let labels: Vec<_> = dialog.buttons().iter().map(|b| b.label).collect();
        assert_eq!(labels, ["Cancel", "Mark as Read", "Delete"]);
    }

    #[test]
    fn test_read_record_options_skip_mark_read() {
        let (mut screen, mut center) = setup();
        for _ in 0..2 {
            screen.handle_action(Action::NavigateDown, &mut center);
        }
        let ViewOutcome::Dialog(dialog) = screen.handle_action(Action::Select, &mut center) else {
            panic!("expected options dialog");
        };
        assert_eq!(dialog.buttons().len(), 2);
    }

    #[test]
    fn test_unread_filter_drops_marked_rows() {
        let (mut screen, mut center) = setup();
        screen.handle_action(Action::ToggleFilter, &mut center);
        assert_eq!(center.visible().len(), 2);

        screen.handle_action(Action::NavigateDown, &mut center);
        screen.handle_action(Action::MarkRead, &mut center);
        assert_eq!(center.visible().len(), 1);
        assert_eq!(screen.selected(), 0);
    }

    #[test]
    fn test_clear_all_asks_first() {
        let (mut screen, mut center) = setup();
        let outcome = screen.handle_action(Action::ClearAll, &mut center);
        assert!(matches!(outcome, ViewOutcome::Dialog(ref d) if d.title() == "Clear All Notifications"));
        assert_eq!(center.total(), 6);

        center.clear_all();
        assert_eq!(screen.handle_action(Action::ClearAll, &mut center), ViewOutcome::Handled);
    }

    #[test]
    fn test_delete_removes_selected() {
        let (mut screen, mut center) = setup();
        screen.handle_action(Action::Delete, &mut center);
        assert_eq!(center.total(), 5);
        assert!(center.visible().iter().all(|r| r.id != "1"));
    }
}
