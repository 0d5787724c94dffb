//! Help & Support: FAQ entries and support contact options.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::outcome::ViewOutcome;
use crate::domain::keybinding::{Action, KeyScope};
use crate::presentation::theme::Theme;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HELP_FAQ: [FaqEntry; 6] = [
    FaqEntry {
        question: "How do I reset my password?",
        answer: "Go to Settings > Account > Change Password. You can also use the \"Forgot Password\" link on the login screen.",
    },
    FaqEntry {
        question: "How do I update my profile information?",
        answer: "Navigate to Profile > Edit Profile. You can update your name, email, phone number, and profile picture.",
    },
    FaqEntry {
        question: "Why am I not receiving notifications?",
        answer: "Check your device notification settings and ensure the app has permission to send notifications. You can also check notification preferences in the app settings.",
    },
    FaqEntry {
        question: "How do I export my data?",
        answer: "Go to Settings > Data Export. You can export your data in PDF or CSV format.",
    },
    FaqEntry {
        question: "How do I contact customer support?",
        answer: "Use one of the support options below. We typically respond within 24 hours.",
    },
    FaqEntry {
        question: "Is my data secure?",
        answer: "Yes, we use industry-standard encryption and security measures to protect your data. All data is stored securely and never shared with third parties.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportChannel {
    Email,
    Phone,
    Website,
}

pub struct SupportOption {
    pub channel: SupportChannel,
    pub title: &'static str,
    pub detail: &'static str,
    pub note: &'static str,
    pub target: &'static str,
}

impl SupportOption {
    /// Device intent for this option.
    #[must_use]
    pub fn outcome(&self) -> ViewOutcome {
        match self.channel {
            SupportChannel::Email => ViewOutcome::Email(self.target.to_string()),
            SupportChannel::Phone => ViewOutcome::Dial(self.target.to_string()),
            SupportChannel::Website => ViewOutcome::OpenUrl(self.target.to_string()),
        }
    }
}

pub const SUPPORT_OPTIONS: [SupportOption; 3] = [
    SupportOption {
        channel: SupportChannel::Email,
        title: "Email Support",
        detail: "support@plantoempowercms.com",
        note: "We'll respond within 24 hours",
        target: "mailto:support@plantoempowercms.com",
    },
    SupportOption {
        channel: SupportChannel::Phone,
        title: "Phone Support",
        detail: "+1 (234) 567-8900",
        note: "Mon-Fri, 9AM-6PM EST",
        target: "tel:+1234567890",
    },
    SupportOption {
        channel: SupportChannel::Website,
        title: "Visit Website",
        detail: "www.plantoempowercms.com",
        note: "Documentation & resources",
        target: "https://www.plantoempowercms.com",
    },
];

/// Rows are the FAQ entries followed by the support options.
#[derive(Debug, Default)]
pub struct HelpScreen {
    selected: usize,
    expanded: Option<usize>,
}

impl HelpScreen {
    const ROWS: usize = HELP_FAQ.len() + SUPPORT_OPTIONS.len();

    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: 0,
            expanded: None,
        }
    }

    #[must_use]
    pub const fn scope(&self) -> KeyScope {
        KeyScope::Global
    }

    #[must_use]
    pub const fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn handle_action(&mut self, action: Action) -> ViewOutcome {
        match action {
            Action::NavigateDown | Action::FocusNext => {
                self.selected = (self.selected + 1) % Self::ROWS;
                ViewOutcome::Handled
            }
            Action::NavigateUp | Action::FocusPrevious => {
                self.selected = self.selected.checked_sub(1).unwrap_or(Self::ROWS - 1);
                ViewOutcome::Handled
            }
            Action::Select => {
                if self.selected < HELP_FAQ.len() {
                    self.expanded = if self.expanded == Some(self.selected) {
                        None
                    } else {
                        Some(self.selected)
                    };
                    ViewOutcome::Handled
                } else {
                    SUPPORT_OPTIONS[self.selected - HELP_FAQ.len()].outcome()
                }
            }
            _ => ViewOutcome::Ignored,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [faq_area, support_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(11)]).areas(area);

        let mut lines = Vec::new();
        for (i, entry) in HELP_FAQ.iter().enumerate() {
            let open = self.expanded == Some(i);
            let marker = if open { "▾" } else { "▸" };
            let style = if self.selected == i {
                theme.selection_style
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(
                format!("{marker} {}", entry.question),
                style,
            )));
            if open {
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.answer),
                    theme.dimmed_style,
                )));
            }
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Frequently Asked Questions ", theme.title_style)),
            )
            .render(faq_area, buf);

        let mut lines = vec![Line::from(Span::styled(
            "Need help? Get in touch with our support team:",
            theme.dimmed_style,
        ))];
        for (i, option) in SUPPORT_OPTIONS.iter().enumerate() {
            let style = if self.selected == HELP_FAQ.len() + i {
                theme.selection_style
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(option.title, style)));
            lines.push(Line::from(vec![
                Span::raw(format!("  {}", option.detail)),
                Span::styled(format!("  {}", option.note), theme.dimmed_style),
            ]));
        }
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Contact Support ", theme.title_style)),
            )
            .render(support_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_toggles_faq_entry() {
        let mut screen = HelpScreen::new();
        screen.handle_action(Action::Select);
        assert_eq!(screen.expanded(), Some(0));
        screen.handle_action(Action::Select);
        assert_eq!(screen.expanded(), None);
    }

    #[test]
    fn test_support_rows_open_intents() {
        let mut screen = HelpScreen::new();
        for _ in 0..HELP_FAQ.len() {
            screen.handle_action(Action::NavigateDown);
        }
        assert_eq!(
            screen.handle_action(Action::Select),
            ViewOutcome::Email("mailto:support@plantoempowercms.com".to_string())
        );
        screen.handle_action(Action::NavigateDown);
        assert_eq!(
            screen.handle_action(Action::Select),
            ViewOutcome::Dial("tel:+1234567890".to_string())
        );
        screen.handle_action(Action::NavigateDown);
        assert_eq!(
            screen.handle_action(Action::Select),
            ViewOutcome::OpenUrl("https://www.plantoempowercms.com".to_string())
        );
    }

    #[test]
    fn test_up_from_top_wraps_to_website() {
        let mut screen = HelpScreen::new();
        screen.handle_action(Action::NavigateUp);
        assert!(matches!(
            screen.handle_action(Action::Select),
            ViewOutcome::OpenUrl(_)
        ));
    }
}
