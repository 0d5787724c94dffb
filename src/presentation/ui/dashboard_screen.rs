//! Dashboard: start-calling entry point, metric cards and quick actions.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::help_screen::SUPPORT_OPTIONS;
use super::outcome::ViewOutcome;
use crate::application::services::SessionLog;
use crate::domain::Screen;
use crate::domain::keybinding::{Action, KeyScope};
use crate::presentation::theme::Theme;

const METRICS: [(&str, u32); 5] = [
    ("Total Calls", 127),
    ("My Tasks", 8),
    ("My Leads", 45),
    ("My Follows", 23),
    ("My Report", 12),
];

const DASHBOARD_FAQ: [(&str, &str); 6] = [
    (
        "How do I start making calls?",
        "Simply press 'Start Calling' on the dashboard to begin your calling session. Make sure you have a stable internet connection for the best experience.",
    ),
    (
        "What data is collected during calls?",
        "We collect basic call metrics like duration, outcome, and notes for performance tracking. Personal conversation content is not stored unless explicitly saved by the user.",
    ),
    (
        "How do I manage my leads?",
        "Access your leads through the 'My Leads' card on the dashboard. You can add, edit, and track lead status, set follow-up reminders, and view interaction history.",
    ),
    (
        "Can I export my call reports?",
        "Yes, you can export your call reports and analytics from the 'My Report' section. Data can be exported in CSV or PDF format.",
    ),
    (
        "How do I update my profile information?",
        "Navigate to Settings > Profile to update your personal information, contact details, and calling preferences.",
    ),
    (
        "What should I do if I encounter technical issues?",
        "If you experience technical difficulties, please check your internet connection first. For persistent issues, contact our support team through the Help section.",
    ),
];

const DISCLAIMER: [(&str, &str); 4] = [
    (
        "Service Terms",
        "Plan to Empower CMS is a customer management system designed to facilitate business communications. Users are responsible for complying with all applicable laws and regulations when using this service.",
    ),
    (
        "Call Recording & Privacy",
        "All calls may be recorded for quality assurance and training purposes. Users must obtain proper consent before recording calls where required by law. Personal data is handled according to our Privacy Policy. Users are responsible for protecting customer information.",
    ),
    (
        "Limitation of Liability",
        "Plan to Empower CMS is provided \"as is\" without warranties. We are not liable for any damages arising from the use of this service, including but not limited to business losses, data loss, or communication failures.",
    ),
    (
        "Compliance",
        "Users must comply with telemarketing laws, do-not-call registries, and other applicable regulations in their jurisdiction. Misuse of this service may result in account suspension.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    StartCalling,
    Faq,
    Disclaimer,
    Support,
}

impl MenuItem {
    const ALL: [Self; 4] = [Self::StartCalling, Self::Faq, Self::Disclaimer, Self::Support];

    const fn label(self) -> &'static str {
        match self {
            Self::StartCalling => "Start Calling",
            Self::Faq => "FAQ",
            Self::Disclaimer => "Disclaimer",
            Self::Support => "Contact Support",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardOverlay {
    Faq { selected: usize, expanded: Option<usize> },
    Disclaimer,
    Support { selected: usize },
}

#[derive(Debug, Default)]
pub struct DashboardScreen {
    selected: usize,
    overlay: Option<DashboardOverlay>,
}

impl DashboardScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: 0,
            overlay: None,
        }
    }

    #[must_use]
    pub const fn scope(&self) -> KeyScope {
        KeyScope::Dashboard
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<DashboardOverlay> {
        self.overlay
    }

    pub fn handle_action(&mut self, action: Action) -> ViewOutcome {
        if let Some(overlay) = self.overlay {
            return self.handle_overlay(overlay, action);
        }

        match action {
            Action::StartCall => ViewOutcome::Navigate(Screen::Calls),
            Action::NavigateDown | Action::NavigateRight | Action::FocusNext => {
                self.selected = (self.selected + 1) % MenuItem::ALL.len();
                ViewOutcome::Handled
            }
            Action::NavigateUp | Action::NavigateLeft | Action::FocusPrevious => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(MenuItem::ALL.len() - 1);
                ViewOutcome::Handled
            }
            Action::Select => match MenuItem::ALL[self.selected] {
                MenuItem::StartCalling => ViewOutcome::Navigate(Screen::Calls),
                MenuItem::Faq => self.open(DashboardOverlay::Faq {
                    selected: 0,
                    expanded: None,
                }),
                MenuItem::Disclaimer => self.open(DashboardOverlay::Disclaimer),
                MenuItem::Support => self.open(DashboardOverlay::Support { selected: 0 }),
            },
            _ => ViewOutcome::Ignored,
        }
    }

    fn open(&mut self, overlay: DashboardOverlay) -> ViewOutcome {
        self.overlay = Some(overlay);
        ViewOutcome::Handled
    }

    fn handle_overlay(&mut self, overlay: DashboardOverlay, action: Action) -> ViewOutcome {
        if action == Action::Cancel {
            self.overlay = None;
            return ViewOutcome::Handled;
        }

        match overlay {
            DashboardOverlay::Faq { selected, expanded } => {
                let next = match action {
                    Action::NavigateDown => (selected + 1) % DASHBOARD_FAQ.len(),
                    Action::NavigateUp => {
                        selected.checked_sub(1).unwrap_or(DASHBOARD_FAQ.len() - 1)
                    }
                    Action::Select => {
                        let expanded = if expanded == Some(selected) {
                            None
                        } else {
                            Some(selected)
                        };
                        self.overlay = Some(DashboardOverlay::Faq { selected, expanded });
                        return ViewOutcome::Handled;
                    }
                    _ => return ViewOutcome::Handled,
                };
                self.overlay = Some(DashboardOverlay::Faq {
                    selected: next,
                    expanded,
                });
                ViewOutcome::Handled
            }
            DashboardOverlay::Disclaimer => {
                if action == Action::Select {
                    self.overlay = None;
                }
                ViewOutcome::Handled
            }
            DashboardOverlay::Support { selected } => match action {
                Action::NavigateDown => {
                    self.overlay = Some(DashboardOverlay::Support {
                        selected: (selected + 1) % SUPPORT_OPTIONS.len(),
                    });
                    ViewOutcome::Handled
                }
                Action::NavigateUp => {
                    self.overlay = Some(DashboardOverlay::Support {
                        selected: selected.checked_sub(1).unwrap_or(SUPPORT_OPTIONS.len() - 1),
                    });
                    ViewOutcome::Handled
                }
                Action::Select => SUPPORT_OPTIONS[selected].outcome(),
                _ => ViewOutcome::Handled,
            },
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, agent: &str, log: &SessionLog) {
        let [greeting_area, cards_area, menu_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(format!("Welcome back, {agent}"), theme.title_style)),
            Line::from(Span::styled("Here is your calling overview", theme.dimmed_style)),
        ])
        .render(greeting_area, buf);

        let session_cards = [
            ("This Session", log.len().to_string()),
            ("Connected", log.connected_count().to_string()),
        ];
        let cards: Vec<(&str, String)> = METRICS
            .iter()
            .map(|(title, value)| (*title, value.to_string()))
            .chain(session_cards)
            .collect();

        let rows = Layout::vertical([Constraint::Length(4), Constraint::Length(4)]).split(cards_area);
        for (row, chunk) in rows.iter().zip(cards.chunks(4)) {
            let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(*row);
            for (col, (title, value)) in cols.iter().zip(chunk) {
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        value.clone(),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(*title, theme.dimmed_style)),
                ])
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                )
                .render(*col, buf);
            }
        }

        let menu: Vec<Line> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.selected {
                    theme.selection_style
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("  {}  ", item.label()), style))
            })
            .collect();
        Paragraph::new(menu)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Quick Actions ", theme.title_style)),
            )
            .render(menu_area, buf);

        if let Some(overlay) = self.overlay {
            render_overlay(overlay, area, buf, theme);
        }
    }
}

fn render_overlay(overlay: DashboardOverlay, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [popup] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(popup);
    Clear.render(popup, buf);

    let (title, lines) = match overlay {
        DashboardOverlay::Faq { selected, expanded } => {
            let mut lines = Vec::new();
            for (i, (question, answer)) in DASHBOARD_FAQ.iter().enumerate() {
                let style = if i == selected {
                    theme.selection_style
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(Span::styled(*question, style)));
                if expanded == Some(i) {
                    lines.push(Line::from(Span::styled(*answer, theme.dimmed_style)));
                }
                lines.push(Line::default());
            }
            (" Frequently Asked Questions ", lines)
        }
        DashboardOverlay::Disclaimer => {
            let mut lines = Vec::new();
            for (heading, body) in DISCLAIMER {
                lines.push(Line::from(Span::styled(heading, theme.title_style)));
                lines.push(Line::from(body));
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                "[ I Understand ]",
                theme.selection_style,
            )));
            (" Important Disclaimer ", lines)
        }
        DashboardOverlay::Support { selected } => {
            let mut lines = vec![
                Line::from(
                    "Need help? Get in touch with our support team through any of the following methods:",
                ),
                Line::default(),
            ];
            for (i, option) in SUPPORT_OPTIONS.iter().enumerate() {
                let style = if i == selected {
                    theme.selection_style
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(Span::styled(option.title, style)));
                lines.push(Line::from(format!("  {}", option.detail)));
                lines.push(Line::from(Span::styled(
                    format!("  {}", option.note),
                    theme.dimmed_style,
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "For urgent issues, please call our support line directly.",
                theme.dimmed_style,
            )));
            (" Contact Support ", lines)
        }
    };

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent))
                .title(Span::styled(title, theme.title_style)),
        )
        .render(popup, buf);
}
