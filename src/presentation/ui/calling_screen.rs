//! Calling view: walks the caller queue and drives the call session for
//! the contact on screen.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tokio::sync::mpsc;
use tracing::debug;

use super::call_form_view::{CallFormView, FormOutcome};
use super::outcome::ViewOutcome;
use crate::application::services::{CallSessionDriver, CallerQueue, QueueMove};
use crate::domain::entities::{CallDirection, ContactRecord, PastOutcome, PreviousCall};
use crate::domain::keybinding::{Action, KeyScope};
use crate::domain::ports::DirectoryPort;
use crate::domain::{AlertLevel, CallStatus, Screen, SessionEvent};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Dialog, DialogButton, DialogIntent};

const fn direction_color(direction: CallDirection) -> Color {
    match direction {
        CallDirection::Incoming => Color::Green,
        CallDirection::Outgoing => Color::Blue,
        CallDirection::Missed => Color::Red,
    }
}

const fn outcome_color(outcome: PastOutcome) -> Color {
    match outcome {
        PastOutcome::Interested => Color::Green,
        PastOutcome::NotInterested => Color::Red,
        PastOutcome::Callback => Color::Yellow,
        PastOutcome::NoResponse => Color::DarkGray,
    }
}

const fn status_color(status: CallStatus) -> Color {
    match status {
        CallStatus::Idle => Color::Gray,
        CallStatus::Dialing => Color::Yellow,
        CallStatus::Ringing => Color::Cyan,
        CallStatus::Connected => Color::Green,
    }
}

pub struct CallingScreen {
    queue: CallerQueue,
    driver: CallSessionDriver,
    directory: Arc<dyn DirectoryPort>,
    history_open: bool,
    history_cursor: usize,
    expanded: Option<usize>,
    form: Option<CallFormView>,
    theme: Theme,
}

impl CallingScreen {
    #[must_use]
    pub fn new(
        directory: Arc<dyn DirectoryPort>,
        events_tx: mpsc::UnboundedSender<SessionEvent>,
        theme: Theme,
    ) -> Self {
        let queue = CallerQueue::new(directory.contacts().to_vec());
        debug!(callers = queue.len(), "Calling view opened");
        Self {
            queue,
            driver: CallSessionDriver::new(events_tx),
            directory,
            history_open: false,
            history_cursor: 0,
            expanded: None,
            form: None,
            theme,
        }
    }

    #[must_use]
    pub const fn driver(&self) -> &CallSessionDriver {
        &self.driver
    }

    #[must_use]
    pub const fn queue(&self) -> &CallerQueue {
        &self.queue
    }

    #[must_use]
    pub const fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    #[must_use]
    pub fn scope(&self) -> KeyScope {
        if self.form.is_some() {
            KeyScope::CallForm
        } else {
            KeyScope::Calling
        }
    }

    #[must_use]
    pub fn captures_text(&self) -> bool {
        self.form.as_ref().is_some_and(CallFormView::is_editing)
    }

    fn history(&self) -> &[PreviousCall] {
        match self.queue.current() {
            Some(contact) => self.directory.history_for(&contact.name),
            None => &[],
        }
    }

    pub fn handle_session_event(&mut self, event: SessionEvent) -> bool {
        self.driver.handle(event)
    }

    /// Back to the first caller with an idle session.
    pub fn restart(&mut self) {
        self.driver.reset();
        self.queue.restart();
        self.collapse_history();
    }

    fn collapse_history(&mut self) {
        self.expanded = None;
        self.history_cursor = 0;
    }

    fn after_move(&mut self) {
        self.driver.reset();
        self.collapse_history();
    }

    pub fn handle_action(&mut self, action: Action) -> ViewOutcome {
        if let Some(form) = self.form.as_mut() {
            let outcome = form.handle_action(action);
            return self.apply_form_outcome(outcome);
        }

        match action {
            Action::StartCall => self.start_call(),
            Action::EndCall => {
                if self.driver.is_active() {
                    self.driver.end();
                }
                ViewOutcome::Handled
            }
            Action::NextCaller => match self.queue.advance() {
                QueueMove::Moved => {
                    self.after_move();
                    ViewOutcome::Handled
                }
                QueueMove::Exhausted => {
                    self.after_move();
                    ViewOutcome::Dialog(Dialog::new(
                        "No More Callers",
                        "You have reached the end of the caller list.",
                        vec![
                            DialogButton::confirm("Close", DialogIntent::CloseCalling),
                            DialogButton::confirm("Start Over", DialogIntent::RestartQueue),
                        ],
                    ))
                }
            },
            Action::PreviousCaller => {
                if self.queue.previous() {
                    self.after_move();
                }
                ViewOutcome::Handled
            }
            Action::OpenCallForm => {
                if self.queue.is_empty() {
                    return ViewOutcome::Ignored;
                }
                self.form = Some(CallFormView::new(&self.theme));
                ViewOutcome::Handled
            }
            Action::ToggleHistory => {
                self.history_open = !self.history_open;
                self.collapse_history();
                ViewOutcome::Handled
            }
            Action::NavigateDown if self.history_open => {
                let len = self.history().len();
                if len > 0 {
                    self.history_cursor = (self.history_cursor + 1) % len;
                }
                ViewOutcome::Handled
            }
            Action::NavigateUp if self.history_open => {
                let len = self.history().len();
                if len > 0 {
                    self.history_cursor = self.history_cursor.checked_sub(1).unwrap_or(len - 1);
                }
                ViewOutcome::Handled
            }
            Action::Select if self.history_open => {
                if self.history_cursor < self.history().len() {
                    self.expanded = if self.expanded == Some(self.history_cursor) {
                        None
                    } else {
                        Some(self.history_cursor)
                    };
                }
                ViewOutcome::Handled
            }
            Action::Cancel => ViewOutcome::Navigate(Screen::Dashboard),
            _ => ViewOutcome::Ignored,
        }
    }

    pub fn handle_text_key(&mut self, key: KeyEvent) -> ViewOutcome {
        match self.form.as_mut() {
            Some(form) => {
                let outcome = form.handle_text_key(key);
                self.apply_form_outcome(outcome)
            }
            None => ViewOutcome::Ignored,
        }
    }

    fn start_call(&mut self) -> ViewOutcome {
        let Some(contact) = self.queue.current() else {
            return ViewOutcome::Alert {
                level: AlertLevel::Warn,
                title: "No Callers".to_string(),
                message: "There is nobody left to call.".to_string(),
            };
        };
        if self.driver.is_active() {
            return ViewOutcome::Handled;
        }
        let uri = contact.dial_uri();
        self.driver.start();
        ViewOutcome::Dial(uri)
    }

    fn apply_form_outcome(&mut self, outcome: FormOutcome) -> ViewOutcome {
        match outcome {
            FormOutcome::Handled => ViewOutcome::Handled,
            FormOutcome::Ignored => ViewOutcome::Ignored,
            FormOutcome::Close => {
                self.form = None;
                ViewOutcome::Handled
            }
            FormOutcome::Invalid(e) => ViewOutcome::Dialog(Dialog::notice("Error", e.to_string())),
            FormOutcome::Submitted(record) => {
                self.form = None;
                let call_secs = self.driver.end();
                let contact = self
                    .queue
                    .current()
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                ViewOutcome::CallSubmitted {
                    contact,
                    call_secs,
                    record,
                }
            }
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let theme = &self.theme;
        let Some(contact) = self.queue.current() else {
            Paragraph::new("No callers in the directory.")
                .style(theme.dimmed_style)
                .render(area, buf);
            return;
        };

        let [main_area, history_area] = if self.history_open {
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
        } else {
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(0)]).areas(area)
        };

        self.render_contact(contact, main_area, buf, theme);
        if self.history_open {
            self.render_history(history_area, buf, theme);
        }

        if let Some(form) = &self.form {
            let [popup] = Layout::horizontal([Constraint::Percentage(90)])
                .flex(Flex::Center)
                .areas(area);
            let [popup] = Layout::vertical([Constraint::Percentage(90)])
                .flex(Flex::Center)
                .areas(popup);
            form.render(popup, buf, theme, &contact.name);
        }
    }

    fn render_contact(&self, contact: &ContactRecord, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                format!(" {} ", self.queue.position_label()),
                theme.title_style,
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let session = self.driver.session();
        let status = session.status();
        let label = |text: &str| Span::styled(format!("{text:<10}"), theme.dimmed_style);

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", contact.initials()), theme.badge_style),
                Span::raw("  "),
                Span::styled(contact.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(contact.title_line(), theme.dimmed_style)),
            Line::default(),
            Line::from(vec![label("Phone"), Span::raw(contact.phone.clone())]),
            Line::from(vec![label("Email"), Span::raw(contact.email.clone())]),
            Line::from(vec![label("Address"), Span::raw(contact.address.clone())]),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    status.label(),
                    Style::default()
                        .fg(status_color(status))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    session.formatted_elapsed(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(" Previous Calls ", theme.title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let history = self.history();
        if history.is_empty() {
            Paragraph::new("No previous calls with this contact")
                .style(theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        for (i, call) in history.iter().enumerate() {
            let row_style = if i == self.history_cursor {
                theme.selection_style
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", call.direction.arrow()),
                    Style::default().fg(direction_color(call.direction)),
                ),
                Span::styled(format!("{}  {}", call.when(), call.duration), row_style),
                Span::raw("  "),
                Span::styled(
                    call.outcome.label(),
                    Style::default().fg(outcome_color(call.outcome)),
                ),
            ]));
            if self.expanded == Some(i) {
                lines.push(Line::from(vec![
                    Span::styled("   Type: ", theme.dimmed_style),
                    Span::raw(call.direction.label()),
                    Span::styled("  Status: ", theme.dimmed_style),
                    Span::raw(call.status.label()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("   Notes: ", theme.dimmed_style),
                    Span::raw(call.notes.clone()),
                ]));
                if let Some(date) = &call.follow_up_date {
                    lines.push(Line::from(vec![
                        Span::styled("   Follow-up: ", theme.dimmed_style),
                        Span::raw(date.clone()),
                    ]));
                }
            }
        }
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}
