//! Keyboard front-end for [`CallDetailsForm`].

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::application::services::{CallDetailsForm, FieldKind, FormField, FormStep};
use crate::domain::FormError;
use crate::domain::entities::{CallOutcomeRecord, NotConnectedReason};
use crate::domain::keybinding::Action;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Handled,
    Ignored,
    Close,
    Invalid(FormError),
    Submitted(CallOutcomeRecord),
}

struct FieldEditor {
    field: FormField,
    input: TextInput,
}

pub struct CallFormView {
    form: CallDetailsForm,
    cursor: usize,
    editor: Option<FieldEditor>,
    accent: Color,
}

impl CallFormView {
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        Self {
            form: CallDetailsForm::new(),
            cursor: 0,
            editor: None,
            accent: theme.accent,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &CallDetailsForm {
        &self.form
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    fn rows(&self) -> usize {
        match self.form.step() {
            FormStep::Connection => 2,
            FormStep::NotConnected => NotConnectedReason::ALL.len(),
            FormStep::Connected => self.form.visible_fields().len(),
        }
    }

    fn focused_field(&self) -> Option<FormField> {
        if self.form.step() == FormStep::Connected {
            self.form.visible_fields().get(self.cursor).copied()
        } else {
            None
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.rows().saturating_sub(1));
    }

    pub fn handle_action(&mut self, action: Action) -> FormOutcome {
        match action {
            Action::NavigateDown | Action::FocusNext => {
                self.cursor = (self.cursor + 1) % self.rows().max(1);
                FormOutcome::Handled
            }
            Action::NavigateUp | Action::FocusPrevious => {
                self.cursor = self
                    .cursor
                    .checked_sub(1)
                    .unwrap_or(self.rows().saturating_sub(1));
                FormOutcome::Handled
            }
            Action::NavigateLeft | Action::NavigateRight
                if self.focused_field() == Some(FormField::Interest) =>
            {
                self.form.set_interest(action == Action::NavigateLeft);
                self.clamp_cursor();
                FormOutcome::Handled
            }
            Action::Select => self.select(),
            Action::SubmitForm => match self.form.submit(Utc::now()) {
                Ok(record) => {
                    self.cursor = 0;
                    FormOutcome::Submitted(record)
                }
                Err(e) => FormOutcome::Invalid(e),
            },
            Action::Cancel => {
                if self.form.step() == FormStep::Connection {
                    FormOutcome::Close
                } else {
                    self.form.back();
                    self.cursor = 0;
                    FormOutcome::Handled
                }
            }
            _ => FormOutcome::Ignored,
        }
    }

    fn select(&mut self) -> FormOutcome {
        match self.form.step() {
            FormStep::Connection => {
                self.form.choose_connection(self.cursor == 0);
                self.cursor = 0;
            }
            FormStep::NotConnected => {
                if let Some(reason) = NotConnectedReason::ALL.get(self.cursor) {
                    self.form.select_reason(*reason);
                }
            }
            FormStep::Connected => {
                let Some(field) = self.focused_field() else {
                    return FormOutcome::Ignored;
                };
                match field.kind() {
                    FieldKind::Choice => {
                        let interested = self.form.flag(field) != Some(true);
                        self.form.set_interest(interested);
                    }
                    FieldKind::Toggle => self.form.toggle(field),
                    FieldKind::Text => {
                        let mut input = TextInput::new(field.label())
                            .placeholder(field.placeholder())
                            .accent(self.accent);
                        input.set_value(self.form.text(field).unwrap_or_default());
                        input.set_focused(true);
                        self.editor = Some(FieldEditor { field, input });
                    }
                }
                self.clamp_cursor();
            }
        }
        FormOutcome::Handled
    }

    /// Keys while a text field is open. Enter, Esc and Tab close the
    /// editor; everything else edits the value in place.
    pub fn handle_text_key(&mut self, key: KeyEvent) -> FormOutcome {
        let Some(editor) = self.editor.as_mut() else {
            return FormOutcome::Ignored;
        };

        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.editor = None;
            }
            KeyCode::Tab => {
                self.editor = None;
                self.clamp_cursor();
                return self.handle_action(Action::FocusNext);
            }
            _ => {
                if editor.input.handle_key(key) {
                    let field = editor.field;
                    let value = editor.input.value().to_string();
                    self.form.set_text(field, value);
                }
            }
        }
        self.clamp_cursor();
        FormOutcome::Handled
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, contact: &str) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .title(Span::styled(format!(" Call Details: {contact} "), theme.title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let editor_height = if self.editor.is_some() { 3 } else { 0 };
        let [body, editor_area, hint_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(editor_height),
            Constraint::Length(1),
        ])
        .areas(inner);

        let lines = match self.form.step() {
            FormStep::Connection => self.connection_lines(theme),
            FormStep::NotConnected => self.reason_lines(theme),
            FormStep::Connected => self.field_lines(theme),
        };
        Paragraph::new(lines).render(body, buf);

        if let Some(editor) = &self.editor {
            (&editor.input).render(editor_area, buf);
        }

        let hint = match self.form.step() {
            FormStep::Connection => "Enter: choose  Esc: close",
            _ => "Enter/Space: select  C-s: submit  Esc: back",
        };
        Paragraph::new(Span::styled(hint, theme.dimmed_style)).render(hint_area, buf);
    }

    fn row_style(&self, index: usize, theme: &Theme) -> Style {
        if index == self.cursor {
            theme.selection_style
        } else {
            Style::default()
        }
    }

    fn connection_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let chosen = self.form.draft().is_connected;
        let mark = |value: bool| if chosen == Some(value) { "(•)" } else { "( )" };
        vec![
            Line::from(Span::styled(
                "Was the call connected?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("{} Connected", mark(true)),
                self.row_style(0, theme),
            )),
            Line::from(Span::styled(
                format!("{} Not Connected", mark(false)),
                self.row_style(1, theme),
            )),
        ]
    }

    fn reason_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let chosen = self.form.draft().reason;
        let mut lines = vec![
            Line::from(Span::styled(
                "Reason for not connected",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for (i, reason) in NotConnectedReason::ALL.iter().enumerate() {
            let mark = if chosen == Some(*reason) { "(•)" } else { "( )" };
            lines.push(Line::from(Span::styled(
                format!("{mark} {}", reason.label()),
                self.row_style(i, theme),
            )));
        }
        lines
    }

    fn field_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.form
            .visible_fields()
            .into_iter()
            .enumerate()
            .map(|(i, field)| {
                let style = self.row_style(i, theme);
                match field.kind() {
                    FieldKind::Choice => {
                        let value = self.form.flag(field);
                        let yes = if value == Some(true) { "(•)" } else { "( )" };
                        let no = if value == Some(false) { "(•)" } else { "( )" };
                        Line::from(Span::styled(
                            format!("{}: {yes} Yes  {no} No", field.label()),
                            style,
                        ))
                    }
                    FieldKind::Toggle => {
                        let check = if self.form.flag(field) == Some(true) {
                            "[x]"
                        } else {
                            "[ ]"
                        };
                        Line::from(Span::styled(format!("{check} {}", field.label()), style))
                    }
                    FieldKind::Text => {
                        let value = self.form.text(field).unwrap_or_default();
                        let (shown, value_style) = if value.is_empty() {
                            (field.placeholder().to_string(), theme.dimmed_style)
                        } else {
                            (value.to_string(), Style::default())
                        };
                        Line::from(vec![
                            Span::styled(format!("{}: ", field.label()), style),
                            Span::styled(shown, value_style),
                        ])
                    }
                }
            })
            .collect()
    }
}
