//! Sign-in screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Input,
    Validating,
    Error,
    Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    DeleteToken,
    Quit,
}

/// Token entry shown until an agent is signed in.
pub struct LoginScreen {
    token_input: TextInput,
    state: LoginState,
    message: Option<String>,
    persist_token: bool,
    accent: Color,
}

impl LoginScreen {
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        let mut token_input = TextInput::new("Bearer token")
            .password()
            .placeholder("Paste your access token here...")
            .accent(theme.accent);
        token_input.set_focused(true);

        Self {
            token_input,
            state: LoginState::Input,
            message: None,
            persist_token: true,
            accent: theme.accent,
        }
    }

    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        let value = self.token_input.value();
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    #[must_use]
    pub const fn should_persist(&self) -> bool {
        self.persist_token
    }

    pub fn set_validating(&mut self) {
        self.state = LoginState::Validating;
        self.message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Error;
        self.message = Some(message.into());
    }

    /// Informational line, e.g. after signing out.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.state = LoginState::Notice;
        self.message = Some(message.into());
    }

    pub fn reset(&mut self) {
        self.state = LoginState::Input;
        self.message = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Validating {
            return LoginAction::None;
        }

        if matches!(self.state, LoginState::Error | LoginState::Notice) {
            self.reset();
            if key.code != KeyCode::Esc {
                return LoginAction::None;
            }
        }

        match key.code {
            KeyCode::Esc => return LoginAction::Quit,
            KeyCode::Enter => {
                if self.token().is_some() {
                    return LoginAction::Submit;
                }
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::ALT) => {
                return LoginAction::DeleteToken;
            }
            KeyCode::Tab => {
                self.persist_token = !self.persist_token;
            }
            _ => {
                self.token_input.handle_key(key);
            }
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(" dialdesk ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let areas = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas::<7>(inner);

        Paragraph::new("Sign in with your agent access token")
            .style(Style::default().fg(Color::White))
            .render(areas[0], buf);

        (&self.token_input).render(areas[2], buf);

        let checkbox = if self.persist_token { "[x]" } else { "[ ]" };
        Paragraph::new(Line::from(vec![
            Span::styled(checkbox, Style::default().fg(self.accent)),
            Span::raw(" Remember me (Tab to toggle)"),
        ]))
        .render(areas[4], buf);

        let hint = Style::default().fg(Color::DarkGray);
        let status = match self.state {
            LoginState::Input => Line::from(vec![
                Span::styled("Enter: Sign in", hint),
                Span::raw(" | "),
                Span::styled("Esc: Quit", hint),
                Span::raw(" | "),
                Span::styled("Alt+D: Forget saved token", hint),
            ]),
            LoginState::Validating => Line::from(Span::styled(
                "Signing in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            LoginState::Error => {
                let msg = self.message.as_deref().unwrap_or("Unknown error");
                Line::from(Span::styled(
                    format!("Error: {msg}"),
                    Style::default().fg(Color::Red),
                ))
            }
            LoginState::Notice => Line::from(Span::styled(
                self.message.clone().unwrap_or_default(),
                Style::default().fg(self.accent),
            )),
        };
        Paragraph::new(status).render(areas[6], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_state() {
        let screen = LoginScreen::default();
        assert_eq!(screen.state(), LoginState::Input);
        assert!(screen.token().is_none());
        assert!(screen.should_persist());
    }

    #[test]
    fn test_typing() {
        let mut screen = LoginScreen::default();
        for c in "abc123".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(screen.token(), Some("abc123"));
    }

    #[test]
    fn test_toggle_persist() {
        let mut screen = LoginScreen::default();
        screen.handle_key(key(KeyCode::Tab));
        assert!(!screen.should_persist());
        screen.handle_key(key(KeyCode::Tab));
        assert!(screen.should_persist());
    }

    #[test]
    fn test_submit_requires_token() {
        let mut screen = LoginScreen::default();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        screen.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        screen.handle_key(key(KeyCode::Char('x')));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_error_is_dismissed_by_next_key() {
        let mut screen = LoginScreen::default();
        screen.set_error("Session expired. Please login again.");
        assert_eq!(screen.handle_key(key(KeyCode::Char('a'))), LoginAction::None);
        assert_eq!(screen.state(), LoginState::Input);
        assert!(screen.token().is_none());
    }

    #[test]
    fn test_alt_d_and_esc() {
        let mut screen = LoginScreen::default();
        let event = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::ALT);
        assert_eq!(screen.handle_key(event), LoginAction::DeleteToken);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), LoginAction::Quit);
    }

    #[test]
    fn test_ignores_keys_while_validating() {
        let mut screen = LoginScreen::default();
        screen.set_validating();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), LoginAction::None);
    }
}
