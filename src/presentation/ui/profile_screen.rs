//! Agent profile: view, edit and sync with the candidate API.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::outcome::ViewOutcome;
use crate::domain::AlertLevel;
use crate::domain::entities::{ProfileStatus, ProfileUpdate, UserProfile, initials_of};
use crate::domain::keybinding::{Action, KeyScope};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

const NAME: usize = 0;
const EMAIL: usize = 1;
const MOBILE: usize = 2;

/// Network state of the profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSync {
    Idle,
    Loading,
    Saving,
}

pub struct ProfileScreen {
    inputs: [TextInput; 3],
    focus: usize,
    status: ProfileStatus,
    editing: bool,
    sync: ProfileSync,
}

impl ProfileScreen {
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        let input = |label: &str| TextInput::new(label).accent(theme.accent);
        Self {
            inputs: [
                input("Full Name").placeholder("Enter your full name"),
                input("Email").placeholder("Enter your email"),
                input("Mobile").placeholder("Enter your mobile number"),
            ],
            focus: NAME,
            status: ProfileStatus::default(),
            editing: false,
            sync: ProfileSync::Idle,
        }
    }

    #[must_use]
    pub const fn scope(&self) -> KeyScope {
        KeyScope::Profile
    }

    #[must_use]
    pub const fn captures_text(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub const fn sync(&self) -> ProfileSync {
        self.sync
    }

    /// Marks a fetch as outstanding.
    pub fn begin_load(&mut self) {
        self.sync = ProfileSync::Loading;
    }

    pub fn loaded(&mut self) {
        if self.sync == ProfileSync::Loading {
            self.sync = ProfileSync::Idle;
        }
    }

    /// The save went through: leave edit mode.
    pub fn saved(&mut self) {
        self.sync = ProfileSync::Idle;
        self.editing = false;
        self.set_focus(NAME);
        for input in &mut self.inputs {
            input.set_focused(false);
        }
    }

    /// The save failed: keep the edits on screen.
    pub fn save_failed(&mut self) {
        self.sync = ProfileSync::Idle;
    }

    /// Edited fields as they would be sent.
    #[must_use]
    pub fn draft(&self) -> ProfileUpdate {
        ProfileUpdate {
            full_name: self.inputs[NAME].value().to_string(),
            email: self.inputs[EMAIL].value().to_string(),
            mobile: self.inputs[MOBILE].value().to_string(),
            status: self.status,
        }
    }

    fn begin_edit(&mut self, profile: &UserProfile) {
        self.inputs[NAME].set_value(profile.full_name());
        self.inputs[EMAIL].set_value(profile.email());
        self.inputs[MOBILE].set_value(profile.mobile());
        self.status = profile.status();
        self.editing = true;
        self.set_focus(NAME);
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(self.editing && i == index);
        }
    }

    fn save(&mut self, profile: &UserProfile) -> ViewOutcome {
        if self.sync == ProfileSync::Saving {
            return ViewOutcome::Handled;
        }
        let update = self.draft();
        if let Err(e) = update.validate() {
            return ViewOutcome::Alert {
                level: AlertLevel::Error,
                title: "Error".to_string(),
                message: e.to_string(),
            };
        }
        self.sync = ProfileSync::Saving;
        ViewOutcome::SaveProfile {
            current: profile.clone(),
            update,
        }
    }

    pub fn handle_action(&mut self, action: Action, profile: &UserProfile) -> ViewOutcome {
        match action {
            Action::Edit if self.sync == ProfileSync::Idle => {
                self.begin_edit(profile);
                ViewOutcome::Handled
            }
            Action::Refresh if self.sync == ProfileSync::Idle => {
                self.begin_load();
                ViewOutcome::FetchProfile
            }
            Action::Edit | Action::Refresh => ViewOutcome::Handled,
            _ => ViewOutcome::Ignored,
        }
    }

    /// Keys while the edit form is open.
    pub fn handle_text_key(&mut self, key: KeyEvent, profile: &UserProfile) -> ViewOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                self.set_focus(NAME);
            }
            KeyCode::Char('s') if ctrl => return self.save(profile),
            KeyCode::Char('t') if ctrl => self.status = self.status.cycle(),
            KeyCode::Tab | KeyCode::Down => self.set_focus((self.focus + 1) % self.inputs.len()),
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus((self.focus + self.inputs.len() - 1) % self.inputs.len());
            }
            KeyCode::Enter => {
                if self.focus + 1 == self.inputs.len() {
                    return self.save(profile);
                }
                self.set_focus(self.focus + 1);
            }
            _ => {
                self.inputs[self.focus].handle_key(key);
            }
        }
        ViewOutcome::Handled
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, profile: &UserProfile) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Profile ", theme.title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let [card_area, body_area, hint_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let status = if self.editing { self.status } else { profile.status() };
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {} ", initials_of(profile.full_name())), theme.badge_style),
                Span::raw("  "),
                Span::styled(
                    profile.full_name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(format!("      {}", profile.role()), theme.dimmed_style)),
            Line::from(vec![
                Span::styled("      Status: ", theme.dimmed_style),
                Span::styled(status.label(), Style::default().fg(theme.accent)),
            ]),
        ])
        .render(card_area, buf);

        if self.editing {
            let rows = Layout::vertical([Constraint::Length(3); 3]).split(body_area);
            for (input, row) in self.inputs.iter().zip(rows.iter()) {
                input.render(*row, buf);
            }
        } else {
            let label = |text: &'static str| Span::styled(format!("{text:<10}"), theme.dimmed_style);
            Paragraph::new(vec![
                Line::from(vec![label("Email"), Span::raw(profile.email().to_string())]),
                Line::from(vec![label("Mobile"), Span::raw(profile.mobile().to_string())]),
                Line::from(vec![label("Role"), Span::raw(profile.role().to_string())]),
            ])
            .render(body_area, buf);
        }

        let hint = match (self.sync, self.editing) {
            (ProfileSync::Loading, _) => "Loading profile...",
            (ProfileSync::Saving, _) => "Saving...",
            (ProfileSync::Idle, true) => "Ctrl+S save  Ctrl+T status  Tab next field  Esc cancel",
            (ProfileSync::Idle, false) => "",
        };
        Paragraph::new(hint).style(theme.dimmed_style).render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn profile() -> UserProfile {
        UserProfile::new(
            "u-1",
            "Priya Nair",
            "priya@example.com",
            "+1 555 0100",
            ProfileStatus::Available,
            "Caller",
        )
    }

    #[test]
    fn test_edit_prefills_and_saves_changes() {
        let mut screen = ProfileScreen::new(&Theme::default());
        let profile = profile();
        screen.handle_action(Action::Edit, &profile);
        assert!(screen.captures_text());

        for c in " K".chars() {
            screen.handle_text_key(key(KeyCode::Char(c)), &profile);
        }
        screen.handle_text_key(ctrl('t'), &profile);

        let ViewOutcome::SaveProfile { current, update } = screen.handle_text_key(ctrl('s'), &profile)
        else {
            panic!("expected save");
        };
        assert_eq!(current, profile);
        assert_eq!(update.full_name, "Priya Nair K");
        assert_eq!(update.status, ProfileStatus::Busy);
        assert_eq!(screen.sync(), ProfileSync::Saving);

        screen.saved();
        assert!(!screen.is_editing());
        assert_eq!(screen.sync(), ProfileSync::Idle);
    }

    #[test]
    fn test_invalid_email_alerts_without_saving() {
        let mut screen = ProfileScreen::new(&Theme::default());
        let profile = profile();
        screen.handle_action(Action::Edit, &profile);
        screen.handle_text_key(key(KeyCode::Tab), &profile);
        for _ in 0.."priya@example.com".len() {
            screen.handle_text_key(key(KeyCode::Backspace), &profile);
        }

        let outcome = screen.handle_text_key(ctrl('s'), &profile);
        assert_eq!(
            outcome,
            ViewOutcome::Alert {
                level: AlertLevel::Error,
                title: "Error".to_string(),
                message: "Please enter a valid email address".to_string(),
            }
        );
        assert_eq!(screen.sync(), ProfileSync::Idle);
        assert!(screen.is_editing());
    }

    #[test]
    fn test_failed_save_keeps_edits() {
        let mut screen = ProfileScreen::new(&Theme::default());
        let profile = profile();
        screen.handle_action(Action::Edit, &profile);
        screen.handle_text_key(ctrl('s'), &profile);
        screen.save_failed();
        assert!(screen.is_editing());
        assert_eq!(screen.draft().full_name, "Priya Nair");
    }

    #[test]
    fn test_refresh_requests_fetch_once() {
        let mut screen = ProfileScreen::new(&Theme::default());
        let profile = profile();
        assert_eq!(screen.handle_action(Action::Refresh, &profile), ViewOutcome::FetchProfile);
        assert_eq!(screen.handle_action(Action::Refresh, &profile), ViewOutcome::Handled);
        screen.loaded();
        assert_eq!(screen.sync(), ProfileSync::Idle);
    }

    #[test]
    fn test_escape_discards_edit() {
        let mut screen = ProfileScreen::new(&Theme::default());
        let profile = profile();
        screen.handle_action(Action::Edit, &profile);
        screen.handle_text_key(key(KeyCode::Esc), &profile);
        assert!(!screen.captures_text());
    }
}
