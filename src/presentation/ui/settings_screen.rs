//! Settings list: local preference toggles and account shortcuts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::outcome::ViewOutcome;
use crate::domain::Screen;
use crate::domain::keybinding::{Action, KeyScope};
use crate::infrastructure::SettingsState;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Dialog, DialogButton, DialogIntent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Notifications,
    DarkMode,
    Location,
    Biometrics,
}

impl Toggle {
    const fn get(self, state: &SettingsState) -> bool {
        match self {
            Self::Notifications => state.notifications,
            Self::DarkMode => state.dark_mode,
            Self::Location => state.location,
            Self::Biometrics => state.biometrics,
        }
    }

    fn flip(self, state: &mut SettingsState) {
        match self {
            Self::Notifications => state.notifications = !state.notifications,
            Self::DarkMode => state.dark_mode = !state.dark_mode,
            Self::Location => state.location = !state.location,
            Self::Biometrics => state.biometrics = !state.biometrics,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    Open(Screen),
    Notice(&'static str, &'static str),
    Toggle(Toggle),
    SignOut,
}

struct Row {
    section: Option<&'static str>,
    title: &'static str,
    subtitle: &'static str,
    action: RowAction,
}

const ROWS: [Row; 11] = [
    Row {
        section: Some("Account"),
        title: "Profile",
        subtitle: "Manage your profile information",
        action: RowAction::Open(Screen::Profile),
    },
    Row {
        section: None,
        title: "Privacy",
        subtitle: "Control your privacy settings",
        action: RowAction::Notice("Privacy", "Navigate to privacy settings"),
    },
    Row {
        section: None,
        title: "Security",
        subtitle: "Password and security options",
        action: RowAction::Notice("Security", "Navigate to security settings"),
    },
    Row {
        section: Some("Preferences"),
        title: "Notifications",
        subtitle: "Push notifications and alerts",
        action: RowAction::Toggle(Toggle::Notifications),
    },
    Row {
        section: None,
        title: "Dark Mode",
        subtitle: "Enable dark theme",
        action: RowAction::Toggle(Toggle::DarkMode),
    },
    Row {
        section: None,
        title: "Location Services",
        subtitle: "Allow location access",
        action: RowAction::Toggle(Toggle::Location),
    },
    Row {
        section: None,
        title: "Biometric Authentication",
        subtitle: "Use fingerprint or face ID",
        action: RowAction::Toggle(Toggle::Biometrics),
    },
    Row {
        section: Some("App Settings"),
        title: "Language",
        subtitle: "English",
        action: RowAction::Notice("Language", "Select your preferred language"),
    },
    Row {
        section: None,
        title: "Storage",
        subtitle: "Manage app data and cache",
        action: RowAction::Notice("Storage", "Manage app data and cache"),
    },
    Row {
        section: Some("Support"),
        title: "Help & Support",
        subtitle: "Get help with the app",
        action: RowAction::Open(Screen::Help),
    },
    Row {
        section: None,
        title: "About",
        subtitle: "App version and information",
        action: RowAction::Notice("About", "App version 1.0.0"),
    },
];

/// Index of the Sign Out button, after the last row.
const SIGN_OUT: usize = ROWS.len();

#[derive(Debug, Default)]
pub struct SettingsScreen {
    selected: usize,
}

impl SettingsScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    #[must_use]
    pub const fn scope(&self) -> KeyScope {
        KeyScope::Settings
    }

    fn row_action(&self) -> RowAction {
        ROWS.get(self.selected)
            .map_or(RowAction::SignOut, |row| row.action)
    }

    pub fn handle_action(&mut self, action: Action, settings: &SettingsState) -> ViewOutcome {
        match action {
            Action::NavigateDown | Action::FocusNext => {
                self.selected = (self.selected + 1) % (SIGN_OUT + 1);
                ViewOutcome::Handled
            }
            Action::NavigateUp | Action::FocusPrevious => {
                self.selected = self.selected.checked_sub(1).unwrap_or(SIGN_OUT);
                ViewOutcome::Handled
            }
            Action::Select => match self.row_action() {
                RowAction::Open(screen) => ViewOutcome::Navigate(screen),
                RowAction::Notice(title, message) => {
                    ViewOutcome::Dialog(Dialog::notice(title, message))
                }
                RowAction::Toggle(toggle) => {
                    let mut next = settings.clone();
                    toggle.flip(&mut next);
                    ViewOutcome::SettingsChanged(next)
                }
                RowAction::SignOut => ViewOutcome::Dialog(Dialog::confirm(
                    "Sign Out",
                    "Are you sure you want to sign out?",
                    DialogButton::confirm("Sign Out", DialogIntent::SignOut).destructive(),
                )),
            },
            _ => ViewOutcome::Ignored,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, settings: &SettingsState) {
        let mut lines = Vec::new();
        for (i, row) in ROWS.iter().enumerate() {
            if let Some(section) = row.section {
                if i > 0 {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(section.to_uppercase(), theme.dimmed_style)));
            }
            let title_style = if i == self.selected {
                theme.selection_style
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let trailing = match row.action {
                RowAction::Toggle(toggle) if toggle.get(settings) => {
                    Span::styled("  [on] ", Style::default().fg(theme.accent))
                }
                RowAction::Toggle(_) => Span::styled("  [off]", theme.dimmed_style),
                _ => Span::styled("  ›", theme.dimmed_style),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", row.title), title_style),
                trailing,
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", row.subtitle),
                theme.dimmed_style,
            )));
        }

        lines.push(Line::default());
        let sign_out = if self.selected == SIGN_OUT {
            Style::default().fg(Color::Black).bg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled("  Sign Out  ", sign_out)));

        let visible = usize::from(area.height.saturating_sub(2));
        let cursor_line = self.selected * 3 + 2;
        let scroll = cursor_line.saturating_sub(visible);

        Paragraph::new(lines)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Settings ", theme.title_style)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn select_row(index: usize) -> ViewOutcome {
        let mut screen = SettingsScreen::new();
        for _ in 0..index {
            screen.handle_action(Action::NavigateDown, &SettingsState::default());
        }
        screen.handle_action(Action::Select, &SettingsState::default())
    }

    #[test_case(0, Screen::Profile ; "profile row")]
    #[test_case(9, Screen::Help ; "help row")]
    fn test_rows_that_navigate(index: usize, screen: Screen) {
        assert_eq!(select_row(index), ViewOutcome::Navigate(screen));
    }

    #[test]
    fn test_toggle_flips_one_setting() {
        let ViewOutcome::SettingsChanged(next) = select_row(4) else {
            panic!("expected settings change");
        };
        assert!(next.dark_mode);
        assert_eq!(
            next,
            SettingsState {
                dark_mode: true,
                ..SettingsState::default()
            }
        );
    }

    #[test]
    fn test_about_shows_version() {
        let ViewOutcome::Dialog(dialog) = select_row(10) else {
            panic!("expected dialog");
        };
        assert_eq!(dialog.message(), "App version 1.0.0");
    }

    #[test]
    fn test_sign_out_needs_confirmation() {
        let mut screen = SettingsScreen::new();
        screen.handle_action(Action::NavigateUp, &SettingsState::default());
        let ViewOutcome::Dialog(dialog) =
            screen.handle_action(Action::Select, &SettingsState::default())
        else {
            panic!("expected confirmation");
        };
        assert_eq!(dialog.title(), "Sign Out");
        assert_eq!(
            dialog.buttons()[1].intent,
            Some(DialogIntent::SignOut)
        );
    }
}
