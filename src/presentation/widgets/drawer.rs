//! Slide-out navigation drawer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{DEFAULT_FULL_NAME, UserProfile, initials_of};
use crate::domain::keybinding::Action;
use crate::domain::navigation::{NavTarget, Screen};
use crate::presentation::theme::Theme;

pub const DRAWER_WIDTH: u16 = 32;
const UNKNOWN_USER: &str = "Unknown User";
const UNKNOWN_ROLE: &str = "Unknown Role";

/// Avatar initials: "U" while the name is missing or still the placeholder.
#[must_use]
pub fn drawer_initials(full_name: &str) -> String {
    let name = full_name.trim();
    if name.is_empty() || name == DEFAULT_FULL_NAME || name == UNKNOWN_USER {
        return "U".to_string();
    }
    let initials = initials_of(name);
    if initials.is_empty() {
        "U".to_string()
    } else {
        initials
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAction {
    Navigate(NavTarget),
    Close,
}

/// Who is shown at the top of the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerIdentity {
    Loading,
    Known { name: String, role: String },
    Unknown,
}

#[derive(Debug, Clone)]
pub struct DrawerState {
    open: bool,
    selected: usize,
    identity: DrawerIdentity,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            selected: 0,
            identity: DrawerIdentity::Unknown,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens with the cursor on `current` and the identity loading.
    pub fn open(&mut self, current: Screen) {
        self.open = true;
        self.identity = DrawerIdentity::Loading;
        self.selected = NavTarget::DRAWER
            .iter()
            .position(|t| *t == NavTarget::Screen(current))
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn identity(&self) -> &DrawerIdentity {
        &self.identity
    }

    pub fn set_profile(&mut self, profile: &UserProfile) {
        self.identity = DrawerIdentity::Known {
            name: profile.full_name().to_string(),
            role: profile.role().to_string(),
        };
    }

    pub fn set_unknown(&mut self) {
        self.identity = DrawerIdentity::Unknown;
    }

    #[must_use]
    pub const fn selected(&self) -> NavTarget {
        NavTarget::DRAWER[self.selected]
    }

    pub fn handle_action(&mut self, action: Action) -> Option<DrawerAction> {
        match action {
            Action::NavigateDown | Action::FocusNext => {
                self.selected = (self.selected + 1) % NavTarget::DRAWER.len();
                None
            }
            Action::NavigateUp | Action::FocusPrevious => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(NavTarget::DRAWER.len() - 1);
                None
            }
            Action::Select | Action::NavigateRight => Some(DrawerAction::Navigate(self.selected())),
            Action::Cancel | Action::ToggleDrawer | Action::NavigateLeft => Some(DrawerAction::Close),
            _ => None,
        }
    }
}

pub struct Drawer<'a> {
    theme: &'a Theme,
}

impl<'a> Drawer<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for Drawer<'_> {
    type State = DrawerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = DRAWER_WIDTH.min(area.width);
        let drawer_area = Rect::new(area.x, area.y, width, area.height);
        Clear.render(drawer_area, buf);

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(drawer_area);
        block.render(drawer_area, buf);

        let [identity_area, list_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(inner);

        let (initials, name, role) = match &state.identity {
            DrawerIdentity::Loading => ("…".to_string(), "Loading...".to_string(), String::new()),
            DrawerIdentity::Known { name, role } => {
                (drawer_initials(name), name.clone(), role.clone())
            }
            DrawerIdentity::Unknown => (
                "U".to_string(),
                UNKNOWN_USER.to_string(),
                UNKNOWN_ROLE.to_string(),
            ),
        };

        Paragraph::new(vec![
            Line::from(Span::styled(format!(" {initials} "), self.theme.badge_style)),
            Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(role, self.theme.dimmed_style)),
        ])
        .render(identity_area, buf);

        let items: Vec<ListItem> = NavTarget::DRAWER
            .iter()
            .map(|target| {
                let style = if *target == NavTarget::Logout {
                    Style::default().fg(ratatui::style::Color::Red)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(format!("  {}", target.label()), style)))
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(state.selected));
        StatefulWidget::render(
            List::new(items).highlight_style(self.theme.selection_style),
            list_area,
            buf,
            &mut list_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("John Doe", "U" ; "placeholder name")]
    #[test_case("", "U" ; "empty name")]
    #[test_case("Priya Nair", "PN" ; "two words")]
    #[test_case("ada lovelace byron", "AL" ; "first two words upper-cased")]
    fn test_drawer_initials(name: &str, expected: &str) {
        assert_eq!(drawer_initials(name), expected);
    }

    #[test]
    fn test_open_selects_current_screen() {
        let mut drawer = DrawerState::new();
        drawer.open(Screen::Contacts);
        assert!(drawer.is_open());
        assert_eq!(drawer.selected(), NavTarget::Screen(Screen::Contacts));
        assert_eq!(drawer.identity(), &DrawerIdentity::Loading);
    }

    #[test]
    fn test_navigation_wraps_to_logout() {
        let mut drawer = DrawerState::new();
        drawer.open(Screen::Dashboard);
        drawer.handle_action(Action::NavigateUp);
        assert_eq!(drawer.selected(), NavTarget::Logout);
        assert_eq!(
            drawer.handle_action(Action::Select),
            Some(DrawerAction::Navigate(NavTarget::Logout))
        );
        assert_eq!(drawer.handle_action(Action::Cancel), Some(DrawerAction::Close));
    }
}
