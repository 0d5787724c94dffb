//! Contact directory with fuzzy search.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::outcome::ViewOutcome;
use crate::domain::entities::ContactRecord;
use crate::domain::keybinding::{Action, KeyScope};
use crate::infrastructure::ContactSearch;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

pub struct ContactsScreen {
    contacts: Vec<ContactRecord>,
    search: ContactSearch,
    query: TextInput,
    searching: bool,
    ranked: Vec<usize>,
    selected: usize,
    detail_open: bool,
}

impl ContactsScreen {
    #[must_use]
    pub fn new(contacts: Vec<ContactRecord>, theme: &Theme) -> Self {
        let ranked = (0..contacts.len()).collect();
        Self {
            contacts,
            search: ContactSearch::new(),
            query: TextInput::new("Search")
                .placeholder("Search contacts...")
                .accent(theme.accent),
            searching: false,
            ranked,
            selected: 0,
            detail_open: false,
        }
    }

    #[must_use]
    pub const fn scope(&self) -> KeyScope {
        KeyScope::Contacts
    }

    #[must_use]
    pub const fn captures_text(&self) -> bool {
        self.searching
    }

    #[must_use]
    pub fn selected_contact(&self) -> Option<&ContactRecord> {
        self.ranked
            .get(self.selected)
            .and_then(|index| self.contacts.get(*index))
    }

    /// Contacts matching the query, best first.
    #[must_use]
    pub fn matches(&self) -> Vec<&ContactRecord> {
        self.ranked
            .iter()
            .filter_map(|index| self.contacts.get(*index))
            .collect()
    }

    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    fn rerank(&mut self) {
        self.ranked = self.search.rank(&self.contacts, self.query.value());
        self.selected = 0;
    }

    pub fn handle_action(&mut self, action: Action) -> ViewOutcome {
        match action {
            Action::Search => {
                self.searching = true;
                self.query.set_focused(true);
                ViewOutcome::Handled
            }
            Action::NavigateDown | Action::FocusNext => {
                if !self.ranked.is_empty() {
                    self.selected = (self.selected + 1) % self.ranked.len();
                }
                ViewOutcome::Handled
            }
            Action::NavigateUp | Action::FocusPrevious => {
                if !self.ranked.is_empty() {
                    self.selected = self
                        .selected
                        .checked_sub(1)
                        .unwrap_or(self.ranked.len() - 1);
                }
                ViewOutcome::Handled
            }
            Action::Select => {
                self.detail_open = !self.detail_open && self.selected_contact().is_some();
                ViewOutcome::Handled
            }
            Action::DialContact => self
                .selected_contact()
                .map_or(ViewOutcome::Handled, |c| ViewOutcome::Dial(c.dial_uri())),
            Action::EmailContact => self
                .selected_contact()
                .map_or(ViewOutcome::Handled, |c| ViewOutcome::Email(c.mailto_uri())),
            Action::Cancel => {
                if self.detail_open {
                    self.detail_open = false;
                    ViewOutcome::Handled
                } else if !self.query.value().is_empty() {
                    self.query.clear();
                    self.rerank();
                    ViewOutcome::Handled
                } else {
                    ViewOutcome::Ignored
                }
            }
            _ => ViewOutcome::Ignored,
        }
    }

    /// Keys while the search box has focus.
    pub fn handle_text_key(&mut self, key: KeyEvent) -> ViewOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.searching = false;
                self.query.set_focused(false);
            }
            KeyCode::Up => return self.handle_action(Action::NavigateUp),
            KeyCode::Down => return self.handle_action(Action::NavigateDown),
            _ => {
                if self.query.handle_key(key) {
                    self.rerank();
                }
            }
        }
        ViewOutcome::Handled
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [search_area, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);
        (&self.query).render(search_area, buf);

        let [list_area, detail_area] = if self.detail_open {
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body)
        } else {
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(0)]).areas(body)
        };

        let title = format!(" Contacts ({}) ", self.ranked.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, theme.title_style));

        if self.ranked.is_empty() {
            Paragraph::new("No contacts found")
                .style(theme.dimmed_style)
                .block(block)
                .render(list_area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .matches()
            .into_iter()
            .map(|contact| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!(" {} ", contact.initials()), theme.badge_style),
                        Span::raw(" "),
                        Span::styled(
                            contact.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", contact.title_line()),
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

        if self.detail_open
            && let Some(contact) = self.selected_contact()
        {
            render_detail(contact, detail_area, buf, theme);
        }
    }
}

fn render_detail(contact: &ContactRecord, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let label = |text: &'static str| Span::styled(format!("{text:<12}"), theme.dimmed_style);
    let lines = vec![
        Line::from(Span::styled(contact.name.clone(), theme.title_style)),
        Line::from(Span::styled(contact.title_line(), theme.dimmed_style)),
        Line::default(),
        Line::from(vec![label("Phone"), Span::raw(contact.phone.clone())]),
        Line::from(vec![label("Email"), Span::raw(contact.email.clone())]),
        Line::from(vec![label("Company"), Span::raw(contact.company.clone())]),
        Line::from(vec![label("Address"), Span::raw(contact.address.clone())]),
        Line::default(),
        Line::from(Span::styled("d: call   e: email", theme.dimmed_style)),
    ];
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent)),
        )
        .render(area, buf);
}
