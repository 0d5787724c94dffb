use crate::domain::keybinding::{KeyScope, Keybind};
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Badge text for the scope currently receiving keys.
#[must_use]
pub const fn scope_label(scope: KeyScope) -> &'static str {
    match scope {
        KeyScope::Global => "MENU",
        KeyScope::Dashboard => "HOME",
        KeyScope::Calling => "CALLING",
        KeyScope::CallForm => "DETAILS",
        KeyScope::Contacts => "CONTACTS",
        KeyScope::Notifications => "INBOX",
        KeyScope::Profile => "PROFILE",
        KeyScope::Settings => "SETTINGS",
    }
}

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub scope_indicator: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: theme.badge_style,
            key_style: theme.key_hint_style,
            scope_indicator: theme
                .key_hint_style
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            scope_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    scope: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            scope: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn scope(mut self, label: &'a str) -> Self {
        self.scope = Some(label);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }
        if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
            s.push_str("S-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab | KeyCode::BackTab => s.push_str("Tab"),
            KeyCode::Backspace => s.push_str("Bksp"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::Left => s.push('←'),
            KeyCode::Right => s.push('→'),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            _ => {
                let _ = write!(s, "{:?}", key.code);
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        if let Some(scope) = self.scope {
            spans.push(Span::styled(format!(" {scope} "), self.style.scope_indicator));
            spans.push(Span::raw(" "));
        }

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let line_area = Rect::new(area.x, area.y, area.width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(line_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;

    #[test]
    fn test_format_key() {
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(FooterBar::format_key(&ctrl_s), "C-s");
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(FooterBar::format_key(&space), "Space");
        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(FooterBar::format_key(&f1), "F1");
    }

    #[test]
    fn test_hidden_bindings_skipped() {
        let binds = vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
                Action::StartCall,
                "Call",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
                Action::NavigateUp,
                "Up",
            )
            .hidden(),
        ];
        let footer = FooterBar::new(&binds).scope("CALLING");
        let text: String = footer
            .build_left_spans()
            .iter()
            .map(|s| s.content.to_string())
            .collect();

        assert!(text.contains("CALLING"));
        assert!(text.contains("Call"));
        assert!(!text.contains("Up"));
    }

    #[test]
    fn test_render_uses_full_row() {
        let binds = vec![Keybind::new(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit,
            "Quit",
        )];
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        FooterBar::new(&binds).scope("HOME").render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(row, " HOME   Quit  q     ");
    }
}
